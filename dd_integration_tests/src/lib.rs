//! Shared helpers for the `dd_propagation` end-to-end tests.

use opentelemetry::{
    testing::trace::TestSpan,
    trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState},
    Context,
};

/// Build a context carrying a remote span context, shaped the way an
/// extracted upstream context would look.
pub fn remote_context(trace_id: u128, span_id: u64, trace_flags: TraceFlags) -> Context {
    Context::current_with_span(TestSpan(SpanContext::new(
        TraceId::from_u128(trace_id),
        SpanId::from_u64(span_id),
        trace_flags,
        true,
        TraceState::default(),
    )))
}
