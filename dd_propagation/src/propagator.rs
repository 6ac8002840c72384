//! Span context <-> Datadog header conversion.

use opentelemetry::{
    propagation::{text_map_propagator::FieldIter, Extractor, Injector, TextMapPropagator},
    trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState},
    Context,
};
use tracing::debug;

use crate::codec;
use crate::error::ExtractError;
use crate::fields::{PARENT_ID_HEADER, SAMPLING_PRIORITY_HEADER, TRACE_ID_HEADER, TRACE_HEADERS};

/// Propagates span contexts in Datadog header format.
///
/// Example Datadog headers:
///
/// ```text
/// x-datadog-trace-id: 16701352862047361693
/// x-datadog-parent-id: 2939011537882399028
/// x-datadog-sampling-priority: 1
/// ```
///
/// Trace IDs are narrowed to their low 64 bits on injection, since Datadog
/// identifiers are 64-bit. Extraction zero-extends them back to 128 bits.
///
/// ## Examples
/// ```
/// use opentelemetry::global;
/// use dd_propagation::DatadogPropagator;
///
/// global::set_text_map_propagator(DatadogPropagator::new());
/// ```
#[derive(Clone, Debug)]
pub struct DatadogPropagator {
    fields: [String; 3],
}

impl Default for DatadogPropagator {
    fn default() -> Self {
        Self::new()
    }
}

impl DatadogPropagator {
    /// Create a Datadog propagator.
    pub fn new() -> Self {
        DatadogPropagator {
            fields: TRACE_HEADERS.map(String::from),
        }
    }

    fn extract_span_context(
        &self,
        extractor: &dyn Extractor,
    ) -> Result<SpanContext, ExtractError> {
        build_span_context(
            extractor.get(TRACE_ID_HEADER).unwrap_or(""),
            extractor.get(PARENT_ID_HEADER).unwrap_or(""),
            extractor.get(SAMPLING_PRIORITY_HEADER).unwrap_or(""),
        )
    }
}

/// Build a span context from the three raw Datadog header values.
///
/// Validation is strictly ordered (trace ID, span ID, sampling priority) and
/// the first failure wins. Callers must discard the result whenever an error
/// is returned or the context fails its own validity check.
pub fn build_span_context(
    trace_id: &str,
    parent_id: &str,
    sampling: &str,
) -> Result<SpanContext, ExtractError> {
    let trace_hex = codec::decode_id(trace_id).ok_or(ExtractError::MalformedTraceId)?;
    let trace_id = parse_trace_id(&trace_hex)?;

    let span_hex = codec::decode_id(parent_id).ok_or(ExtractError::MalformedSpanId)?;
    let span_id = parse_span_id(&span_hex)?;

    let sampled =
        codec::decode_sampling(sampling).ok_or(ExtractError::InvalidSamplingPriorityHeader)?;
    let trace_flags = if sampled {
        TraceFlags::SAMPLED
    } else {
        TraceFlags::default()
    };

    Ok(SpanContext::new(
        trace_id,
        span_id,
        trace_flags,
        true,
        TraceState::default(),
    ))
}

/// Zero-extend a decoded hex value to a full 128-bit trace ID.
fn parse_trace_id(hex: &str) -> Result<TraceId, ExtractError> {
    let padded = format!("{hex:0>32}");
    let trace_id = TraceId::from_hex(&padded).map_err(|_| ExtractError::InvalidTraceIdHeader)?;
    // An all-zero trace ID is not a usable identifier.
    if trace_id == TraceId::INVALID {
        return Err(ExtractError::InvalidTraceIdHeader);
    }
    Ok(trace_id)
}

/// Zero-extend a decoded hex value to a full 64-bit span ID.
fn parse_span_id(hex: &str) -> Result<SpanId, ExtractError> {
    let padded = format!("{hex:0>16}");
    let span_id = SpanId::from_hex(&padded).map_err(|_| ExtractError::InvalidSpanIdHeader)?;
    if span_id == SpanId::INVALID {
        return Err(ExtractError::InvalidSpanIdHeader);
    }
    Ok(span_id)
}

impl TextMapPropagator for DatadogPropagator {
    fn inject_context(&self, cx: &Context, injector: &mut dyn Injector) {
        let span = cx.span();
        let span_context = span.span_context();
        if !span_context.is_valid() {
            return;
        }

        // Encode both identifiers before writing anything so an unencodable
        // context never produces a partial set of headers.
        let trace_id = codec::encode_id(&span_context.trace_id().to_string());
        let parent_id = codec::encode_id(&span_context.span_id().to_string());
        let (Some(trace_id), Some(parent_id)) = (trace_id, parent_id) else {
            return;
        };

        injector.set(TRACE_ID_HEADER, trace_id);
        injector.set(PARENT_ID_HEADER, parent_id);
        injector.set(
            SAMPLING_PRIORITY_HEADER,
            codec::encode_sampling(span_context.is_sampled()).to_string(),
        );
    }

    fn extract_with_context(&self, cx: &Context, extractor: &dyn Extractor) -> Context {
        match self.extract_span_context(extractor) {
            Ok(span_context) if span_context.is_valid() => {
                cx.with_remote_span_context(span_context)
            }
            Ok(_) => cx.clone(),
            Err(err) => {
                debug!(error = %err, "discarding Datadog trace headers");
                cx.clone()
            }
        }
    }

    fn fields(&self) -> FieldIter<'_> {
        FieldIter::new(self.fields.as_ref())
    }
}
