//! Datadog propagation header names.
//!
//! These are fixed configuration values; the wire format never changes them
//! at runtime.

/// Header carrying the trace ID as an unsigned 64-bit decimal value.
pub const TRACE_ID_HEADER: &str = "x-datadog-trace-id";

/// Header carrying the parent span ID as an unsigned 64-bit decimal value.
pub const PARENT_ID_HEADER: &str = "x-datadog-parent-id";

/// Header carrying the sampling priority (`"1"` sampled, `"0"` not sampled).
pub const SAMPLING_PRIORITY_HEADER: &str = "x-datadog-sampling-priority";

/// The ordered list of headers read by extraction and written by injection.
pub const TRACE_HEADERS: [&str; 3] = [
    TRACE_ID_HEADER,
    PARENT_ID_HEADER,
    SAMPLING_PRIORITY_HEADER,
];
