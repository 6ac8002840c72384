//! Extraction error taxonomy.

/// Reasons a set of Datadog headers fails to yield a span context.
///
/// Every variant means "malformed input"; there is no I/O involved and
/// nothing to retry. Extraction errors never reach the propagation
/// framework, they only decide whether the incoming context is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// The trace ID header is not an unsigned 64-bit decimal value.
    #[error("cannot parse Datadog trace ID as 64bit unsigned int from header")]
    MalformedTraceId,

    /// The parent ID header is not an unsigned 64-bit decimal value.
    #[error("cannot parse Datadog span ID as 64bit unsigned int from header")]
    MalformedSpanId,

    /// The trace ID parsed but does not form a usable trace identifier.
    #[error("invalid Datadog trace ID header found")]
    InvalidTraceIdHeader,

    /// The parent ID parsed but does not form a usable span identifier.
    #[error("invalid Datadog span ID header found")]
    InvalidSpanIdHeader,

    /// The sampling priority header is not an integer.
    #[error("invalid Datadog sampling priority header found")]
    InvalidSamplingPriorityHeader,
}
