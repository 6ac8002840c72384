//! Identifier and sampling codecs for the Datadog wire format.
//!
//! Datadog identifiers are 64-bit unsigned integers written as decimal text,
//! while OpenTelemetry identifiers are lower-hex strings (32 characters for a
//! trace ID, 16 for a span ID). Converting a 128-bit trace ID narrows it to
//! its low 64 bits; that loss is inherent to the Datadog format.

/// Wire value for a sampled trace.
pub const SAMPLED: &str = "1";

/// Wire value for an unsampled trace.
pub const NOT_SAMPLED: &str = "0";

/// Encode a hex identifier into its Datadog decimal form.
///
/// Identifiers shorter than 16 hex characters carry less than 64 bits and
/// cannot be represented; encoding them yields `None`, which callers treat as
/// "nothing to write". For identifiers longer than 16 characters only the
/// trailing 16 (the low 64 bits) are significant, e.g. the B3-style
/// `b810dba29803ee61e7c71ff0c2c95a9d` encodes the same as
/// `e7c71ff0c2c95a9d`: `16701352862047361693`.
pub fn encode_id(hex_id: &str) -> Option<String> {
    if hex_id.len() < 16 || !hex_id.is_ascii() {
        return None;
    }
    let low = &hex_id[hex_id.len() - 16..];
    let value = u64::from_str_radix(low, 16).ok()?;
    Some(value.to_string())
}

/// Decode a Datadog decimal identifier into lower-hex form.
///
/// The result carries no fixed width: leading zeros lost in the decimal
/// representation are not reintroduced here, so `"123456789"` decodes to
/// `"75bcd15"`. Padding to the 32- or 16-character native width is the
/// extractor's responsibility. Anything that does not parse as an unsigned
/// 64-bit integer, including the empty string, yields `None` and signals a
/// corrupted or foreign header rather than an absent one.
pub fn decode_id(decimal: &str) -> Option<String> {
    let value = decimal.parse::<u64>().ok()?;
    Some(format!("{value:x}"))
}

/// Encode a sampling decision as the Datadog priority flag.
pub fn encode_sampling(sampled: bool) -> &'static str {
    if sampled {
        SAMPLED
    } else {
        NOT_SAMPLED
    }
}

/// Decode a Datadog sampling priority value.
///
/// Datadog tracers accept any integer here: values >= 1 mean the trace is
/// sampled, values <= 0 mean it is not. An absent or empty priority header
/// means the trace is simply unsampled, so the empty string decodes like
/// `"0"`. Anything else that is not an integer yields `None`.
pub fn decode_sampling(value: &str) -> Option<bool> {
    if value.is_empty() {
        return Some(false);
    }
    let priority = value.parse::<i64>().ok()?;
    Some(priority >= 1)
}
