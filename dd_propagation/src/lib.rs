//! # dd_propagation
//!
//! Datadog header propagation for OpenTelemetry span contexts.
//!
//! Datadog tracers carry span context in three textual headers with 64-bit
//! decimal identifiers, while OpenTelemetry uses 128-bit (trace) and 64-bit
//! (span) hex identifiers. This crate converts between the two so a pipeline
//! built on the OpenTelemetry propagation API can interoperate with backends
//! expecting Datadog headers, without adopting Datadog's identifier format
//! internally.
//!
//! ## Quick start
//!
//! ```
//! use std::collections::HashMap;
//! use opentelemetry::propagation::TextMapPropagator;
//! use dd_propagation::DatadogPropagator;
//!
//! let propagator = DatadogPropagator::new();
//!
//! // Replace the HashMap with the headers of an incoming request.
//! let mut headers = HashMap::new();
//! headers.insert("x-datadog-trace-id".to_string(), "8778793551513751462".to_string());
//! headers.insert("x-datadog-parent-id".to_string(), "6023947403358210776".to_string());
//! headers.insert("x-datadog-sampling-priority".to_string(), "1".to_string());
//!
//! let cx = propagator.extract(&headers);
//!
//! // ... and inject it into the headers of an outgoing request.
//! let mut outgoing = HashMap::new();
//! propagator.inject_context(&cx, &mut outgoing);
//! assert_eq!(outgoing.len(), 3);
//! ```
//!
//! Malformed headers never produce an error at the propagation seam: the
//! extracted context is discarded and the ambient context is left unchanged,
//! matching how the surrounding framework treats foreign or corrupted
//! headers. Injection of an invalid span context writes nothing.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod codec;
pub mod error;
pub mod fields;
pub mod propagator;

pub use error::ExtractError;
pub use fields::{PARENT_ID_HEADER, SAMPLING_PRIORITY_HEADER, TRACE_HEADERS, TRACE_ID_HEADER};
pub use propagator::DatadogPropagator;
