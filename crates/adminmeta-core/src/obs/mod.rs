//! Observability: resolution diagnostics and the sink they flow through.
//!
//! The resolver never fails on bad customization; everything it had to
//! guess or skip is reported here instead.

mod diagnostic;
mod sink;

pub use diagnostic::{Diagnostic, DiagnosticKind, FallbackReason, Level};
pub use sink::DiagnosticSink;

pub(crate) use sink::emit;
