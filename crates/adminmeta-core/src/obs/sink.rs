//! Diagnostic sink boundary.
//!
//! Resolver passes never log directly; every diagnostic goes through
//! [`emit`], which mirrors it to `tracing` and hands it to the sink.
use crate::obs::{Diagnostic, Level};

///
/// DiagnosticSink
///

pub trait DiagnosticSink {
    fn record(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

pub(crate) fn emit(sink: &mut dyn DiagnosticSink, diagnostic: Diagnostic) {
    match diagnostic.level() {
        Level::Info => tracing::info!(entity = %diagnostic.entity, "{diagnostic}"),
        Level::Warn => tracing::warn!(entity = %diagnostic.entity, "{diagnostic}"),
    }

    sink.record(diagnostic);
}
