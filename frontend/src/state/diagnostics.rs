use crate::api::{DataResource, ResourceLoadFailure};
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub resource: DataResource,
    pub error: ResourceLoadFailure,
}

impl DiagnosticEvent {
    pub fn load_failed(error: ResourceLoadFailure) -> Self {
        Self {
            resource: error.resource(),
            error,
        }
    }
}

/// Receives load failures. Emitting must not block or fail.
pub trait DiagnosticSink {
    fn emit(&self, event: DiagnosticEvent);
}

pub struct ConsoleDiagnostics;

impl DiagnosticSink for ConsoleDiagnostics {
    fn emit(&self, event: DiagnosticEvent) {
        log::error!("[{}] {}", event.resource.file_name(), event.error);
    }
}

#[derive(Clone)]
pub struct Diagnostics(Rc<dyn DiagnosticSink>);

impl Diagnostics {
    pub fn new(sink: impl DiagnosticSink + 'static) -> Self {
        Self(Rc::new(sink))
    }

    pub fn console() -> Self {
        Self::new(ConsoleDiagnostics)
    }

    pub fn emit(&self, event: DiagnosticEvent) {
        self.0.emit(event);
    }
}

pub fn use_diagnostics() -> Diagnostics {
    match use_context::<Diagnostics>() {
        Some(diagnostics) => diagnostics,
        None => {
            let diagnostics = Diagnostics::console();
            provide_context(diagnostics.clone());
            diagnostics
        }
    }
}
