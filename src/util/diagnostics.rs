//! Diagnostic channel for network and loader failures.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP wrapper reports every failure here before returning it, and the
//! history loader reports what it absorbs. The browser build writes to the
//! console through `leptos::logging`; the CLI plugs in a `tracing` sink.

/// Sink for failure reports.
pub trait Diagnostics {
    /// Report a failure. `scope` names the layer (`"request"`, `"history"`).
    fn warn(&self, scope: &str, message: &str);
}

/// Default sink: browser console under WASM, stderr natively.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn warn(&self, scope: &str, message: &str) {
        leptos::logging::warn!("{scope}: {message}");
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for std::rc::Rc<D> {
    fn warn(&self, scope: &str, message: &str) {
        (**self).warn(scope, message);
    }
}
