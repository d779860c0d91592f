//! Diagnostics channel back to the host process.
//!
//! A Modelica tool exposes two services to external objects: printing a
//! message to the simulation log and raising a fatal error. The registry only
//! talks to the host through [`HostDiagnostics`], so it can run inside a tool,
//! from the CLI, or in tests.

use std::cell::RefCell;
use std::rc::Rc;

/// Receiver of diagnostics emitted while external objects are constructed.
pub trait HostDiagnostics {
    /// Informational message for the simulation log.
    fn message(&mut self, text: &str);

    /// Fatal error; model construction cannot continue.
    fn error(&mut self, text: &str);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHost;

impl HostDiagnostics for TracingHost {
    fn message(&mut self, text: &str) {
        tracing::info!(target: "buildings_fmu::host", "{text}");
    }

    fn error(&mut self, text: &str) {
        tracing::error!(target: "buildings_fmu::host", "{text}");
    }
}

#[derive(Debug, Default)]
struct HostLog {
    messages: Vec<String>,
    errors: Vec<String>,
}

/// Keeps every diagnostic in memory.
///
/// Clones share the same log, so a test can hand one clone to a registry and
/// inspect the other.
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    log: Rc<RefCell<HostLog>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.log.borrow().messages.clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.log.borrow().errors.clone()
    }
}

impl HostDiagnostics for RecordingHost {
    fn message(&mut self, text: &str) {
        self.log.borrow_mut().messages.push(text.to_string());
    }

    fn error(&mut self, text: &str) {
        self.log.borrow_mut().errors.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_host_shares_log_between_clones() {
        let host = RecordingHost::new();
        let mut sink = host.clone();
        sink.message("hello");
        sink.error("boom");
        assert_eq!(host.messages(), vec!["hello".to_string()]);
        assert_eq!(host.errors(), vec!["boom".to_string()]);
    }
}
