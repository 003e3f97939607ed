use rootscope_core::{Iteration, Observer};

/// Emits one `debug` event per iteration through [`tracing`].
///
/// The label identifies the run in the event fields, typically the method
/// name. Install a subscriber to see the output.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    label: String,
}

impl TracingObserver {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Observer<Iteration> for TracingObserver {
    fn observe(&mut self, event: &Iteration) {
        tracing::debug!(
            method = %self.label,
            index = event.index,
            x = event.x,
            fx = event.fx,
            residual = event.residual(),
            "iteration"
        );
    }
}
