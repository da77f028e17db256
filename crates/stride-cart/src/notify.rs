//! Notification surface seam.

/// User-facing notification sink.
///
/// Fire-and-forget; the store never waits on or inspects the outcome.
pub trait Notifier: Send + Sync {
    /// Show a message to the user.
    fn notify(&self, message: &str);
}

/// Notifier that emits through the `tracing` facade.
///
/// Useful for headless deployments and development, where the rendering
/// layer's toast surface is not wired up.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Create a new notifier.
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!(notification = %message, "user notification");
    }
}
