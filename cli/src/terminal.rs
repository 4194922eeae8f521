//! Terminal stand-ins for toasts and router navigation.

use registration::{Navigator, Notifier};

#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        println!("✔ {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("✖ {message}");
    }
}

/// Prints where the user should continue instead of switching routes.
#[derive(Clone, Debug)]
pub struct TerminalNavigator {
    base_url: String,
}

impl TerminalNavigator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(route = path, "registration complete");
        println!("Continue at {}{path}", self.base_url);
    }
}
