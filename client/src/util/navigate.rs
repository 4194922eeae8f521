//! Router-backed [`Navigator`] for the submission handler.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

use leptos_router::NavigateOptions;
use registration::Navigator;

/// Wraps the closure returned by `leptos_router::hooks::use_navigate`.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}
