//! Toast-backed [`Notifier`] for the submission handler.
//!
//! Toasts auto-dismiss after [`TOAST_TTL_MS`] in the browser; SSR builds only
//! queue them.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;
use registration::Notifier;

use crate::state::toast::{ToastKind, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_TTL_MS;

#[derive(Clone, Copy, Debug)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts }
    }

    fn show(&self, kind: ToastKind, message: &str) {
        let Some(id) = self.toasts.try_update(|s| s.push(kind, message)) else {
            leptos::logging::warn!("toast dropped after unmount: {message}");
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toasts;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
                toasts.try_update(|s| s.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        self.show(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.show(ToastKind::Error, message);
    }
}
