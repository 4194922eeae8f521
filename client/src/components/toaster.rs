//! Fixed-position stack rendering queued toasts.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Toast stack bound to the `RwSignal<ToastState>` context.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = format!("toast {}", toast.kind.css_modifier());
                        view! {
                            <div class=class>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    title="Dismiss"
                                    on:click=move |_| {
                                        toasts.update(|s| {
                                            s.dismiss(id);
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
