//! Registration page: name, email, password and a profile picture.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the `RegistrationDraft` for its mount lifetime and hands
//! submits to `registration::SubmissionHandler`, wired to `fetch`, the toast
//! stack and the router. Browser-only handles (`web_sys::File`, object URLs)
//! stay in local-storage signals and stored values.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
use registration::{FormPhase, PLACEHOLDER_AVATAR_URL, RegistrationDraft};
#[cfg(feature = "hydrate")]
use registration::FieldValue;

use crate::state::toast::ToastState;

/// File handle the draft holds for the picked profile image.
#[cfg(feature = "hydrate")]
pub type PickedFile = web_sys::File;

/// SSR stand-in; no file can be picked outside the browser.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq)]
pub struct PickedFile;

fn submit_label(phase: FormPhase) -> &'static str {
    match phase {
        FormPhase::Submitting => "Registering...",
        FormPhase::Editing | FormPhase::Registered => "Register",
    }
}

fn submit_disabled(phase: FormPhase) -> bool {
    phase != FormPhase::Editing
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let draft = RwSignal::new_local(RegistrationDraft::<PickedFile>::default());
    let phase = RwSignal::new(FormPhase::Editing);

    #[cfg(feature = "hydrate")]
    let preview = StoredValue::new_local(registration::ImagePreview::new(crate::net::object_url::ObjectUrls));

    #[cfg(feature = "hydrate")]
    let handler = StoredValue::new_local(std::rc::Rc::new(registration::SubmissionHandler::new(
        crate::net::api::api_config(),
        crate::net::api::FetchTransport,
        crate::util::notify::ToastNotifier::new(toasts),
        crate::util::navigate::RouterNavigator::new(leptos_router::hooks::use_navigate()),
    )));
    #[cfg(not(feature = "hydrate"))]
    let _ = toasts;

    let avatar_src = move || {
        #[cfg(feature = "hydrate")]
        {
            let profile = draft.with(|d| d.profile.clone());
            preview
                .try_update_value(|p| p.resolve(profile.as_ref()))
                .unwrap_or_else(|| PLACEHOLDER_AVATAR_URL.to_owned())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            PLACEHOLDER_AVATAR_URL.to_owned()
        }
    };

    // Inputs are routed by their `name` attribute, which doubles as the
    // multipart part name.
    let on_field_input = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let value = if input.type_() == "file" {
                let picked: Vec<PickedFile> = input
                    .files()
                    .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
                    .unwrap_or_default();
                FieldValue::Files(picked)
            } else {
                FieldValue::Text(input.value())
            };
            let name = input.name();
            draft.update(|d| {
                if let Err(e) = d.apply_input(&name, value) {
                    leptos::logging::warn!("{e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(handler) = handler.try_get_value() else {
                return;
            };
            let Some(snapshot) = draft.try_get_untracked() else {
                return;
            };
            // Added guard: `begin` refuses while `Submitting`, so a double click sends one request.
            let mut current = phase.get_untracked();
            let begun = handler.begin(&snapshot, &mut current);
            phase.set(current);
            let Ok(form) = begun else {
                return;
            };

            let result = handler.send(form).await;

            // The user may have kept typing; settle against the live draft.
            let Some(mut live) = draft.try_get_untracked() else {
                return;
            };
            let outcome = handler.finish(result, &mut live, &mut current);
            draft.try_set(live);
            phase.try_set(current);
            handler.follow_up(&outcome);
        });
    };

    view! {
        <section class="register-page">
            <div class="register-card">
                <h1>"Register"</h1>
                <form class="register-form" on:submit=on_submit>
                    <label for="profile" class="register-avatar">
                        <img src=avatar_src alt="Profile" class="register-avatar__image"/>
                        <input
                            type="file"
                            id="profile"
                            name="profile"
                            class="register-avatar__input"
                            accept="image/*"
                            on:change=on_field_input
                        />
                    </label>

                    <label for="name" class="register-label">"Name"</label>
                    <input
                        class="register-input"
                        type="text"
                        id="name"
                        name="name"
                        placeholder="Enter your name"
                        required
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=on_field_input
                    />

                    <label for="email" class="register-label">"Email"</label>
                    <input
                        class="register-input"
                        type="email"
                        id="email"
                        name="email"
                        placeholder="Enter your email"
                        required
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=on_field_input
                    />

                    <label for="password" class="register-label">"Password"</label>
                    <input
                        class="register-input"
                        type="password"
                        id="password"
                        name="password"
                        placeholder="••••••••"
                        required
                        prop:value=move || draft.with(|d| d.password.clone())
                        on:input=on_field_input
                    />

                    <button class="register-button" type="submit" disabled=move || submit_disabled(phase.get())>
                        {move || submit_label(phase.get())}
                    </button>

                    <p class="register-footer">
                        "Already registered? "
                        <A href="/login" attr:class="register-footer__link">
                            "Login Here"
                        </A>
                    </p>
                </form>
            </div>
        </section>
    }
}
