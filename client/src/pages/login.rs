//! Landing route reached after registration or via "Login Here".
//!
//! Sign-in lives outside this app; the page confirms the account exists and
//! links back to registration.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <section class="register-page">
            <div class="register-card">
                <h1>"Login"</h1>
                <p class="register-card__subtitle">"Your account is ready. Sign in to continue."</p>
                <p class="register-footer">
                    "Need an account? "
                    <A href="/register" attr:class="register-footer__link">
                        "Register Here"
                    </A>
                </p>
            </div>
        </section>
    }
}
