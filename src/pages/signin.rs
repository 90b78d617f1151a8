//! Sign-in page with email + password credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the sign-in entry point every unauthenticated redirect lands on.
//! Successful sign-in does not navigate from here: the `SIGNED_IN` event
//! flows through the session store's guarded listener, which owns the
//! global navigation policy.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::session;

/// Trim and require both credential fields before submitting.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Destination-mount check: a live session means the redirect that landed
    // here is stale, so move on (guarded); otherwise the arrival is settled
    // and the global latch can be released.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if crate::net::api::fetch_session().await.is_some() {
            let guard = crate::util::redirect_guard::browser_guard();
            let now = crate::util::redirect_guard::now_ms();
            if guard.try_acquire(session::GLOBAL_SCOPE, now)
                == crate::util::redirect_guard::AcquireOutcome::Proceed
            {
                crate::util::auth::hard_navigate(crate::util::auth::DASHBOARD_PATH);
            }
        } else {
            session::clear_latch();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in_with_password(&email_value, &password_value).await {
                // Navigation arrives via the SIGNED_IN event; keep the form
                // disabled while the page unloads.
                Ok(_) => {}
                Err(msg) => {
                    error.set(msg);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="signin-page">
            <div class="signin-card">
                <h1>"Chartboard"</h1>
                <p class="signin-card__subtitle">"Department Sign-In"</p>
                <form class="signin-form" on:submit=on_submit>
                    <input
                        class="signin-input"
                        type="email"
                        placeholder="you@hospital.example"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="signin-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="signin-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="signin-message signin-message--error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
