//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrapped in `ProtectedRegion`, so the content below can assume a live
//! session existed at mount. Patient summaries are opaque payloads from the
//! hosted backend, rendered best-effort and never interpreted.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::protected_region::ProtectedRegion;
use crate::state::session::SessionState;

/// Best-effort display label from an opaque patient payload.
fn patient_display_name(payload: &serde_json::Value) -> String {
    payload
        .get("name")
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| "Unnamed patient".to_owned(), ToOwned::to_owned)
}

/// Authenticated landing page behind the session gate.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <ProtectedRegion scope="dashboard">
            <DashboardContent/>
        </ProtectedRegion>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let patients = RwSignal::new(Vec::<serde_json::Value>::new());
    let patients_loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(items) = crate::net::api::fetch_patient_summaries().await {
            patients.set(items);
        }
        patients_loading.set(false);
    });

    let display_name = move || {
        session
            .get()
            .identity
            .map_or_else(|| "Clinician".to_owned(), |identity| identity.profile.name)
    };
    let occupation = move || {
        session
            .get()
            .identity
            .and_then(|identity| identity.profile.occupation)
            .unwrap_or_default()
    };

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            // SIGNED_OUT drives the redirect to sign-in via the session store.
            leptos::task::spawn_local(async {
                crate::net::api::sign_out().await;
            });
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Chartboard"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <span class="toolbar__self">
                    {display_name}
                    <Show when=move || !occupation().is_empty()>
                        <span class="toolbar__self-role">" · " {occupation}</span>
                    </Show>
                </span>
                <span class="toolbar__spacer"></span>
                <button class="btn toolbar__signout" on:click=on_sign_out title="Sign out">
                    "Sign Out"
                </button>
            </header>

            <div class="dashboard-page__grid">
                <Show
                    when=move || !patients_loading.get()
                    fallback=move || view! { <p>"Loading patients..."</p> }
                >
                    <Show
                        when=move || !patients.get().is_empty()
                        fallback=move || view! { <p class="dashboard-page__empty">"No patients on this service."</p> }
                    >
                        <div class="dashboard-page__cards">
                            {move || {
                                patients
                                    .get()
                                    .iter()
                                    .map(|payload| {
                                        view! {
                                            <div class="patient-card">
                                                <span class="patient-card__name">
                                                    {patient_display_name(payload)}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
