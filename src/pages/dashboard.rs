//! Dashboard page — the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links out to the resource pages and owns the sign-out control. The admin
//! shortcut to user management renders through the capability gate, so it is
//! absent for plain users and for token-only sessions restored by a reload.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};
use crate::util::capability::{Action, can};
use crate::util::guard;

/// Dashboard page with section cards and the sign-out button.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_signin_redirect(session, "/", navigate.clone());

    let navigate_signout = navigate.clone();
    let on_sign_out = move |_| {
        session::sign_out(session);
        navigate_signout("/signin", NavigateOptions::default());
    };

    let show_manage_users = move || can(session.get().identity.as_ref(), Action::Update);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Portfolio Dashboard"</h1>
                <button class="btn btn--danger" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </header>
            <div class="dashboard-page__cards">
                <a class="dashboard-card" href="/contacts">
                    <h2>"Contacts"</h2>
                    <p>"Manage contact messages"</p>
                </a>
                <a class="dashboard-card" href="/educations">
                    <h2>"Education"</h2>
                    <p>"View qualifications"</p>
                </a>
                <a class="dashboard-card" href="/projects">
                    <h2>"Projects"</h2>
                    <p>"Explore portfolio projects"</p>
                </a>
            </div>
            <Show when=show_manage_users>
                <div class="dashboard-page__admin">
                    <a class="btn btn--primary" href="/users">
                        "Manage Users"
                    </a>
                </div>
            </Show>
        </div>
    }
}
