//! Admin user-management page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Role changes are UI-gated to admins; the remote service enforces the real
//! authorization on the `PUT /api/users/{id}/role` call regardless.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::net::types::{AccountSummary, Role};
use crate::state::session::SessionState;
use crate::util::capability::{Action, can};
use crate::util::guard;

/// Parse a role-select value back into a wire role.
fn role_from_value(value: &str) -> Option<Role> {
    match value {
        "user" => Some(Role::User),
        "admin" => Some(Role::Admin),
        _ => None,
    }
}

fn load_accounts(
    session: RwSignal<SessionState>,
    accounts: RwSignal<Vec<AccountSummary>>,
    error: RwSignal<Option<String>>,
    loading: RwSignal<bool>,
) {
    #[cfg(feature = "hydrate")]
    {
        let snapshot = session.get_untracked();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_accounts(&snapshot).await {
                Ok(items) => {
                    accounts.set(items);
                    error.set(None);
                }
                Err(e) => {
                    leptos::logging::warn!("load users failed: {e}");
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, accounts, error, loading);
    }
}

/// User management page — admin-only role switching.
#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_signin_redirect(session, "/users", navigate);

    let accounts = RwSignal::new(Vec::<AccountSummary>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    Effect::new(move || load_accounts(session, accounts, error, loading));

    let can_manage = move || can(session.get().identity.as_ref(), Action::Update);

    let on_role_change = move |id: String, value: String| {
        let Some(role) = role_from_value(&value) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let snapshot = session.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_account_role(&snapshot, &id, role).await {
                    Ok(()) => load_accounts(session, accounts, error, loading),
                    Err(e) => error.set(Some(e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, role);
        }
    };

    view! {
        <div class="resource-page">
            <NavBar current="/users"/>
            <h1>"User Management"</h1>

            <Show when=move || error.get().is_some()>
                <p class="resource-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=can_manage
                fallback=move || view! { <p>"Administrator access required."</p> }
            >
                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p>"Loading users..."</p> }
                >
                    <div class="resource-page__list">
                        {move || {
                            accounts
                                .get()
                                .into_iter()
                                .map(|account| {
                                    let line = format!(
                                        "{} ({}) - Role: {}",
                                        account.name,
                                        account.email,
                                        account.role.as_str()
                                    );
                                    let change_id = account.id.clone();
                                    view! {
                                        <div class="resource-card">
                                            <p>{line}</p>
                                            <select
                                                class="resource-card__role"
                                                prop:value=account.role.as_str()
                                                on:change={
                                                    let id = change_id.clone();
                                                    move |ev| {
                                                        on_role_change(id.clone(), event_target_value(&ev));
                                                    }
                                                }
                                            >
                                                <option value="user">"User"</option>
                                                <option value="admin">"Admin"</option>
                                            </select>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
