//! Contact messages page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists every message left through the public site. Creation and deletion
//! are mutation actions, so their controls render through the capability gate.

#[cfg(test)]
#[path = "contacts_test.rs"]
mod contacts_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::contact_form::ContactForm;
use crate::components::nav_bar::NavBar;
use crate::net::types::Contact;
use crate::state::session::SessionState;
use crate::util::capability::{Action, can};
use crate::util::guard;

/// Uppercased first letter for the sender badge.
fn initial_letter(name: &str) -> char {
    name.chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('?')
}

fn load_contacts(
    session: RwSignal<SessionState>,
    contacts: RwSignal<Vec<Contact>>,
    error: RwSignal<Option<String>>,
    loading: RwSignal<bool>,
) {
    #[cfg(feature = "hydrate")]
    {
        let snapshot = session.get_untracked();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_contacts(&snapshot).await {
                Ok(items) => {
                    contacts.set(items);
                    error.set(None);
                }
                Err(e) => {
                    leptos::logging::warn!("load contacts failed: {e}");
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, contacts, error, loading);
    }
}

/// Contact messages page with count header, gated form, and gated deletes.
#[component]
pub fn ContactsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_signin_redirect(session, "/contacts", navigate);

    let contacts = RwSignal::new(Vec::<Contact>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);
    let show_form = RwSignal::new(false);

    Effect::new(move || load_contacts(session, contacts, error, loading));

    let can_create = move || can(session.get().identity.as_ref(), Action::Create);
    let can_delete = move || can(session.get().identity.as_ref(), Action::Delete);

    let on_saved = Callback::new(move |()| {
        show_form.set(false);
        load_contacts(session, contacts, error, loading);
    });

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let snapshot = session.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_contact(&snapshot, &id).await {
                    Ok(()) => load_contacts(session, contacts, error, loading),
                    Err(e) => error.set(Some(e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <div class="resource-page">
            <NavBar current="/contacts"/>

            <header class="resource-page__hero">
                <div>
                    <h1>"Contact Messages"</h1>
                    <p>"Manage and view all your contact inquiries"</p>
                </div>
                <div class="resource-page__stat">
                    <span class="resource-page__stat-count">{move || contacts.get().len()}</span>
                    <span class="resource-page__stat-label">"Total Messages"</span>
                </div>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="resource-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=can_create>
                <button class="btn btn--primary" on:click=move |_| show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Hide Add Form" } else { "Add New Contact" }}
                </button>
            </Show>
            <Show when=move || show_form.get() && can_create()>
                <ContactForm on_saved=on_saved/>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading contacts..."</p> }
            >
                <div class="resource-page__list">
                    <Show when=move || contacts.get().is_empty()>
                        <div class="resource-page__empty">
                            <p>"No contact messages yet"</p>
                            <p>"Messages from visitors will appear here"</p>
                        </div>
                    </Show>
                    {move || {
                        contacts
                            .get()
                            .into_iter()
                            .map(|c| {
                                let delete_id = c.id.clone();
                                let badge = initial_letter(&c.name).to_string();
                                view! {
                                    <div class="contact-card">
                                        <div class="contact-card__badge">{badge}</div>
                                        <div class="contact-card__body">
                                            <h3>{c.name.clone()}</h3>
                                            <p class="contact-card__email">{c.email.clone()}</p>
                                            <p class="contact-card__message">{c.message.clone()}</p>
                                        </div>
                                        <Show when=can_delete>
                                            <button
                                                class="btn btn--danger"
                                                on:click={
                                                    let id = delete_id.clone();
                                                    move |_| on_delete(id.clone())
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
