//! Create form for contact messages.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

use crate::net::types::NewContact;
use crate::state::session::SessionState;

/// Trim all fields and build the payload; `None` if any field is empty.
fn build_payload(name: &str, email: &str, message: &str) -> Option<NewContact> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return None;
    }
    Some(NewContact {
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
    })
}

/// Contact create form — clears its fields and notifies on save.
#[component]
pub fn ContactForm(on_saved: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(payload) = build_payload(&name.get(), &email.get(), &message.get()) else {
            error.set(Some("All fields are required.".to_owned()));
            return;
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let snapshot = session.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_contact(&snapshot, &payload).await {
                    Ok(()) => {
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                        on_saved.run(());
                    }
                    Err(e) => error.set(Some(e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, payload);
        }
    };

    view! {
        <form class="entry-form" on:submit=on_submit>
            <h3>"Add Contact"</h3>
            <input
                class="entry-form__input"
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                class="entry-form__input"
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <textarea
                class="entry-form__input"
                placeholder="Message"
                prop:value=move || message.get()
                on:input=move |ev| message.set(event_target_value(&ev))
            ></textarea>
            <Show when=move || error.get().is_some()>
                <p class="entry-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Submit"
            </button>
        </form>
    }
}
