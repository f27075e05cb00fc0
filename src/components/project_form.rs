//! Create form for portfolio projects.

use leptos::prelude::*;

use crate::net::types::NewProject;
use crate::state::session::SessionState;

/// Title and description are required; the link may stay empty.
fn build_payload(title: &str, description: &str, link: &str) -> Option<NewProject> {
    let title = title.trim();
    let description = description.trim();
    if title.is_empty() || description.is_empty() {
        return None;
    }
    Some(NewProject {
        title: title.to_owned(),
        description: description.to_owned(),
        link: link.trim().to_owned(),
    })
}

/// Project create form — clears its fields and notifies on save.
#[component]
pub fn ProjectForm(on_saved: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let link = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(payload) = build_payload(&title.get(), &description.get(), &link.get()) else {
            error.set(Some("Title and description are required.".to_owned()));
            return;
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let snapshot = session.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_project(&snapshot, &payload).await {
                    Ok(()) => {
                        title.set(String::new());
                        description.set(String::new());
                        link.set(String::new());
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
            <h3>"Add Project"</h3>
            <input
                class="entry-form__input"
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <textarea
                class="entry-form__input"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>
            <input
                class="entry-form__input"
                type="text"
                placeholder="Link"
                prop:value=move || link.get()
                on:input=move |ev| link.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <p class="entry-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Submit"
            </button>
        </form>
    }
}
