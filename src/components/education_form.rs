//! Create form for education entries.

use leptos::prelude::*;

use crate::net::types::NewEducation;
use crate::state::session::SessionState;

fn build_payload(degree: &str, institution: &str, year: &str) -> Option<NewEducation> {
    let degree = degree.trim();
    let institution = institution.trim();
    let year = year.trim();
    if degree.is_empty() || institution.is_empty() || year.is_empty() {
        return None;
    }
    Some(NewEducation {
        degree: degree.to_owned(),
        institution: institution.to_owned(),
        year: year.to_owned(),
    })
}

/// Education create form — clears its fields and notifies on save.
#[component]
pub fn EducationForm(on_saved: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let degree = RwSignal::new(String::new());
    let institution = RwSignal::new(String::new());
    let year = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(payload) = build_payload(&degree.get(), &institution.get(), &year.get()) else {
            error.set(Some("All fields are required.".to_owned()));
            return;
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let snapshot = session.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_education(&snapshot, &payload).await {
                    Ok(()) => {
                        degree.set(String::new());
                        institution.set(String::new());
                        year.set(String::new());
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
            <h3>"Add Education"</h3>
            <input
                class="entry-form__input"
                type="text"
                placeholder="Degree"
                prop:value=move || degree.get()
                on:input=move |ev| degree.set(event_target_value(&ev))
            />
            <input
                class="entry-form__input"
                type="text"
                placeholder="Institution"
                prop:value=move || institution.get()
                on:input=move |ev| institution.set(event_target_value(&ev))
            />
            <input
                class="entry-form__input"
                type="text"
                placeholder="Year"
                prop:value=move || year.get()
                on:input=move |ev| year.set(event_target_value(&ev))
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
