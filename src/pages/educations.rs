//! Education entries page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::education_form::EducationForm;
use crate::components::nav_bar::NavBar;
use crate::net::types::Education;
use crate::state::session::SessionState;
use crate::util::capability::{Action, can};
use crate::util::guard;

fn load_educations(
    session: RwSignal<SessionState>,
    educations: RwSignal<Vec<Education>>,
    error: RwSignal<Option<String>>,
    loading: RwSignal<bool>,
) {
    #[cfg(feature = "hydrate")]
    {
        let snapshot = session.get_untracked();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_educations(&snapshot).await {
                Ok(items) => {
                    educations.set(items);
                    error.set(None);
                }
                Err(e) => {
                    leptos::logging::warn!("load educations failed: {e}");
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, educations, error, loading);
    }
}

/// Education page with gated create form and deletes.
#[component]
pub fn EducationsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_signin_redirect(session, "/educations", navigate);

    let educations = RwSignal::new(Vec::<Education>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);
    let show_form = RwSignal::new(false);

    Effect::new(move || load_educations(session, educations, error, loading));

    let can_create = move || can(session.get().identity.as_ref(), Action::Create);
    let can_delete = move || can(session.get().identity.as_ref(), Action::Delete);

    let on_saved = Callback::new(move |()| {
        show_form.set(false);
        load_educations(session, educations, error, loading);
    });

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let snapshot = session.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_education(&snapshot, &id).await {
                    Ok(()) => load_educations(session, educations, error, loading),
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
            <NavBar current="/educations"/>
            <h1>"Education"</h1>

            <Show when=move || error.get().is_some()>
                <p class="resource-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=can_create>
                <button class="btn btn--primary" on:click=move |_| show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Hide Add Form" } else { "Add New Education" }}
                </button>
            </Show>
            <Show when=move || show_form.get() && can_create()>
                <EducationForm on_saved=on_saved/>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading educations..."</p> }
            >
                <div class="resource-page__list">
                    {move || {
                        educations
                            .get()
                            .into_iter()
                            .map(|e| {
                                let delete_id = e.id.clone();
                                let line = format!("{} - {} ({})", e.degree, e.institution, e.year);
                                view! {
                                    <div class="resource-card">
                                        <p>{line}</p>
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
