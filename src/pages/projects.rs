//! Portfolio projects page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::project_form::ProjectForm;
use crate::net::types::Project;
use crate::state::session::SessionState;
use crate::util::capability::{Action, can};
use crate::util::guard;

fn load_projects(
    session: RwSignal<SessionState>,
    projects: RwSignal<Vec<Project>>,
    error: RwSignal<Option<String>>,
    loading: RwSignal<bool>,
) {
    #[cfg(feature = "hydrate")]
    {
        let snapshot = session.get_untracked();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_projects(&snapshot).await {
                Ok(items) => {
                    projects.set(items);
                    error.set(None);
                }
                Err(e) => {
                    leptos::logging::warn!("load projects failed: {e}");
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, projects, error, loading);
    }
}

/// Projects page with gated create form and deletes.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_signin_redirect(session, "/projects", navigate);

    let projects = RwSignal::new(Vec::<Project>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);
    let show_form = RwSignal::new(false);

    Effect::new(move || load_projects(session, projects, error, loading));

    let can_create = move || can(session.get().identity.as_ref(), Action::Create);
    let can_delete = move || can(session.get().identity.as_ref(), Action::Delete);

    let on_saved = Callback::new(move |()| {
        show_form.set(false);
        load_projects(session, projects, error, loading);
    });

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let snapshot = session.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_project(&snapshot, &id).await {
                    Ok(()) => load_projects(session, projects, error, loading),
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
            <NavBar current="/projects"/>
            <h1>"Projects"</h1>

            <Show when=move || error.get().is_some()>
                <p class="resource-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=can_create>
                <button class="btn btn--primary" on:click=move |_| show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Hide Add Form" } else { "Add New Project" }}
                </button>
            </Show>
            <Show when=move || show_form.get() && can_create()>
                <ProjectForm on_saved=on_saved/>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading projects..."</p> }
            >
                <div class="resource-page__list">
                    {move || {
                        projects
                            .get()
                            .into_iter()
                            .map(|p| {
                                let delete_id = p.id.clone();
                                let has_link = !p.link.is_empty();
                                let link = p.link.clone();
                                view! {
                                    <div class="resource-card">
                                        <p>
                                            <strong>{p.title.clone()}</strong>
                                            ": "
                                            {p.description.clone()}
                                            <Show when=move || has_link>
                                                " "
                                                <a class="resource-card__link" href=link.clone()>
                                                    "Link"
                                                </a>
                                            </Show>
                                        </p>
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
