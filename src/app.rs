//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    contacts::ContactsPage, dashboard::DashboardPage, educations::EducationsPage,
    projects::ProjectsPage, sign_in::SignInPage, sign_up::SignUpPage, users::UsersPage,
};
use crate::state::session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Bootstraps the session from the credential store, provides it via context,
/// and declares all routes. Guarded pages install their own redirect effect;
/// the sign-in and sign-up routes never pass through the guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(session::bootstrap());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio-client.css"/>
        <Title text="Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("contacts") view=ContactsPage/>
                <Route path=StaticSegment("educations") view=EducationsPage/>
                <Route path=StaticSegment("projects") view=ProjectsPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
            </Routes>
        </Router>
    }
}
