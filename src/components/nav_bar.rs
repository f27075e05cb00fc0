//! Cross-page navigation links.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

/// Navigable sections, in display order.
const LINKS: [(&str, &str); 4] = [
    ("/", "Dashboard"),
    ("/contacts", "Contacts"),
    ("/educations", "Education"),
    ("/projects", "Projects"),
];

/// Links to every section except the one currently shown.
fn links_for(current: &str) -> Vec<(&'static str, &'static str)> {
    LINKS
        .iter()
        .copied()
        .filter(|(path, _)| *path != current)
        .collect()
}

/// Navigation bar linking the resource pages together.
#[component]
pub fn NavBar(current: &'static str) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {links_for(current)
                .into_iter()
                .map(|(path, label)| {
                    view! {
                        <a class="nav-bar__link" href=path>
                            {label}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
