use super::*;

#[test]
fn links_for_excludes_current_page() {
    let links = links_for("/contacts");
    assert!(links.iter().all(|(path, _)| *path != "/contacts"));
    assert_eq!(links.len(), 3);
}

#[test]
fn links_for_preserves_display_order() {
    let links = links_for("/educations");
    let paths: Vec<_> = links.iter().map(|(path, _)| *path).collect();
    assert_eq!(paths, ["/", "/contacts", "/projects"]);
}

#[test]
fn links_for_unknown_page_keeps_all_links() {
    assert_eq!(links_for("/users").len(), 4);
}
