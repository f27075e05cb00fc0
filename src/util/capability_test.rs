use super::*;

fn identity(role: Role) -> Identity {
    Identity {
        id: "1".to_owned(),
        email: "a@b.com".to_owned(),
        name: "Alice".to_owned(),
        role,
    }
}

#[test]
fn absent_identity_denies_all_actions() {
    for action in [Action::Read, Action::Create, Action::Update, Action::Delete] {
        assert!(!can(None, action));
    }
}

#[test]
fn user_role_can_read_but_not_mutate() {
    let id = identity(Role::User);
    assert!(can(Some(&id), Action::Read));
    assert!(!can(Some(&id), Action::Create));
    assert!(!can(Some(&id), Action::Update));
    assert!(!can(Some(&id), Action::Delete));
}

#[test]
fn admin_role_can_do_everything() {
    let id = identity(Role::Admin);
    for action in [Action::Read, Action::Create, Action::Update, Action::Delete] {
        assert!(can(Some(&id), action));
    }
}
