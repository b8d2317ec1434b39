use super::*;

fn user(name: &str) -> SessionUser {
    SessionUser { name: name.to_owned(), email: "member@bracu.ac.bd".to_owned() }
}

#[test]
fn default_session_is_signed_out() {
    let state = SessionState::default();
    assert!(!state.is_signed_in());
    assert!(!state.loading);
    assert_eq!(state.display_name(), None);
}

#[test]
fn signed_in_session_shows_trimmed_name() {
    let state = SessionState::signed_in(user("  Nadia Rahman "));
    assert!(state.is_signed_in());
    assert_eq!(state.display_name(), Some("Nadia Rahman"));
}

#[test]
fn blank_name_falls_back_to_email() {
    let state = SessionState::signed_in(user("   "));
    assert_eq!(state.display_name(), Some("member@bracu.ac.bd"));
}
