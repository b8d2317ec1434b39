use super::*;
use leptos::reactive::owner::Owner;
use crate::state::session::SessionUser;

#[test]
fn new_context_starts_signed_out() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = AppContext::default();
        assert!(!ctx.session.get_untracked().is_signed_in());
        assert_eq!(ctx.config.metadata.lang, "en");
    });
}

#[test]
fn clones_share_session_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = AppContext::default();
        let copy = ctx.clone();
        ctx.session.set(SessionState::signed_in(SessionUser {
            name: "Arif".to_owned(),
            email: "arif@bracu.ac.bd".to_owned(),
        }));
        assert_eq!(copy.session.with_untracked(|s| s.display_name().map(str::to_owned)), Some("Arif".to_owned()));
        assert!(Arc::ptr_eq(&ctx.config, &copy.config));
    });
}

#[test]
fn from_shared_keeps_the_same_config() {
    let owner = Owner::new();
    owner.with(|| {
        let config = Arc::new(SiteConfig::default());
        let ctx = AppContext::from_shared(config.clone());
        assert!(Arc::ptr_eq(&ctx.config, &config));
    });
}
