use super::*;

// =============================================================
// Default table
// =============================================================

#[test]
fn clubs_page_supplies_its_own_theme() {
    let themes = RouteThemes::default();
    assert_eq!(themes.backdrop_for("/clubs"), Backdrop::Own);
}

#[test]
fn other_known_routes_get_aerial_backdrop() {
    let themes = RouteThemes::default();
    assert_eq!(themes.backdrop_for("/"), Backdrop::Aerial);
    assert_eq!(themes.backdrop_for("/dashboard"), Backdrop::Aerial);
}

#[test]
fn empty_path_falls_through_to_aerial() {
    assert_eq!(RouteThemes::default().backdrop_for(""), Backdrop::Aerial);
}

#[test]
fn matching_is_exact() {
    let themes = RouteThemes::default();
    assert_eq!(themes.backdrop_for("/clubs/"), Backdrop::Aerial);
    assert_eq!(themes.backdrop_for("/clubs/chess"), Backdrop::Aerial);
    assert_eq!(themes.backdrop_for("/Clubs"), Backdrop::Aerial);
    assert_eq!(themes.backdrop_for(" /clubs"), Backdrop::Aerial);
}

#[test]
fn lookup_is_repeatable() {
    let themes = RouteThemes::default();
    for path in ["/clubs", "/", "", "/events"] {
        assert_eq!(themes.backdrop_for(path), themes.backdrop_for(path));
    }
}

// =============================================================
// Custom tables
// =============================================================

#[test]
fn empty_table_wraps_everything() {
    let themes = RouteThemes::empty();
    assert!(themes.entries().is_empty());
    assert_eq!(themes.backdrop_for("/clubs"), Backdrop::Aerial);
}

#[test]
fn first_matching_entry_wins() {
    let themes = RouteThemes::empty()
        .with("/events", Backdrop::Own)
        .with("/events", Backdrop::Aerial);
    assert_eq!(themes.backdrop_for("/events"), Backdrop::Own);
}

#[test]
fn extra_entries_extend_the_default() {
    let themes = RouteThemes::default().with("/events", Backdrop::Own);
    assert_eq!(themes.backdrop_for("/clubs"), Backdrop::Own);
    assert_eq!(themes.backdrop_for("/events"), Backdrop::Own);
    assert_eq!(themes.backdrop_for("/"), Backdrop::Aerial);
}

// =============================================================
// Backdrop
// =============================================================

#[test]
fn backdrop_default_is_aerial() {
    assert_eq!(Backdrop::default(), Backdrop::Aerial);
}

#[test]
fn container_class_only_for_aerial() {
    assert_eq!(Backdrop::Aerial.container_class(), Some("min-h-screen aerial-view-background"));
    assert_eq!(Backdrop::Own.container_class(), None);
}

#[test]
fn backdrop_serializes_snake_case() {
    assert_eq!(serde_json::to_value(Backdrop::Own).unwrap(), serde_json::json!("own"));
    let parsed: Backdrop = serde_json::from_str("\"aerial\"").unwrap();
    assert_eq!(parsed, Backdrop::Aerial);
}
