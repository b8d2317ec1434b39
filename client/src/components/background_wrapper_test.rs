use super::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

use crate::util::route_theme::{AERIAL_BACKGROUND_CLASS, Backdrop};

const PROBE: &str = r#"<p class="probe">X</p>"#;

fn render(path: &str) -> String {
    render_with(path, RouteThemes::default())
}

fn render_with(path: &str, themes: RouteThemes) -> String {
    let path = path.to_owned();
    Owner::new().with(move || {
        view! {
            <BackgroundWrapper path=path themes=themes>
                <p class="probe">"X"</p>
            </BackgroundWrapper>
        }
        .to_html()
    })
}

fn assert_wrapped_once(html: &str) {
    assert!(html.contains(PROBE), "children missing: {html}");
    assert_eq!(html.matches("<div").count(), 1, "expected one container: {html}");
    assert_eq!(html.matches("aerial-view-background").count(), 1, "expected one backdrop: {html}");
    assert!(html.contains(&format!(r#"<div class="{AERIAL_BACKGROUND_CLASS}">"#)), "{html}");
    let open = html.find("<div").unwrap();
    let child = html.find(PROBE).unwrap();
    let close = html.rfind("</div>").unwrap();
    assert!(open < child && child < close, "children not nested: {html}");
}

#[test]
fn clubs_path_passes_children_through() {
    let html = render("/clubs");
    assert!(html.contains(PROBE), "{html}");
    assert!(!html.contains("<div"), "unexpected wrapper: {html}");
    assert!(!html.contains("aerial-view-background"), "{html}");
}

#[test]
fn root_path_is_wrapped() {
    assert_wrapped_once(&render("/"));
}

#[test]
fn dashboard_path_is_wrapped() {
    assert_wrapped_once(&render("/dashboard"));
}

#[test]
fn empty_path_is_wrapped() {
    assert_wrapped_once(&render(""));
}

#[test]
fn near_miss_paths_are_wrapped() {
    for path in ["/clubs/", "/clubs/robotics", "/CLUBS", "clubs"] {
        assert_wrapped_once(&render(path));
    }
}

#[test]
fn rendering_is_idempotent() {
    for path in ["/clubs", "/", ""] {
        assert_eq!(render(path), render(path));
    }
}

#[test]
fn custom_table_controls_passthrough() {
    let themes = RouteThemes::empty().with("/events", Backdrop::Own);
    let events = render_with("/events", themes.clone());
    assert!(!events.contains("<div"), "{events}");
    assert_wrapped_once(&render_with("/clubs", themes));
}
