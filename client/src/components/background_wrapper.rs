//! Route-conditional background wrapper.
//!
//! DESIGN
//! ======
//! `BackgroundWrapper` takes the current path as an explicit prop and either
//! returns its children untouched or nests them in exactly one backdrop
//! container. `RoutedBackground` is the thin adapter pages use: it reads the
//! router location and forwards the pathname.

#[cfg(test)]
#[path = "background_wrapper_test.rs"]
mod background_wrapper_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::route_theme::RouteThemes;

/// Wrap `children` in the backdrop container unless `path` is themed `Own`.
///
/// Unknown and empty paths get the default aerial background.
#[component]
pub fn BackgroundWrapper(
    #[prop(into)] path: String,
    #[prop(optional)] themes: RouteThemes,
    children: Children,
) -> impl IntoView {
    match themes.backdrop_for(&path).container_class() {
        Some(class) => view! { <div class=class>{children()}</div> }.into_any(),
        None => children().into_any(),
    }
}

/// [`BackgroundWrapper`] driven by the router's current pathname.
#[component]
pub fn RoutedBackground(#[prop(optional)] themes: RouteThemes, children: ChildrenFn) -> impl IntoView {
    let location = use_location();

    move || {
        let children = children.clone();
        view! {
            <BackgroundWrapper path=location.pathname.get() themes=themes.clone()>
                {children()}
            </BackgroundWrapper>
        }
    }
}
