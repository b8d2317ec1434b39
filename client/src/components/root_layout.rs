//! Root layout: provider boundary, navigation chrome and main content region.
//!
//! ARCHITECTURE
//! ============
//! The layout is a pure composition of its props. `ctx` is injected by `App`
//! and `path` comes from the router through the app-level adapter, so the
//! layout renders identically under SSR, hydration and tests.

#[cfg(test)]
#[path = "root_layout_test.rs"]
mod root_layout_test;

use leptos::prelude::*;

use crate::components::navigation::Navigation;
use crate::components::providers::Providers;
use crate::state::context::AppContext;

#[component]
pub fn RootLayout(ctx: AppContext, #[prop(into)] path: Signal<String>, children: Children) -> impl IntoView {
    let main_class = ctx.config.main_class.clone();
    let nav_ctx = ctx.clone();

    view! {
        <Providers ctx=ctx>
            <Navigation ctx=nav_ctx path=path/>
            <main class=main_class>{children()}</main>
        </Providers>
    }
}
