//! Fallback for unmatched routes.

use leptos::prelude::*;

use crate::components::background_wrapper::RoutedBackground;
use crate::state::context::AppContext;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let themes = use_context::<AppContext>().map(|ctx| ctx.config.themes.clone()).unwrap_or_default();

    view! {
        <RoutedBackground themes=themes>
            <section class="not-found">
                <h1>"Page not found."</h1>
                <a href="/">"Back to Club Connect"</a>
            </section>
        </RoutedBackground>
    }
}
