//! Clubs listing page. Carries its own concert theme, so the route theme
//! table leaves it unwrapped.

use leptos::prelude::*;

use crate::components::background_wrapper::RoutedBackground;
use crate::state::context::AppContext;

#[component]
pub fn ClubsPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <RoutedBackground themes=ctx.config.themes.clone()>
            <section class="clubs-page concert-theme min-h-screen">
                <h1 class="clubs-page__title">"Clubs"</h1>
                <p class="clubs-page__intro">
                    "Find a club, follow its events and join the crowd."
                </p>
            </section>
        </RoutedBackground>
    }
}
