//! Landing page.

use leptos::prelude::*;

use crate::components::background_wrapper::RoutedBackground;
use crate::state::context::AppContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let brand = ctx.config.brand.clone();
    let description = ctx.config.metadata.description.clone();

    view! {
        <RoutedBackground themes=ctx.config.themes.clone()>
            <section class="home-hero">
                <h1 class="home-hero__title">{brand.clone()}</h1>
                <p class="home-hero__tagline">{description.clone()}</p>
                <a class="home-hero__cta" href="/clubs">"Browse clubs"</a>
            </section>
        </RoutedBackground>
    }
}
