//! Member dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Club data lives behind the external club service; this page only greets
//! the session user or points signed-out visitors at the sign-in flow.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::background_wrapper::RoutedBackground;
use crate::state::context::AppContext;
use crate::state::session::SessionState;

fn greeting(session: &SessionState) -> String {
    if session.loading {
        return "Loading your dashboard...".to_owned();
    }
    match session.display_name() {
        Some(name) => format!("Welcome back, {name}"),
        None => "Sign in to see your clubs.".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let session = ctx.session;

    view! {
        <RoutedBackground themes=ctx.config.themes.clone()>
            <section class="dashboard">
                <h1 class="dashboard__title">"Dashboard"</h1>
                <p class="dashboard__greeting">{move || session.with(greeting)}</p>
            </section>
        </RoutedBackground>
    }
}
