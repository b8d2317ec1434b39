//! Provider boundary around navigation and routed content.

use leptos::context::Provider;
use leptos::prelude::*;

use crate::state::context::AppContext;

/// Scopes `ctx` to `children` so router-built pages can reach it.
///
/// Chrome components receive the same `ctx` as an explicit prop instead.
#[component]
pub fn Providers(ctx: AppContext, children: Children) -> impl IntoView {
    view! { <Provider value=ctx>{children()}</Provider> }
}
