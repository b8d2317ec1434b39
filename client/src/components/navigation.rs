//! Persistent top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `RootLayout` above every page. The active link is derived from
//! the current path passed in by the layout; session state only switches the
//! right-hand slot between the user's name and a sign-in link.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;

use crate::state::context::AppContext;

/// A link is active only on an exact path match.
pub(crate) fn is_active(current: &str, href: &str) -> bool {
    current == href
}

#[component]
pub fn Navigation(ctx: AppContext, #[prop(into)] path: Signal<String>) -> impl IntoView {
    let config = ctx.config.clone();
    let session = ctx.session;
    let sign_in_href = config.sign_in_href.clone();

    let links = config
        .nav
        .iter()
        .map(|link| {
            let href = link.href.clone();
            let active = move || path.with(|current| is_active(current, &href));
            view! {
                <li>
                    <a
                        class="site-nav__link"
                        class:site-nav__link--active=active.clone()
                        aria-current=move || active().then_some("page")
                        href=link.href.clone()
                    >
                        {link.label.clone()}
                    </a>
                </li>
            }
        })
        .collect_view();

    let account = move || match session.with(|s| s.display_name().map(str::to_owned)) {
        Some(name) => view! { <span class="site-nav__user">{name}</span> }.into_any(),
        None => view! { <a class="site-nav__sign-in" href=sign_in_href.clone()>"Sign in"</a> }.into_any(),
    };

    view! {
        <nav class="site-nav">
            <a class="site-nav__brand" href="/">{config.brand.clone()}</a>
            <ul class="site-nav__links">{links}</ul>
            <div class="site-nav__account">{account}</div>
        </nav>
    }
}
