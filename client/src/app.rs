//! Root application component with routing and the layout shell.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::document::{Document, DocumentMeta};
use crate::components::root_layout::RootLayout;
use crate::config::SiteConfig;
use crate::pages::{clubs::ClubsPage, dashboard::DashboardPage, home::HomePage, not_found::NotFoundPage};
use crate::state::context::AppContext;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is shared by the document shell and the application context so
/// both render from the same values.
pub fn shell(options: LeptosOptions, config: Arc<SiteConfig>) -> impl IntoView {
    let app_config = config.clone();

    view! {
        <!DOCTYPE html>
        <Document
            config=config
            head=Box::new(move || {
                view! {
                    <AutoReload options=options.clone()/>
                    <HydrationScripts options/>
                    <MetaTags/>
                }
                .into_any()
            })
        >
            <App config=app_config/>
        </Document>
    }
}

/// Root application component.
///
/// Wraps the root's `config` in the application context and injects it into
/// the layout; route-level pages are rendered inside the layout's main region.
#[component]
pub fn App(config: Arc<SiteConfig>) -> impl IntoView {
    provide_meta_context();

    let ctx = AppContext::from_shared(config);
    let metadata = ctx.config.metadata.clone();

    view! {
        <Stylesheet id="leptos" href="/pkg/club-connect.css"/>
        <DocumentMeta metadata=metadata/>

        <Router>
            <RoutedLayout ctx=ctx>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("clubs") view=ClubsPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </Routes>
            </RoutedLayout>
        </Router>
    }
}

/// Reads the router location once and hands the pathname to `RootLayout`.
#[component]
fn RoutedLayout(ctx: AppContext, children: Children) -> impl IntoView {
    let location = use_location();

    view! { <RootLayout ctx=ctx path=location.pathname>{children()}</RootLayout> }
}
