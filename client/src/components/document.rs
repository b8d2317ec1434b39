//! Document shell: `<html>`, head tags and `<body>` styling.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::shell` renders `Document` once per SSR response. The language
//! attribute, viewport meta and body tokens come from [`SiteConfig`], never
//! from the page being rendered, so they are present for every route.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::config::{FONT_PRECONNECT_HREF, SiteConfig, SiteMetadata};

/// Full HTML document around `children`.
///
/// `head` carries extra head content such as hydration scripts.
#[component]
pub fn Document(
    config: Arc<SiteConfig>,
    #[prop(optional)] head: Option<Children>,
    children: Children,
) -> impl IntoView {
    let lang = config.metadata.lang.clone();
    let body_class = config.body_class.clone();
    let font_variables = config.font_variables();

    view! {
        <html lang=lang>
            <head>
                <DocumentHead config=config/>
                {head.map(|head| head())}
            </head>
            <body class=body_class style=font_variables>
                {children()}
            </body>
        </html>
    }
}

/// Static head tags: charset, viewport and font stylesheets.
#[component]
pub fn DocumentHead(config: Arc<SiteConfig>) -> impl IntoView {
    let font_links = config
        .fonts
        .iter()
        .map(|font| view! { <link rel="stylesheet" href=font.stylesheet.clone()/> })
        .collect_view();

    view! {
        <meta charset="utf-8"/>
        <meta name="viewport" content=config.metadata.viewport.clone()/>
        <link rel="preconnect" href=FONT_PRECONNECT_HREF crossorigin=""/>
        {font_links}
    }
}

/// Title and description registered with the head manager.
#[component]
pub fn DocumentMeta(metadata: SiteMetadata) -> impl IntoView {
    view! {
        <Title text=metadata.title/>
        <Meta name="description" content=metadata.description/>
    }
}
