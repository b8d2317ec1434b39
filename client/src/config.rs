//! Site configuration: document metadata, font tokens, navigation entries
//! and the route theme table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SiteConfig` is built once at the application root and handed to the
//! layout through [`crate::state::context::AppContext`]. The server publishes
//! [`SiteMetadata`] as JSON, so that part is serde-serializable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::util::route_theme::RouteThemes;

pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_TITLE: &str = "Club Connect - BRAC University";
pub const DEFAULT_DESCRIPTION: &str = "Centralized club management system for BRAC University";
pub const DEFAULT_VIEWPORT: &str = "width=device-width, initial-scale=1, maximum-scale=1";
pub const DEFAULT_BODY_CLASS: &str = "antialiased min-h-screen bg-gray-50";
pub const DEFAULT_MAIN_CLASS: &str = "pb-4";
pub const DEFAULT_SIGN_IN_HREF: &str = "/api/auth/signin";
pub const FONT_PRECONNECT_HREF: &str = "https://fonts.gstatic.com";

/// Metadata consumed by the document head.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub lang: String,
    pub title: String,
    pub description: String,
    pub viewport: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_owned(),
            title: DEFAULT_TITLE.to_owned(),
            description: DEFAULT_DESCRIPTION.to_owned(),
            viewport: DEFAULT_VIEWPORT.to_owned(),
        }
    }
}

/// A web font exposed to stylesheets through a CSS custom property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontToken {
    /// Font family name as served by the font host.
    pub family: String,
    /// CSS custom property carrying the family stack, e.g. `--font-geist-sans`.
    pub variable: String,
    /// Generic fallback stack appended after the family.
    pub fallback: String,
    /// Stylesheet URL that loads the font faces.
    pub stylesheet: String,
}

impl FontToken {
    fn google(family: &str, variable: &str, fallback: &str) -> Self {
        Self {
            family: family.to_owned(),
            variable: variable.to_owned(),
            fallback: fallback.to_owned(),
            stylesheet: format!(
                "https://fonts.googleapis.com/css2?family={}:wght@100..900&display=swap",
                family.replace(' ', "+")
            ),
        }
    }

    /// `--var: 'Family', fallback`
    pub fn css_declaration(&self) -> String {
        format!("{}: '{}', {}", self.variable, self.family, self.fallback)
    }
}

/// One entry in the persistent navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self { label: label.into(), href: href.into() }
    }
}

/// Everything the layout needs to render the document shell and chrome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub metadata: SiteMetadata,
    pub brand: String,
    pub fonts: Vec<FontToken>,
    pub body_class: String,
    pub main_class: String,
    pub nav: Vec<NavLink>,
    pub sign_in_href: String,
    pub themes: RouteThemes,
}

impl SiteConfig {
    /// Inline style declaring every font variable, applied on `<body>`.
    pub fn font_variables(&self) -> String {
        self.fonts
            .iter()
            .map(FontToken::css_declaration)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            metadata: SiteMetadata::default(),
            brand: "Club Connect".to_owned(),
            fonts: vec![
                FontToken::google("Geist", "--font-geist-sans", "ui-sans-serif, system-ui, sans-serif"),
                FontToken::google("Geist Mono", "--font-geist-mono", "ui-monospace, monospace"),
            ],
            body_class: DEFAULT_BODY_CLASS.to_owned(),
            main_class: DEFAULT_MAIN_CLASS.to_owned(),
            nav: vec![
                NavLink::new("Home", "/"),
                NavLink::new("Clubs", "/clubs"),
                NavLink::new("Dashboard", "/dashboard"),
            ],
            sign_in_href: DEFAULT_SIGN_IN_HREF.to_owned(),
            themes: RouteThemes::default(),
        }
    }
}
