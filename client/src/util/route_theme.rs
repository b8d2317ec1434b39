//! Per-route backdrop policy.
//!
//! DESIGN
//! ======
//! Pages do not decide their own background. A declarative table maps exact
//! route paths to a [`Backdrop`]; any path missing from the table, including
//! empty or malformed ones, gets the default aerial-view treatment. Lookup is
//! a pure function of the path, so equal inputs always choose the same branch.

#[cfg(test)]
#[path = "route_theme_test.rs"]
mod route_theme_test;

use serde::{Deserialize, Serialize};

/// Path of the clubs listing page, which ships its own concert theme.
pub const CLUBS_PATH: &str = "/clubs";

/// Classes applied to the wrapping container for the default backdrop.
pub const AERIAL_BACKGROUND_CLASS: &str = "min-h-screen aerial-view-background";

/// Background treatment chosen for a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backdrop {
    /// Full-bleed aerial-view background around the page content.
    #[default]
    Aerial,
    /// The page supplies its own visual theme; content passes through unwrapped.
    Own,
}

impl Backdrop {
    /// Container classes for this backdrop, or `None` when no wrapper is emitted.
    pub fn container_class(self) -> Option<&'static str> {
        match self {
            Self::Aerial => Some(AERIAL_BACKGROUND_CLASS),
            Self::Own => None,
        }
    }
}

/// One row of the route theme table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTheme {
    pub path: String,
    pub backdrop: Backdrop,
}

/// Ordered route theme table. The first exact path match wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteThemes {
    entries: Vec<RouteTheme>,
}

impl RouteThemes {
    /// Table with no overrides: every route gets [`Backdrop::Aerial`].
    #[must_use]
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append an override for an exact path.
    #[must_use]
    pub fn with(mut self, path: impl Into<String>, backdrop: Backdrop) -> Self {
        self.entries.push(RouteTheme { path: path.into(), backdrop });
        self
    }

    /// Backdrop for `path`. Matching is exact: no trimming, no prefix rules.
    pub fn backdrop_for(&self, path: &str) -> Backdrop {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map_or(Backdrop::Aerial, |entry| entry.backdrop)
    }

    pub fn entries(&self) -> &[RouteTheme] {
        &self.entries
    }
}

impl Default for RouteThemes {
    fn default() -> Self {
        Self::empty().with(CLUBS_PATH, Backdrop::Own)
    }
}
