//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold pure route and styling decisions so components stay
//! thin and the decisions can be tested without a router or a browser.

pub mod route_theme;
