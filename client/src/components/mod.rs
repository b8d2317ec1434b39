//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the document chrome (head tags, navigation, layout) and
//! the route-conditional background. They take their inputs as props; only
//! `RoutedBackground` reads the router.

pub mod background_wrapper;
pub mod document;
pub mod navigation;
pub mod providers;
pub mod root_layout;
