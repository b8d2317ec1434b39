//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are constructed by the router, so they pull `AppContext` from the
//! provider boundary and pick their backdrop through `RoutedBackground`.

pub mod clubs;
pub mod dashboard;
pub mod home;
pub mod not_found;
