//! Application state shared with the layout and pages.
//!
//! DESIGN
//! ======
//! State is gathered into one explicit [`context::AppContext`] value that is
//! built at the root and passed down, rather than a set of free-standing
//! context signals.

pub mod context;
pub mod session;
