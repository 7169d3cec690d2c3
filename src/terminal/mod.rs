//! Shared terminal utilities.
//!
//! Box drawing for help screens.

mod output;

pub use output::*;
