//! Episode selection.
//!
//! [`selector::select`] decides for a single show, [`lineup::build_lineup`]
//! applies the lineup-wide strict-then-fallback policy.

pub mod lineup;
pub mod selector;

pub use lineup::{Lineup, LineupEntry, ShowBatch, build_lineup};
pub use selector::{SelectionMode, select};
