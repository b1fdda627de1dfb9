//! Rank-based grade assignment.
//!
//! [`classify`] turns a rank among all candidates into one of the five
//! [`GradeBand`]s, and [`assign`] maps a raw score linearly from the band's
//! observed raw range onto the band's assigned-score range.

pub mod assign;
pub mod band;
pub mod classify;

pub use assign::assign;
pub use band::{BANDS, GradeBand, GradeLabel};
pub use classify::{classify, percentile};
