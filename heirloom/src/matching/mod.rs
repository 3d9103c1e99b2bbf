//! Photo-to-memory match scoring
//!
//! [`MatchScorer`] compares a memory's text and year with one photo's
//! metadata and produces a bounded 0-100 score plus the reasons behind it.
//! Six signals are evaluated in a fixed order, each capped on its own before
//! the total is clamped:
//!
//! | Signal             | Cap |
//! |--------------------|-----|
//! | Year proximity     | 30  |
//! | Visual description | 40  |
//! | Title phrase       | 35  |
//! | Names              | 25  |
//! | Keywords           | 15  |
//! | Combined bonus     | 10  |
//!
//! Scoring is pure: no I/O, no randomness, identical inputs give identical
//! results.

mod result;
mod scorer;

pub use result::{MatchResult, SignalBreakdown};
pub use scorer::MatchScorer;

/// Upper bound of every match score
pub const MAX_SCORE: u8 = 100;

pub const YEAR_CAP: u8 = 30;
pub const VISUAL_CAP: u8 = 40;
pub const EXACT_TITLE_POINTS: u8 = 35;
pub const PHRASE_WINDOW_POINTS: u8 = 25;
pub const NAME_CAP: u8 = 25;
pub const KEYWORD_CAP: u8 = 15;
pub const COMBINED_BONUS: u8 = 10;
