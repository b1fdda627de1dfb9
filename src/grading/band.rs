//! The fixed five-tier band table.

use serde::Serialize;
use std::fmt;

/// Letter label of a grade band, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum GradeLabel {
    A,
    B,
    C,
    D,
    E,
}

impl GradeLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            GradeLabel::A => "A",
            GradeLabel::B => "B",
            GradeLabel::C => "C",
            GradeLabel::D => "D",
            GradeLabel::E => "E",
        }
    }
}

impl fmt::Display for GradeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One tier of the assignment scheme.
///
/// A band owns the percentile interval `(percentile_start, percentile_end]`
/// and the assigned-score interval `[score_start, score_end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeBand {
    pub label: GradeLabel,
    pub percentile_start: f64,
    pub percentile_end: f64,
    pub score_start: i32,
    pub score_end: i32,
}

impl GradeBand {
    /// Returns `true` if `percentile` falls in this band's half-open interval.
    pub fn contains(&self, percentile: f64) -> bool {
        percentile > self.percentile_start && percentile <= self.percentile_end
    }
}

/// The five bands, ordered by ascending percentile threshold.
///
/// | Band | Percentile | Assigned |
/// |------|------------|----------|
/// | A    | (0, 15]    | 86–100   |
/// | B    | (15, 50]   | 71–85    |
/// | C    | (50, 85]   | 56–70    |
/// | D    | (85, 98]   | 41–55    |
/// | E    | (98, 100]  | 30–40    |
pub static BANDS: [GradeBand; 5] = [
    GradeBand {
        label: GradeLabel::A,
        percentile_start: 0.0,
        percentile_end: 15.0,
        score_start: 86,
        score_end: 100,
    },
    GradeBand {
        label: GradeLabel::B,
        percentile_start: 15.0,
        percentile_end: 50.0,
        score_start: 71,
        score_end: 85,
    },
    GradeBand {
        label: GradeLabel::C,
        percentile_start: 50.0,
        percentile_end: 85.0,
        score_start: 56,
        score_end: 70,
    },
    GradeBand {
        label: GradeLabel::D,
        percentile_start: 85.0,
        percentile_end: 98.0,
        score_start: 41,
        score_end: 55,
    },
    GradeBand {
        label: GradeLabel::E,
        percentile_start: 98.0,
        percentile_end: 100.0,
        score_start: 30,
        score_end: 40,
    },
];

/// The last band in the table (E).
pub fn lowest() -> &'static GradeBand {
    &BANDS[BANDS.len() - 1]
}

/// Looks up a band by its label.
pub fn by_label(label: GradeLabel) -> &'static GradeBand {
    match label {
        GradeLabel::A => &BANDS[0],
        GradeLabel::B => &BANDS[1],
        GradeLabel::C => &BANDS[2],
        GradeLabel::D => &BANDS[3],
        GradeLabel::E => &BANDS[4],
    }
}
