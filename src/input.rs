//! Validation boundary between raw caller input and the grading core.
//!
//! Everything the core assumes (score ceilings, positive ranks, rank within
//! total, ordered band bounds) is checked here and reported as an
//! [`InputError`]. The grading functions themselves never fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::grading::{GradeBand, assign, classify};
use crate::subject::Subject;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{subject} score {score} is outside 0..={max}")]
    ScoreOutOfRange { subject: Subject, score: i32, max: i32 },

    #[error("{field} must be a positive integer, got {value}")]
    NotPositive { field: &'static str, value: i32 },

    #[error("rank {rank} exceeds the total of {total} candidates")]
    RankExceedsTotal { rank: u32, total: u32 },

    #[error("band lower bound {lower} must be below the upper bound {upper}")]
    InvertedBounds { lower: i32, upper: i32 },

    #[error("raw score {raw} lies outside the band bounds [{lower}, {upper}]")]
    RawOutsideBand { raw: i32, lower: i32, upper: i32 },
}

/// What to do with a raw score outside its band's observed raw range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Reject with [`InputError::RawOutsideBand`].
    #[default]
    Reject,
    /// Let the interpolation run past the band's range.
    Extrapolate,
}

impl BoundsPolicy {
    pub fn from_flag(allow_extrapolation: bool) -> Self {
        if allow_extrapolation {
            BoundsPolicy::Extrapolate
        } else {
            BoundsPolicy::Reject
        }
    }
}

/// Checks a score against the subject's ceiling.
pub fn validate_score(subject: Subject, score: i32) -> Result<i32, InputError> {
    let max = subject.max_score();
    if (0..=max).contains(&score) {
        Ok(score)
    } else {
        Err(InputError::ScoreOutOfRange {
            subject,
            score,
            max,
        })
    }
}

/// Checks that `value` is a positive integer.
pub fn validate_positive(field: &'static str, value: i32) -> Result<u32, InputError> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or(InputError::NotPositive { field, value })
}

/// Checks a rank/total pair and returns both as unsigned values.
pub fn validate_rank(rank: i32, total: i32) -> Result<(u32, u32), InputError> {
    let rank = validate_positive("rank", rank)?;
    let total = validate_positive("total", total)?;
    if rank > total {
        return Err(InputError::RankExceedsTotal { rank, total });
    }
    Ok((rank, total))
}

/// Checks that the band bounds are ordered.
pub fn validate_bounds(lower: i32, upper: i32) -> Result<(), InputError> {
    if lower >= upper {
        return Err(InputError::InvertedBounds { lower, upper });
    }
    Ok(())
}

/// Unvalidated assignment data for one elective subject, as supplied by a
/// score sheet or the interactive prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectiveInput {
    pub raw: i32,
    pub rank: i32,
    pub total: i32,
    pub lower: i32,
    pub upper: i32,
}

/// Validated, single-use input for grading one elective subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentContext {
    subject: Subject,
    raw: i32,
    rank: u32,
    total: u32,
    lower: i32,
    upper: i32,
}

/// Outcome of grading one elective subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment {
    pub band: &'static GradeBand,
    pub assigned: i32,
}

impl AssignmentContext {
    pub fn new(
        subject: Subject,
        input: &ElectiveInput,
        policy: BoundsPolicy,
    ) -> Result<Self, InputError> {
        let raw = validate_score(subject, input.raw)?;
        let (rank, total) = validate_rank(input.rank, input.total)?;
        validate_score(subject, input.lower)?;
        validate_score(subject, input.upper)?;
        validate_bounds(input.lower, input.upper)?;

        let (lower, upper) = (input.lower, input.upper);
        if !(lower..=upper).contains(&raw) {
            match policy {
                BoundsPolicy::Reject => {
                    return Err(InputError::RawOutsideBand { raw, lower, upper });
                }
                BoundsPolicy::Extrapolate => {
                    warn!(%subject, raw, lower, upper, "Raw score outside band bounds, extrapolating");
                }
            }
        }

        Ok(Self {
            subject,
            raw,
            rank,
            total,
            lower,
            upper,
        })
    }

    pub fn subject(&self) -> Subject {
        self.subject
    }

    pub fn raw(&self) -> i32 {
        self.raw
    }

    /// Classifies the rank, then maps the raw score inside that band.
    pub fn evaluate(self) -> Assignment {
        let band = classify(self.rank, self.total);
        let assigned = assign(self.raw, band, self.lower, self.upper);
        Assignment { band, assigned }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::GradeLabel;

    fn elective(raw: i32, rank: i32, total: i32, lower: i32, upper: i32) -> ElectiveInput {
        ElectiveInput {
            raw,
            rank,
            total,
            lower,
            upper,
        }
    }

    #[test]
    fn test_validate_score_respects_ceiling() {
        assert_eq!(validate_score(Subject::Math, 150), Ok(150));
        assert_eq!(validate_score(Subject::Physics, 0), Ok(0));
        assert_eq!(
            validate_score(Subject::Physics, 101),
            Err(InputError::ScoreOutOfRange {
                subject: Subject::Physics,
                score: 101,
                max: 100
            })
        );
        assert!(validate_score(Subject::English, -1).is_err());
    }

    #[test]
    fn test_validate_rank() {
        assert_eq!(validate_rank(1, 1), Ok((1, 1)));
        assert_eq!(
            validate_rank(0, 10),
            Err(InputError::NotPositive {
                field: "rank",
                value: 0
            })
        );
        assert_eq!(
            validate_rank(3, -2),
            Err(InputError::NotPositive {
                field: "total",
                value: -2
            })
        );
        assert_eq!(
            validate_rank(11, 10),
            Err(InputError::RankExceedsTotal { rank: 11, total: 10 })
        );
    }

    #[test]
    fn test_validate_bounds() {
        assert!(validate_bounds(60, 80).is_ok());
        assert_eq!(
            validate_bounds(80, 80),
            Err(InputError::InvertedBounds { lower: 80, upper: 80 })
        );
        assert!(validate_bounds(81, 80).is_err());
    }

    #[test]
    fn test_context_evaluates_chemistry() {
        let ctx = AssignmentContext::new(
            Subject::Chemistry,
            &elective(75, 200, 1000, 65, 85),
            BoundsPolicy::Reject,
        )
        .unwrap();
        let result = ctx.evaluate();

        assert_eq!(result.band.label, GradeLabel::B);
        assert_eq!(result.assigned, 78);
    }

    #[test]
    fn test_context_rejects_raw_outside_band_by_default() {
        let err = AssignmentContext::new(
            Subject::Biology,
            &elective(50, 5, 100, 60, 80),
            BoundsPolicy::default(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            InputError::RawOutsideBand {
                raw: 50,
                lower: 60,
                upper: 80
            }
        );
    }

    #[test]
    fn test_context_extrapolates_when_allowed() {
        let ctx = AssignmentContext::new(
            Subject::Biology,
            &elective(90, 30, 100, 60, 80),
            BoundsPolicy::from_flag(true),
        )
        .unwrap();
        let result = ctx.evaluate();

        assert_eq!(result.band.label, GradeLabel::B);
        assert_eq!(result.assigned, 92);
    }

    #[test]
    fn test_context_rejects_bad_rank_and_bounds() {
        assert!(matches!(
            AssignmentContext::new(
                Subject::Chemistry,
                &elective(70, 101, 100, 60, 80),
                BoundsPolicy::Reject
            ),
            Err(InputError::RankExceedsTotal { .. })
        ));
        assert!(matches!(
            AssignmentContext::new(
                Subject::Chemistry,
                &elective(70, 1, 100, 80, 60),
                BoundsPolicy::Extrapolate
            ),
            Err(InputError::InvertedBounds { .. })
        ));
        assert!(matches!(
            AssignmentContext::new(
                Subject::Chemistry,
                &elective(70, 1, 100, 60, 120),
                BoundsPolicy::Reject
            ),
            Err(InputError::ScoreOutOfRange { score: 120, .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = InputError::RankExceedsTotal { rank: 5, total: 4 };
        assert_eq!(err.to_string(), "rank 5 exceeds the total of 4 candidates");
    }
}
