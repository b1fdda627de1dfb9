//! A student's complete set of scores and its evaluation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::input::{AssignmentContext, BoundsPolicy, ElectiveInput, InputError, validate_score};
use crate::report::{ScoreReport, SubjectResult};
use crate::subject::Subject;

/// Raw scores for all six subjects plus the ranking data for the two
/// electives.
///
/// Stored as a plain JSON object on disk:
/// ```json
/// {
///   "chinese": 120, "math": 130, "english": 125, "physics": 85,
///   "chemistry": { "raw": 75, "rank": 200, "total": 1000, "lower": 65, "upper": 85 },
///   "biology":   { "raw": 90, "rank": 50,  "total": 1000, "lower": 80, "upper": 95 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub chinese: i32,
    pub math: i32,
    pub english: i32,
    pub physics: i32,
    pub chemistry: ElectiveInput,
    pub biology: ElectiveInput,
}

impl ScoreSheet {
    /// Loads a sheet from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("reading score sheet '{path}'"))?;
        let sheet: ScoreSheet = serde_json::from_str(&content)
            .with_context(|| format!("parsing score sheet '{path}'"))?;
        debug!(path, "Score sheet loaded");
        Ok(sheet)
    }

    /// Validates every input, grades both electives and totals the result.
    pub fn evaluate(&self, policy: BoundsPolicy) -> Result<ScoreReport, InputError> {
        let mut subjects = Vec::with_capacity(Subject::ALL.len());

        for (subject, raw) in [
            (Subject::Chinese, self.chinese),
            (Subject::Math, self.math),
            (Subject::English, self.english),
            (Subject::Physics, self.physics),
        ] {
            subjects.push(SubjectResult::raw_counted(subject, validate_score(subject, raw)?));
        }

        for (subject, input) in [
            (Subject::Chemistry, &self.chemistry),
            (Subject::Biology, &self.biology),
        ] {
            let ctx = AssignmentContext::new(subject, input, policy)?;
            let result = ctx.evaluate();
            subjects.push(SubjectResult::assigned(
                ctx.subject(),
                ctx.raw(),
                result.assigned,
                result.band.label,
            ));
        }

        let report = ScoreReport::new(subjects);
        info!(total = report.total, "Score sheet evaluated");
        Ok(report)
    }
}
