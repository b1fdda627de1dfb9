//! Flat CSV row form of a computed report.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::report::ScoreReport;
use crate::subject::Subject;

/// A flat, single-row view of a [`ScoreReport`] for the CSV result log.
#[derive(Debug, Default, Serialize)]
pub struct ResultRecord {
    pub timestamp: DateTime<Utc>,

    // raw-counted subjects
    pub chinese: i32,
    pub math: i32,
    pub english: i32,
    pub physics: i32,

    // electives
    pub chemistry_raw: i32,
    pub chemistry_assigned: Option<i32>,
    pub chemistry_band: Option<String>,
    pub biology_raw: i32,
    pub biology_assigned: Option<i32>,
    pub biology_band: Option<String>,

    pub total: i32,
}

impl ResultRecord {
    pub fn from_report(report: &ScoreReport) -> Self {
        let mut r = ResultRecord {
            timestamp: Utc::now(),
            total: report.total,
            ..Default::default()
        };

        for s in &report.subjects {
            let band = s.band.map(|b| b.to_string());
            match s.subject {
                Subject::Chinese => r.chinese = s.raw,
                Subject::Math => r.math = s.raw,
                Subject::English => r.english = s.raw,
                Subject::Physics => r.physics = s.raw,
                Subject::Chemistry => {
                    r.chemistry_raw = s.raw;
                    r.chemistry_assigned = s.assigned;
                    r.chemistry_band = band;
                }
                Subject::Biology => {
                    r.biology_raw = s.raw;
                    r.biology_assigned = s.assigned;
                    r.biology_band = band;
                }
            }
        }

        r
    }
}
