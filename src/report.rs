//! Result types and the fixed-width text report.

use serde::Serialize;
use std::fmt::Write;

use crate::grading::GradeLabel;
use crate::subject::Subject;

const COLUMN_WIDTH: usize = 12;
const RULE_HEAVY: &str = "=============================================================";
const RULE_LIGHT: &str = "-------------------------------------------------------------";

/// One subject's line in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectResult {
    pub subject: Subject,
    pub raw: i32,
    /// Assigned score; `None` for subjects counted at raw score.
    pub assigned: Option<i32>,
    pub band: Option<GradeLabel>,
}

impl SubjectResult {
    pub fn raw_counted(subject: Subject, raw: i32) -> Self {
        Self {
            subject,
            raw,
            assigned: None,
            band: None,
        }
    }

    pub fn assigned(subject: Subject, raw: i32, assigned: i32, band: GradeLabel) -> Self {
        Self {
            subject,
            raw,
            assigned: Some(assigned),
            band: Some(band),
        }
    }

    /// The score that contributes to the total.
    pub fn counted(&self) -> i32 {
        self.assigned.unwrap_or(self.raw)
    }
}

/// All six subjects plus the final total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub subjects: Vec<SubjectResult>,
    pub total: i32,
}

impl ScoreReport {
    pub fn new(subjects: Vec<SubjectResult>) -> Self {
        let total = subjects.iter().map(SubjectResult::counted).sum();
        Self { subjects, total }
    }

    pub fn get(&self, subject: Subject) -> Option<&SubjectResult> {
        self.subjects.iter().find(|s| s.subject == subject)
    }
}

/// The welcome banner shown before interactive input.
pub fn banner() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE_HEAVY}");
    let _ = writeln!(out, "{:^61}", "Assigned-Score Total Calculator");
    let _ = writeln!(out, "{RULE_HEAVY}");
    let _ = writeln!(out, "  1. Chinese, Math, English and Physics count at raw score");
    let _ = writeln!(out, "  2. Chemistry and Biology are assigned by the five-band rule");
    let _ = writeln!(out, "  3. Rank picks the band, raw score is scaled inside it");
    let _ = writeln!(out, "{RULE_HEAVY}");
    out
}

/// Renders the report as a fixed-width table.
///
/// Raw-counted subjects show `raw` in the assigned column and `-` as band.
pub fn render(report: &ScoreReport) -> String {
    let w = COLUMN_WIDTH;
    let mut out = String::new();

    let _ = writeln!(out, "{RULE_HEAVY}");
    let _ = writeln!(out, "{:^61}", "Result Summary");
    let _ = writeln!(out, "{RULE_HEAVY}");
    let header = format!(
        "{:<w$}{:<w$}{:<w$}{:<w$}",
        "Subject", "Raw", "Assigned", "Band"
    );
    let _ = writeln!(out, "{}", header.trim_end());
    let _ = writeln!(out, "{RULE_LIGHT}");

    for row in &report.subjects {
        let assigned = row
            .assigned
            .map_or_else(|| "raw".to_string(), |s| s.to_string());
        let band = row.band.map_or("-", GradeLabel::as_str);
        let line = format!(
            "{:<w$}{:<w$}{:<w$}{:<w$}",
            row.subject, row.raw, assigned, band
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }

    let _ = writeln!(out, "{RULE_LIGHT}");
    let _ = writeln!(out, "   Final total (with assigned scores): {}", report.total);
    let _ = writeln!(out, "{RULE_HEAVY}");
    out
}
