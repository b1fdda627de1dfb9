//! The six examined subjects and their score ceilings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Full marks for Chinese, Math and English.
pub const SCORE_MAX_CORE: i32 = 150;
/// Full marks for Physics, Chemistry and Biology.
pub const SCORE_MAX_SCIENCE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Chinese,
    Math,
    English,
    Physics,
    Chemistry,
    Biology,
}

impl Subject {
    /// Report order.
    pub const ALL: [Subject; 6] = [
        Subject::Chinese,
        Subject::Math,
        Subject::English,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Subject::Chinese => "Chinese",
            Subject::Math => "Math",
            Subject::English => "English",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
        }
    }

    pub fn max_score(self) -> i32 {
        match self {
            Subject::Chinese | Subject::Math | Subject::English => SCORE_MAX_CORE,
            Subject::Physics | Subject::Chemistry | Subject::Biology => SCORE_MAX_SCIENCE,
        }
    }

    /// Returns `true` for subjects counted at an assigned score rather than raw.
    pub fn is_elective(self) -> bool {
        matches!(self, Subject::Chemistry | Subject::Biology)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
