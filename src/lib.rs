pub mod grading;
pub mod input;
pub mod output;
pub mod prompt;
pub mod record;
pub mod report;
pub mod sheet;
pub mod subject;
