//! Line-oriented prompts that collect a [`ScoreSheet`] from a terminal.
//!
//! Each prompt repeats until it gets an acceptable answer, so a sheet built
//! here already satisfies every check in [`crate::input`] under the
//! prompter's [`BoundsPolicy`].

use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::input::{
    BoundsPolicy, ElectiveInput, validate_bounds, validate_positive, validate_score,
};
use crate::sheet::ScoreSheet;
use crate::subject::Subject;

pub struct Prompter<R, W> {
    input: R,
    output: W,
    policy: BoundsPolicy,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            policy: BoundsPolicy::default(),
        }
    }

    /// Sets how a raw score outside the entered band bounds is handled.
    /// Under [`BoundsPolicy::Reject`] the bounds are asked for again.
    pub fn with_policy(mut self, policy: BoundsPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for: {}", prompt.trim());
        }
        Ok(line.trim().to_string())
    }

    /// Asks for a score of `subject` until one in `0..=max` is entered.
    pub fn read_score(&mut self, label: &str, subject: Subject) -> Result<i32> {
        let max = subject.max_score();
        loop {
            let line = self.read_line(&format!("  Enter {label} (0-{max}): "))?;
            match line.parse::<i32>() {
                Ok(v) if validate_score(subject, v).is_ok() => return Ok(v),
                _ => {
                    debug!(label, input = %line, "Rejected score");
                    writeln!(
                        self.output,
                        "       Invalid input! Enter a whole number from 0 to {max}."
                    )?;
                }
            }
        }
    }

    /// Asks until a positive integer is entered.
    pub fn read_positive(&mut self, field: &'static str, prompt: &str) -> Result<i32> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<i32>() {
                Ok(v) if validate_positive(field, v).is_ok() => return Ok(v),
                _ => {
                    debug!(field, input = %line, "Rejected positive integer");
                    writeln!(self.output, "       Invalid input! Enter a positive integer.")?;
                }
            }
        }
    }

    /// Collects the ranking data for one elective.
    ///
    /// A rank past the total re-asks only the rank. Inverted bounds, or
    /// bounds that leave out the raw score under [`BoundsPolicy::Reject`],
    /// re-ask both bounds.
    pub fn read_elective(&mut self, subject: Subject, raw: i32) -> Result<ElectiveInput> {
        writeln!(
            self.output,
            "\n------------------------ {} assignment data ------------------------",
            subject
        )?;

        let rank_prompt = format!("  Enter your {subject} rank (positive integer): ");
        let total_prompt = format!("  Enter the {subject} candidate total (positive integer): ");
        let lower_label = format!("{subject} band raw lower bound");
        let upper_label = format!("{subject} band raw upper bound");

        let mut rank = self.read_positive("rank", &rank_prompt)?;
        let total = self.read_positive("total", &total_prompt)?;
        while rank > total {
            writeln!(self.output, "     Rank cannot exceed the candidate total! Try again.")?;
            rank = self.read_positive("rank", &rank_prompt)?;
        }

        let (lower, upper) = loop {
            let lower = self.read_score(&lower_label, subject)?;
            let upper = self.read_score(&upper_label, subject)?;

            if validate_bounds(lower, upper).is_err() {
                writeln!(
                    self.output,
                    "     Lower bound must be below the upper bound! Try again."
                )?;
                continue;
            }
            if self.policy == BoundsPolicy::Reject && !(lower..=upper).contains(&raw) {
                debug!(%subject, raw, lower, upper, "Rejected bounds excluding raw score");
                writeln!(
                    self.output,
                    "     Raw score {raw} must lie within the band bounds! Try again."
                )?;
                continue;
            }
            break (lower, upper);
        };

        Ok(ElectiveInput {
            raw,
            rank,
            total,
            lower,
            upper,
        })
    }

    /// Runs the full question sequence: six raw scores, then the ranking data
    /// for Chemistry and Biology.
    pub fn read_sheet(&mut self) -> Result<ScoreSheet> {
        writeln!(
            self.output,
            "\n------------------------ Raw scores ------------------------"
        )?;

        let mut raw = [0; 6];
        for (slot, subject) in raw.iter_mut().zip(Subject::ALL) {
            *slot = self.read_score(&format!("{subject} score"), subject)?;
        }
        let [chinese, math, english, physics, chemistry_raw, biology_raw] = raw;

        let chemistry = self.read_elective(Subject::Chemistry, chemistry_raw)?;
        let biology = self.read_elective(Subject::Biology, biology_raw)?;

        Ok(ScoreSheet {
            chinese,
            math,
            english,
            physics,
            chemistry,
            biology,
        })
    }
}
