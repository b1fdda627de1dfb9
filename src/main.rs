//! CLI entry point for the assigned-score calculator.
//!
//! Provides subcommands for classifying a single rank, assigning a single
//! elective score, computing a full score sheet from JSON, and collecting a
//! sheet interactively.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use score_assign::grading::{classify, percentile};
use score_assign::input::{AssignmentContext, BoundsPolicy, ElectiveInput, validate_rank};
use score_assign::output::{append_record, print_json, print_pretty, print_table};
use score_assign::prompt::Prompter;
use score_assign::report::{self, ScoreReport};
use score_assign::sheet::ScoreSheet;
use score_assign::subject::Subject;
use std::ffi::OsStr;
use std::io;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "score_assign")]
#[command(about = "Compute exam totals with rank-based assigned scores", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the grade band for a rank among all candidates
    Band {
        /// Rank among candidates (1 = best)
        #[arg(short, long)]
        rank: i32,

        /// Total number of ranked candidates
        #[arg(short, long)]
        total: i32,
    },
    /// Assign a single elective score
    Assign {
        /// Elective subject (chemistry or biology)
        #[arg(short, long, default_value = "chemistry", value_parser = parse_elective)]
        subject: Subject,

        /// Raw score
        #[arg(long)]
        raw: i32,

        /// Rank among candidates (1 = best)
        #[arg(short, long)]
        rank: i32,

        /// Total number of ranked candidates
        #[arg(short, long)]
        total: i32,

        /// Lowest raw score observed in the band
        #[arg(long)]
        lower: i32,

        /// Highest raw score observed in the band
        #[arg(long)]
        upper: i32,

        /// Allow a raw score outside [lower, upper] and extrapolate
        #[arg(long, default_value_t = false)]
        allow_extrapolation: bool,
    },
    /// Compute the full total from a JSON score sheet or from flags
    Compute {
        /// Path to the JSON score sheet
        #[arg(short, long, value_name = "FILE", conflicts_with = "flags")]
        input: Option<String>,

        #[command(flatten)]
        scores: ScoreFlags,

        #[command(flatten)]
        report: ReportArgs,
    },
    /// Enter scores at the terminal and compute the total
    Interactive {
        #[command(flatten)]
        report: ReportArgs,
    },
}

#[derive(Args)]
struct ReportArgs {
    /// Print the result as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Optional: CSV file to append the result to
    #[arg(short, long)]
    output: Option<String>,

    /// Allow raw scores outside their band bounds and extrapolate
    #[arg(long, default_value_t = false)]
    allow_extrapolation: bool,
}

/// Every score of a sheet given on the command line, used when `--input` is absent.
#[derive(Args)]
#[group(id = "flags", multiple = true)]
struct ScoreFlags {
    #[arg(long, required_unless_present = "input")]
    chinese: Option<i32>,
    #[arg(long, required_unless_present = "input")]
    math: Option<i32>,
    #[arg(long, required_unless_present = "input")]
    english: Option<i32>,
    #[arg(long, required_unless_present = "input")]
    physics: Option<i32>,

    /// Chemistry as RAW,RANK,TOTAL,LOWER,UPPER
    #[arg(long, value_name = "RAW,RANK,TOTAL,LOWER,UPPER", value_parser = parse_elective_input, required_unless_present = "input")]
    chemistry: Option<ElectiveInput>,

    /// Biology as RAW,RANK,TOTAL,LOWER,UPPER
    #[arg(long, value_name = "RAW,RANK,TOTAL,LOWER,UPPER", value_parser = parse_elective_input, required_unless_present = "input")]
    biology: Option<ElectiveInput>,
}

impl ScoreFlags {
    fn into_sheet(self) -> Result<ScoreSheet> {
        Ok(ScoreSheet {
            chinese: self.chinese.context("--chinese is required without --input")?,
            math: self.math.context("--math is required without --input")?,
            english: self.english.context("--english is required without --input")?,
            physics: self.physics.context("--physics is required without --input")?,
            chemistry: self.chemistry.context("--chemistry is required without --input")?,
            biology: self.biology.context("--biology is required without --input")?,
        })
    }
}

fn parse_elective(s: &str) -> Result<Subject, String> {
    Subject::ALL
        .into_iter()
        .filter(|subject| subject.is_elective())
        .find(|subject| subject.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("'{s}' is not an elective (chemistry, biology)"))
}

fn parse_elective_input(s: &str) -> Result<ElectiveInput, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("'{s}': {e}"))?;

    match parts[..] {
        [raw, rank, total, lower, upper] => Ok(ElectiveInput {
            raw,
            rank,
            total,
            lower,
            upper,
        }),
        _ => Err(format!("'{s}' must be RAW,RANK,TOTAL,LOWER,UPPER")),
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/score_assign.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("score_assign.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Band { rank, total } => {
            let (rank, total) = validate_rank(rank, total)?;
            let band = classify(rank, total);

            println!(
                "Rank {rank}/{total} (percentile {:.2}) -> band {} (assigned {}-{})",
                percentile(rank, total),
                band.label,
                band.score_start,
                band.score_end
            );
        }
        Commands::Assign {
            subject,
            raw,
            rank,
            total,
            lower,
            upper,
            allow_extrapolation,
        } => {
            let input = ElectiveInput {
                raw,
                rank,
                total,
                lower,
                upper,
            };
            let ctx =
                AssignmentContext::new(subject, &input, BoundsPolicy::from_flag(allow_extrapolation))?;
            let result = ctx.evaluate();

            println!(
                "{subject}: raw {raw} in [{lower}, {upper}], band {} -> assigned {}",
                result.band.label, result.assigned
            );
        }
        Commands::Compute {
            input,
            scores,
            report,
        } => {
            let sheet = match input {
                Some(path) => ScoreSheet::load(&path)?,
                None => scores.into_sheet()?,
            };
            compute(&sheet, &report)?;
        }
        Commands::Interactive { report } => {
            interactive(&report)?;
        }
    }

    Ok(())
}

/// Evaluates a score sheet and reports its total.
#[tracing::instrument(skip_all)]
fn compute(sheet: &ScoreSheet, args: &ReportArgs) -> Result<()> {
    let report = sheet.evaluate(BoundsPolicy::from_flag(args.allow_extrapolation))?;
    emit(&report, args)
}

/// Prompts for every score on the terminal and reports the total.
#[tracing::instrument(skip(args))]
fn interactive(args: &ReportArgs) -> Result<()> {
    print!("{}", report::banner());

    let stdin = io::stdin();
    let policy = BoundsPolicy::from_flag(args.allow_extrapolation);
    let mut prompter = Prompter::new(stdin.lock(), io::stdout()).with_policy(policy);
    let sheet = prompter.read_sheet()?;
    info!("Score sheet collected");

    let report = sheet.evaluate(policy)?;
    emit(&report, args)
}

fn emit(report: &ScoreReport, args: &ReportArgs) -> Result<()> {
    print_pretty(report);

    if args.json {
        print_json(report)?;
    } else {
        print_table(report);
    }

    if let Some(path) = &args.output {
        append_record(path, report)?;
    }

    Ok(())
}
