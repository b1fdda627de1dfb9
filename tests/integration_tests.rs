use score_assign::grading::{BANDS, GradeLabel, assign, classify};
use score_assign::input::{BoundsPolicy, ElectiveInput, InputError};
use score_assign::prompt::Prompter;
use score_assign::report::render;
use score_assign::sheet::ScoreSheet;
use std::io::Cursor;

fn sample_sheet() -> ScoreSheet {
    ScoreSheet {
        chinese: 120,
        math: 130,
        english: 125,
        physics: 85,
        chemistry: ElectiveInput {
            raw: 75,
            rank: 200,
            total: 1000,
            lower: 65,
            upper: 85,
        },
        biology: ElectiveInput {
            raw: 90,
            rank: 50,
            total: 1000,
            lower: 80,
            upper: 95,
        },
    }
}

#[test]
fn test_full_pipeline() {
    let report = sample_sheet().evaluate(BoundsPolicy::Reject).unwrap();

    assert_eq!(report.total, 633);
    let text = render(&report);
    assert!(text.contains("Chemistry   75          78          B"));
    assert!(text.contains("Biology     90          95          A"));
}

#[test]
fn test_core_scenarios() {
    assert_eq!(classify(5, 100).label, GradeLabel::A);
    assert_eq!(classify(50, 100).label, GradeLabel::B);

    let b = classify(200, 1000);
    assert_eq!(b.label, GradeLabel::B);
    assert_eq!(assign(70, b, 60, 80), 78);
    assert_eq!(assign(60, b, 60, 80), 71);
}

#[test]
fn test_every_band_reachable_from_some_rank() {
    let total = 1000;
    for band in &BANDS {
        assert!((1..=total).any(|rank| classify(rank, total).label == band.label));
    }
}

#[test]
fn test_interactive_sheet_matches_json_sheet() {
    let input = "120\n130\n125\n85\n75\n90\n200\n1000\n65\n85\n50\n1000\n80\n95\n";
    let mut prompter = Prompter::new(Cursor::new(input.as_bytes()), Vec::new());
    let sheet = prompter.read_sheet().unwrap();

    assert_eq!(sheet, sample_sheet());
}

#[test]
fn test_sheet_json_round_trip_and_validation_error() {
    let mut sheet: ScoreSheet =
        serde_json::from_str(&serde_json::to_string(&sample_sheet()).unwrap()).unwrap();
    sheet.chemistry.lower = 90;
    sheet.chemistry.upper = 85;

    let err = sheet.evaluate(BoundsPolicy::Extrapolate).unwrap_err();
    assert_eq!(err, InputError::InvertedBounds { lower: 90, upper: 85 });
}
