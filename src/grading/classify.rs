use tracing::debug;

use super::band::{self, BANDS, GradeBand};

/// Percentile rank of `rank` among `total` candidates, as a percentage.
///
/// Rank 1 of 1000 is the 0.1th percentile; the last rank is always 100.
pub fn percentile(rank: u32, total: u32) -> f64 {
    f64::from(rank) / f64::from(total) * 100.0
}

/// Converts a rank among `total` candidates into its grade band.
///
/// Bands are scanned A to E and the first whose `(start, end]` interval holds
/// the percentile wins. Callers must ensure `1 <= rank <= total`.
///
/// If nothing matches (a zero rank, a zero total or a rank past the total),
/// band E is returned. That branch is a fallback for degenerate input and
/// cannot be reached under the preconditions above.
pub fn classify(rank: u32, total: u32) -> &'static GradeBand {
    let p = percentile(rank, total);

    let grade = match BANDS.iter().find(|b| b.contains(p)) {
        Some(b) => b,
        None => {
            debug!(rank, total, percentile = p, "No band matched, using lowest");
            band::lowest()
        }
    };

    debug!(rank, total, percentile = p, band = %grade.label, "Band classified");
    grade
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::GradeLabel;

    #[test]
    fn test_percentile_normal_values() {
        assert_eq!(percentile(5, 100), 5.0);
        assert_eq!(percentile(1, 4), 25.0);
        assert_eq!(percentile(200, 1000), 20.0);
    }

    #[test]
    fn test_classify_top_five_percent_is_a() {
        assert_eq!(classify(5, 100).label, GradeLabel::A);
    }

    #[test]
    fn test_classify_fiftieth_percentile_is_b() {
        // 50.0 is the inclusive top of B, not the start of C
        assert_eq!(classify(50, 100).label, GradeLabel::B);
        assert_eq!(classify(51, 100).label, GradeLabel::C);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(1, 1_000_000).label, GradeLabel::A);
        assert_eq!(classify(16, 100).label, GradeLabel::B);
        assert_eq!(classify(84, 100).label, GradeLabel::C);
        assert_eq!(classify(86, 100).label, GradeLabel::D);
        assert_eq!(classify(97, 100).label, GradeLabel::D);
        assert_eq!(classify(99, 100).label, GradeLabel::E);
    }

    #[test]
    fn test_classify_last_rank_is_e() {
        for total in [1, 2, 7, 100, 1000, 123_457] {
            assert_eq!(classify(total, total).label, GradeLabel::E);
        }
    }

    #[test]
    fn test_classify_exactly_one_band_matches() {
        for total in [1u32, 3, 7, 50, 99, 100, 101, 997] {
            for rank in 1..=total {
                let p = percentile(rank, total);
                let matches = BANDS.iter().filter(|b| b.contains(p)).count();
                assert_eq!(matches, 1, "rank {rank} of {total}");
                assert!(classify(rank, total).contains(p));
            }
        }
    }

    #[test]
    fn test_classify_is_non_increasing_in_rank() {
        let total = 500;
        for rank in 1..total {
            assert!(classify(rank, total).label <= classify(rank + 1, total).label);
        }
    }

    #[test]
    fn test_degenerate_input_falls_back_to_lowest_band() {
        // Only reachable when 1 <= rank <= total is violated
        assert_eq!(classify(0, 10).label, GradeLabel::E);
        assert_eq!(classify(11, 10).label, GradeLabel::E);
        assert_eq!(classify(1, 0).label, GradeLabel::E);
        assert_eq!(classify(0, 0).label, GradeLabel::E);
    }
}
