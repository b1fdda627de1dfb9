use tracing::debug;

use super::band::GradeBand;

/// Maps `raw` from the band's observed raw range `[lower, upper]` onto the
/// band's assigned range `[score_start, score_end]`.
///
/// ```text
/// X = X1 + (Y - Y1) * (X2 - X1) / (Y2 - Y1)
/// ```
///
/// `Y` is the raw score, `Y1`/`Y2` the raw bounds, `X1`/`X2` the band's
/// assigned bounds. The result is rounded half away from zero. A raw score
/// equal to either bound returns the matching assigned bound directly.
///
/// Requires `lower < upper`. A raw score outside the bounds is not clamped
/// and extrapolates past the band's assigned range.
pub fn assign(raw: i32, band: &GradeBand, lower: i32, upper: i32) -> i32 {
    if raw == lower {
        return band.score_start;
    }
    if raw == upper {
        return band.score_end;
    }

    let y = f64::from(raw);
    let y1 = f64::from(lower);
    let y2 = f64::from(upper);
    let x1 = f64::from(band.score_start);
    let x2 = f64::from(band.score_end);

    let exact = x1 + (y - y1) * (x2 - x1) / (y2 - y1);
    let assigned = exact.round() as i32;

    debug!(raw, lower, upper, band = %band.label, exact, assigned, "Score assigned");
    assigned
}
