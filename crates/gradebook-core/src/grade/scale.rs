use super::Letter;

/// Points below the best score covered by each band, best band first.
pub const BAND_WIDTH: i32 = 10;

/// Grade `value` against the best score of its comparison set.
///
/// Thresholds are checked in order and the first match wins:
/// within 10 points of `best` is an A, within 20 a B, within 30 a C,
/// within 40 a D, anything lower an F. There is no clamping, so the
/// function is total over every `value` and `best` (NaN grades as F).
pub fn grade(value: f64, best: i32) -> Letter {
    let best = f64::from(best);
    let width = f64::from(BAND_WIDTH);

    if value >= best - width {
        Letter::A
    } else if value >= best - 2.0 * width {
        Letter::B
    } else if value >= best - 3.0 * width {
        Letter::C
    } else if value >= best - 4.0 * width {
        Letter::D
    } else {
        Letter::F
    }
}
