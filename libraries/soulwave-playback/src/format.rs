//! Clock formatting for the scrubber labels

/// Format seconds as `M:SS`
///
/// Minutes are not wrapped into hours (an hour-long session shows `60:00`).
/// Negative, NaN and infinite inputs render as `0:00`.
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }

    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
