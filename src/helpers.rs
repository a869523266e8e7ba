/// Format a duration in milliseconds as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_time(milliseconds: u64) -> String {
    let total_seconds = milliseconds / 1000;
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// `MM:SS`, or `--:--` when there is nothing to show yet.
pub fn format_optional_time(milliseconds: Option<f64>) -> String {
    match milliseconds {
        Some(ms) if ms.is_finite() && ms >= 0.0 => format_time(ms as u64),
        _ => "--:--".to_string(),
    }
}
