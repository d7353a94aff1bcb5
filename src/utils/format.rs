/// Renders a measure rounded to two decimals with trailing zeros trimmed,
/// so `20.0` prints as `20` and `28.259999999999998` as `28.26`.
pub fn format_measure(value: f64) -> String {
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
