/// Round to `digits` decimal places.
/// The exact binary value is rounded (ties to even), so 4.35 -> 4.3 because
/// the double closest to 4.35 lies just below it.
pub fn round_to(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", digits, value)
        .parse::<f64>()
        .unwrap_or(value)
}

/// (predicted - actual) / actual * 100 [%]
/// Undefined (None) when the recorded value is zero.
pub fn percent_difference(predicted: f64, actual: f64) -> Option<f64> {
    if actual == 0.0 {
        return None;
    }
    Some((predicted - actual) / actual * 100.0)
}
