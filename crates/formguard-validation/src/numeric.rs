//! Lenient numeric parsing for number inputs

/// Parses a field value as a number, ignoring surrounding whitespace.
///
/// Returns `None` for empty or unparsable input instead of an error, so
/// bound checks can skip values the control never constrained to digits.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
