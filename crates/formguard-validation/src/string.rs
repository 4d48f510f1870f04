//! String length and emptiness helpers

/// Length of a value in characters, not bytes.
///
/// # Examples
/// ```
/// use formguard_validation::string::char_count;
/// assert_eq!(char_count("héllo"), 5);
/// ```
pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

/// True when a value is empty once surrounding whitespace is removed.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
