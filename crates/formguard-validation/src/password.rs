//! Password composition counting

/// Counts the capital letters in a value.
///
/// # Examples
/// ```
/// use formguard_validation::password::capital_count;
/// assert_eq!(capital_count("aBcD"), 2);
/// assert_eq!(capital_count("abcd"), 0);
/// ```
pub fn capital_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_uppercase()).count()
}

/// Counts the small letters in a value.
pub fn small_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_lowercase()).count()
}

/// Counts the digits in a value.
pub fn digit_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Counts the symbols in a value.
///
/// A symbol is any character that is not an ASCII letter or digit, so
/// punctuation, underscores, whitespace and non-ASCII characters all count.
pub fn symbol_count(value: &str) -> usize {
    value.chars().filter(|c| !c.is_ascii_alphanumeric()).count()
}
