// File: src/validation/checks.rs
// Purpose: The check catalog - one check per rule category

use once_cell::sync::Lazy;
use regex::Regex;

use formguard_validation::{
    capital_count, char_count, digit_count, is_blank, parse_number, small_count, symbol_count,
};

use crate::field::{Field, FieldKind};
use crate::form::Form;
use crate::rules::FieldRules;

// Email validation regex: local@domain.tld with no whitespace or extra '@'
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

// URL validation regex: explicit scheme followed by non-space, non-quote text
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(ftp|http|https)://[^ "]+$"#).unwrap()
});

/// Required check for text, number and textarea fields. Email, URL and
/// password fields produce their presence messages in their own checks.
pub fn check_required(field: &Field, rules: &FieldRules) -> Option<String> {
    if !matches!(
        field.kind,
        FieldKind::Text | FieldKind::Number | FieldKind::Textarea
    ) {
        return None;
    }
    if rules.required && is_blank(&field.value) {
        return Some(
            rules
                .messages
                .required
                .clone()
                .unwrap_or_else(|| "This field is required".to_string()),
        );
    }
    None
}

/// Numeric bounds for number fields. Blank or unparsable values produce no
/// error here; presence is the required check's concern.
pub fn check_number_bounds(field: &Field, rules: &FieldRules) -> Option<String> {
    if field.kind != FieldKind::Number || is_blank(&field.value) {
        return None;
    }
    let value = parse_number(&field.value)?;
    if let Some(min) = rules.min {
        if value < min {
            return Some(
                rules
                    .messages
                    .min
                    .clone()
                    .unwrap_or_else(|| format!("Minimum value is {}", min)),
            );
        }
    }
    if let Some(max) = rules.max {
        if value > max {
            return Some(
                rules
                    .messages
                    .max
                    .clone()
                    .unwrap_or_else(|| format!("Maximum value is {}", max)),
            );
        }
    }
    None
}

/// Email fields: presence when required, then the address pattern for any
/// non-blank value.
pub fn check_email(field: &Field, rules: &FieldRules) -> Option<String> {
    if field.kind != FieldKind::Email {
        return None;
    }
    if rules.required && is_blank(&field.value) {
        Some(
            rules
                .messages
                .required
                .clone()
                .unwrap_or_else(|| "Email is required".to_string()),
        )
    } else if !is_blank(&field.value) && !EMAIL_REGEX.is_match(&field.value) {
        Some(
            rules
                .messages
                .invalid
                .clone()
                .unwrap_or_else(|| "Please enter a valid email address".to_string()),
        )
    } else {
        None
    }
}

/// URL fields: presence when required, then the scheme pattern for any
/// non-blank value.
pub fn check_url(field: &Field, rules: &FieldRules) -> Option<String> {
    if field.kind != FieldKind::Url {
        return None;
    }
    if rules.required && is_blank(&field.value) {
        Some(
            rules
                .messages
                .required
                .clone()
                .unwrap_or_else(|| "URL is required".to_string()),
        )
    } else if !is_blank(&field.value) && !URL_REGEX.is_match(&field.value) {
        Some(
            rules
                .messages
                .invalid
                .clone()
                .unwrap_or_else(|| "Please enter a valid URL".to_string()),
        )
    } else {
        None
    }
}

/// Password composition sub-checks against the field's policy, returning
/// every failing sub-rule's message in a fixed order.
///
/// The caller records them in sequence, so the last entry is the message
/// that survives for the field. Capital letters are checked last and win
/// over any other composition failure.
pub fn password_failures(field: &Field, rules: &FieldRules) -> Vec<String> {
    if field.kind != FieldKind::Password {
        return Vec::new();
    }
    let Some(policy) = &rules.password else {
        return Vec::new();
    };

    let value = &field.value;
    let msgs = &policy.messages;
    let mut failures = Vec::new();

    if char_count(value) < policy.min_length {
        failures.push(msgs.min_length.clone().unwrap_or_else(|| {
            format!("Password must be at least {} characters", policy.min_length)
        }));
    }
    if small_count(value) < policy.small_letters {
        failures.push(msgs.small_letters.clone().unwrap_or_else(|| {
            format!(
                "Password must contain at least {} small letter(s)",
                policy.small_letters
            )
        }));
    }
    if digit_count(value) < policy.numbers {
        failures.push(msgs.numbers.clone().unwrap_or_else(|| {
            format!("Password must contain at least {} number(s)", policy.numbers)
        }));
    }
    if symbol_count(value) < policy.symbols {
        failures.push(msgs.symbols.clone().unwrap_or_else(|| {
            format!("Password must contain at least {} symbol(s)", policy.symbols)
        }));
    }
    if capital_count(value) < policy.capital_letters {
        failures.push(msgs.capital_letters.clone().unwrap_or_else(|| {
            format!(
                "Password must contain at least {} capital letter(s)",
                policy.capital_letters
            )
        }));
    }
    failures
}

/// Length bounds for text and textarea fields, counted in characters.
/// Blank values are the required check's concern.
pub fn check_text_length(field: &Field, rules: &FieldRules) -> Option<String> {
    if !matches!(field.kind, FieldKind::Text | FieldKind::Textarea) || is_blank(&field.value) {
        return None;
    }
    let length = char_count(&field.value);
    if let Some(min) = rules.min_length {
        if length < min {
            return Some(
                rules
                    .messages
                    .min_length
                    .clone()
                    .unwrap_or_else(|| format!("Must be at least {} characters", min)),
            );
        }
    }
    if let Some(max) = rules.max_length {
        if length > max {
            return Some(
                rules
                    .messages
                    .max_length
                    .clone()
                    .unwrap_or_else(|| format!("Must be no more than {} characters", max)),
            );
        }
    }
    None
}

/// Required checkboxes: at least one control sharing the field's name must
/// be checked. Runs once per group member, always producing the same
/// message, so duplicates collapse in the error map.
pub fn check_checkbox_group(form: &Form, field: &Field, rules: &FieldRules) -> Option<String> {
    if field.kind != FieldKind::Checkbox || !rules.required {
        return None;
    }
    if form.group_has_checked(&field.name, FieldKind::Checkbox) {
        return None;
    }
    Some(
        rules
            .messages
            .required
            .clone()
            .unwrap_or_else(|| "At least one option must be selected".to_string()),
    )
}

/// Required radios: one control sharing the field's name must be selected.
pub fn check_radio_group(form: &Form, field: &Field, rules: &FieldRules) -> Option<String> {
    if field.kind != FieldKind::Radio || !rules.required {
        return None;
    }
    if form.group_has_checked(&field.name, FieldKind::Radio) {
        return None;
    }
    Some(
        rules
            .messages
            .required
            .clone()
            .unwrap_or_else(|| "Please select an option".to_string()),
    )
}
