//! Phone number formatting and keystroke filtering for the phone field
//!
//! The phone field is always rendered in the national `+7 (XXX) XXX-XX-XX`
//! layout. The first digit typed is taken as the trunk prefix and replaced by
//! the fixed `+7`.

/// Maximum number of digits kept from the raw input
pub const MAX_PHONE_DIGITS: usize = 15;

/// Non-digit keys the phone field lets through
pub const ALLOWED_CONTROL_KEYS: &[&str] = &[
    "Backspace",
    "Delete",
    "Tab",
    "ArrowLeft",
    "ArrowRight",
    "ArrowUp",
    "ArrowDown",
];

/// What to do with a key pressed in the phone field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDecision {
    Allow,
    Suppress,
}

/// Decide whether a key press reaches the phone field.
///
/// `key` uses DOM `KeyboardEvent.key` naming: a single character for
/// printable keys, a name such as `Backspace` otherwise.
pub fn restrict_numeric_input(key: &str) -> KeyDecision {
    let mut chars = key.chars();
    let is_digit = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_digit());

    if is_digit || ALLOWED_CONTROL_KEYS.contains(&key) {
        KeyDecision::Allow
    } else {
        KeyDecision::Suppress
    }
}

/// Keep only the ASCII digits of `value`
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Re-render a phone field value from its digits.
///
/// Partial input is formatted as far as it goes, so the layout grows while
/// the user types:
///
/// ```
/// use feedback_form::formatting::format_phone_number;
///
/// assert_eq!(format_phone_number(""), "");
/// assert_eq!(format_phone_number("8"), "+7 ");
/// assert_eq!(format_phone_number("8999"), "+7 (999) ");
/// assert_eq!(format_phone_number("89991234567"), "+7 (999) 123-45-67");
/// assert_eq!(format_phone_number("+7 (999) 123-45-67"), "+7 (999) 123-45-67");
/// ```
pub fn format_phone_number(value: &str) -> String {
    let digits: String = digits_only(value).chars().take(MAX_PHONE_DIGITS).collect();
    let len = digits.len();

    if len == 0 {
        return String::new();
    }

    // Digits are ASCII, so byte offsets are character offsets.
    let group = |start: usize, end: usize| &digits[start.min(len)..end.min(len)];

    let mut formatted = String::from("+7 ");
    if len > 1 {
        formatted.push('(');
        formatted.push_str(group(1, 4));
    }
    if len >= 4 {
        formatted.push_str(") ");
        formatted.push_str(group(4, 7));
    }
    if len >= 7 {
        formatted.push('-');
        formatted.push_str(group(7, 9));
    }
    if len >= 9 {
        formatted.push('-');
        formatted.push_str(group(9, 11));
    }
    formatted
}
