use owo_colors::OwoColorize;

use crate::error::Result;
use crate::formatting::{KeyDecision, format_phone_number, restrict_numeric_input};

/// Print `value` the way the phone field would show it
pub fn cmd_format_phone(value: &str) -> Result<()> {
    println!("{}", format_phone_number(value));
    Ok(())
}

/// Print whether the phone field accepts `key`
pub fn cmd_check_key(key: &str) -> Result<()> {
    match restrict_numeric_input(key) {
        KeyDecision::Allow => println!("{} {}", key, "allowed".green()),
        KeyDecision::Suppress => println!("{} {}", key, "suppressed".red()),
    }
    Ok(())
}
