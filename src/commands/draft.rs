use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;

use super::load_controller;
use crate::config::FormConfig;
use crate::error::{FeedbackError, Result};
use crate::types::{FieldName, FormData};

/// Plain-text rendering of a draft, one field per line
pub fn render_draft(data: &FormData) -> String {
    FieldName::ALL
        .iter()
        .map(|field| {
            let value = match data.text(*field) {
                Some("") => "-".to_string(),
                Some(text) => text.to_string(),
                None => (if data.privacy_policy { "yes" } else { "no" }).to_string(),
            };
            format!("{:<15}{}", format!("{field}:"), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the saved draft
pub fn cmd_show(config: FormConfig, output_json: bool) -> Result<()> {
    let controller = load_controller(config)?;
    let fields = controller.fields();

    if output_json {
        println!("{}", serde_json::to_string_pretty(fields)?);
        return Ok(());
    }

    if fields.is_empty() {
        println!("{}", "No saved draft".dimmed());
        return Ok(());
    }
    println!("{}", render_draft(fields));
    Ok(())
}

/// Input-change event for one field
pub fn cmd_set(config: FormConfig, field: FieldName, value: &str) -> Result<()> {
    let mut controller = load_controller(config)?;
    controller.handle_input(field, value)?;
    controller.save_form_data()?;

    let shown = match controller.fields().text(field) {
        Some(text) => text.to_string(),
        None => controller.fields().privacy_policy.to_string(),
    };
    println!("{} {}", format!("{field}:").cyan(), shown);
    Ok(())
}

/// Ask on stdin; anything but `y`/`yes` declines
fn prompt_confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Clear the draft after confirmation
pub fn cmd_reset(config: FormConfig, assume_yes: bool) -> Result<()> {
    let controller = load_controller(config)?;
    let mut controller = if assume_yes {
        controller.with_confirm(|_| true)
    } else {
        controller.with_confirm(prompt_confirm)
    };

    if !controller.reset_form() {
        println!("{}", "Draft kept".dimmed());
        return Ok(());
    }
    if controller.has_saved_draft() {
        return Err(FeedbackError::Other(
            "the saved draft could not be removed".to_string(),
        ));
    }
    println!("{}", "Draft cleared".green());
    Ok(())
}
