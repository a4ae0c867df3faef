use owo_colors::OwoColorize;
use serde_json::json;

use super::{format_status, load_controller};
use crate::config::FormConfig;
use crate::controller::SubmitOutcome;
use crate::error::{FeedbackError, Result};
use crate::validation::FieldError;

/// Bullet list of validation errors with the field each belongs to
pub fn render_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("- {} ({})", e, e.field()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validate the saved draft
pub fn cmd_validate(config: FormConfig, output_json: bool) -> Result<()> {
    let controller = load_controller(config)?;
    let errors = controller.validate();

    if output_json {
        let items: Vec<_> = errors
            .iter()
            .map(|e| json!({ "field": e.field().as_str(), "message": e.to_string() }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "valid": errors.is_empty(), "errors": items }))?
        );
    } else if errors.is_empty() {
        println!("{}", "Draft is valid".green());
    } else {
        println!("{}", render_errors(&errors));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FeedbackError::InvalidInput(format!(
            "draft has {} validation error(s)",
            errors.len()
        )))
    }
}

/// Validate and send the saved draft
pub async fn cmd_submit(config: FormConfig) -> Result<()> {
    let mut controller = load_controller(config)?;
    let outcome = controller.submit().await;

    if let Some(message) = controller.status_message() {
        println!("{}", format_status(message));
    }

    match outcome {
        SubmitOutcome::Sent => Ok(()),
        SubmitOutcome::Invalid(errors) => Err(FeedbackError::InvalidInput(format!(
            "draft has {} validation error(s)",
            errors.len()
        ))),
        SubmitOutcome::Failed(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_errors() {
        let rendered = render_errors(&[FieldError::EmailInvalid, FieldError::ConsentRequired]);
        insta::assert_snapshot!(rendered, @r"
        - Enter a valid email address (email)
        - You must agree to the privacy policy (privacyPolicy)
        ");
    }
}
