use clap::{Parser, Subcommand};

use crate::types::FieldName;

#[derive(Parser)]
#[command(name = "feedback")]
#[command(about = "Fill in and send the feedback form from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the saved draft
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set one field of the draft (phone numbers are formatted)
    Set {
        /// Field: fullName, email, phone, organization, message, privacyPolicy
        #[arg(value_parser = parse_field)]
        field: FieldName,

        /// New value (true/false for privacyPolicy)
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Format a phone number the way the form does
    FormatPhone {
        /// Raw input
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Check whether the phone field accepts a key (e.g. 7, Backspace, a)
    CheckKey {
        /// Key name as reported by the keyboard event
        key: String,
    },

    /// Validate the saved draft
    Validate {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate and send the saved draft to the form relay
    Submit,

    /// Clear the saved draft
    Reset {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_field(s: &str) -> Result<FieldName, String> {
    s.parse().map_err(|_| {
        let names: Vec<&str> = FieldName::ALL.iter().map(FieldName::as_str).collect();
        format!("unknown field '{}'. Must be one of: {}", s, names.join(", "))
    })
}
