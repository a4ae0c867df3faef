use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use feedback_form::cli::{Cli, Commands, ConfigAction};
use feedback_form::commands::{
    cmd_check_key, cmd_config_show, cmd_format_phone, cmd_reset, cmd_set, cmd_show, cmd_submit,
    cmd_validate,
};
use feedback_form::config::FormConfig;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match FormConfig::load() {
        Ok(config) => match cli.command {
            Commands::Show { json } => cmd_show(config, json),
            Commands::Set { field, value } => cmd_set(config, field, &value),
            Commands::FormatPhone { value } => cmd_format_phone(&value),
            Commands::CheckKey { key } => cmd_check_key(&key),
            Commands::Validate { json } => cmd_validate(config, json),
            Commands::Submit => cmd_submit(config).await,
            Commands::Reset { yes } => cmd_reset(config, yes),
            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(&config, json),
            },
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
