//! `config show`: print the effective configuration

use owo_colors::OwoColorize;

use super::data_dir;
use crate::config::FormConfig;
use crate::error::Result;

/// Show the configuration after file and environment overrides
pub fn cmd_config_show(config: &FormConfig, output_json: bool) -> Result<()> {
    let store_dir = data_dir(config)?;

    if output_json {
        let mut value = serde_json::to_value(config)?;
        value["data_dir"] = serde_json::Value::String(store_dir.to_string_lossy().into_owned());
        if let Some(path) = FormConfig::config_path() {
            value["config_file"] = serde_json::Value::String(path.to_string_lossy().into_owned());
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}\n", "Configuration:".cyan().bold());
    println!("  {}: {}", "relay_url".cyan(), config.relay_url);
    println!("  {}: {}", "subject".cyan(), config.subject);
    println!("  {}: {}", "storage_key".cyan(), config.storage_key);
    println!("  {}: {}", "fragment".cyan(), config.fragment);
    println!(
        "  {}: {}s",
        "message_timeout".cyan(),
        config.message_timeout_secs
    );
    println!("  {}: {}", "data_dir".cyan(), store_dir.display());
    if let Some(path) = FormConfig::config_path() {
        println!("\n{} {}", "Config file:".dimmed(), path.display());
    }
    Ok(())
}
