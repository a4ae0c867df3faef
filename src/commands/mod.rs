//! Command implementations for the `feedback` binary.
//!
//! Each command builds a controller over the on-disk draft store, fires the
//! same events the form UI would, and prints the result.

mod config;
mod draft;
mod phone;
mod submit;

pub use config::cmd_config_show;
pub use draft::{cmd_reset, cmd_set, cmd_show, render_draft};
pub use phone::{cmd_check_key, cmd_format_phone};
pub use submit::{cmd_submit, cmd_validate, render_errors};

use std::path::PathBuf;

use owo_colors::OwoColorize;

use crate::config::FormConfig;
use crate::controller::FormController;
use crate::error::Result;
use crate::history::MemoryHistory;
use crate::relay::ReqwestClient;
use crate::status::{MessageLevel, StatusMessage};
use crate::storage::FileStore;

/// Controller wired to the draft file, a fresh history and the real relay
pub type CliController = FormController<FileStore, MemoryHistory, ReqwestClient>;

/// Directory holding the draft store
pub fn data_dir(config: &FormConfig) -> Result<PathBuf> {
    match &config.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => FileStore::default_dir(),
    }
}

/// Build a controller and restore the saved draft
pub fn load_controller(config: FormConfig) -> Result<CliController> {
    let store = FileStore::in_dir(&data_dir(&config)?);
    let mut controller =
        FormController::new(config, store, MemoryHistory::default(), ReqwestClient::new());
    controller.load_form_data();
    Ok(controller)
}

/// Colour a status message by its level
pub fn format_status(message: &StatusMessage) -> String {
    match message.level {
        MessageLevel::Success => message.text.green().to_string(),
        MessageLevel::Error => message.text.red().to_string(),
    }
}
