//! Form configuration.
//!
//! [`FormConfig`] carries the fixed values the controller works with: where
//! the draft is stored, where submissions go, and the texts it shows. The
//! defaults are the production values; the `feedback` binary can override
//! them from `config.yaml` in the platform config directory and from the
//! environment:
//!
//! - `FEEDBACK_RELAY_URL` replaces `relay_url`
//! - `FEEDBACK_DATA_DIR` replaces the draft storage directory

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FeedbackError, Result};
use crate::types::{
    DEFAULT_SUBJECT, FEEDBACK_FRAGMENT, FORM_SUBMIT_URL, MESSAGE_TIMEOUT_SECS, STORAGE_KEY,
};

/// Environment variable overriding the relay URL
pub const RELAY_URL_ENV: &str = "FEEDBACK_RELAY_URL";

/// Environment variable overriding the draft storage directory
pub const DATA_DIR_ENV: &str = "FEEDBACK_DATA_DIR";

/// Texts shown by the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormTexts {
    pub submit_label: String,
    pub sending_label: String,
    pub success_message: String,
    pub failure_message: String,
    pub reset_prompt: String,
}

impl Default for FormTexts {
    fn default() -> Self {
        Self {
            submit_label: "Send".to_string(),
            sending_label: "Sending...".to_string(),
            success_message: "Your message has been sent! We will get back to you soon."
                .to_string(),
            failure_message:
                "Something went wrong while sending the form. Please try again.".to_string(),
            reset_prompt: "Are you sure you want to clear all form fields?".to_string(),
        }
    }
}

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Key of the draft in the key-value store
    pub storage_key: String,

    /// Relay endpoint receiving submissions
    pub relay_url: String,

    /// `_subject` sent with every submission
    pub subject: String,

    /// URL fragment that opens the form
    pub fragment: String,

    /// Seconds a status message stays visible
    pub message_timeout_secs: u64,

    /// Directory of the draft store (binary only, `None` = platform data dir)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    pub texts: FormTexts,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            relay_url: FORM_SUBMIT_URL.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            fragment: FEEDBACK_FRAGMENT.to_string(),
            message_timeout_secs: MESSAGE_TIMEOUT_SECS,
            data_dir: None,
            texts: FormTexts::default(),
        }
    }
}

impl FormConfig {
    pub fn message_timeout(&self) -> Duration {
        Duration::from_secs(self.message_timeout_secs)
    }

    /// Path of the optional config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "feedback-form", "feedback-form")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(FormConfig::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(FormConfig::default());
        }
        let config: FormConfig = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config file (if any) and apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => FormConfig::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `FEEDBACK_RELAY_URL` and `FEEDBACK_DATA_DIR`
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var(RELAY_URL_ENV)
            && !url.is_empty()
        {
            self.relay_url = url;
        }
        if let Ok(dir) = env::var(DATA_DIR_ENV)
            && !dir.is_empty()
        {
            self.data_dir = Some(PathBuf::from(dir));
        }
    }

    fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(FeedbackError::Config("storage_key cannot be empty".to_string()));
        }
        let url = self.relay_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(FeedbackError::Config(format!(
                "relay_url must be an http(s) URL, got '{}'",
                self.relay_url
            )));
        }
        if !self.fragment.starts_with('#') {
            return Err(FeedbackError::Config(format!(
                "fragment must start with '#', got '{}'",
                self.fragment
            )));
        }
        Ok(())
    }
}
