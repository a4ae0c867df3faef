#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod formatting;
pub mod fs;
pub mod history;
pub mod relay;
pub mod status;
pub mod storage;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_guards;

pub use config::{FormConfig, FormTexts};
pub use controller::{FormController, FormView, SubmitButton, SubmitOutcome, Visibility};
pub use error::{FeedbackError, Result};
pub use formatting::{KeyDecision, format_phone_number, restrict_numeric_input};
pub use history::{HistoryController, HistoryState, MemoryHistory};
pub use relay::{FormPayload, HttpClient, RelayResponse, ReqwestClient};
pub use status::{MessageLevel, StatusMessage};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use types::{FieldName, FormData, STORAGE_KEY};
pub use validation::{FieldError, validate};
