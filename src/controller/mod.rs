//! The feedback form controller.
//!
//! [`FormController`] mediates every form lifecycle event: opening and
//! closing the modal, field input, draft persistence, reset, validation and
//! submission. It owns the renderable [`FormView`] and reaches the outside
//! world only through the injected capabilities:
//!
//! - a [`KeyValueStore`] for the draft,
//! - a [`HistoryController`] for the back button and the URL fragment,
//! - an [`HttpClient`] for the relay,
//! - a confirmation callback for destructive actions.
//!
//! ```ignore
//! let mut form = FormController::new(config, store, history, client)
//!     .with_confirm(|prompt| ask_user(prompt));
//! form.initialize();
//! form.open();
//! form.handle_input(FieldName::Phone, "89991234567")?;
//! let outcome = form.submit().await;
//! ```

mod view;

pub use view::{FormView, SubmitButton, Visibility};

use std::time::Instant;

use crate::config::FormConfig;
use crate::error::{FeedbackError, Result};
use crate::formatting::{self, KeyDecision};
use crate::history::{HistoryController, HistoryState, is_form_open};
use crate::relay::{FormPayload, HttpClient, RelayResponse};
use crate::status::{MessageLevel, StatusMessage};
use crate::storage::KeyValueStore;
use crate::types::{FieldName, FormData};
use crate::validation::{self, FieldError};

/// Callback asked before destructive actions; `true` means go ahead
pub type ConfirmFn = Box<dyn FnMut(&str) -> bool + Send>;

/// Result of a submit attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid(Vec<FieldError>),
    /// The relay accepted the submission
    Sent,
    /// The request failed or the relay rejected it
    Failed(FeedbackError),
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

pub struct FormController<S, H, C> {
    config: FormConfig,
    store: S,
    history: H,
    client: C,
    confirm: ConfirmFn,
    view: FormView,
}

impl<S, H, C> FormController<S, H, C>
where
    S: KeyValueStore,
    H: HistoryController,
    C: HttpClient,
{
    /// Create a controller with empty fields and the modal closed.
    ///
    /// Until [`with_confirm`](Self::with_confirm) is called, confirmation
    /// requests are declined.
    pub fn new(config: FormConfig, store: S, history: H, client: C) -> Self {
        let view = FormView::new(&config.texts.submit_label);
        Self {
            config,
            store,
            history,
            client,
            confirm: Box::new(|_| false),
            view,
        }
    }

    /// Inject the confirmation callback
    pub fn with_confirm<F>(mut self, confirm: F) -> Self
    where
        F: FnMut(&str) -> bool + Send + 'static,
    {
        self.confirm = Box::new(confirm);
        self
    }

    /// Page-load sequence: restore the draft, then honour a deep link
    pub fn initialize(&mut self) {
        self.load_form_data();
        self.check_initial_state();
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn view(&self) -> &FormView {
        &self.view
    }

    pub fn fields(&self) -> &FormData {
        &self.view.fields
    }

    pub fn visibility(&self) -> Visibility {
        self.view.visibility
    }

    pub fn is_open(&self) -> bool {
        self.view.is_open()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutable access for embedders that drive navigation themselves
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    // ------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------

    /// Show the modal, lock page scrolling and push the open marker.
    ///
    /// Every call pushes a marker entry, even when the modal is already open.
    pub fn open(&mut self) {
        self.view.visibility = Visibility::Open;
        self.view.scroll_locked = true;
        self.history
            .push_state(HistoryState::form_open(), &self.config.fragment);
        tracing::debug!("feedback form opened");
    }

    /// Hide the modal and step history back past the open marker.
    ///
    /// The resulting back navigation is delivered to
    /// [`handle_back_navigation`](Self::handle_back_navigation) by the runtime;
    /// the modal is already closed by then, so that second call is a no-op.
    pub fn close(&mut self) {
        self.view.visibility = Visibility::Closed;
        self.view.scroll_locked = false;
        self.hide_message();

        if is_form_open(self.history.current_state().as_ref()) {
            self.history.back();
        }
        tracing::debug!("feedback form closed");
    }

    /// Back/forward navigation landed on an entry with `state`
    pub fn handle_back_navigation(&mut self, state: Option<HistoryState>) {
        if !is_form_open(state.as_ref()) {
            self.close();
        }
    }

    /// Open the form when the page was loaded with the feedback fragment
    pub fn check_initial_state(&mut self) {
        if self.history.location_fragment() == self.config.fragment {
            self.open();
        }
    }

    // ------------------------------------------------------------------
    // Field input
    // ------------------------------------------------------------------

    /// Key filter for the phone field
    pub fn restrict_numeric_input(&self, key: &str) -> KeyDecision {
        formatting::restrict_numeric_input(key)
    }

    /// Re-render the phone field from its digits
    pub fn format_phone_number(&mut self) {
        let formatted = formatting::format_phone_number(&self.view.fields.phone);
        self.view.fields.phone = formatted;
    }

    /// Input-change event for `field`.
    ///
    /// The phone value is formatted before it is stored. For the consent
    /// checkbox `value` is parsed as a boolean (`true/false`, `on/off`,
    /// `yes/no`, `1/0`). The draft is persisted after every change.
    pub fn handle_input(&mut self, field: FieldName, value: &str) -> Result<()> {
        if field.is_checkbox() {
            let checked = parse_checkbox(value)?;
            self.set_privacy_policy(checked);
            return Ok(());
        }

        if let Some(slot) = self.view.fields.text_mut(field) {
            *slot = value.to_string();
        }
        if field == FieldName::Phone {
            self.format_phone_number();
        }
        self.persist();
        Ok(())
    }

    /// Change event of the consent checkbox
    pub fn set_privacy_policy(&mut self, checked: bool) {
        self.view.fields.privacy_policy = checked;
        self.persist();
    }

    // ------------------------------------------------------------------
    // Draft persistence
    // ------------------------------------------------------------------

    /// Write the current field snapshot to the store
    pub fn save_form_data(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.view.fields)?;
        self.store.set(&self.config.storage_key, &json)
    }

    /// Populate the fields from the stored draft.
    ///
    /// Returns `true` when a draft was restored. A malformed draft is removed
    /// and the fields are left empty.
    pub fn load_form_data(&mut self) -> bool {
        let saved = match self.store.get(&self.config.storage_key) {
            Ok(Some(saved)) => saved,
            Ok(None) => return false,
            Err(e) => {
                tracing::warn!("Discarding unreadable saved form data: {e}");
                self.view.fields.clear();
                self.clear_storage();
                return false;
            }
        };

        match serde_json::from_str::<FormData>(&saved) {
            Ok(data) => {
                self.view.fields = data;
                tracing::debug!("restored saved feedback draft");
                true
            }
            Err(e) => {
                tracing::warn!("Discarding corrupt saved form data: {e}");
                self.view.fields.clear();
                self.clear_storage();
                false
            }
        }
    }

    /// Whether the store still holds a draft. A store that cannot be read
    /// counts as holding one.
    pub fn has_saved_draft(&self) -> bool {
        !matches!(self.store.get(&self.config.storage_key), Ok(None))
    }

    fn persist(&mut self) {
        if let Err(e) = self.save_form_data() {
            tracing::warn!("Failed to save form data: {e}");
        }
    }

    fn clear_storage(&mut self) {
        if let Err(e) = self.store.remove(&self.config.storage_key) {
            tracing::warn!("Failed to remove saved form data: {e}");
        }
    }

    /// Clear every field and the stored draft after confirmation.
    ///
    /// Returns `false`, leaving everything untouched, when the user declines.
    pub fn reset_form(&mut self) -> bool {
        if !(self.confirm)(&self.config.texts.reset_prompt) {
            return false;
        }
        self.view.fields.clear();
        self.clear_storage();
        self.hide_message();
        true
    }

    // ------------------------------------------------------------------
    // Status message
    // ------------------------------------------------------------------

    fn show_message(&mut self, text: impl Into<String>, level: MessageLevel) {
        // Replacing the message also replaces its hide deadline.
        self.view.message = Some(StatusMessage::new(
            text,
            level,
            Instant::now(),
            self.config.message_timeout(),
        ));
    }

    fn hide_message(&mut self) {
        self.view.message = None;
    }

    /// The status message, if one is showing
    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.view.visible_message(Instant::now())
    }

    /// Hide the status message once its deadline has passed
    pub fn tick(&mut self, now: Instant) {
        if self
            .view
            .message
            .as_ref()
            .is_some_and(|m| m.is_expired_at(now))
        {
            self.hide_message();
        }
    }

    // ------------------------------------------------------------------
    // Validation and submission
    // ------------------------------------------------------------------

    /// Validate the current fields
    pub fn validate(&self) -> Vec<FieldError> {
        validation::validate(&self.view.fields)
    }

    /// First half of a submit: validate, build the payload and put the
    /// submit button into its sending state.
    ///
    /// On validation failure the errors are shown and returned, and the
    /// button is left alone.
    pub fn begin_submit(&mut self) -> std::result::Result<FormPayload, Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            self.show_message(validation::join_errors(&errors), MessageLevel::Error);
            return Err(errors);
        }

        let payload = FormPayload::from_form(&self.view.fields, &self.config.subject);
        self.view.submit_button = SubmitButton::sending(&self.config.texts.sending_label);
        Ok(payload)
    }

    /// Second half of a submit: report the relay's answer and restore the
    /// submit button whatever happened.
    pub fn finish_submit(&mut self, result: Result<RelayResponse>) -> SubmitOutcome {
        let outcome = match result.and_then(RelayResponse::error_for_status) {
            Ok(_) => {
                let text = self.config.texts.success_message.clone();
                self.show_message(text, MessageLevel::Success);
                self.view.fields.clear();
                self.clear_storage();
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::error!("Feedback submission failed: {e}");
                let text = self.config.texts.failure_message.clone();
                self.show_message(text, MessageLevel::Error);
                SubmitOutcome::Failed(e)
            }
        };

        self.view.submit_button = SubmitButton::idle(&self.config.texts.submit_label);
        outcome
    }

    /// Validate and send the form. Makes no request when validation fails
    /// and never retries.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let payload = match self.begin_submit() {
            Ok(payload) => payload,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        let result = self
            .client
            .post_form(&self.config.relay_url, &payload)
            .await;
        self.finish_submit(result)
    }
}

fn parse_checkbox(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" | "" => Ok(false),
        other => Err(FeedbackError::InvalidInput(format!(
            "expected a checkbox value (true/false), got '{other}'"
        ))),
    }
}
