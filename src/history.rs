//! Navigation history seen by the form
//!
//! Opening the form pushes a history entry marked `{formOpen: true}`, so a
//! back navigation closes the modal instead of leaving the page.

use serde::{Deserialize, Serialize};

/// State object attached to a history entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryState {
    #[serde(default)]
    pub form_open: bool,
}

impl HistoryState {
    /// The marker pushed when the form opens
    pub fn form_open() -> Self {
        Self { form_open: true }
    }
}

/// Whether a (possibly absent) history state carries the open marker
pub fn is_form_open(state: Option<&HistoryState>) -> bool {
    state.is_some_and(|s| s.form_open)
}

/// Session history operations the controller relies on
pub trait HistoryController {
    /// Push a new entry carrying `state`, with `fragment` as the URL hash
    fn push_state(&mut self, state: HistoryState, fragment: &str);

    /// State of the current entry, `None` when the entry has no state
    fn current_state(&self) -> Option<HistoryState>;

    /// Navigate back one entry.
    ///
    /// Returns the state of the entry that became current, which is what the
    /// runtime delivers to the back-navigation handler. Returns `None` when
    /// there is no earlier entry or it has no state.
    fn back(&mut self) -> Option<HistoryState>;

    /// URL fragment of the current entry including the leading `#`, or an
    /// empty string when there is none
    fn location_fragment(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HistoryEntry {
    state: Option<HistoryState>,
    fragment: String,
}

/// In-memory session history: a list of entries and a cursor.
///
/// Pushing drops any forward entries, like a browser does.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl MemoryHistory {
    /// History holding a single page load at `fragment` with no state
    pub fn new(fragment: &str) -> Self {
        Self {
            entries: vec![HistoryEntry {
                state: None,
                fragment: fragment.to_string(),
            }],
            index: 0,
        }
    }

    /// Number of entries, including forward ones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the current entry
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move forward one entry, returning its state
    pub fn forward(&mut self) -> Option<HistoryState> {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
        }
        self.current_state()
    }
}

impl HistoryController for MemoryHistory {
    fn push_state(&mut self, state: HistoryState, fragment: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry {
            state: Some(state),
            fragment: fragment.to_string(),
        });
        self.index = self.entries.len() - 1;
    }

    fn current_state(&self) -> Option<HistoryState> {
        self.entries.get(self.index).and_then(|e| e.state)
    }

    fn back(&mut self) -> Option<HistoryState> {
        self.index = self.index.saturating_sub(1);
        self.current_state()
    }

    fn location_fragment(&self) -> String {
        self.entries
            .get(self.index)
            .map(|e| e.fragment.clone())
            .unwrap_or_default()
    }
}
