//! UI-free receipt form state.
//!
//! Each form owns its state and exposes plain methods. Instead of
//! talking to the browser, operations return the [`Effect`]s to perform;
//! components hand them to [`dispatch`].
//!
//! ```text
//! Empty ──edit──► Editing ──submit──► ValidationFailed ──edit──► Editing
//!                    │
//!                    └──submit──► Submitted ──edit──► Editing
//! ```

mod date;
mod search;
mod submission;

pub use date::*;
pub use search::*;
pub use submission::*;

use chrono::NaiveDate;
use serde::Serialize;

use crate::services::{DiagnosticLog, Notifier};
use crate::{Notification, ReceiptQuery, ReceiptSubmission, ValidationError};

/// Where a form is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing entered yet
    #[default]
    Empty,
    /// At least one edit since the last submit
    Editing,
    /// Last submit was rejected
    ValidationFailed,
    /// Last submit went through; still editable
    Submitted,
}

/// Fields shared by the search and submission forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReceiptFields {
    pub receipt_id: String,
    pub transaction_date: Option<NaiveDate>,
}

impl ReceiptFields {
    /// Check the fields in order, stopping at the first failure.
    pub fn validate(&self) -> Result<NaiveDate, ValidationError> {
        if self.receipt_id.trim().is_empty() {
            return Err(ValidationError::MissingReceiptId);
        }
        self.transaction_date.ok_or(ValidationError::MissingDate)
    }
}

/// Side effect requested by a form operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Notify(Notification),
    Record(Diagnostic),
}

/// Record emitted for developer inspection after a valid action.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Diagnostic {
    Search(ReceiptQuery),
    Submission(ReceiptSubmission),
}

impl Diagnostic {
    pub fn label(&self) -> &'static str {
        match self {
            Diagnostic::Search(_) => "Searching for receipt:",
            Diagnostic::Submission(_) => "Submitting receipt:",
        }
    }
}

/// Perform effects in the order the form produced them.
pub fn dispatch(effects: Vec<Effect>, notifier: &impl Notifier, log: &impl DiagnosticLog) {
    for effect in effects {
        match effect {
            Effect::Notify(notification) => notifier.notify(notification),
            Effect::Record(diagnostic) => log.record(&diagnostic),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording fakes for the form capabilities.

    use std::cell::RefCell;

    use super::Diagnostic;
    use crate::services::{DiagnosticLog, Notifier};
    use crate::Notification;

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub notifications: RefCell<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.notifications.borrow_mut().push(notification);
        }
    }

    #[derive(Default)]
    pub struct RecordingLog {
        pub records: RefCell<Vec<Diagnostic>>,
    }

    impl DiagnosticLog for RecordingLog {
        fn record(&self, diagnostic: &Diagnostic) {
            self.records.borrow_mut().push(diagnostic.clone());
        }
    }
}
