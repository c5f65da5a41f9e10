//! Common types used across the frontend application.
//!
//! This module centralizes type definitions so the form state machines,
//! services and components agree on one data model.
//!
//! # Categories
//!
//! - **Notification Types** - Toast messages and their severity
//! - **Receipt Types** - Query and submission records
//! - **File Types** - Picked files and accepted images
//! - **Error Types** - Form validation failures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Notification Types
// =============================================================================

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral, informational message
    Default,
    /// Something the user has to fix
    Destructive,
}

impl Severity {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Default => "toast toast-default",
            Severity::Destructive => "toast toast-destructive",
        }
    }
}

/// A transient, user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Short headline
    pub title: String,
    /// Body text
    pub description: String,
    /// How the toast is styled
    pub severity: Severity,
}

impl Notification {
    /// Informational notification.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    /// Destructive notification, used for every validation failure.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

// =============================================================================
// Receipt Types
// =============================================================================

/// A validated search request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptQuery {
    /// Receipt identifier, as typed
    pub receipt_id: String,
    /// Day the transaction happened
    pub transaction_date: NaiveDate,
}

/// A validated submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSubmission {
    /// Receipt identifier, as typed
    pub receipt_id: String,
    /// Day the transaction happened
    pub transaction_date: NaiveDate,
    /// Attached images, in selection order
    pub images: Vec<ImageSummary>,
}

/// Metadata of an attached image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSummary {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

// =============================================================================
// File Types
// =============================================================================

/// One file handed over by the file picker.
///
/// `S` is the platform handle: `web_sys::File` in the browser.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<S> {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    pub source: S,
}

impl<S> SelectedFile<S> {
    /// Whether the declared MIME type is an image type.
    pub fn is_image(&self) -> bool {
        self.mime_type
            .get(..6)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
    }
}

/// An image accepted into a submission.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<S> {
    /// Unique within the owning form, never reused
    pub id: u64,
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    pub source: S,
    /// Preview URL, when one could be allocated
    pub preview: Option<String>,
}

impl<S> Image<S> {
    pub fn summary(&self) -> ImageSummary {
        ImageSummary {
            name: self.name.clone(),
            mime_type: self.mime_type.clone(),
            size: self.size,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Which button the user pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormAction {
    Search,
    Submit,
}

impl FormAction {
    fn verb(&self) -> &'static str {
        match self {
            FormAction::Search => "search",
            FormAction::Submit => "submit",
        }
    }
}

/// Form validation failures.
///
/// The display string is the notification title.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Receipt ID empty after trimming.
    #[error("Receipt ID Required")]
    MissingReceiptId,

    /// No transaction date picked.
    #[error("Date Required")]
    MissingDate,

    /// Some picked files are not images.
    #[error("Invalid File Type")]
    InvalidFileType { rejected: Vec<String> },

    /// Admitting the batch would exceed the image cap.
    #[error("Too Many Images")]
    TooManyImages {
        current: usize,
        incoming: usize,
        limit: usize,
    },
}

impl ValidationError {
    /// Body text of the notification.
    pub fn description(&self, action: FormAction) -> String {
        match self {
            ValidationError::MissingReceiptId => {
                format!("Please enter a receipt ID to {}.", action.verb())
            }
            ValidationError::MissingDate => {
                format!("Please select a date to {}.", action.verb())
            }
            ValidationError::InvalidFileType { rejected } => format!(
                "Only image files are allowed. Skipped: {}.",
                rejected.join(", ")
            ),
            ValidationError::TooManyImages {
                current,
                incoming,
                limit,
            } => format!(
                "You can upload up to {} images. {} already attached, {} selected.",
                limit, current, incoming
            ),
        }
    }

    /// Destructive notification for this failure.
    pub fn to_notification(&self, action: FormAction) -> Notification {
        Notification::destructive(self.to_string(), self.description(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime_type: &str) -> SelectedFile<()> {
        SelectedFile {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            size: 0,
            source: (),
        }
    }

    #[test]
    fn test_is_image() {
        assert!(file("a.png", "image/png").is_image());
        assert!(file("b.JPG", "IMAGE/JPEG").is_image());
        assert!(!file("c.pdf", "application/pdf").is_image());
        assert!(!file("d", "").is_image());
        assert!(!file("e", "imag").is_image());
    }

    #[test]
    fn test_validation_notification_wording() {
        let n = ValidationError::MissingReceiptId.to_notification(FormAction::Search);
        assert_eq!(n.title, "Receipt ID Required");
        assert_eq!(n.description, "Please enter a receipt ID to search.");
        assert_eq!(n.severity, Severity::Destructive);

        let n = ValidationError::MissingDate.to_notification(FormAction::Submit);
        assert_eq!(n.title, "Date Required");
        assert_eq!(n.description, "Please select a date to submit.");
    }

    #[test]
    fn test_submission_serializes_camel_case() {
        let submission = ReceiptSubmission {
            receipt_id: "RCP-12345".to_string(),
            transaction_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            images: vec![ImageSummary {
                name: "imgA.png".to_string(),
                mime_type: "image/png".to_string(),
                size: 42,
            }],
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["receiptId"], "RCP-12345");
        assert_eq!(json["transactionDate"], "2024-01-15");
        assert_eq!(json["images"][0]["mimeType"], "image/png");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Destructive).unwrap();
        assert_eq!(json, "\"destructive\"");
    }
}
