//! Application configuration.
//!
//! Centralized configuration for the receipts frontend.
//! Everything is compile-time: there is no backend to point at yet.

/// Application name.
///
/// Used as the document title.
pub const APP_NAME: &str = "Receipt Management";

/// Maximum number of images attached to a single receipt submission.
pub const MAX_IMAGES: usize = 5;

/// `accept` hint passed to the file picker.
///
/// Only a hint: the browser may still hand us other files, so the
/// submission form re-checks every MIME type.
pub const ACCEPTED_IMAGE_TYPES: &str = "image/*";

/// Value format of `<input type="date">`.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Maximum toasts visible at once.
pub const TOAST_LIMIT: usize = 3;

/// Delay before a toast dismisses itself (in milliseconds).
pub const TOAST_DURATION_MS: u32 = 5_000;
