//! UI Components for the receipts application.
//!
//! # Layout Components
//! - [`Hero`] - Title, tagline and feature callouts
//! - [`Toaster`] - Transient notifications
//!
//! # Feature Components
//! - [`ReceiptSearchForm`] - Receipt ID + date search
//! - [`ReceiptSubmitForm`] - Search fields plus image attachments
//! - [`DatePicker`] - Transaction date selection

mod hero;
mod date_picker;
mod receipt_form;
mod receipt_submit;
mod toaster;

pub use hero::*;
pub use date_picker::*;
pub use receipt_form::*;
pub use receipt_submit::*;
pub use toaster::*;
