//! Capabilities injected into the receipt forms.
//!
//! The forms never touch the browser directly; they go through these
//! services so tests can swap in deterministic fakes.
//!
//! # Services
//!
//! - [`notify`] - Notification sink and toast queue
//! - [`files`] - File picker adapter and image preview handles
//! - [`diagnostics`] - Developer-facing record of searches and submissions

pub mod notify;
pub mod files;
pub mod diagnostics;

pub use notify::*;
pub use files::*;
pub use diagnostics::*;
