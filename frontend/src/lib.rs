//! Receipts - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for searching receipts and submitting them
//! with photos attached. Nothing leaves the browser yet: valid actions
//! are announced with a toast and logged to the console.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  SearchPage (/)            │  SubmitPage (/submit)           │
//! │  ├── Hero                  │  ├── Hero                       │
//! │  └── ReceiptSearchForm     │  └── ReceiptSubmitForm          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Toaster                                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Notification, ReceiptQuery, Image, etc.)
//! - [`form`] - UI-free form state machines
//! - [`components`] - UI components (Hero, forms, Toaster)
//! - [`services`] - Notification, file picker and diagnostic capabilities

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod form;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Notifications
    Notification, Severity,
    // Receipts
    ReceiptQuery, ReceiptSubmission, ImageSummary,
    // Files
    SelectedFile, Image,
    // Errors
    FormAction, ValidationError,
};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Receipts - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    services::Toasts::provide();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=SearchPage/>
                    <Route path="/submit" view=SubmitPage/>
                </Routes>
            </main>
        </Router>
        <Toaster/>
    }
}

#[component]
fn SearchPage() -> impl IntoView {
    view! {
        <PageLayout>
            <ReceiptSearchForm/>
        </PageLayout>
    }
}

#[component]
fn SubmitPage() -> impl IntoView {
    view! {
        <PageLayout>
            <ReceiptSubmitForm/>
        </PageLayout>
    }
}

/// Hero on top, the form in a narrow column below.
#[component]
fn PageLayout(children: Children) -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <Hero/>
                <div class="form-column">
                    {children()}
                </div>
            </div>
        </div>
    }
}
