//! Developer-facing log of validated searches and submissions.
//!
//! Nothing here is persisted or sent anywhere: records end up in the
//! browser console until a backend exists.

use wasm_bindgen::JsValue;

use crate::form::Diagnostic;

/// Write-only, best-effort diagnostic channel.
pub trait DiagnosticLog {
    fn record(&self, diagnostic: &Diagnostic);
}

/// Logs records through `log` and dumps them as objects to the console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleDiagnostics;

impl DiagnosticLog for ConsoleDiagnostics {
    fn record(&self, diagnostic: &Diagnostic) {
        match serde_json::to_string(diagnostic) {
            Ok(json) => log::info!("{} {}", diagnostic.label(), json),
            Err(e) => log::warn!("Could not serialize diagnostic record: {}", e),
        }

        // Structured copy so it can be expanded in devtools
        if let Ok(value) = serde_wasm_bindgen::to_value(diagnostic) {
            web_sys::console::debug_2(&JsValue::from_str(diagnostic.label()), &value);
        }
    }
}
