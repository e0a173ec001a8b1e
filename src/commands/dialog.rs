//! Confirmation Dialog
//!
//! Yes/no gate asked before a todo is deleted.

use super::js_error;

/// Blocking yes/no confirmation provider
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// `window.confirm()`; a missing window or a thrown exception reads as "no"
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            tracing::warn!("no window, declining confirmation");
            return false;
        };
        window.confirm_with_message(message).unwrap_or_else(|e| {
            tracing::warn!(error = %js_error(&e), "confirm dialog failed");
            false
        })
    }
}
