//! App Configuration
//!
//! Static settings injected into the store and bindings.

use tracing::Level;

/// Local storage key of the original app, kept so existing data loads
pub const DEFAULT_STORAGE_KEY: &str = "todos";

pub const DEFAULT_CONFIRM_DELETE: &str = "Are you sure you want to delete this Todo?";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Local storage slot holding the serialized list
    pub storage_key: String,
    /// Prompt shown before a todo is deleted
    pub confirm_delete_message: String,
    /// Initial value of the "show finished" flag for each session
    pub show_finished_default: bool,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            confirm_delete_message: DEFAULT_CONFIRM_DELETE.to_string(),
            show_finished_default: true,
            log_level: if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO },
        }
    }
}
