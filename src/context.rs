//! Application Context
//!
//! Collaborators shared with every component via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::commands::{BrowserConfirm, BrowserStorage, Confirm};
use crate::config::AppConfig;
use crate::storage::TodoStorage;

/// Injected persistence, confirmation and settings
#[derive(Clone)]
pub struct TodoServices {
    pub storage: Arc<dyn TodoStorage>,
    pub confirm: Arc<dyn Confirm>,
    pub config: AppConfig,
}

impl TodoServices {
    pub fn new(storage: Arc<dyn TodoStorage>, confirm: Arc<dyn Confirm>, config: AppConfig) -> Self {
        Self { storage, confirm, config }
    }

    /// `localStorage` + `window.confirm()`
    pub fn browser(config: AppConfig) -> Self {
        let storage = BrowserStorage::new(config.storage_key.clone());
        Self::new(Arc::new(storage), Arc::new(BrowserConfirm), config)
    }
}

/// Get the services from context
pub fn use_services() -> TodoServices {
    expect_context::<TodoServices>()
}
