//! Browser Platform Glue
//!
//! The pieces the client core leaves to its host: an HTTP transport over
//! `fetch`, session storage over `localStorage`, and file input/output.

mod files;
mod transport;

pub use files::{read_attachment, selected_file, trigger_download};
pub use transport::GlooTransport;

use campusconnect::session::{KeyValueStore, StoreError};
use campusconnect::DEFAULT_API_URL;

const API_URL_KEY: &str = "campusconnect_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = local_storage()
        .ok()
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    url.trim_end_matches('/').to_string()
}

fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .ok_or_else(|| StoreError::Unavailable("no window".into()))?
        .local_storage()
        .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
}

/// Session persistence in `window.localStorage`
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}
