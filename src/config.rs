//! Storefront Configuration
//!
//! Every setting has a default. The host page can override any of them by
//! defining `window.__STOREFRONT_CONFIG__` before the bundle loads.

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;

/// Global the host page may define
pub const CONFIG_GLOBAL: &str = "__STOREFRONT_CONFIG__";

pub const DEFAULT_API_BASE: &str = "https://openapi.programming-hero.com/api";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorefrontConfig {
    /// Catalog API base URL, no trailing slash
    pub api_base: String,
    pub currency_symbol: String,
    /// Card descriptions longer than this are cut
    pub description_limit: usize,
    /// How long a notice stays up
    pub notice_ms: u32,
    /// How long "✓ Added!" stays on a button
    pub added_feedback_ms: u32,
    pub log_level: String,
    /// Records kept by the rolling logger
    pub log_capacity: usize,
    /// Show the recent-log panel at the bottom of the page
    pub debug_log: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            currency_symbol: "৳".to_string(),
            description_limit: 100,
            notice_ms: 3000,
            added_feedback_ms: 1500,
            log_level: "info".to_string(),
            log_capacity: 200,
            debug_log: false,
        }
    }
}

impl StorefrontConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        Ok(config.normalized())
    }

    /// Read the injected global; defaults when the page defines none
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::from_window()?.unwrap_or_default())
    }

    fn from_window() -> Result<Option<Self>, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(None);
        };
        let value = js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into())
            .map_err(|e| ConfigError::Js(format!("{:?}", e)))?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        // Either an object literal or a JSON string
        if let Some(text) = value.as_string() {
            return Self::from_json(&text).map(Some);
        }
        let config: Self =
            serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Js(e.to_string()))?;
        Ok(Some(config.normalized()))
    }

    fn normalized(mut self) -> Self {
        while self.api_base.ends_with('/') {
            self.api_base.pop();
        }
        self
    }

    /// Unknown level names mean `info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
