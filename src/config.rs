//! Widget configuration supplied by the host page.
//!
//! The host page may embed a JSON document in
//! `<script type="application/json" id="dermagenie-widget-config">`. Missing
//! fields fall back to defaults, so an empty object (or no element at all)
//! yields the stock widget.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "dermagenie-widget-config";
pub const DEFAULT_ENDPOINT: &str = "/dermagenie-chat/";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";
pub const DEFAULT_TITLE: &str = "DermaGenie AI";

pub const DEFAULT_EXCLUDED_PATHS: &[&str] = &["/login", "/register", "/admin"];

pub const DEFAULT_SUGGESTED_PROMPTS: &[&str] = &[
    "What is melanoma?",
    "How to prevent skin cancer?",
    "What are common skin lesions?",
    "When should I see a dermatologist?",
    "How accurate is AI skin analysis?",
    "What is a benign mole?",
];

/// Errors produced while loading widget configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The embedded JSON could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// The chat endpoint was configured as an empty string.
    #[error("chat endpoint must not be empty")]
    EmptyEndpoint,
}

/// Host-page contract for the widget.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Chat backend URL receiving `POST` requests.
    pub endpoint: String,
    /// Cookie holding the CSRF token.
    pub csrf_cookie: String,
    /// Request header carrying the CSRF token.
    pub csrf_header: String,
    /// Element the widget mounts into; `None` mounts into `<body>`.
    pub mount_id: Option<String>,
    /// Path fragments on which the widget stays hidden.
    pub excluded_paths: Vec<String>,
    /// Canned questions offered before the first message.
    pub suggested_prompts: Vec<String>,
    /// Assistant name shown on the trigger and panel header.
    pub title: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned(),
            csrf_header: DEFAULT_CSRF_HEADER.to_owned(),
            mount_id: None,
            excluded_paths: DEFAULT_EXCLUDED_PATHS.iter().map(|p| (*p).to_owned()).collect(),
            suggested_prompts: DEFAULT_SUGGESTED_PROMPTS.iter().map(|p| (*p).to_owned()).collect(),
            title: DEFAULT_TITLE.to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Parse configuration JSON, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::EmptyEndpoint`] when the endpoint is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if config.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        Ok(config)
    }

    /// Whether the widget should appear on a page with the given path.
    pub fn should_mount(&self, path: &str) -> bool {
        !self
            .excluded_paths
            .iter()
            .filter(|fragment| !fragment.is_empty())
            .any(|fragment| path.contains(fragment.as_str()))
    }

    /// Load configuration from the host page, falling back to defaults.
    pub fn from_page() -> Self {
        match page_config_json() {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|err| {
                log::warn!("ignoring widget config: {err}");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

fn page_config_json() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let document = web_sys::window()?.document()?;
        document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
