//! Mounting the widget into the host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `run` is called once from the WASM start hook. It loads [`WidgetConfig`],
//! checks the current path against the exclusion list, and mounts a single
//! [`ChatWidget`] into the configured host element (or `<body>`).
//!
//! The mounted controller is also kept in a thread-local slot so the host
//! page can drive the panel from its own scripts through
//! `toggleDermaGenieWidget()` and `closeDermaGenieWidget()`.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here panics. A missing host element is reported as
//! [`MountError`] and logged by `run`; the page keeps working without the
//! widget.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::cell::RefCell;

#[cfg(feature = "csr")]
use leptos::prelude::*;

use crate::components::chat_widget::WidgetController;
#[cfg(feature = "csr")]
use crate::components::chat_widget::ChatWidget;
use crate::config::WidgetConfig;
use crate::controller::ChatController;
use crate::net::backend::HttpChatBackend;
use crate::state::visibility::{DismissRules, PanelEvent};

thread_local! {
    static MOUNTED: RefCell<Option<WidgetController>> = const { RefCell::new(None) };
}

/// Errors that prevent the widget from being mounted.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    /// The configured host element does not exist on this page.
    #[error("mount element #{0} not found")]
    MissingHost(String),

    /// No browser document is available.
    #[error("no document available")]
    NoDocument,
}

/// Controller wired to the configured HTTP backend.
pub fn build_controller(config: &WidgetConfig) -> WidgetController {
    ChatController::new(HttpChatBackend::new(config), DismissRules::CHAT_WIDGET)
}

/// Mount the widget unless the current page is excluded.
///
/// Returns `Ok(false)` when the path is excluded.
///
/// # Errors
///
/// Returns [`MountError`] when the document or the host element is missing.
pub fn mount(config: WidgetConfig) -> Result<bool, MountError> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or(MountError::NoDocument)?;
        let path = window.location().pathname().unwrap_or_default();
        if !config.should_mount(&path) {
            log::debug!("chat widget skipped on {path}");
            return Ok(false);
        }

        let document = window.document().ok_or(MountError::NoDocument)?;
        let host = match &config.mount_id {
            Some(id) => document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                .ok_or_else(|| MountError::MissingHost(id.clone()))?,
            None => document.body().ok_or(MountError::NoDocument)?,
        };

        let controller = build_controller(&config);
        set_mounted(controller.clone());
        let WidgetConfig { title, suggested_prompts, .. } = config;
        leptos::mount::mount_to(host, move || {
            view! { <ChatWidget controller=controller title=title suggested_prompts=suggested_prompts/> }
        })
        .forget();
        Ok(true)
    }
    #[cfg(not(feature = "csr"))]
    {
        drop(config);
        Err(MountError::NoDocument)
    }
}

/// Load page configuration and mount, logging the outcome.
pub fn run() {
    let config = WidgetConfig::from_page();
    let endpoint = config.endpoint.clone();
    match mount(config) {
        Ok(true) => log::info!("chat widget mounted (endpoint {endpoint})"),
        Ok(false) => {}
        Err(err) => log::warn!("chat widget not mounted: {err}"),
    }
}

/// Record the controller that host-page calls are forwarded to.
///
/// A later mount replaces the earlier one.
pub fn set_mounted(controller: WidgetController) {
    MOUNTED.with_borrow_mut(|slot| *slot = Some(controller));
}

/// The controller of the mounted widget, if any.
pub fn mounted() -> Option<WidgetController> {
    MOUNTED.with_borrow(Clone::clone)
}

fn forward(event: PanelEvent) {
    // Clone out first so reactive effects never run under the borrow.
    match mounted() {
        Some(controller) => {
            controller.handle(event);
        }
        None => log::debug!("chat widget not mounted; ignoring {event:?}"),
    }
}

/// Open the panel if closed, close it if open. No-op when nothing is mounted.
#[cfg_attr(feature = "csr", wasm_bindgen::prelude::wasm_bindgen(js_name = toggleDermaGenieWidget))]
pub fn toggle_widget() {
    forward(PanelEvent::TriggerClicked);
}

/// Close the panel. No-op when nothing is mounted.
#[cfg_attr(feature = "csr", wasm_bindgen::prelude::wasm_bindgen(js_name = closeDermaGenieWidget))]
pub fn close_widget() {
    forward(PanelEvent::CloseClicked);
}
