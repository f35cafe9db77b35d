use leptos::prelude::*;

use super::*;
use crate::config::DEFAULT_ENDPOINT;
use crate::state::visibility::{PanelEvent, Visibility};

#[test]
fn build_controller_targets_configured_endpoint() {
    let config = WidgetConfig { endpoint: "/api/chat/".to_owned(), ..WidgetConfig::default() };

    let ctrl = build_controller(&config);

    assert_eq!(ctrl.backend().endpoint(), "/api/chat/");
}

#[test]
fn build_controller_uses_chat_widget_dismissal() {
    let ctrl = build_controller(&WidgetConfig::default());
    assert_eq!(ctrl.backend().endpoint(), DEFAULT_ENDPOINT);

    ctrl.handle(PanelEvent::TriggerClicked);
    assert_eq!(ctrl.handle(PanelEvent::LinkActivated), Visibility::Open);
    assert_eq!(ctrl.handle(PanelEvent::EscapePressed), Visibility::Closed);
}

#[test]
fn mount_without_browser_reports_no_document() {
    let result = mount(WidgetConfig::default());
    assert!(matches!(result, Err(MountError::NoDocument)));
}

#[test]
fn mount_error_messages_name_the_host() {
    let err = MountError::MissingHost("chat-root".to_owned());
    assert_eq!(err.to_string(), "mount element #chat-root not found");
}

// =============================================================
// host-page controls
// =============================================================

#[test]
fn host_controls_are_noops_before_mount() {
    MOUNTED.with_borrow_mut(|slot| *slot = None);
    assert!(mounted().is_none());

    toggle_widget();
    close_widget();

    assert!(mounted().is_none());
}

#[test]
fn host_controls_forward_to_mounted_controller() {
    let ctrl = build_controller(&WidgetConfig::default());
    set_mounted(ctrl.clone());

    toggle_widget();
    assert_eq!(ctrl.visibility().get_untracked(), Visibility::Open);

    toggle_widget();
    assert_eq!(ctrl.visibility().get_untracked(), Visibility::Closed);

    toggle_widget();
    close_widget();
    assert_eq!(ctrl.visibility().get_untracked(), Visibility::Closed);

    close_widget();
    assert_eq!(ctrl.visibility().get_untracked(), Visibility::Closed);
}

#[test]
fn later_mount_replaces_earlier_controller() {
    let first = build_controller(&WidgetConfig::default());
    let second = build_controller(&WidgetConfig::default());
    set_mounted(first.clone());
    set_mounted(second.clone());

    toggle_widget();

    assert_eq!(first.visibility().get_untracked(), Visibility::Closed);
    assert_eq!(second.visibility().get_untracked(), Visibility::Open);
}
