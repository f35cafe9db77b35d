//! Open/closed state machine for floating panels.
//!
//! DESIGN
//! ======
//! One machine serves every disclosure-style panel; the difference between
//! the chat widget and the navigation menu is which events dismiss an open
//! panel, captured in [`DismissRules`].

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// Viewport width above which the navigation menu closes itself.
pub const NAV_MENU_BREAKPOINT: f64 = 767.0;

/// Whether a panel is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// User or environment events that can move a panel between states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelEvent {
    TriggerClicked,
    CloseClicked,
    OutsideClick,
    EscapePressed,
    LinkActivated,
    ViewportResized { width: f64 },
}

/// Which events close an open panel besides the trigger and close button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DismissRules {
    pub outside_click: bool,
    pub escape: bool,
    pub link: bool,
    pub breakpoint: Option<f64>,
}

impl DismissRules {
    pub const CHAT_WIDGET: Self = Self { outside_click: true, escape: true, link: false, breakpoint: None };

    pub const NAVIGATION_MENU: Self =
        Self { outside_click: true, escape: true, link: true, breakpoint: Some(NAV_MENU_BREAKPOINT) };
}

impl Visibility {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Next state after `event` under `rules`.
    pub fn apply(self, event: PanelEvent, rules: &DismissRules) -> Self {
        match (self, event) {
            (Self::Closed, PanelEvent::TriggerClicked) => Self::Open,
            (Self::Open, PanelEvent::TriggerClicked | PanelEvent::CloseClicked) => Self::Closed,
            (Self::Open, PanelEvent::OutsideClick) if rules.outside_click => Self::Closed,
            (Self::Open, PanelEvent::EscapePressed) if rules.escape => Self::Closed,
            (Self::Open, PanelEvent::LinkActivated) if rules.link => Self::Closed,
            (Self::Open, PanelEvent::ViewportResized { width }) if rules.breakpoint.is_some_and(|bp| width > bp) => {
                Self::Closed
            }
            (state, _) => state,
        }
    }
}
