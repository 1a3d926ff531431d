//! Fallback panel model, recovery actions, and navigation intents.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use serde::{Deserialize, Serialize};

use crate::fault::Fault;

pub const HOME_PATH: &str = "/";

pub const APP_TITLE: &str = "Oops! Something went wrong";
pub const APP_MESSAGE: &str =
    "We're sorry, but something unexpected happened. Don't worry, our team has been notified.";
pub const PAGE_MESSAGE: &str = "This page encountered an error. Please try refreshing or go back.";

/// A control offered on a fallback panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryAction {
    /// Reset the boundary and render the subtree again in place.
    TryAgain,
    /// Full navigation to the site root.
    GoHome,
    /// Full page reload.
    RefreshPage,
    /// Navigate to the previous history entry.
    GoBack,
}

impl RecoveryAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TryAgain => "Try Again",
            Self::GoHome => "Go to Home",
            Self::RefreshPage => "Refresh Page",
            Self::GoBack => "Go Back",
        }
    }
}

/// What the host must do after a recovery action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum Navigation {
    /// Render the boundary again in place.
    Rerender,
    /// Replace the current location with `path`.
    Assign(String),
    Reload,
    Back,
}

/// Which kind of boundary produced a panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelScope {
    App,
    Page,
}

/// Diagnostic detail, only present when a boundary is configured to show it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FaultDetails {
    pub message: String,
    pub component_stack: String,
}

/// The default fallback view of a faulted boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FallbackPanel {
    pub scope: PanelScope,
    pub title: String,
    pub message: String,
    pub details: Option<FaultDetails>,
    pub actions: Vec<RecoveryAction>,
}

impl FallbackPanel {
    pub(crate) fn for_app(fault: &Fault, show_details: bool) -> Self {
        let details = show_details.then(|| FaultDetails {
            message: fault.message().to_owned(),
            component_stack: fault.component_stack(),
        });
        Self {
            scope: PanelScope::App,
            title: APP_TITLE.to_owned(),
            message: APP_MESSAGE.to_owned(),
            details,
            actions: vec![RecoveryAction::TryAgain, RecoveryAction::GoHome],
        }
    }

    pub(crate) fn for_page(page_name: &str) -> Self {
        let title = if page_name.trim().is_empty() {
            "Page Error".to_owned()
        } else {
            format!("{} Error", page_name.trim())
        };
        Self {
            scope: PanelScope::Page,
            title,
            message: PAGE_MESSAGE.to_owned(),
            details: None,
            actions: vec![RecoveryAction::RefreshPage, RecoveryAction::GoBack],
        }
    }

    #[must_use]
    pub fn offers(&self, action: RecoveryAction) -> bool {
        self.actions.contains(&action)
    }

    #[must_use]
    pub fn action_labels(&self) -> Vec<&'static str> {
        self.actions.iter().map(|action| action.label()).collect()
    }
}

/// Error returned by `recover` on a boundary.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoundaryError {
    #[error("boundary is not faulted")]
    NotFaulted,
    #[error("\"{}\" is not offered by this boundary", .0.label())]
    UnsupportedAction(RecoveryAction),
}
