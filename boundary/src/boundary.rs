//! Fault boundaries: explicit not-faulted / faulted state machines.
//!
//! DESIGN
//! ======
//! A boundary wraps one subtree. `render` runs the subtree inside a catch
//! point; an escaping fault or panic flips the boundary to `Faulted` and the
//! fallback is returned instead. Since `render` always yields a view, a fault
//! caught by an inner boundary can never reach an outer one: nesting is plain
//! function composition.
//!
//! Only an explicit recovery action leaves the faulted state.

#[cfg(test)]
#[path = "boundary_test.rs"]
mod boundary_test;

use std::fmt;
use std::sync::Arc;

use crate::fault::{Fault, RenderResult, catch_render};
use crate::panel::{BoundaryError, FallbackPanel, HOME_PATH, Navigation, RecoveryAction};

/// View types that can display a default fallback panel.
pub trait FallbackView: Sized {
    fn from_panel(panel: FallbackPanel) -> Self;
}

impl FallbackView for FallbackPanel {
    fn from_panel(panel: FallbackPanel) -> Self {
        panel
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BoundaryState {
    #[default]
    Healthy,
    Faulted(Fault),
}

/// Callback notified with every fault a boundary catches.
pub type FaultObserver = Arc<dyn Fn(&Fault) + Send + Sync>;

/// State and recovery shared by app-level and page-level boundaries.
///
/// Rendering is an inherent method on each boundary since the two differ in
/// which view types they can produce.
pub trait Boundary {
    /// Transition to faulted with `fault`, as if the subtree had raised it.
    fn capture(&mut self, fault: Fault);

    /// Apply a recovery action offered by the fallback panel.
    ///
    /// # Errors
    ///
    /// [`BoundaryError::NotFaulted`] on a healthy boundary and
    /// [`BoundaryError::UnsupportedAction`] for actions the panel does not offer.
    fn recover(&mut self, action: RecoveryAction) -> Result<Navigation, BoundaryError>;

    fn state(&self) -> &BoundaryState;

    /// The default panel while faulted.
    fn panel(&self) -> Option<FallbackPanel>;

    fn is_faulted(&self) -> bool {
        matches!(self.state(), BoundaryState::Faulted(_))
    }

    fn fault(&self) -> Option<&Fault> {
        match self.state() {
            BoundaryState::Faulted(fault) => Some(fault),
            BoundaryState::Healthy => None,
        }
    }
}

/// Options for [`ErrorBoundary`].
pub struct BoundaryOptions<V> {
    fallback: Option<V>,
    observer: Option<FaultObserver>,
    show_details: bool,
}

impl<V> Default for BoundaryOptions<V> {
    fn default() -> Self {
        Self { fallback: None, observer: None, show_details: false }
    }
}

impl<V> BoundaryOptions<V> {
    /// Defaults with details shown in debug builds only.
    #[must_use]
    pub fn for_build() -> Self {
        Self { show_details: cfg!(debug_assertions), ..Self::default() }
    }

    /// Render `view` verbatim instead of the default panel.
    #[must_use]
    pub fn fallback(mut self, view: V) -> Self {
        self.fallback = Some(view);
        self
    }

    #[must_use]
    pub fn observer(mut self, observer: impl Fn(&Fault) + Send + Sync + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    #[must_use]
    pub fn show_details(mut self, show: bool) -> Self {
        self.show_details = show;
        self
    }
}

impl<V> fmt::Debug for BoundaryOptions<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundaryOptions")
            .field("custom_fallback", &self.fallback.is_some())
            .field("observer", &self.observer.is_some())
            .field("show_details", &self.show_details)
            .finish()
    }
}

/// Full boundary used around the whole app and major layout regions.
///
/// Offers "Try Again" and "Go to Home", an optional custom fallback, an
/// optional observer, and optional diagnostic details.
#[derive(Debug)]
pub struct ErrorBoundary<V> {
    label: String,
    state: BoundaryState,
    options: BoundaryOptions<V>,
}

impl<V> ErrorBoundary<V> {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_options(label, BoundaryOptions::default())
    }

    #[must_use]
    pub fn with_options(label: impl Into<String>, options: BoundaryOptions<V>) -> Self {
        Self { label: label.into(), state: BoundaryState::Healthy, options }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Back to healthy; the next render runs the subtree again.
    pub fn reset(&mut self) {
        self.state = BoundaryState::Healthy;
    }
}

impl<V: Clone + FallbackView> ErrorBoundary<V> {
    /// Render `subtree`, or the fallback while faulted.
    pub fn render<F>(&mut self, subtree: F) -> V
    where
        F: FnOnce() -> RenderResult<V>,
    {
        if !self.is_faulted() {
            match catch_render(subtree) {
                Ok(view) => return view,
                Err(fault) => self.capture(fault),
            }
        }
        self.fallback_view()
    }

    fn fallback_view(&self) -> V {
        match (&self.options.fallback, self.panel()) {
            (Some(custom), _) => custom.clone(),
            (None, Some(panel)) => V::from_panel(panel),
            (None, None) => V::from_panel(FallbackPanel::for_app(&Fault::new("unknown fault"), false)),
        }
    }
}

impl<V> Boundary for ErrorBoundary<V> {
    fn capture(&mut self, fault: Fault) {
        tracing::warn!(
            boundary = %self.label,
            error = %fault,
            stack = %fault.component_stack(),
            "render fault caught"
        );
        if let Some(observer) = &self.options.observer {
            observer(&fault);
        }
        self.state = BoundaryState::Faulted(fault);
    }

    fn recover(&mut self, action: RecoveryAction) -> Result<Navigation, BoundaryError> {
        if !self.is_faulted() {
            return Err(BoundaryError::NotFaulted);
        }
        match action {
            RecoveryAction::TryAgain => {
                tracing::debug!(boundary = %self.label, "retrying faulted subtree");
                self.reset();
                Ok(Navigation::Rerender)
            }
            RecoveryAction::GoHome => Ok(Navigation::Assign(HOME_PATH.to_owned())),
            other => Err(BoundaryError::UnsupportedAction(other)),
        }
    }

    fn state(&self) -> &BoundaryState {
        &self.state
    }

    fn panel(&self) -> Option<FallbackPanel> {
        self.fault()
            .map(|fault| FallbackPanel::for_app(fault, self.options.show_details))
    }
}

/// Lightweight boundary around a single page.
///
/// Always shows the default panel titled after the page, offering
/// "Refresh Page" and "Go Back". No details, no custom fallback.
#[derive(Clone, Debug)]
pub struct PageBoundary {
    page_name: String,
    state: BoundaryState,
}

impl PageBoundary {
    #[must_use]
    pub fn new(page_name: impl Into<String>) -> Self {
        Self { page_name: page_name.into(), state: BoundaryState::Healthy }
    }

    #[must_use]
    pub fn page_name(&self) -> &str {
        &self.page_name
    }

    /// Render `subtree`, or the page panel while faulted.
    pub fn render<V, F>(&mut self, subtree: F) -> V
    where
        V: FallbackView,
        F: FnOnce() -> RenderResult<V>,
    {
        if !self.is_faulted() {
            match catch_render(subtree) {
                Ok(view) => return view,
                Err(fault) => self.capture(fault),
            }
        }
        V::from_panel(FallbackPanel::for_page(&self.page_name))
    }
}

impl Boundary for PageBoundary {
    fn capture(&mut self, fault: Fault) {
        tracing::warn!(page = %self.page_name, error = %fault, "page render fault caught");
        self.state = BoundaryState::Faulted(fault);
    }

    fn recover(&mut self, action: RecoveryAction) -> Result<Navigation, BoundaryError> {
        if matches!(self.state, BoundaryState::Healthy) {
            return Err(BoundaryError::NotFaulted);
        }
        let navigation = match action {
            RecoveryAction::RefreshPage => Navigation::Reload,
            RecoveryAction::GoBack => Navigation::Back,
            other => return Err(BoundaryError::UnsupportedAction(other)),
        };
        // The page instance is left either way.
        self.state = BoundaryState::Healthy;
        Ok(navigation)
    }

    fn state(&self) -> &BoundaryState {
        &self.state
    }

    fn panel(&self) -> Option<FallbackPanel> {
        match self.state {
            BoundaryState::Faulted(_) => Some(FallbackPanel::for_page(&self.page_name)),
            BoundaryState::Healthy => None,
        }
    }
}
