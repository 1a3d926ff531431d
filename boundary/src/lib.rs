//! Render-fault containment for the bakehouse site.
//!
//! A [`Fault`] raised while rendering a subtree is caught by the nearest
//! enclosing boundary, which swaps in a fallback panel with recovery actions.
//! [`ErrorBoundary`] is the full variant used around the app and layout
//! regions; [`PageBoundary`] is the lighter per-page variant.
//!
//! Everything here is framework independent: views are any type implementing
//! [`FallbackView`], and recovery yields a [`Navigation`] intent for the host
//! to perform.

pub mod boundary;
pub mod fault;
pub mod panel;
pub mod shell;

pub use boundary::{
    Boundary, BoundaryOptions, BoundaryState, ErrorBoundary, FallbackView, FaultObserver,
    PageBoundary,
};
pub use fault::{Fault, RenderResult, component};
pub use panel::{BoundaryError, FallbackPanel, FaultDetails, Navigation, PanelScope, RecoveryAction};
pub use shell::{PAGE_ROUTES, ShellBoundaries, ShellRegions, page_name_for};
