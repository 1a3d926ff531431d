//! Render faults and the component stack they carry.

#[cfg(test)]
#[path = "fault_test.rs"]
mod fault_test;

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use serde::Serialize;

/// A failure raised while rendering a subtree.
///
/// The component stack lists the named components the fault escaped through,
/// innermost first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct Fault {
    message: String,
    components: Vec<String>,
}

impl Fault {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), components: Vec::new() }
    }

    /// Capture any error as a fault.
    #[must_use]
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Self::new(err.to_string())
    }

    /// Convert a caught panic payload into a fault.
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        if let Some(text) = payload.downcast_ref::<&str>() {
            Self::new(*text)
        } else if let Some(text) = payload.downcast_ref::<String>() {
            Self::new(text.clone())
        } else {
            Self::new("render panicked")
        }
    }

    /// Record that the fault escaped through `component`.
    #[must_use]
    pub fn within(mut self, component: impl Into<String>) -> Self {
        self.components.push(component.into());
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Multi-line trace, one `in <Component>` line per frame.
    #[must_use]
    pub fn component_stack(&self) -> String {
        self.components
            .iter()
            .map(|name| format!("    in {name}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub type RenderResult<V> = Result<V, Fault>;

/// Run `render`, turning an escaping panic into a [`Fault`].
pub(crate) fn catch_render<V>(render: impl FnOnce() -> RenderResult<V>) -> RenderResult<V> {
    match catch_unwind(AssertUnwindSafe(render)) {
        Ok(result) => result,
        Err(payload) => Err(Fault::from_panic(payload.as_ref())),
    }
}

/// Render a named component. Faults and panics escaping it gain `name` on
/// their component stack.
///
/// # Errors
///
/// Returns the fault raised by `render`, annotated with `name`.
pub fn component<V>(name: &str, render: impl FnOnce() -> RenderResult<V>) -> RenderResult<V> {
    catch_render(render).map_err(|fault| fault.within(name))
}
