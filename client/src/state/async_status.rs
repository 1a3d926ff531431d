//! Reactive loading and error state of a single async operation.

#[cfg(test)]
#[path = "async_status_test.rs"]
mod async_status_test;

use std::fmt::Display;
use std::future::Future;

use effects::AsyncStatus;
use leptos::prelude::*;

/// Status of one operation, e.g. the contact form's submit.
pub struct AsyncHandle<E: Send + Sync + 'static> {
    status: RwSignal<AsyncStatus<E>>,
}

impl<E: Send + Sync + 'static> Clone for AsyncHandle<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Send + Sync + 'static> Copy for AsyncHandle<E> {}

impl<E: Send + Sync + 'static> AsyncHandle<E> {
    pub fn new() -> Self {
        Self { status: RwSignal::new(AsyncStatus::default()) }
    }

    pub fn is_loading(&self) -> bool {
        self.status.with(AsyncStatus::is_loading)
    }

    pub fn error(&self) -> Option<E>
    where
        E: Clone,
    {
        self.status.with(|status| status.error().cloned())
    }

    pub fn reset(&self) {
        self.status.try_update(AsyncStatus::reset);
    }

    /// Run `operation`, calling `on_success` or `on_error` with its outcome.
    /// Returns the value on success.
    pub async fn execute<T, F, S, X>(&self, operation: F, on_success: S, on_error: X) -> Option<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
        S: FnOnce(&T),
        X: FnOnce(&E),
    {
        self.status.try_update(AsyncStatus::begin);
        let result = operation.await;
        match &result {
            Ok(value) => on_success(value),
            Err(err) => {
                leptos::logging::warn!("async operation failed: {err}");
                on_error(err);
            }
        }
        self.status.try_update(|status| status.finish(result)).flatten()
    }
}

impl<E: Send + Sync + 'static> Default for AsyncHandle<E> {
    fn default() -> Self {
        Self::new()
    }
}
