//! Button loading indicators and async operation status.
//!
//! DESIGN
//! ======
//! A button stays "loading" from the moment its action starts until a minimum
//! visible duration after the action settles, success or failure, so fast
//! actions still flash the indicator. Releases are scheduled on a
//! [`Timeline`] and carry the generation of the `begin` they belong to; a
//! stale release never clears a newer run of the same button.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use std::collections::HashMap;
use std::fmt;
use std::future::Future;

use crate::config::LoadingConfig;
use crate::timeline::Timeline;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Release {
    button: String,
    generation: u64,
}

/// Per-button loading flags with delayed release.
#[derive(Clone, Debug, Default)]
pub struct LoadingTracker {
    config: LoadingConfig,
    active: HashMap<String, u64>,
    next_generation: u64,
    releases: Timeline<Release>,
}

impl LoadingTracker {
    #[must_use]
    pub fn new(config: LoadingConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Force a button's flag on or off immediately.
    pub fn set_loading(&mut self, button: &str, loading: bool) {
        if loading {
            self.begin(button);
        } else {
            self.active.remove(button);
        }
    }

    #[must_use]
    pub fn is_loading(&self, button: &str) -> bool {
        self.active.contains_key(button)
    }

    /// Mark `button` as loading. The returned generation identifies this run
    /// when it settles.
    pub fn begin(&mut self, button: &str) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.active.insert(button.to_owned(), generation);
        generation
    }

    /// Schedule the release of run `generation` of `button` after the minimum
    /// visible duration. Returns the release due time, or `None` if that run
    /// is no longer the button's current one.
    pub fn settle(&mut self, button: &str, generation: u64, now_ms: u64) -> Option<u64> {
        if self.active.get(button) != Some(&generation) {
            return None;
        }
        let due = now_ms.saturating_add(self.config.min_visible_ms);
        self.releases.schedule(due, Release { button: button.to_owned(), generation });
        Some(due)
    }

    /// Apply every release due at or before `now_ms`.
    pub fn fire_due(&mut self, now_ms: u64) -> usize {
        let due = self.releases.pop_due(now_ms);
        for release in &due {
            if self.active.get(&release.button) == Some(&release.generation) {
                self.active.remove(&release.button);
            }
        }
        due.len()
    }

    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.releases.next_due()
    }

    /// Buttons currently showing the indicator.
    pub fn loading_buttons(&self) -> impl Iterator<Item = &str> {
        self.active.keys().map(String::as_str)
    }
}

/// Loading flag plus last error of a single async operation.
#[derive(Clone, Debug, PartialEq)]
pub struct AsyncStatus<E> {
    loading: bool,
    error: Option<E>,
}

impl<E> Default for AsyncStatus<E> {
    fn default() -> Self {
        Self { loading: false, error: None }
    }
}

impl<E> AsyncStatus<E> {
    /// Start a run: loading on, previous error cleared.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record the outcome of the run and hand back the value on success.
    pub fn finish<T>(&mut self, result: Result<T, E>) -> Option<T> {
        self.loading = false;
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.loading = false;
        self.error = None;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// Run `operation` through `begin`/`finish`.
    pub async fn execute<T, F>(&mut self, operation: F) -> Option<T>
    where
        F: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        self.execute_with(operation, |_| {}, |_| {}).await
    }

    /// [`AsyncStatus::execute`] with hooks for the outcome. Exactly one hook
    /// runs, before the outcome is recorded.
    pub async fn execute_with<T, F, S, X>(&mut self, operation: F, on_success: S, on_error: X) -> Option<T>
    where
        F: Future<Output = Result<T, E>>,
        E: fmt::Display,
        S: FnOnce(&T),
        X: FnOnce(&E),
    {
        self.begin();
        let result = operation.await;
        match &result {
            Ok(value) => on_success(value),
            Err(err) => {
                tracing::warn!(error = %err, "async operation failed");
                on_error(err);
            }
        }
        self.finish(result)
    }
}
