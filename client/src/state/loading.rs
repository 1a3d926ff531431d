//! Per-button loading indicators for async actions.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use std::fmt::Display;
use std::future::Future;

use effects::{LoadingConfig, LoadingTracker};
use leptos::prelude::*;

use crate::util::clock;

/// Loading flags keyed by button id.
#[derive(Clone, Copy)]
pub struct LoadingHandle {
    tracker: RwSignal<LoadingTracker>,
}

impl LoadingHandle {
    pub fn new(config: LoadingConfig) -> Self {
        Self { tracker: RwSignal::new(LoadingTracker::new(config)) }
    }

    /// Reactive: re-runs dependents when `button` starts or stops loading.
    pub fn is_loading(&self, button: &str) -> bool {
        self.tracker.with(|tracker| tracker.is_loading(button))
    }

    pub fn set_loading(&self, button: &str, loading: bool) {
        self.tracker.try_update(|tracker| tracker.set_loading(button, loading));
    }

    /// Run `action` with `button` showing its indicator. Failures are logged
    /// and yield `None`; the indicator is released after the minimum visible
    /// duration either way.
    pub async fn with_loading<T, E, F>(&self, button: &str, action: F) -> Option<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        let run = self.tracker.try_update(|tracker| tracker.begin(button));
        let result = action.await;
        if let Err(err) = &result {
            leptos::logging::error!("Error in button action {button}: {err}");
        }

        let now = clock::now_ms();
        let due = run.and_then(|run| {
            self.tracker.try_update(|tracker| tracker.settle(button, run, now)).flatten()
        });
        if let Some(due) = due {
            self.release_at(due, now);
        }
        result.ok()
    }

    #[cfg(feature = "hydrate")]
    fn release_at(self, due_ms: u64, now_ms: u64) {
        gloo_timers::callback::Timeout::new(clock::delay_until(due_ms, now_ms), move || {
            self.tracker.try_update(|tracker| tracker.fire_due(due_ms.max(clock::now_ms())));
        })
        .forget();
    }

    #[cfg(not(feature = "hydrate"))]
    fn release_at(self, due_ms: u64, _now_ms: u64) {
        self.tracker.try_update(|tracker| tracker.fire_due(due_ms));
    }
}

/// Loading handle scoped to the current component.
pub fn use_loading() -> LoadingHandle {
    LoadingHandle::new(LoadingConfig::default())
}
