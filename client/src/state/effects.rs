//! Reactive handle over the page's [`EffectManager`].

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use effects::{BurstId, CloneEffect, EffectConfig, EffectId, EffectManager, Particle, Point, Rect, Undo};
use leptos::prelude::*;

use crate::util::{audio, clock};

/// Clones and particles of one page view.
///
/// Every spawn arms one browser timeout for its own expiry. When the timeout
/// fires it only asks the manager to fire what is due, so timers that outlive
/// an undo, a clear, or the view itself are harmless.
#[derive(Clone, Copy)]
pub struct EffectsHandle {
    manager: RwSignal<EffectManager>,
}

impl EffectsHandle {
    pub fn new(config: EffectConfig) -> Self {
        Self { manager: RwSignal::new(EffectManager::new(config)) }
    }

    pub fn clones(&self) -> Vec<CloneEffect> {
        self.manager.with(|fx| fx.clones().to_vec())
    }

    pub fn particles(&self) -> Vec<Particle> {
        self.manager.with(|fx| fx.particles().to_vec())
    }

    pub fn has_clones(&self) -> bool {
        self.manager.with(|fx| !fx.clones().is_empty())
    }

    pub fn burst_size(&self) -> usize {
        self.manager.with_untracked(|fx| fx.config().burst_size)
    }

    /// Spawn a clone of `image` over `rect` (page coordinates).
    pub fn spawn_clone(&self, image: &str, rect: Rect) -> Option<EffectId> {
        let now = clock::now_ms();
        let id = self.manager.try_update(|fx| fx.spawn_clone(now, image, rect))?;
        let lifetime = self.manager.with_untracked(|fx| fx.config().clone_lifetime_ms);
        self.arm(now.saturating_add(lifetime), now);
        Some(id)
    }

    /// Spawn one particle burst at `origin` (page coordinates).
    pub fn spawn_particles(&self, origin: Point) -> Option<BurstId> {
        let now = clock::now_ms();
        let burst = self.manager.try_update(|fx| fx.spawn_particles(now, origin))?;
        let lifetime = self.manager.with_untracked(|fx| fx.config().particle_lifetime_ms);
        self.arm(now.saturating_add(lifetime), now);
        Some(burst)
    }

    pub fn play_feedback_sound(&self) -> bool {
        audio::play_feedback_sound()
    }

    /// Product click: clone the image, burst from its center, play the tone.
    pub fn celebrate(&self, image: &str, rect: Rect) {
        self.spawn_clone(image, rect);
        self.spawn_particles(rect.center());
        self.play_feedback_sound();
    }

    pub fn undo_last(&self) -> Undo {
        self.manager.try_update(EffectManager::undo_last).unwrap_or_default()
    }

    /// Empty both collections. Safe to call after the view was disposed.
    pub fn clear_all(&self) {
        self.manager.try_update(EffectManager::clear_all);
    }

    /// Fire whatever is due at `now_ms`. Returns `None` once disposed.
    pub fn tick(&self, now_ms: u64) -> Option<usize> {
        self.manager.try_update(|fx| fx.fire_due(now_ms))
    }

    #[cfg(feature = "hydrate")]
    fn arm(self, due_ms: u64, now_ms: u64) {
        gloo_timers::callback::Timeout::new(clock::delay_until(due_ms, now_ms), move || {
            // A timeout may land a hair early by `Date.now()`; never fire
            // before the due time it was armed for.
            self.tick(due_ms.max(clock::now_ms()));
        })
        .forget();
    }

    #[cfg(not(feature = "hydrate"))]
    fn arm(self, _due_ms: u64, _now_ms: u64) {}
}

/// Effects handle scoped to the current component; cleared on unmount.
pub fn use_effects() -> EffectsHandle {
    let fx = EffectsHandle::new(EffectConfig::default());
    on_cleanup(move || fx.clear_all());
    fx
}
