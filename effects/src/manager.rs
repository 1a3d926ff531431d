//! Lifecycle of transient clones and particle bursts.
//!
//! DESIGN
//! ======
//! Every spawn schedules exactly one [`Expiry`] on the internal timeline.
//! Expiries are keyed by id and remove only what is still present, so undo,
//! clear, and teardown never have to track or cancel pending timers: an
//! expiry whose entities are already gone fires as a no-op.
//!
//! Both collections are append-only between removals, which makes "most
//! recent" well defined by insertion order rather than by wall-clock time.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use serde::Serialize;

use crate::config::EffectConfig;
use crate::geometry::{Point, Rect};
use crate::ids::{BurstId, EffectId, IdSource};
use crate::timeline::Timeline;

/// A duplicate of a clicked image flying away from its origin.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CloneEffect {
    pub id: EffectId,
    pub image: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CloneEffect {
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// One decorative dot of a burst.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Particle {
    pub id: EffectId,
    pub burst: BurstId,
    /// Position inside the burst, used to fan particles out when drawn.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub color: String,
}

/// A scheduled removal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Expiry {
    Clone(EffectId),
    Burst(BurstId),
}

/// What [`EffectManager::undo_last`] removed.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Undo {
    pub clone: Option<CloneEffect>,
    pub particles_removed: usize,
}

impl Undo {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.clone.is_none() && self.particles_removed == 0
    }
}

/// Point-in-time view of the manager, used for rendering and replay output.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EffectSnapshot {
    pub clones: Vec<CloneEffect>,
    pub particles: Vec<Particle>,
    pub pending_expiries: usize,
}

/// Owns the clones and particles of one page view.
#[derive(Clone, Debug, Default)]
pub struct EffectManager {
    config: EffectConfig,
    ids: IdSource,
    clones: Vec<CloneEffect>,
    particles: Vec<Particle>,
    timeline: Timeline<Expiry>,
}

impl EffectManager {
    #[must_use]
    pub fn new(config: EffectConfig) -> Self {
        Self { config, ..Self::default() }
    }

    #[must_use]
    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Append a clone of `image` at `rect` and schedule its removal.
    pub fn spawn_clone(&mut self, now_ms: u64, image: impl Into<String>, rect: Rect) -> EffectId {
        let id = self.ids.clone_id(now_ms);
        self.clones.push(CloneEffect {
            id: id.clone(),
            image: image.into(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        });
        let due = now_ms.saturating_add(self.config.clone_lifetime_ms);
        self.timeline.schedule(due, Expiry::Clone(id.clone()));
        tracing::debug!(%id, due, "spawned clone");
        id
    }

    /// Append one burst of particles at `origin` and schedule its removal.
    pub fn spawn_particles(&mut self, now_ms: u64, origin: Point) -> BurstId {
        let burst = self.ids.burst_id(now_ms);
        for index in 0..self.config.burst_size {
            self.particles.push(Particle {
                id: burst.particle(index),
                burst: burst.clone(),
                index,
                x: origin.x,
                y: origin.y,
                color: self.config.color_for(index).to_owned(),
            });
        }
        let due = now_ms.saturating_add(self.config.particle_lifetime_ms);
        self.timeline.schedule(due, Expiry::Burst(burst.clone()));
        tracing::debug!(%burst, size = self.config.burst_size, due, "spawned particle burst");
        burst
    }

    /// Remove the most recent clone together with up to one burst's worth of
    /// the most recent particles. No-op when there are no clones.
    pub fn undo_last(&mut self) -> Undo {
        let Some(clone) = self.clones.pop() else {
            return Undo::default();
        };
        let keep = self.particles.len().saturating_sub(self.config.burst_size);
        let particles_removed = self.particles.len() - keep;
        self.particles.truncate(keep);
        tracing::debug!(id = %clone.id, particles_removed, "undid last spawn");
        Undo { clone: Some(clone), particles_removed }
    }

    /// Drop every clone and particle. Pending expiries stay queued and fire as
    /// no-ops.
    pub fn clear_all(&mut self) {
        if !self.clones.is_empty() || !self.particles.is_empty() {
            tracing::debug!(
                clones = self.clones.len(),
                particles = self.particles.len(),
                "cleared effects"
            );
        }
        self.clones.clear();
        self.particles.clear();
    }

    /// Fire every expiry due at or before `now_ms`. Returns the number of
    /// expiries fired, including those that found nothing left to remove.
    pub fn fire_due(&mut self, now_ms: u64) -> usize {
        let due = self.timeline.pop_due(now_ms);
        for expiry in &due {
            self.expire(expiry);
        }
        due.len()
    }

    /// Remove whatever `expiry` refers to, if still present. Returns the
    /// number of entities removed.
    pub fn expire(&mut self, expiry: &Expiry) -> usize {
        let removed = match expiry {
            Expiry::Clone(id) => {
                let before = self.clones.len();
                self.clones.retain(|clone| &clone.id != id);
                before - self.clones.len()
            }
            Expiry::Burst(burst) => {
                let before = self.particles.len();
                self.particles.retain(|particle| &particle.burst != burst);
                before - self.particles.len()
            }
        };
        tracing::trace!(?expiry, removed, "expiry fired");
        removed
    }

    /// Earliest time at which [`EffectManager::fire_due`] has work to do.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.timeline.next_due()
    }

    #[must_use]
    pub fn clones(&self) -> &[CloneEffect] {
        &self.clones
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn pending_expiries(&self) -> usize {
        self.timeline.len()
    }

    /// True when nothing is on screen and no expiry is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.clones.is_empty() && self.particles.is_empty() && self.timeline.is_empty()
    }

    #[must_use]
    pub fn snapshot(&self) -> EffectSnapshot {
        EffectSnapshot {
            clones: self.clones.clone(),
            particles: self.particles.clone(),
            pending_expiries: self.timeline.len(),
        }
    }
}
