//! Identifiers for spawned effects.
//!
//! Ids embed the spawn time and a per-manager sequence number, e.g.
//! `clone_1700000000000_3`. The sequence alone guarantees uniqueness inside a
//! manager, so two spawns in the same millisecond still get distinct ids.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a single clone or particle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectId(String);

impl EffectId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier shared by every particle of one burst.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BurstId(String);

impl BurstId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the `index`-th particle in this burst.
    #[must_use]
    pub fn particle(&self, index: usize) -> EffectId {
        EffectId(format!("{}_{index}", self.0))
    }
}

impl fmt::Display for BurstId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Monotonic id source owned by one manager.
#[derive(Clone, Debug, Default)]
pub(crate) struct IdSource {
    next: u64,
}

impl IdSource {
    fn mint(&mut self, prefix: &str, now_ms: u64) -> String {
        let seq = self.next;
        self.next += 1;
        format!("{prefix}_{now_ms}_{seq}")
    }

    pub fn clone_id(&mut self, now_ms: u64) -> EffectId {
        EffectId(self.mint("clone", now_ms))
    }

    pub fn burst_id(&mut self, now_ms: u64) -> BurstId {
        BurstId(self.mint("burst", now_ms))
    }
}
