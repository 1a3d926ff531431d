//! Scripted replay of effect operations against a virtual clock.
//!
//! A script is a JSON array of steps, each `{ "at": <ms>, "op": <name>, ... }`.
//! Before a step runs, every expiry due at or before its `at` fires, so the
//! snapshot printed for the step reflects exactly what a browser would show
//! at that moment.

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use effects::{EffectConfig, EffectManager, EffectSnapshot, Point, Rect};
use serde::{Deserialize, Serialize};

use crate::CliError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Step {
    pub at: u64,
    #[serde(flatten)]
    pub op: Op,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    SpawnClone {
        #[serde(default)]
        image: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    SpawnParticles {
        x: f64,
        y: f64,
    },
    Undo,
    Clear,
    /// Only advance the clock.
    Tick,
}

impl Op {
    fn name(&self) -> &'static str {
        match self {
            Self::SpawnClone { .. } => "spawn_clone",
            Self::SpawnParticles { .. } => "spawn_particles",
            Self::Undo => "undo",
            Self::Clear => "clear",
            Self::Tick => "tick",
        }
    }
}

/// Outcome of one step.
#[derive(Debug, Serialize)]
pub struct StepReport {
    pub at: u64,
    pub op: &'static str,
    /// Expiries fired while advancing to `at`.
    pub fired: usize,
    /// Id minted by a spawn step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spawned: Option<String>,
    pub snapshot: EffectSnapshot,
}

pub fn parse_script(raw: &str) -> Result<Vec<Step>, CliError> {
    Ok(serde_json::from_str(raw)?)
}

/// Run `steps` in order on a fresh manager.
///
/// # Errors
///
/// Returns [`CliError::OutOfOrder`] when a step is earlier than the one
/// before it; nothing after that step runs.
pub fn run(config: EffectConfig, steps: &[Step]) -> Result<Vec<StepReport>, CliError> {
    let mut manager = EffectManager::new(config);
    let mut reports = Vec::with_capacity(steps.len());
    let mut previous = 0;

    for (index, step) in steps.iter().enumerate() {
        if step.at < previous {
            return Err(CliError::OutOfOrder { index, at: step.at, previous });
        }
        previous = step.at;

        let fired = manager.fire_due(step.at);
        let spawned = match &step.op {
            Op::SpawnClone { image, x, y, width, height } => {
                let id = manager.spawn_clone(step.at, image.as_str(), Rect::new(*x, *y, *width, *height));
                Some(id.to_string())
            }
            Op::SpawnParticles { x, y } => {
                let burst = manager.spawn_particles(step.at, Point::new(*x, *y));
                Some(burst.to_string())
            }
            Op::Undo => {
                manager.undo_last();
                None
            }
            Op::Clear => {
                manager.clear_all();
                None
            }
            Op::Tick => None,
        };
        tracing::debug!(index, at = step.at, op = step.op.name(), fired, "replayed step");

        reports.push(StepReport {
            at: step.at,
            op: step.op.name(),
            fired,
            spawned,
            snapshot: manager.snapshot(),
        });
    }

    Ok(reports)
}
