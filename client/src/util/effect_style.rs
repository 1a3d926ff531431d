//! Inline styles for clone and particle overlays.
//!
//! Clones start on top of the clicked image and grow slightly while fading;
//! particles fan out upward from the burst origin. Motion itself is CSS
//! (`fx-clone` / `fx-particle` keyframes); these helpers only place elements
//! and pass per-element parameters as custom properties.

#[cfg(test)]
#[path = "effect_style_test.rs"]
mod effect_style_test;

use effects::{CloneEffect, Particle};

/// Horizontal spread of a burst, in px either side of the origin.
const PARTICLE_SPREAD_PX: f64 = 80.0;
const PARTICLE_RISE_MIN_PX: f64 = 60.0;
const PARTICLE_RISE_RANGE_PX: f64 = 80.0;

/// Size of one particle dot.
pub const PARTICLE_SIZE_PX: u32 = 12;

pub fn clone_style(clone: &CloneEffect) -> String {
    // Grow by 25% while drifting up and left so the growth stays centred.
    let drift_x = -clone.width * 0.1;
    let drift_y = -clone.height * 0.15;
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;--fx-drift-x:{drift_x}px;--fx-drift-y:{drift_y}px;",
        clone.x, clone.y, clone.width, clone.height
    )
}

/// Horizontal and vertical travel of the `index`-th particle of a burst of
/// `burst_size`. Spread evenly left to right; rise varies so the burst does
/// not look like a flat line.
#[allow(clippy::cast_precision_loss)]
pub fn particle_drift(index: usize, burst_size: usize) -> (f64, f64) {
    let slots = burst_size.saturating_sub(1).max(1) as f64;
    let dx = -PARTICLE_SPREAD_PX + 2.0 * PARTICLE_SPREAD_PX * (index as f64 / slots);
    let rise = PARTICLE_RISE_MIN_PX + ((index * 37) % 80) as f64 / 80.0 * PARTICLE_RISE_RANGE_PX;
    (dx, -rise)
}

pub fn particle_style(particle: &Particle, burst_size: usize) -> String {
    let (dx, dy) = particle_drift(particle.index, burst_size);
    format!(
        "left:{}px;top:{}px;width:{PARTICLE_SIZE_PX}px;height:{PARTICLE_SIZE_PX}px;background:{};--fx-drift-x:{dx}px;--fx-drift-y:{dy}px;",
        particle.x, particle.y, particle.color
    )
}
