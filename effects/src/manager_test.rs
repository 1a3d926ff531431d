use super::*;
use crate::config::DEFAULT_PALETTE;

fn manager() -> EffectManager {
    EffectManager::new(EffectConfig::default())
}

fn cupcake_rect() -> Rect {
    Rect::new(100.0, 100.0, 50.0, 50.0)
}

// =============================================================
// Spawning
// =============================================================

#[test]
fn spawn_clone_adds_exactly_one_clone() {
    let mut fx = manager();
    fx.spawn_clone(0, "cupcake.webp", cupcake_rect());
    assert_eq!(fx.clones().len(), 1);
    assert!(fx.particles().is_empty());
}

#[test]
fn spawn_clone_records_image_and_rect() {
    let mut fx = manager();
    let id = fx.spawn_clone(0, "cupcake.webp", cupcake_rect());
    let clone = &fx.clones()[0];
    assert_eq!(clone.id, id);
    assert_eq!(clone.image, "cupcake.webp");
    assert_eq!(clone.rect(), cupcake_rect());
}

#[test]
fn spawn_particles_adds_one_full_burst() {
    let mut fx = manager();
    let burst = fx.spawn_particles(0, Point::new(200.0, 300.0));
    assert_eq!(fx.particles().len(), 8);
    for (index, particle) in fx.particles().iter().enumerate() {
        assert_eq!(particle.burst, burst);
        assert!(particle.id.as_str().starts_with(burst.as_str()));
        assert_eq!(particle.id, burst.particle(index));
        assert!((particle.x - 200.0).abs() < f64::EPSILON);
        assert!((particle.y - 300.0).abs() < f64::EPSILON);
    }
}

#[test]
fn spawn_particles_cycles_palette_colors() {
    let mut fx = manager();
    fx.spawn_particles(0, Point::default());
    let colors: Vec<&str> = fx.particles().iter().map(|p| p.color.as_str()).collect();
    assert_eq!(colors[..4], DEFAULT_PALETTE);
    assert_eq!(colors[4..], DEFAULT_PALETTE);
}

#[test]
fn rapid_spawns_in_same_millisecond_get_distinct_ids() {
    let mut fx = manager();
    let a = fx.spawn_clone(42, "a.webp", cupcake_rect());
    let b = fx.spawn_clone(42, "b.webp", cupcake_rect());
    assert_ne!(a, b);
    let first = fx.spawn_particles(42, Point::default());
    let second = fx.spawn_particles(42, Point::default());
    assert_ne!(first, second);
}

#[test]
fn clone_ids_carry_prefix_and_spawn_time() {
    let mut fx = manager();
    let id = fx.spawn_clone(1234, "a.webp", cupcake_rect());
    assert!(id.as_str().starts_with("clone_1234_"));
    let burst = fx.spawn_particles(1234, Point::default());
    assert!(burst.as_str().starts_with("burst_1234_"));
}

// =============================================================
// Expiry
// =============================================================

#[test]
fn clone_survives_until_lifetime_elapses() {
    let mut fx = manager();
    fx.spawn_clone(0, "cupcake.webp", cupcake_rect());
    fx.fire_due(999);
    assert_eq!(fx.clones().len(), 1);
    assert_eq!(fx.clones()[0].rect(), cupcake_rect());
    fx.fire_due(1000);
    assert!(fx.clones().is_empty());
}

#[test]
fn particle_burst_expires_after_900ms() {
    let mut fx = manager();
    fx.spawn_particles(0, Point::new(200.0, 300.0));
    fx.fire_due(899);
    assert_eq!(fx.particles().len(), 8);
    fx.fire_due(900);
    assert!(fx.particles().is_empty());
}

#[test]
fn expiry_removes_only_its_own_clone() {
    let mut fx = manager();
    let first = fx.spawn_clone(0, "a.webp", cupcake_rect());
    let second = fx.spawn_clone(500, "b.webp", cupcake_rect());
    fx.fire_due(1000);
    assert_eq!(fx.clones().len(), 1);
    assert_eq!(fx.clones()[0].id, second);
    assert_ne!(fx.clones()[0].id, first);
    fx.fire_due(1500);
    assert!(fx.clones().is_empty());
}

#[test]
fn burst_expiry_leaves_later_bursts_alone() {
    let mut fx = manager();
    fx.spawn_particles(0, Point::default());
    let later = fx.spawn_particles(100, Point::default());
    fx.fire_due(900);
    assert_eq!(fx.particles().len(), 8);
    assert!(fx.particles().iter().all(|p| p.burst == later));
}

#[test]
fn each_expiry_fires_once() {
    let mut fx = manager();
    fx.spawn_clone(0, "a.webp", cupcake_rect());
    fx.spawn_particles(0, Point::default());
    assert_eq!(fx.pending_expiries(), 2);
    assert_eq!(fx.fire_due(5000), 2);
    assert_eq!(fx.fire_due(10_000), 0);
    assert!(fx.is_idle());
}

#[test]
fn next_due_reports_earliest_expiry() {
    let mut fx = manager();
    assert_eq!(fx.next_due(), None);
    fx.spawn_clone(10, "a.webp", cupcake_rect());
    fx.spawn_particles(10, Point::default());
    assert_eq!(fx.next_due(), Some(910));
    fx.fire_due(910);
    assert_eq!(fx.next_due(), Some(1010));
}

#[test]
fn expire_is_idempotent() {
    let mut fx = manager();
    let id = fx.spawn_clone(0, "a.webp", cupcake_rect());
    assert_eq!(fx.expire(&Expiry::Clone(id.clone())), 1);
    assert_eq!(fx.expire(&Expiry::Clone(id)), 0);
}

// =============================================================
// Undo
// =============================================================

#[test]
fn undo_on_empty_is_noop() {
    let mut fx = manager();
    let undo = fx.undo_last();
    assert!(undo.is_noop());
    assert!(fx.clones().is_empty());
    assert!(fx.particles().is_empty());
}

#[test]
fn undo_without_clones_keeps_particles() {
    let mut fx = manager();
    fx.spawn_particles(0, Point::default());
    assert!(fx.undo_last().is_noop());
    assert_eq!(fx.particles().len(), 8);
}

#[test]
fn undo_removes_most_recent_clone_and_one_burst() {
    let mut fx = manager();
    let first = fx.spawn_clone(0, "a.webp", cupcake_rect());
    fx.spawn_particles(0, Point::default());
    let second = fx.spawn_clone(10, "b.webp", cupcake_rect());
    let second_burst = fx.spawn_particles(10, Point::default());

    let undo = fx.undo_last();
    assert_eq!(undo.clone.map(|c| c.id), Some(second));
    assert_eq!(undo.particles_removed, 8);
    assert_eq!(fx.clones().len(), 1);
    assert_eq!(fx.clones()[0].id, first);
    assert_eq!(fx.particles().len(), 8);
    assert!(fx.particles().iter().all(|p| p.burst != second_burst));
}

#[test]
fn undo_never_removes_more_particles_than_exist() {
    let mut fx = manager();
    fx.spawn_clone(0, "a.webp", cupcake_rect());
    fx.spawn_clone(0, "b.webp", cupcake_rect());
    fx.spawn_particles(0, Point::default());

    assert_eq!(fx.undo_last().particles_removed, 8);
    let undo = fx.undo_last();
    assert!(undo.clone.is_some());
    assert_eq!(undo.particles_removed, 0);
    assert!(fx.particles().is_empty());
}

#[test]
fn undo_count_follows_configured_burst_size() {
    let config = EffectConfig { burst_size: 3, ..EffectConfig::default() };
    let mut fx = EffectManager::new(config);
    fx.spawn_clone(0, "a.webp", cupcake_rect());
    fx.spawn_particles(0, Point::default());
    fx.spawn_particles(0, Point::default());
    assert_eq!(fx.particles().len(), 6);
    assert_eq!(fx.undo_last().particles_removed, 3);
    assert_eq!(fx.particles().len(), 3);
}

#[test]
fn undo_after_burst_expired_removes_only_clone() {
    let mut fx = manager();
    fx.spawn_clone(0, "a.webp", cupcake_rect());
    fx.spawn_particles(0, Point::default());
    // Particles gone via their timer, clone still present.
    fx.fire_due(950);
    assert_eq!(fx.clones().len(), 1);
    assert!(fx.particles().is_empty());
    let undo = fx.undo_last();
    assert_eq!(undo.particles_removed, 0);
    assert!(fx.clones().is_empty());
}

#[test]
fn undone_clone_timer_fires_as_noop() {
    let mut fx = manager();
    fx.spawn_clone(0, "a.webp", cupcake_rect());
    fx.undo_last();
    let kept = fx.spawn_clone(600, "b.webp", cupcake_rect());
    assert_eq!(fx.fire_due(1000), 1);
    assert_eq!(fx.clones().len(), 1);
    assert_eq!(fx.clones()[0].id, kept);
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_all_empties_both_collections() {
    let mut fx = manager();
    fx.spawn_clone(0, "a.webp", cupcake_rect());
    fx.spawn_particles(0, Point::default());
    fx.clear_all();
    assert!(fx.clones().is_empty());
    assert!(fx.particles().is_empty());
}

#[test]
fn clear_all_is_idempotent() {
    let mut fx = manager();
    fx.spawn_clone(0, "a.webp", cupcake_rect());
    fx.clear_all();
    let first = fx.snapshot();
    fx.clear_all();
    assert_eq!(fx.snapshot(), first);
}

#[test]
fn timers_after_clear_are_harmless() {
    let mut fx = manager();
    fx.spawn_clone(0, "a.webp", cupcake_rect());
    fx.spawn_particles(0, Point::default());
    fx.clear_all();
    assert_eq!(fx.pending_expiries(), 2);
    assert_eq!(fx.fire_due(2000), 2);
    assert!(fx.is_idle());
}

#[test]
fn removed_entities_are_never_resurrected() {
    let mut fx = manager();
    let id = fx.spawn_clone(0, "a.webp", cupcake_rect());
    fx.clear_all();
    fx.fire_due(1000);
    fx.spawn_clone(1000, "b.webp", cupcake_rect());
    assert!(fx.clones().iter().all(|c| c.id != id));
}

#[test]
fn snapshot_serializes_for_rendering() {
    let mut fx = manager();
    fx.spawn_clone(0, "a.webp", cupcake_rect());
    let json = serde_json::to_value(fx.snapshot()).expect("snapshot serializes");
    assert_eq!(json["clones"][0]["image"], "a.webp");
    assert_eq!(json["pending_expiries"], 1);
}
