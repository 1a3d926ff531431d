//! Transient interaction effects for the bakehouse site.
//!
//! Clicking a product spawns a flying clone of its image plus a burst of
//! particles; both vanish on their own shortly after. This crate owns that
//! lifecycle as plain data on an explicit clock so it can be driven by
//! browser timers in the client and by a virtual clock in tests and the CLI.
//!
//! It also carries the button loading tracker and the async status model used
//! by booking and order buttons.

pub mod config;
pub mod geometry;
pub mod ids;
pub mod loading;
pub mod manager;
pub mod timeline;
pub mod tone;

pub use config::{ConfigError, EffectConfig, LoadingConfig};
pub use geometry::{Point, Rect};
pub use ids::{BurstId, EffectId};
pub use loading::{AsyncStatus, LoadingTracker};
pub use manager::{CloneEffect, EffectManager, EffectSnapshot, Expiry, Particle, Undo};
pub use timeline::Timeline;
pub use tone::{FeedbackTone, SilentSink, ToneSink, play_feedback_sound};
