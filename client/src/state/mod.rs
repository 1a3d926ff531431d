//! Reactive client-side state.
//!
//! DESIGN
//! ======
//! Each handle wraps a plain model from the `effects` crate in a signal and
//! arms browser timers for its scheduled work. Handles are `Copy` so they can
//! be moved freely into event handlers and cleanup callbacks.

pub mod async_status;
pub mod effects;
pub mod loading;
