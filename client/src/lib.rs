//! # client
//!
//! Leptos bindings for the bakery storefront's interactive effects and error
//! recovery. The state machines live in the `effects` and `boundary` crates;
//! this crate wires them to signals, browser timers, Web Audio, and
//! navigation.

pub mod components;
pub mod state;
pub mod util;

/// Route panics to the console and forward `log` records to it.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
}
