//! Device-class checks used to gate decorative interactions.
//!
//! Spawning effects is suppressed on small touch screens. The check lives at
//! the call site; the effect manager never knows why a spawn did not happen.

/// Viewports narrower than this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Whether the current viewport is below [`MOBILE_BREAKPOINT_PX`].
///
/// Always `false` outside the browser.
pub fn is_mobile() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let query = format!("(max-width: {}px)", MOBILE_BREAKPOINT_PX - 1);
        window
            .match_media(&query)
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Whether click effects (clones, particles, tone) should run.
pub fn effects_enabled() -> bool {
    !is_mobile()
}
