//! Perform navigation intents returned by fault boundaries.

use boundary::Navigation;

/// Carry out `navigation` against `window.location` / `window.history`.
///
/// `Rerender` needs no browser action; the boundary already reset itself.
pub fn perform(navigation: &Navigation) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let result = match navigation {
            Navigation::Rerender => Ok(()),
            Navigation::Assign(path) => window.location().set_href(path),
            Navigation::Reload => window.location().reload(),
            Navigation::Back => window.history().and_then(|history| history.back()),
        };
        if let Err(err) = result {
            leptos::logging::warn!("navigation failed: {navigation:?} ({err:?})");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::log!("navigation requested outside the browser: {navigation:?}");
    }
}
