//! Containment tree of the whole site: header, routed page, footer.

use boundary::{Fault, page_name_for};
use leptos::prelude::*;

use crate::components::error_boundary::{AppErrorBoundary, PageErrorBoundary};

/// Wraps the layout regions in their own boundaries. Only the outermost
/// boundary shows fault details, and only in debug builds.
#[component]
pub fn SiteShell(
    #[prop(into)] route: String,
    #[prop(into)] header: ViewFn,
    #[prop(into)] footer: ViewFn,
    #[prop(optional)] on_error: Option<Callback<Fault>>,
    children: Children,
) -> impl IntoView {
    let page_name = page_name_for(&route).map_or_else(|| route.clone(), str::to_owned);

    view! {
        <AppErrorBoundary label="App" show_details=cfg!(debug_assertions) on_error=on_error>
            <AppErrorBoundary label="Header" on_error=on_error>
                {header.run()}
            </AppErrorBoundary>
            <main class="site-main">
                <PageErrorBoundary page_name=page_name>{children()}</PageErrorBoundary>
            </main>
            <AppErrorBoundary label="Footer" on_error=on_error>
                {footer.run()}
            </AppErrorBoundary>
        </AppErrorBoundary>
    }
}
