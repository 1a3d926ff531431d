//! The site's containment tree.
//!
//! ```text
//! app (details in debug builds)
//! ├── header        ErrorBoundary
//! ├── <route page>  PageBoundary, one per route
//! └── footer        ErrorBoundary
//! ```
//!
//! Faults in the header, footer, or a page stay in their own boundary; the
//! app boundary only sees faults raised by the layout chrome around them.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use std::collections::BTreeMap;

use crate::boundary::{Boundary, BoundaryOptions, ErrorBoundary, FallbackView, PageBoundary};
use crate::fault::RenderResult;

/// Routes with a page boundary and the page name shown on its panel.
pub const PAGE_ROUTES: [(&str, &str); 6] = [
    ("/", "Home"),
    ("/academy", "Academy"),
    ("/shop", "Shop"),
    ("/contact", "Contact"),
    ("/privacy-policy", "Privacy Policy"),
    ("/terms-of-service", "Terms of Service"),
];

/// Page name for `route`, if the route has a page boundary.
#[must_use]
pub fn page_name_for(route: &str) -> Option<&'static str> {
    PAGE_ROUTES
        .iter()
        .find(|(path, _)| *path == route)
        .map(|(_, name)| *name)
}

/// Render functions for the regions of one frame of the shell.
pub struct ShellRegions<H, P, F> {
    pub header: H,
    pub page: P,
    pub footer: F,
}

/// Boundaries of the whole site, kept across renders.
#[derive(Debug)]
pub struct ShellBoundaries<V> {
    app: ErrorBoundary<V>,
    header: ErrorBoundary<V>,
    footer: ErrorBoundary<V>,
    pages: BTreeMap<String, PageBoundary>,
}

impl<V> ShellBoundaries<V> {
    /// App boundary with `app_options`; header and footer with defaults.
    #[must_use]
    pub fn new(app_options: BoundaryOptions<V>) -> Self {
        Self {
            app: ErrorBoundary::with_options("App", app_options),
            header: ErrorBoundary::new("Header"),
            footer: ErrorBoundary::new("Footer"),
            pages: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn app(&self) -> &ErrorBoundary<V> {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut ErrorBoundary<V> {
        &mut self.app
    }

    pub fn header_mut(&mut self) -> &mut ErrorBoundary<V> {
        &mut self.header
    }

    pub fn footer_mut(&mut self) -> &mut ErrorBoundary<V> {
        &mut self.footer
    }

    /// The boundary for `route`, created on first use. Unknown routes get a
    /// boundary named after the path.
    pub fn page_mut(&mut self, route: &str) -> &mut PageBoundary {
        self.pages
            .entry(route.to_owned())
            .or_insert_with(|| PageBoundary::new(page_name_for(route).unwrap_or(route)))
    }

    #[must_use]
    pub fn page(&self, route: &str) -> Option<&PageBoundary> {
        self.pages.get(route)
    }

    /// Number of faulted boundaries in the tree.
    #[must_use]
    pub fn faulted_count(&self) -> usize {
        let regions = [self.app.is_faulted(), self.header.is_faulted(), self.footer.is_faulted()];
        regions.iter().filter(|faulted| **faulted).count()
            + self.pages.values().filter(|page| page.is_faulted()).count()
    }
}

impl<V: Clone + FallbackView> ShellBoundaries<V> {
    /// Render one frame for `route`. `layout` assembles header, page, and
    /// footer views; faults it raises land in the app boundary.
    pub fn render<H, P, F, L>(&mut self, route: &str, regions: ShellRegions<H, P, F>, layout: L) -> V
    where
        H: FnOnce() -> RenderResult<V>,
        P: FnOnce() -> RenderResult<V>,
        F: FnOnce() -> RenderResult<V>,
        L: FnOnce(V, V, V) -> RenderResult<V>,
    {
        self.page_mut(route);
        let Self { app, header, footer, pages } = self;
        app.render(|| {
            let header_view = header.render(regions.header);
            let page_view = match pages.get_mut(route) {
                Some(page) => page.render(regions.page),
                None => (regions.page)()?,
            };
            let footer_view = footer.render(regions.footer);
            layout(header_view, page_view, footer_view)
        })
    }
}
