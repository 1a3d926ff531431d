//! Leptos wrappers around the app and page fault boundaries.
//!
//! Children signal a fault by rendering an `Err` (typically a
//! [`boundary::Fault`]). Leptos' own `ErrorBoundary` collects it; the wrapped
//! boundary turns it into a fallback panel and decides what each recovery
//! button does.

#[cfg(test)]
#[path = "error_boundary_test.rs"]
mod error_boundary_test;

use boundary::{Boundary, BoundaryOptions, FallbackPanel, Fault, Navigation, PageBoundary, RecoveryAction};
use leptos::error::{Error, Errors};
use leptos::logging::warn;
use leptos::prelude::*;

use crate::components::fault_panel::FaultPanel;
use crate::util::navigation;

type AppBoundary = boundary::ErrorBoundary<FallbackPanel>;

/// App-level boundary: "Try Again" re-renders in place, "Go to Home" navigates
/// to the site root.
///
/// Details stay hidden unless `show_details` is set; only the outermost
/// boundary should set it. `on_error` sees every captured fault. A `fallback`
/// view replaces the default panel verbatim.
#[component]
pub fn AppErrorBoundary(
    #[prop(into, default = "app".to_owned())] label: String,
    #[prop(optional)] show_details: bool,
    #[prop(optional_no_strip)] on_error: Option<Callback<Fault>>,
    #[prop(optional, into)] fallback: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let boundary = StoredValue::new(AppBoundary::with_options(label, app_options(show_details, on_error)));

    contain(boundary, children, fallback, |app, fault| {
        let label = app.label().to_owned();
        app.render(|| Err(fault.within(label)))
    })
}

/// Page-level boundary titled after `page_name`: "Refresh Page" reloads,
/// "Go Back" walks history.
#[component]
pub fn PageErrorBoundary(#[prop(into)] page_name: String, children: Children) -> impl IntoView {
    let boundary = StoredValue::new(PageBoundary::new(page_name));

    contain(boundary, children, None, |page, fault| {
        let name = page.page_name().to_owned();
        page.render::<FallbackPanel, _>(|| Err(fault.within(name)))
    })
}

pub(crate) fn app_options(show_details: bool, on_error: Option<Callback<Fault>>) -> BoundaryOptions<FallbackPanel> {
    let options = BoundaryOptions::default().show_details(show_details);
    match on_error {
        Some(on_error) => options.observer(move |fault| on_error.run(fault.clone())),
        None => options,
    }
}

/// Recover the [`Fault`] a child rendered, frames included. Foreign errors
/// start a fresh fault from their message.
pub(crate) fn fault_from_error(err: &Error) -> Fault {
    let inner = err.clone().into_inner();
    match inner.downcast_ref::<Fault>() {
        Some(fault) => fault.clone(),
        None => Fault::from_error(inner.as_ref()),
    }
}

pub(crate) fn first_fault(errors: impl IntoIterator<Item = Error>) -> Fault {
    errors
        .into_iter()
        .next()
        .map_or_else(|| Fault::new("unknown fault"), |err| fault_from_error(&err))
}

fn contain<B, C>(
    boundary: StoredValue<B>,
    children: Children,
    custom: Option<ViewFn>,
    capture: C,
) -> impl IntoView
where
    B: Boundary + Send + Sync + 'static,
    C: Fn(&mut B, Fault) -> FallbackPanel + Send + Sync + 'static,
{
    view! {
        <ErrorBoundary fallback={move |errors: ArcRwSignal<Errors>| {
            let fault = first_fault(errors.get_untracked().into_iter().map(|(_, err)| err));
            let Some(panel) = boundary.try_update_value(|b| capture(b, fault)) else {
                return ().into_any();
            };
            if let Some(custom) = &custom {
                return custom.run();
            }
            let on_action = Callback::new(move |action: RecoveryAction| {
                match boundary.try_update_value(|b| b.recover(action)) {
                    Some(Ok(Navigation::Rerender)) => errors.set(Errors::default()),
                    Some(Ok(intent)) => navigation::perform(&intent),
                    Some(Err(err)) => warn!("recovery action rejected: {err}"),
                    None => {}
                }
            });
            view! { <FaultPanel panel=panel on_action=on_action /> }.into_any()
        }}>
            {children()}
        </ErrorBoundary>
    }
}
