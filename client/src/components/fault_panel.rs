//! Fallback panel shown in place of a faulted subtree.

use boundary::{FallbackPanel, PanelScope, RecoveryAction};
use leptos::prelude::*;

/// Title, message, optional diagnostics, and one button per recovery action.
#[component]
pub fn FaultPanel(panel: FallbackPanel, on_action: Callback<RecoveryAction>) -> impl IntoView {
    let class = match panel.scope {
        PanelScope::App => "fault-panel fault-panel--app",
        PanelScope::Page => "fault-panel fault-panel--page",
    };

    let details = panel.details.map(|details| {
        view! {
            <details class="fault-panel__details">
                <summary>"Error details"</summary>
                <pre class="fault-panel__message">{details.message}</pre>
                <pre class="fault-panel__stack">{details.component_stack}</pre>
            </details>
        }
    });

    let actions = panel
        .actions
        .into_iter()
        .map(|action| {
            view! {
                <button class="fault-panel__action" on:click=move |_| on_action.run(action)>
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class=class role="alert">
            <h2 class="fault-panel__title">{panel.title}</h2>
            <p class="fault-panel__text">{panel.message}</p>
            {details}
            <div class="fault-panel__actions">{actions}</div>
        </div>
    }
}
