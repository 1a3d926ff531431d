//! Click effects overlay: clones, particle bursts, and the undo control.

use effects::Rect;
use leptos::prelude::*;

use crate::state::effects::EffectsHandle;
use crate::util::{device, effect_style};

/// Absolutely positioned overlay rendering every live clone and particle.
#[component]
pub fn EffectLayer(fx: EffectsHandle) -> impl IntoView {
    let burst_size = fx.burst_size();

    view! {
        <div class="fx-layer" aria-hidden="true">
            <For each=move || fx.clones() key=|clone| clone.id.clone() let:clone>
                <img
                    class="fx-clone"
                    src=clone.image.clone()
                    alt=""
                    style=effect_style::clone_style(&clone)
                />
            </For>
            <For each=move || fx.particles() key=|particle| particle.id.clone() let:particle>
                <span class="fx-particle" style=effect_style::particle_style(&particle, burst_size)></span>
            </For>
        </div>
        <Show when=move || fx.has_clones()>
            <button class="fx-undo" on:click=move |_| {
                fx.undo_last();
            }>
                "Undo"
            </button>
        </Show>
    }
}

/// Product image that celebrates a click unless effects are disabled for
/// this device class.
#[component]
pub fn ProductImage(
    fx: EffectsHandle,
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
) -> impl IntoView {
    let image = src.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if !device::effects_enabled() {
            return;
        }
        if let Some(rect) = clicked_rect(&ev) {
            fx.celebrate(&image, rect);
        }
    };

    view! { <img class="product-image" src=src alt=alt on:click=on_click /> }
}

/// Page-coordinate rect of the clicked element.
#[cfg(feature = "hydrate")]
fn clicked_rect(ev: &leptos::ev::MouseEvent) -> Option<Rect> {
    let element = event_target::<web_sys::Element>(ev);
    let bounds = element.get_bounding_client_rect();
    let window = web_sys::window()?;
    let scroll_x = window.scroll_x().unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    Some(Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height()).scrolled_by(scroll_x, scroll_y))
}

#[cfg(not(feature = "hydrate"))]
fn clicked_rect(_ev: &leptos::ev::MouseEvent) -> Option<Rect> {
    None
}
