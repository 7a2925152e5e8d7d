use leptos::html::Div;
use leptos::prelude::*;

use crate::server_fns::load_feature_animation;

/// Looping Lottie animation for the feature card at `index`.
///
/// A pulsing placeholder shows until the animation arrives, and stays if
/// it never does. Loading never holds up the rest of the page.
#[component]
pub fn FeatureAnimation(index: usize) -> impl IntoView {
    let slot = NodeRef::<Div>::new();
    let animation = LocalResource::new(move || load_feature_animation(index));
    let loaded = move || matches!(animation.get(), Some(Ok(_)));

    Effect::new(move |_| match animation.get() {
        Some(Ok(_json)) => {
            #[cfg(feature = "hydrate")]
            if let Some(slot) = slot.get() {
                if let Err(err) = mount_player(&slot, &_json) {
                    tracing::warn!(index, ?err, "could not mount lottie player");
                }
            }
        }
        Some(Err(err)) => tracing::warn!(index, error = %err, "feature animation failed, keeping placeholder"),
        None => {}
    });

    view! {
        <div class="feature-animation">
            <div node_ref=slot class="lottie-slot"></div>
            <Show when=move || !loaded()>
                <div class="lottie-placeholder animate-pulse"></div>
            </Show>
        </div>
    }
}

/// Replace the slot's contents with a `<lottie-player>` fed the JSON inline.
#[cfg(feature = "hydrate")]
fn mount_player(slot: &web_sys::HtmlDivElement, json: &str) -> Result<(), wasm_bindgen::JsValue> {
    let document = slot
        .owner_document()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("slot is not in a document"))?;
    let player = document.create_element("lottie-player")?;
    player.set_attribute("src", json)?;
    player.set_attribute("background", "transparent")?;
    player.set_attribute("speed", "1")?;
    player.set_attribute("loop", "")?;
    player.set_attribute("autoplay", "")?;
    slot.replace_children_with_node_1(&player);
    Ok(())
}
