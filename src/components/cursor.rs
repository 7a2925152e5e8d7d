use leptos::prelude::*;

use crate::effects::CursorState;

/// Elements carrying this class grow and recolour the cursor on hover.
pub const HOVERABLE_CLASS: &str = "cursor-hoverable";

/// Gradient blob that follows the mouse.
///
/// Listens on the window, so hoverable elements need no handlers of their
/// own; any element with [`HOVERABLE_CLASS`] takes part.
#[component]
pub fn CoolCursor() -> impl IntoView {
    let cursor = RwSignal::new(CursorState::default());

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev;

        let moved = window_event_listener(ev::mousemove, move |ev| {
            cursor.update(|c| c.moved(f64::from(ev.client_x()), f64::from(ev.client_y())));
        });
        let over = window_event_listener(ev::mouseover, move |ev| {
            let entered = hoverable(ev.target());
            if entered.is_some() && entered != hoverable(ev.related_target()) {
                cursor.update(|c| c.enter());
            }
        });
        let out = window_event_listener(ev::mouseout, move |ev| {
            let left = hoverable(ev.target());
            if left.is_some() && left != hoverable(ev.related_target()) {
                cursor.update(|c| c.leave());
            }
        });

        on_cleanup(move || {
            moved.remove();
            over.remove();
            out.remove();
        });
    }

    view! {
        <div
            class=move || cursor.with(|c| c.class())
            style=move || cursor.with(|c| c.style())
            aria-hidden="true"
        ></div>
    }
}

/// Closest hoverable ancestor of an event target, the target included.
#[cfg(feature = "hydrate")]
fn hoverable(target: Option<web_sys::EventTarget>) -> Option<web_sys::Element> {
    use wasm_bindgen::JsCast;

    let element = target?.dyn_into::<web_sys::Element>().ok()?;
    element.closest(&format!(".{HOVERABLE_CLASS}")).ok().flatten()
}
