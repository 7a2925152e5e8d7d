use leptos::html::Div;
use leptos::prelude::*;

use crate::components::NavAnchor;
use crate::effects::tilt::{glow_origin, Tilt, GLOW_SIZE};
use crate::models::Plan;
use crate::timing;

/// Pricing card that tilts toward the pointer, with a glare sheen and a
/// coloured glow under the cursor.
#[component]
pub fn TiltPlanCard(plan: &'static Plan, index: usize) -> impl IntoView {
    let card = NodeRef::<Div>::new();
    let tilt = RwSignal::new(Tilt::REST);
    let pointer = RwSignal::new(None::<(f64, f64)>);
    let accent = plan.accent.unwrap_or("from-pink-500 to-yellow-400");

    let on_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = card.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let x = f64::from(ev.client_x()) - rect.left();
            let y = f64::from(ev.client_y()) - rect.top();
            tilt.set(Tilt::at(x, y, rect.width(), rect.height()));
            pointer.set(Some((x, y)));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };
    let on_leave = move |_: leptos::ev::MouseEvent| {
        tilt.set(Tilt::REST);
        pointer.set(None);
    };

    let glow = move || {
        pointer.get().map(|(x, y)| {
            let (left, top) = glow_origin(x, y);
            view! {
                <div
                    class=format!("tilt-glow bg-gradient-to-br {accent}")
                    style=format!("left: {left}px; top: {top}px; width: {GLOW_SIZE}px; height: {GLOW_SIZE}px")
                ></div>
            }
        })
    };

    let surface_class = if plan.highlight {
        format!("plan-card bg-gradient-to-br {accent} highlight cursor-hoverable")
    } else {
        format!("plan-card bg-gradient-to-br {accent} cursor-hoverable")
    };

    view! {
        <div
            node_ref=card
            class="tilt-card reveal-item"
            style=timing::card_delay(index).transition_style()
            on:mousemove=on_move
            on:mouseleave=on_leave
        >
            {glow}
            <div class="tilt-surface" style=move || format!("transform: {}", tilt.get().transform())>
                <div class=surface_class>
                    <h3>{plan.name}</h3>
                    <p class="plan-price">{plan.price}</p>
                    <ul class="plan-features">
                        {plan.features.iter().map(|f| view! { <li><span class="dot"></span><span>{*f}</span></li> }).collect_view()}
                    </ul>
                    <NavAnchor href="#cta" class="plan-choose cursor-hoverable">{format!("Choose {}", plan.name)}</NavAnchor>
                </div>
                <div class="tilt-glare" style=move || tilt.get().glare_style()></div>
            </div>
        </div>
    }
}
