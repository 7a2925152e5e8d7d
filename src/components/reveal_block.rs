use leptos::html::Section;
use leptos::prelude::*;

use crate::reveal::{use_reveal, ThresholdConfig};

/// Section that gains `is-visible` once `amount` of it has been on screen.
///
/// Children marked `reveal-item` fade up with whatever transition delay
/// they carry inline.
#[component]
pub fn RevealSection(
    id: &'static str,
    amount: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Section>::new();
    let revealed = use_reveal(id, node, ThresholdConfig::amount(amount));
    let base = format!("reveal-section {class}");

    view! {
        <section
            id=id
            node_ref=node
            class=move || if revealed.get() { format!("{base} is-visible") } else { base.clone() }
        >
            {children()}
        </section>
    }
}
