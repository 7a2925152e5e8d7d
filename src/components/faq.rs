use leptos::prelude::*;

use crate::effects::toggle_faq;
use crate::models::Faq;
use crate::timing;

/// Accordion with at most one answer open.
#[component]
pub fn FaqList(faqs: &'static [Faq]) -> impl IntoView {
    let active = RwSignal::new(None::<usize>);

    view! {
        <div class="faq-list">
            {faqs
                .iter()
                .enumerate()
                .map(|(i, faq)| {
                    let open = move || active.get() == Some(i);
                    view! {
                        <div class="faq-item reveal-item" style=timing::stagger_item(i).transition_style()>
                            <button
                                type="button"
                                class="faq-question"
                                aria-expanded=move || open().to_string()
                                on:click=move |_| active.update(|a| *a = toggle_faq(*a, i))
                            >
                                {faq.question}
                                <span class=move || if open() { "faq-icon open" } else { "faq-icon" }>"+"</span>
                            </button>
                            <Show when=open>
                                <div class="faq-answer">{faq.answer}</div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
