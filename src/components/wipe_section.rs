use leptos::html::Div;
use leptos::prelude::*;

use crate::components::NavAnchor;
use crate::effects::parallax::{hero_image_shift, hero_image_transform};
use crate::header::use_scroll_y;
use crate::models::{SectionData, SectionExtra, ServiceCard};
use crate::reveal::{use_reveal, ThresholdConfig};
use crate::timing::{self, role_delay, Delay, Role};

/// Title split into characters that animate in one after another.
#[component]
pub fn StaggeredTitle(title: &'static str) -> impl IntoView {
    view! {
        <h2 class="section-title" aria-label=title>
            {timing::stagger_title(title)
                .into_iter()
                .map(|(c, delay)| {
                    view! {
                        <span class="section-title-char" aria-hidden="true" style=delay.animation_style()>
                            {c.to_string()}
                        </span>
                    }
                })
                .collect_view()}
        </h2>
    }
}

#[component]
fn ServiceGrid(services: &'static [ServiceCard], offset: Delay) -> impl IntoView {
    view! {
        <div class="service-grid" style=role_delay(offset, Role::ServiceGrid).animation_style()>
            {services
                .iter()
                .enumerate()
                .map(|(i, service)| {
                    view! {
                        <div class="service-card" style=timing::service_card(i).animation_style()>
                            <div class="service-icon">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Contact form without a submit target; submitting does nothing.
#[component]
fn ContactForm(offset: Delay) -> impl IntoView {
    let delay = move |field| role_delay(offset, Role::FormField(field)).animation_style();

    view! {
        <form class="contact-form" on:submit=|ev| ev.prevent_default()>
            <input type="text" placeholder="Your Name" class="contact-input" aria-label="Your Name" style=delay(0)/>
            <input type="email" placeholder="Your Email" class="contact-input" aria-label="Your Email" style=delay(1)/>
            <textarea placeholder="Your Message" rows="4" class="contact-input" aria-label="Your Message" style=delay(2)></textarea>
            <button type="submit" class="section-cta" style=delay(3)>"Send Message"</button>
        </form>
    }
}

/// One full-height section that wipes in the first time it scrolls into view.
///
/// `offset` is the page-wide follow-on delay from [`timing::page_offset`].
/// With `parallax` the image drifts with the first viewport of scrolling.
#[component]
pub fn WipeSection(
    section: &'static SectionData,
    offset: Delay,
    #[prop(optional)] parallax: bool,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let revealed = use_reveal(section.id, node, ThresholdConfig::WIPE_SECTION);

    let shift = RwSignal::new(0.0_f64);
    if parallax {
        let scroll_y = use_scroll_y();
        Effect::new(move |_| {
            let y = scroll_y.get();
            if let Some(next) = hero_image_shift(y, viewport_height()) {
                shift.set(next);
            }
        });
    }

    let has_image = section.shows_image();
    let grid_class = if has_image { "section-content-grid two-col" } else { "section-content-grid" };
    let text_class = format!("section-text {}", section.text_side.text_class(has_image));
    let background = section
        .background
        .map(|bg| format!("background-color: {bg}"))
        .unwrap_or_default();

    let image = section.image.filter(|_| has_image).map(|image| {
        let style = move || parallax.then(|| hero_image_transform(shift.get()));
        view! {
            <div
                class=format!("animated-image-container {}", section.text_side.image_class())
                style=role_delay(offset, Role::Image).animation_style()
            >
                <img src=image.url() alt=image.alt loading="lazy" style=style/>
                <div class="image-shade"></div>
            </div>
        }
    });

    let extra = match section.extra {
        SectionExtra::None => None,
        SectionExtra::Services(services) => {
            Some(view! { <ServiceGrid services=services offset=offset/> }.into_any())
        }
        SectionExtra::ContactForm => Some(view! { <ContactForm offset=offset/> }.into_any()),
    };

    view! {
        <div
            id=section.id
            node_ref=node
            class=move || if revealed.get() { "wipe-section is-visible" } else { "wipe-section" }
            style=background
        >
            <div class=format!("wipe-overlay {}", section.wipe.overlay_class())></div>
            <div class="section-content-wrapper container-custom">
                <div class=grid_class>
                    <div class=text_class>
                        <StaggeredTitle title=section.title/>
                        {section.subtitle.map(|subtitle| view! {
                            <p class="section-subtitle" style=role_delay(offset, Role::Subtitle).animation_style()>
                                {subtitle}
                            </p>
                        })}
                        <p class="section-description" style=role_delay(offset, Role::Description).animation_style()>
                            {section.description}
                        </p>
                        {section.cta.map(|cta| view! {
                            <NavAnchor
                                href=cta.href
                                class="section-cta"
                                style=role_delay(offset, Role::Cta).animation_style()
                            >
                                {cta.text}
                            </NavAnchor>
                        })}
                        {extra}
                    </div>
                    {image}
                </div>
            </div>
        </div>
    }
}

fn viewport_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(f64::INFINITY)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        f64::INFINITY
    }
}
