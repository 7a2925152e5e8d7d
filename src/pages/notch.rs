use leptos::prelude::*;
use leptos_meta::{Script, Title};

use crate::components::{
    CoolCursor, Copyright, FeatureAnimation, NavAnchor, NavContext, ParticleCanvas, RevealSection,
    TiltPlanCard,
};
use crate::content::notch::{BRAND, COMPANY, FEATURES, FLOATING_SHAPES, NAV_LINKS, PLANS, TESTIMONIALS};
use crate::effects::parallax::hero_lift;
use crate::header::provide_scroll_y;
use crate::reveal::RevealScope;
use crate::timing;

const LOTTIE_PLAYER_JS: &str = "https://unpkg.com/@lottiefiles/lottie-player@2.0.4/dist/lottie-player.js";

#[component]
fn NotchNavbar(nav: NavContext) -> impl IntoView {
    view! {
        <header node_ref=nav.header class="notch-nav">
            <div class="notch-nav-inner">
                <NavAnchor href="#hero" class="notch-logo cursor-hoverable">
                    <span class="gradient-text">{BRAND}</span>
                    <span class="notch-logo-suffix">"site"</span>
                </NavAnchor>
                <div class="notch-cutout" aria-hidden="true">
                    <svg width="80" height="40" viewBox="0 0 80 40" fill="none">
                        <path d="M0 0 Q40 40 80 0" stroke="#222" stroke-width="4" fill="none"/>
                        <path d="M10 0 Q40 30 70 0" stroke="#333" stroke-width="2" fill="none"/>
                    </svg>
                </div>
                <div class="notch-links">
                    {NAV_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, link)| view! {
                            <NavAnchor
                                href=link.href
                                class="notch-link cursor-hoverable"
                                style=timing::nav_link(i).animation_style()
                            >
                                {link.label}
                                <span class="notch-underline"></span>
                            </NavAnchor>
                        })
                        .collect_view()}
                </div>
                <NavAnchor href="#pricing" class="notch-cta cursor-hoverable">"Get Started"</NavAnchor>
            </div>
        </header>
    }
}

/// Black landing page with a particle hero, custom cursor and tilting
/// pricing cards.
#[component]
pub fn NotchPage() -> impl IntoView {
    let nav = NavContext::new();
    provide_context(nav);

    let scroll_y = provide_scroll_y();
    let lift = move || format!("transform: translateY({}px)", hero_lift(scroll_y.get()));

    view! {
        <Title text="Notch - Futuristic Experiences, Delivered Today"/>
        <Script src=LOTTIE_PLAYER_JS/>
        <CoolCursor/>
        <NotchNavbar nav=nav/>

        <main class="notch-page">
            {FLOATING_SHAPES
                .iter()
                .map(|(layout, gradient)| view! {
                    <div class=format!("floating-shape bg-gradient-to-br {gradient} {layout}")></div>
                })
                .collect_view()}

            <section id="hero" class="notch-hero">
                <ParticleCanvas/>
                <div class="notch-hero-content" style=lift>
                    <h1 class="gradient-text hero-heading">"Futuristic Experiences, Delivered Today"</h1>
                    <p class="hero-sub">
                        "A premium template packed with award-winning animations and rock-solid performance."
                    </p>
                    <NavAnchor href="#pricing" class="notch-button cursor-hoverable">"Get Started"</NavAnchor>
                </div>
            </section>

            <RevealScope>
                <RevealSection id="features" amount=0.0 class="notch-section">
                    <h2 class="notch-heading gradient-text reveal-item">"Features That Shine"</h2>
                    <div class="notch-grid">
                        {FEATURES
                            .iter()
                            .enumerate()
                            .map(|(i, feature)| view! {
                                <div class="feature-card reveal-item cursor-hoverable" style=timing::card_delay(i).transition_style()>
                                    <FeatureAnimation index=i/>
                                    <h3 class="gradient-text">{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </RevealSection>

                <RevealSection id="testimonials" amount=0.0 class="notch-section alt">
                    <h2 class="notch-heading gradient-text cool reveal-item">"Loved by Teams Everywhere"</h2>
                    <div class="notch-quotes">
                        {TESTIMONIALS
                            .iter()
                            .enumerate()
                            .map(|(i, t)| {
                                let cite = match t.role {
                                    Some(role) => format!("— {}, {role}", t.author),
                                    None => format!("— {}", t.author),
                                };
                                view! {
                                    <blockquote class="notch-quote reveal-item" style=timing::card_delay(i).transition_style()>
                                        <p>{format!("“{}”", t.quote)}</p>
                                        <cite>{cite}</cite>
                                    </blockquote>
                                }
                            })
                            .collect_view()}
                    </div>
                </RevealSection>

                <RevealSection id="pricing" amount=0.0 class="notch-section">
                    <h2 class="notch-heading gradient-text fresh reveal-item">"Flexible Pricing"</h2>
                    <div class="notch-grid">
                        {PLANS
                            .iter()
                            .enumerate()
                            .map(|(i, plan)| view! { <TiltPlanCard plan=plan index=i/> })
                            .collect_view()}
                    </div>
                </RevealSection>

                <RevealSection id="cta" amount=0.0 class="notch-section alt text-center">
                    <h2 class="notch-heading gradient-text reveal-item">"Ready to level up your product?"</h2>
                    <NavAnchor href="#pricing" class="notch-button large cursor-hoverable reveal-item">"Get Started Now"</NavAnchor>
                </RevealSection>
            </RevealScope>

            <footer class="notch-footer">
                <Copyright owner=COMPANY/>
            </footer>
        </main>
    }
}
