use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{Copyright, FaqList, NavAnchor, NavContext, RevealSection};
use crate::content::workly::{
    BENEFITS, BRAND, CTA_ARCS, FAQS, FOOTER_COLUMNS, HERO_ARCS, NAV_LINKS, PLANS, SOCIAL_LINKS,
    STEPS, TESTIMONIALS, TRUSTED_BY,
};
use crate::models::Plan;
use crate::reveal::RevealScope;
use crate::timing::{self, Delay};

/// Half-ring arcs behind a headline, widest first.
fn arcs(sizes: &'static [u32], base: Delay, class: &'static str) -> impl IntoView {
    sizes
        .iter()
        .enumerate()
        .map(move |(i, size)| {
            let rem = f64::from(*size) * 0.25;
            let style = format!(
                "width: {rem}rem; height: {}rem; {}",
                rem / 2.0,
                timing::arc(i, base).animation_style()
            );
            view! { <div class=format!("arc {class} arc-{i}") style=style></div> }
        })
        .collect_view()
}

#[component]
fn WorklyHeader(nav: NavContext) -> impl IntoView {
    let active = RwSignal::new(NAV_LINKS.first().map(|l| l.href).unwrap_or_default());

    view! {
        <header node_ref=nav.header class="workly-header">
            <div class="workly-brand">{BRAND}</div>
            <nav class="workly-nav">
                {NAV_LINKS
                    .iter()
                    .enumerate()
                    .map(|(i, link)| {
                        let is_active = move || active.get() == link.href;
                        view! {
                            <span
                                class=move || if is_active() { "workly-nav-item active" } else { "workly-nav-item" }
                                style=timing::stagger_item(i).animation_style()
                                on:click=move |_| active.set(link.href)
                            >
                                <NavAnchor href=link.href>{link.label}</NavAnchor>
                                <Show when=is_active>
                                    <span class="workly-nav-underline"></span>
                                </Show>
                            </span>
                        }
                    })
                    .collect_view()}
            </nav>
            <button type="button" class="workly-login">"Login"</button>
        </header>
    }
}

#[component]
fn WorklyPlan(plan: &'static Plan, index: usize) -> impl IntoView {
    let class = if plan.highlight { "workly-plan recommended reveal-item" } else { "workly-plan reveal-item" };

    view! {
        <div class=class style=timing::stagger_item(index).transition_style()>
            <div>
                <div class="plan-name">{plan.name}</div>
                <div class="plan-price">
                    {plan.price}
                    <span class="plan-period">{plan.period}</span>
                </div>
                <p class="plan-blurb">{plan.blurb}</p>
                <ul class="plan-features">
                    {plan.features.iter().map(|f| view! { <li><span class="check">"✓"</span>{*f}</li> }).collect_view()}
                </ul>
            </div>
            <button type="button" class="workly-button" disabled=plan.highlight>
                {if plan.highlight { "Current Plan" } else { "Get Started" }}
            </button>
        </div>
    }
}

/// Dark product landing page with staggered card grids.
#[component]
pub fn WorklyPage() -> impl IntoView {
    let nav = NavContext::new();
    provide_context(nav);

    view! {
        <Title text="Workly - Workspace That Remembers Everything"/>
        <div class="workly-page">
            <div class="workly-glow"></div>
            <WorklyHeader nav=nav/>

            <RevealScope>
                <section id="home" class="workly-hero">
                    <div class="hero-arcs">{arcs(HERO_ARCS, Delay::from_millis(500), "hero-arc")}</div>
                    <h1 class="hero-title">"Workspace That Remembers Everything for You"</h1>
                    <p class="hero-text">
                        "Workly keeps tasks, messages, and docs in one place. Always searchable, synced, and up to date so nothing gets lost."
                    </p>
                    <div class="hero-actions">
                        <NavAnchor href="#benefits" class="workly-button ghost">"Explore"</NavAnchor>
                        <NavAnchor href="#get-started" class="workly-button">"Get Started"</NavAnchor>
                    </div>
                    <div class="hero-preview">"App Dashboard Preview"</div>
                </section>

                <RevealSection id="trusted" amount=0.3 class="workly-section text-center">
                    <p class="muted reveal-item">"Trusted by businesses worldwide:"</p>
                    <div class="trusted-logos">
                        {TRUSTED_BY
                            .iter()
                            .enumerate()
                            .map(|(i, name)| view! {
                                <span class="trusted-logo reveal-item" style=timing::stagger_item(i).transition_style()>{*name}</span>
                            })
                            .collect_view()}
                    </div>
                </RevealSection>

                <RevealSection id="benefits" amount=0.2 class="workly-section">
                    <div class="text-center"><span class="badge">"Our Benefits"</span></div>
                    <h2 class="workly-heading reveal-item">"Think Less About the Tool."<br/>"Focus on the Work"</h2>
                    <p class="workly-lead reveal-item">
                        "The all-in-one toolkit to keep your team organized, efficient, and connected."
                    </p>
                    <div class="benefit-grid">
                        {BENEFITS
                            .iter()
                            .enumerate()
                            .map(|(i, benefit)| view! {
                                <div class="workly-card reveal-item" style=timing::stagger_item(i).transition_style()>
                                    <h3>{benefit.title}</h3>
                                    <p>{benefit.description}</p>
                                    <div class="benefit-graphic">{benefit.graphic}</div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </RevealSection>

                <RevealSection id="how-it-works" amount=0.2 class="workly-section">
                    <h2 class="workly-heading reveal-item">"Get Set Up in Minutes,"<br/>"Start Moving Fast"</h2>
                    <div class="steps">
                        <svg class="steps-line" viewBox="0 0 200 4" preserveAspectRatio="none">
                            <path d="M 0 2 Q 50 2, 100 2 T 200 2" stroke="#6A5AF9" stroke-width="3" fill="transparent"/>
                        </svg>
                        {STEPS
                            .iter()
                            .enumerate()
                            .map(|(i, step)| view! {
                                <div class="step reveal-item" style=timing::stagger_item(i).transition_style()>
                                    <div class="step-number">{step.number}</div>
                                    <h4>{step.title}</h4>
                                    <p>{step.description}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </RevealSection>

                <RevealSection id="testimonials" amount=0.2 class="workly-section">
                    <h2 class="workly-heading reveal-item">"Teams That Switched to Workly"<br/>"Don't Look Back"</h2>
                    <div class="testimonial-grid">
                        {TESTIMONIALS
                            .iter()
                            .enumerate()
                            .map(|(i, t)| view! {
                                <div class="workly-card testimonial reveal-item" style=timing::stagger_item(i).transition_style()>
                                    <div class="testimonial-head">
                                        <div class="avatar">{t.initials}</div>
                                        <div>
                                            <div class="author">{t.author}</div>
                                            <div class="muted">{t.role}</div>
                                        </div>
                                    </div>
                                    <div class="stars">"★★★★★"</div>
                                    <div class="quote">{format!("\"{}\"", t.quote)}</div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </RevealSection>

                <RevealSection id="pricing" amount=0.2 class="workly-section">
                    <h2 class="workly-heading reveal-item">"Plans Made for Teams of All Sizes"</h2>
                    <p class="workly-lead reveal-item">
                        "Choose the perfect plan that fits your team's needs and budget. Start for free!"
                    </p>
                    <div class="plan-grid">
                        {PLANS
                            .iter()
                            .enumerate()
                            .map(|(i, plan)| view! { <WorklyPlan plan=plan index=i/> })
                            .collect_view()}
                    </div>
                </RevealSection>

                <RevealSection id="faq" amount=0.1 class="workly-section">
                    <h2 class="workly-heading reveal-item">"Everything You Need To Know"<br/>"Before Getting Started"</h2>
                    <FaqList faqs=FAQS/>
                </RevealSection>

                <RevealSection id="get-started" amount=0.3 class="workly-section text-center">
                    <div class="cta-arcs">{arcs(CTA_ARCS, Delay::ZERO, "cta-arc")}</div>
                    <h2 class="workly-heading large reveal-item">"Ready to Get Things Done?"</h2>
                    <p class="workly-lead reveal-item">"Join thousands of teams improving their productivity with Workly."</p>
                    <button type="button" class="workly-button large reveal-item">"Start Free Trial →"</button>
                </RevealSection>
            </RevealScope>

            <footer class="workly-footer">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="workly-brand">{BRAND}</div>
                        <p>"Quality and thoughtfully designed workspace for modern teams."</p>
                        <NavAnchor href="#get-started" class="workly-button">"Get Started"</NavAnchor>
                    </div>
                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| view! {
                            <div>
                                <h4>{column.title}</h4>
                                <ul>
                                    {column.links.iter().map(|l| view! { <li><a href="#">{*l}</a></li> }).collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="footer-bottom">
                    <div class="socials">
                        {SOCIAL_LINKS.iter().map(|s| view! { <a href="#" aria-label={*s}>{*s}</a> }).collect_view()}
                    </div>
                    <Copyright owner=BRAND tail="All rights reserved. Built with passion."/>
                </div>
            </footer>
        </div>
    }
}
