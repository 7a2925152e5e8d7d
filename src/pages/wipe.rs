use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{Copyright, MenuOverlay, NavAnchor, NavContext, SiteHeader, WipeSection};
use crate::content::wipe::{BRAND, COMPANY, NAV_LINKS, SECTIONS};
use crate::header::provide_scroll_y;
use crate::reveal::RevealScope;
use crate::timing;

/// Full-height sections that wipe in diagonally as they scroll into view.
#[component]
pub fn WipePage() -> impl IntoView {
    let nav = NavContext::new();
    provide_context(nav);
    // Header and hero parallax follow the same scroll position.
    provide_scroll_y();

    let offset = timing::page_offset(SECTIONS);
    let home = NAV_LINKS.first().map(|l| l.href).unwrap_or("#");

    view! {
        <Title text="WIPE.IO - Innovate with Unrivaled Precision"/>
        <div class="wipe-page">
            <SiteHeader brand=BRAND home=home/>
            <MenuOverlay links=NAV_LINKS/>

            <RevealScope>
                <main class="w-full">
                    {SECTIONS
                        .iter()
                        .enumerate()
                        .map(|(i, section)| view! { <WipeSection section=section offset=offset parallax={i == 0}/> })
                        .collect_view()}
                </main>
            </RevealScope>

            <footer class="wipe-footer">
                <div class="container-custom">
                    <NavAnchor href=home class="logo">{BRAND}</NavAnchor>
                    <nav>
                        <ul>
                            {NAV_LINKS
                                .iter()
                                .map(|link| view! { <li><NavAnchor href=link.href>{link.label}</NavAnchor></li> })
                                .collect_view()}
                        </ul>
                    </nav>
                    <Copyright owner=COMPANY tail="Crafted with Precision."/>
                </div>
            </footer>
        </div>
    }
}
