use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/wipe_landing.css"/>
        <Title text="WIPE.IO"/>
        <Meta name="description" content="Animated landing pages with scroll-triggered reveals"/>

        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=WipePage/>
                <Route path=path!("/workly") view=WorklyPage/>
                <Route path=path!("/notch") view=NotchPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 - Page Not Found"</h1>
            <nav>
                <A href="/">"Wipe"</A>
                <A href="/workly">"Workly"</A>
                <A href="/notch">"Notch"</A>
            </nav>
        </div>
    }
}
