use leptos::html::Header;
use leptos::prelude::*;

use crate::header::{is_scrolled, use_scroll_y};
use crate::menu::{BodyOverflow, MenuController, MenuState, ScrollLockTarget};
use crate::models::NavLink;
use crate::navigation::anchor_target;
use crate::timing;

/// Name of the keyframes that close the menu overlay.
const MENU_CLOSE_ANIMATION: &str = "menuWipeClose";

/// Reactive handle to the page's [`MenuController`].
pub struct MenuHandle<T: ScrollLockTarget + Clone + Send + Sync + 'static = BodyOverflow> {
    controller: StoredValue<MenuController<T>>,
    state: RwSignal<MenuState>,
}

impl<T: ScrollLockTarget + Clone + Send + Sync + 'static> Clone for MenuHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ScrollLockTarget + Clone + Send + Sync + 'static> Copy for MenuHandle<T> {}

impl MenuHandle {
    pub fn new() -> Self {
        Self::with_target(BodyOverflow)
    }
}

impl<T: ScrollLockTarget + Clone + Send + Sync + 'static> MenuHandle<T> {
    /// The scroll lock is released when the owning component is cleaned up,
    /// whatever state the menu is in.
    pub fn with_target(target: T) -> Self {
        let handle = Self {
            controller: StoredValue::new(MenuController::new(target)),
            state: RwSignal::new(MenuState::Closed),
        };
        on_cleanup(move || {
            handle.controller.try_update_value(|menu| menu.teardown());
        });
        handle
    }

    pub fn state(&self) -> ReadSignal<MenuState> {
        self.state.read_only()
    }

    pub fn toggle(&self) {
        self.apply(|menu| menu.toggle());
    }

    pub fn close(&self) {
        self.apply(|menu| menu.close());
    }

    pub fn animation_finished(&self) {
        self.apply(|menu| menu.animation_finished());
    }

    fn apply(&self, f: impl FnOnce(&mut MenuController<T>) -> MenuState) {
        if let Some(next) = self.controller.try_update_value(f) {
            self.state.try_set(next);
        }
    }
}

impl Default for MenuHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed header and menu shared by every anchor link on a page.
#[derive(Clone, Copy)]
pub struct NavContext {
    pub header: NodeRef<Header>,
    pub menu: MenuHandle,
}

impl NavContext {
    pub fn new() -> Self {
        Self {
            header: NodeRef::new(),
            menu: MenuHandle::new(),
        }
    }

    /// Close the menu and scroll to the section `href` names.
    pub fn go(&self, href: &str) {
        self.menu.close();
        let Some(_id) = anchor_target(href) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            // Read now: the header is shorter once the page has scrolled.
            let header_height = self.header.get_untracked().map(|h| f64::from(h.offset_height()));
            crate::navigation::scroll_to_section(_id, header_height);
        }
    }
}

impl Default for NavContext {
    fn default() -> Self {
        Self::new()
    }
}

/// In-page link that scrolls below the fixed header instead of jumping.
///
/// Without a [`NavContext`] it is a plain link.
#[component]
pub fn NavAnchor(
    href: &'static str,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] style: String,
    children: Children,
) -> impl IntoView {
    let nav = use_context::<NavContext>();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(nav) = nav else {
            return;
        };
        if anchor_target(href).is_some() {
            ev.prevent_default();
            nav.go(href);
        }
    };

    view! {
        <a href=href class=class style=style on:click=on_click>
            {children()}
        </a>
    }
}

/// Fixed header with the brand and the menu button.
#[component]
pub fn SiteHeader(brand: &'static str, home: &'static str) -> impl IntoView {
    let nav = use_context::<NavContext>().unwrap_or_default();
    let scroll_y = use_scroll_y();
    let open = move || nav.menu.state().get().is_open();

    view! {
        <header
            node_ref=nav.header
            class=move || if is_scrolled(scroll_y.get()) { "site-header scrolled" } else { "site-header" }
        >
            <div class="container-custom header-content">
                <NavAnchor href=home class="logo">{brand}</NavAnchor>
                <button
                    class=move || if open() { "hamburger-btn open" } else { "hamburger-btn" }
                    on:click=move |_| nav.menu.toggle()
                    aria-label="Toggle menu"
                    aria-expanded=move || open().to_string()
                    aria-controls="nav-menu-overlay"
                >
                    <span class="hamburger-line line-1"></span>
                    <span class="hamburger-line line-2"></span>
                    <span class="hamburger-line line-3"></span>
                </button>
            </div>
        </header>
    }
}

/// Full-screen menu. Its animation class comes only from the menu state.
#[component]
pub fn MenuOverlay(links: &'static [NavLink]) -> impl IntoView {
    let nav = use_context::<NavContext>().unwrap_or_default();
    let state = nav.menu.state();

    let on_animation_end = move |ev: leptos::ev::AnimationEvent| {
        // Menu items run their own animations; only the overlay's close counts.
        #[cfg(feature = "hydrate")]
        if ev.animation_name() != MENU_CLOSE_ANIMATION {
            return;
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, MENU_CLOSE_ANIMATION);
        nav.menu.animation_finished();
    };

    view! {
        <div
            id="nav-menu-overlay"
            class=move || format!("nav-menu-overlay {}", state.get().animation_class())
            on:animationend=on_animation_end
        >
            <nav class="nav-menu">
                <ul>
                    {links
                        .iter()
                        .enumerate()
                        .map(|(i, link)| {
                            let style = move || timing::menu_item(i, state.get().is_open()).transition_style();
                            view! {
                                <li style=style>
                                    <NavAnchor href=link.href>
                                        {link.icon.map(|icon| view! { <span class="menu-icon">{icon}</span> })}
                                        {link.label}
                                    </NavAnchor>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBody(Arc<AtomicBool>);

    impl SharedBody {
        fn is_locked(&self) -> bool {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl ScrollLockTarget for SharedBody {
        fn lock(&self) {
            self.0.store(true, Ordering::SeqCst);
        }

        fn unlock(&self) {
            self.0.store(false, Ordering::SeqCst);
        }
    }

    #[test]
    fn handle_mirrors_controller_state() {
        let owner = Owner::new();
        owner.set();

        let body = SharedBody::default();
        let menu = MenuHandle::with_target(body.clone());
        menu.toggle();
        assert_eq!(menu.state().get_untracked(), MenuState::Open);
        assert!(body.is_locked());

        menu.close();
        assert_eq!(menu.state().get_untracked(), MenuState::Closing);
        assert!(!body.is_locked());

        menu.animation_finished();
        assert_eq!(menu.state().get_untracked(), MenuState::Closed);
    }

    #[test]
    fn disposing_owner_while_open_releases_lock() {
        let owner = Owner::new();
        owner.set();

        let body = SharedBody::default();
        let menu = MenuHandle::with_target(body.clone());
        menu.toggle();
        assert!(body.is_locked());

        owner.cleanup();
        assert!(!body.is_locked());
    }
}
