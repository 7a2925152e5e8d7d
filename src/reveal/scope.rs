use std::collections::HashMap;

use leptos::html::ElementType;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;

use super::{IntersectionEvent, RegionHandle, RevealController, ThresholdConfig};
#[cfg(feature = "hydrate")]
use super::observer::ViewportObserver;

// Browser observers hold JS handles, so the client keeps the scope in
// thread-local storage. The server never observes and stays `Send`.
#[cfg(feature = "hydrate")]
type ScopeStorage = LocalStorage;
#[cfg(not(feature = "hydrate"))]
type ScopeStorage = SyncStorage;

struct ScopeState {
    controller: RevealController,
    flags: HashMap<RegionHandle, RwSignal<bool>>,
    #[cfg(feature = "hydrate")]
    observers: Vec<ViewportObserver>,
}

impl ScopeState {
    fn forget_observation(&mut self, _handle: RegionHandle) {
        #[cfg(feature = "hydrate")]
        {
            // Observers stay alive until disconnect: this can run inside
            // their own callback.
            for observer in &self.observers {
                observer.unobserve(_handle);
            }
        }
    }
}

/// Page-level owner of a [`RevealController`] and the reactive flags that
/// mirror it. Provided through context by [`RevealScope`].
#[derive(Clone, Copy)]
pub struct RevealContext {
    state: StoredValue<ScopeState, ScopeStorage>,
}

impl RevealContext {
    pub fn new() -> Self {
        Self {
            state: StoredValue::new_with_storage(ScopeState {
                controller: RevealController::new(),
                flags: HashMap::new(),
                #[cfg(feature = "hydrate")]
                observers: Vec::new(),
            }),
        }
    }

    /// Register a region and get the flag that will flip once it reveals.
    pub fn register(&self, key: &str, config: ThresholdConfig) -> (RegionHandle, ReadSignal<bool>) {
        let registered = self.state.try_update_value(|state| {
            let handle = state.controller.register(key, config);
            let flag = RwSignal::new(state.controller.is_revealed(handle));
            state.flags.insert(handle, flag);
            (handle, flag.read_only())
        });
        match registered {
            Some(registered) => registered,
            None => {
                // The scope is already disposed; show the content rather than hide it.
                tracing::warn!(key, "reveal scope gone, region shown without animation");
                (RegionHandle::DETACHED, RwSignal::new(true).read_only())
            }
        }
    }

    /// Safe after the scope is gone; child cleanups can run late.
    pub fn unregister(&self, handle: RegionHandle) {
        self.state.try_update_value(|state| {
            state.forget_observation(handle);
            state.flags.remove(&handle);
            state.controller.unregister(handle);
        });
    }

    /// Attach a mounted element to the observer for the region's threshold,
    /// creating that observer on first use.
    #[cfg(feature = "hydrate")]
    pub fn observe(&self, handle: RegionHandle, element: web_sys::Element) {
        let ctx = *self;
        let mut unavailable = false;
        self.state.try_update_value(|state| {
            if !state.controller.is_available() {
                return;
            }
            let Some(config) = state.controller.config(handle) else {
                return;
            };
            if state.controller.is_revealed(handle) {
                return;
            }

            let index = match state.observers.iter().position(|o| o.config() == config) {
                Some(index) => index,
                None => match ViewportObserver::new(config, move |events| ctx.apply(&events)) {
                    Ok(observer) => {
                        state.observers.push(observer);
                        state.observers.len() - 1
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "falling back to static content");
                        unavailable = true;
                        return;
                    }
                },
            };
            state.observers[index].observe(element, handle);
        });

        if unavailable {
            self.fail_soft();
        }
    }

    /// Feed a batch of observation reports through the controller.
    pub fn apply(&self, events: &[IntersectionEvent]) {
        let flags = self
            .state
            .try_update_value(|state| {
                let revealed = state.controller.apply(events);
                revealed
                    .into_iter()
                    .filter_map(|handle| {
                        // Nothing left to learn about a revealed region.
                        state.forget_observation(handle);
                        state.flags.get(&handle).copied()
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        for flag in flags {
            flag.set(true);
        }
    }

    /// Observation is impossible here; reveal every region now and later.
    pub fn fail_soft(&self) {
        let flags = self
            .state
            .try_update_value(|state| {
                #[cfg(feature = "hydrate")]
                state.observers.clear();
                state
                    .controller
                    .mark_unavailable()
                    .into_iter()
                    .filter_map(|handle| state.flags.get(&handle).copied())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        for flag in flags {
            flag.set(true);
        }
    }

    pub fn is_revealed(&self, handle: RegionHandle) -> bool {
        self.state
            .try_with_value(|state| state.controller.is_revealed(handle))
            .unwrap_or(false)
    }

    fn disconnect(&self) {
        #[cfg(feature = "hydrate")]
        self.state.try_update_value(|state| state.observers.clear());
    }
}

impl Default for RevealContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provides a [`RevealContext`] to everything rendered inside it.
#[component]
pub fn RevealScope(children: Children) -> impl IntoView {
    let ctx = RevealContext::new();
    provide_context(ctx);
    on_cleanup(move || ctx.disconnect());

    children()
}

/// Track `node_ref` as a reveal region and return its `revealed` flag.
///
/// Registration happens immediately; observation starts once the element is
/// mounted and ends when the owning component is cleaned up. Outside a
/// [`RevealScope`] the region is shown straight away.
pub fn use_reveal<E>(key: &str, node_ref: NodeRef<E>, config: ThresholdConfig) -> ReadSignal<bool>
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + 'static,
{
    let Some(ctx) = use_context::<RevealContext>() else {
        tracing::warn!(key, "use_reveal outside RevealScope, region shown without animation");
        return RwSignal::new(true).read_only();
    };

    let (handle, revealed) = ctx.register(key, config);
    on_cleanup(move || ctx.unregister(handle));

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Some(element) = node_ref.get() {
            let element: web_sys::Element = element.unchecked_into();
            ctx.observe(handle, element);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = node_ref;

    revealed
}

#[cfg(test)]
mod tests {
    use leptos::html::Div;

    use super::*;

    #[test]
    fn region_outside_scope_is_shown_at_once() {
        let owner = Owner::new();
        owner.set();

        let revealed = use_reveal("hero", NodeRef::<Div>::new(), ThresholdConfig::WIPE_SECTION);
        assert!(revealed.get_untracked());
    }

    #[test]
    fn region_inside_scope_starts_hidden() {
        let owner = Owner::new();
        owner.set();
        provide_context(RevealContext::new());

        let revealed = use_reveal("hero", NodeRef::<Div>::new(), ThresholdConfig::WIPE_SECTION);
        assert!(!revealed.get_untracked());
    }

    #[test]
    fn apply_flips_only_the_matching_flag() {
        let owner = Owner::new();
        owner.set();
        let ctx = RevealContext::new();

        let (hero, hero_flag) = ctx.register("hero", ThresholdConfig::WIPE_SECTION);
        let (_, vision_flag) = ctx.register("vision", ThresholdConfig::WIPE_SECTION);

        ctx.apply(&[IntersectionEvent::entering(hero, 0.1)]);
        assert!(!hero_flag.get_untracked());

        ctx.apply(&[IntersectionEvent::entering(hero, 0.5)]);
        assert!(hero_flag.get_untracked());
        assert!(!vision_flag.get_untracked());
        assert!(ctx.is_revealed(hero));
    }

    #[test]
    fn unregistered_region_ignores_later_events() {
        let owner = Owner::new();
        owner.set();
        let ctx = RevealContext::new();

        let (pricing, flag) = ctx.register("pricing", ThresholdConfig::amount(0.2));
        ctx.unregister(pricing);
        ctx.unregister(pricing);
        ctx.apply(&[IntersectionEvent::entering(pricing, 1.0)]);

        assert!(!flag.get_untracked());
        assert!(!ctx.is_revealed(pricing));
    }

    #[test]
    fn fail_soft_reveals_current_and_later_regions() {
        let owner = Owner::new();
        owner.set();
        let ctx = RevealContext::new();

        let (_, early) = ctx.register("hero", ThresholdConfig::WIPE_SECTION);
        ctx.fail_soft();
        assert!(early.get_untracked());

        let (late, late_flag) = ctx.register("contact", ThresholdConfig::WIPE_SECTION);
        assert!(late_flag.get_untracked());
        assert!(ctx.is_revealed(late));
    }

    #[test]
    fn disposed_scope_shows_new_regions() {
        let owner = Owner::new();
        owner.set();
        let ctx = RevealContext::new();
        let (hero, _) = ctx.register("hero", ThresholdConfig::WIPE_SECTION);
        owner.cleanup();

        let next = Owner::new();
        next.set();
        assert!(!ctx.is_revealed(hero));
        ctx.unregister(hero);

        let (handle, flag) = ctx.register("vision", ThresholdConfig::WIPE_SECTION);
        assert_eq!(handle, RegionHandle::DETACHED);
        assert!(flag.get_untracked());
    }
}
