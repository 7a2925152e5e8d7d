//! Browser side of the reveal controller.
//!
//! [`ViewportObserver`] wraps one `IntersectionObserver` built for a single
//! [`ThresholdConfig`] and translates its entries into
//! [`IntersectionEvent`]s keyed by [`RegionHandle`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{IntersectionEvent, RegionHandle, ThresholdConfig};
use crate::models::RevealError;

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;
type Targets = Rc<RefCell<Vec<(Element, RegionHandle)>>>;

pub struct ViewportObserver {
    config: ThresholdConfig,
    observer: IntersectionObserver,
    targets: Targets,
    // Held so the JS callback outlives the observer.
    _callback: EntryCallback,
}

impl ViewportObserver {
    /// Build an observer that hands every non-empty batch to `on_batch`.
    ///
    /// Fails when the platform has no `IntersectionObserver`.
    pub fn new(
        config: ThresholdConfig,
        mut on_batch: impl FnMut(Vec<IntersectionEvent>) + 'static,
    ) -> Result<Self, RevealError> {
        let targets: Targets = Rc::new(RefCell::new(Vec::new()));

        let callback_targets = Rc::clone(&targets);
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            let events: Vec<IntersectionEvent> = {
                let targets = callback_targets.borrow();
                entries
                    .iter()
                    .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                    .filter_map(|entry| {
                        let target = entry.target();
                        let handle = targets
                            .iter()
                            .find(|(element, _)| *element == target)
                            .map(|(_, handle)| *handle)?;
                        Some(IntersectionEvent {
                            handle,
                            is_intersecting: entry.is_intersecting(),
                            ratio: entry.intersection_ratio(),
                        })
                    })
                    .collect()
            };
            // The targets borrow is released before `on_batch` can unobserve.
            if !events.is_empty() {
                on_batch(events);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&config.root_margin());
        init.set_threshold(&JsValue::from_f64(config.ratio));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| RevealError::ObserverUnavailable(format!("{err:?}")))?;

        Ok(Self {
            config,
            observer,
            targets,
            _callback: callback,
        })
    }

    pub fn config(&self) -> ThresholdConfig {
        self.config
    }

    pub fn observe(&self, element: Element, handle: RegionHandle) {
        let mut targets = self.targets.borrow_mut();
        if targets.iter().any(|(_, h)| *h == handle) {
            return;
        }
        self.observer.observe(&element);
        targets.push((element, handle));
    }

    /// No-op for handles this observer does not watch.
    pub fn unobserve(&self, handle: RegionHandle) {
        let mut targets = self.targets.borrow_mut();
        if let Some(index) = targets.iter().position(|(_, h)| *h == handle) {
            let (element, _) = targets.swap_remove(index);
            self.observer.unobserve(&element);
        }
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.targets.borrow_mut().clear();
    }
}
