use std::collections::HashMap;

const RATIO_TOLERANCE: f64 = 1e-3;

/// Intersection ratio and viewport margins a region must satisfy to reveal.
///
/// Margins are percentages of the viewport height applied to the top and
/// bottom edges; negative values shrink the effective viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdConfig {
    pub ratio: f64,
    pub top_margin_pct: f64,
    pub bottom_margin_pct: f64,
}

impl ThresholdConfig {
    /// Full-height wipe sections: a quarter visible inside a viewport
    /// trimmed 10% from the top and 35% from the bottom.
    pub const WIPE_SECTION: Self = Self {
        ratio: 0.25,
        top_margin_pct: -10.0,
        bottom_margin_pct: -35.0,
    };

    /// Plain "this much of the region is visible" trigger with no margins.
    pub const fn amount(ratio: f64) -> Self {
        Self {
            ratio,
            top_margin_pct: 0.0,
            bottom_margin_pct: 0.0,
        }
    }

    /// Whether a reported intersection ratio satisfies this threshold.
    ///
    /// Browsers report ratios with float noise at the exact crossing, so a
    /// ratio a hair under the threshold still counts.
    pub fn is_met(&self, ratio: f64) -> bool {
        ratio + RATIO_TOLERANCE >= self.ratio
    }

    /// CSS `rootMargin` string, e.g. `"-10% 0px -35% 0px"`.
    pub fn root_margin(&self) -> String {
        format!(
            "{}% 0px {}% 0px",
            self.top_margin_pct, self.bottom_margin_pct
        )
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::WIPE_SECTION
    }
}

/// Opaque key for a registered region. Never reused by the controller that
/// issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionHandle(u64);

impl RegionHandle {
    /// Stand-in for a region that could not be registered with any
    /// controller. Every controller treats it as unknown.
    pub const DETACHED: Self = Self(u64::MAX);
}

/// One observation report for a region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEvent {
    pub handle: RegionHandle,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionEvent {
    pub fn entering(handle: RegionHandle, ratio: f64) -> Self {
        Self {
            handle,
            is_intersecting: true,
            ratio,
        }
    }

    pub fn leaving(handle: RegionHandle) -> Self {
        Self {
            handle,
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

#[derive(Debug)]
struct Region {
    key: String,
    config: ThresholdConfig,
    revealed: bool,
}

/// Tracks which registered regions have been revealed.
///
/// The controller is platform-agnostic: something else (the browser
/// observer adapter, or a test) feeds it batches of [`IntersectionEvent`]s.
/// A region's `revealed` flag only ever moves from `false` to `true`, and
/// the controller forgets a region entirely once it is unregistered.
#[derive(Debug)]
pub struct RevealController {
    regions: HashMap<RegionHandle, Region>,
    next_id: u64,
    available: bool,
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealController {
    pub fn new() -> Self {
        Self {
            regions: HashMap::new(),
            next_id: 0,
            available: true,
        }
    }

    /// Begin tracking a region. If observation is unavailable the region is
    /// revealed on the spot so its content is never stuck hidden.
    pub fn register(&mut self, key: impl Into<String>, config: ThresholdConfig) -> RegionHandle {
        let handle = RegionHandle(self.next_id);
        self.next_id += 1;

        let key = key.into();
        tracing::trace!(%key, ?handle, ratio = config.ratio, "region registered");
        self.regions.insert(
            handle,
            Region {
                key,
                config,
                revealed: !self.available,
            },
        );
        handle
    }

    /// Stop tracking a region. Returns `false` if it was already gone.
    pub fn unregister(&mut self, handle: RegionHandle) -> bool {
        match self.regions.remove(&handle) {
            Some(region) => {
                tracing::trace!(key = %region.key, ?handle, "region unregistered");
                true
            }
            None => false,
        }
    }

    /// Apply one batch of observation reports and return the regions that
    /// became revealed because of it.
    ///
    /// Only entering reports at or above the region's ratio count. Observers
    /// also report any partial overlap when a target is first observed.
    pub fn apply(&mut self, events: &[IntersectionEvent]) -> Vec<RegionHandle> {
        let mut newly_revealed = Vec::new();
        for event in events.iter().filter(|e| e.is_intersecting) {
            let Some(region) = self.regions.get_mut(&event.handle) else {
                continue;
            };
            if region.revealed {
                continue;
            }
            if !region.config.is_met(event.ratio) {
                tracing::trace!(key = %region.key, ratio = event.ratio, "below threshold");
                continue;
            }
            region.revealed = true;
            tracing::debug!(key = %region.key, ratio = event.ratio, "region revealed");
            newly_revealed.push(event.handle);
        }
        newly_revealed
    }

    /// Switch to fail-soft mode: every current and future region counts as
    /// revealed. Returns the regions this call revealed.
    pub fn mark_unavailable(&mut self) -> Vec<RegionHandle> {
        self.available = false;
        let mut newly_revealed: Vec<RegionHandle> = self
            .regions
            .iter_mut()
            .filter(|(_, region)| !region.revealed)
            .map(|(handle, region)| {
                region.revealed = true;
                *handle
            })
            .collect();
        newly_revealed.sort();
        if !newly_revealed.is_empty() {
            tracing::info!(
                count = newly_revealed.len(),
                "viewport observation unavailable, revealing all regions"
            );
        }
        newly_revealed
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// `false` for regions that were never registered or have been removed.
    pub fn is_revealed(&self, handle: RegionHandle) -> bool {
        self.regions.get(&handle).is_some_and(|r| r.revealed)
    }

    pub fn config(&self, handle: RegionHandle) -> Option<ThresholdConfig> {
        self.regions.get(&handle).map(|r| r.config)
    }

    pub fn key(&self, handle: RegionHandle) -> Option<&str> {
        self.regions.get(&handle).map(|r| r.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_start_hidden() {
        let mut controller = RevealController::new();
        let hero = controller.register("hero", ThresholdConfig::WIPE_SECTION);
        assert!(!controller.is_revealed(hero));
        assert_eq!(controller.key(hero), Some("hero"));
    }

    #[test]
    fn reveal_happens_once_and_never_reverts() {
        let mut controller = RevealController::new();
        let hero = controller.register("hero", ThresholdConfig::WIPE_SECTION);

        assert_eq!(
            controller.apply(&[IntersectionEvent::entering(hero, 0.3)]),
            vec![hero]
        );
        assert!(controller.is_revealed(hero));

        // Leaving and re-entering changes nothing and reports nothing new.
        assert!(controller
            .apply(&[IntersectionEvent::leaving(hero)])
            .is_empty());
        assert!(controller.is_revealed(hero));
        assert!(controller
            .apply(&[IntersectionEvent::entering(hero, 0.9)])
            .is_empty());
        assert!(controller.is_revealed(hero));
    }

    #[test]
    fn entering_below_threshold_does_not_reveal() {
        let mut controller = RevealController::new();
        let hero = controller.register("hero", ThresholdConfig::WIPE_SECTION);

        assert!(controller
            .apply(&[IntersectionEvent::entering(hero, 0.05)])
            .is_empty());
        assert!(!controller.is_revealed(hero));

        assert_eq!(
            controller.apply(&[IntersectionEvent::entering(hero, 0.2496)]),
            vec![hero]
        );
        assert!(controller.is_revealed(hero));
    }

    #[test]
    fn zero_ratio_reveals_on_any_overlap() {
        let mut controller = RevealController::new();
        let features = controller.register("features", ThresholdConfig::amount(0.0));
        assert_eq!(
            controller.apply(&[IntersectionEvent::entering(features, 0.0)]),
            vec![features]
        );
    }

    #[test]
    fn leaving_before_entering_never_reveals() {
        let mut controller = RevealController::new();
        let pricing = controller.register("pricing", ThresholdConfig::amount(0.2));
        for _ in 0..5 {
            controller.apply(&[IntersectionEvent::leaving(pricing)]);
        }
        assert!(!controller.is_revealed(pricing));
    }

    #[test]
    fn unavailable_observation_reveals_everything() {
        let mut controller = RevealController::new();
        let hero = controller.register("hero", ThresholdConfig::WIPE_SECTION);
        let features = controller.register("features", ThresholdConfig::WIPE_SECTION);

        assert_eq!(controller.mark_unavailable(), vec![hero, features]);
        assert!(controller.is_revealed(hero));
        assert!(controller.is_revealed(features));

        let late = controller.register("contact", ThresholdConfig::WIPE_SECTION);
        assert!(controller.is_revealed(late));
        assert!(!controller.is_available());
    }

    #[test]
    fn events_after_unregister_are_ignored() {
        let mut controller = RevealController::new();
        let vision = controller.register("vision", ThresholdConfig::WIPE_SECTION);
        assert!(controller.unregister(vision));

        assert!(controller
            .apply(&[IntersectionEvent::entering(vision, 1.0)])
            .is_empty());
        assert!(!controller.is_revealed(vision));
        assert!(controller.is_empty());
    }

    #[test]
    fn unregister_is_idempotent() {
        let mut controller = RevealController::new();
        let hero = controller.register("hero", ThresholdConfig::WIPE_SECTION);
        assert!(controller.unregister(hero));
        assert!(!controller.unregister(hero));
        assert!(!controller.unregister(hero));
    }

    #[test]
    fn regions_reveal_independently_within_a_batch() {
        let mut controller = RevealController::new();
        let a = controller.register("a", ThresholdConfig::WIPE_SECTION);
        let b = controller.register("b", ThresholdConfig::WIPE_SECTION);
        let c = controller.register("c", ThresholdConfig::WIPE_SECTION);

        let revealed = controller.apply(&[
            IntersectionEvent::entering(c, 0.4),
            IntersectionEvent::leaving(b),
            IntersectionEvent::entering(a, 0.25),
            IntersectionEvent::entering(c, 0.6),
        ]);

        assert_eq!(revealed, vec![c, a]);
        assert!(!controller.is_revealed(b));
    }

    #[test]
    fn handles_are_not_reused() {
        let mut controller = RevealController::new();
        let first = controller.register("hero", ThresholdConfig::WIPE_SECTION);
        controller.unregister(first);
        let second = controller.register("hero", ThresholdConfig::WIPE_SECTION);
        assert_ne!(first, second);
    }

    #[test]
    fn root_margin_matches_css_syntax() {
        assert_eq!(
            ThresholdConfig::WIPE_SECTION.root_margin(),
            "-10% 0px -35% 0px"
        );
        assert_eq!(ThresholdConfig::amount(0.3).root_margin(), "0% 0px 0% 0px");
    }
}
