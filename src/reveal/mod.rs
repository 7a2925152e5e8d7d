//! Scroll-triggered reveal of page regions.
//!
//! [`RevealController`] holds the one-way `revealed` state per region and is
//! independent of the browser. [`RevealScope`] and [`use_reveal`] connect it
//! to Leptos signals and, on the client, to `IntersectionObserver`.

mod controller;
#[cfg(feature = "hydrate")]
mod observer;
mod scope;

pub use controller::{IntersectionEvent, RegionHandle, RevealController, ThresholdConfig};
pub use scope::{use_reveal, RevealContext, RevealScope};
