//! Sticky header scroll state.

use leptos::prelude::*;

/// Vertical scroll past which the header switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 30.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

#[derive(Clone, Copy)]
struct ScrollPosition(ReadSignal<f64>);

/// Start one scroll listener for everything rendered under the caller.
pub fn provide_scroll_y() -> ReadSignal<f64> {
    let scroll_y = listen_scroll_y();
    provide_context(ScrollPosition(scroll_y));
    scroll_y
}

/// Current `window.scrollY`.
///
/// Uses the signal from [`provide_scroll_y`] when an ancestor started one,
/// otherwise listens on its own. Always `0.0` on the server.
pub fn use_scroll_y() -> ReadSignal<f64> {
    match use_context::<ScrollPosition>() {
        Some(ScrollPosition(scroll_y)) => scroll_y,
        None => listen_scroll_y(),
    }
}

/// Signal updated on every scroll event. The listener is removed when the
/// calling component is cleaned up.
fn listen_scroll_y() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        let read = move || {
            web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0)
        };
        set_scroll_y.set(read());
        let handle = window_event_listener(leptos::ev::scroll, move |_| set_scroll_y.set(read()));
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_scroll_y;

    scroll_y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(30.0));
        assert!(is_scrolled(30.5));
    }

    #[test]
    fn descendants_share_the_provided_signal() {
        let owner = Owner::new();
        owner.set();

        let provided = provide_scroll_y();
        assert_eq!(use_scroll_y(), provided);
        assert_eq!(use_scroll_y(), use_scroll_y());
    }

    #[test]
    fn without_provider_each_caller_listens_alone() {
        let owner = Owner::new();
        owner.set();

        assert_ne!(use_scroll_y(), use_scroll_y());
    }
}
