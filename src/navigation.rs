//! In-page anchor navigation below a fixed header.

/// Header height assumed when the header element is not mounted.
pub const FALLBACK_HEADER_HEIGHT: f64 = 70.0;

/// Section id an internal link points at.
///
/// `"#pricing"` gives `Some("pricing")`. A bare `"#"` or any other href
/// is not an in-page target.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset that puts `element_top` just under the header.
///
/// `header_height` is read when the link is clicked, since the header
/// shrinks once the page has scrolled.
pub fn scroll_offset(element_top: f64, header_height: Option<f64>) -> f64 {
    let header = header_height
        .filter(|h| *h > 0.0)
        .unwrap_or(FALLBACK_HEADER_HEIGHT);
    element_top - header
}

/// Smooth-scroll the window to the section with `id`.
///
/// Returns `false` without scrolling when the section is not in the
/// document.
#[cfg(feature = "hydrate")]
pub fn scroll_to_section(id: &str, header_height: Option<f64>) -> bool {
    use web_sys::{ScrollBehavior, ScrollToOptions};

    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        tracing::debug!(id, "anchor target not found");
        return false;
    };

    let page_y = window.scroll_y().unwrap_or(0.0);
    let top = target.get_bounding_client_rect().top() + page_y;
    let offset = scroll_offset(top, header_height);

    let options = ScrollToOptions::new();
    options.set_top(offset);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    tracing::trace!(id, offset, "scrolling to section");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_link_lands_under_header() {
        assert_eq!(anchor_target("#pricing"), Some("pricing"));
        assert_eq!(scroll_offset(1200.0, Some(80.0)), 1120.0);
    }

    #[test]
    fn missing_header_uses_fallback_height() {
        assert_eq!(scroll_offset(1200.0, None), 1130.0);
        assert_eq!(scroll_offset(1200.0, Some(0.0)), 1130.0);
    }

    #[test]
    fn only_fragment_links_are_targets() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/notch"), None);
        assert_eq!(anchor_target("https://example.com/#faq"), None);
    }
}
