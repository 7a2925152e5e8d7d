//! Scroll-linked offsets for hero content.

/// Fraction of the scroll distance the wipe hero image drifts by.
pub const HERO_IMAGE_FACTOR: f64 = 0.05;

/// Scroll range and lift range of the particle page hero.
pub const HERO_LIFT_SCROLL: (f64, f64) = (0.0, 400.0);
pub const HERO_LIFT_OFFSET: (f64, f64) = (0.0, 150.0);

/// Vertical drift of the hero image for the current scroll position.
///
/// `None` once the hero has scrolled out of the first viewport; the image
/// keeps whatever shift it last had.
pub fn hero_image_shift(scroll_y: f64, viewport_height: f64) -> Option<f64> {
    (scroll_y < viewport_height).then(|| scroll_y * HERO_IMAGE_FACTOR)
}

/// Inline transform for a hero image shifted by `shift` pixels. Keeps the
/// slight zoom the image has at rest.
pub fn hero_image_transform(shift: f64) -> String {
    format!("translateY({shift}px) scale(1.05)")
}

/// Linear map of `value` from `input` onto `output`, clamped to `output`.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;
    if in_hi == in_lo {
        return out_lo;
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + t * (out_hi - out_lo)
}

pub fn hero_lift(scroll_y: f64) -> f64 {
    map_range(scroll_y, HERO_LIFT_SCROLL, HERO_LIFT_OFFSET)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn hero_image_moves_only_in_first_viewport() {
        assert_relative_eq!(hero_image_shift(200.0, 900.0).unwrap_or_default(), 10.0);
        assert_eq!(hero_image_shift(900.0, 900.0), None);
        assert_eq!(hero_image_shift(0.0, 900.0), Some(0.0));
    }

    #[test]
    fn transform_keeps_zoom() {
        assert_eq!(hero_image_transform(10.0), "translateY(10px) scale(1.05)");
    }

    #[test]
    fn lift_is_linear_then_clamped() {
        assert_relative_eq!(hero_lift(0.0), 0.0);
        assert_relative_eq!(hero_lift(200.0), 75.0);
        assert_relative_eq!(hero_lift(400.0), 150.0);
        assert_relative_eq!(hero_lift(2000.0), 150.0);
        assert_relative_eq!(hero_lift(-50.0), 0.0);
    }

    #[test]
    fn degenerate_input_range_maps_to_start() {
        assert_relative_eq!(map_range(5.0, (1.0, 1.0), (3.0, 9.0)), 3.0);
    }
}
