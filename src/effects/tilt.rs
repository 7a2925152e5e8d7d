//! Pointer-driven 3D tilt and glare for pricing cards.

pub const MAX_TILT_DEG: f64 = 18.0;
pub const MAX_GLARE: f64 = 0.18;
pub const PERSPECTIVE_PX: f64 = 1000.0;

/// Diameter of the coloured glow that follows the pointer over a card.
pub const GLOW_SIZE: f64 = 160.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    /// Glare opacity, `0.0..=MAX_GLARE`.
    pub glare: f64,
    /// Direction of the glare gradient in degrees.
    pub glare_angle: f64,
}

impl Tilt {
    pub const REST: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        glare: 0.0,
        glare_angle: 0.0,
    };

    /// Tilt for a pointer at (`x`, `y`) inside a `width` × `height` card,
    /// coordinates relative to the card's top-left corner.
    ///
    /// The card leans away from the pointer: pointer on the right edge gives
    /// `rotate_y = +MAX_TILT_DEG`, pointer on the top edge gives
    /// `rotate_x = +MAX_TILT_DEG`.
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Tilt {
        if width <= 0.0 || height <= 0.0 {
            return Tilt::REST;
        }
        let nx = (x / width * 2.0 - 1.0).clamp(-1.0, 1.0);
        let ny = (y / height * 2.0 - 1.0).clamp(-1.0, 1.0);

        let distance = (nx.hypot(ny) / std::f64::consts::SQRT_2).min(1.0);
        Tilt {
            rotate_x: -ny * MAX_TILT_DEG,
            rotate_y: nx * MAX_TILT_DEG,
            glare: distance * MAX_GLARE,
            glare_angle: ny.atan2(nx).to_degrees() + 90.0,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective({PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.rotate_x, self.rotate_y
        )
    }

    pub fn glare_style(&self) -> String {
        format!(
            "opacity: {:.3}; background: linear-gradient({:.1}deg, rgba(255,255,255,1) 0%, rgba(255,255,255,0) 80%)",
            self.glare, self.glare_angle
        )
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Tilt::REST
    }
}

/// Top-left of the glow blob so it centres on the pointer.
pub fn glow_origin(x: f64, y: f64) -> (f64, f64) {
    let half = GLOW_SIZE / 2.0;
    (x - half, y - half)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn centre_is_flat() {
        let tilt = Tilt::at(150.0, 200.0, 300.0, 400.0);
        assert_relative_eq!(tilt.rotate_x, 0.0);
        assert_relative_eq!(tilt.rotate_y, 0.0);
        assert_relative_eq!(tilt.glare, 0.0);
    }

    #[test]
    fn corners_hit_the_limits() {
        let tilt = Tilt::at(300.0, 0.0, 300.0, 400.0);
        assert_relative_eq!(tilt.rotate_x, MAX_TILT_DEG);
        assert_relative_eq!(tilt.rotate_y, MAX_TILT_DEG);
        assert_relative_eq!(tilt.glare, MAX_GLARE, epsilon = 1e-12);
    }

    #[test]
    fn outside_pointer_is_clamped() {
        let tilt = Tilt::at(-500.0, 900.0, 300.0, 400.0);
        assert_relative_eq!(tilt.rotate_x, -MAX_TILT_DEG);
        assert_relative_eq!(tilt.rotate_y, -MAX_TILT_DEG);
        assert!(tilt.glare <= MAX_GLARE + 1e-12);
    }

    #[test]
    fn empty_card_rests() {
        assert_eq!(Tilt::at(10.0, 10.0, 0.0, 100.0), Tilt::REST);
    }

    #[test]
    fn glow_centres_on_pointer() {
        assert_eq!(glow_origin(100.0, 90.0), (20.0, 10.0));
    }

    #[test]
    fn transform_formats_degrees() {
        let tilt = Tilt::at(300.0, 0.0, 300.0, 400.0);
        assert_eq!(tilt.transform(), "perspective(1000px) rotateX(18.00deg) rotateY(18.00deg)");
    }
}
