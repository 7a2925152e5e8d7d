//! Drifting particle background for the notch hero.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSettings {
    /// Particle count for a reference area of `density_area × 1000` px².
    pub count: usize,
    pub density_area: f64,
    /// Maximum distance moved per frame, in px.
    pub speed: f64,
    pub max_radius: f64,
    pub opacity: f64,
}

impl ParticleSettings {
    /// Particles scaled to a `width × height` canvas, never fewer than one.
    pub fn count_for(&self, width: f64, height: f64) -> usize {
        let reference = self.density_area * 1000.0;
        if reference <= 0.0 {
            return self.count.max(1);
        }
        let scaled = self.count as f64 * (width.max(0.0) * height.max(0.0)) / reference;
        (scaled.round() as usize).max(1)
    }

    pub fn fill_style(&self) -> String {
        format!("rgba(255, 255, 255, {})", self.opacity)
    }
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            count: 60,
            density_area: 800.0,
            speed: 0.5,
            max_radius: 3.0,
            opacity: 0.12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    settings: ParticleSettings,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(settings: ParticleSettings, width: f64, height: f64, rng: &mut impl Rng) -> Self {
        let mut field = Self {
            settings,
            width: width.max(1.0),
            height: height.max(1.0),
            particles: Vec::new(),
        };
        field.populate(rng);
        field
    }

    fn populate(&mut self, rng: &mut impl Rng) {
        let count = self.settings.count_for(self.width, self.height);
        let speed = self.settings.speed;
        let max_radius = self.settings.max_radius.max(0.5);
        self.particles = (0..count)
            .map(|_| {
                let angle = rng.gen_range(0.0..std::f64::consts::TAU);
                let velocity = rng.gen_range(0.0..=speed);
                Particle {
                    x: rng.gen_range(0.0..self.width),
                    y: rng.gen_range(0.0..self.height),
                    vx: angle.cos() * velocity,
                    vy: angle.sin() * velocity,
                    radius: rng.gen_range(0.5..=max_radius),
                }
            })
            .collect();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn settings(&self) -> &ParticleSettings {
        &self.settings
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Advance one frame. Particles leaving one edge come back on the
    /// opposite one.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.x = wrap(p.x + p.vx, w);
            p.y = wrap(p.y + p.vy, h);
        }
    }

    /// New canvas size: reseed so density stays constant.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
        let (width, height) = (width.max(1.0), height.max(1.0));
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.populate(rng);
        tracing::trace!(width, height, count = self.particles.len(), "particle field resized");
    }
}

/// `value` folded into `0.0..max`.
fn wrap(value: f64, max: f64) -> f64 {
    let wrapped = value.rem_euclid(max);
    // rem_euclid can round up to `max` for tiny negative inputs.
    if wrapped >= max {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn count_scales_with_area() {
        let settings = ParticleSettings::default();
        assert_eq!(settings.count_for(800.0, 1000.0), 60);
        assert_eq!(settings.count_for(1600.0, 1000.0), 120);
        assert_eq!(settings.count_for(0.0, 0.0), 1);
    }

    #[test]
    fn particles_respect_settings() {
        let mut rng = StdRng::seed_from_u64(7);
        let settings = ParticleSettings::default();
        let field = ParticleField::new(settings, 800.0, 1000.0, &mut rng);
        assert_eq!(field.particles().len(), 60);
        for p in field.particles() {
            assert!(p.radius <= settings.max_radius);
            assert!(p.vx.hypot(p.vy) <= settings.speed + 1e-9);
        }
    }

    #[test]
    fn positions_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = ParticleField::new(ParticleSettings::default(), 320.0, 240.0, &mut rng);
        for _ in 0..5_000 {
            field.step();
        }
        for p in field.particles() {
            assert!((0.0..320.0).contains(&p.x), "x out of bounds: {}", p.x);
            assert!((0.0..240.0).contains(&p.y), "y out of bounds: {}", p.y);
        }
    }

    #[test]
    fn resize_reseeds_for_new_area() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(ParticleSettings::default(), 800.0, 1000.0, &mut rng);
        field.resize(400.0, 1000.0, &mut rng);
        assert_eq!(field.size(), (400.0, 1000.0));
        assert_eq!(field.particles().len(), 30);
        assert!(field.particles().iter().all(|p| p.x < 400.0));
    }

    #[test]
    fn wrap_never_returns_max() {
        assert_eq!(wrap(-1e-20, 320.0), 0.0);
        assert_eq!(wrap(321.0, 320.0), 1.0);
        assert_eq!(wrap(-1.0, 320.0), 319.0);
    }

    #[test]
    fn fill_uses_configured_opacity() {
        assert_eq!(ParticleSettings::default().fill_style(), "rgba(255, 255, 255, 0.12)");
    }
}
