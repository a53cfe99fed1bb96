// Tunables for the particle background.

use crate::color::Color;

// Sizing, motion and link parameters of a `ParticleField`.
//
// The defaults reproduce the portfolio background: one particle per
// 15000 px² of viewport, links up to 100 px long fading out over 500 px.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    // Surface area, in px², that accounts for one particle.
    pub area_per_particle: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    // Each velocity component is drawn from `[-max_speed, max_speed)` px per frame.
    pub max_speed: f64,
    pub min_alpha: f64,
    pub max_alpha: f64,
    // Pairs strictly closer than this are linked.
    pub link_distance: f64,
    // Stroke alpha of a zero-length link.
    pub link_alpha: f64,
    // Distance over which the link alpha drops by 1.
    pub link_fade: f64,
    pub link_width: f64,
    pub hue: Color,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            area_per_particle: 15000.0,
            min_radius: 1.0,
            max_radius: 4.0,
            max_speed: 0.5,
            min_alpha: 0.2,
            max_alpha: 0.7,
            link_distance: 100.0,
            link_alpha: 0.2,
            link_fade: 500.0,
            link_width: 1.0,
            hue: Color::ACCENT,
        }
    }
}

impl FieldConfig {
    // `floor(width * height / area_per_particle)`; zero for empty or invalid surfaces.
    pub fn particle_count(&self, width: f64, height: f64) -> usize {
        if !(width > 0.0 && height > 0.0 && self.area_per_particle > 0.0) {
            return 0;
        }
        (width * height / self.area_per_particle).floor() as usize
    }

    // Stroke alpha for a link of the given length, or `None` when the pair is too far apart.
    pub fn link_alpha_at(&self, distance: f64) -> Option<f64> {
        if distance < self.link_distance {
            Some((self.link_alpha - distance / self.link_fade).max(0.0).min(1.0))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_follows_area() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(800.0, 600.0), 32);
        assert_eq!(config.particle_count(400.0, 300.0), 8);
        assert_eq!(config.particle_count(1920.0, 1080.0), 138);
        assert_eq!(config.particle_count(100.0, 149.0), 0);
    }

    #[test]
    fn count_is_zero_for_degenerate_surfaces() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(0.0, 600.0), 0);
        assert_eq!(config.particle_count(800.0, 0.0), 0);
        assert_eq!(config.particle_count(-800.0, -600.0), 0);
        assert_eq!(config.particle_count(std::f64::NAN, 600.0), 0);
    }

    #[test]
    fn link_alpha_threshold() {
        let config = FieldConfig::default();
        let alpha = config.link_alpha_at(99.0).unwrap();
        assert!((alpha - 0.002).abs() < 1e-9);
        assert_eq!(config.link_alpha_at(100.0), None);
        assert_eq!(config.link_alpha_at(150.0), None);
        assert_eq!(config.link_alpha_at(0.0), Some(0.2));
    }

    #[test]
    fn link_alpha_never_negative() {
        let config = FieldConfig {
            link_distance: 200.0,
            ..FieldConfig::default()
        };
        assert_eq!(config.link_alpha_at(150.0), Some(0.0));
    }
}
