// Simple particle struct to keep track of individual position, velocity, size and color

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;
use vecmath::{vec2_add, vec2_len, vec2_sub, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    // Uniformly placed inside the surface, with size, speed and opacity drawn from the config ranges
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let radius = rng.gen::<f64>() * (config.max_radius - config.min_radius) + config.min_radius;
        let vel_x = rng.gen::<f64>() * 2.0 * config.max_speed - config.max_speed;
        let vel_y = rng.gen::<f64>() * 2.0 * config.max_speed - config.max_speed;
        let alpha = rng.gen::<f64>() * (config.max_alpha - config.min_alpha) + config.min_alpha;
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, config.hue.with_alpha(alpha))
    }

    // One frame of motion. Leaving the surface flips the velocity component
    // but does not pull the particle back, the next frames carry it inside.
    pub fn update(&mut self, width: f64, height: f64) {
        self.pos = vec2_add(self.pos, self.vel);
        if self.pos[0] > width || self.pos[0] < 0.0 {
            self.vel[0] = -self.vel[0];
        }
        if self.pos[1] > height || self.pos[1] < 0.0 {
            self.vel[1] = -self.vel[1];
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vec2_len(vec2_sub(self.pos, other.pos))
    }
}
