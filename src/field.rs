// The particle field: surface dimensions, the particle collection and the
// per-frame simulation. Nothing in here touches the DOM, so hosts other than
// the browser (and the unit tests) can drive it directly.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::renderer::FrameSurface;
use rand::Rng;
use vecmath::Vector2;

// A line to draw between two particles close enough to each other.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub distance: f64,
    pub alpha: f64,
}

// Owns the surface size, the particles and the random source used to seed them.
pub struct ParticleField<R> {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    config: FieldConfig,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    // Creates a field with the default config and populates it.
    pub fn new(width: f64, height: f64, rng: R) -> Self {
        Self::with_config(width, height, FieldConfig::default(), rng)
    }

    pub fn with_config(width: f64, height: f64, config: FieldConfig, rng: R) -> Self {
        let mut field = ParticleField {
            width: width.max(0.0),
            height: height.max(0.0),
            particles: Vec::new(),
            config,
            rng,
        };
        field.init();
        field
    }

    // Replaces the whole collection with freshly randomized particles sized
    // to the current surface.
    pub fn init(&mut self) {
        let count = self.config.particle_count(self.width, self.height);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::random(
                &mut self.rng,
                self.width,
                self.height,
                &self.config,
            ));
        }
        self.particles = particles;
    }

    // Updates the surface bounds. Particles are neither re-seeded nor moved;
    // the new bounds only apply from the next update on.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    // Advances every particle by one frame.
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.update(self.width, self.height);
        }
    }

    // Headless frame: motion only, no drawing.
    pub fn step(&mut self) {
        self.update();
    }

    // Every unordered pair of distinct particles closer than the link
    // distance, in collection order.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let particles = &self.particles;
        let config = &self.config;
        (0..particles.len()).flat_map(move |a| {
            (a + 1..particles.len()).filter_map(move |b| {
                let distance = particles[a].distance_to(&particles[b]);
                config.link_alpha_at(distance).map(|alpha| Link {
                    a,
                    b,
                    from: particles[a].pos,
                    to: particles[b].pos,
                    distance,
                    alpha,
                })
            })
        })
    }

    // One full animation frame: clear, then update and draw each particle in
    // order, then draw the links.
    pub fn render_frame<S: FrameSurface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        let (width, height) = (self.width, self.height);
        surface.clear(width, height)?;
        for particle in &mut self.particles {
            particle.update(width, height);
            surface.fill_circle(particle.pos, particle.radius, particle.color)?;
        }
        for link in self.links() {
            surface.stroke_line(
                link.from,
                link.to,
                self.config.link_width,
                self.config.hue.with_alpha(link.alpha),
            )?;
        }
        Ok(())
    }
}

impl<R> ParticleField<R> {
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::convert::Infallible;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(f64, f64),
        Circle(Vector2<f64>, f64),
        Line(Vector2<f64>, Vector2<f64>, f64),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl FrameSurface for Recorder {
        type Error = Infallible;

        fn clear(&mut self, width: f64, height: f64) -> Result<(), Infallible> {
            self.ops.push(Op::Clear(width, height));
            Ok(())
        }

        fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, _color: Color) -> Result<(), Infallible> {
            self.ops.push(Op::Circle(center, radius));
            Ok(())
        }

        fn stroke_line(
            &mut self,
            from: Vector2<f64>,
            to: Vector2<f64>,
            _line_width: f64,
            color: Color,
        ) -> Result<(), Infallible> {
            self.ops.push(Op::Line(from, to, color.a));
            Ok(())
        }
    }

    fn field(width: f64, height: f64, seed: u64) -> ParticleField<SmallRng> {
        ParticleField::new(width, height, SmallRng::seed_from_u64(seed))
    }

    fn still(x: f64, y: f64) -> Particle {
        Particle::new(x, y, 0.0, 0.0, 2.0, Color::ACCENT)
    }

    #[test]
    fn init_populates_by_area() {
        assert_eq!(field(800.0, 600.0, 1).len(), 32);
        assert_eq!(field(100.0, 100.0, 1).len(), 0);
    }

    #[test]
    fn reinit_replaces_collection() {
        let mut f = field(800.0, 600.0, 3);
        let before = f.particles().to_vec();
        f.init();
        assert_eq!(f.len(), 32);
        assert_ne!(f.particles(), &before[..]);
    }

    #[test]
    fn seeded_fields_are_reproducible() {
        assert_eq!(field(800.0, 600.0, 9).particles(), field(800.0, 600.0, 9).particles());
    }

    #[test]
    fn resize_keeps_particles() {
        let mut f = field(800.0, 600.0, 5);
        let before = f.particles().to_vec();
        f.resize(400.0, 300.0);
        assert_eq!(f.len(), 32);
        assert_eq!(f.particles(), &before[..]);
        assert_eq!((f.width(), f.height()), (400.0, 300.0));
        f.init();
        assert_eq!(f.len(), 8);
    }

    #[test]
    fn shrinking_reflects_outside_particles() {
        let mut f = field(800.0, 600.0, 5);
        f.particles_mut().clear();
        f.particles_mut().push(Particle::new(700.0, 100.0, 0.4, 0.0, 1.0, Color::ACCENT));
        f.resize(400.0, 300.0);
        f.step();
        assert_eq!(f.particles()[0].vel[0], -0.4);
    }

    #[test]
    fn particles_do_not_diverge() {
        let mut f = field(300.0, 200.0, 11);
        for _ in 0..20_000 {
            f.step();
        }
        for p in f.particles() {
            assert!(p.pos[0] > -1.0 && p.pos[0] < 301.0);
            assert!(p.pos[1] > -1.0 && p.pos[1] < 201.0);
        }
    }

    #[test]
    fn links_respect_threshold_and_skip_self_pairs() {
        let mut f = field(800.0, 600.0, 1);
        *f.particles_mut() = vec![still(0.0, 0.0), still(99.0, 0.0), still(199.0, 0.0), still(500.0, 500.0)];
        let links: Vec<Link> = f.links().collect();
        // (1, 2) sit exactly 100 apart and are left out
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert_eq!(links[0].distance, 99.0);
        assert!((links[0].alpha - 0.002).abs() < 1e-9);
    }

    #[test]
    fn links_exclude_exact_threshold() {
        let mut f = field(800.0, 600.0, 1);
        *f.particles_mut() = vec![still(0.0, 0.0), still(100.0, 0.0)];
        assert_eq!(f.links().count(), 0);
    }

    #[test]
    fn frame_order() {
        let mut f = field(800.0, 600.0, 1);
        *f.particles_mut() = vec![
            Particle::new(10.0, 10.0, 1.0, 0.0, 2.0, Color::ACCENT),
            Particle::new(20.0, 10.0, 0.0, 0.0, 3.0, Color::ACCENT),
        ];
        let mut surface = Recorder::default();
        f.render_frame(&mut surface).unwrap();
        assert_eq!(
            surface.ops,
            vec![
                Op::Clear(800.0, 600.0),
                Op::Circle([11.0, 10.0], 2.0),
                Op::Circle([20.0, 10.0], 3.0),
                Op::Line([11.0, 10.0], [20.0, 10.0], 0.2 - 9.0 / 500.0),
            ]
        );
    }

    #[test]
    fn empty_field_frame_only_clears() {
        let mut f = field(0.0, 0.0, 1);
        assert!(f.is_empty());
        let mut surface = Recorder::default();
        f.render_frame(&mut surface).unwrap();
        f.step();
        assert_eq!(surface.ops, vec![Op::Clear(0.0, 0.0)]);
    }
}
