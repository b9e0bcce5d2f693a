//! Celebration burst shown when the player wins.
//!
//! Physics follow the usual canvas confetti model: every particle leaves the
//! origin at a jittered angle and speed, slows down by a constant decay factor,
//! falls under constant gravity and disappears after a fixed number of frames.
//! Positions live on a virtual canvas so the result is independent of the
//! terminal size; renderers map them onto cells.

use crate::game::RandomSource;

/// Virtual canvas width in "pixels".
pub const CANVAS_WIDTH: f64 = 800.0;
/// Virtual canvas height in "pixels".
pub const CANVAS_HEIGHT: f64 = 600.0;

const START_VELOCITY: f64 = 45.0;
const DECAY: f64 = 0.9;
const GRAVITY: f64 = 1.0;
const TOTAL_TICKS: u32 = 120;

/// Number of distinct colours a particle can take.
pub const PALETTE_SIZE: usize = 7;
/// Number of distinct glyphs a particle can take.
pub const SHAPE_COUNT: usize = 4;

/// Parameters of one burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiBurst {
    /// Launch direction in degrees, 90 is straight up.
    pub angle: i64,
    /// Cone width in degrees.
    pub spread: i64,
    pub particle_count: i64,
    /// Horizontal origin as a fraction of the canvas width.
    pub origin_x: f64,
    /// Vertical origin as a fraction of the canvas height.
    pub origin_y: f64,
}

impl ConfettiBurst {
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self {
            angle: rng.random_number(55, 125),
            spread: rng.random_number(50, 70),
            particle_count: rng.random_number(50, 100),
            origin_x: 0.5,
            origin_y: 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    x: f64,
    y: f64,
    heading: f64,
    velocity: f64,
    tick: u32,
    pub color: usize,
    pub shape: usize,
}

impl Particle {
    fn alive(&self) -> bool {
        self.tick < TOTAL_TICKS
    }

    fn step(&mut self) {
        self.x += self.heading.cos() * self.velocity;
        self.y += self.heading.sin() * self.velocity + GRAVITY * 3.0;
        self.velocity *= DECAY;
        self.tick += 1;
    }

    /// Position as fractions of the canvas. Values outside `[0, 1)` are off
    /// screen.
    pub fn position(&self) -> (f64, f64) {
        (self.x / CANVAS_WIDTH, self.y / CANVAS_HEIGHT)
    }
}

/// All particles of a running burst.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfettiField {
    particles: Vec<Particle>,
}

impl ConfettiField {
    pub fn launch<R: RandomSource + ?Sized>(burst: ConfettiBurst, rng: &mut R) -> Self {
        let count = burst.particle_count.max(0) as usize;
        let origin_x = burst.origin_x * CANVAS_WIDTH;
        let origin_y = burst.origin_y * CANVAS_HEIGHT;
        let angle = (burst.angle as f64).to_radians();
        let spread = (burst.spread as f64).to_radians();

        let particles = (0..count)
            .map(|_| Particle {
                x: origin_x,
                y: origin_y,
                heading: -angle + (0.5 * spread - rng.random_unit() * spread),
                velocity: START_VELOCITY * 0.5 + rng.random_unit() * START_VELOCITY,
                tick: 0,
                color: rng.random_number(0, PALETTE_SIZE as i64 - 1) as usize,
                shape: rng.random_number(0, SHAPE_COUNT as i64 - 1) as usize,
            })
            .collect();

        Self { particles }
    }

    /// Advance one frame and drop expired particles.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.step();
        }
        self.particles.retain(Particle::alive);
    }

    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::seeded_rng;

    #[test]
    fn random_burst_respects_bounds() {
        let mut rng = seeded_rng(Some(11));
        for _ in 0..200 {
            let burst = ConfettiBurst::random(&mut rng);
            assert!((55..=125).contains(&burst.angle));
            assert!((50..=70).contains(&burst.spread));
            assert!((50..=100).contains(&burst.particle_count));
            assert_eq!(burst.origin_y, 0.6);
        }
    }

    #[test]
    fn launch_spawns_requested_particles_at_origin() {
        let mut rng = seeded_rng(Some(2));
        let burst = ConfettiBurst {
            angle: 90,
            spread: 60,
            particle_count: 64,
            origin_x: 0.5,
            origin_y: 0.6,
        };
        let field = ConfettiField::launch(burst, &mut rng);
        assert_eq!(field.particles().len(), 64);
        for particle in field.particles() {
            let (x, y) = particle.position();
            assert!((x - 0.5).abs() < 1e-9);
            assert!((y - 0.6).abs() < 1e-9);
            assert!(particle.color < PALETTE_SIZE);
            assert!(particle.shape < SHAPE_COUNT);
        }
    }

    #[test]
    fn straight_up_burst_rises_first() {
        let mut rng = seeded_rng(Some(4));
        let burst = ConfettiBurst {
            angle: 90,
            spread: 0,
            particle_count: 10,
            origin_x: 0.5,
            origin_y: 0.6,
        };
        let mut field = ConfettiField::launch(burst, &mut rng);
        field.step();
        for particle in field.particles() {
            let (x, y) = particle.position();
            assert!(y < 0.6);
            assert!((x - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn field_finishes_after_lifetime() {
        let mut rng = seeded_rng(Some(8));
        let mut field = ConfettiField::launch(ConfettiBurst::random(&mut rng), &mut rng);
        for _ in 0..TOTAL_TICKS - 1 {
            field.step();
        }
        assert!(!field.is_finished());
        field.step();
        assert!(field.is_finished());
    }

    #[test]
    fn empty_default_field_is_finished() {
        assert!(ConfettiField::default().is_finished());
    }
}
