//! Short-lived particle bursts shown when a round ends.

use rand::Rng;

/// Particles per burst.
pub const BURST_SIZE: usize = 30;
/// Largest velocity component, in arena units per tick.
pub const MAX_SPEED: f32 = 3.0;
pub const MIN_LIFE: u32 = 20;
pub const MAX_LIFE: u32 = 40;

/// Which end of the track a burst came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstKind {
    Cheese,
    Trap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub life: u32,
    pub kind: BurstKind,
}

impl Particle {
    /// Advance one tick. Returns false once the particle has expired.
    fn tick(&mut self) -> bool {
        self.position[0] += self.velocity[0];
        self.position[1] += self.velocity[1];
        self.life = self.life.saturating_sub(1);
        self.life > 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_burst<R: Rng + ?Sized>(
        &mut self,
        origin: [f32; 2],
        count: usize,
        kind: BurstKind,
        rng: &mut R,
    ) {
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle {
                position: origin,
                velocity: [
                    rng.random_range(-MAX_SPEED..=MAX_SPEED),
                    rng.random_range(-MAX_SPEED..=MAX_SPEED),
                ],
                life: rng.random_range(MIN_LIFE..=MAX_LIFE),
                kind,
            });
        }
    }

    pub fn tick(&mut self) {
        self.particles.retain_mut(Particle::tick);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
