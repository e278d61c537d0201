use glam::Vec2;
use rand::Rng;
use std::time::Duration;

use crate::constants::*;
use crate::host::{Glow, Surface};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn random(viewport: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * viewport.x, rng.gen::<f32>() * viewport.y),
            velocity: Vec2::new(
                rng.gen_range(-PARTICLE_SPEED_MAX..PARTICLE_SPEED_MAX),
                rng.gen_range(-PARTICLE_SPEED_MAX..PARTICLE_SPEED_MAX),
            ),
            size: rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
            opacity: rng.gen_range(PARTICLE_OPACITY_MIN..PARTICLE_OPACITY_MAX),
        }
    }
}

/// Number of particles for a viewport, before the low-power halving.
#[inline]
pub fn particle_count(viewport_width: f32) -> usize {
    if viewport_width > SMALL_VIEWPORT_MAX_WIDTH {
        PARTICLES_WIDE
    } else {
        PARTICLES_NARROW
    }
}

/// Teleport-wrap one axis into `[0, extent)`.
///
/// Leaving through the low edge lands on the last representable coordinate
/// below `extent`; reaching `extent` or beyond lands on 0.
#[inline]
pub fn wrap_axis(v: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    if v < 0.0 {
        f32::from_bits(extent.to_bits() - 1)
    } else if v >= extent {
        0.0
    } else {
        v
    }
}

/// The fixed particle collection and the viewport it wraps within.
#[derive(Clone, Debug)]
pub struct ParticleSet {
    particles: Vec<Particle>,
    viewport: Vec2,
}

impl ParticleSet {
    /// Allocate the startup particle set. Never grows afterwards.
    pub fn initialize(
        viewport_width: f32,
        viewport_height: f32,
        high_performance: bool,
        rng: &mut impl Rng,
    ) -> Self {
        let viewport = Vec2::new(viewport_width, viewport_height);
        let mut n = particle_count(viewport_width);
        if !high_performance {
            n /= 2;
        }
        let particles = (0..n).map(|_| Particle::random(viewport, rng)).collect();
        Self { particles, viewport }
    }

    pub fn from_particles(particles: Vec<Particle>, viewport: Vec2) -> Self {
        Self { particles, viewport }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Follow a window resize. Out-of-bounds particles wrap on the next step.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    pub fn step(&mut self, dt: Duration) {
        let frames =
            (dt.as_secs_f32() / REFERENCE_FRAME.as_secs_f32()).clamp(0.0, MAX_CATCHUP_FRAMES);
        let (w, h) = (self.viewport.x, self.viewport.y);
        for p in &mut self.particles {
            let next = p.position + p.velocity * frames;
            p.position = Vec2::new(wrap_axis(next.x, w), wrap_axis(next.y, h));
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.viewport);
        let glow = Glow {
            blur: PARTICLE_GLOW_BLUR,
            color: PARTICLE_GLOW_COLOR,
        };
        for p in &self.particles {
            surface.fill_circle(p.position, p.size, PARTICLE_RGB, p.opacity, glow);
        }
    }
}

/// A particle set bound to the surface it draws on.
pub struct ParticleField<S> {
    pub set: ParticleSet,
    surface: S,
}

impl<S: Surface> ParticleField<S> {
    /// `None` when there is nothing to draw on: missing surface or zero-area viewport.
    pub fn new(
        surface: Option<S>,
        viewport: Vec2,
        high_performance: bool,
        rng: &mut impl Rng,
    ) -> Option<Self> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            log::debug!("[particles] zero-area viewport; field disabled");
            return None;
        }
        let Some(surface) = surface else {
            log::debug!("[particles] no drawing surface; field disabled");
            return None;
        };
        let set = ParticleSet::initialize(viewport.x, viewport.y, high_performance, rng);
        log::info!(
            "[particles] {} particles in {:.0}x{:.0}",
            set.len(),
            viewport.x,
            viewport.y
        );
        Some(Self { set, surface })
    }

    pub fn frame(&mut self, dt: Duration) {
        self.set.step(dt);
        self.set.render(&mut self.surface);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
