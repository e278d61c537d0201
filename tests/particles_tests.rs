// Host-side tests for the particle field.

mod common;

use common::{DrawOp, RecordingSurface};
use glam::Vec2;
use nodecraft_core::constants::*;
use nodecraft_core::particles::{particle_count, wrap_axis};
use nodecraft_core::{Particle, ParticleField, ParticleSet};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn lone(position: Vec2, velocity: Vec2, viewport: Vec2) -> ParticleSet {
    ParticleSet::from_particles(
        vec![Particle {
            position,
            velocity,
            size: 2.0,
            opacity: 0.5,
        }],
        viewport,
    )
}

#[test]
fn count_follows_viewport_width_and_performance() {
    assert_eq!(ParticleSet::initialize(1024.0, 768.0, true, &mut rng()).len(), 50);
    assert_eq!(ParticleSet::initialize(500.0, 768.0, true, &mut rng()).len(), 25);
    assert_eq!(ParticleSet::initialize(1024.0, 768.0, false, &mut rng()).len(), 25);
    assert_eq!(ParticleSet::initialize(500.0, 768.0, false, &mut rng()).len(), 12);
}

#[test]
fn width_768_counts_as_narrow() {
    assert_eq!(particle_count(768.0), PARTICLES_NARROW);
    assert_eq!(particle_count(769.0), PARTICLES_WIDE);
}

#[test]
fn initial_particles_respect_ranges() {
    let set = ParticleSet::initialize(1280.0, 720.0, true, &mut rng());
    for p in set.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 1280.0);
        assert!(p.position.y >= 0.0 && p.position.y < 720.0);
        assert!(p.velocity.x.abs() <= PARTICLE_SPEED_MAX);
        assert!(p.velocity.y.abs() <= PARTICLE_SPEED_MAX);
        assert!(p.size >= PARTICLE_SIZE_MIN && p.size < PARTICLE_SIZE_MAX);
        assert!(p.opacity >= PARTICLE_OPACITY_MIN && p.opacity < PARTICLE_OPACITY_MAX);
    }
}

#[test]
fn positions_stay_in_bounds_over_many_steps() {
    let mut set = ParticleSet::initialize(320.0, 200.0, true, &mut rng());
    let velocities: Vec<Vec2> = set.particles().iter().map(|p| p.velocity).collect();
    for _ in 0..5_000 {
        set.step(REFERENCE_FRAME);
        for p in set.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 320.0, "x={}", p.position.x);
            assert!(p.position.y >= 0.0 && p.position.y < 200.0, "y={}", p.position.y);
        }
    }
    let after: Vec<Vec2> = set.particles().iter().map(|p| p.velocity).collect();
    assert_eq!(velocities, after, "velocity never changes");
}

#[test]
fn crossing_right_edge_teleports_to_zero() {
    let viewport = Vec2::new(800.0, 600.0);
    let mut set = lone(Vec2::new(800.0 - 0.1, 300.0), Vec2::new(0.5, 0.0), viewport);
    set.step(REFERENCE_FRAME);
    assert_eq!(set.particles()[0].position.x, 0.0);
    assert_eq!(set.particles()[0].position.y, 300.0);
}

#[test]
fn crossing_top_edge_lands_just_inside_bottom() {
    let viewport = Vec2::new(800.0, 600.0);
    let mut set = lone(Vec2::new(10.0, 0.1), Vec2::new(0.0, -0.2), viewport);
    set.step(REFERENCE_FRAME);
    let y = set.particles()[0].position.y;
    assert!(y < 600.0 && y > 599.9, "y={y}");
}

#[test]
fn wrap_does_not_reflect_velocity() {
    let viewport = Vec2::new(100.0, 100.0);
    let mut set = lone(Vec2::new(99.9, 50.0), Vec2::new(0.2, 0.0), viewport);
    set.step(REFERENCE_FRAME);
    set.step(REFERENCE_FRAME);
    let p = set.particles()[0];
    assert_eq!(p.velocity, Vec2::new(0.2, 0.0));
    assert!(p.position.x > 0.0 && p.position.x < 1.0);
}

#[test]
fn wrap_axis_edge_cases() {
    assert_eq!(wrap_axis(5.0, 10.0), 5.0);
    assert_eq!(wrap_axis(10.0, 10.0), 0.0);
    assert_eq!(wrap_axis(0.0, 10.0), 0.0);
    assert!(wrap_axis(-0.01, 10.0) < 10.0);
    assert_eq!(wrap_axis(3.0, 0.0), 0.0);
}

#[test]
fn zero_dt_does_not_move_particles() {
    let mut set = ParticleSet::initialize(640.0, 480.0, true, &mut rng());
    let before: Vec<Vec2> = set.particles().iter().map(|p| p.position).collect();
    set.step(std::time::Duration::ZERO);
    let after: Vec<Vec2> = set.particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
}

#[test]
fn shrinking_viewport_wraps_on_next_step() {
    let mut set = lone(Vec2::new(900.0, 500.0), Vec2::new(0.1, 0.1), Vec2::new(1000.0, 800.0));
    set.resize(400.0, 300.0);
    set.step(REFERENCE_FRAME);
    let p = set.particles()[0].position;
    assert_eq!(p, Vec2::ZERO);
}

#[test]
fn render_clears_then_draws_every_particle() {
    let set = ParticleSet::initialize(1024.0, 768.0, true, &mut rng());
    let mut surface = RecordingSurface::default();
    set.render(&mut surface);
    let ops = surface.ops.borrow();
    assert_eq!(ops[0], DrawOp::Clear(Vec2::new(1024.0, 768.0)));
    assert_eq!(ops.len(), 1 + set.len());
    for (op, p) in ops[1..].iter().zip(set.particles()) {
        assert_eq!(
            *op,
            DrawOp::Circle {
                center: p.position,
                radius: p.size,
                alpha: p.opacity
            }
        );
    }
}

#[test]
fn field_is_not_created_without_surface_or_area() {
    let field =
        ParticleField::<RecordingSurface>::new(None, Vec2::new(800.0, 600.0), true, &mut rng());
    assert!(field.is_none());
    let field = ParticleField::new(
        Some(RecordingSurface::default()),
        Vec2::new(0.0, 600.0),
        true,
        &mut rng(),
    );
    assert!(field.is_none());
}

#[test]
fn field_frame_steps_and_renders() {
    let surface = RecordingSurface::default();
    let ops = surface.ops.clone();
    let mut field =
        ParticleField::new(Some(surface), Vec2::new(800.0, 600.0), true, &mut rng()).unwrap();
    field.frame(REFERENCE_FRAME);
    field.frame(REFERENCE_FRAME);
    let clears = ops
        .borrow()
        .iter()
        .filter(|op| matches!(op, DrawOp::Clear(_)))
        .count();
    assert_eq!(clears, 2);
}
