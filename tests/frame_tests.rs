// Host-side tests for the frame driver and the per-page state.

mod common;

use common::{DrawOp, FakePage, RecordingSurface};
use glam::Vec2;
use nodecraft_core::constants::REFERENCE_FRAME;
use nodecraft_core::gallery::Filter;
use nodecraft_core::{AppState, FrameDriver, FrameTask, HostEnv, LoopHandle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[derive(Default)]
struct Counter {
    frames: u32,
    total: Duration,
    stop_after: Option<(u32, LoopHandle)>,
}

impl FrameTask for Counter {
    fn frame(&mut self, dt: Duration) {
        self.frames += 1;
        self.total += dt;
        if let Some((n, handle)) = &self.stop_after {
            if self.frames >= *n {
                handle.stop();
            }
        }
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn run_ticks_runs_every_frame_while_running() {
    let mut driver = FrameDriver::new(Counter::default(), LoopHandle::default());
    assert_eq!(driver.run_ticks(5, REFERENCE_FRAME), 5);
    assert_eq!(driver.frames(), 5);
    assert_eq!(driver.task().total, REFERENCE_FRAME * 5);
}

#[test]
fn stopping_from_inside_a_frame_ends_the_loop() {
    let handle = LoopHandle::default();
    let task = Counter {
        stop_after: Some((3, handle.clone())),
        ..Default::default()
    };
    let mut driver = FrameDriver::new(task, handle);
    assert_eq!(driver.run_ticks(10, REFERENCE_FRAME), 3);
    assert!(!driver.tick_with(REFERENCE_FRAME));
    assert_eq!(driver.task().frames, 3);
}

#[test]
fn stopped_loop_never_runs_the_task() {
    let handle = LoopHandle::default();
    handle.stop();
    let mut driver = FrameDriver::new(Counter::default(), handle);
    assert!(!driver.tick());
    assert_eq!(driver.run_ticks(4, REFERENCE_FRAME), 0);
    assert_eq!(driver.task().frames, 0);
}

#[test]
fn first_measured_tick_has_zero_dt() {
    let mut driver = FrameDriver::new(Counter::default(), LoopHandle::default());
    assert!(driver.tick());
    assert_eq!(driver.task().total, Duration::ZERO);
}

#[test]
fn desktop_state_has_particles_and_cursor() {
    let page = FakePage::full();
    let state = AppState::initialize(HostEnv::new(1440.0, 900.0, 8), &page, &mut rng());
    assert!(state.needs_frame_loop());
    assert_eq!(state.particles.as_ref().map(|p| p.set.len()), Some(50));
    assert!(state.cursor.is_some());
}

#[test]
fn low_power_desktop_halves_particles() {
    let page = FakePage::full();
    let state = AppState::initialize(HostEnv::new(1440.0, 900.0, 2), &page, &mut rng());
    assert_eq!(state.particles.as_ref().map(|p| p.set.len()), Some(25));
}

#[test]
fn unknown_core_count_counts_as_capable() {
    let page = FakePage::full();
    let state = AppState::initialize(HostEnv::new(1440.0, 900.0, 0), &page, &mut rng());
    assert_eq!(state.particles.as_ref().map(|p| p.set.len()), Some(50));
}

#[test]
fn bare_page_needs_no_loop() {
    let page = FakePage::default();
    let state = AppState::initialize(HostEnv::new(1440.0, 900.0, 8), &page, &mut rng());
    assert!(state.particles.is_none());
    assert!(state.cursor.is_none());
    assert!(!state.needs_frame_loop());
}

#[test]
fn mobile_state_keeps_particles_but_no_cursor() {
    let page = FakePage::full();
    let state = AppState::initialize(HostEnv::new(390.0, 844.0, 6), &page, &mut rng());
    assert!(state.cursor.is_none());
    assert_eq!(state.particles.as_ref().map(|p| p.set.len()), Some(25));
    assert!(state.needs_frame_loop());
}

#[test]
fn frames_draw_particles_and_place_cursor() {
    let page = FakePage::full();
    let ops = page.surface.ops.clone();
    let ring = page.ring.clone();
    let mut state = AppState::initialize(HostEnv::new(1440.0, 900.0, 8), &page, &mut rng());
    state.on_pointer_move(200.0, 300.0);
    let handle = state.handle();
    let mut driver = FrameDriver::new(state, handle);
    assert_eq!(driver.run_ticks(2, REFERENCE_FRAME), 2);

    let clears = ops
        .borrow()
        .iter()
        .filter(|op| matches!(op, DrawOp::Clear(_)))
        .count();
    assert_eq!(clears, 2);
    assert_eq!(ring.count(), 2);
    assert_eq!(ring.last(), Some((Vec2::new(200.0, 300.0), 1.0)));
}

#[test]
fn resize_moves_the_wrap_bounds() {
    let page = FakePage::full();
    let mut state: AppState<RecordingSurface, _> =
        AppState::initialize(HostEnv::new(1440.0, 900.0, 8), &page, &mut rng());
    state.resize(Vec2::new(300.0, 200.0));
    state.frame(REFERENCE_FRAME);
    let field = state.particles.as_ref().unwrap();
    assert_eq!(field.set.viewport(), Vec2::new(300.0, 200.0));
    for p in field.set.particles() {
        assert!(p.position.x < 300.0 && p.position.y < 200.0);
    }
}

#[test]
fn reselecting_the_active_filter_is_a_no_op() {
    let page = FakePage::default();
    let mut state: AppState<RecordingSurface, _> =
        AppState::initialize(HostEnv::new(1440.0, 900.0, 8), &page, &mut rng());
    assert_eq!(state.filter(), &Filter::All);
    assert!(!state.select_filter(Filter::parse("all")));
    assert!(state.select_filter(Filter::parse("film")));
    assert!(!state.select_filter(Filter::parse("film")));
    assert_eq!(state.filter().as_str(), "film");
    assert!(state.select_filter(Filter::All));
}

#[test]
fn teardown_stops_the_driver() {
    let page = FakePage::full();
    let state = AppState::initialize(HostEnv::new(1440.0, 900.0, 8), &page, &mut rng());
    let handle = state.handle();
    let mut driver = FrameDriver::new(state, handle.clone());
    assert!(driver.tick_with(REFERENCE_FRAME));
    driver.into_task().teardown();
    assert!(!handle.is_running());
}
