//! Application state shared by the frame loop and the event handlers.
//!
//! One `AppState` exists per page. The host creates it with
//! [`AppState::initialize`], hands it to a [`FrameDriver`](crate::FrameDriver)
//! and calls [`AppState::teardown`] when the page goes away.

use glam::Vec2;
use rand::Rng;
use std::time::Duration;

use crate::cursor::CursorTracker;
use crate::frame::{FrameTask, LoopHandle};
use crate::gallery::Filter;
use crate::host::{ElementFinder, HostEnv, Indicator, Surface};
use crate::loading::Loader;
use crate::particles::ParticleField;

pub const PARTICLES_CONTAINER_ID: &str = "particles";

pub struct AppState<S, I> {
    pub env: HostEnv,
    pub particles: Option<ParticleField<S>>,
    pub cursor: Option<CursorTracker<I>>,
    pub loader: Loader,
    filter: Filter,
    handle: LoopHandle,
}

impl<S: Surface, I: Indicator> AppState<S, I> {
    pub fn initialize<F>(env: HostEnv, finder: &F, rng: &mut impl Rng) -> Self
    where
        F: ElementFinder<Element = I, Surface = S>,
    {
        let surface = finder.surface_in(PARTICLES_CONTAINER_ID);
        let particles = ParticleField::new(surface, env.viewport, env.high_performance(), rng);
        let cursor = CursorTracker::attach(&env, finder);
        log::info!(
            "[state] particles={} cursor={} cores={}",
            particles.as_ref().map(|p| p.set.len()).unwrap_or(0),
            cursor.is_some(),
            env.hardware_concurrency
        );
        Self {
            env,
            particles,
            cursor,
            loader: Loader::default(),
            filter: Filter::All,
            handle: LoopHandle::default(),
        }
    }

    /// True when at least one per-frame component exists.
    #[inline]
    pub fn needs_frame_loop(&self) -> bool {
        self.particles.is_some() || self.cursor.is_some()
    }

    #[inline]
    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.env.viewport = viewport;
        if let Some(field) = &mut self.particles {
            field.set.resize(viewport.x, viewport.y);
        }
    }

    #[inline]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Switch the portfolio filter; returns `false` when it is already active.
    pub fn select_filter(&mut self, filter: Filter) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        true
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if let Some(c) = &mut self.cursor {
            c.on_pointer_move(x, y);
        }
    }

    pub fn teardown(self) {
        self.handle.stop();
        log::info!("[state] torn down");
    }
}

impl<S: Surface, I: Indicator> FrameTask for AppState<S, I> {
    fn frame(&mut self, dt: Duration) {
        if let Some(field) = &mut self.particles {
            field.frame(dt);
        }
        if let Some(c) = &self.cursor {
            c.render_tick();
        }
    }
}
