// In-memory stand-ins for the browser capabilities the core consumes.

#![allow(dead_code)]

use glam::Vec2;
use nodecraft_core::{ElementFinder, Glow, Indicator, Surface};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Vec2),
    Circle { center: Vec2, radius: f32, alpha: f32 },
}

#[derive(Clone, Default)]
pub struct RecordingSurface {
    pub ops: Rc<RefCell<Vec<DrawOp>>>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, size: Vec2) {
        self.ops.borrow_mut().push(DrawOp::Clear(size));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, _rgb: [u8; 3], alpha: f32, _glow: Glow) {
        self.ops.borrow_mut().push(DrawOp::Circle {
            center,
            radius,
            alpha,
        });
    }
}

#[derive(Clone, Default)]
pub struct RecordingIndicator {
    pub placements: Rc<RefCell<Vec<(Vec2, f32)>>>,
}

impl RecordingIndicator {
    pub fn last(&self) -> Option<(Vec2, f32)> {
        self.placements.borrow().last().copied()
    }

    pub fn count(&self) -> usize {
        self.placements.borrow().len()
    }
}

impl Indicator for RecordingIndicator {
    fn place(&self, at: Vec2, scale: f32) {
        self.placements.borrow_mut().push((at, scale));
    }
}

/// Finder over a fixed page: optional cursor markup and particle container.
#[derive(Default)]
pub struct FakePage {
    pub has_cursor: bool,
    pub has_particles: bool,
    pub lookups: Cell<usize>,
    pub dot: RecordingIndicator,
    pub ring: RecordingIndicator,
    pub surface: RecordingSurface,
}

impl FakePage {
    pub fn full() -> Self {
        Self {
            has_cursor: true,
            has_particles: true,
            ..Default::default()
        }
    }
}

impl ElementFinder for FakePage {
    type Element = RecordingIndicator;
    type Surface = RecordingSurface;

    fn by_id(&self, id: &str) -> Option<RecordingIndicator> {
        self.lookups.set(self.lookups.get() + 1);
        (id == "cursor" && self.has_cursor).then(RecordingIndicator::default)
    }

    fn child(&self, _parent: &RecordingIndicator, selector: &str) -> Option<RecordingIndicator> {
        self.lookups.set(self.lookups.get() + 1);
        match selector {
            ".cursor-dot" => Some(self.dot.clone()),
            ".cursor-ring" => Some(self.ring.clone()),
            _ => None,
        }
    }

    fn surface_in(&self, container_id: &str) -> Option<RecordingSurface> {
        (container_id == "particles" && self.has_particles).then(|| self.surface.clone())
    }
}
