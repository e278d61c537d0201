use glam::Vec2;

use crate::constants::{CURSOR_HOVER_SCALE, CURSOR_REST_SCALE};
use crate::host::{ElementFinder, HostEnv, Indicator};

pub const CURSOR_ROOT_ID: &str = "cursor";
pub const CURSOR_DOT_SELECTOR: &str = ".cursor-dot";
pub const CURSOR_RING_SELECTOR: &str = ".cursor-ring";

/// Elements that enlarge the ring while hovered.
pub const INTERACTIVE_SELECTOR: &str =
    "a, button, .service-card, .portfolio-item, .video-container, .play-button";

/// Mirrors the latest pointer sample onto a dot and a ring.
///
/// Pointer moves only overwrite the stored sample; the indicators are
/// positioned from `render_tick`, once per display frame.
pub struct CursorTracker<I> {
    pointer: Vec2,
    ring_scale: f32,
    dot: I,
    ring: I,
}

impl<I: Indicator> CursorTracker<I> {
    /// Returns `None` on small viewports without touching the finder, and when
    /// the cursor markup is missing.
    pub fn attach<F>(env: &HostEnv, finder: &F) -> Option<Self>
    where
        F: ElementFinder<Element = I>,
    {
        if env.is_small_viewport() {
            return None;
        }
        let root = finder.by_id(CURSOR_ROOT_ID)?;
        let dot = finder.child(&root, CURSOR_DOT_SELECTOR);
        let ring = finder.child(&root, CURSOR_RING_SELECTOR);
        match (dot, ring) {
            (Some(dot), Some(ring)) => Some(Self::new(dot, ring)),
            _ => {
                log::debug!("[cursor] indicator markup incomplete; tracker disabled");
                None
            }
        }
    }

    pub fn new(dot: I, ring: I) -> Self {
        Self {
            pointer: Vec2::ZERO,
            ring_scale: CURSOR_REST_SCALE,
            dot,
            ring,
        }
    }

    #[inline]
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// The ring scale is replaced, not multiplied, so repeated enters never compound.
    #[inline]
    pub fn on_hover_enter(&mut self) {
        self.ring_scale = CURSOR_HOVER_SCALE;
    }

    #[inline]
    pub fn on_hover_exit(&mut self) {
        self.ring_scale = CURSOR_REST_SCALE;
    }

    pub fn render_tick(&self) {
        self.dot.place(self.pointer, CURSOR_REST_SCALE);
        self.ring.place(self.pointer, self.ring_scale);
    }

    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[inline]
    pub fn ring_scale(&self) -> f32 {
        self.ring_scale
    }
}
