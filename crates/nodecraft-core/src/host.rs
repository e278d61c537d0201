//! Capabilities the core consumes from its host.
//!
//! The browser front-end implements these over `web-sys`; tests substitute
//! in-memory fakes so the particle and cursor logic runs without a page.

use glam::Vec2;

use crate::constants::{LOW_POWER_CORE_THRESHOLD, SMALL_VIEWPORT_MAX_WIDTH};

/// Snapshot of the host taken once at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostEnv {
    pub viewport: Vec2,
    /// Logical processors reported by the host; `0` when unknown.
    pub hardware_concurrency: u32,
}

impl HostEnv {
    pub fn new(width: f32, height: f32, hardware_concurrency: u32) -> Self {
        Self {
            viewport: Vec2::new(width, height),
            hardware_concurrency,
        }
    }

    #[inline]
    pub fn is_small_viewport(&self) -> bool {
        self.viewport.x <= SMALL_VIEWPORT_MAX_WIDTH
    }

    /// Unknown core counts are treated as capable hardware.
    #[inline]
    pub fn high_performance(&self) -> bool {
        self.hardware_concurrency == 0 || self.hardware_concurrency >= LOW_POWER_CORE_THRESHOLD
    }
}

/// Glow halo drawn behind a filled circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: &'static str,
}

/// Immediate-mode 2D drawing surface.
pub trait Surface {
    fn clear(&mut self, size: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32, glow: Glow);
}

/// A positioned node mirrored to the pointer.
pub trait Indicator {
    fn place(&self, at: Vec2, scale: f32);
}

/// Visual-tree lookup.
pub trait ElementFinder {
    type Element;
    type Surface: Surface;

    fn by_id(&self, id: &str) -> Option<Self::Element>;
    fn child(&self, parent: &Self::Element, selector: &str) -> Option<Self::Element>;
    /// Attach a drawing surface to the container with the given id.
    fn surface_in(&self, container_id: &str) -> Option<Self::Surface>;
}
