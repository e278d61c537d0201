use glam::Vec2;
use nodecraft_core::{Glow, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::dom;

/// 2D canvas appended to the particle container, sized to the window.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn create_in(document: &web::Document, container: &web::Element) -> anyhow::Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let surface = Self { canvas, ctx };
        surface.resize(dom::viewport_size());
        Ok(surface)
    }

    pub fn resize(&self, size: Vec2) {
        self.canvas.set_width(size.x.max(0.0) as u32);
        self.canvas.set_height(size.y.max(0.0) as u32);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32, glow: Glow) {
        let ctx = &self.ctx;
        ctx.begin_path();
        _ = ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        let fill = format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha);
        ctx.set_fill_style(&JsValue::from_str(&fill));
        ctx.fill();
        // second pass paints the halo
        ctx.set_shadow_blur(glow.blur as f64);
        ctx.set_shadow_color(glow.color);
        ctx.fill();
        ctx.set_shadow_blur(0.0);
    }
}
