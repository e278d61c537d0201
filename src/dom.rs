use glam::Vec2;
use nodecraft_core::{ElementFinder, Indicator};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render::CanvasSurface;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Window inner size in CSS pixels; zero when unavailable.
pub fn viewport_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Vec2::new(px(w.inner_width()), px(w.inner_height()))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        listen(&el, "click", handler);
    }
}

/// Attach a handler for the lifetime of the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`listen`], registered as a passive listener.
pub fn listen_passive(target: &web::EventTarget, event: &str, handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        .ok()
}

pub fn set_interval(ms: i32, f: impl FnMut() + 'static) -> Option<i32> {
    let window = web::window()?;
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )
        .ok();
    closure.forget();
    id
}

pub fn clear_interval(id: i32) {
    if let Some(w) = web::window() {
        w.clear_interval_with_handle(id);
    }
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    match root.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .collect(),
        Err(e) => {
            log::warn!("[dom] bad selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    match root.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .collect(),
        Err(_) => Vec::new(),
    }
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        _ = h.style().set_property(property, value);
    }
}

#[inline]
pub fn set_body_overflow(document: &web::Document, value: &str) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("overflow", value);
    }
}

pub fn text_of(root: &web::Element, selector: &str) -> Option<String> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
}

/// An element positioned with a CSS transform.
#[derive(Clone)]
pub struct DomElement(pub web::Element);

impl Indicator for DomElement {
    fn place(&self, at: Vec2, scale: f32) {
        let transform = if scale == 1.0 {
            format!("translate({}px, {}px)", at.x, at.y)
        } else {
            format!("translate({}px, {}px) scale({})", at.x, at.y, scale)
        };
        set_style(&self.0, "transform", &transform);
    }
}

/// Element lookup against the live document.
pub struct WebFinder {
    pub document: web::Document,
}

impl ElementFinder for WebFinder {
    type Element = DomElement;
    type Surface = CanvasSurface;

    fn by_id(&self, id: &str) -> Option<DomElement> {
        self.document.get_element_by_id(id).map(DomElement)
    }

    fn child(&self, parent: &DomElement, selector: &str) -> Option<DomElement> {
        parent.0.query_selector(selector).ok().flatten().map(DomElement)
    }

    fn surface_in(&self, container_id: &str) -> Option<CanvasSurface> {
        let container = self.document.get_element_by_id(container_id)?;
        match CanvasSurface::create_in(&self.document, &container) {
            Ok(s) => Some(s),
            Err(e) => {
                log::error!("[particles] canvas setup failed: {:?}", e);
                None
            }
        }
    }
}
