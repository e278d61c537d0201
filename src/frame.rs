use nodecraft_core::{AppState, FrameDriver};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom::DomElement;
use crate::render::CanvasSurface;

pub type Site = AppState<CanvasSurface, DomElement>;

/// The page's single driver. `None` once the page has been torn down.
pub type SiteSlot = Rc<RefCell<Option<FrameDriver<Site>>>>;

pub fn start_loop(slot: SiteSlot) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let running = match slot.borrow_mut().as_mut() {
            Some(driver) => driver.tick(),
            None => false,
        };
        if !running {
            log::info!("[frame] loop stopped");
            return;
        }
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}

/// Stop the loop and drop the state when the page is hidden for good.
pub fn wire_teardown(slot: SiteSlot) {
    if let Some(window) = web::window() {
        crate::dom::listen(&window, "pagehide", move |ev: web::Event| {
            // bfcache restores keep the page alive
            if js_sys::Reflect::get(&ev, &"persisted".into())
                .ok()
                .and_then(|v| v.as_bool())
                .unwrap_or(false)
            {
                return;
            }
            if let Some(driver) = slot.borrow_mut().take() {
                log::info!("[frame] {} frames rendered", driver.frames());
                driver.into_task().teardown();
            }
        });
    }
}
