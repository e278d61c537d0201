#![cfg(target_arch = "wasm32")]
use nodecraft_core::nav::MobileMenu;
use nodecraft_core::{AppState, FrameDriver, HostEnv};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod form;
mod frame;
mod gallery;
mod hero;
mod nav;
mod notify;
mod overlay;
mod render;
mod reveal;

fn host_env() -> HostEnv {
    let viewport = dom::viewport_size();
    let cores = web::window()
        .map(|w| w.navigator().hardware_concurrency())
        .unwrap_or(0.0);
    HostEnv::new(viewport.x, viewport.y, cores as u32)
}

fn wire_resize(slot: &frame::SiteSlot) {
    let Some(window) = web::window() else {
        return;
    };
    let slot = slot.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        let size = dom::viewport_size();
        if let Some(d) = slot.borrow_mut().as_mut() {
            let state = d.task_mut();
            state.resize(size);
            if let Some(field) = &state.particles {
                field.surface().resize(size);
            }
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("nodecraft-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Scroll helper kept on `window` for inline handlers in the markup.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(section_id: &str) {
    if let Some(doc) = dom::window_document() {
        nav::smooth_scroll_to_section(&doc, section_id);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let closure = Closure::once(move |_: web::Event| {
            if let Err(e) = setup(&doc) {
                log::error!("setup error: {:?}", e);
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        closure.forget();
        return Ok(());
    }
    setup(&document)
}

fn setup(document: &web::Document) -> anyhow::Result<()> {
    log::info!("[setup] initializing site");
    let finder = dom::WebFinder {
        document: document.clone(),
    };
    let state: frame::Site = AppState::initialize(host_env(), &finder, &mut rand::thread_rng());
    let needs_loop = state.needs_frame_loop();
    let handle = state.handle();
    let slot: frame::SiteSlot = Rc::new(RefCell::new(Some(FrameDriver::new(state, handle))));

    let notifier = notify::Notifier::new(document.clone());
    let menu = Rc::new(RefCell::new(MobileMenu::default()));

    overlay::run_loading_screen(document, &slot);
    events::wire_cursor_handlers(document, &slot);
    nav::wire_navigation(document, &menu);
    wire_resize(&slot);
    if let Err(e) = reveal::wire_scroll_reveal(document) {
        log::warn!("[reveal] unavailable: {:?}", e);
    }
    hero::wire_hero_buttons(document);
    gallery::wire_showreel(document, &notifier);
    gallery::wire_services(document, &notifier);
    gallery::wire_portfolio(document, &slot, &notifier);
    form::wire_contact_form(document, &notifier);
    events::wire_global_keydown(document, menu, notifier);

    if needs_loop {
        frame::start_loop(slot.clone());
    }
    frame::wire_teardown(slot);
    log::info!("[setup] site ready");
    Ok(())
}
