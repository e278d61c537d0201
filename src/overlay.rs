use nodecraft_core::constants::{
    LOADING_FALLBACK_MS, LOADING_HIDE_DELAY_MS, LOADING_REMOVE_DELAY_MS, LOADING_TICK_MS,
    MODAL_FADE_MS, SHOWREEL_TOAST_DELAY_MS,
};
use nodecraft_core::gallery::SHOWREEL_LOADED_MESSAGE;
use nodecraft_core::notify::ToastKind;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

use crate::constants::{
    FADE_OUT_CLASS, LOADING_PROGRESS_SELECTOR, LOADING_SCREEN_ID, VIDEO_MODAL_SELECTOR,
};
use crate::dom;
use crate::frame::SiteSlot;
use crate::hero;
use crate::notify::Notifier;

/// Drive the simulated loading bar, with a fallback timer in case it stalls.
pub fn run_loading_screen(document: &web::Document, slot: &SiteSlot) {
    if document.get_element_by_id(LOADING_SCREEN_ID).is_none() {
        log::debug!("[loading] no loading screen");
        return;
    }
    let bar = document.query_selector(LOADING_PROGRESS_SELECTOR).ok().flatten();

    let interval: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let interval_tick = interval.clone();
    let slot_tick = slot.clone();
    let doc_tick = document.clone();
    let mut rng = rand::thread_rng();
    let id = dom::set_interval(LOADING_TICK_MS, move || {
        let (progress, complete) = match slot_tick.borrow_mut().as_mut() {
            Some(d) => {
                let loader = &mut d.task_mut().loader;
                (loader.advance(&mut rng), loader.is_complete())
            }
            None => (100.0, true),
        };
        if let Some(bar) = &bar {
            dom::set_style(bar, "width", &format!("{}%", progress));
        }
        if complete {
            if let Some(id) = interval_tick.take() {
                dom::clear_interval(id);
            }
            let slot_hide = slot_tick.clone();
            let doc_hide = doc_tick.clone();
            dom::set_timeout(LOADING_HIDE_DELAY_MS, move || {
                hide_loading_screen(&doc_hide, &slot_hide)
            });
        }
    });
    interval.set(id);

    let slot_fallback = slot.clone();
    let doc_fallback = document.clone();
    dom::set_timeout(LOADING_FALLBACK_MS, move || {
        hide_loading_screen(&doc_fallback, &slot_fallback)
    });
}

/// Fade the loading screen out once, then start the hero sequence.
pub fn hide_loading_screen(document: &web::Document, slot: &SiteSlot) {
    let Some(screen) = document.get_element_by_id(LOADING_SCREEN_ID) else {
        return;
    };
    let first = slot
        .borrow_mut()
        .as_mut()
        .map(|d| d.task_mut().loader.mark_loaded())
        .unwrap_or(false);
    if !first {
        return;
    }
    log::info!("[loading] done");
    _ = screen.class_list().add_1(FADE_OUT_CLASS);

    let doc = document.clone();
    dom::set_timeout(LOADING_HIDE_DELAY_MS, move || {
        hero::start_hero_sequence(&doc);
        hero::start_stats_counters(&doc);
    });
    dom::set_timeout(LOADING_REMOVE_DELAY_MS, move || screen.remove());
}

const SHOWREEL_MARKUP: &str = r#"<div class="modal-overlay" style="position: fixed; inset: 0; background: rgba(0, 0, 0, 0.95); display: flex; align-items: center; justify-content: center; z-index: 10000; opacity: 0; transition: opacity 0.3s ease;">
  <div class="modal-content" style="position: relative; width: 90%; max-width: 1200px; aspect-ratio: 16/9; background: linear-gradient(135deg, #0a0a0a, #1a1a1a); border-radius: 16px; transform: scale(0.9); transition: transform 0.3s ease; border: 1px solid rgba(0, 217, 255, 0.3); display: flex; flex-direction: column; align-items: center; justify-content: center; color: white; text-align: center; padding: 3rem;">
    <h2 style="color: #00d9ff;">Node Craft VFX Showreel</h2>
    <p>Experience our award-winning visual effects work across film, television, and digital media</p>
    <button class="close-btn" style="position: absolute; top: 1.5rem; right: 1.5rem; width: 45px; height: 45px; border-radius: 50%; cursor: pointer;">×</button>
  </div>
</div>"#;

pub fn open_showreel(document: &web::Document, notifier: &Rc<Notifier>) {
    if document.query_selector(VIDEO_MODAL_SELECTOR).ok().flatten().is_some() {
        return;
    }
    let (Some(body), Ok(modal)) = (document.body(), document.create_element("div")) else {
        return;
    };
    log::info!("[showreel] opening");
    modal.set_class_name("video-modal");
    modal.set_inner_html(SHOWREEL_MARKUP);
    if body.append_child(&modal).is_err() {
        return;
    }
    dom::set_body_overflow(document, "hidden");

    let opening = modal.clone();
    dom::set_timeout(10, move || set_modal_open(&opening, true));

    if let Ok(Some(close)) = modal.query_selector(".close-btn") {
        let doc = document.clone();
        dom::listen(&close, "click", move |_: web::MouseEvent| {
            close_showreel(&doc);
        });
    }
    if let Ok(Some(backdrop)) = modal.query_selector(".modal-overlay") {
        let doc = document.clone();
        dom::listen(&backdrop, "click", move |ev: web::MouseEvent| {
            if ev.target() == ev.current_target() {
                close_showreel(&doc);
            }
        });
    }

    let notifier = notifier.clone();
    dom::set_timeout(SHOWREEL_TOAST_DELAY_MS, move || {
        notifier.show(SHOWREEL_LOADED_MESSAGE, ToastKind::Success)
    });
}

/// Returns whether a modal was open.
pub fn close_showreel(document: &web::Document) -> bool {
    let Some(modal) = document.query_selector(VIDEO_MODAL_SELECTOR).ok().flatten() else {
        return false;
    };
    // a closing modal is renamed so a second close is a no-op
    modal.set_class_name("video-modal-closing");
    set_modal_open(&modal, false);
    let doc = document.clone();
    dom::set_timeout(MODAL_FADE_MS, move || {
        modal.remove();
        dom::set_body_overflow(&doc, "");
    });
    true
}

fn set_modal_open(modal: &web::Element, open: bool) {
    let overlay = modal.query_selector(".modal-overlay").ok().flatten();
    let content = modal.query_selector(".modal-content").ok().flatten();
    if let (Some(overlay), Some(content)) = (overlay, content) {
        dom::set_style(&overlay, "opacity", if open { "1" } else { "0" });
        dom::set_style(
            &content,
            "transform",
            if open { "scale(1)" } else { "scale(0.9)" },
        );
    }
}
