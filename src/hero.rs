use nodecraft_core::constants::{HERO_STAGGER_MS, STATS_TICK_MS};
use nodecraft_core::hero::{StatCounter, HERO_SEQUENCE, SHOWREEL_SECTION_ID};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

use crate::constants::{FADE_IN_UP_CLASS, HERO_CTA_CLASS, HERO_CTA_SELECTOR, STAT_SELECTOR};
use crate::dom;
use crate::nav;

pub fn start_hero_sequence(document: &web::Document) {
    for (i, selector) in HERO_SEQUENCE.iter().enumerate() {
        if let Ok(Some(el)) = document.query_selector(selector) {
            dom::set_timeout(i as i32 * HERO_STAGGER_MS, move || {
                _ = el.class_list().add_1(FADE_IN_UP_CLASS);
            });
        }
    }
}

pub fn start_stats_counters(document: &web::Document) {
    for stat in dom::query_all(document, STAT_SELECTOR) {
        let counter = RefCell::new(StatCounter::from_attr(
            stat.get_attribute("data-count").as_deref(),
        ));
        let interval: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let interval_tick = interval.clone();
        let id = dom::set_interval(STATS_TICK_MS, move || {
            let mut c = counter.borrow_mut();
            let done = c.tick();
            stat.set_text_content(Some(&c.label()));
            if done {
                if let Some(id) = interval_tick.take() {
                    dom::clear_interval(id);
                }
            }
        });
        interval.set(id);
    }
}

/// Hero call-to-action buttons scroll to their `data-target`; plain
/// `.hero-cta` buttons go to the showreel.
pub fn wire_hero_buttons(document: &web::Document) {
    for button in dom::query_all(document, HERO_CTA_SELECTOR) {
        let target = button.get_attribute("data-target").or_else(|| {
            button
                .class_list()
                .contains(HERO_CTA_CLASS)
                .then(|| SHOWREEL_SECTION_ID.to_string())
        });
        let Some(target) = target else {
            continue;
        };
        let doc = document.clone();
        dom::listen(&button, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            log::info!("[hero] cta -> {}", target);
            nav::smooth_scroll_to_section(&doc, &target);
        });
    }
}
