use nodecraft_core::nav::{active_section, anchor_target, scroll_target, HeaderTracker, MobileMenu};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    ACTIVE_CLASS, HEADER_ID, NAV_LINK_SELECTOR, NAV_MENU_ID, NAV_TOGGLE_ID, SCROLLED_CLASS,
    SECTION_SELECTOR,
};
use crate::dom;

pub fn smooth_scroll_to_section(document: &web::Document, section_id: &str) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(section) = document.get_element_by_id(section_id) else {
        log::warn!("[nav] section not found: {}", section_id);
        return;
    };
    let header_height = document
        .get_element_by_id(HEADER_ID)
        .and_then(|h| h.dyn_into::<web::HtmlElement>().ok())
        .map(|h| h.offset_height() as f64);
    let top = scroll_target(
        section.get_bounding_client_rect().top(),
        window.page_y_offset().unwrap_or(0.0),
        header_height,
    );
    log::info!("[nav] scrolling to {} at {:.0}", section_id, top);
    let opts = web::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

pub fn wire_navigation(document: &web::Document, menu: &Rc<RefCell<MobileMenu>>) {
    let Some(window) = web::window() else {
        return;
    };
    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    for link in &links {
        let doc = document.clone();
        let href = link.get_attribute("href");
        dom::listen(link, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            if let Some(id) = href.as_deref().and_then(anchor_target) {
                smooth_scroll_to_section(&doc, id);
            }
        });
    }

    if let Some(header) = document.get_element_by_id(HEADER_ID) {
        let tracker = RefCell::new(HeaderTracker::new(window.scroll_y().unwrap_or(0.0)));
        let win = window.clone();
        dom::listen_passive(&window, "scroll", move || {
            let look = tracker
                .borrow_mut()
                .on_scroll(win.scroll_y().unwrap_or(0.0));
            _ = header
                .class_list()
                .toggle_with_force(SCROLLED_CLASS, look.scrolled);
            let transform = if look.hidden {
                "translateY(-100%)"
            } else {
                "translateY(0)"
            };
            dom::set_style(&header, "transform", transform);
        });
    }

    let sections = dom::query_all(document, SECTION_SELECTOR);
    dom::listen_passive(&window, "scroll", move || {
        let tops: Vec<(String, f64)> = sections
            .iter()
            .map(|s| (s.id(), s.get_bounding_client_rect().top()))
            .collect();
        let current = active_section(tops.iter().map(|(id, top)| (id.as_str(), *top)));
        for link in &links {
            let target = link.get_attribute("href");
            let is_current = current.is_some()
                && target.as_deref().and_then(anchor_target) == current;
            _ = link.class_list().toggle_with_force(ACTIVE_CLASS, is_current);
        }
    });

    wire_mobile_menu(document, menu);
}

fn wire_mobile_menu(document: &web::Document, menu: &Rc<RefCell<MobileMenu>>) {
    let (Some(toggle), Some(nav_menu)) = (
        document.get_element_by_id(NAV_TOGGLE_ID),
        document.get_element_by_id(NAV_MENU_ID),
    ) else {
        return;
    };
    {
        let menu = menu.clone();
        let doc = document.clone();
        let toggle_el = toggle.clone();
        let nav_menu = nav_menu.clone();
        dom::listen(&toggle, "click", move |_: web::MouseEvent| {
            let open = menu.borrow_mut().toggle();
            show_menu(&doc, &toggle_el, &nav_menu, open);
        });
    }
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let menu = menu.clone();
        let doc = document.clone();
        let toggle = toggle.clone();
        let nav_menu = nav_menu.clone();
        dom::listen(&link, "click", move |_: web::MouseEvent| {
            menu.borrow_mut().close();
            show_menu(&doc, &toggle, &nav_menu, false);
        });
    }
}

/// Close the mobile menu if open. Used by the Escape handler.
pub fn close_mobile_menu(document: &web::Document, menu: &Rc<RefCell<MobileMenu>>) {
    if !menu.borrow_mut().close() {
        return;
    }
    if let (Some(toggle), Some(nav_menu)) = (
        document.get_element_by_id(NAV_TOGGLE_ID),
        document.get_element_by_id(NAV_MENU_ID),
    ) {
        show_menu(document, &toggle, &nav_menu, false);
    }
}

fn show_menu(document: &web::Document, toggle: &web::Element, nav_menu: &web::Element, open: bool) {
    _ = toggle.class_list().toggle_with_force(ACTIVE_CLASS, open);
    _ = nav_menu.class_list().toggle_with_force(ACTIVE_CLASS, open);
    dom::set_body_overflow(document, if open { "hidden" } else { "" });
}
