use nodecraft_core::cursor::INTERACTIVE_SELECTOR;
use web_sys as web;

use crate::dom;
use crate::frame::SiteSlot;

/// Cursor listeners. Nothing is attached when the tracker was not created.
pub fn wire_cursor_handlers(document: &web::Document, slot: &SiteSlot) {
    let has_tracker = slot
        .borrow()
        .as_ref()
        .map(|d| d.task().cursor.is_some())
        .unwrap_or(false);
    if !has_tracker {
        return;
    }

    let slot_move = slot.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        if let Some(d) = slot_move.borrow_mut().as_mut() {
            d.task_mut()
                .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
        }
    });

    let targets = dom::query_all(document, INTERACTIVE_SELECTOR);
    for el in &targets {
        let slot_enter = slot.clone();
        dom::listen(el, "mouseenter", move |_: web::MouseEvent| {
            if let Some(c) = slot_enter
                .borrow_mut()
                .as_mut()
                .and_then(|d| d.task_mut().cursor.as_mut())
            {
                c.on_hover_enter();
            }
        });
        let slot_leave = slot.clone();
        dom::listen(el, "mouseleave", move |_: web::MouseEvent| {
            if let Some(c) = slot_leave
                .borrow_mut()
                .as_mut()
                .and_then(|d| d.task_mut().cursor.as_mut())
            {
                c.on_hover_exit();
            }
        });
    }
    log::info!("[cursor] tracking with {} interactive targets", targets.len());
}
