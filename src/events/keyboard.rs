use nodecraft_core::nav::MobileMenu;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::dom;
use crate::nav;
use crate::notify::Notifier;
use crate::overlay;

/// Escape closes the showreel, the mobile menu and every toast.
pub fn handle_escape(
    document: &web::Document,
    menu: &Rc<RefCell<MobileMenu>>,
    notifier: &Notifier,
) {
    if overlay::close_showreel(document) {
        log::info!("[keys] closed showreel");
    }
    nav::close_mobile_menu(document, menu);
    notifier.dismiss_all();
}

pub fn wire_global_keydown(
    document: &web::Document,
    menu: Rc<RefCell<MobileMenu>>,
    notifier: Rc<Notifier>,
) {
    let doc = document.clone();
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            handle_escape(&doc, &menu, &notifier);
        }
    });
}
