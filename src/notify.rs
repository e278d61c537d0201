use nodecraft_core::constants::{TOAST_DISMISS_MS, TOAST_ENTER_DELAY_MS, TOAST_EXIT_MS};
use nodecraft_core::notify::{ToastBoard, ToastId, ToastKind};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::dom;

/// DOM side of the toast board.
pub struct Notifier {
    document: web::Document,
    board: RefCell<ToastBoard>,
    nodes: RefCell<Vec<(ToastId, web::Element)>>,
}

impl Notifier {
    pub fn new(document: web::Document) -> Rc<Self> {
        Rc::new(Self {
            document,
            board: RefCell::new(ToastBoard::default()),
            nodes: RefCell::new(Vec::new()),
        })
    }

    pub fn show(self: &Rc<Self>, message: &str, kind: ToastKind) {
        let (id, displaced) = self.board.borrow_mut().show();
        for old in displaced {
            self.remove_node(old);
        }
        let Some(body) = self.document.body() else {
            return;
        };
        let el = match self.document.create_element("div") {
            Ok(el) => el,
            Err(e) => {
                log::error!("[toast] create failed: {:?}", e);
                return;
            }
        };
        el.set_class_name(kind.class_name());
        _ = el.set_attribute("style", &toast_css(kind));
        el.set_text_content(Some(message));
        if let Err(e) = body.append_child(&el) {
            log::error!("[toast] append failed: {:?}", e);
            return;
        }
        self.nodes.borrow_mut().push((id, el.clone()));

        let enter = el.clone();
        dom::set_timeout(TOAST_ENTER_DELAY_MS, move || {
            dom::set_style(&enter, "transform", "translateX(0)");
        });
        let me = self.clone();
        dom::set_timeout(TOAST_DISMISS_MS, move || me.dismiss(id));
        let me = self.clone();
        dom::listen(&el, "click", move |_: web::MouseEvent| me.dismiss(id));
    }

    pub fn dismiss(&self, id: ToastId) {
        if self.board.borrow_mut().dismiss(id) {
            self.remove_node(id);
        }
    }

    pub fn dismiss_all(&self) {
        let ids = self.board.borrow_mut().dismiss_all();
        for id in ids {
            self.remove_node(id);
        }
    }

    fn remove_node(&self, id: ToastId) {
        let el = {
            let mut nodes = self.nodes.borrow_mut();
            match nodes.iter().position(|(n, _)| *n == id) {
                Some(i) => nodes.swap_remove(i).1,
                None => return,
            }
        };
        dom::set_style(&el, "transform", "translateX(100%)");
        dom::set_style(&el, "opacity", "0");
        dom::set_timeout(TOAST_EXIT_MS, move || el.remove());
    }
}

fn toast_css(kind: ToastKind) -> String {
    format!(
        "position: fixed; top: 100px; right: 20px; max-width: 420px; padding: 1.5rem; \
         background: {}; color: white; border-radius: 12px; \
         box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3); z-index: 10000; \
         transform: translateX(100%); transition: all 0.4s cubic-bezier(0.16, 1, 0.3, 1); \
         white-space: pre-line; font-size: 14px; line-height: 1.6; cursor: pointer;",
        kind.color()
    )
}
