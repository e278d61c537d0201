use nodecraft_core::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{FADE_IN_UP_CLASS, REVEAL_SELECTOR};
use crate::dom;

/// Fade sections in as they scroll into view.
pub fn wire_scroll_reveal(document: &web::Document) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    _ = entry.target().class_list().add_1(FADE_IN_UP_CLASS);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    let targets = dom::query_all(document, REVEAL_SELECTOR);
    for el in &targets {
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", targets.len());
    Ok(())
}
