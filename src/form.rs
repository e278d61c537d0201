use nodecraft_core::constants::SUBMIT_SIMULATED_MS;
use nodecraft_core::form::{
    validate_all, validate_field, ContactSubmission, FieldKind, FORM_INVALID_MESSAGE,
    SENDING_LABEL,
};
use nodecraft_core::notify::ToastKind;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    CONTACT_FORM_ID, FIELD_ERROR_CLASS, FIELD_ERROR_COLOR, FORM_CONTROL_SELECTOR,
};
use crate::dom;
use crate::notify::Notifier;

/// Kind and current value of an input, textarea or select.
fn control_value(el: &web::Element) -> Option<(FieldKind, String)> {
    let tag = el.tag_name();
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some((FieldKind::classify(&input.type_(), &tag), input.value()));
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return Some((FieldKind::classify(&area.type_(), &tag), area.value()));
    }
    if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
        return Some((FieldKind::classify(&select.type_(), &tag), select.value()));
    }
    None
}

fn named_value(form: &web::Element, name: &str) -> String {
    form.query_selector(&format!("[name=\"{name}\"]"))
        .ok()
        .flatten()
        .and_then(|el| control_value(&el))
        .map(|(_, v)| v)
        .unwrap_or_default()
}

/// Validate one control, showing its error inline. Returns whether it passed.
fn check_control(document: &web::Document, el: &web::Element) -> bool {
    let Some((kind, value)) = control_value(el) else {
        return true;
    };
    match validate_field(kind, &value) {
        Ok(()) => true,
        Err(e) => {
            show_field_error(document, el, &e.to_string());
            false
        }
    }
}

fn show_field_error(document: &web::Document, field: &web::Element, message: &str) {
    clear_field_error(field);
    dom::set_style(field, "border-color", FIELD_ERROR_COLOR);
    let (Some(parent), Ok(error)) = (field.parent_element(), document.create_element("div"))
    else {
        return;
    };
    error.set_class_name(FIELD_ERROR_CLASS);
    error.set_text_content(Some(message));
    _ = error.set_attribute(
        "style",
        "color: #ff4444; font-size: 0.875rem; margin-top: 0.25rem; opacity: 0; \
         transform: translateY(-10px); transition: all 0.3s ease;",
    );
    if parent.append_child(&error).is_ok() {
        dom::set_timeout(10, move || {
            dom::set_style(&error, "opacity", "1");
            dom::set_style(&error, "transform", "translateY(0)");
        });
    }
}

fn clear_field_error(field: &web::Element) {
    dom::set_style(field, "border-color", "");
    if let Some(parent) = field.parent_element() {
        if let Ok(Some(existing)) = parent.query_selector(&format!(".{FIELD_ERROR_CLASS}")) {
            existing.remove();
        }
    }
}

pub fn wire_contact_form(document: &web::Document, notifier: &Rc<Notifier>) {
    let Some(form) = document.get_element_by_id(CONTACT_FORM_ID) else {
        return;
    };
    for control in dom::query_all_in(&form, FORM_CONTROL_SELECTOR) {
        let doc = document.clone();
        let blurred = control.clone();
        dom::listen(&control, "blur", move |_: web::Event| {
            check_control(&doc, &blurred);
        });
        let edited = control.clone();
        dom::listen(&control, "input", move |_: web::Event| clear_field_error(&edited));
    }

    let doc = document.clone();
    let notifier = notifier.clone();
    let form_el = form.clone();
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        submit(&doc, &form_el, &notifier);
    });
}

fn submit(document: &web::Document, form: &web::Element, notifier: &Rc<Notifier>) {
    let controls = dom::query_all_in(form, FORM_CONTROL_SELECTOR);
    let values: Vec<(FieldKind, String)> = controls
        .iter()
        .map(|c| control_value(c).unwrap_or((FieldKind::Other, String::new())))
        .collect();
    let issues = validate_all(values.iter().map(|(kind, v)| (*kind, v.as_str())));
    for c in &controls {
        clear_field_error(c);
    }
    for (i, err) in &issues {
        if let Some(c) = controls.get(*i) {
            show_field_error(document, c, &err.to_string());
        }
    }
    if !issues.is_empty() {
        notifier.show(FORM_INVALID_MESSAGE, ToastKind::Error);
        return;
    }

    let submission = ContactSubmission {
        first_name: named_value(form, "firstName"),
        last_name: named_value(form, "lastName"),
        email: named_value(form, "email"),
        project_type: named_value(form, "projectType"),
        message: named_value(form, "message"),
    };
    log::info!("[form] sending inquiry ({})", submission.project_type);

    let button = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok());
    let original = button.as_ref().map(|b| b.inner_html()).unwrap_or_default();
    if let Some(b) = &button {
        b.set_inner_html(SENDING_LABEL);
        b.set_disabled(true);
    }

    let notifier = notifier.clone();
    let form = form.clone();
    dom::set_timeout(SUBMIT_SIMULATED_MS, move || {
        if let Some(b) = &button {
            b.set_inner_html(&original);
            b.set_disabled(false);
        }
        notifier.show(&submission.thank_you(), ToastKind::Success);
        if let Some(f) = form.dyn_ref::<web::HtmlFormElement>() {
            f.reset();
        }
        for c in &controls {
            clear_field_error(c);
        }
    });
}
