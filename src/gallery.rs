use nodecraft_core::constants::{PORTFOLIO_HIDE_DELAY_MS, PORTFOLIO_SHOW_DELAY_MS};
use nodecraft_core::gallery::{
    category_message, service_details, Filter, FilterEpoch, ProjectCard,
};
use nodecraft_core::notify::ToastKind;
use std::rc::Rc;
use web_sys as web;

use crate::constants::{
    ACTIVE_CLASS, CATEGORY_ITEM_SELECTOR, FILTER_BUTTON_SELECTOR, PLAY_BUTTON_ID,
    PORTFOLIO_ITEM_SELECTOR, SERVICE_CARD_SELECTOR, VIDEO_CONTAINER_SELECTOR,
};
use crate::dom;
use crate::frame::SiteSlot;
use crate::notify::Notifier;
use crate::overlay;

pub fn wire_showreel(document: &web::Document, notifier: &Rc<Notifier>) {
    {
        let doc = document.clone();
        let notifier = notifier.clone();
        dom::add_click_listener(document, PLAY_BUTTON_ID, move |ev| {
            ev.prevent_default();
            ev.stop_propagation();
            overlay::open_showreel(&doc, &notifier);
        });
    }
    if let Ok(Some(container)) = document.query_selector(VIDEO_CONTAINER_SELECTOR) {
        let doc = document.clone();
        let notifier = notifier.clone();
        dom::listen(&container, "click", move |_: web::MouseEvent| {
            overlay::open_showreel(&doc, &notifier);
        });
    }

    let items = Rc::new(dom::query_all(document, CATEGORY_ITEM_SELECTOR));
    for item in items.iter() {
        let all = items.clone();
        let me = item.clone();
        let notifier = notifier.clone();
        dom::listen(item, "click", move |_: web::MouseEvent| {
            set_single_active(&all, &me);
            let filter = Filter::parse(&me.get_attribute("data-category").unwrap_or_default());
            log::info!("[showreel] category {}", filter.as_str());
            notifier.show(&category_message(&filter), ToastKind::Info);
        });
    }
}

pub fn wire_services(document: &web::Document, notifier: &Rc<Notifier>) {
    let cards = dom::query_all(document, SERVICE_CARD_SELECTOR);
    log::info!("[services] {} cards", cards.len());
    for card in cards {
        let service = card.get_attribute("data-service").unwrap_or_default();
        let notifier = notifier.clone();
        dom::listen(&card, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            match service_details(&service) {
                Some(details) => notifier.show(&details.message(), ToastKind::Info),
                None => log::debug!("[services] unknown service {:?}", service),
            }
        });
        let enter = card.clone();
        dom::listen(&card, "mouseenter", move |_: web::MouseEvent| {
            emphasize_service_card(&enter, true)
        });
        let leave = card.clone();
        dom::listen(&card, "mouseleave", move |_: web::MouseEvent| {
            emphasize_service_card(&leave, false)
        });
    }
}

fn emphasize_service_card(card: &web::Element, hover: bool) {
    if let Ok(Some(icon)) = card.query_selector(".service-icon") {
        let t = if hover {
            "scale(1.1) rotate(5deg)"
        } else {
            "scale(1) rotate(0deg)"
        };
        dom::set_style(&icon, "transform", t);
    }
    if let Ok(Some(glow)) = card.query_selector(".service-glow") {
        dom::set_style(&glow, "opacity", if hover { "0.6" } else { "0" });
    }
}

pub fn wire_portfolio(document: &web::Document, slot: &SiteSlot, notifier: &Rc<Notifier>) {
    let buttons = Rc::new(dom::query_all(document, FILTER_BUTTON_SELECTOR));
    let epoch = FilterEpoch::default();
    for button in buttons.iter() {
        let all = buttons.clone();
        let me = button.clone();
        let doc = document.clone();
        let slot = slot.clone();
        let epoch = epoch.clone();
        dom::listen(button, "click", move |_: web::MouseEvent| {
            let filter = Filter::parse(&me.get_attribute("data-filter").unwrap_or_default());
            let changed = match slot.borrow_mut().as_mut() {
                Some(d) => d.task_mut().select_filter(filter.clone()),
                None => true,
            };
            if changed {
                apply_portfolio_filter(&doc, &filter, &epoch);
            }
            set_single_active(&all, &me);
        });
    }

    for item in dom::query_all(document, PORTFOLIO_ITEM_SELECTOR) {
        let notifier = notifier.clone();
        let me = item.clone();
        dom::listen(&item, "click", move |_: web::MouseEvent| {
            let card = ProjectCard {
                title: dom::text_of(&me, ".portfolio-content h3"),
                client: dom::text_of(&me, ".portfolio-content p"),
                category: dom::text_of(&me, ".portfolio-category"),
            };
            notifier.show(&card.message(), ToastKind::Info);
        });
    }
}

/// Delayed steps check the epoch so a later click always has the last word.
fn apply_portfolio_filter(document: &web::Document, filter: &Filter, epoch: &FilterEpoch) {
    log::info!("[portfolio] filter {}", filter.as_str());
    let ticket = epoch.advance();
    for item in dom::query_all(document, PORTFOLIO_ITEM_SELECTOR) {
        let category = item.get_attribute("data-category");
        dom::set_style(&item, "opacity", "0");
        dom::set_style(&item, "transform", "scale(0.8)");
        let epoch = epoch.clone();
        if filter.shows(category.as_deref()) {
            dom::set_style(&item, "display", "block");
            dom::set_timeout(PORTFOLIO_SHOW_DELAY_MS, move || {
                if epoch.is_current(ticket) {
                    dom::set_style(&item, "opacity", "1");
                    dom::set_style(&item, "transform", "scale(1)");
                }
            });
        } else {
            dom::set_timeout(PORTFOLIO_HIDE_DELAY_MS, move || {
                if epoch.is_current(ticket) {
                    dom::set_style(&item, "display", "none");
                }
            });
        }
    }
}

fn set_single_active(all: &[web::Element], active: &web::Element) {
    for el in all {
        _ = el.class_list().remove_1(ACTIVE_CLASS);
    }
    _ = active.class_list().add_1(ACTIVE_CLASS);
}
