use crate::constants::*;
use crate::core::{roll_glitch, roll_status_flicker, LinkStatus, NavState};
use crate::dom;
use crate::error::FxError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Nav {
    links: Vec<web::HtmlElement>,
    state: NavState,
    rng: StdRng,
}

impl Nav {
    // Looked up on demand: the processing placeholder temporarily replaces
    // the link's children, including the label.
    fn set_label(&self, index: usize, status: LinkStatus) {
        if let Some(label) = self
            .links
            .get(index)
            .and_then(|l| dom::query_in(l, NAV_STATUS_SELECTOR))
        {
            label.set_text_content(Some(status.label()));
        }
    }

    fn enter(&mut self, index: usize) {
        let status = self.state.enter(index);
        self.set_label(index, status);
        if roll_glitch(&mut self.rng) {
            let link = self.links[index].clone();
            dom::set_style(&link, "text-shadow", GLITCH_SHADOW);
            dom::set_timeout(GLITCH_MS, move || dom::set_style(&link, "text-shadow", "none"));
        }
    }

    fn leave(&mut self, index: usize) {
        let status = self.state.leave(index);
        self.set_label(index, status);
    }

    /// Apply selection and the click pulse. Returns the link and its markup
    /// when a processing placeholder was put in place.
    fn click(&mut self, index: usize) -> Option<(web::HtmlElement, String)> {
        self.state.click(index);
        for (i, link) in self.links.iter().enumerate() {
            _ = link
                .class_list()
                .toggle_with_force(NAV_ACTIVE_CLASS, self.state.is_selected(i));
            self.set_label(i, self.state.status(i));
        }

        let link = self.links[index].clone();
        dom::set_style(&link, "transform", CLICK_PULSE_TRANSFORM);
        let pulsed = link.clone();
        dom::set_timeout(CLICK_PULSE_MS, move || dom::clear_style(&pulsed, "transform"));

        // a re-click mid-placeholder must not capture the placeholder as the original
        if self.state.is_processing(index) {
            return None;
        }
        _ = self.state.begin_processing(index);
        let original = link.inner_html();
        link.set_text_content(Some(PROCESSING_TEXT));
        Some((link, original))
    }

    fn finish_processing(&mut self, index: usize, link: &web::HtmlElement, original: &str) {
        link.set_inner_html(original);
        self.state.finish_processing(index);
        self.set_label(index, self.state.status(index));
    }
}

pub fn init(document: &web::Document) -> Result<(), FxError> {
    let links = dom::query_all_html(document, NAV_LINK_SELECTOR);
    let state = NavState::new(links.len());
    if state.is_empty() {
        log::debug!("[nav] no console links on this page");
    } else {
        log::info!("[nav] {} links", state.len());
    }
    let nav = Rc::new(RefCell::new(Nav {
        state,
        links: links.clone(),
        rng: StdRng::from_entropy(),
    }));

    for (i, link) in links.iter().enumerate() {
        wire_link(&nav, i, link);
    }

    match dom::query(document, SYSTEM_STATUS_SELECTOR) {
        Some(status) => start_status_flicker(status, StdRng::from_entropy()),
        None => log::debug!("[nav] no system status readout"),
    }
    Ok(())
}

fn wire_link(nav: &Rc<RefCell<Nav>>, index: usize, link: &web::HtmlElement) {
    for event in ["mouseenter", "focus"] {
        let nav = nav.clone();
        dom::add_listener(link, event, move |_: web::Event| {
            nav.borrow_mut().enter(index);
        });
    }
    for event in ["mouseleave", "blur"] {
        let nav = nav.clone();
        dom::add_listener(link, event, move |_: web::Event| {
            nav.borrow_mut().leave(index);
        });
    }

    let nav = nav.clone();
    dom::add_listener(link, "click", move |ev: web::MouseEvent| {
        ev.prevent_default();
        let processing = nav.borrow_mut().click(index);
        if let Some((link, original)) = processing {
            let nav = nav.clone();
            dom::set_timeout(PROCESSING_MS, move || {
                nav.borrow_mut().finish_processing(index, &link, &original);
            });
        }
        log::debug!("[nav] selected link {}", index);
    });
}

fn start_status_flicker(status: web::Element, mut rng: StdRng) {
    dom::set_interval(STATUS_FLICKER_INTERVAL_MS, move || {
        let Some(next) = roll_status_flicker(&mut rng) else {
            return;
        };
        let original = status.text_content().unwrap_or_default();
        status.set_text_content(Some(next.label()));
        let status = status.clone();
        dom::set_timeout(STATUS_FLICKER_MS, move || {
            status.set_text_content(Some(&original));
        });
    });
}
