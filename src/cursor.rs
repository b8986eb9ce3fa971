use crate::constants::*;
use crate::core::{coords_label, overlay_enabled, target_label, CursorSim, FrameUpdate, Spawned};
use crate::dom;
use crate::error::FxError;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct OverlayElements {
    cursor: web::HtmlElement,
    target: web::HtmlElement,
    scan_line: web::HtmlElement,
    crosshair: web::HtmlElement,
    hud: web::HtmlElement,
    hud_coords: Option<web::Element>,
    hud_target: Option<web::Element>,
}

pub struct Overlay {
    sim: CursorSim<StdRng>,
    els: OverlayElements,
    document: web::Document,
    body: web::HtmlElement,
    // one node per particle pool slot
    particles: Vec<Option<web::HtmlElement>>,
    current_target: Option<web::Element>,
}

pub fn init(document: &web::Document) -> Result<(), FxError> {
    let window = web::window().ok_or(FxError::MissingElement("window"))?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    if !overlay_enabled(width) {
        log::info!("[cursor] viewport {}px too narrow; overlay disabled", width);
        return Ok(());
    }
    let body = document.body().ok_or(FxError::MissingElement("body"))?;
    let els = create_elements(document, &body)?;
    dom::set_style(&body, "cursor", "none");

    let sim = CursorSim::new(StdRng::from_entropy());
    let slots = sim.pool().capacity();
    let overlay = Rc::new(RefCell::new(Overlay {
        sim,
        els,
        document: document.clone(),
        body,
        particles: vec![None; slots],
        current_target: None,
    }));

    wire_pointermove(&window, overlay.clone());
    start_loop(overlay);
    log::info!("[cursor] overlay active");
    Ok(())
}

fn create_elements(
    document: &web::Document,
    body: &web::HtmlElement,
) -> Result<OverlayElements, FxError> {
    let cursor = dom::create_div(document, CURSOR_CLASS)?;
    let target = dom::create_div(document, TARGET_CLASS)?;
    let scan_line = dom::create_div(document, SCAN_LINE_CLASS)?;
    let crosshair = dom::create_div(document, CROSSHAIR_CLASS)?;
    let hud = dom::create_div(document, HUD_CLASS)?;
    hud.set_inner_html(HUD_MARKUP);

    for el in [&cursor, &target, &scan_line, &crosshair, &hud] {
        // overlay nodes must never be the hit-test result
        dom::set_style(el, "pointer-events", "none");
        body.append_child(el)?;
    }

    Ok(OverlayElements {
        hud_coords: dom::query_in(&hud, ".hud-coords"),
        hud_target: dom::query_in(&hud, ".hud-target"),
        cursor,
        target,
        scan_line,
        crosshair,
        hud,
    })
}

fn wire_pointermove(window: &web::Window, overlay: Rc<RefCell<Overlay>>) {
    dom::add_listener(window, "pointermove", move |ev: web::PointerEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        overlay.borrow_mut().pointer_moved(pos);
    });
}

impl Overlay {
    fn pointer_moved(&mut self, pos: Vec2) {
        let spawned = self.sim.pointer_moved(pos);

        if let Some(el) = &self.els.hud_coords {
            el.set_text_content(Some(&coords_label(pos)));
        }

        let hovered = self.document.element_from_point(pos.x, pos.y);
        if hovered != self.current_target {
            if let Some(el) = &self.els.hud_target {
                let tag = hovered.as_ref().map(|h| h.tag_name());
                el.set_text_content(Some(&target_label(tag.as_deref())));
            }
            self.current_target = hovered;
        }

        match spawned {
            Some(s) => {
                if let Err(e) = self.attach_particle(s) {
                    log::warn!("[cursor] particle node: {}", e);
                }
            }
            None if self.sim.pool().is_full() => {
                log::debug!(
                    "[cursor] particle pool full ({} live); spawn dropped",
                    self.sim.pool().live()
                );
            }
            None => {}
        }
    }

    fn attach_particle(&mut self, spawned: Spawned) -> Result<(), FxError> {
        let Spawned { slot, particle } = spawned;
        let el = dom::create_div(&self.document, PARTICLE_CLASS)?;
        el.style().set_css_text(&format!(
            "{PARTICLE_BASE_STYLE} width: {size}px; height: {size}px; left: {x}px; top: {y}px;",
            size = particle.size,
            x = particle.pos.x,
            y = particle.pos.y,
        ));
        self.body.append_child(&el)?;
        if let Some(stale) = self.particles.get_mut(slot).and_then(|s| s.replace(el)) {
            stale.remove();
        }
        Ok(())
    }

    fn frame(&mut self) {
        let FrameUpdate { layout, particles } = self.sim.step();
        dom::place(&self.els.cursor, layout.dot);
        dom::place(&self.els.target, layout.ring);
        dom::place(&self.els.scan_line, layout.scan);
        dom::place(&self.els.crosshair, layout.crosshair);
        dom::place(&self.els.hud, layout.hud);

        for p in &particles {
            let Some(entry) = self.particles.get_mut(p.slot) else {
                continue;
            };
            if p.expired {
                if let Some(el) = entry.take() {
                    el.remove();
                }
            } else if let Some(el) = entry {
                dom::place(el, p.pos);
                dom::set_style(el, "opacity", &format!("{:.3}", p.opacity));
            }
        }
    }
}

pub fn start_loop(overlay: Rc<RefCell<Overlay>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        overlay.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
