use crate::constants::{TYPING_BLINK_ANIMATION, TYPING_CURSOR_SELECTOR, TYPING_OUTPUT_ID};
use crate::core::{Typewriter, TypingStep, BIO_TEXT};
use crate::dom;
use crate::error::FxError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

struct TypingRun {
    writer: Typewriter,
    output: web::Element,
    caret: Option<web::HtmlElement>,
    rng: StdRng,
}

impl TypingRun {
    /// Apply one step to the page; returns the delay before the next one.
    fn step(&mut self) -> Option<u32> {
        match self.writer.advance(&mut self.rng) {
            TypingStep::Reveal {
                text,
                next_delay_ms,
            } => {
                self.output.set_text_content(Some(&text));
                Some(next_delay_ms)
            }
            TypingStep::Settle { delay_ms } => {
                if let Some(caret) = &self.caret {
                    dom::set_style(caret, "animation", TYPING_BLINK_ANIMATION);
                }
                Some(delay_ms)
            }
            TypingStep::Finish { text } => {
                self.output.set_text_content(Some(&text));
                log::info!(
                    "[typing] done ({}/{} chars)",
                    self.writer.revealed(),
                    self.writer.char_count()
                );
                None
            }
            TypingStep::Done => None,
        }
    }
}

fn schedule(cb: &Closure<dyn FnMut()>, delay_ms: u32) -> Result<(), JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        delay_ms as i32,
    )?;
    Ok(())
}

/// Start the biography reveal. Runs to completion once; there is no way to
/// stop or restart it.
pub fn start(document: &web::Document) -> Result<(), FxError> {
    let output = document
        .get_element_by_id(TYPING_OUTPUT_ID)
        .ok_or(FxError::MissingElement(TYPING_OUTPUT_ID))?;
    let caret = dom::query(document, TYPING_CURSOR_SELECTOR)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if caret.is_none() {
        log::debug!("[typing] no caret element; blink skipped");
    }

    let run = Rc::new(RefCell::new(TypingRun {
        writer: Typewriter::new(BIO_TEXT),
        output,
        caret,
        rng: StdRng::from_entropy(),
    }));

    // One callback, re-armed with each step's delay.
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Some(delay_ms) = run.borrow_mut().step() else {
            return;
        };
        if let Some(cb) = tick_clone.borrow().as_ref() {
            if let Err(e) = schedule(cb, delay_ms) {
                log::error!("[typing] reschedule failed: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = tick.borrow().as_ref() {
        schedule(cb, 0)?;
    }
    Ok(())
}
