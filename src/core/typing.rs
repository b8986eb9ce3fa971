use super::constants::*;
use rand::Rng;

pub const BIO_TEXT: &str = ">PROFILE...\n> CODE NAME:[Error]\n> ROLE:SOFTWARE ENGINEER\n> SPECIALIZATION:FULL-STACK DEVELOPMENT\n> CURRENT MISSION: BUILDING IoT Devices\n> STATUS: [ACTIVE]";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypingStep {
    /// Show `text` now and call again after `next_delay_ms`.
    Reveal { text: String, next_delay_ms: u32 },
    /// Every character is out; start the caret blink and call again after `delay_ms`.
    Settle { delay_ms: u32 },
    /// Show the full text verbatim. No further steps follow.
    Finish { text: String },
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Settling,
    Done,
}

/// Typewriter reveal as an explicit state machine.
///
/// The driver calls [`Typewriter::advance`] once per scheduled callback and
/// re-arms its timer with the returned delay.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    // byte offset after each char, so reveals never split a code point
    ends: Vec<usize>,
    revealed: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let ends = text.char_indices().map(|(i, c)| i + c.len_utf8()).collect();
        Self {
            text,
            ends,
            revealed: 0,
            phase: Phase::Typing,
        }
    }

    #[inline]
    pub fn char_count(&self) -> usize {
        self.ends.len()
    }

    #[inline]
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TypingStep {
        match self.phase {
            Phase::Typing if self.revealed < self.ends.len() => {
                self.revealed += 1;
                let mut text = self.text[..self.ends[self.revealed - 1]].to_string();
                if self.revealed % TYPING_CARET_EVERY == 0 {
                    text.push(TYPING_CARET);
                }
                TypingStep::Reveal {
                    text,
                    next_delay_ms: rng.gen_range(TYPING_DELAY_MIN_MS..TYPING_DELAY_MAX_MS),
                }
            }
            Phase::Typing => {
                self.phase = Phase::Settling;
                TypingStep::Settle {
                    delay_ms: TYPING_SETTLE_MS,
                }
            }
            Phase::Settling => {
                self.phase = Phase::Done;
                TypingStep::Finish {
                    text: self.text.clone(),
                }
            }
            Phase::Done => TypingStep::Done,
        }
    }
}
