//! Per-character text scramble timelines.
//!
//! A timeline is built once per trigger and advanced one frame at a time by
//! the web layer's animation callback. Each character slot has its own start
//! and end frame; between them it shows a glyph from [`SCRAMBLE_GLYPHS`],
//! re-rolled with a fixed probability each frame.

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::constants::{SCRAMBLE_HOLD_MAX, SCRAMBLE_REROLL_P, SCRAMBLE_START_MAX};

pub const SCRAMBLE_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789/?!@#$%^&*()_+<>αβγδεζηθιλμξρστϒφχψωΔΘΛΞπΣΦΨΩ";

/// What one character slot shows this frame. `None` characters stand for a
/// source or target string shorter than the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrambleCell {
    /// Transition not started; still the source character.
    Waiting(Option<char>),
    /// Mid-transition glyph, rendered in the accent color.
    Glyph(char),
    /// Target character reached, permanently.
    Settled(Option<char>),
}

#[derive(Clone, Debug)]
struct Slot {
    from: Option<char>,
    to: Option<char>,
    start: u32,
    end: u32,
    glyph: Option<char>,
}

#[derive(Clone, Debug)]
pub struct ScrambleTimeline {
    slots: Vec<Slot>,
    frame: u32,
}

impl ScrambleTimeline {
    /// Build a timeline from the currently displayed text to the target.
    pub fn new(from: &str, to: &str, rng: &mut impl Rng) -> Self {
        let from: Vec<char> = from.chars().collect();
        let to: Vec<char> = to.chars().collect();
        let len = from.len().max(to.len());
        let slots = (0..len)
            .map(|i| {
                let start = rng.gen_range(0..SCRAMBLE_START_MAX);
                Slot {
                    from: from.get(i).copied(),
                    to: to.get(i).copied(),
                    start,
                    end: start + rng.gen_range(0..SCRAMBLE_HOLD_MAX),
                    glyph: None,
                }
            })
            .collect();
        Self { slots, frame: 0 }
    }

    /// Advance one frame. Returns the cells to render and whether every
    /// slot has settled.
    pub fn advance(&mut self, rng: &mut impl Rng) -> (Vec<ScrambleCell>, bool) {
        let frame = self.frame;
        let mut settled = 0usize;
        let cells = self
            .slots
            .iter_mut()
            .map(|slot| {
                if frame >= slot.end {
                    settled += 1;
                    ScrambleCell::Settled(slot.to)
                } else if frame >= slot.start {
                    let glyph = match slot.glyph {
                        Some(g) if rng.gen::<f32>() >= SCRAMBLE_REROLL_P => g,
                        _ => {
                            let g = random_glyph(rng);
                            slot.glyph = Some(g);
                            g
                        }
                    };
                    ScrambleCell::Glyph(glyph)
                } else {
                    ScrambleCell::Waiting(slot.from)
                }
            })
            .collect();
        self.frame += 1;
        (cells, settled == self.slots.len())
    }
}

fn random_glyph(rng: &mut impl Rng) -> char {
    SCRAMBLE_GLYPHS.chars().choose(rng).unwrap_or('#')
}
