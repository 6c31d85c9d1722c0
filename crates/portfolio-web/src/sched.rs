//! One-shot timers for the console's staged sequences.
//!
//! Sequences arrive from the core as plain step lists; this module chains
//! them through `setTimeout`. The most recently scheduled timer's handle is
//! parked in a shared slot so an in-flight sequence stays cancellable.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::{StagedSequence, Step};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct TimerHandle {
    id: i32,
}

impl TimerHandle {
    pub fn cancel(&self) {
        if let Some(window) = web::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}

/// Run `task` once after `delay_ms`.
pub fn schedule(delay_ms: i32, task: impl FnOnce() + 'static) -> Option<TimerHandle> {
    let window = web::window()?;
    let closure = Closure::once_into_js(task);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), delay_ms)
        .ok()
        .map(|id| TimerHandle { id })
}

/// Drive a staged sequence to completion, one timer per step. `pending`
/// always holds the handle of the next step due to fire, and is cleared when
/// the sequence runs out.
pub fn run_sequence(
    sequence: StagedSequence,
    pending: Rc<RefCell<Option<TimerHandle>>>,
    on_step: Rc<dyn Fn(&Step)>,
) {
    fire(Rc::new(sequence.steps), 0, pending, on_step);
}

fn fire(
    steps: Rc<Vec<Step>>,
    index: usize,
    pending: Rc<RefCell<Option<TimerHandle>>>,
    on_step: Rc<dyn Fn(&Step)>,
) {
    let Some(step) = steps.get(index) else {
        *pending.borrow_mut() = None;
        return;
    };
    let delay_ms = step.delay_ms as i32;
    let pending_next = pending.clone();
    let handle = schedule(delay_ms, move || {
        on_step(&steps[index]);
        fire(steps, index + 1, pending_next, on_step);
    });
    *pending.borrow_mut() = handle;
}
