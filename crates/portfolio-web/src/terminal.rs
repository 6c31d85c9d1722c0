//! The in-page developer console: transcript, input handling, and execution
//! of the effects the core evaluator hands back.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use glam::Vec2;
use portfolio_core::{
    console, Command, Effect, Effects, FieldParams, History, Line, LineKind, Palette,
    ParticleField, Session, StagedSequence, Step, StepAction,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{dom, sched, theme};

// Focus lands after the unhide transition has started.
const FOCUS_DELAY_MS: i32 = 100;

const HIDDEN_CLASS: &str = "console-hidden";
const MOBILE_TOGGLE_ID: &str = "console-mobile-toggle";

pub struct Console {
    document: web::Document,
    root: web::Element,
    input: web::HtmlInputElement,
    transcript: web::Element,
    canvas: web::HtmlCanvasElement,
    session: Session,
    history: History,
    params: Rc<RefCell<FieldParams>>,
    palette: Rc<RefCell<Palette>>,
    field: Rc<RefCell<ParticleField>>,
    pending_timer: Rc<RefCell<Option<sched::TimerHandle>>>,
    focus_timer: Option<sched::TimerHandle>,
    rng: StdRng,
}

impl Console {
    pub fn wire(
        document: &web::Document,
        canvas: web::HtmlCanvasElement,
        params: Rc<RefCell<FieldParams>>,
        palette: Rc<RefCell<Palette>>,
        field: Rc<RefCell<ParticleField>>,
    ) -> anyhow::Result<Rc<RefCell<Console>>> {
        let root = document
            .get_element_by_id("developer-console")
            .ok_or_else(|| anyhow!("missing #developer-console"))?;
        let input = document
            .get_element_by_id("console-input")
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
            .ok_or_else(|| anyhow!("missing #console-input"))?;
        let transcript = document
            .get_element_by_id("console-history")
            .ok_or_else(|| anyhow!("missing #console-history"))?;

        let console = Rc::new(RefCell::new(Console {
            document: document.clone(),
            root,
            input,
            transcript,
            canvas,
            session: Session::default(),
            history: History::new(),
            params,
            palette,
            field,
            pending_timer: Rc::new(RefCell::new(None)),
            focus_timer: None,
            rng: StdRng::from_entropy(),
        }));
        Self::wire_input(&console);
        Self::wire_mobile_toggle(&console);
        Ok(console)
    }

    fn wire_input(console: &Rc<RefCell<Console>>) {
        let input = console.borrow().input.clone();
        let console = console.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if console.borrow().is_hidden() {
                return;
            }
            match ev.key().as_str() {
                "Enter" => Console::submit(&console),
                "ArrowUp" => {
                    ev.prevent_default();
                    let mut c = console.borrow_mut();
                    let recalled = c.history.recall_previous().map(str::to_owned);
                    if let Some(entry) = recalled {
                        c.input.set_value(&entry);
                    }
                }
                "ArrowDown" => {
                    ev.prevent_default();
                    let mut c = console.borrow_mut();
                    let recalled = c.history.recall_next().map(str::to_owned);
                    if let Some(entry) = recalled {
                        c.input.set_value(&entry);
                    }
                }
                _ => {}
            }
        }) as Box<dyn FnMut(_)>);
        let _ = input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn wire_mobile_toggle(console: &Rc<RefCell<Console>>) {
        let document = console.borrow().document.clone();
        let console = console.clone();
        dom::add_click_listener(&document, MOBILE_TOGGLE_ID, move || Console::toggle(&console));
    }

    fn is_hidden(&self) -> bool {
        self.root.class_list().contains(HIDDEN_CLASS)
    }

    /// Flip visibility; focus the input when opening, blur when closing.
    /// An in-flight staged sequence keeps running either way.
    pub fn toggle(console: &Rc<RefCell<Console>>) {
        let (root, input, document) = {
            let c = console.borrow();
            (c.root.clone(), c.input.clone(), c.document.clone())
        };
        let hidden = root.class_list().toggle(HIDDEN_CLASS).unwrap_or(true);
        if hidden {
            // Closing within the focus delay cancels the pending focus, so
            // a hidden input never steals it.
            if let Some(timer) = console.borrow_mut().focus_timer.take() {
                timer.cancel();
            }
            let _ = input.blur();
        } else {
            console.borrow_mut().focus_timer = sched::schedule(FOCUS_DELAY_MS, move || {
                let _ = input.focus();
            });
        }
        if let Some(button) = dom::html_element_by_id(&document, MOBILE_TOGGLE_ID) {
            let background = if hidden { "var(--primary)" } else { "#fff" };
            let _ = button.style().set_property("background", background);
        }
    }

    fn submit(console: &Rc<RefCell<Console>>) {
        let effects: Effects = {
            let mut guard = console.borrow_mut();
            let c = &mut *guard;
            let raw = c.input.value();
            let line = raw.trim().to_lowercase();
            c.log_line(&Line::command(format!("] {line}")));
            if line.is_empty() {
                return;
            }
            c.history.push(&line);
            let parsed = Command::parse(&line);
            let surface = Vec2::new(c.canvas.width() as f32, c.canvas.height() as f32);
            let effects = {
                let mut params = c.params.borrow_mut();
                console::eval(&parsed, &mut c.session, &mut params, surface, &mut c.rng)
            };
            c.input.set_value("");
            effects
        };
        Console::run_effects(console, effects);
    }

    fn run_effects(console: &Rc<RefCell<Console>>, effects: Effects) {
        for effect in effects {
            match effect {
                Effect::Print(line) => console.borrow().log_line(&line),
                Effect::ClearTranscript => console.borrow().transcript.set_inner_html(""),
                Effect::ScrollTo(section) => {
                    let document = console.borrow().document.clone();
                    dom::scroll_to_section(&document, section.anchor());
                }
                Effect::RebuildField => {
                    let mut guard = console.borrow_mut();
                    let c = &mut *guard;
                    let params = *c.params.borrow();
                    let palette = *c.palette.borrow();
                    c.field.borrow_mut().populate(&params, &palette, &mut c.rng);
                }
                Effect::ApplyColor(value) => Console::apply_color(console, &value),
                Effect::Begin(sequence) => Console::run_sequence(console, sequence),
            }
        }
    }

    fn apply_color(console: &Rc<RefCell<Console>>, value: &str) {
        let document = console.borrow().document.clone();
        theme::set_primary(&document, value);
        match dom::computed_color_rgb(&document, value) {
            Some(rgb) => {
                let c = console.borrow();
                c.palette.borrow_mut().base = rgb;
                c.field.borrow_mut().retint(rgb);
            }
            None => log::warn!("[console] could not resolve color {value:?}"),
        }
    }

    fn run_sequence(console: &Rc<RefCell<Console>>, sequence: StagedSequence) {
        let pending = console.borrow().pending_timer.clone();
        let console = console.clone();
        sched::run_sequence(
            sequence,
            pending,
            Rc::new(move |step: &Step| {
                {
                    let c = console.borrow();
                    for line in &step.lines {
                        c.log_line(line);
                    }
                }
                if let Some(action) = step.action {
                    Console::apply_action(&console, action);
                }
            }),
        );
    }

    /// Terminal step of a staged sequence: flip the session state, then run
    /// the matching page cosmetics.
    fn apply_action(console: &Rc<RefCell<Console>>, action: StepAction) {
        console.borrow_mut().session.apply(action);
        let document = console.borrow().document.clone();
        match action {
            StepAction::Unlock => {
                theme::flash_invert(&document);
                let console = console.clone();
                let _ = sched::schedule(theme::FLASH_MS, move || {
                    let document = console.borrow().document.clone();
                    theme::clear_filter(&document);
                    let card = theme::show_secret(&document);
                    console
                        .borrow()
                        .log_line(&Line::command("ACCESS GRANTED. New data decrypted."));
                    if let Some(card) = card {
                        dom::scroll_into_view_center(&card);
                    }
                    theme::set_alert_primary(&document);
                });
            }
            StepAction::Lock => {
                theme::fade_out(&document);
                let console = console.clone();
                let _ = sched::schedule(theme::LOCK_FADE_MS, move || {
                    let document = console.borrow().document.clone();
                    theme::restore_default(&document);
                    theme::hide_secret(&document);
                    theme::fade_in(&document);
                    console
                        .borrow()
                        .log_line(&Line::command("LOGOUT SUCCESSFUL. Guest mode active."));
                    dom::scroll_to_top();
                });
            }
            StepAction::Complete => {}
        }
    }

    fn log_line(&self, line: &Line) {
        let Ok(div) = self.document.create_element("div") else {
            return;
        };
        let class = match line.kind {
            LineKind::Plain => "console-line",
            LineKind::Command => "console-line command",
            LineKind::Error => "console-line error",
        };
        let _ = div.set_attribute("class", class);
        div.set_text_content(Some(&line.text));
        let _ = self.transcript.append_child(&div);
        self.transcript.set_scroll_top(self.transcript.scroll_height());
    }
}
