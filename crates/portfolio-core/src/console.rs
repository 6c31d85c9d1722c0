//! The developer console: command parsing, session state, and evaluation.
//!
//! Commands are parsed into a tagged [`Command`] and evaluated by an
//! exhaustive match. Evaluation mutates the session and field parameters and
//! returns a list of [`Effect`]s; the web layer executes those against the
//! DOM, canvas and timers. Nothing here touches a platform API, so the whole
//! command surface tests natively.

use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

use crate::color::DEFAULT_PRIMARY_HEX;
use crate::config::FieldParams;
use crate::sequence::{
    login_sequence, logout_sequence, scan_sequence, SequenceKind, StagedSequence, StepAction,
};

/// Transcript line styling, mirrored to CSS classes by the web layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Plain,
    Command,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub text: String,
    pub kind: LineKind,
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Plain,
        }
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Command,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Error,
        }
    }
}

/// Page sections the console can navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Skills,
}

impl Section {
    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
        }
    }
}

/// Arguments to `links`, which sets the two link parameters independently.
/// `glow` distinguishes "flag absent" (`None`) from "flag present without a
/// value" (`Some(None)`), which is a validation error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinksArgs {
    pub distance: Option<String>,
    pub glow: Option<Option<String>>,
}

impl LinksArgs {
    fn is_empty(&self) -> bool {
        self.distance.is_none() && self.glow.is_none()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Help,
    System,
    Goto(Section),
    Clear,
    Credits,
    Atoms(Option<String>),
    Color(Option<String>),
    Gravity(Option<String>),
    Links(LinksArgs),
    Login(Option<String>),
    Logout,
    Whoami,
    Scan,
    Unknown(String),
}

impl Command {
    /// Parse one already trimmed and lowercased input line.
    pub fn parse(input: &str) -> Command {
        let mut words = input.split_whitespace();
        let Some(name) = words.next() else {
            return Command::Unknown(String::new());
        };
        match name {
            "help" => Command::Help,
            "system" => Command::System,
            "about" => Command::Goto(Section::About),
            "skills" => Command::Goto(Section::Skills),
            "clear" => Command::Clear,
            "credits" => Command::Credits,
            "atoms" => Command::Atoms(words.next().map(str::to_owned)),
            "color" => Command::Color(words.next().map(str::to_owned)),
            "gravity" => Command::Gravity(words.next().map(str::to_owned)),
            "links" => Command::Links(parse_links_args(words)),
            "login" => Command::Login(words.next().map(str::to_owned)),
            "logout" => Command::Logout,
            "whoami" => Command::Whoami,
            "scan" => Command::Scan,
            _ => Command::Unknown(input.to_owned()),
        }
    }
}

fn parse_links_args<'a>(words: impl Iterator<Item = &'a str>) -> LinksArgs {
    let mut args = LinksArgs::default();
    let mut expecting_glow = false;
    for (index, word) in words.enumerate() {
        if expecting_glow {
            args.glow = Some(Some(word.to_owned()));
            expecting_glow = false;
        } else if word == "-g" {
            // Flag seen; a missing value stays `Some(None)`.
            args.glow = Some(None);
            expecting_glow = true;
        } else if index == 0 {
            args.distance = Some(word.to_owned());
        }
    }
    args
}

/// Cosmetic session state. The admin flag gates flavor text and the secret
/// project reveal; it is not an access-control mechanism.
#[derive(Clone, Copy, Debug, Default)]
pub struct Session {
    admin: bool,
    in_flight: Option<SequenceKind>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn in_flight(&self) -> Option<SequenceKind> {
        self.in_flight
    }

    fn begin(&mut self, kind: SequenceKind) {
        self.in_flight = Some(kind);
    }

    /// Run a sequence's terminal action. The admin flag only ever flips
    /// here, after all intermediate steps have been shown.
    pub fn apply(&mut self, action: StepAction) {
        match action {
            StepAction::Unlock => self.admin = true,
            StepAction::Lock => self.admin = false,
            StepAction::Complete => {}
        }
        self.in_flight = None;
    }
}

/// Side effects for the web layer to execute, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Print(Line),
    ClearTranscript,
    ScrollTo(Section),
    /// The divisor changed; repopulate the particle field.
    RebuildField,
    /// Set the theme's primary color and retint live particles.
    ApplyColor(String),
    Begin(StagedSequence),
}

pub type Effects = SmallVec<[Effect; 4]>;

const HELP_TEXT: &str = "Navigate: about, skills, contact.\nAvailable commands: atoms <value>, clear, credits, color <value>, gravity <value>, links [-g] <value>";
const SYSTEM_TEXT: &str = "Navigate: about, skills, contact.\nAvailable commands: atoms <value>, clear, credits, color <value>, gravity <value>, links [-g] <value>, login <login>, logout, scan, whoami";

const ATOMS_USAGE: &str =
    "Usage: atoms <value> (lower value = more atoms, default atoms 4500). Minimum 1000.";
const COLOR_USAGE: &str = "Usage: color <value> (e.g. color #00ff00 or color white) change site color";
const GRAVITY_USAGE: &str =
    "Usage: gravity <value> change distance of repulsion to atoms. default gravity 180";
const LINKS_USAGE: &str = "Usage: links <value> change needed distance to atom to form link | links -g <value> change power of glow the links | links 150 -g 250";

const BUSY_TEXT: &str = "System busy. Another sequence is running.";

/// Evaluate one command. `surface` is the current drawing-surface size, used
/// to report the particle count the divisor invariant implies.
pub fn eval(
    command: &Command,
    session: &mut Session,
    params: &mut FieldParams,
    surface: Vec2,
    rng: &mut impl Rng,
) -> Effects {
    let mut effects = Effects::new();
    match command {
        Command::Help => effects.push(Effect::Print(Line::plain(HELP_TEXT))),
        Command::System => effects.push(Effect::Print(Line::plain(SYSTEM_TEXT))),
        Command::Goto(section) => effects.push(Effect::ScrollTo(*section)),
        Command::Clear => effects.push(Effect::ClearTranscript),
        Command::Credits => {
            effects.push(Effect::Print(Line::plain("Lead Developer: Artem Tarasenkov")));
            effects.push(Effect::Print(Line::plain("AI-Tools: Gemini 3")));
        }
        Command::Atoms(None) => effects.push(Effect::Print(Line::error(ATOMS_USAGE))),
        Command::Atoms(Some(arg)) => match arg.parse::<i64>() {
            Ok(value) => {
                let effective = params.set_atoms_divisor(value);
                let count = params.particle_count(surface.x, surface.y);
                effects.push(Effect::RebuildField);
                effects.push(Effect::Print(Line::plain(format!(
                    "Atoms density updated. Divider: {effective}. Total: {count} particles."
                ))));
            }
            Err(_) => effects.push(Effect::Print(Line::error(
                "Invalid value. Please enter a positive number.",
            ))),
        },
        Command::Color(None) => effects.push(Effect::Print(Line::error(COLOR_USAGE))),
        Command::Color(Some(arg)) => {
            let value = if arg == "default" {
                DEFAULT_PRIMARY_HEX.to_owned()
            } else {
                arg.clone()
            };
            effects.push(Effect::ApplyColor(value.clone()));
            effects.push(Effect::Print(Line::plain(format!(
                "Colors updated to: {value}"
            ))));
        }
        Command::Gravity(None) => effects.push(Effect::Print(Line::error(GRAVITY_USAGE))),
        Command::Gravity(Some(arg)) => match arg.parse::<i64>() {
            Ok(value) => {
                params.pointer_radius = value as f32;
                effects.push(Effect::Print(Line::plain(format!(
                    "Gravity radius set to: {value}"
                ))));
            }
            Err(_) => effects.push(Effect::Print(Line::error("Invalid value."))),
        },
        Command::Links(args) if args.is_empty() => {
            effects.push(Effect::Print(Line::error(LINKS_USAGE)));
        }
        Command::Links(args) => {
            if let Some(glow) = &args.glow {
                let raw = glow.as_deref().unwrap_or("");
                match parse_non_negative(raw) {
                    Some(value) => {
                        params.link_glow = value as f32;
                        effects.push(Effect::Print(Line::plain(format!(
                            "Connection glow set to: {value}"
                        ))));
                    }
                    None => effects.push(Effect::Print(Line::error(format!(
                        "Error: \"{raw}\" is not a valid number for glow."
                    )))),
                }
            }
            if let Some(distance) = &args.distance {
                match parse_non_negative(distance) {
                    Some(value) => {
                        params.link_distance = value as f32;
                        effects.push(Effect::Print(Line::plain(format!(
                            "Connection distance set to: {value}"
                        ))));
                    }
                    None => effects.push(Effect::Print(Line::error(format!(
                        "Error: \"{distance}\" is not a valid number for distance."
                    )))),
                }
            }
        }
        Command::Login(None) => {
            effects.push(Effect::Print(Line::error("Secret command! Don't write this!")));
        }
        Command::Login(Some(arg)) => {
            if session.is_admin() {
                effects.push(Effect::Print(Line::error(
                    "Session active! Please type logout to close session.",
                )));
            } else if session.in_flight().is_some() {
                effects.push(Effect::Print(Line::error(BUSY_TEXT)));
            } else if arg == "admin" {
                session.begin(SequenceKind::Login);
                effects.push(Effect::Print(Line::command(
                    "Requesting administrative access...",
                )));
                effects.push(Effect::Begin(login_sequence()));
            } else {
                effects.push(Effect::Print(Line::error(
                    "Access denied. Invalid credentials.",
                )));
            }
        }
        Command::Logout => {
            if !session.is_admin() {
                effects.push(Effect::Print(Line::error("No active session found.")));
            } else if session.in_flight().is_some() {
                effects.push(Effect::Print(Line::error(BUSY_TEXT)));
            } else {
                session.begin(SequenceKind::Logout);
                effects.push(Effect::Print(Line::command(
                    "Terminating administrative session...",
                )));
                effects.push(Effect::Begin(logout_sequence()));
            }
        }
        Command::Whoami => {
            if session.is_admin() {
                effects.push(Effect::Print(Line::plain(
                    "Current user: Administrator (Artem_Tarasenkov)",
                )));
                effects.push(Effect::Print(Line::plain(
                    "Access level: Root / All systems operational",
                )));
            } else {
                effects.push(Effect::Print(Line::plain("Current user: Guest")));
                effects.push(Effect::Print(Line::plain(
                    "Access level: Restricted (Read-only)",
                )));
            }
        }
        Command::Scan => {
            if session.in_flight().is_some() {
                effects.push(Effect::Print(Line::error(BUSY_TEXT)));
            } else {
                session.begin(SequenceKind::Scan);
                effects.push(Effect::Print(Line::command("Starting system deep scan...")));
                effects.push(Effect::Begin(scan_sequence(rng)));
            }
        }
        Command::Unknown(input) => {
            effects.push(Effect::Print(Line::error(format!(
                "Unknown command: {input}"
            ))));
        }
    }
    effects
}

/// Accept only a plain non-negative integer literal.
fn parse_non_negative(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok()
}
