//! Staged console sequences (`login`, `logout`, `scan`).
//!
//! Each sequence is built up front as plain data: a list of steps with
//! relative delays, transcript lines, and an optional terminal action. The
//! web layer drives the steps through its timer scheduler, which keeps a
//! cancellation handle; nothing here schedules anything itself. Random
//! outcomes (scan corruption) are rolled at build time from the caller's
//! RNG so tests stay deterministic.

use rand::Rng;

use crate::console::Line;
use crate::constants::{
    LOGIN_STEP_MS, LOGOUT_STEP_MS, SCAN_CORRUPTION_P, SCAN_STEP_MS, SCAN_SUMMARY_DELAY_MS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceKind {
    Login,
    Logout,
    Scan,
}

/// What happens when the final step of a sequence fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepAction {
    /// Admin session established; reveal the secret project.
    Unlock,
    /// Admin session closed; restore the default theme.
    Lock,
    /// Sequence finished with no session change (scan).
    Complete,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// Delay before this step fires, relative to the previous step.
    pub delay_ms: u32,
    pub lines: Vec<Line>,
    pub action: Option<StepAction>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StagedSequence {
    pub kind: SequenceKind,
    pub steps: Vec<Step>,
}

/// Fake paths reported by `scan`.
pub const SCAN_FILES: [&str; 6] = [
    "assets/styles.css",
    "scripts/engine.js",
    "assets/images/screenshot_1.jpg",
    "config/system.env",
    "database/projects.db",
    "assets/github.exe",
];

/// Four 25% "access" steps; admin flips only when the last one runs.
pub fn login_sequence() -> StagedSequence {
    let steps = [25u32, 50, 75, 100]
        .iter()
        .map(|p| Step {
            delay_ms: LOGIN_STEP_MS,
            lines: vec![Line::plain(format!("Bypassing firewall... {p}%"))],
            action: (*p == 100).then_some(StepAction::Unlock),
        })
        .collect();
    StagedSequence {
        kind: SequenceKind::Login,
        steps,
    }
}

/// Three "cleanup" steps ending in the lock side effect.
pub fn logout_sequence() -> StagedSequence {
    let steps = [33u32, 66, 100]
        .iter()
        .map(|p| Step {
            delay_ms: LOGOUT_STEP_MS,
            lines: vec![Line::plain(format!("Clearing logs and traces... {p}%"))],
            action: (*p == 100).then_some(StepAction::Lock),
        })
        .collect();
    StagedSequence {
        kind: SequenceKind::Logout,
        steps,
    }
}

/// Pseudo-scan over [`SCAN_FILES`]. Every file independently has a
/// [`SCAN_CORRUPTION_P`] chance of reporting corrupted; the summary step
/// reports the resulting integrity percentage.
pub fn scan_sequence(rng: &mut impl Rng) -> StagedSequence {
    let mut corrupted = 0usize;
    let mut steps: Vec<Step> = SCAN_FILES
        .iter()
        .enumerate()
        .map(|(index, file)| {
            let bad = rng.gen::<f32>() < SCAN_CORRUPTION_P;
            let line = if bad {
                corrupted += 1;
                Line::error(format!("Checking {file}... [CORRUPTED]"))
            } else {
                Line::plain(format!("Checking {file}... [OK]"))
            };
            Step {
                // The first file check fires immediately.
                delay_ms: if index == 0 { 0 } else { SCAN_STEP_MS },
                lines: vec![line],
                action: None,
            }
        })
        .collect();
    let total = SCAN_FILES.len();
    let integrity = 100.0 * (total - corrupted) as f32 / total as f32;
    steps.push(Step {
        delay_ms: SCAN_SUMMARY_DELAY_MS,
        lines: vec![Line::command(format!(
            "Scan complete. System integrity: {integrity:.1}%"
        ))],
        action: Some(StepAction::Complete),
    });
    StagedSequence {
        kind: SequenceKind::Scan,
        steps,
    }
}
