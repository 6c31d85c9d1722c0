// Host-side tests for the console command surface: parsing, evaluation,
// session gating, and the staged sequences.

use glam::Vec2;
use portfolio_core::{
    eval, Command, Effect, FieldParams, Line, LineKind, Rgb, Session, StagedSequence, StepAction,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SURFACE: Vec2 = Vec2::new(1920.0, 1080.0);

fn eval_line(input: &str, session: &mut Session, params: &mut FieldParams) -> Vec<Effect> {
    let mut rng = StdRng::seed_from_u64(7);
    eval(&Command::parse(input), session, params, SURFACE, &mut rng).into_vec()
}

fn printed(effects: &[Effect]) -> Vec<(String, LineKind)> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Print(line) => Some((line.text.clone(), line.kind)),
            _ => None,
        })
        .collect()
}

fn sequence(effects: &[Effect]) -> &StagedSequence {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::Begin(seq) => Some(seq),
            _ => None,
        })
        .expect("expected a staged sequence")
}

#[test]
fn atoms_updates_divisor_and_reports_count() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("atoms 2000", &mut session, &mut params);
    assert_eq!(params.atoms_divisor, 2000);
    assert!(effects.contains(&Effect::RebuildField));
    // floor(1920 * 1080 / 2000) = 1036
    assert_eq!(
        printed(&effects),
        vec![(
            "Atoms density updated. Divider: 2000. Total: 1036 particles.".to_owned(),
            LineKind::Plain
        )]
    );
}

#[test]
fn atoms_clamps_below_minimum() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("atoms 500", &mut session, &mut params);
    assert_eq!(params.atoms_divisor, 1000);
    assert_eq!(
        printed(&effects)[0].0,
        "Atoms density updated. Divider: 1000. Total: 2073 particles."
    );
}

#[test]
fn atoms_clamps_negative_values_too() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    eval_line("atoms -5", &mut session, &mut params);
    assert_eq!(params.atoms_divisor, 1000);
}

#[test]
fn atoms_rejects_non_numeric() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("atoms abc", &mut session, &mut params);
    assert_eq!(params.atoms_divisor, 4500);
    assert!(!effects.contains(&Effect::RebuildField));
    assert_eq!(
        printed(&effects),
        vec![(
            "Invalid value. Please enter a positive number.".to_owned(),
            LineKind::Error
        )]
    );
}

#[test]
fn bare_atoms_prints_usage() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("atoms", &mut session, &mut params);
    let lines = printed(&effects);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].1, LineKind::Error);
    assert!(lines[0].0.starts_with("Usage: atoms"));
}

#[test]
fn links_sets_both_parameters_independently() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("links 150 -g 250", &mut session, &mut params);
    assert_eq!(params.link_distance, 150.0);
    assert_eq!(params.link_glow, 250.0);
    let lines = printed(&effects);
    assert_eq!(lines[0].0, "Connection glow set to: 250");
    assert_eq!(lines[1].0, "Connection distance set to: 150");
}

#[test]
fn links_glow_only_leaves_distance_untouched() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    eval_line("links -g 300", &mut session, &mut params);
    assert_eq!(params.link_glow, 300.0);
    assert_eq!(params.link_distance, 150.0);
}

#[test]
fn links_invalid_argument_reports_without_mutating() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("links abc", &mut session, &mut params);
    assert_eq!(params.link_distance, 150.0);
    assert_eq!(params.link_glow, 250.0);
    assert_eq!(
        printed(&effects),
        vec![(
            "Error: \"abc\" is not a valid number for distance.".to_owned(),
            LineKind::Error
        )]
    );
}

#[test]
fn links_flag_without_value_is_an_error() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("links -g", &mut session, &mut params);
    assert_eq!(
        printed(&effects),
        vec![(
            "Error: \"\" is not a valid number for glow.".to_owned(),
            LineKind::Error
        )]
    );
}

#[test]
fn links_mixed_validity_applies_only_the_valid_half() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("links 80 -g xyz", &mut session, &mut params);
    assert_eq!(params.link_distance, 80.0);
    assert_eq!(params.link_glow, 250.0);
    let lines = printed(&effects);
    assert_eq!(lines[0].1, LineKind::Error);
    assert_eq!(lines[1].0, "Connection distance set to: 80");
}

#[test]
fn bare_links_prints_usage() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let lines = printed(&eval_line("links", &mut session, &mut params));
    assert_eq!(lines.len(), 1);
    assert!(lines[0].0.starts_with("Usage: links"));
}

#[test]
fn gravity_sets_pointer_radius() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("gravity 250", &mut session, &mut params);
    assert_eq!(params.pointer_radius, 250.0);
    assert_eq!(printed(&effects)[0].0, "Gravity radius set to: 250");
}

#[test]
fn gravity_rejects_non_numeric() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("gravity much", &mut session, &mut params);
    assert_eq!(params.pointer_radius, 180.0);
    assert_eq!(
        printed(&effects),
        vec![("Invalid value.".to_owned(), LineKind::Error)]
    );
}

#[test]
fn color_passes_value_through_and_reports() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("color #00ff00", &mut session, &mut params);
    assert_eq!(effects[0], Effect::ApplyColor("#00ff00".to_owned()));
    assert_eq!(printed(&effects)[0].0, "Colors updated to: #00ff00");
}

#[test]
fn color_default_restores_the_original_hex() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("color default", &mut session, &mut params);
    assert_eq!(effects[0], Effect::ApplyColor("#FF6000".to_owned()));
}

#[test]
fn hex_parsing_round_trips_the_color_command() {
    assert_eq!(Rgb::parse_hex("#00ff00"), Ok(Rgb::new(0.0, 255.0, 0.0)));
    assert_eq!(Rgb::parse_hex("#0f0"), Ok(Rgb::new(0.0, 255.0, 0.0)));
    assert_eq!(Rgb::parse_hex("#FF6000"), Ok(Rgb::new(255.0, 96.0, 0.0)));
    assert!(Rgb::parse_hex("tomato").is_err());
    assert!(Rgb::parse_hex("#12345").is_err());
    assert!(Rgb::parse_hex("").is_err());
}

#[test]
fn unknown_command_is_exactly_one_error_line() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("foobar", &mut session, &mut params);
    assert_eq!(effects.len(), 1);
    assert_eq!(
        printed(&effects),
        vec![("Unknown command: foobar".to_owned(), LineKind::Error)]
    );
}

#[test]
fn navigation_commands_scroll() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("about", &mut session, &mut params);
    assert!(matches!(effects[0], Effect::ScrollTo(section) if section.anchor() == "about"));
}

#[test]
fn clear_wipes_the_transcript() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("clear", &mut session, &mut params);
    assert_eq!(effects, vec![Effect::ClearTranscript]);
}

#[test]
fn credits_prints_two_lines() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let lines = printed(&eval_line("credits", &mut session, &mut params));
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].0, "Lead Developer: Artem Tarasenkov");
}

#[test]
fn system_lists_hidden_commands_help_does_not() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let help = printed(&eval_line("help", &mut session, &mut params));
    let system = printed(&eval_line("system", &mut session, &mut params));
    assert!(!help[0].0.contains("whoami"));
    assert!(system[0].0.contains("whoami"));
    assert!(system[0].0.contains("logout"));
}

#[test]
fn bare_login_is_the_easter_egg() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let lines = printed(&eval_line("login", &mut session, &mut params));
    assert_eq!(
        lines,
        vec![("Secret command! Don't write this!".to_owned(), LineKind::Error)]
    );
}

#[test]
fn login_with_wrong_credentials_is_denied() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let lines = printed(&eval_line("login guest", &mut session, &mut params));
    assert_eq!(lines[0].0, "Access denied. Invalid credentials.");
    assert!(!session.is_admin());
}

#[test]
fn login_flips_admin_only_after_the_sequence_completes() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("login admin", &mut session, &mut params);
    assert_eq!(printed(&effects)[0].0, "Requesting administrative access...");
    let seq = sequence(&effects).clone();
    assert_eq!(seq.steps.len(), 4);
    for (i, step) in seq.steps.iter().enumerate() {
        let pct = 25 * (i + 1);
        assert_eq!(
            step.lines[0],
            Line::plain(format!("Bypassing firewall... {pct}%"))
        );
    }
    // Intermediate steps carry no action; the admin flag is still off.
    assert!(seq.steps[..3].iter().all(|s| s.action.is_none()));
    assert!(!session.is_admin());
    session.apply(seq.steps[3].action.unwrap());
    assert!(session.is_admin());
    assert_eq!(seq.steps[3].action, Some(StepAction::Unlock));
}

#[test]
fn login_while_session_active_is_an_error() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    session.apply(StepAction::Unlock);
    let effects = eval_line("login admin", &mut session, &mut params);
    assert_eq!(
        printed(&effects)[0].0,
        "Session active! Please type logout to close session."
    );
    assert!(effects.iter().all(|e| !matches!(e, Effect::Begin(_))));
    assert!(session.is_admin());
}

#[test]
fn conflicting_commands_are_rejected_while_a_sequence_runs() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("login admin", &mut session, &mut params);
    let seq = sequence(&effects).clone();
    // Sequence still in flight: no second login, no scan.
    let retry = eval_line("login admin", &mut session, &mut params);
    assert!(retry.iter().all(|e| !matches!(e, Effect::Begin(_))));
    let scan = eval_line("scan", &mut session, &mut params);
    assert!(scan.iter().all(|e| !matches!(e, Effect::Begin(_))));
    // Completion unblocks.
    session.apply(seq.steps[3].action.unwrap());
    let rescan = eval_line("scan", &mut session, &mut params);
    assert!(rescan.iter().any(|e| matches!(e, Effect::Begin(_))));
}

#[test]
fn logout_without_session_is_an_error() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("logout", &mut session, &mut params);
    assert_eq!(
        printed(&effects),
        vec![("No active session found.".to_owned(), LineKind::Error)]
    );
    assert!(!session.is_admin());
}

#[test]
fn logout_sequence_locks_at_the_final_step() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    session.apply(StepAction::Unlock);
    let effects = eval_line("logout", &mut session, &mut params);
    assert_eq!(
        printed(&effects)[0].0,
        "Terminating administrative session..."
    );
    let seq = sequence(&effects).clone();
    assert_eq!(seq.steps.len(), 3);
    for (step, pct) in seq.steps.iter().zip([33u32, 66, 100]) {
        assert_eq!(
            step.lines[0],
            Line::plain(format!("Clearing logs and traces... {pct}%"))
        );
    }
    assert!(session.is_admin());
    session.apply(seq.steps[2].action.unwrap());
    assert!(!session.is_admin());
}

#[test]
fn whoami_differs_by_access_level() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let guest = printed(&eval_line("whoami", &mut session, &mut params));
    assert_eq!(guest[0].0, "Current user: Guest");
    assert_eq!(guest[1].0, "Access level: Restricted (Read-only)");
    session.apply(StepAction::Unlock);
    let admin = printed(&eval_line("whoami", &mut session, &mut params));
    assert_eq!(admin[0].0, "Current user: Administrator (Artem_Tarasenkov)");
    assert_eq!(admin[1].0, "Access level: Root / All systems operational");
}

#[test]
fn scan_checks_every_file_then_reports_integrity() {
    let mut session = Session::default();
    let mut params = FieldParams::default();
    let effects = eval_line("scan", &mut session, &mut params);
    assert_eq!(printed(&effects)[0].0, "Starting system deep scan...");
    let seq = sequence(&effects);
    assert_eq!(seq.steps.len(), 7);
    assert_eq!(seq.steps[0].delay_ms, 0);
    assert!(seq.steps[1..6].iter().all(|s| s.delay_ms == 200));
    assert_eq!(seq.steps[6].delay_ms, 500);
    let corrupted = seq.steps[..6]
        .iter()
        .filter(|s| s.lines[0].kind == LineKind::Error)
        .count();
    let integrity = 100.0 * (6 - corrupted) as f32 / 6.0;
    assert_eq!(
        seq.steps[6].lines[0].text,
        format!("Scan complete. System integrity: {integrity:.1}%")
    );
    assert_eq!(seq.steps[6].action, Some(StepAction::Complete));
    for (step, file) in seq.steps[..6].iter().zip(portfolio_core::SCAN_FILES) {
        assert!(step.lines[0].text.starts_with(&format!("Checking {file}...")));
    }
}

#[test]
fn commands_parse_into_tagged_variants() {
    assert_eq!(Command::parse("help"), Command::Help);
    assert_eq!(Command::parse("atoms 2000"), Command::Atoms(Some("2000".to_owned())));
    assert_eq!(Command::parse("login admin"), Command::Login(Some("admin".to_owned())));
    assert!(matches!(Command::parse("links 150 -g 250"), Command::Links(_)));
    assert_eq!(
        Command::parse("warp 9"),
        Command::Unknown("warp 9".to_owned())
    );
}
