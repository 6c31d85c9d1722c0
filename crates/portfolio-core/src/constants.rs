/// Simulation and effect tuning constants.
///
/// These express intended behavior (forces, blend rates, timings) and keep
/// magic numbers out of the code.
// Pointer interaction forces
pub const ATTRACT_STRENGTH: f32 = 6.0;
pub const REPEL_STRENGTH: f32 = 0.4;

// The field is drawn shifted by -0.3 * scroll so pointer math shifts too
pub const SCROLL_PARALLAX: f32 = 0.3;

// Per-frame color blend rates
pub const ATTRACT_BLEND: f32 = 0.2;
pub const REPEL_BLEND: f32 = 0.15;
pub const RELAX_BLEND: f32 = 0.02;

// Wrap margins around the visible surface (px)
pub const WRAP_MARGIN_X: f32 = 50.0;
pub const WRAP_MARGIN_Y_NEAR: f32 = 500.0;
pub const WRAP_MARGIN_Y_FAR: f32 = 1000.0;

// Particle spawn ranges
pub const SIZE_MIN: f32 = 0.5;
pub const SIZE_MAX: f32 = 2.5;
pub const DENSITY_MIN: f32 = 1.0;
pub const DENSITY_MAX: f32 = 21.0;
pub const DRIFT_MAX: f32 = 0.2;

// Link rendering
pub const LINK_ALPHA_SCALE: f32 = 0.2;
pub const LINK_WIDTH: f32 = 0.5;

// Staged console sequences
pub const LOGIN_STEP_MS: u32 = 400;
pub const LOGOUT_STEP_MS: u32 = 300;
pub const SCAN_STEP_MS: u32 = 200;
pub const SCAN_SUMMARY_DELAY_MS: u32 = 500;
pub const SCAN_CORRUPTION_P: f32 = 0.15;

// Text scramble timing (frames) and glyph re-roll probability
pub const SCRAMBLE_START_MAX: u32 = 40;
pub const SCRAMBLE_HOLD_MAX: u32 = 40;
pub const SCRAMBLE_REROLL_P: f32 = 0.28;
