//! Tunable simulation parameters.
//!
//! Everything the developer console can adjust lives here and is passed by
//! reference into the simulation and the command evaluator, so tests can run
//! against a fresh configuration and nothing hides in globals.

/// Lowest accepted particle-density divisor; `atoms` clamps here.
pub const MIN_ATOMS_DIVISOR: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    /// Surface area per particle; lower means more particles.
    pub atoms_divisor: u32,
    /// Pair distance below which a link is drawn.
    pub link_distance: f32,
    /// Distance over which link opacity falls off.
    pub link_glow: f32,
    /// Pointer influence radius.
    pub pointer_radius: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            atoms_divisor: 4500,
            link_distance: 150.0,
            link_glow: 250.0,
            pointer_radius: 180.0,
        }
    }
}

impl FieldParams {
    /// Particle count for a surface: `floor(area / divisor)`.
    pub fn particle_count(&self, width: f32, height: f32) -> usize {
        let count = (width * height) / self.atoms_divisor as f32;
        count.max(0.0).floor() as usize
    }

    /// Set the divisor, clamping below [`MIN_ATOMS_DIVISOR`]. Returns the
    /// effective value.
    pub fn set_atoms_divisor(&mut self, requested: i64) -> u32 {
        let effective = if requested < MIN_ATOMS_DIVISOR as i64 {
            MIN_ATOMS_DIVISOR
        } else {
            requested as u32
        };
        self.atoms_divisor = effective;
        effective
    }
}
