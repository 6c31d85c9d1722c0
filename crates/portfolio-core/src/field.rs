//! The particle field: a set of drifting points that react to the pointer
//! and link up when close. The web layer owns the animation loop and the
//! canvas; this module owns every particle and all of the math.

use glam::Vec2;
use rand::Rng;

use crate::color::{Palette, Rgb};
use crate::config::FieldParams;
use crate::constants::*;

/// Last known pointer state, in page coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    /// `None` until the first movement event.
    pub pos: Option<Vec2>,
    pub pressed: bool,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    /// Draw radius, fixed at creation.
    pub size: f32,
    /// Individual repulsion weight.
    pub density: f32,
    /// Constant drift added every frame.
    pub vel: Vec2,
    pub color: Rgb,
}

impl Particle {
    pub fn spawn(width: f32, height: f32, color: Rgb, rng: &mut impl Rng) -> Self {
        Self {
            // Extra vertical room so drift during scroll has somewhere to go
            pos: Vec2::new(
                rng.gen::<f32>() * width,
                rng.gen::<f32>() * (height + WRAP_MARGIN_Y_NEAR),
            ),
            size: rng.gen_range(SIZE_MIN..SIZE_MAX),
            density: rng.gen_range(DENSITY_MIN..DENSITY_MAX),
            vel: Vec2::new(
                rng.gen_range(-DRIFT_MAX..DRIFT_MAX),
                rng.gen_range(-DRIFT_MAX..DRIFT_MAX),
            ),
            color,
        }
    }

    /// One simulation step: drift, pointer response, color blend. Wrapping
    /// is applied separately by the field, which knows the surface size.
    pub fn step(
        &mut self,
        pointer: PointerState,
        scroll_y: f32,
        params: &FieldParams,
        palette: &Palette,
    ) {
        self.pos += self.vel;
        let Some(p) = pointer.pos else {
            return;
        };
        // The field is rendered shifted by the parallax factor, so the
        // pointer's effective y shifts with the page scroll.
        let delta = Vec2::new(
            p.x - self.pos.x,
            p.y + SCROLL_PARALLAX * scroll_y - self.pos.y,
        );
        let dist = delta.length();
        if dist < params.pointer_radius && dist > 0.0 {
            let force = (params.pointer_radius - dist) / params.pointer_radius;
            let dir = delta / dist;
            if pointer.pressed {
                self.pos += dir * force * ATTRACT_STRENGTH;
                self.color.blend_toward(palette.attract, ATTRACT_BLEND);
            } else {
                self.pos -= dir * force * self.density * REPEL_STRENGTH;
                self.color.blend_toward(palette.repel, REPEL_BLEND);
            }
        } else {
            self.color.blend_toward(palette.base, RELAX_BLEND);
        }
    }
}

/// Move an out-of-bounds position to the opposite edge. Margins keep the
/// jump invisible: particles fully leave the surface before reappearing.
pub fn wrap(mut pos: Vec2, width: f32, height: f32) -> Vec2 {
    if pos.x > width + WRAP_MARGIN_X {
        pos.x = -WRAP_MARGIN_X;
    } else if pos.x < -WRAP_MARGIN_X {
        pos.x = width + WRAP_MARGIN_X;
    }
    if pos.y > height + WRAP_MARGIN_Y_FAR {
        pos.y = -WRAP_MARGIN_Y_NEAR;
    } else if pos.y < -WRAP_MARGIN_Y_NEAR {
        pos.y = height + WRAP_MARGIN_Y_FAR;
    }
    pos
}

/// A renderable connecting line between two close particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: Vec2,
    pub b: Vec2,
    /// Color of the first particle of the pair.
    pub color: Rgb,
    pub alpha: f32,
}

pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            particles: Vec::new(),
        }
    }

    /// Build a field from explicit particles; used by tests and tools that
    /// need a known starting state.
    pub fn from_particles(width: f32, height: f32, particles: Vec<Particle>) -> Self {
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Discard all particles and spawn `floor(area / divisor)` fresh ones.
    pub fn populate(&mut self, params: &FieldParams, palette: &Palette, rng: &mut impl Rng) {
        let count = params.particle_count(self.width, self.height);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles
                .push(Particle::spawn(self.width, self.height, palette.base, rng));
        }
        log::debug!("[field] populated {} particles", count);
    }

    /// Adopt a new surface size and rebuild from scratch.
    pub fn resize(
        &mut self,
        width: f32,
        height: f32,
        params: &FieldParams,
        palette: &Palette,
        rng: &mut impl Rng,
    ) {
        self.width = width;
        self.height = height;
        self.populate(params, palette, rng);
    }

    /// Repaint every live particle, e.g. after a theme color change.
    pub fn retint(&mut self, color: Rgb) {
        for p in &mut self.particles {
            p.color = color;
        }
    }

    /// Advance every particle one frame and wrap strays back in.
    pub fn step(
        &mut self,
        pointer: PointerState,
        scroll_y: f32,
        params: &FieldParams,
        palette: &Palette,
    ) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            p.step(pointer, scroll_y, params, palette);
            p.pos = wrap(p.pos, width, height);
        }
    }

    /// Every unordered pair closer than the link distance, lazily. Brute
    /// force over all pairs; fine at the few hundred particles this field
    /// ever holds.
    pub fn links<'a>(&'a self, params: &'a FieldParams) -> impl Iterator<Item = Link> + 'a {
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |i| {
            ((i + 1)..ps.len()).filter_map(move |j| {
                let dist = ps[i].pos.distance(ps[j].pos);
                (dist < params.link_distance).then(|| Link {
                    a: ps[i].pos,
                    b: ps[j].pos,
                    color: ps[i].color,
                    alpha: ((1.0 - dist / params.link_glow) * LINK_ALPHA_SCALE).max(0.0),
                })
            })
        })
    }
}
