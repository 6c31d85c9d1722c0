// Host-side tests for the particle field simulation.

use glam::Vec2;
use portfolio_core::constants::{
    ATTRACT_BLEND, DENSITY_MAX, DENSITY_MIN, DRIFT_MAX, RELAX_BLEND, REPEL_BLEND, SIZE_MAX,
    SIZE_MIN, WRAP_MARGIN_Y_NEAR,
};
use portfolio_core::{wrap, FieldParams, Palette, Particle, ParticleField, PointerState, Rgb};
use rand::rngs::StdRng;
use rand::SeedableRng;

const WIDTH: f32 = 1920.0;
const HEIGHT: f32 = 1080.0;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn still_particle(x: f32, y: f32, color: Rgb) -> Particle {
    Particle {
        pos: Vec2::new(x, y),
        size: 1.0,
        density: 10.0,
        vel: Vec2::ZERO,
        color,
    }
}

#[test]
fn populate_count_matches_divisor_invariant() {
    let params = FieldParams::default();
    let palette = Palette::default();
    let mut field = ParticleField::new(WIDTH, HEIGHT);
    field.populate(&params, &palette, &mut rng());
    // floor(1920 * 1080 / 4500) = 460
    assert_eq!(field.len(), 460);
    assert_eq!(field.len(), params.particle_count(WIDTH, HEIGHT));
}

#[test]
fn repopulation_tracks_divisor_changes() {
    let mut params = FieldParams::default();
    let palette = Palette::default();
    let mut field = ParticleField::new(WIDTH, HEIGHT);
    params.set_atoms_divisor(2000);
    field.populate(&params, &palette, &mut rng());
    assert_eq!(field.len(), 1036);
    params.set_atoms_divisor(100); // clamps to 1000
    field.populate(&params, &palette, &mut rng());
    assert_eq!(field.len(), 2073);
}

#[test]
fn resize_discards_and_rebuilds() {
    let params = FieldParams::default();
    let palette = Palette::default();
    let mut field = ParticleField::new(WIDTH, HEIGHT);
    field.populate(&params, &palette, &mut rng());
    field.resize(800.0, 600.0, &params, &palette, &mut rng());
    assert_eq!(field.len(), params.particle_count(800.0, 600.0));
}

#[test]
fn wrap_beyond_right_margin_reenters_left() {
    let wrapped = wrap(Vec2::new(WIDTH + 60.0, 100.0), WIDTH, HEIGHT);
    assert_eq!(wrapped.x, -50.0);
}

#[test]
fn wrap_beyond_left_margin_reenters_right() {
    let wrapped = wrap(Vec2::new(-60.0, 100.0), WIDTH, HEIGHT);
    assert_eq!(wrapped.x, WIDTH + 50.0);
}

#[test]
fn wrap_vertical_margins_are_asymmetric() {
    let below = wrap(Vec2::new(100.0, HEIGHT + 1001.0), WIDTH, HEIGHT);
    assert_eq!(below.y, -500.0);
    let above = wrap(Vec2::new(100.0, -501.0), WIDTH, HEIGHT);
    assert_eq!(above.y, HEIGHT + 1000.0);
}

#[test]
fn wrap_leaves_in_bounds_positions_alone() {
    let pos = Vec2::new(WIDTH + 40.0, HEIGHT + 900.0);
    assert_eq!(wrap(pos, WIDTH, HEIGHT), pos);
}

#[test]
fn released_pointer_repels_and_blends_toward_repel() {
    let params = FieldParams::default();
    let palette = Palette::default();
    let mut p = still_particle(100.0, 100.0, palette.base);
    let pointer = PointerState {
        pos: Some(Vec2::new(150.0, 100.0)),
        pressed: false,
    };
    p.step(pointer, 0.0, &params, &palette);
    // Pointer is to the right, so the particle is pushed left.
    assert!(p.pos.x < 100.0);
    assert_eq!(p.pos.y, 100.0);
    let expected_r = palette.base.r + (palette.repel.r - palette.base.r) * REPEL_BLEND;
    assert!((p.color.r - expected_r).abs() < 1e-3);
}

#[test]
fn pressed_pointer_attracts_and_blends_toward_attract() {
    let params = FieldParams::default();
    let palette = Palette::default();
    let mut p = still_particle(100.0, 100.0, palette.base);
    let pointer = PointerState {
        pos: Some(Vec2::new(150.0, 100.0)),
        pressed: true,
    };
    p.step(pointer, 0.0, &params, &palette);
    assert!(p.pos.x > 100.0);
    let expected_g = palette.base.g + (palette.attract.g - palette.base.g) * ATTRACT_BLEND;
    assert!((p.color.g - expected_g).abs() < 1e-3);
}

#[test]
fn outside_influence_radius_relaxes_toward_base() {
    let params = FieldParams::default();
    let palette = Palette::default();
    let mut p = still_particle(100.0, 100.0, palette.repel);
    let pointer = PointerState {
        pos: Some(Vec2::new(1000.0, 1000.0)),
        pressed: false,
    };
    p.step(pointer, 0.0, &params, &palette);
    assert_eq!(p.pos, Vec2::new(100.0, 100.0));
    let expected_r = palette.repel.r + (palette.base.r - palette.repel.r) * RELAX_BLEND;
    assert!((p.color.r - expected_r).abs() < 1e-3);
}

#[test]
fn unknown_pointer_leaves_color_alone() {
    let params = FieldParams::default();
    let palette = Palette::default();
    let mut p = still_particle(100.0, 100.0, palette.base);
    p.vel = Vec2::new(0.1, -0.1);
    p.step(PointerState::default(), 0.0, &params, &palette);
    assert_eq!(p.color, palette.base);
    assert!((p.pos - Vec2::new(100.1, 99.9)).length() < 1e-4);
}

#[test]
fn scroll_shifts_the_pointers_effective_position() {
    let params = FieldParams::default();
    let palette = Palette::default();
    // Pointer at y=0 with 1000px of scroll acts at y=300.
    let pointer = PointerState {
        pos: Some(Vec2::new(0.0, 0.0)),
        pressed: false,
    };
    let mut p = still_particle(0.0, 250.0, palette.base);
    p.step(pointer, 1000.0, &params, &palette);
    // Effective pointer sits below the particle, so repulsion pushes it up.
    assert!(p.pos.y < 250.0);
}

#[test]
fn colors_converge_toward_the_base_target_over_time() {
    let params = FieldParams::default();
    let mut palette = Palette::default();
    palette.base = Rgb::new(0.0, 255.0, 0.0);
    let mut p = still_particle(100.0, 100.0, Rgb::new(255.0, 96.0, 0.0));
    let pointer = PointerState {
        pos: Some(Vec2::new(1000.0, 1000.0)),
        pressed: false,
    };
    for _ in 0..600 {
        p.step(pointer, 0.0, &params, &palette);
    }
    assert!((p.color.r - 0.0).abs() < 1.0);
    assert!((p.color.g - 255.0).abs() < 1.0);
}

#[test]
fn links_form_below_distance_with_expected_alpha() {
    let params = FieldParams::default();
    let palette = Palette::default();
    let field = ParticleField::from_particles(
        WIDTH,
        HEIGHT,
        vec![
            still_particle(0.0, 0.0, palette.base),
            still_particle(100.0, 0.0, palette.repel),
            still_particle(500.0, 0.0, palette.base),
        ],
    );
    let links: Vec<_> = field.links(&params).collect();
    assert_eq!(links.len(), 1);
    // Link color comes from the first particle of the pair.
    assert_eq!(links[0].color, palette.base);
    let expected = (1.0 - 100.0 / 250.0) * 0.2;
    assert!((links[0].alpha - expected).abs() < 1e-6);
}

#[test]
fn link_alpha_never_goes_negative() {
    let mut params = FieldParams::default();
    params.link_distance = 150.0;
    params.link_glow = 100.0;
    let palette = Palette::default();
    let field = ParticleField::from_particles(
        WIDTH,
        HEIGHT,
        vec![
            still_particle(0.0, 0.0, palette.base),
            still_particle(120.0, 0.0, palette.base),
        ],
    );
    let links: Vec<_> = field.links(&params).collect();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].alpha, 0.0);
}

#[test]
fn retint_repaints_every_particle() {
    let params = FieldParams::default();
    let palette = Palette::default();
    let mut field = ParticleField::new(WIDTH, HEIGHT);
    field.populate(&params, &palette, &mut rng());
    let green = Rgb::new(0.0, 255.0, 0.0);
    field.retint(green);
    assert!(field.particles().iter().all(|p| p.color == green));
}

#[test]
fn spawned_particles_stay_within_documented_ranges() {
    let palette = Palette::default();
    let mut rng = rng();
    for _ in 0..200 {
        let p = Particle::spawn(WIDTH, HEIGHT, palette.base, &mut rng);
        assert!(p.pos.x >= 0.0 && p.pos.x < WIDTH);
        assert!(p.pos.y >= 0.0 && p.pos.y < HEIGHT + WRAP_MARGIN_Y_NEAR);
        assert!(p.size >= SIZE_MIN && p.size < SIZE_MAX);
        assert!(p.density >= DENSITY_MIN && p.density < DENSITY_MAX);
        assert!(p.vel.x.abs() <= DRIFT_MAX && p.vel.y.abs() <= DRIFT_MAX);
        assert_eq!(p.color, palette.base);
    }
}

#[test]
fn field_step_wraps_strays() {
    let params = FieldParams::default();
    let palette = Palette::default();
    let mut stray = still_particle(WIDTH + 60.0, 100.0, palette.base);
    stray.vel = Vec2::ZERO;
    let mut field = ParticleField::from_particles(WIDTH, HEIGHT, vec![stray]);
    field.step(PointerState::default(), 0.0, &params, &palette);
    assert_eq!(field.particles()[0].pos.x, -50.0);
}
