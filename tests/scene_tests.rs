// Host-side tests for the scene controller.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod viz {
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod sampling {
        include!("../src/core/sampling.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use viz::color::{hsl_to_rgb, sweep_hue};
use viz::constants::*;
use viz::scene::*;

fn make_scene() -> SceneController {
    SceneController::new(SceneConfig::default())
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn starts_empty_with_five_material_groups() {
    let scene = make_scene();
    assert_eq!(scene.particle_count(), 0);
    assert!(scene.particles().is_empty());
    assert_eq!(scene.groups().len(), GROUP_COLORS.len());
    assert_eq!(scene.camera().position.z, DEFAULT_CAMERA_Z);
    assert_eq!(scene.spread_distance(), DEFAULT_SPREAD_DISTANCE);
}

#[test]
fn particle_count_grows_then_shrinks_to_exact_targets() {
    let mut scene = make_scene();
    for (n1, n2) in [(0usize, 1usize), (3, 7), (10, 50), (0, 181)] {
        scene.set_particle_count(n1);
        scene.set_particle_count(n2);
        assert_eq!(scene.particle_count(), n2);
        assert_eq!(scene.particles().len(), n2);
        scene.set_particle_count(n1);
        assert_eq!(scene.particle_count(), n1);
        assert_eq!(scene.particles().len(), n1);
    }
}

#[test]
fn repeated_identical_counts_are_idempotent() {
    let mut scene = make_scene();
    scene.set_particle_count(25);
    let before: Vec<_> = scene.particles().iter().map(|p| p.position).collect();
    scene.set_particle_count(25);
    scene.set_particle_count(25);
    let after: Vec<_> = scene.particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
    assert_eq!(scene.particle_count(), 25);
}

#[test]
fn shrinking_removes_oldest_particles_first() {
    let mut scene = make_scene();
    scene.set_particle_count(50);
    let tail: Vec<_> = scene.particles()[40..].iter().map(|p| p.position).collect();
    scene.set_particle_count(10);
    let kept: Vec<_> = scene.particles().iter().map(|p| p.position).collect();
    assert_eq!(kept, tail);
}

#[test]
fn particles_stay_inside_the_spread_sphere() {
    let mut scene = make_scene();
    scene.set_particle_count(200);
    for p in scene.particles() {
        assert!(p.position.length() <= DEFAULT_SPREAD_DISTANCE);
    }
    for radius in [0.5_f32, 10.0, 1270.0] {
        scene.set_spread_distance(radius);
        assert_eq!(scene.particle_count(), 200);
        assert_eq!(scene.spread_distance(), radius);
        for p in scene.particles() {
            assert!(
                p.position.length() <= radius,
                "{} outside radius {}",
                p.position.length(),
                radius
            );
        }
    }
}

#[test]
fn zero_spread_collapses_to_origin() {
    let mut scene = make_scene();
    scene.set_particle_count(20);
    scene.set_spread_distance(0.0);
    assert!(scene.particles().iter().all(|p| p.position == glam::Vec3::ZERO));
    // regeneration uses the recorded distance
    scene.set_particle_count(40);
    assert!(scene.particles().iter().all(|p| p.position == glam::Vec3::ZERO));
}

#[test]
fn regenerated_particles_cycle_through_groups() {
    let mut scene = make_scene();
    scene.set_particle_count(12);
    for (i, p) in scene.particles().iter().enumerate() {
        assert_eq!(p.group, i % GROUP_COLORS.len());
        for a in p.orientation.to_array() {
            assert!((0.0..INITIAL_ORIENTATION_MAX).contains(&a));
        }
    }
    for g in scene.groups() {
        assert!(g.sprite_layer < SPRITE_LAYERS);
        assert_eq!(g.size, GROUP_POINT_SIZE);
    }
}

#[test]
fn hsl_channels_reach_materials_unchanged() {
    let mut scene = make_scene();
    scene.set_particle_count(5);
    for hsl in [[0.0_f32, 0.0, 0.0], [0.25, 0.5, 0.75], [1.0, 1.0, 1.0], [0.3, 0.9, 0.1]] {
        scene.set_hue(hsl[0]);
        scene.set_saturation(hsl[1]);
        scene.set_lightness(hsl[2]);
        scene.render_frame(0.0);
        assert_eq!(scene.hsl(), hsl);
        for g in scene.groups() {
            assert_eq!(g.hsl, hsl);
        }
        let rgb = hsl_to_rgb(hsl[0], hsl[1], hsl[2]);
        for p in scene.particles() {
            assert_eq!(p.color, rgb);
            assert_eq!(scene.groups()[p.group].rgb, p.color);
        }
    }
}

#[test]
fn out_of_range_hsl_is_stored_as_given() {
    let mut scene = make_scene();
    scene.set_hue(1.5);
    scene.set_lightness(-0.2);
    assert_eq!(scene.hsl()[0], 1.5);
    assert_eq!(scene.hsl()[2], -0.2);
}

#[test]
fn camera_x_and_y_follow_relative_drag_formulas() {
    let mut scene = make_scene();
    // rising from knob 0: pos += value - pos
    scene.set_camera_axis(Axis::X, 50.0);
    assert!(approx(scene.camera().position.x, 50.0));
    assert_eq!(scene.knob(Axis::X), 50.0);
    // falling: pos -= value + pos
    scene.set_camera_axis(Axis::X, 30.0);
    assert!(approx(scene.camera().position.x, 50.0 - (30.0 + 50.0)));
    // equal reading counts as falling
    let before = scene.camera().position.x;
    scene.set_camera_axis(Axis::X, 30.0);
    assert!(approx(scene.camera().position.x, before - (30.0 + before)));

    scene.set_camera_axis(Axis::Y, 25.0);
    assert!(approx(scene.camera().position.y, 25.0));
    scene.set_camera_axis(Axis::Y, 100.0);
    assert!(approx(scene.camera().position.y, 25.0 + (100.0 - 25.0)));
}

#[test]
fn camera_z_runs_inverted() {
    let mut scene = make_scene();
    let z0 = scene.camera().position.z;
    scene.set_camera_axis(Axis::Z, 25.0);
    let z1 = z0 - (25.0 + z0);
    assert!(approx(scene.camera().position.z, z1));
    scene.set_camera_axis(Axis::Z, 10.0);
    assert!(approx(scene.camera().position.z, z1 + (10.0 - z1)));
    assert_eq!(scene.knob(Axis::Z), 10.0);
}

#[test]
fn rotate_accumulates_per_axis() {
    let mut scene = make_scene();
    scene.set_particle_count(8);
    let before: Vec<_> = scene.particles().iter().map(|p| p.orientation).collect();
    scene.rotate(Axis::X, 1000.0);
    scene.rotate(Axis::X, 1000.0);
    scene.rotate(Axis::Z, 2000.0);
    for (p, b) in scene.particles().iter().zip(&before) {
        assert!(approx(p.orientation.x - b.x, 0.1));
        assert!(approx(p.orientation.y, b.y));
        assert!(approx(p.orientation.z - b.z, 0.1));
    }
    assert!((scene.rotation() - 0.1).abs() < 1e-6);
}

#[test]
fn auto_rotation_ignores_manual_rotate_calls() {
    let mut scene = make_scene();
    scene.set_particle_count(6);
    scene.set_auto_rotate(true, 0.0);
    scene.rotate(Axis::Y, 5000.0);
    scene.render_frame(20_000.0);
    assert!((scene.rotation() - 20_000.0 * TIME_ROTATION_SCALE).abs() < 1e-9);
    for p in scene.particles() {
        assert!(approx(p.orientation.y, 1.0));
    }
}

#[test]
fn disabling_auto_rotation_freezes_the_time_angle() {
    let mut scene = make_scene();
    scene.set_auto_rotate(true, 0.0);
    scene.set_auto_rotate(false, 40_000.0);
    assert!(!scene.auto_rotate());
    assert!((scene.rotation() - 2.0).abs() < 1e-9);
    scene.render_frame(90_000.0);
    assert!((scene.rotation() - 2.0).abs() < 1e-9);
}

#[test]
fn random_colors_alternate_sweep_hues() {
    let mut scene = make_scene();
    scene.set_particle_count(4);
    scene.set_saturation(0.6);
    scene.set_lightness(0.4);
    scene.set_random_colors(true);
    let now = 1234.0;
    scene.render_frame(now);
    for (i, p) in scene.particles().iter().enumerate() {
        let h = sweep_hue(SWEEP_HUES[i % 2], now, TIME_ROTATION_SCALE);
        assert_eq!(p.color, hsl_to_rgb(h, 0.6, 0.4));
    }
    assert_ne!(scene.particles()[0].color, scene.particles()[1].color);
}

#[test]
fn render_frame_describes_every_particle() {
    let mut scene = make_scene();
    scene.set_particle_count(30);
    let count = scene.particle_count();
    let view = scene.render_frame(5_000.0);
    assert_eq!(view.sprites.len(), count);
    assert_eq!(view.camera.target, glam::Vec3::ZERO);
    for s in view.sprites {
        let d = glam::Vec3::from_array(s.position).length();
        assert!(d <= DEFAULT_SPREAD_DISTANCE + 1e-2);
        assert!(s.layer < SPRITE_LAYERS);
        assert_eq!(s.color[3], 1.0);
    }
}

#[test]
fn resize_updates_camera_aspect() {
    let mut scene = make_scene();
    scene.resize(1200, 600);
    assert!(approx(scene.camera().aspect, 2.0));
    scene.resize(800, 0);
    assert!(scene.camera().aspect.is_finite());
    assert!(scene.camera().view_proj().is_finite());
}

#[test]
fn end_to_end_count_and_rotation_scenario() {
    let mut scene = make_scene();
    assert_eq!(scene.particle_count(), 0);

    scene.set_particle_count(50);
    assert_eq!(scene.particle_count(), 50);
    assert!(scene
        .particles()
        .iter()
        .all(|p| p.position.length() <= DEFAULT_SPREAD_DISTANCE));

    let survivors: Vec<_> = scene.particles()[40..].iter().map(|p| p.position).collect();
    scene.set_particle_count(10);
    assert_eq!(scene.particle_count(), 10);
    let kept: Vec<_> = scene.particles().iter().map(|p| p.position).collect();
    assert_eq!(kept, survivors);

    let before: Vec<f32> = scene.particles().iter().map(|p| p.orientation.y).collect();
    scene.rotate(Axis::Y, 1000.0);
    for (p, b) in scene.particles().iter().zip(before) {
        assert!(approx(p.orientation.y - b, 0.05));
    }
    assert!((scene.rotation() - 0.05).abs() < 1e-6);
}

#[test]
fn seed_decides_the_cloud() {
    let positions = |seed: u64| {
        let mut scene = SceneController::new(SceneConfig {
            seed,
            ..SceneConfig::default()
        });
        scene.set_particle_count(20);
        scene
            .particles()
            .iter()
            .map(|p| p.position)
            .collect::<Vec<_>>()
    };
    assert_eq!(positions(DEFAULT_SEED), positions(DEFAULT_SEED));
    assert_ne!(positions(DEFAULT_SEED), positions(DEFAULT_SEED + 1));
}
