// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::{Mat4, Quat, Vec3};
use input::*;

#[test]
fn arrow_keys_step_and_digits_jump() {
    assert_eq!(nav_command_for_key("ArrowLeft"), Some(NavCommand::Previous));
    assert_eq!(nav_command_for_key("ArrowRight"), Some(NavCommand::Next));
    assert_eq!(nav_command_for_key("1"), Some(NavCommand::GoTo(0)));
    assert_eq!(nav_command_for_key("9"), Some(NavCommand::GoTo(8)));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["0", "a", "ArrowUp", "Enter", "", "12", " "] {
        assert_eq!(nav_command_for_key(key), None, "{:?}", key);
    }
}

#[test]
fn ray_hits_facing_quad() {
    let world = Mat4::from_translation(Vec3::new(0.0, 0.0, -4.0));
    let t = ray_quad(Vec3::ZERO, Vec3::NEG_Z, world).unwrap();
    assert!((t - 4.0).abs() < 1e-5);
}

#[test]
fn ray_misses_outside_edges_and_behind() {
    let world = Mat4::from_translation(Vec3::new(0.0, 0.0, -4.0));
    assert!(ray_quad(Vec3::new(0.6, 0.0, 0.0), Vec3::NEG_Z, world).is_none());
    assert!(ray_quad(Vec3::ZERO, Vec3::Z, world).is_none());
    // parallel to the quad plane
    assert!(ray_quad(Vec3::ZERO, Vec3::X, world).is_none());
}

#[test]
fn ray_respects_scale_and_rotation() {
    // a wall picture: scaled by 4 and yawed to face -X at x = 5
    let world = Mat4::from_scale_rotation_translation(
        Vec3::splat(4.0),
        Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2),
        Vec3::new(5.0, 0.0, -6.0),
    );
    let t = ray_quad(Vec3::new(0.0, 1.5, -6.5), Vec3::X, world).unwrap();
    assert!((t - 5.0).abs() < 1e-4);
    assert!(ray_quad(Vec3::new(0.0, 2.5, -6.0), Vec3::X, world).is_none());
}

#[test]
fn pick_returns_nearest_hit() {
    let quads = [
        Mat4::from_translation(Vec3::new(0.0, 0.0, -8.0)),
        Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0)),
        Mat4::from_translation(Vec3::new(3.0, 0.0, -1.0)),
    ];
    assert_eq!(pick_nearest(Vec3::ZERO, Vec3::NEG_Z, &quads), Some(1));
    assert_eq!(pick_nearest(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Z, &quads), None);
    assert_eq!(pick_nearest(Vec3::ZERO, Vec3::NEG_Z, &[]), None);
}

#[test]
fn mouse_state_defaults_to_released() {
    let ms = MouseState::default();
    assert!(!ms.down);
    assert_eq!(ms.down_at, glam::Vec2::ZERO);
}
