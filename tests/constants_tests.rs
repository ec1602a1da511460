// Host-side tests for constants and their geometric relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
}
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(TWEEN_DURATION_SEC > 0.0);
    assert!(PARALLAX_TAU_SEC > 0.0);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC <= TWEEN_DURATION_SEC);
    assert!(CLICK_MAX_TRAVEL_PX > 0.0);

    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);

    assert!(SPOTLIGHT_PENUMBRA >= 0.0 && SPOTLIGHT_PENUMBRA <= 1.0);
    assert!(SPOTLIGHT_ANGLE > 0.0 && SPOTLIGHT_ANGLE < std::f32::consts::FRAC_PI_2);
    assert!(LIGHT_INTENSITY_HIGHLIGHT > LIGHT_INTENSITY_DEFAULT);
    assert!(BLOOM_THRESHOLD > 0.0 && BLOOM_STRENGTH >= 0.0);
    assert!(MAX_TEXTURE_DIM.is_power_of_two());
    assert!(PALETTE_SAMPLE_STEP >= 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn walls_fit_inside_the_tunnel() {
    // wall pictures hang inside the corridor
    assert!(ARTWORK_OFFSET_X < TUNNEL.half_width);
    assert!(TUNNEL.floor_y < ARTWORK_Y_INACTIVE - ARTWORK_SCALE_INACTIVE * 0.5);
    assert!(TUNNEL.ceiling_y > ARTWORK_SCALE_ACTIVE * 0.5);
    assert!(TUNNEL.z_near > CAMERA_EYE[2]);
    // deeper than the fifth wall slot of an eleven-slide gallery
    assert!(TUNNEL.z_far < -(ARTWORK_OFFSET_Z + 5.0 * ARTWORK_SCALE_INACTIVE));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn active_slide_is_in_front_of_the_camera() {
    assert!(-ARTWORK_ACTIVE_Z < CAMERA_EYE[2]);
    assert!(CAMERA_EYE[2] + ARTWORK_ACTIVE_Z < CAMERA_FAR);
    assert_eq!(ACTIVE_CAPTION_CLASS, "active");
}

#[test]
fn dom_hooks_are_selectors() {
    assert!(SLIDES_SELECTOR.starts_with('.'));
    assert!(PREVIOUS_SELECTOR.starts_with('.'));
    assert!(NEXT_SELECTOR.starts_with('.'));
    assert!(!CANVAS_ID.starts_with('#'));
    assert!(IMAGE_DATA_ATTRIBUTE.starts_with("data-"));
}

#[test]
fn light_budget_covers_a_typical_gallery() {
    assert!(MAX_SPOTLIGHTS >= 11);
    assert!(LIGHT_UNIT_SCALE * LIGHT_INTENSITY_HIGHLIGHT > 1.0);
}
