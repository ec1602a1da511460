use crate::core::geometry::TunnelSpec;

/// Frame, camera and rendering tuning constants for the web frontend.
///
/// These constants express intended behavior (time constants, limits,
/// selectors) and keep magic numbers out of the code.
// DOM hooks
pub const CANVAS_ID: &str = "gallery-canvas";
pub const SLIDES_SELECTOR: &str = ".gallery-3d__slides";
pub const PREVIOUS_SELECTOR: &str = ".previous";
pub const NEXT_SELECTOR: &str = ".next";
pub const CAPTION_LAYER_CLASS: &str = "gallery-3d__captions";
pub const IMAGE_DATA_ATTRIBUTE: &str = "data-image";

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 1.0];

// Pointer parallax
pub const PARALLAX_STRENGTH: [f32; 2] = [0.6, 0.3]; // eye offset at the canvas edge
pub const PARALLAX_TAU_SEC: f32 = 0.35;

// Click vs drag discrimination for picking (canvas px)
pub const CLICK_MAX_TRAVEL_PX: f32 = 6.0;

// Lighting
pub const MAX_SPOTLIGHTS: usize = 16;
pub const LIGHT_UNIT_SCALE: f32 = 0.12; // maps spotlight intensity to shader units
pub const AMBIENT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const AMBIENT_INTENSITY: f32 = 0.08;
pub const CLEAR_COLOR: [f64; 3] = [0.01, 0.01, 0.015];

// Post-processing defaults
pub const BLOOM_STRENGTH: f32 = 0.8;
pub const BLOOM_THRESHOLD: f32 = 0.9;

// Corridor around the two walls
pub const TUNNEL: TunnelSpec = TunnelSpec {
    half_width: 5.6,
    floor_y: -4.0,
    ceiling_y: 4.5,
    z_near: 2.0,
    z_far: -34.0,
};

// Assets
pub const MAX_TEXTURE_DIM: u32 = 2048;
pub const PALETTE_SAMPLE_STEP: usize = 5;

// Cap for a single frame step so a backgrounded tab does not jump tweens
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
