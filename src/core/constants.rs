use glam::Vec3;

// Shared slide layout constants used by the arranger and the web frontend.

// Wall layout
pub const ARTWORK_OFFSET_X: f32 = 5.0; // distance of each wall from the corridor axis
pub const ARTWORK_OFFSET_Z: f32 = 4.0; // depth of the first wall slot
pub const ARTWORK_Y_INACTIVE: f32 = -1.0; // wall slides hang slightly lower
pub const ARTWORK_SCALE_INACTIVE: f32 = 4.0; // also the Z spacing between wall slots
pub const ARTWORK_SCALE_ACTIVE: f32 = 4.0;
pub const ARTWORK_ACTIVE_Z: f32 = 4.0;

// Spotlights
pub const ACTIVE_LIGHT_TARGET_Z: f32 = -0.5;
pub const INACTIVE_LIGHT_TARGET_Z: f32 = 0.0;
pub const LIGHT_INTENSITY_DEFAULT: f32 = 10.0;
pub const LIGHT_INTENSITY_HIGHLIGHT: f32 = 14.0;
pub const SPOTLIGHT_ANGLE: f32 = std::f32::consts::PI * 0.2;
pub const SPOTLIGHT_PENUMBRA: f32 = 1.0;
pub const SPOTLIGHT_DECAY: f32 = 0.3;

// Local offsets inside a slide
pub const PICTURE_LOCAL_OFFSET: Vec3 = Vec3::new(-0.5, 0.0, 0.0);
pub const CAPTION_LOCAL_OFFSET: Vec3 = Vec3::new(0.5, 0.0, 0.0);
pub const CAPTION_LOCAL_SCALE: Vec3 = Vec3::new(0.007, 0.007, 1.0);
pub const SPOTLIGHT_TARGET_LOCAL: Vec3 = Vec3::new(-0.5, -1.0, 0.0);

// Animation
pub const TWEEN_DURATION_SEC: f32 = 1.0;

// Caption class toggled on the active slide
pub const ACTIVE_CAPTION_CLASS: &str = "active";
