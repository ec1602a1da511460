// Per-slide scene records.
//
// A slide groups a picture, its caption and its spotlight under one
// transform. Every part is a named field so the renderer and the caption
// layer never rely on child ordering.

use glam::{Mat4, Quat, Vec3};

use super::constants::*;

/// Position, orientation and scale of a scene node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_translation_scale(position: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            scale,
        }
    }

    /// Local-to-parent matrix (scale, then rotate, then translate).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// Load state of the picture texture backing a slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AssetState {
    #[default]
    Pending,
    Ready {
        width: u32,
        height: u32,
    },
    Failed,
}

/// The framed picture mesh (a unit quad in local space).
#[derive(Clone, Debug)]
pub struct Picture {
    pub url: String,
    pub local: Transform,
    pub asset: AssetState,
    /// Flat color drawn until (or instead of) the texture.
    pub tint: [f32; 3],
}

impl Picture {
    /// Fit the unit quad to the image aspect ratio, keeping the longer side at 1.
    pub fn fit_aspect(&mut self, width: u32, height: u32) {
        let (w, h) = (width.max(1) as f32, height.max(1) as f32);
        self.local.scale = if width < height {
            Vec3::new(w / h, 1.0, 1.0)
        } else {
            Vec3::new(1.0, h / w, 1.0)
        };
    }
}

/// DOM caption projected beside the picture.
#[derive(Clone, Debug)]
pub struct Caption {
    pub local: Transform,
    pub highlighted: bool,
}

/// Spotlight aimed at `target` (both in slide-local space).
#[derive(Clone, Debug)]
pub struct SpotLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub angle: f32,
    pub penumbra: f32,
    pub decay: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            intensity: LIGHT_INTENSITY_DEFAULT,
            angle: SPOTLIGHT_ANGLE,
            penumbra: SPOTLIGHT_PENUMBRA,
            decay: SPOTLIGHT_DECAY,
            position: PICTURE_LOCAL_OFFSET,
            target: SPOTLIGHT_TARGET_LOCAL,
        }
    }
}

/// One positional slot of the carousel.
#[derive(Clone, Debug)]
pub struct Slide {
    pub index: usize,
    pub transform: Transform,
    pub picture: Picture,
    pub caption: Caption,
    pub spotlight: SpotLight,
}

impl Slide {
    pub fn new(index: usize, url: impl Into<String>) -> Self {
        Self {
            index,
            transform: Transform::default(),
            picture: Picture {
                url: url.into(),
                local: Transform::from_translation_scale(PICTURE_LOCAL_OFFSET, Vec3::ONE),
                asset: AssetState::Pending,
                tint: [0.08, 0.08, 0.1],
            },
            caption: Caption {
                local: Transform::from_translation_scale(CAPTION_LOCAL_OFFSET, CAPTION_LOCAL_SCALE),
                highlighted: false,
            },
            spotlight: SpotLight::default(),
        }
    }

    pub fn picture_world(&self) -> Mat4 {
        self.transform.matrix() * self.picture.local.matrix()
    }

    pub fn caption_world(&self) -> Mat4 {
        self.transform.matrix() * self.caption.local.matrix()
    }

    /// World-space spotlight position and target.
    pub fn spotlight_world(&self) -> (Vec3, Vec3) {
        let m = self.transform.matrix();
        (
            m.transform_point3(self.spotlight.position),
            m.transform_point3(self.spotlight.target),
        )
    }
}

/// Target state pushed to a slide by the arranger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlidePose {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
    pub light_target_z: f32,
    pub light_intensity: f32,
}
