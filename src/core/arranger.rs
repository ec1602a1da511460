// Slide arrangement: which slide stands where for a given active index.
//
// For `N` slides and `k = floor(N / 2)`, right-wall slot `i` holds
// `(active + i + 1) mod N` and left-wall slot `i` holds
// `(active - i - 1) mod N`. With an even `N` both last slots name the slide
// opposite the active one; it belongs to the left wall and the right wall
// keeps `k - 1` slots, so every slide gets exactly one role.

use glam::{Quat, Vec3};
use smallvec::SmallVec;

use super::constants::*;
use super::error::SliderError;
use super::slide::SlidePose;

pub type WallIndices = SmallVec<[usize; 8]>;

/// Role of one slide in an arrangement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideRole {
    Active,
    RightWall(usize),
    LeftWall(usize),
}

/// Derived view of `(active, len)`; recomputed on every navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arrangement {
    pub active: usize,
    pub right: WallIndices,
    pub left: WallIndices,
}

impl Arrangement {
    pub fn compute(active: usize, len: usize) -> Result<Self, SliderError> {
        if len == 0 {
            return Err(SliderError::Empty);
        }
        if active >= len {
            return Err(SliderError::IndexOutOfRange { index: active, len });
        }
        let k = len / 2;
        let left: WallIndices = (0..k).map(|i| (active + len - (i + 1)) % len).collect();
        let right: WallIndices = (0..k)
            .map(|i| (active + i + 1) % len)
            .filter(|index| !left.contains(index))
            .collect();
        Ok(Self {
            active,
            right,
            left,
        })
    }

    /// Every slide paired with its role, active first, then right, then left.
    pub fn roles(&self) -> impl Iterator<Item = (usize, SlideRole)> + '_ {
        std::iter::once((self.active, SlideRole::Active))
            .chain(
                self.right
                    .iter()
                    .enumerate()
                    .map(|(slot, &index)| (index, SlideRole::RightWall(slot))),
            )
            .chain(
                self.left
                    .iter()
                    .enumerate()
                    .map(|(slot, &index)| (index, SlideRole::LeftWall(slot))),
            )
    }

    pub fn role_of(&self, index: usize) -> Option<SlideRole> {
        self.roles().find(|(i, _)| *i == index).map(|(_, role)| role)
    }
}

/// Geometry of the two walls and the center stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallLayout {
    pub offset_x: f32,
    pub offset_z: f32,
    pub y_inactive: f32,
    pub scale_inactive: f32,
    pub scale_active: f32,
    pub active_z: f32,
    pub light_target_z_inactive: f32,
    pub light_target_z_active: f32,
    pub light_intensity_default: f32,
    pub light_intensity_highlight: f32,
}

impl Default for WallLayout {
    fn default() -> Self {
        Self {
            offset_x: ARTWORK_OFFSET_X,
            offset_z: ARTWORK_OFFSET_Z,
            y_inactive: ARTWORK_Y_INACTIVE,
            scale_inactive: ARTWORK_SCALE_INACTIVE,
            scale_active: ARTWORK_SCALE_ACTIVE,
            active_z: ARTWORK_ACTIVE_Z,
            light_target_z_inactive: INACTIVE_LIGHT_TARGET_Z,
            light_target_z_active: ACTIVE_LIGHT_TARGET_Z,
            light_intensity_default: LIGHT_INTENSITY_DEFAULT,
            light_intensity_highlight: LIGHT_INTENSITY_HIGHLIGHT,
        }
    }
}

impl WallLayout {
    /// Orientation of right-wall slides: yawed to face the corridor axis.
    pub fn right_rotation() -> Quat {
        Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2)
    }

    pub fn left_rotation() -> Quat {
        Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)
    }

    pub fn pose_for(&self, role: SlideRole) -> SlidePose {
        match role {
            SlideRole::Active => SlidePose {
                position: Vec3::new(0.0, 0.0, -self.active_z),
                rotation: Quat::IDENTITY,
                scale: self.scale_active,
                light_target_z: self.light_target_z_active,
                light_intensity: self.light_intensity_highlight,
            },
            SlideRole::RightWall(slot) => self.wall_pose(slot, self.offset_x, Self::right_rotation()),
            SlideRole::LeftWall(slot) => self.wall_pose(slot, -self.offset_x, Self::left_rotation()),
        }
    }

    fn wall_pose(&self, slot: usize, x: f32, rotation: Quat) -> SlidePose {
        SlidePose {
            position: Vec3::new(
                x,
                self.y_inactive,
                -(slot as f32) * self.scale_inactive - self.offset_z,
            ),
            rotation,
            scale: self.scale_inactive,
            light_target_z: self.light_target_z_inactive,
            light_intensity: self.light_intensity_default,
        }
    }
}

/// Receives the `active` marker changes for slide captions.
pub trait CaptionHighlighter {
    fn set_highlight(&mut self, slide_index: usize, active: bool);
}

/// Highlighter for contexts without a caption layer.
#[derive(Debug, Default)]
pub struct NoCaptions;

impl CaptionHighlighter for NoCaptions {
    fn set_highlight(&mut self, _slide_index: usize, _active: bool) {}
}

/// Holds the single navigation state variable and the wall layout.
#[derive(Clone, Debug)]
pub struct SlideArranger {
    len: usize,
    active: Option<usize>,
    pub layout: WallLayout,
}

impl SlideArranger {
    pub fn new(len: usize, layout: WallLayout) -> Self {
        Self {
            len,
            active: None,
            layout,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Compute the arrangement for `active` and commit it as the new state.
    pub fn arrange(&mut self, active: usize) -> Result<Arrangement, SliderError> {
        let arrangement = Arrangement::compute(active, self.len)?;
        self.active = Some(active);
        Ok(arrangement)
    }

    /// Index `next` would move to. An unarranged slider starts from 0.
    pub fn next_index(&self) -> Result<usize, SliderError> {
        if self.len == 0 {
            return Err(SliderError::Empty);
        }
        Ok(self.active.map_or(0, |a| (a + 1) % self.len))
    }

    pub fn previous_index(&self) -> Result<usize, SliderError> {
        if self.len == 0 {
            return Err(SliderError::Empty);
        }
        Ok(self.active.map_or(0, |a| (a + self.len - 1) % self.len))
    }
}
