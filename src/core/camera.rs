// Camera description shared by the renderer and the caption layer.
//
// Nothing here touches platform APIs; the web frontend feeds it the canvas
// size and pointer position and reads back view/projection matrices.

use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Perspective camera at `eye` looking down -Z.
    pub fn looking_forward(eye: Vec3, fovy_degrees: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            eye,
            target: eye - Vec3::Z,
            up: Vec3::Y,
            aspect,
            fovy_radians: fovy_degrees.to_radians(),
            znear,
            zfar,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }
}

/// Pointer-driven camera drift: the eye eases toward an offset derived from
/// the pointer position while the view direction stays fixed.
#[derive(Clone, Debug)]
pub struct Parallax {
    pub base_eye: Vec3,
    pub strength: Vec2,
    pub tau_sec: f32,
    offset: Vec2,
    target: Vec2,
}

impl Parallax {
    pub fn new(base_eye: Vec3, strength: Vec2, tau_sec: f32) -> Self {
        Self {
            base_eye,
            strength,
            tau_sec,
            offset: Vec2::ZERO,
            target: Vec2::ZERO,
        }
    }

    /// `uv` is the pointer position in [0, 1]², origin top-left.
    pub fn set_pointer_uv(&mut self, uv: [f32; 2]) {
        let u = uv[0].clamp(0.0, 1.0) - 0.5;
        let v = 0.5 - uv[1].clamp(0.0, 1.0);
        self.target = Vec2::new(u, v) * self.strength;
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Exponential approach toward the target offset, then move the camera.
    pub fn step(&mut self, camera: &mut Camera, dt_sec: f32) {
        let alpha = if self.tau_sec <= 0.0 {
            1.0
        } else {
            1.0 - (-dt_sec.max(0.0) / self.tau_sec).exp()
        };
        self.offset += (self.target - self.offset) * alpha;
        camera.eye = self.base_eye + self.offset.extend(0.0);
        camera.target = camera.eye - Vec3::Z;
    }
}
