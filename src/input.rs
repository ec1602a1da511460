use glam::{Mat4, Vec2, Vec3};
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    pub down_at: Vec2,
}

/// Navigation request derived from user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Previous,
    Next,
    GoTo(usize),
}

#[inline]
pub fn nav_command_for_key(key: &str) -> Option<NavCommand> {
    match key {
        "ArrowLeft" => Some(NavCommand::Previous),
        "ArrowRight" => Some(NavCommand::Next),
        // digits 1..9 jump to slides 0..8
        d if d.len() == 1 => match d.as_bytes()[0] {
            b @ b'1'..=b'9' => Some(NavCommand::GoTo((b - b'1') as usize)),
            _ => None,
        },
        _ => None,
    }
}

/// Ray hit against a unit quad (XY plane, centered, facing +Z) placed by `world`.
///
/// Returns the ray parameter of the hit, or `None` when the ray misses the
/// quad or runs parallel to it.
#[inline]
pub fn ray_quad(ray_origin: Vec3, ray_dir: Vec3, world: Mat4) -> Option<f32> {
    let inv = world.inverse();
    let o = inv.transform_point3(ray_origin);
    let d = inv.transform_vector3(ray_dir);
    if d.z.abs() < 1e-6 {
        return None;
    }
    let s = -o.z / d.z;
    if s < 0.0 {
        return None;
    }
    let p = o + d * s;
    if p.x.abs() > 0.5 || p.y.abs() > 0.5 {
        return None;
    }
    // parameter along the original ray
    let hit = world.transform_point3(p);
    Some((hit - ray_origin).length() / ray_dir.length().max(1e-6))
}

/// Index of the nearest quad hit, if any.
pub fn pick_nearest(ray_origin: Vec3, ray_dir: Vec3, quads: &[Mat4]) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, world) in quads.iter().enumerate() {
        if let Some(t) = ray_quad(ray_origin, ray_dir, *world) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

#[inline]
pub fn pointer_canvas_uv(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> [f32; 2] {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        let u = (x_css / w).clamp(0.0, 1.0);
        let v = (y_css / h).clamp(0.0, 1.0);
        [u, v]
    } else {
        [0.5, 0.5]
    }
}
