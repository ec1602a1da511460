// CSS `matrix3d` transforms that pin DOM captions into the 3D scene.
//
// The caption container gets `perspective: <fov px>`; an inner camera
// element carries the inverse camera transform, and each caption carries
// its world matrix. CSS has Y pointing down, hence the sign flips.

use glam::Mat4;

const CSS_EPSILON: f64 = 1e-10;

fn epsilon(v: f32) -> String {
    if (v as f64).abs() < CSS_EPSILON {
        "0".to_string()
    } else {
        format!("{}", v)
    }
}

fn matrix3d(values: [f32; 16]) -> String {
    let parts: Vec<String> = values.iter().map(|v| epsilon(*v)).collect();
    format!("matrix3d({})", parts.join(","))
}

/// Distance in CSS pixels from the eye to the projection plane.
pub fn perspective_px(fovy_radians: f32, viewport_height: f32) -> f32 {
    0.5 * viewport_height / (fovy_radians * 0.5).tan()
}

/// Transform for the camera element, given the camera's view (world-inverse) matrix.
pub fn camera_css_transform(view: Mat4, fovy_radians: f32, width: f32, height: f32) -> String {
    let e = view.to_cols_array();
    let flipped = [
        e[0], -e[1], e[2], e[3], e[4], -e[5], e[6], e[7], e[8], -e[9], e[10], e[11], e[12], -e[13],
        e[14], e[15],
    ];
    format!(
        "translateZ({}px){}translate({}px,{}px)",
        epsilon(perspective_px(fovy_radians, height)),
        matrix3d(flipped),
        epsilon(width * 0.5),
        epsilon(height * 0.5)
    )
}

/// Transform for one caption element, given its world matrix.
pub fn object_css_transform(world: Mat4) -> String {
    let e = world.to_cols_array();
    let flipped = [
        e[0], e[1], e[2], e[3], -e[4], -e[5], -e[6], -e[7], e[8], e[9], e[10], e[11], e[12], e[13],
        e[14], e[15],
    ];
    format!("translate(-50%,-50%){}", matrix3d(flipped))
}
