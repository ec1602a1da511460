pub mod arranger;
pub mod camera;
pub mod constants;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod palette;
pub mod projection;
pub mod slide;
pub mod tween;

pub use arranger::*;
pub use camera::*;
pub use constants::*;
pub use error::SliderError;
pub use gallery::*;
pub use slide::*;

// Shaders bundled as string constants
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
