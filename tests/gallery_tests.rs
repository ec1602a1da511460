// Host-side tests for the gallery context: navigation, captions and asset completion.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod slide {
        include!("../src/core/slide.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
    pub mod arranger {
        include!("../src/core/arranger.rs");
    }
    pub mod gallery {
        include!("../src/core/gallery.rs");
    }
}

use crate::core::arranger::{CaptionHighlighter, NoCaptions, WallLayout};
use crate::core::constants::*;
use crate::core::error::SliderError;
use crate::core::gallery::{Gallery, GalleryConfig};
use crate::core::slide::AssetState;
use glam::{Quat, Vec3};

/// Records highlight calls and the resulting set of highlighted captions.
#[derive(Default)]
struct RecordingCaptions {
    calls: Vec<(usize, bool)>,
    lit: std::collections::BTreeSet<usize>,
}

impl CaptionHighlighter for RecordingCaptions {
    fn set_highlight(&mut self, slide_index: usize, active: bool) {
        self.calls.push((slide_index, active));
        if active {
            self.lit.insert(slide_index);
        } else {
            self.lit.remove(&slide_index);
        }
    }
}

fn gallery(n: usize) -> Gallery {
    Gallery::new((0..n).map(|i| format!("assets/{}.jpg", i)), GalleryConfig::default())
}

fn settle(g: &mut Gallery) {
    for _ in 0..200 {
        if !g.tick(1.0 / 60.0) {
            break;
        }
    }
}

fn snapshot(g: &Gallery) -> Vec<(Vec3, Quat, Vec3, f32, f32)> {
    g.slides()
        .iter()
        .map(|s| {
            (
                s.transform.position,
                s.transform.rotation,
                s.transform.scale,
                s.spotlight.target.z,
                s.spotlight.intensity,
            )
        })
        .collect()
}

#[test]
fn instant_arrangement_places_every_slide() {
    let mut g = gallery(11);
    g.set_active_slide(0, false, &mut NoCaptions).unwrap();
    assert!(!g.is_animating());

    let active = &g.slides()[0].transform;
    assert_eq!(active.position, Vec3::new(0.0, 0.0, -ARTWORK_ACTIVE_Z));
    assert_eq!(active.scale, Vec3::splat(ARTWORK_SCALE_ACTIVE));

    // right wall gets 1..=5 at increasing depth
    let mut last_z = f32::INFINITY;
    for i in 1..=5 {
        let p = g.slides()[i].transform.position;
        assert_eq!(p.x, ARTWORK_OFFSET_X);
        assert!(p.z < last_z);
        last_z = p.z;
    }
    // left wall gets 10, 9, ..., 6 at increasing depth
    let mut last_z = f32::INFINITY;
    for i in (6..=10).rev() {
        let p = g.slides()[i].transform.position;
        assert_eq!(p.x, -ARTWORK_OFFSET_X);
        assert!(p.z < last_z);
        last_z = p.z;
    }
}

#[test]
fn instant_set_is_idempotent_regardless_of_history() {
    let mut a = gallery(8);
    a.set_active_slide(3, false, &mut NoCaptions).unwrap();

    let mut b = gallery(8);
    b.set_active_slide(6, false, &mut NoCaptions).unwrap();
    b.set_active_slide(1, true, &mut NoCaptions).unwrap();
    b.tick(0.3);
    b.set_active_slide(3, false, &mut NoCaptions).unwrap();
    b.set_active_slide(3, false, &mut NoCaptions).unwrap();

    assert_eq!(snapshot(&a), snapshot(&b));
    assert!(!b.is_animating());
}

#[test]
fn animated_navigation_settles_on_instant_layout() {
    let mut animated = gallery(7);
    animated.set_active_slide(0, false, &mut NoCaptions).unwrap();
    assert_eq!(animated.next(&mut NoCaptions), Ok(1));
    assert!(animated.is_animating());
    settle(&mut animated);
    assert!(!animated.is_animating());

    let mut instant = gallery(7);
    instant.set_active_slide(1, false, &mut NoCaptions).unwrap();

    for (a, b) in snapshot(&animated).iter().zip(snapshot(&instant)) {
        assert!((a.0 - b.0).length() < 1e-4);
        assert!(a.1.angle_between(b.1) < 1e-3);
        assert!((a.2 - b.2).length() < 1e-4);
        assert!((a.3 - b.3).abs() < 1e-5);
        assert!((a.4 - b.4).abs() < 1e-4);
    }
}

#[test]
fn captions_follow_the_active_slide() {
    let mut g = gallery(4);
    let mut captions = RecordingCaptions::default();
    g.set_active_slide(0, false, &mut captions).unwrap();
    assert_eq!(captions.lit.iter().copied().collect::<Vec<_>>(), vec![0]);

    g.previous(&mut captions).unwrap();
    assert_eq!(captions.lit.iter().copied().collect::<Vec<_>>(), vec![3]);
    assert!(captions.calls.contains(&(0, false)));
    assert!(g.slides()[3].caption.highlighted);
    assert!(!g.slides()[0].caption.highlighted);
}

#[test]
fn out_of_range_leaves_everything_unchanged() {
    let mut g = gallery(5);
    let mut captions = RecordingCaptions::default();
    g.set_active_slide(2, false, &mut captions).unwrap();
    let before = snapshot(&g);
    let calls = captions.calls.len();

    assert_eq!(
        g.set_active_slide(9, true, &mut captions),
        Err(SliderError::IndexOutOfRange { index: 9, len: 5 })
    );
    assert!(g.go_to(5, &mut captions).is_err());
    assert_eq!(g.active_index(), Some(2));
    assert_eq!(snapshot(&g), before);
    assert_eq!(captions.calls.len(), calls);
    assert!(!g.is_animating());
}

#[test]
fn go_to_active_slide_is_a_no_op() {
    let mut g = gallery(5);
    g.set_active_slide(2, false, &mut NoCaptions).unwrap();
    g.go_to(2, &mut NoCaptions).unwrap();
    assert!(!g.is_animating());
}

#[test]
fn empty_gallery_reports_empty() {
    let mut g = gallery(0);
    assert!(g.is_empty());
    assert_eq!(g.next(&mut NoCaptions), Err(SliderError::Empty));
    assert_eq!(g.set_active_slide(0, false, &mut NoCaptions).err(), Some(SliderError::Empty));
}

#[test]
fn loaded_image_fits_aspect_and_colors_light() {
    let mut g = gallery(2);
    g.apply_loaded_image(0, 400, 800, Some([0.9, 0.2, 0.1])).unwrap();
    let s = &g.slides()[0];
    assert_eq!(s.picture.local.scale, Vec3::new(0.5, 1.0, 1.0));
    assert_eq!(s.picture.asset, AssetState::Ready { width: 400, height: 800 });
    assert_eq!(s.spotlight.color, [0.9, 0.2, 0.1]);

    g.apply_loaded_image(1, 1600, 900, None).unwrap();
    let s = &g.slides()[1];
    assert!((s.picture.local.scale.y - 0.5625).abs() < 1e-6);
    assert_eq!(s.spotlight.color, [1.0, 1.0, 1.0]);

    assert!(g.apply_loaded_image(2, 10, 10, None).is_err());
}

#[test]
fn failed_asset_keeps_placeholder() {
    let mut g = gallery(3);
    g.mark_asset_failed(1, [0.3, 0.4, 0.5]).unwrap();
    assert_eq!(g.slides()[1].picture.asset, AssetState::Failed);
    assert_eq!(g.slides()[1].picture.tint, [0.3, 0.4, 0.5]);
    assert_eq!(g.slides()[0].picture.asset, AssetState::Pending);
}

#[test]
fn world_matrices_follow_slide_transform() {
    let mut g = gallery(3);
    g.set_active_slide(0, false, &mut NoCaptions).unwrap();
    let s = &g.slides()[0];
    // picture sits half a unit left of the slide origin, scaled by the slide scale
    let center = s.picture_world().transform_point3(Vec3::ZERO);
    assert!((center - Vec3::new(-0.5 * ARTWORK_SCALE_ACTIVE, 0.0, -ARTWORK_ACTIVE_Z)).length() < 1e-5);
    let caption = s.caption_world().transform_point3(Vec3::ZERO);
    assert!((caption.x - 0.5 * ARTWORK_SCALE_ACTIVE).abs() < 1e-5);
    let (light, target) = s.spotlight_world();
    assert!(target.y < light.y);
}

#[test]
fn custom_layout_is_respected() {
    let config = GalleryConfig {
        layout: WallLayout {
            offset_x: 2.0,
            ..WallLayout::default()
        },
        ..GalleryConfig::default()
    };
    let mut g = Gallery::new(["a.jpg", "b.jpg", "c.jpg"], config);
    g.set_active_slide(0, false, &mut NoCaptions).unwrap();
    assert_eq!(g.slides()[1].transform.position.x, 2.0);
    assert_eq!(g.slides()[2].transform.position.x, -2.0);
}

#[test]
fn lighting_order_keeps_active_slide_beyond_light_budget() {
    let mut g = gallery(20);
    g.set_active_slide(17, false, &mut NoCaptions).unwrap();
    let order = g.lighting_order(16);

    assert_eq!(order.len(), 16);
    assert_eq!(order[0], 17);
    // nearest wall slots on each side follow the active slide
    assert_eq!(&order[1..5], &[18, 16, 19, 15]);
    let unique: std::collections::BTreeSet<_> = order.iter().copied().collect();
    assert_eq!(unique.len(), order.len());
    // the two deepest slots lose their lights
    assert!(!order.contains(&7) && !order.contains(&8) && !order.contains(&6));
}

#[test]
fn lighting_order_is_nearest_first_and_complete_within_budget() {
    let mut g = gallery(6);
    assert_eq!(g.lighting_order(16), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(g.lighting_order(2), vec![0, 1]);

    g.set_active_slide(0, false, &mut NoCaptions).unwrap();
    // even N: slide 3 is the opposite slide and hangs on the left wall
    assert_eq!(g.lighting_order(16), vec![0, 1, 5, 2, 4, 3]);
    assert!(gallery(0).lighting_order(16).is_empty());
}
