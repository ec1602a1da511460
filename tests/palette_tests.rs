// Host-side tests for vibrant swatch extraction.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod palette {
    include!("../src/core/palette.rs");
}

use palette::*;

fn image(pixels: &[([u8; 4], usize)]) -> Vec<u8> {
    let mut out = Vec::new();
    for (px, count) in pixels {
        for _ in 0..*count {
            out.extend_from_slice(px);
        }
    }
    out
}

#[test]
fn hsl_of_primaries_and_greys() {
    let [h, s, l] = rgb_to_hsl([255, 0, 0]);
    assert!(h.abs() < 1e-3 && (s - 1.0).abs() < 1e-3 && (l - 0.5).abs() < 1e-3);
    let [h, _, _] = rgb_to_hsl([0, 0, 255]);
    assert!((h - 240.0).abs() < 1e-2);
    let [_, s, l] = rgb_to_hsl([128, 128, 128]);
    assert_eq!(s, 0.0);
    assert!((l - 128.0 / 255.0).abs() < 1e-4);
}

#[test]
fn quantize_skips_transparent_and_white_pixels() {
    let rgba = image(&[
        ([200, 30, 40, 255], 10),
        ([255, 255, 255, 255], 50),
        ([10, 200, 10, 20], 50),
    ]);
    let swatches = quantize(&rgba, 1);
    assert_eq!(swatches.len(), 1);
    assert_eq!(swatches[0].rgb, [200, 30, 40]);
    assert_eq!(swatches[0].population, 10);
}

#[test]
fn quantize_orders_by_population() {
    let rgba = image(&[([20, 20, 200, 255], 3), ([200, 20, 20, 255], 7)]);
    let swatches = quantize(&rgba, 1);
    assert_eq!(swatches[0].rgb, [200, 20, 20]);
    assert_eq!(swatches[1].population, 3);
}

#[test]
fn vibrant_prefers_saturated_mid_tones_over_a_large_grey() {
    let rgba = image(&[
        ([120, 120, 120, 255], 500), // big grey background
        ([30, 30, 35, 255], 200),    // too dark
        ([220, 60, 30, 255], 40),    // vibrant orange-red
    ]);
    let swatch = select(&quantize(&rgba, 1), &VIBRANT).unwrap();
    assert_eq!(swatch.rgb, [220, 60, 30]);
    let unit = vibrant_rgb(&rgba, 1).unwrap();
    assert!((unit[0] - 220.0 / 255.0).abs() < 1e-6);
}

#[test]
fn muted_target_picks_the_desaturated_swatch() {
    let rgba = image(&[([140, 120, 110, 255], 30), ([220, 60, 30, 255], 30)]);
    let swatch = select(&quantize(&rgba, 1), &MUTED).unwrap();
    assert_eq!(swatch.rgb, [140, 120, 110]);
}

#[test]
fn no_vibrant_swatch_in_a_grey_image() {
    let rgba = image(&[([100, 100, 100, 255], 64), ([60, 60, 60, 255], 64)]);
    assert_eq!(vibrant_rgb(&rgba, 1), None);
    assert_eq!(vibrant_rgb(&[], 5), None);
}

#[test]
fn sampling_step_thins_the_histogram() {
    let rgba = image(&[([220, 60, 30, 255], 100)]);
    assert_eq!(quantize(&rgba, 10)[0].population, 10);
    // step 0 behaves like 1
    assert_eq!(quantize(&rgba, 0)[0].population, 100);
}

#[test]
fn srgb_to_linear_endpoints() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    assert!(srgb_to_linear(0.5) < 0.5);
}
