// Dominant "vibrant" color extraction for tinting slide spotlights.
//
// Pixels are bucketed into a 5-bit-per-channel histogram; each bucket
// becomes a swatch with its mean color and population. A target describes
// the wanted lightness/saturation band and the best-scoring swatch inside
// the band wins.

use fnv::FnvHashMap;

/// Pixels with alpha below this are ignored.
const MIN_ALPHA: u8 = 125;
/// Pixels brighter than this on every channel are ignored as background.
const WHITE_CUTOFF: u8 = 250;

const WEIGHT_SATURATION: f32 = 3.0;
const WEIGHT_LUMA: f32 = 6.5;
const WEIGHT_POPULATION: f32 = 0.5;

/// A palette entry: mean sRGB color of a histogram bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub rgb: [u8; 3],
    pub population: u32,
}

impl Swatch {
    /// Hue in degrees, saturation and lightness in [0, 1].
    pub fn hsl(&self) -> [f32; 3] {
        rgb_to_hsl(self.rgb)
    }

    pub fn to_unit_rgb(&self) -> [f32; 3] {
        [
            self.rgb[0] as f32 / 255.0,
            self.rgb[1] as f32 / 255.0,
            self.rgb[2] as f32 / 255.0,
        ]
    }
}

/// Lightness/saturation band a swatch must fall into, with preferred values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub min_luma: f32,
    pub target_luma: f32,
    pub max_luma: f32,
    pub min_saturation: f32,
    pub target_saturation: f32,
    pub max_saturation: f32,
}

pub const VIBRANT: Target = Target {
    min_luma: 0.3,
    target_luma: 0.5,
    max_luma: 0.7,
    min_saturation: 0.35,
    target_saturation: 1.0,
    max_saturation: 1.0,
};

pub const MUTED: Target = Target {
    min_luma: 0.3,
    target_luma: 0.5,
    max_luma: 0.7,
    min_saturation: 0.0,
    target_saturation: 0.3,
    max_saturation: 0.4,
};

/// Build swatches from tightly packed RGBA8 pixels, sampling every `step`-th pixel.
pub fn quantize(rgba: &[u8], step: usize) -> Vec<Swatch> {
    let step = step.max(1);
    let mut buckets: FnvHashMap<u16, ([u64; 3], u32)> = FnvHashMap::default();
    for px in rgba.chunks_exact(4).step_by(step) {
        let (r, g, b, a) = (px[0], px[1], px[2], px[3]);
        if a < MIN_ALPHA || (r > WHITE_CUTOFF && g > WHITE_CUTOFF && b > WHITE_CUTOFF) {
            continue;
        }
        let key = ((r as u16 >> 3) << 10) | ((g as u16 >> 3) << 5) | (b as u16 >> 3);
        let entry = buckets.entry(key).or_insert(([0; 3], 0));
        entry.0[0] += r as u64;
        entry.0[1] += g as u64;
        entry.0[2] += b as u64;
        entry.1 += 1;
    }
    let mut swatches: Vec<Swatch> = buckets
        .into_values()
        .map(|(sum, n)| {
            let n64 = n as u64;
            Swatch {
                rgb: [
                    (sum[0] / n64) as u8,
                    (sum[1] / n64) as u8,
                    (sum[2] / n64) as u8,
                ],
                population: n,
            }
        })
        .collect();
    // deterministic order for ties
    swatches.sort_by(|a, b| b.population.cmp(&a.population).then(a.rgb.cmp(&b.rgb)));
    swatches
}

/// Best swatch for `target`, or `None` when nothing falls inside its band.
pub fn select(swatches: &[Swatch], target: &Target) -> Option<Swatch> {
    let max_population = swatches.iter().map(|s| s.population).max()?.max(1) as f32;
    let mut best: Option<(Swatch, f32)> = None;
    for swatch in swatches {
        let [_, sat, luma] = swatch.hsl();
        if sat < target.min_saturation
            || sat > target.max_saturation
            || luma < target.min_luma
            || luma > target.max_luma
        {
            continue;
        }
        let score = weighted_mean(&[
            (invert_diff(sat, target.target_saturation), WEIGHT_SATURATION),
            (invert_diff(luma, target.target_luma), WEIGHT_LUMA),
            (swatch.population as f32 / max_population, WEIGHT_POPULATION),
        ]);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((*swatch, score)),
        }
    }
    best.map(|(s, _)| s)
}

/// Vibrant color of an RGBA8 image in unit sRGB.
pub fn vibrant_rgb(rgba: &[u8], step: usize) -> Option<[f32; 3]> {
    select(&quantize(rgba, step), &VIBRANT).map(|s| s.to_unit_rgb())
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn invert_diff(value: f32, target: f32) -> f32 {
    1.0 - (value - target).abs()
}

fn weighted_mean(values: &[(f32, f32)]) -> f32 {
    let (sum, weight) = values
        .iter()
        .fold((0.0, 0.0), |(s, w), (v, wt)| (s + v * wt, w + wt));
    if weight > 0.0 {
        sum / weight
    } else {
        0.0
    }
}

pub fn rgb_to_hsl(rgb: [u8; 3]) -> [f32; 3] {
    let r = rgb[0] as f32 / 255.0;
    let g = rgb[1] as f32 / 255.0;
    let b = rgb[2] as f32 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) * 0.5;
    if (max - min).abs() < f32::EPSILON {
        return [0.0, 0.0, l];
    }
    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    [h * 60.0, s, l]
}
