// Time-based tweens over slide properties.
//
// Each tween is keyed by `(slide index, property)`. Issuing a new tween for a
// key that is already in flight retargets it in place: the start value is
// re-captured from the slide's current value, the clock restarts and the
// previous destination is dropped. Values already reached stay reached.

use fnv::FnvHashMap;
use glam::{Quat, Vec3};

use super::slide::Slide;

/// Easing curves applied to normalized tween progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    /// Quadratic ease-out (`power1.out`).
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// Animatable slide property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Position,
    Scale,
    Rotation,
    LightTargetZ,
    LightIntensity,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenValue {
    Vec3(Vec3),
    Quat(Quat),
    Scalar(f32),
}

impl TweenValue {
    fn interpolate(self, end: TweenValue, t: f32) -> TweenValue {
        match (self, end) {
            (TweenValue::Vec3(a), TweenValue::Vec3(b)) => TweenValue::Vec3(a.lerp(b, t)),
            // slerp between the orientation captured at tween start and the target
            (TweenValue::Quat(a), TweenValue::Quat(b)) => TweenValue::Quat(a.slerp(b, t)),
            (TweenValue::Scalar(a), TweenValue::Scalar(b)) => TweenValue::Scalar(a + (b - a) * t),
            // mismatched kinds never get past `TweenEngine::to`
            (_, b) => b,
        }
    }
}

#[derive(Clone, Debug)]
struct Tween {
    start: TweenValue,
    end: TweenValue,
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

impl Tween {
    fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }
}

/// Owns every in-flight tween and writes their values into slides on `tick`.
#[derive(Debug, Default)]
pub struct TweenEngine {
    tweens: FnvHashMap<(usize, Property), Tween>,
}

impl TweenEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or retarget) a tween from the slide's current value toward `target`.
    ///
    /// Returns `false` and does nothing when `target` does not match the kind
    /// of value stored in `property`.
    pub fn to(
        &mut self,
        slide: &Slide,
        property: Property,
        target: TweenValue,
        duration: f32,
        easing: Easing,
    ) -> bool {
        let start = read(slide, property);
        if std::mem::discriminant(&start) != std::mem::discriminant(&target) {
            log::warn!("[tween] kind mismatch for {:?} on slide {}", property, slide.index);
            return false;
        }
        self.tweens.insert(
            (slide.index, property),
            Tween {
                start,
                end: target,
                elapsed: 0.0,
                duration,
                easing,
            },
        );
        true
    }

    /// Write `value` immediately, cancelling any tween on the same key.
    pub fn set_instant(&mut self, slide: &mut Slide, property: Property, value: TweenValue) {
        self.tweens.remove(&(slide.index, property));
        write(slide, property, value);
    }

    pub fn is_animating(&self, slide_index: usize, property: Property) -> bool {
        self.tweens.contains_key(&(slide_index, property))
    }

    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    /// Advance all tweens by `dt` seconds. Returns `true` while any tween remains.
    pub fn tick(&mut self, dt: f32, slides: &mut [Slide]) -> bool {
        let dt = dt.max(0.0);
        self.tweens.retain(|&(index, property), tween| {
            let Some(slide) = slides.get_mut(index) else {
                return false;
            };
            tween.elapsed += dt;
            let t = tween.progress();
            let value = tween.start.interpolate(tween.end, tween.easing.apply(t));
            write(slide, property, value);
            t < 1.0
        });
        !self.tweens.is_empty()
    }
}

fn read(slide: &Slide, property: Property) -> TweenValue {
    match property {
        Property::Position => TweenValue::Vec3(slide.transform.position),
        Property::Scale => TweenValue::Vec3(slide.transform.scale),
        Property::Rotation => TweenValue::Quat(slide.transform.rotation),
        Property::LightTargetZ => TweenValue::Scalar(slide.spotlight.target.z),
        Property::LightIntensity => TweenValue::Scalar(slide.spotlight.intensity),
    }
}

fn write(slide: &mut Slide, property: Property, value: TweenValue) {
    match (property, value) {
        (Property::Position, TweenValue::Vec3(v)) => slide.transform.position = v,
        (Property::Scale, TweenValue::Vec3(v)) => slide.transform.scale = v,
        (Property::Rotation, TweenValue::Quat(q)) => slide.transform.rotation = q.normalize(),
        (Property::LightTargetZ, TweenValue::Scalar(z)) => slide.spotlight.target.z = z,
        (Property::LightIntensity, TweenValue::Scalar(i)) => slide.spotlight.intensity = i,
        _ => {}
    }
}
