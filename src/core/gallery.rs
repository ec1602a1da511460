use glam::Vec3;

use super::arranger::{Arrangement, CaptionHighlighter, SlideArranger, WallLayout};
use super::constants::TWEEN_DURATION_SEC;
use super::error::SliderError;
use super::slide::{AssetState, Slide, SlidePose};
use super::tween::{Easing, Property, TweenEngine, TweenValue};

/// Tunables for a gallery instance.
#[derive(Clone, Debug)]
pub struct GalleryConfig {
    pub layout: WallLayout,
    pub tween_duration_sec: f32,
    pub easing: Easing,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            layout: WallLayout::default(),
            tween_duration_sec: TWEEN_DURATION_SEC,
            easing: Easing::EaseOut,
        }
    }
}

/// 3D state of the slider: slides, navigation state and in-flight tweens.
///
/// Typical usage:
/// - Construct with `Gallery::new(urls, config)`
/// - Call `set_active_slide(0, false, ..)` once to place every slide
/// - Route button clicks to `next` / `previous`
/// - Call `tick(dt)` once per frame before reading slide transforms
#[derive(Debug)]
pub struct Gallery {
    slides: Vec<Slide>,
    arranger: SlideArranger,
    tweens: TweenEngine,
    config: GalleryConfig,
}

impl Gallery {
    pub fn new<I, S>(urls: I, config: GalleryConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slides: Vec<Slide> = urls
            .into_iter()
            .enumerate()
            .map(|(i, url)| Slide::new(i, url))
            .collect();
        let arranger = SlideArranger::new(slides.len(), config.layout);
        Self {
            slides,
            arranger,
            tweens: TweenEngine::new(),
            config,
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.arranger.active_index()
    }

    pub fn is_animating(&self) -> bool {
        self.tweens.active_count() > 0
    }

    /// Slide indices in spotlight priority, at most `max` of them.
    ///
    /// The active slide comes first, then the wall slots from nearest to
    /// farthest, right before left at equal depth. Before the first
    /// arrangement the order is plain index order.
    pub fn lighting_order(&self, max: usize) -> Vec<usize> {
        let arrangement = self
            .arranger
            .active_index()
            .and_then(|active| Arrangement::compute(active, self.slides.len()).ok());
        let Some(arrangement) = arrangement else {
            return (0..self.slides.len().min(max)).collect();
        };
        let mut order = Vec::with_capacity(self.slides.len().min(max));
        order.push(arrangement.active);
        let depth = arrangement.right.len().max(arrangement.left.len());
        for slot in 0..depth {
            order.extend(arrangement.right.get(slot).copied());
            order.extend(arrangement.left.get(slot).copied());
        }
        order.truncate(max);
        order
    }

    /// Reclassify every slide around `active` and push each its target pose.
    ///
    /// Fails without touching any state when `active` is out of range.
    pub fn set_active_slide(
        &mut self,
        active: usize,
        with_animation: bool,
        captions: &mut impl CaptionHighlighter,
    ) -> Result<Arrangement, SliderError> {
        let previous = self.arranger.active_index();
        let arrangement = self.arranger.arrange(active)?;

        for slide in &mut self.slides {
            if slide.caption.highlighted {
                slide.caption.highlighted = false;
                captions.set_highlight(slide.index, false);
            }
        }

        for (index, role) in arrangement.roles() {
            let pose = self.arranger.layout.pose_for(role);
            self.push_pose(index, &pose, with_animation);
        }

        if let Some(slide) = self.slides.get_mut(active) {
            slide.caption.highlighted = true;
        }
        captions.set_highlight(active, true);

        log::debug!(
            "[nav] active {:?} -> {} right={:?} left={:?} animate={}",
            previous,
            active,
            arrangement.right.as_slice(),
            arrangement.left.as_slice(),
            with_animation
        );
        Ok(arrangement)
    }

    pub fn next(&mut self, captions: &mut impl CaptionHighlighter) -> Result<usize, SliderError> {
        let index = self.arranger.next_index()?;
        self.set_active_slide(index, true, captions)?;
        Ok(index)
    }

    pub fn previous(
        &mut self,
        captions: &mut impl CaptionHighlighter,
    ) -> Result<usize, SliderError> {
        let index = self.arranger.previous_index()?;
        self.set_active_slide(index, true, captions)?;
        Ok(index)
    }

    /// Animated jump to an arbitrary slide.
    pub fn go_to(
        &mut self,
        index: usize,
        captions: &mut impl CaptionHighlighter,
    ) -> Result<(), SliderError> {
        if self.arranger.active_index() == Some(index) {
            return Ok(());
        }
        self.set_active_slide(index, true, captions).map(|_| ())
    }

    /// Advance tweens. Returns `true` while anything is still moving.
    pub fn tick(&mut self, dt_sec: f32) -> bool {
        self.tweens.tick(dt_sec, &mut self.slides)
    }

    /// Record a finished image load: fit the picture and color the spotlight.
    pub fn apply_loaded_image(
        &mut self,
        index: usize,
        width: u32,
        height: u32,
        vibrant: Option<[f32; 3]>,
    ) -> Result<(), SliderError> {
        let len = self.slides.len();
        let slide = self
            .slides
            .get_mut(index)
            .ok_or(SliderError::IndexOutOfRange { index, len })?;
        slide.picture.fit_aspect(width, height);
        slide.picture.asset = AssetState::Ready { width, height };
        slide.picture.tint = [1.0, 1.0, 1.0];
        if let Some(color) = vibrant {
            slide.spotlight.color = color;
        }
        Ok(())
    }

    /// Keep the slide visible with a flat placeholder color.
    pub fn mark_asset_failed(
        &mut self,
        index: usize,
        placeholder: [f32; 3],
    ) -> Result<(), SliderError> {
        let len = self.slides.len();
        let slide = self
            .slides
            .get_mut(index)
            .ok_or(SliderError::IndexOutOfRange { index, len })?;
        slide.picture.asset = AssetState::Failed;
        slide.picture.tint = placeholder;
        Ok(())
    }

    fn push_pose(&mut self, index: usize, pose: &SlidePose, with_animation: bool) {
        let Some(slide) = self.slides.get_mut(index) else {
            return;
        };
        let targets = [
            (Property::Position, TweenValue::Vec3(pose.position)),
            (Property::Scale, TweenValue::Vec3(Vec3::splat(pose.scale))),
            (Property::Rotation, TweenValue::Quat(pose.rotation)),
            (Property::LightTargetZ, TweenValue::Scalar(pose.light_target_z)),
            (Property::LightIntensity, TweenValue::Scalar(pose.light_intensity)),
        ];
        if with_animation {
            for (property, target) in targets {
                self.tweens.to(
                    slide,
                    property,
                    target,
                    self.config.tween_duration_sec,
                    self.config.easing,
                );
            }
        } else {
            for (property, target) in targets {
                self.tweens.set_instant(slide, property, target);
            }
        }
    }
}

