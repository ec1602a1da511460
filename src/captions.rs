//! DOM captions pinned into the 3D scene with CSS transforms.
//!
//! The caption elements authored in the page are moved into an overlay that
//! mirrors the WebGPU camera, and moved back on `restore`.

use crate::constants::{CAPTION_LAYER_CLASS, IMAGE_DATA_ATTRIBUTE};
use crate::core::projection::{camera_css_transform, object_css_transform, perspective_px};
use crate::core::{CaptionHighlighter, Camera, Gallery, ACTIVE_CAPTION_CLASS};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CaptionLayer {
    root: web::HtmlElement,
    camera_el: web::HtmlElement,
    items: Vec<web::HtmlElement>,
    home: web::Element,
    last_perspective: f32,
}

impl CaptionLayer {
    /// Move the children of `selector` into a 3D overlay next to `canvas`.
    pub fn mount(
        document: &web::Document,
        canvas: &web::HtmlCanvasElement,
        selector: &str,
    ) -> anyhow::Result<Self> {
        let home = document
            .query_selector(selector)
            .map_err(|e| anyhow::anyhow!("bad selector {}: {:?}", selector, e))?
            .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?;
        let items = dom::children_of(document, selector)?;

        let root = create_div(document)?;
        root.set_class_name(CAPTION_LAYER_CLASS);
        for (k, v) in [
            ("position", "absolute"),
            ("left", "0"),
            ("top", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("overflow", "hidden"),
            ("pointer-events", "none"),
        ] {
            dom::set_style(&root, k, v);
        }
        let camera_el = create_div(document)?;
        for (k, v) in [
            ("position", "absolute"),
            ("width", "100%"),
            ("height", "100%"),
            ("transform-style", "preserve-3d"),
            ("pointer-events", "none"),
        ] {
            dom::set_style(&camera_el, k, v);
        }
        root.append_child(&camera_el)
            .map_err(|e| anyhow::anyhow!("append caption camera: {:?}", e))?;
        for item in &items {
            dom::set_style(item, "position", "absolute");
            dom::set_style(item, "pointer-events", "auto");
            camera_el
                .append_child(item)
                .map_err(|e| anyhow::anyhow!("move caption: {:?}", e))?;
        }
        let parent = canvas
            .parent_element()
            .ok_or_else(|| anyhow::anyhow!("canvas has no parent"))?;
        parent
            .append_child(&root)
            .map_err(|e| anyhow::anyhow!("mount caption layer: {:?}", e))?;

        Ok(Self {
            root,
            camera_el,
            items,
            home,
            last_perspective: f32::NAN,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn elements(&self) -> &[web::HtmlElement] {
        &self.items
    }

    /// Image URL per caption from `data-image`, falling back to `assets/<i>.jpg`.
    pub fn image_urls(&self) -> Vec<String> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, el)| {
                el.get_attribute(IMAGE_DATA_ATTRIBUTE)
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| format!("assets/{}.jpg", i))
            })
            .collect()
    }

    /// Re-project every caption for the current camera and slide transforms.
    pub fn update(&mut self, camera: &Camera, gallery: &Gallery) {
        let width = self.root.client_width() as f32;
        let height = self.root.client_height() as f32;
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let fov_px = perspective_px(camera.fovy_radians, height);
        if fov_px != self.last_perspective {
            dom::set_style(&self.root, "perspective", &format!("{}px", fov_px));
            self.last_perspective = fov_px;
        }
        let camera_css = camera_css_transform(camera.view_matrix(), camera.fovy_radians, width, height);
        dom::set_style(&self.camera_el, "transform", &camera_css);
        for (el, slide) in self.items.iter().zip(gallery.slides()) {
            dom::set_style(el, "transform", &object_css_transform(slide.caption_world()));
        }
    }

    /// Put captions back where the page authored them and drop the overlay.
    pub fn restore(&self) {
        for item in &self.items {
            _ = item.style().remove_property("transform");
            _ = item.style().remove_property("position");
            _ = item.style().remove_property("pointer-events");
            _ = self.home.append_child(item);
        }
        self.root.remove();
    }
}

impl CaptionHighlighter for CaptionLayer {
    fn set_highlight(&mut self, slide_index: usize, active: bool) {
        if let Some(el) = self.items.get(slide_index) {
            let cl = el.class_list();
            _ = if active {
                cl.add_1(ACTIVE_CAPTION_CLASS)
            } else {
                cl.remove_1(ACTIVE_CAPTION_CLASS)
            };
        }
    }
}

fn create_div(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create div: {:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}
