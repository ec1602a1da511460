//! Image loading: URL in, RGBA8 pixels out.
//!
//! One future per slide; results are posted to a queue the frame loop
//! drains, so slide construction never waits on the network.

use crate::constants::{MAX_TEXTURE_DIM, PALETTE_SAMPLE_STEP};
use crate::core::palette;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub enum AssetEvent {
    Loaded {
        index: usize,
        image: LoadedImage,
        vibrant: Option<[f32; 3]>,
    },
    Failed {
        index: usize,
        reason: String,
    },
}

pub type AssetQueue = Rc<RefCell<Vec<AssetEvent>>>;

/// Fit `(width, height)` inside `max_dim` keeping the aspect ratio.
pub fn fit_within(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max_dim || longest == 0 {
        return (width.max(1), height.max(1));
    }
    let scale = max_dim as f64 / longest as f64;
    (
        ((width as f64 * scale).round() as u32).max(1),
        ((height as f64 * scale).round() as u32).max(1),
    )
}

pub async fn load_image(document: &web::Document, url: &str) -> anyhow::Result<LoadedImage> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    let decoded: js_sys::Promise = img.decode();
    JsFuture::from(decoded)
        .await
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", url, e))?;

    let (width, height) = fit_within(img.natural_width(), img.natural_height(), MAX_TEXTURE_DIM);
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        &img,
        0.0,
        0.0,
        width as f64,
        height as f64,
    )
    .map_err(|e| anyhow::anyhow!("draw {}: {:?}", url, e))?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!("read pixels {}: {:?}", url, e))?;
    Ok(LoadedImage {
        width,
        height,
        rgba: data.data().0,
    })
}

/// Start one load per URL; each completion lands in `queue`.
pub fn spawn_loads(document: &web::Document, urls: &[String], queue: &AssetQueue) {
    for (index, url) in urls.iter().enumerate() {
        let document = document.clone();
        let url = url.clone();
        let queue = queue.clone();
        spawn_local(async move {
            let event = match load_image(&document, &url).await {
                Ok(image) => {
                    let vibrant = palette::vibrant_rgb(&image.rgba, PALETTE_SAMPLE_STEP);
                    log::info!(
                        "[asset] slide {} loaded {}x{} vibrant={:?}",
                        index,
                        image.width,
                        image.height,
                        vibrant
                    );
                    AssetEvent::Loaded {
                        index,
                        image,
                        vibrant,
                    }
                }
                Err(e) => AssetEvent::Failed {
                    index,
                    reason: format!("{:#}", e),
                },
            };
            queue.borrow_mut().push(event);
        });
    }
}
