#![cfg(target_arch = "wasm32")]
use glam::{Vec2, Vec3};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod camera;
mod captions;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod lifecycle;
mod render;

use crate::constants::*;
use crate::core::{Camera, Gallery, GalleryConfig, Parallax};

/// Everything the running slider owns. Dropping the listeners detaches them.
struct AppContext {
    slider: events::SliderHandles,
    listeners: Vec<dom::Listener>,
    frame_loop: frame::FrameLoop,
}

impl AppContext {
    fn teardown(self) {
        self.frame_loop.stop(|id| {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        });
        let count = self.listeners.len();
        drop(self.listeners);
        self.slider.captions.borrow().restore();
        log::info!("[app] torn down, {} listeners removed", count);
    }
}

thread_local! {
    static APP: RefCell<Option<AppContext>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the frame loop, detach every listener and put the captions back.
#[wasm_bindgen]
pub fn teardown() {
    if let Some(app) = APP.with(|a| a.borrow_mut().take()) {
        app.teardown();
    }
}

async fn init() -> anyhow::Result<()> {
    if APP.with(|a| a.borrow().is_some()) {
        log::warn!("[app] already running");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let mut caption_layer = captions::CaptionLayer::mount(&document, &canvas, SLIDES_SELECTOR)?;
    if caption_layer.len() == 0 {
        caption_layer.restore();
        anyhow::bail!("no slides under {}", SLIDES_SELECTOR);
    }
    let urls = caption_layer.image_urls();
    log::info!("[app] {} slides", urls.len());

    let mut gallery = Gallery::new(urls.iter().cloned(), GalleryConfig::default());
    gallery.set_active_slide(0, false, &mut caption_layer)?;

    let resize = events::wire_resize(&canvas)?;
    let eye = Vec3::from_array(CAMERA_EYE);
    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let slider = events::SliderHandles {
        gallery: Rc::new(RefCell::new(gallery)),
        captions: Rc::new(RefCell::new(caption_layer)),
        camera: Rc::new(RefCell::new(Camera::looking_forward(
            eye,
            CAMERA_FOV_DEG,
            aspect,
            CAMERA_NEAR,
            CAMERA_FAR,
        ))),
        parallax: Rc::new(RefCell::new(Parallax::new(
            eye,
            Vec2::from_array(PARALLAX_STRENGTH),
            PARALLAX_TAU_SEC,
        ))),
        canvas: canvas.clone(),
    };

    let mut listeners = vec![resize];
    listeners.extend(events::wire_navigation(&document, &slider)?);
    listeners.push(events::wire_keyboard(&slider)?);
    listeners.extend(events::wire_pointer(&slider)?);

    let asset_queue: assets::AssetQueue = Rc::new(RefCell::new(Vec::new()));
    assets::spawn_loads(&document, &urls, &asset_queue);

    let gpu = frame::init_gpu(&canvas, urls.len()).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        slider: slider.clone(),
        gpu,
        assets: asset_queue,
        last_instant: Instant::now(),
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    APP.with(|a| {
        *a.borrow_mut() = Some(AppContext {
            slider,
            listeners,
            frame_loop,
        })
    });
    wire_pagehide(&window)?;
    Ok(())
}

fn wire_pagehide(window: &web::Window) -> anyhow::Result<()> {
    let listener = dom::Listener::attach(window, "pagehide", |ev| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        if lifecycle::should_teardown_on_pagehide(persisted) {
            teardown();
        } else {
            log::info!("[app] entering back/forward cache, keeping state");
        }
    })?;
    // lives for the page; teardown is idempotent
    std::mem::forget(listener);
    Ok(())
}
