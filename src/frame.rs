use crate::assets::{AssetEvent, AssetQueue};
use crate::constants::MAX_FRAME_DT_SEC;
use crate::events::SliderHandles;
use crate::lifecycle;
use crate::render;
use instant::Instant;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub slider: SliderHandles,
    pub gpu: Option<render::GpuState<'a>>,
    pub assets: AssetQueue,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        self.drain_assets();

        let mut gallery = self.slider.gallery.borrow_mut();
        gallery.tick(dt_sec);

        let mut camera = self.slider.camera.borrow_mut();
        self.slider.parallax.borrow_mut().step(&mut camera, dt_sec);
        let w = self.slider.canvas.width();
        let h = self.slider.canvas.height();
        camera.set_viewport(w, h);

        self.slider.captions.borrow_mut().update(&camera, &gallery);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(dt_sec, &camera, &gallery) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    /// Apply every finished load since the last frame.
    fn drain_assets(&mut self) {
        let events: Vec<AssetEvent> = self.assets.borrow_mut().drain(..).collect();
        if events.is_empty() {
            return;
        }
        let mut gallery = self.slider.gallery.borrow_mut();
        for event in events {
            match event {
                AssetEvent::Loaded {
                    index,
                    image,
                    vibrant,
                } => {
                    if let Err(e) =
                        gallery.apply_loaded_image(index, image.width, image.height, vibrant)
                    {
                        log::warn!("[asset] slide {}: {}", index, e);
                        continue;
                    }
                    if let Some(g) = &mut self.gpu {
                        g.upload_picture(index, image.width, image.height, &image.rgba);
                    }
                }
                AssetEvent::Failed { index, reason } => {
                    log::warn!("[asset] slide {} failed: {}", index, reason);
                    if let Err(e) = gallery.mark_asset_failed(index, random_placeholder()) {
                        log::warn!("[asset] slide {}: {}", index, e);
                    }
                }
            }
        }
    }
}

fn random_placeholder() -> [f32; 3] {
    let mut rng = rand::thread_rng();
    [
        rng.gen_range(0.2..0.8),
        rng.gen_range(0.2..0.8),
        rng.gen_range(0.2..0.8),
    ]
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    slide_count: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, slide_count).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub type FrameLoop = lifecycle::FrameLoop<Closure<dyn FnMut()>>;

/// Drive `frame()` from requestAnimationFrame until the returned loop is stopped.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> FrameLoop {
    let frame_loop = FrameLoop::new();
    let inner = frame_loop.clone();
    frame_loop.install(Closure::wrap(Box::new(move || {
        inner.set_pending(None);
        if !inner.is_running() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&inner);
    }) as Box<dyn FnMut()>));
    request_frame(&frame_loop);
    frame_loop
}

fn request_frame(frame_loop: &FrameLoop) {
    let Some(w) = web::window() else {
        return;
    };
    match frame_loop.with_callback(|cb| w.request_animation_frame(cb.as_ref().unchecked_ref())) {
        Some(Ok(id)) => frame_loop.set_pending(Some(id)),
        Some(Err(e)) => log::error!("requestAnimationFrame failed: {:?}", e),
        None => {}
    }
}
