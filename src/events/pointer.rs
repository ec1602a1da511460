use super::SliderHandles;
use crate::camera::screen_to_world_ray;
use crate::constants::CLICK_MAX_TRAVEL_PX;
use crate::dom::Listener;
use crate::input::{self, MouseState, NavCommand};
use glam::Mat4;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer move feeds the parallax; a click (press and release without
/// dragging) on a picture jumps to that slide.
pub fn wire_pointer(handles: &SliderHandles) -> anyhow::Result<Vec<Listener>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let mouse = Rc::new(RefCell::new(MouseState::default()));
    let mut listeners = Vec::with_capacity(3);

    {
        let h = handles.clone();
        let mouse = mouse.clone();
        listeners.push(Listener::attach(&window, "pointermove", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let pos = input::pointer_canvas_px(ev, &h.canvas);
            {
                let mut ms = mouse.borrow_mut();
                ms.x = pos.x;
                ms.y = pos.y;
            }
            h.parallax
                .borrow_mut()
                .set_pointer_uv(input::pointer_canvas_uv(ev, &h.canvas));
        })?);
    }

    {
        let h = handles.clone();
        let mouse = mouse.clone();
        listeners.push(Listener::attach(&h.canvas.clone(), "pointerdown", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let pos = input::pointer_canvas_px(ev, &h.canvas);
            let mut ms = mouse.borrow_mut();
            ms.x = pos.x;
            ms.y = pos.y;
            ms.down = true;
            ms.down_at = pos;
        })?);
    }

    {
        let h = handles.clone();
        listeners.push(Listener::attach(&h.canvas.clone(), "pointerup", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let pos = input::pointer_canvas_px(ev, &h.canvas);
            let was_click = {
                let mut ms = mouse.borrow_mut();
                let click = ms.down && ms.down_at.distance(pos) <= CLICK_MAX_TRAVEL_PX;
                ms.down = false;
                click
            };
            if !was_click {
                return;
            }
            let (ro, rd) = {
                let camera = h.camera.borrow();
                screen_to_world_ray(
                    &camera,
                    h.canvas.width() as f32,
                    h.canvas.height() as f32,
                    pos.x,
                    pos.y,
                )
            };
            let quads: Vec<Mat4> = h
                .gallery
                .borrow()
                .slides()
                .iter()
                .map(|s| s.picture_world())
                .collect();
            if let Some(index) = input::pick_nearest(ro, rd, &quads) {
                log::debug!("[pick] picture {}", index);
                h.navigate(NavCommand::GoTo(index));
            }
        })?);
    }

    Ok(listeners)
}
