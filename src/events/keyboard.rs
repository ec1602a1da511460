use super::SliderHandles;
use crate::dom::Listener;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Arrow keys step through slides, digits jump directly.
pub fn wire_keyboard(handles: &SliderHandles) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let handles = handles.clone();
    Listener::attach(&window, "keydown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        if let Some(command) = input::nav_command_for_key(&ev.key()) {
            log::debug!("[keys] {} -> {:?}", ev.key(), command);
            ev.prevent_default();
            handles.navigate(command);
        }
    })
}
