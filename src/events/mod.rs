use crate::captions::CaptionLayer;
use crate::constants::{NEXT_SELECTOR, PREVIOUS_SELECTOR};
use crate::core::{Camera, Gallery, Parallax};
use crate::dom::{self, Listener};
use crate::input::NavCommand;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_keyboard;
pub use pointer::wire_pointer;

/// Shared slider state reachable from every event handler.
#[derive(Clone)]
pub struct SliderHandles {
    pub gallery: Rc<RefCell<Gallery>>,
    pub captions: Rc<RefCell<CaptionLayer>>,
    pub camera: Rc<RefCell<Camera>>,
    pub parallax: Rc<RefCell<Parallax>>,
    pub canvas: web::HtmlCanvasElement,
}

impl SliderHandles {
    /// Apply a navigation request; failures are logged, never fatal.
    pub fn navigate(&self, command: NavCommand) {
        let mut gallery = self.gallery.borrow_mut();
        let mut captions = self.captions.borrow_mut();
        let result = match command {
            NavCommand::Previous => gallery.previous(&mut *captions).map(|_| ()),
            NavCommand::Next => gallery.next(&mut *captions).map(|_| ()),
            NavCommand::GoTo(index) => gallery.go_to(index, &mut *captions),
        };
        if let Err(e) = result {
            log::warn!("[nav] {:?} ignored: {}", command, e);
        }
    }
}

/// Previous/next buttons and click-to-jump on every caption.
pub fn wire_navigation(
    document: &web::Document,
    handles: &SliderHandles,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::new();

    let h = handles.clone();
    listeners.push(dom::add_click_listener(document, PREVIOUS_SELECTOR, move || {
        h.navigate(NavCommand::Previous)
    })?);
    let h = handles.clone();
    listeners.push(dom::add_click_listener(document, NEXT_SELECTOR, move || {
        h.navigate(NavCommand::Next)
    })?);

    let captions: Vec<web::HtmlElement> = handles.captions.borrow().elements().to_vec();
    for (index, el) in captions.iter().enumerate() {
        let h = handles.clone();
        listeners.push(Listener::attach(el, "click", move |_| {
            h.navigate(NavCommand::GoTo(index))
        })?);
    }
    Ok(listeners)
}

/// Keep the canvas backing store in step with its CSS size.
pub fn wire_resize(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Listener> {
    dom::sync_canvas_backing_size(canvas);
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let canvas = canvas.clone();
    Listener::attach(&window, "resize", move |_| {
        dom::sync_canvas_backing_size(&canvas);
    })
}
