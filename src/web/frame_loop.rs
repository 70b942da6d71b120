use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Window;
use super::dom;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` loop
///
/// `on_frame` receives the frame timestamp and returns whether to keep
/// going. Dropping the loop cancels the pending frame.
pub struct FrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    // Sole strong owner of the closure
    _callback: FrameCallback,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = dom::window()?;
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let weak_callback = Rc::downgrade(&callback);
        let frame_window = window.clone();
        let frame_pending = pending.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            frame_pending.set(None);
            if !on_frame(timestamp) {
                return;
            }
            // The loop may have been dropped inside `on_frame`
            let Some(callback) = weak_callback.upgrade() else {
                return;
            };
            let Ok(callback) = callback.try_borrow() else {
                return;
            };
            if let Some(closure) = callback.as_ref() {
                match frame_window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                    Ok(id) => frame_pending.set(Some(id)),
                    Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = match callback.borrow().as_ref() {
            Some(closure) => window.request_animation_frame(closure.as_ref().unchecked_ref())?,
            None => return Err(JsValue::from_str("Frame callback missing")),
        };
        pending.set(Some(first));

        Ok(Self {
            window,
            pending,
            _callback: callback,
        })
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.get().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
    }
}
