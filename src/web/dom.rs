use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCanvasElement, HtmlElement, Window};
use crate::scroll::ElementGeometry;

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

pub fn viewport_height() -> f32 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0) as f32
}

/// Bounding rect of `element` relative to the viewport
pub fn measure(element: Option<&Element>) -> Option<ElementGeometry> {
    let rect = element?.get_bounding_client_rect();
    Some(ElementGeometry::new(rect.top() as f32, rect.height() as f32))
}

/// Match the drawing buffer to the displayed size; returns (width, height)
pub fn fit_canvas(canvas: &HtmlCanvasElement) -> (i32, i32) {
    let (w, h) = (canvas.client_width().max(1), canvas.client_height().max(1));
    if canvas.width() != w as u32 || canvas.height() != h as u32 {
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
    }
    (w, h)
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = el.style().set_property(property, value) {
            log::debug!("Could not set {}: {:?}", property, e);
        }
    }
}

/// Run `f` on the runtime behind `weak` if it is still alive and not borrowed
///
/// Returns false when the runtime is gone or busy, so late callbacks after
/// teardown do nothing.
pub fn with_runtime<T>(weak: &Weak<RefCell<T>>, f: impl FnOnce(&mut T)) -> bool {
    let Some(runtime) = weak.upgrade() else {
        return false;
    };
    let Ok(mut runtime) = runtime.try_borrow_mut() else {
        return false;
    };
    f(&mut runtime);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_with_runtime_after_drop_is_noop() {
        let runtime = Rc::new(RefCell::new(0u32));
        let weak = Rc::downgrade(&runtime);
        assert!(with_runtime(&weak, |n| *n += 1));
        assert_eq!(*runtime.borrow(), 1);

        drop(runtime);
        assert!(!with_runtime(&weak, |n| *n += 1));
    }

    #[test]
    fn test_with_runtime_while_borrowed_is_noop() {
        let runtime = Rc::new(RefCell::new(0u32));
        let weak = Rc::downgrade(&runtime);
        let _guard = runtime.borrow_mut();
        assert!(!with_runtime(&weak, |n| *n += 1));
    }

    #[test]
    fn test_measure_missing_element() {
        assert_eq!(measure(None), None);
    }
}
