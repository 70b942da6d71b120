use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use crate::config::SceneConfig;
use crate::render::TrailPainter;
use crate::scene::CursorScene;
use crate::scheduler::FrameScheduler;
use super::dom::{self, with_runtime};
use super::{EventListener, FrameLoop};

struct CursorRuntime {
    scene: CursorScene,
    scheduler: FrameScheduler,
    painter: TrailPainter,
    canvas: HtmlCanvasElement,
}

impl CursorRuntime {
    fn on_resize(&mut self) {
        let Ok(window) = dom::window() else { return };
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn frame(&mut self, timestamp: f64) -> bool {
        if self.scheduler.drive(&mut self.scene, timestamp, 0.0).is_none() {
            return false;
        }
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        if let Err(e) = self.painter.paint(w, h, self.scene.trail().sparkles(), self.scene.pointer()) {
            log::warn!("Cursor paint failed: {:?}", e);
        }
        true
    }
}

/// Sparkle trail overlay that follows the mouse
#[wasm_bindgen]
pub struct MagicCursor {
    runtime: Rc<RefCell<CursorRuntime>>,
    listeners: Vec<EventListener>,
    frame_loop: Option<FrameLoop>,
}

#[wasm_bindgen]
impl MagicCursor {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_yaml: &str) -> Result<MagicCursor, JsValue> {
        let config = SceneConfig::from_yaml(config_yaml).map_err(|e| JsValue::from_str(&e))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2D context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let runtime = CursorRuntime {
            scene: CursorScene::new(config.cursor),
            scheduler: FrameScheduler::default(),
            painter: TrailPainter::new(ctx),
            canvas,
        };

        Ok(Self {
            runtime: Rc::new(RefCell::new(runtime)),
            listeners: Vec::new(),
            frame_loop: None,
        })
    }

    pub fn mount(&mut self) -> Result<(), JsValue> {
        self.unmount();
        {
            let mut rt = self.runtime.borrow_mut();
            rt.scheduler.start();
            rt.on_resize();
        }

        let window = dom::window()?;
        let weak = Rc::downgrade(&self.runtime);
        self.listeners.push(EventListener::new(&window, "mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else { return };
            let (x, y) = (mouse.client_x() as f32, mouse.client_y() as f32);
            with_runtime(&weak, |rt| rt.scene.set_pointer(x, y));
        })?);

        let weak = Rc::downgrade(&self.runtime);
        let document = window.document().ok_or("No document")?;
        self.listeners.push(EventListener::new(&document, "mouseleave", move |_| {
            with_runtime(&weak, |rt| rt.scene.clear_pointer());
        })?);

        let weak = Rc::downgrade(&self.runtime);
        self.listeners.push(EventListener::new(&window, "resize", move |_| {
            with_runtime(&weak, CursorRuntime::on_resize);
        })?);

        let weak = Rc::downgrade(&self.runtime);
        self.frame_loop = Some(FrameLoop::start(move |timestamp| {
            let mut keep_going = false;
            with_runtime(&weak, |rt| keep_going = rt.frame(timestamp));
            keep_going
        })?);
        Ok(())
    }

    pub fn unmount(&mut self) {
        self.frame_loop = None;
        self.listeners.clear();
        if let Ok(mut rt) = self.runtime.try_borrow_mut() {
            rt.scheduler.stop();
            rt.scene.clear_pointer();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn sparkle_count(&self) -> usize {
        self.runtime.try_borrow().map(|rt| rt.scene.trail().count()).unwrap_or(0)
    }
}
