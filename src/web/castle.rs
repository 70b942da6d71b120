use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCanvasElement, WebGl2RenderingContext};
use crate::config::SceneConfig;
use crate::math::Mat4;
use crate::particles::parse_hex_color;
use crate::render::PointPipeline;
use crate::scene::CastleScene;
use crate::scheduler::FrameScheduler;
use crate::scroll::ScrollTracker;
use super::dom::{self, with_runtime};
use super::{EventListener, FrameLoop};

struct CastleRuntime {
    scene: CastleScene,
    scheduler: FrameScheduler,
    tracker: ScrollTracker,
    pipeline: PointPipeline,
    canvas: HtmlCanvasElement,
    section: Option<Element>,
}

impl CastleRuntime {
    fn on_scroll(&mut self) {
        self.tracker.on_scroll(dom::measure(self.section.as_ref()), dom::viewport_height());
    }

    fn on_resize(&mut self) {
        let (w, h) = dom::fit_canvas(&self.canvas);
        self.pipeline.resize(w, h);
        self.on_scroll();
    }

    fn frame(&mut self, timestamp: f64) -> bool {
        let progress = self.tracker.progress();
        if self.scheduler.drive(&mut self.scene, timestamp, progress).is_none() {
            return false;
        }
        let view = self.scene.pose().view_matrix();
        let data = self.scene.sparkles().get_particle_data();
        self.pipeline.draw(&data, &Mat4::identity(), &view, 1.0);
        true
    }
}

/// Scroll-driven castle fly-in bound to a page section
#[wasm_bindgen]
pub struct CastleExperience {
    runtime: Rc<RefCell<CastleRuntime>>,
    listeners: Vec<EventListener>,
    frame_loop: Option<FrameLoop>,
}

#[wasm_bindgen]
impl CastleExperience {
    /// Create the renderer; `config_yaml` may be empty for the defaults
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_yaml: &str) -> Result<CastleExperience, JsValue> {
        let config = SceneConfig::from_yaml(config_yaml).map_err(|e| JsValue::from_str(&e))?;
        let castle = config.castle;

        let gl = canvas
            .get_context("webgl2")?
            .ok_or("Failed to get WebGL2 context")?
            .dyn_into::<WebGl2RenderingContext>()?;
        let background = parse_hex_color(&castle.background).map_err(|e| JsValue::from_str(&e))?;
        let pipeline = PointPipeline::new(gl, castle.sparkles.count, castle.fov_degrees, Some(background))
            .map_err(|e| JsValue::from_str(&e))?;

        let runtime = CastleRuntime {
            scene: CastleScene::new(&castle),
            scheduler: FrameScheduler::new(castle.max_frame_secs),
            tracker: ScrollTracker::new(castle.formula),
            pipeline,
            canvas,
            section: None,
        };

        Ok(Self {
            runtime: Rc::new(RefCell::new(runtime)),
            listeners: Vec::new(),
            frame_loop: None,
        })
    }

    /// Start tracking `section` and rendering
    pub fn mount(&mut self, section: Element) -> Result<(), JsValue> {
        self.unmount();
        {
            let mut rt = self.runtime.borrow_mut();
            rt.section = Some(section);
            rt.tracker.mount();
            rt.scheduler.start();
            rt.on_resize();
        }

        let window = dom::window()?;
        let weak = Rc::downgrade(&self.runtime);
        self.listeners.push(EventListener::new(&window, "scroll", move |_| {
            with_runtime(&weak, CastleRuntime::on_scroll);
        })?);
        let weak = Rc::downgrade(&self.runtime);
        self.listeners.push(EventListener::new(&window, "resize", move |_| {
            with_runtime(&weak, CastleRuntime::on_resize);
        })?);

        let weak = Rc::downgrade(&self.runtime);
        self.frame_loop = Some(FrameLoop::start(move |timestamp| {
            let mut keep_going = false;
            with_runtime(&weak, |rt| keep_going = rt.frame(timestamp));
            keep_going
        })?);

        log::info!("Castle mounted");
        Ok(())
    }

    /// Stop rendering and detach every listener
    pub fn unmount(&mut self) {
        self.frame_loop = None;
        self.listeners.clear();
        if let Ok(mut rt) = self.runtime.try_borrow_mut() {
            rt.tracker.unmount();
            rt.scheduler.stop();
            rt.section = None;
        }
    }

    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f32 {
        self.runtime.try_borrow().map(|rt| rt.tracker.progress()).unwrap_or(0.0)
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.frame_loop.is_some()
    }
}
