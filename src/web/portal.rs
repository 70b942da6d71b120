use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};
use crate::camera::CameraPose;
use crate::config::SceneConfig;
use crate::math::Vec3;
use crate::render::PointPipeline;
use crate::scene::{PortalPhase, PortalScene};
use crate::scheduler::FrameScheduler;
use super::dom::{self, with_runtime};
use super::{EventListener, FrameLoop};

struct PortalRuntime {
    scene: PortalScene,
    scheduler: FrameScheduler,
    pipeline: PointPipeline,
    canvas: HtmlCanvasElement,
    camera: CameraPose,
    on_complete: js_sys::Function,
}

impl PortalRuntime {
    fn on_resize(&mut self) {
        let (w, h) = dom::fit_canvas(&self.canvas);
        self.pipeline.resize(w, h);
    }

    fn frame(&mut self, timestamp: f64) -> bool {
        if self.scheduler.drive(&mut self.scene, timestamp, 0.0).is_none() {
            return false;
        }

        if self.scene.take_completion() {
            log::debug!("Portal complete after {:.2}s", self.scene.elapsed());
            if let Err(e) = self.on_complete.call0(&JsValue::NULL) {
                log::error!("Portal completion callback failed: {:?}", e);
            }
        }

        let vortex = self.scene.vortex();
        self.pipeline.draw(
            &vortex.get_particle_data(),
            &vortex.model_matrix(),
            &self.camera.view_matrix(),
            self.scene.opacity(),
        );
        dom::set_style(&self.canvas, "opacity", &format!("{:.4}", self.scene.opacity()));

        self.scene.phase() != PortalPhase::Done
    }
}

/// Full-screen vortex played when entering a realm
///
/// `on_complete` is called exactly once, when the vortex has run its
/// course; the overlay then fades out on its own.
#[wasm_bindgen]
pub struct PortalExperience {
    runtime: Rc<RefCell<PortalRuntime>>,
    listeners: Vec<EventListener>,
    frame_loop: Option<FrameLoop>,
}

#[wasm_bindgen]
impl PortalExperience {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        config_yaml: &str,
        on_complete: js_sys::Function,
    ) -> Result<PortalExperience, JsValue> {
        let config = SceneConfig::from_yaml(config_yaml).map_err(|e| JsValue::from_str(&e))?;
        let portal = config.portal;

        let gl = canvas
            .get_context("webgl2")?
            .ok_or("Failed to get WebGL2 context")?
            .dyn_into::<WebGl2RenderingContext>()?;
        let pipeline = PointPipeline::new(gl, portal.vortex.count, 75.0, None)
            .map_err(|e| JsValue::from_str(&e))?;
        let scene = PortalScene::new(&portal).map_err(|e| JsValue::from_str(&e))?;

        let runtime = PortalRuntime {
            scene,
            scheduler: FrameScheduler::default(),
            pipeline,
            canvas,
            camera: CameraPose::new(Vec3::new(0.0, 0.0, portal.camera_distance), Vec3::ZERO),
            on_complete,
        };

        Ok(Self {
            runtime: Rc::new(RefCell::new(runtime)),
            listeners: Vec::new(),
            frame_loop: None,
        })
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.frame_loop.is_some() {
            return Ok(());
        }
        {
            let mut rt = self.runtime.borrow_mut();
            rt.scheduler.start();
            rt.on_resize();
        }

        let window = dom::window()?;
        let weak = Rc::downgrade(&self.runtime);
        self.listeners.push(EventListener::new(&window, "resize", move |_| {
            with_runtime(&weak, PortalRuntime::on_resize);
        })?);

        let weak = Rc::downgrade(&self.runtime);
        self.frame_loop = Some(FrameLoop::start(move |timestamp| {
            let mut keep_going = false;
            with_runtime(&weak, |rt| keep_going = rt.frame(timestamp));
            keep_going
        })?);
        Ok(())
    }

    /// Tear down early; the completion callback will not fire afterwards
    pub fn unmount(&mut self) {
        self.frame_loop = None;
        self.listeners.clear();
        if let Ok(mut rt) = self.runtime.try_borrow_mut() {
            rt.scheduler.stop();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn ring_scale(&self) -> f32 {
        self.runtime.try_borrow().map(|rt| rt.scene.ring_scale()).unwrap_or(0.0)
    }

    #[wasm_bindgen(getter)]
    pub fn finished(&self) -> bool {
        self.runtime
            .try_borrow()
            .map(|rt| rt.scene.phase() == PortalPhase::Done)
            .unwrap_or(false)
    }
}
