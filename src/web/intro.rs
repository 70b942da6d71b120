use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::animation::{EntranceStyle, Timeline};
use crate::scheduler::FrameScheduler;
use super::dom::{self, with_runtime};
use super::FrameLoop;

const INTRO_IDS: [&str; 5] = ["overlay", "subtitle", "title", "description", "cta"];

struct IntroRuntime {
    timeline: Timeline,
    scheduler: FrameScheduler,
    /// Element for each tween, looked up by `data-intro`
    targets: Vec<(&'static str, Element)>,
}

impl IntroRuntime {
    fn apply(&self) {
        for (id, element) in &self.targets {
            let style = EntranceStyle::for_tween(id, self.timeline.value(id));
            dom::set_style(element, "opacity", &format!("{:.4}", style.opacity));
            dom::set_style(element, "transform", &style.transform_css());
            if let Some(spacing) = style.letter_spacing_em {
                dom::set_style(element, "letter-spacing", &format!("{:.3}em", spacing));
            }
        }
    }

    fn frame(&mut self, timestamp: f64) -> bool {
        let Some(input) = self.scheduler.tick(timestamp, 0.0) else {
            return false;
        };
        self.timeline.update(input.dt);
        self.apply();
        !self.timeline.is_complete()
    }
}

/// Entrance animation for the landing page
#[wasm_bindgen]
pub struct MagicalIntro {
    runtime: Rc<RefCell<IntroRuntime>>,
    frame_loop: Option<FrameLoop>,
}

#[wasm_bindgen]
impl MagicalIntro {
    /// Collect `[data-intro="..."]` children of `root`; missing ones are skipped
    #[wasm_bindgen(constructor)]
    pub fn new(root: Element) -> Result<MagicalIntro, JsValue> {
        let mut targets = Vec::new();
        for id in INTRO_IDS {
            if let Some(element) = root.query_selector(&format!("[data-intro=\"{}\"]", id))? {
                targets.push((id, element));
            }
        }

        Ok(Self {
            runtime: Rc::new(RefCell::new(IntroRuntime {
                timeline: Timeline::magical_intro(),
                scheduler: FrameScheduler::default(),
                targets,
            })),
            frame_loop: None,
        })
    }

    pub fn play(&mut self) -> Result<(), JsValue> {
        self.frame_loop = None;
        {
            let mut rt = self.runtime.borrow_mut();
            rt.timeline.start();
            rt.scheduler.start();
            rt.apply();
        }

        let weak = Rc::downgrade(&self.runtime);
        self.frame_loop = Some(FrameLoop::start(move |timestamp| {
            let mut keep_going = false;
            with_runtime(&weak, |rt| keep_going = rt.frame(timestamp));
            keep_going
        })?);
        Ok(())
    }

    /// Jump to the end, e.g. for reduced motion
    pub fn skip(&mut self) {
        self.frame_loop = None;
        if let Ok(mut rt) = self.runtime.try_borrow_mut() {
            rt.scheduler.stop();
            rt.timeline.complete_instantly();
            rt.apply();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn complete(&self) -> bool {
        self.runtime.try_borrow().map(|rt| rt.timeline.is_complete()).unwrap_or(false)
    }
}
