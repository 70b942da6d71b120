use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::animation::HeroParallax;
use crate::scroll::{ProgressFormula, ScrollTracker};
use super::dom::{self, with_runtime};
use super::EventListener;

struct HeroRuntime {
    tracker: ScrollTracker,
    section: Option<Element>,
    castle: Option<Element>,
    text: Option<Element>,
}

impl HeroRuntime {
    fn on_scroll(&mut self) {
        let progress = self
            .tracker
            .on_scroll(dom::measure(self.section.as_ref()), dom::viewport_height());
        self.apply(HeroParallax::at(progress));
    }

    fn apply(&self, values: HeroParallax) {
        if let Some(castle) = &self.castle {
            dom::set_style(castle, "transform", &format!("scale({:.4})", values.castle_scale));
            dom::set_style(castle, "opacity", &format!("{:.4}", values.castle_opacity));
        }
        if let Some(text) = &self.text {
            dom::set_style(text, "transform", &format!("translateY({:.2}px)", values.text_offset_y));
            dom::set_style(text, "opacity", &format!("{:.4}", values.text_opacity));
        }
    }
}

/// Sticky parallax hero: the castle image zooms while the text lifts away
#[wasm_bindgen]
pub struct HeroParallaxBinding {
    runtime: Rc<RefCell<HeroRuntime>>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl HeroParallaxBinding {
    #[wasm_bindgen(constructor)]
    pub fn new() -> HeroParallaxBinding {
        Self {
            runtime: Rc::new(RefCell::new(HeroRuntime {
                tracker: ScrollTracker::new(ProgressFormula::StickyRange),
                section: None,
                castle: None,
                text: None,
            })),
            listeners: Vec::new(),
        }
    }

    pub fn mount(&mut self, section: Element, castle: Option<Element>, text: Option<Element>) -> Result<(), JsValue> {
        self.unmount();
        {
            let mut rt = self.runtime.borrow_mut();
            rt.section = Some(section);
            rt.castle = castle;
            rt.text = text;
            rt.tracker.mount();
            rt.on_scroll();
        }

        let window = dom::window()?;
        for event in ["scroll", "resize"] {
            let weak = Rc::downgrade(&self.runtime);
            self.listeners.push(EventListener::new(&window, event, move |_| {
                with_runtime(&weak, HeroRuntime::on_scroll);
            })?);
        }
        Ok(())
    }

    pub fn unmount(&mut self) {
        self.listeners.clear();
        if let Ok(mut rt) = self.runtime.try_borrow_mut() {
            rt.tracker.unmount();
            rt.section = None;
            rt.castle = None;
            rt.text = None;
        }
    }

    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f32 {
        self.runtime.try_borrow().map(|rt| rt.tracker.progress()).unwrap_or(0.0)
    }
}

impl Default for HeroParallaxBinding {
    fn default() -> Self {
        Self::new()
    }
}
