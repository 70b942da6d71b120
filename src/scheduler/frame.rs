/// Everything a scene needs to advance one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Scroll progress sampled at the start of this frame, in [0, 1]
    pub progress: f32,
    /// Seconds since the previous frame, capped
    pub dt: f32,
    /// Seconds since the scheduler was started
    pub elapsed: f32,
    /// Host timestamp in milliseconds
    pub timestamp_ms: f64,
}

/// A per-frame update target
///
/// Scenes receive the current state explicitly each frame instead of
/// capturing it, so a late frame always sees the latest progress.
pub trait Scene {
    fn update(&mut self, input: &FrameInput);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Not mounted or not visible; ticks are ignored
    Idle,
    /// Receiving frame callbacks
    Active,
}

/// Turns host frame callbacks into `FrameInput`s
///
/// No catch-up: a dropped frame just means a larger (capped) `dt` on the
/// next one.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    state: SchedulerState,
    max_dt: f32,
    start_ms: Option<f64>,
    last_ms: Option<f64>,
    frames: u64,
}

impl FrameScheduler {
    pub fn new(max_dt: f32) -> Self {
        Self {
            state: SchedulerState::Idle,
            max_dt: max_dt.max(0.0),
            start_ms: None,
            last_ms: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SchedulerState::Active
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn start(&mut self) {
        if self.state == SchedulerState::Active {
            return;
        }
        self.state = SchedulerState::Active;
        self.start_ms = None;
        self.last_ms = None;
    }

    pub fn stop(&mut self) {
        self.state = SchedulerState::Idle;
    }

    /// Build the input for this frame, or `None` while idle
    pub fn tick(&mut self, timestamp_ms: f64, progress: f32) -> Option<FrameInput> {
        if self.state == SchedulerState::Idle {
            return None;
        }

        let start = *self.start_ms.get_or_insert(timestamp_ms);
        let dt = match self.last_ms {
            Some(last) => (((timestamp_ms - last) / 1000.0) as f32).clamp(0.0, self.max_dt),
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        self.frames += 1;

        Some(FrameInput {
            progress: progress.clamp(0.0, 1.0),
            dt,
            elapsed: (((timestamp_ms - start) / 1000.0) as f32).max(0.0),
            timestamp_ms,
        })
    }

    /// Tick and, when active, feed the result to `scene`
    pub fn drive<S: Scene + ?Sized>(&mut self, scene: &mut S, timestamp_ms: f64, progress: f32) -> Option<FrameInput> {
        let input = self.tick(timestamp_ms, progress)?;
        scene.update(&input);
        Some(input)
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(0.1)
    }
}
