//! Staggered entrance timeline
//!
//! Plays a sequence of tweens where each one starts relative to the end
//! of the timeline built so far, so entries can overlap the previous one
//! (`-0.8` starts 0.8s before the current end).

use super::easing::{Easing, ease};

/// One entry on the timeline
#[derive(Debug, Clone)]
pub struct Tween {
    pub id: String,
    /// Seconds relative to the current end of the timeline (negative overlaps)
    pub offset: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(id: &str, offset: f32, duration: f32, easing: Easing) -> Self {
        Self { id: id.to_owned(), offset, duration, easing }
    }
}

/// Where a tween sits on the timeline and how far along it is
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TweenState {
    /// Absolute start in seconds, delay excluded
    pub start: f32,
    pub duration: f32,
    /// Linear 0..1
    pub local_progress: f32,
    /// Eased value, may overshoot for `BackOut`
    pub value: f32,
}

impl TweenState {
    fn sample(&mut self, t: f32, easing: Easing) {
        self.local_progress = match self.duration {
            d if d <= 0.0 => f32::from(u8::from(t >= self.start)),
            d => ((t - self.start) / d).clamp(0.0, 1.0),
        };
        self.value = ease(self.local_progress, easing);
    }

    fn pin(&mut self, v: f32) {
        self.local_progress = v;
        self.value = v;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayState {
    Idle,
    Playing,
    Finished,
}

#[derive(Debug, Clone)]
struct Entry {
    id: String,
    easing: Easing,
    state: TweenState,
}

#[derive(Debug, Clone)]
pub struct Timeline {
    delay: f32,
    elapsed: f32,
    end: f32,
    play: PlayState,
    entries: Vec<Entry>,
}

impl Timeline {
    pub fn new(delay: f32) -> Self {
        Self {
            delay: delay.max(0.0),
            elapsed: 0.0,
            end: 0.0,
            play: PlayState::Idle,
            entries: Vec::new(),
        }
    }

    /// The hero entrance: overlay fade, tagline, title, description, call to action
    pub fn magical_intro() -> Self {
        let mut tl = Timeline::new(0.3);
        tl.push(Tween::new("overlay", 0.0, 1.5, Easing::EaseOut))
            .push(Tween::new("subtitle", -0.8, 0.8, Easing::EaseOut))
            .push(Tween::new("title", -0.5, 1.2, Easing::EaseOut))
            .push(Tween::new("description", -0.4, 0.7, Easing::EaseOut))
            .push(Tween::new("cta", -0.3, 0.6, Easing::BackOut));
        tl
    }

    /// Append a tween; its start is clamped so it never precedes time zero
    pub fn push(&mut self, tween: Tween) -> &mut Self {
        let start = (self.end + tween.offset).max(0.0);
        let duration = tween.duration.max(0.0);
        self.end = self.end.max(start + duration);
        self.entries.push(Entry {
            id: tween.id,
            easing: tween.easing,
            state: TweenState { start, duration, ..Default::default() },
        });
        self
    }

    /// Total length in seconds, delay included
    pub fn duration(&self) -> f32 {
        self.delay + self.end
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// 0 before the start, 1 once finished
    pub fn progress(&self) -> f32 {
        match self.duration() {
            total if total > 0.0 => (self.elapsed / total).min(1.0),
            _ if self.play == PlayState::Finished => 1.0,
            _ => 0.0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.play == PlayState::Playing
    }

    pub fn is_complete(&self) -> bool {
        self.play == PlayState::Finished
    }

    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.play = PlayState::Playing;
        self.resample();
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.play = PlayState::Idle;
        self.entries.iter_mut().for_each(|e| e.state.pin(0.0));
    }

    /// Jump straight to the final frame
    pub fn complete_instantly(&mut self) {
        self.elapsed = self.duration();
        self.play = PlayState::Finished;
        self.entries.iter_mut().for_each(|e| e.state.pin(1.0));
    }

    pub fn update(&mut self, dt: f32) {
        if self.play != PlayState::Playing {
            return;
        }
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration());
        if self.elapsed >= self.duration() {
            self.play = PlayState::Finished;
        }
        self.resample();
    }

    /// Pause at a fraction of the total length
    pub fn scrub(&mut self, progress: f32) {
        let progress = progress.clamp(0.0, 1.0);
        self.elapsed = progress * self.duration();
        self.play = if progress >= 1.0 { PlayState::Finished } else { PlayState::Idle };
        self.resample();
    }

    fn resample(&mut self) {
        let t = self.elapsed - self.delay;
        for entry in &mut self.entries {
            entry.state.sample(t, entry.easing);
        }
    }

    /// Eased value for a tween; unknown ids read as finished
    pub fn value(&self, id: &str) -> f32 {
        self.state(id).map_or(1.0, |s| s.value)
    }

    pub fn state(&self, id: &str) -> Option<TweenState> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.state)
    }
}
