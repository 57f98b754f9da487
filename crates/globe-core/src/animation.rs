//! Play/stop state machine behind the per-frame callback chain.
//!
//! The driver (requestAnimationFrame on web, redraw requests on native)
//! owns the actual scheduling. This type only answers two questions: should
//! this tick render and reschedule, and does `play()` need to restart the
//! chain. Exactly one chain exists at any time.

use crate::constants::TIME_STEP;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub time: f32,
    pub playing: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            time: 0.0,
            playing: true,
        }
    }
}

/// What the driver should do with the frame it was just handed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    /// Render with this shader time, then schedule the next frame.
    Render { time: f32 },
    /// Do not render and do not reschedule; the chain ends here.
    Halt,
}

#[derive(Clone, Debug)]
pub struct RenderLoop {
    state: AnimationState,
    step: f32,
    // a frame callback is queued with the driver
    pending: bool,
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new(TIME_STEP)
    }
}

impl RenderLoop {
    pub fn new(step: f32) -> Self {
        Self {
            state: AnimationState::default(),
            step,
            pending: false,
        }
    }

    pub fn state(&self) -> PlaybackState {
        if self.state.playing {
            PlaybackState::Playing
        } else {
            PlaybackState::Stopped
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state.playing
    }

    pub fn time(&self) -> f32 {
        self.state.time
    }

    pub fn animation(&self) -> AnimationState {
        self.state
    }

    /// Whether a frame is currently queued with the driver.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Call once when the driver queues the very first frame.
    ///
    /// Returns `false` if a frame is already pending.
    pub fn start(&mut self) -> bool {
        if self.pending || !self.state.playing {
            return false;
        }
        self.pending = true;
        true
    }

    /// Playing -> Stopped. The pending frame, if any, will halt.
    pub fn stop(&mut self) {
        self.state.playing = false;
    }

    /// Stopped -> Playing.
    ///
    /// Returns `true` when the caller must queue a frame to re-enter the
    /// chain. A stop/play pair inside one frame reuses the still-pending
    /// callback instead of starting a second chain.
    pub fn play(&mut self) -> bool {
        if self.state.playing {
            return false;
        }
        self.state.playing = true;
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Flip between the two states; returns whether a frame must be queued.
    pub fn toggle(&mut self) -> bool {
        if self.state.playing {
            self.stop();
            false
        } else {
            self.play()
        }
    }

    /// Consume the pending frame callback.
    pub fn tick(&mut self) -> Tick {
        self.pending = false;
        if !self.state.playing {
            return Tick::Halt;
        }
        self.state.time += self.step;
        self.pending = true;
        Tick::Render {
            time: self.state.time,
        }
    }
}
