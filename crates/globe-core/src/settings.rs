use crate::constants::{PROGRESS_MAX, PROGRESS_MIN, PROGRESS_STEP};

/// Values exposed on the tuning panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    progress: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            progress: PROGRESS_MIN,
        }
    }
}

impl Settings {
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Clamp to the slider range and snap to its step. Non-finite input is
    /// ignored. Returns the stored value.
    pub fn set_progress(&mut self, value: f32) -> f32 {
        if value.is_finite() {
            // divide by the step count so the result is the nearest f32 to a step
            let steps = (1.0 / PROGRESS_STEP).round();
            let snapped = (value * steps).round() / steps;
            self.progress = snapped.clamp(PROGRESS_MIN, PROGRESS_MAX);
        }
        self.progress
    }
}
