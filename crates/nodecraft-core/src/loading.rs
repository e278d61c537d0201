use rand::Rng;

use crate::constants::LOADING_STEP_MAX;

/// Simulated loading progress plus the once-only hide latch.
#[derive(Clone, Debug, Default)]
pub struct Loader {
    progress: f32,
    loaded: bool,
}

impl Loader {
    /// Advance by a random step; returns the new progress in percent.
    pub fn advance(&mut self, rng: &mut impl Rng) -> f32 {
        self.advance_by(rng.gen::<f32>() * LOADING_STEP_MAX)
    }

    pub fn advance_by(&mut self, step: f32) -> f32 {
        self.progress = (self.progress + step.max(0.0)).min(100.0);
        self.progress
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.progress >= 100.0
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Latch the loaded flag. Only the first call returns `true`; both the
    /// progress path and the fallback timer race to call this.
    pub fn mark_loaded(&mut self) -> bool {
        if self.loaded {
            return false;
        }
        self.loaded = true;
        true
    }
}
