//! Rotating hero headline on the home page

use std::time::{Duration, Instant};

/// Hero headlines, shown in rotation
pub const HEADLINES: [&str; 3] = [
    "Expert Dental Care for a Life-Changing Smile",
    "Painless Cosmetic Dentistry in the Heart of London",
    "Trusted NHS & Private Care for the Whole Family",
];

/// Hero headline rotation state
#[derive(Debug)]
pub struct HeroState {
    /// When the rotation started
    pub start_time: Instant,
    /// Index into [`HEADLINES`]
    pub headline_index: usize,
    /// Fade-in progress of the current headline (0.0 to 1.0)
    pub fade: f32,
}

impl HeroState {
    /// How long each headline stays up (4 seconds)
    const ROTATE_EVERY: Duration = Duration::from_millis(4000);
    /// Fade-in at the start of each headline
    const FADE_DURATION: Duration = Duration::from_millis(500);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            headline_index: 0,
            fade: 1.0,
        }
    }

    /// Update rotation based on elapsed time
    pub fn update(&mut self) {
        self.update_at(self.start_time.elapsed());
    }

    fn update_at(&mut self, elapsed: Duration) {
        let period = Self::ROTATE_EVERY.as_millis();
        let elapsed_ms = elapsed.as_millis();
        self.headline_index = ((elapsed_ms / period) as usize) % HEADLINES.len();

        // The very first headline is shown without a fade
        if elapsed_ms < period {
            self.fade = 1.0;
            return;
        }
        let into_headline = (elapsed_ms % period) as f32;
        let progress = (into_headline / Self::FADE_DURATION.as_millis() as f32).min(1.0);
        self.fade = simple_easing::cubic_out(progress);
    }

    pub fn headline(&self) -> &'static str {
        HEADLINES[self.headline_index]
    }
}

impl Default for HeroState {
    fn default() -> Self {
        Self::new()
    }
}
