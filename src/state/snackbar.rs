//! Transient status message with a fade-out animation

use std::time::{Duration, Instant};

/// Visual tone of a snackbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnackbarKind {
    Info,
    Success,
    Error,
}

/// A short message shown at the bottom of the form
#[derive(Debug, Clone)]
pub struct Snackbar {
    pub message: String,
    pub kind: SnackbarKind,
    /// When the snackbar was shown
    pub shown_at: Instant,
    /// Total time on screen, including the fade
    pub duration: Duration,
}

impl Snackbar {
    /// Duration of the fade-out at the end of the snackbar's life
    const FADE_DURATION: Duration = Duration::from_millis(400);

    pub fn new(message: impl Into<String>, kind: SnackbarKind, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }

    /// Opacity in `0.0..=1.0`; stays at 1.0 until the fade window starts
    pub fn opacity(&self) -> f32 {
        self.opacity_at(Instant::now())
    }

    fn opacity_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        let fade = Self::FADE_DURATION.min(self.duration);
        let fade_start = self.duration - fade;
        if elapsed >= self.duration {
            return 0.0;
        }
        if elapsed <= fade_start {
            return 1.0;
        }
        let progress = (elapsed - fade_start).as_secs_f32() / fade.as_secs_f32();
        1.0 - simple_easing::cubic_in(progress.clamp(0.0, 1.0))
    }

    /// Whether the snackbar is far enough into its fade to render dimmed
    pub fn is_fading(&self) -> bool {
        self.opacity() < 0.5
    }
}
