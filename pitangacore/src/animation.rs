//! Hover easing for pitanga buttons
//!
//! Buttons do not snap between their idle and hovered colours. Each frame the
//! hover progress moves a fixed fraction of the remaining distance toward its
//! target, which gives a quick ease-out without tracking wall-clock time.

/// Fraction of the remaining distance covered per frame.
pub const HOVER_EASE: f32 = 0.18;

/// Below this distance the progress snaps onto its target.
const SETTLE_EPSILON: f32 = 0.004;

/// Linear interpolation between two values
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Per-button hover progress: 0.0 idle, 1.0 fully highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoverAnimation {
    progress: f32,
}

impl HoverAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame toward the hovered/idle target and return the new progress.
    pub fn step(&mut self, hovered: bool) -> f32 {
        let target = if hovered { 1.0 } else { 0.0 };
        self.progress = lerp(self.progress, target, HOVER_EASE);
        if (self.progress - target).abs() < SETTLE_EPSILON {
            self.progress = target;
        }
        self.progress
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// True while the progress sits strictly between idle and highlighted.
    pub fn is_animating(&self) -> bool {
        self.progress > 0.0 && self.progress < 1.0
    }
}
