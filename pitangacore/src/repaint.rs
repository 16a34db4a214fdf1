//! Repaint controller for pitanga screens
//!
//! egui only repaints when input arrives. Hover easing needs a few frames
//! after the pointer stops moving, so screens report "still animating" and the
//! controller asks for the next frame at the animation rate. When nothing is
//! moving, no repaint is scheduled and the UI thread sleeps until input.

use std::time::Duration;

/// Frame interval while an animation is in flight (~60 Hz).
pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame; always painted.
    Init,
    /// User input (mouse move, key press, scroll).
    Input,
    /// A follow-up frame requested by an animation.
    Animation,
}

/// Drop this into the app struct; call [`begin_frame`] at the top of
/// `update()` and [`end_frame`] at the bottom.
///
/// [`begin_frame`]: RepaintController::begin_frame
/// [`end_frame`]: RepaintController::end_frame
#[derive(Debug)]
pub struct RepaintController {
    animating: bool,
    frame: u64,
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            animating: false,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Request a follow-up frame after this one.
    pub fn mark_animating(&mut self) {
        self.animating = true;
    }

    /// Classify the frame and reset the per-frame animation flag.
    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.raw_scroll_delta != egui::Vec2::ZERO
                || i.pointer.is_moving()
        });
        self.reason = classify(self.frame, had_input, self.animating);
        log::trace!("frame {}: {:?}", self.frame, self.reason);
        self.animating = false;
    }

    /// Schedule the next frame if anything marked itself animating.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;
        if self.animating {
            ctx.request_repaint_after(ANIMATION_FRAME);
        }
    }
}

fn classify(frame: u64, had_input: bool, was_animating: bool) -> RepaintReason {
    if frame == 0 {
        RepaintReason::Init
    } else if !had_input && was_animating {
        RepaintReason::Animation
    } else {
        RepaintReason::Input
    }
}
