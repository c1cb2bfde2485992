//! Drawer-open progress and the derived header values
//!
//! The navigation layer owns a single progress signal in [0, 1]
//! (0 = closed, 1 = fully open). Everything visual derives from it on the
//! spot: the header's horizontal offset and its opacity are pure functions
//! of the latest progress value, recomputed on every frame that uses them.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Drawer slide duration (matches a platform drawer's snappy feel)
const SLIDE_DURATION: Duration = Duration::from_millis(250);

/// Header offset breakpoints: progress (0, 1) maps to (-100, 0) logical px
const HEADER_OFFSET: [(f32, f32); 2] = [(0.0, -100.0), (1.0, 0.0)];

/// Header opacity breakpoints: progress (0, 0.5, 1) maps to (0, 0.1, 1)
const HEADER_OPACITY: [(f32, f32); 3] = [(0.0, 0.0), (0.5, 0.1), (1.0, 1.0)];

/// Piecewise-linear interpolation over sorted (input, output) breakpoints,
/// clamped to the first and last outputs outside the input domain
fn interpolate(points: &[(f32, f32)], t: f32) -> f32 {
    let (first_x, first_y) = points[0];
    if t <= first_x {
        return first_y;
    }
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if t <= x1 {
            let span = x1 - x0;
            if span <= f32::EPSILON {
                return y1;
            }
            return y0 + (y1 - y0) * ((t - x0) / span);
        }
    }
    points[points.len() - 1].1
}

/// Horizontal header offset in logical pixels for a drawer progress value
pub fn header_offset(progress: f32) -> f32 {
    interpolate(&HEADER_OFFSET, progress)
}

/// Header opacity for a drawer progress value
pub fn header_opacity(progress: f32) -> f32 {
    interpolate(&HEADER_OPACITY, progress)
}

/// Create the drawer slide easing
fn slide_easing() -> Easing {
    Easing::EASE_OUT.with_duration(SLIDE_DURATION)
}

/// Drawer open/close transition state
#[derive(Debug)]
pub struct DrawerAnimation {
    animation: Animated<f32>,
}

impl Default for DrawerAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawerAnimation {
    /// Create a new animation, starting closed
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, slide_easing()),
        }
    }

    /// Animate towards fully open
    pub fn open(&mut self) {
        self.animation.update(1.0.into());
    }

    /// Animate towards fully closed
    pub fn close(&mut self) {
        self.animation.update(0.0.into());
    }

    /// Jump straight to the target without animating (reduce motion)
    pub fn snap(&mut self, open: bool) {
        let target = if open { 1.0 } else { 0.0 };
        self.animation = Animated::transition(target, slide_easing());
    }

    /// Current progress (0.0 closed to 1.0 open)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    /// Check if the transition is in flight
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the transition forward in time
    /// Must be called on each animation frame to update the value
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_endpoints_and_midpoint() {
        assert_eq!(header_offset(0.0), -100.0);
        assert_eq!(header_offset(1.0), 0.0);
        assert_eq!(header_offset(0.5), -50.0);
    }

    #[test]
    fn opacity_breakpoints() {
        assert_eq!(header_opacity(0.0), 0.0);
        assert_eq!(header_opacity(0.5), 0.1);
        assert_eq!(header_opacity(1.0), 1.0);
    }

    #[test]
    fn opacity_linear_between_breakpoints() {
        assert!((header_opacity(0.25) - 0.05).abs() < 1e-6);
        assert!((header_opacity(0.75) - 0.55).abs() < 1e-6);
    }

    #[test]
    fn mappings_clamp_outside_domain() {
        assert_eq!(header_offset(-0.5), -100.0);
        assert_eq!(header_offset(1.5), 0.0);
        assert_eq!(header_opacity(-0.5), 0.0);
        assert_eq!(header_opacity(1.5), 1.0);
    }

    #[test]
    fn reevaluation_is_idempotent() {
        for p in [0.0, 0.1, 0.25, 0.5, 0.9, 1.0] {
            assert_eq!(header_offset(p), header_offset(p));
            assert_eq!(header_opacity(p), header_opacity(p));
        }
    }

    #[test]
    fn snap_jumps_to_target() {
        let mut anim = DrawerAnimation::new();
        assert_eq!(anim.progress(), 0.0);

        anim.snap(true);
        assert_eq!(anim.progress(), 1.0);
        assert!(!anim.is_animating());

        anim.snap(false);
        assert_eq!(anim.progress(), 0.0);
    }

    #[test]
    fn open_starts_transition() {
        let mut anim = DrawerAnimation::new();
        anim.open();
        assert!(anim.is_animating() || anim.progress() > 0.0);
    }
}
