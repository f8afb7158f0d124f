//! Mount-time animations as pure functions of elapsed seconds.
//!
//! Every animation starts when the dashboard is first shown and runs once;
//! nothing is cancelled or sequenced, each section only has a start delay.

/// Length of a section's fade/slide-in.
pub const ENTRANCE_SECS: f64 = 0.5;

/// Length of the stat-card count-up.
pub const COUNT_UP_SECS: f64 = 2.0;

/// Slide distance in points.
pub const SLIDE_DISTANCE: f32 = 20.0;

/// Direction a section slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    FromAbove,
    FromBelow,
    FromLeft,
    FromRight,
}

/// One section's entrance: a delay and a slide direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub delay: f64,
    pub slide: Slide,
}

impl Entrance {
    pub const HEADER: Entrance = Entrance::new(0.0, Slide::FromAbove);
    pub const CARDS: Entrance = Entrance::new(0.0, Slide::FromBelow);
    pub const TREND: Entrance = Entrance::new(0.2, Slide::FromLeft);
    pub const SIDEBAR: Entrance = Entrance::new(0.4, Slide::FromRight);
    pub const DISTRICTS: Entrance = Entrance::new(0.6, Slide::FromBelow);

    pub const fn new(delay: f64, slide: Slide) -> Self {
        Self { delay, slide }
    }

    /// Eased progress in `0..=1` at `elapsed` seconds after mount.
    pub fn progress(&self, elapsed: f64) -> f32 {
        ease_out_cubic(linear_progress(elapsed - self.delay, ENTRANCE_SECS)) as f32
    }

    /// Remaining displacement in points at the given progress.
    pub fn offset(&self, progress: f32) -> f32 {
        SLIDE_DISTANCE * (1.0 - progress.clamp(0.0, 1.0))
    }

    pub fn finished(&self, elapsed: f64) -> bool {
        elapsed >= self.delay + ENTRANCE_SECS
    }
}

/// The latest moment any section is still moving.
pub fn all_finished(elapsed: f64) -> bool {
    elapsed >= COUNT_UP_SECS.max(Entrance::DISTRICTS.delay + ENTRANCE_SECS)
}

/// Value a counting number shows `elapsed` seconds after mount.
pub fn count_up(target: f64, elapsed: f64) -> f64 {
    let t = linear_progress(elapsed, COUNT_UP_SECS);
    if t >= 1.0 {
        target
    } else {
        target * ease_out_expo(t)
    }
}

fn linear_progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_waits_for_its_delay() {
        let e = Entrance::TREND;
        assert_eq!(e.progress(0.0), 0.0);
        assert_eq!(e.progress(0.2), 0.0);
        assert!(e.progress(0.45) > 0.0);
        assert_eq!(e.progress(0.75), 1.0);
        assert!(e.finished(0.71));
        assert!(!e.finished(0.69));
    }

    #[test]
    fn entrance_progress_is_monotonic_and_bounded() {
        let e = Entrance::DISTRICTS;
        let steps: Vec<f32> = (0..200).map(|i| e.progress(i as f64 * 0.01)).collect();
        assert!(steps.windows(2).all(|w| w[0] <= w[1]));
        assert!(steps.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn offset_shrinks_to_zero() {
        let e = Entrance::CARDS;
        assert_eq!(e.offset(0.0), SLIDE_DISTANCE);
        assert_eq!(e.offset(1.0), 0.0);
    }

    #[test]
    fn count_up_lands_exactly_on_target() {
        assert_eq!(count_up(1234.0, 0.0), 0.0);
        assert_eq!(count_up(1234.0, COUNT_UP_SECS), 1234.0);
        assert_eq!(count_up(1234.0, 10.0), 1234.0);
        let mid = count_up(128.5, 1.0);
        assert!(mid > 0.0 && mid < 128.5);
    }

    #[test]
    fn nothing_moves_after_the_last_section() {
        assert!(!all_finished(1.0));
        assert!(all_finished(2.0));
    }
}
