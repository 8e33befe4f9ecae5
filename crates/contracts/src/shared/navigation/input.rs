//! Discrete input signals: arrow keys, horizontal swipes, viewport width.

/// Команда навигации по книге
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    Next,
    Previous,
    JumpTo(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    ArrowLeft,
    ArrowRight,
}

impl NavigationKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(NavigationKey::ArrowLeft),
            "ArrowRight" => Some(NavigationKey::ArrowRight),
            _ => None,
        }
    }

    pub fn command(self) -> NavigationCommand {
        match self {
            NavigationKey::ArrowLeft => NavigationCommand::Previous,
            NavigationKey::ArrowRight => NavigationCommand::Next,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left
    Leftward,
    Rightward,
}

impl SwipeDirection {
    pub fn command(self) -> NavigationCommand {
        match self {
            SwipeDirection::Leftward => NavigationCommand::Next,
            SwipeDirection::Rightward => NavigationCommand::Previous,
        }
    }
}

/// Отслеживание горизонтального свайпа между touchstart и touchend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold_px: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px: threshold_px.abs(),
            start_x: None,
        }
    }

    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Ends the gesture. Only a drag longer than the threshold counts;
    /// an end without a start is ignored.
    pub fn finish(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let dx = x - start;
        if dx.abs() <= self.threshold_px {
            return None;
        }
        Some(if dx < 0.0 {
            SwipeDirection::Leftward
        } else {
            SwipeDirection::Rightward
        })
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}

pub fn is_wide_viewport(width_px: f64, breakpoint_px: u32) -> bool {
    width_px >= f64::from(breakpoint_px)
}

/// CSS media query matching [`is_wide_viewport`].
pub fn media_query(breakpoint_px: u32) -> String {
    format!("(min-width: {breakpoint_px}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            NavigationKey::from_key("ArrowLeft").map(NavigationKey::command),
            Some(NavigationCommand::Previous)
        );
        assert_eq!(
            NavigationKey::from_key("ArrowRight").map(NavigationKey::command),
            Some(NavigationCommand::Next)
        );
        assert_eq!(NavigationKey::from_key("ArrowUp"), None);
        assert_eq!(NavigationKey::from_key("arrowleft"), None);
    }

    #[test]
    fn test_swipe_threshold_is_strict() {
        let mut tracker = SwipeTracker::new(40.0);
        tracker.start(200.0);
        assert_eq!(tracker.finish(160.0), None);

        tracker.start(200.0);
        assert_eq!(tracker.finish(159.0), Some(SwipeDirection::Leftward));

        tracker.start(100.0);
        assert_eq!(tracker.finish(180.0), Some(SwipeDirection::Rightward));
    }

    #[test]
    fn test_swipe_commands() {
        assert_eq!(SwipeDirection::Leftward.command(), NavigationCommand::Next);
        assert_eq!(SwipeDirection::Rightward.command(), NavigationCommand::Previous);
    }

    #[test]
    fn test_finish_without_start_is_ignored() {
        let mut tracker = SwipeTracker::new(40.0);
        assert_eq!(tracker.finish(0.0), None);

        tracker.start(300.0);
        assert!(tracker.is_tracking());
        tracker.cancel();
        assert_eq!(tracker.finish(0.0), None);
    }

    #[test]
    fn test_gesture_is_consumed_once() {
        let mut tracker = SwipeTracker::new(40.0);
        tracker.start(300.0);
        assert!(tracker.finish(0.0).is_some());
        assert_eq!(tracker.finish(0.0), None);
    }

    #[test]
    fn test_viewport_breakpoint() {
        assert!(is_wide_viewport(1024.0, 1024));
        assert!(!is_wide_viewport(1023.5, 1024));
        assert_eq!(media_query(1024), "(min-width: 1024px)");
    }
}
