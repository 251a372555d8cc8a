use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[default]
    Up,
    Down,
}

impl ScrollDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollDirection::Up => "up",
            ScrollDirection::Down => "down",
        }
    }

    /// The bar slides out of view while the page scrolls down.
    pub fn hides_bar(&self) -> bool {
        matches!(self, ScrollDirection::Down)
    }

    /// Vertical offset of the bar for this direction.
    pub fn bar_offset_px(&self, hidden_offset_px: u32) -> i32 {
        if self.hides_bar() {
            -i32::try_from(hidden_offset_px).unwrap_or(i32::MAX)
        } else {
            0
        }
    }
}

/// Most recent scroll observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollSample {
    pub position: u32,
    pub direction: ScrollDirection,
}

/// Derives an up/down signal from consecutive vertical scroll offsets.
#[derive(Debug, Clone, Default)]
pub struct ScrollDirectionTracker {
    last: ScrollSample,
}

impl ScrollDirectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> ScrollDirection {
        self.last.direction
    }

    pub fn position(&self) -> u32 {
        self.last.position
    }

    pub fn sample(&self) -> ScrollSample {
        self.last
    }

    /// Record a new vertical offset and return the resulting direction.
    ///
    /// Overscroll can report negative offsets, so they count as the top of
    /// the page. An unchanged offset keeps the previous direction.
    pub fn observe(&mut self, offset: f64) -> ScrollDirection {
        let position = clamp_offset(offset);
        let direction = match position.cmp(&self.last.position) {
            std::cmp::Ordering::Greater => ScrollDirection::Down,
            std::cmp::Ordering::Less => ScrollDirection::Up,
            std::cmp::Ordering::Equal => self.last.direction,
        };

        if direction != self.last.direction {
            log::trace!(
                "scroll direction {} -> {} at {}px",
                self.last.direction.as_str(),
                direction.as_str(),
                position
            );
        }

        self.last = ScrollSample {
            position,
            direction,
        };
        direction
    }
}

fn clamp_offset(offset: f64) -> u32 {
    if offset.is_nan() || offset <= 0.0 {
        0
    } else if offset >= u32::MAX as f64 {
        u32::MAX
    } else {
        offset.round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tracker: &mut ScrollDirectionTracker, offsets: &[f64]) -> Vec<ScrollDirection> {
        offsets.iter().map(|&o| tracker.observe(o)).collect()
    }

    #[test]
    fn test_initial_state() {
        let tracker = ScrollDirectionTracker::new();
        assert_eq!(tracker.direction(), ScrollDirection::Up);
        assert_eq!(tracker.position(), 0);
    }

    #[test]
    fn test_down_down_up_scenario() {
        let mut tracker = ScrollDirectionTracker::new();
        let directions = run(&mut tracker, &[50.0, 120.0, 90.0]);
        assert_eq!(
            directions,
            vec![ScrollDirection::Down, ScrollDirection::Down, ScrollDirection::Up]
        );
        assert_eq!(tracker.position(), 90);
    }

    #[test]
    fn test_equal_offset_keeps_direction() {
        let mut tracker = ScrollDirectionTracker::new();
        tracker.observe(200.0);
        assert_eq!(tracker.observe(200.0), ScrollDirection::Down);

        tracker.observe(100.0);
        assert_eq!(tracker.observe(100.0), ScrollDirection::Up);
    }

    #[test]
    fn test_negative_offsets_clamp_to_top() {
        let mut tracker = ScrollDirectionTracker::new();
        tracker.observe(40.0);
        assert_eq!(tracker.observe(-15.0), ScrollDirection::Up);
        assert_eq!(tracker.position(), 0);

        // Bounce back to -5 from 0 is not movement.
        assert_eq!(tracker.observe(-5.0), ScrollDirection::Up);
        assert_eq!(tracker.position(), 0);
    }

    #[test]
    fn test_nan_offset_counts_as_top() {
        let mut tracker = ScrollDirectionTracker::new();
        tracker.observe(10.0);
        assert_eq!(tracker.observe(f64::NAN), ScrollDirection::Up);
        assert_eq!(tracker.position(), 0);
    }

    #[test]
    fn test_last_non_equal_comparison_wins() {
        let mut tracker = ScrollDirectionTracker::new();
        let directions = run(&mut tracker, &[10.0, 30.0, 30.0, 30.0, 5.0, 5.0, 6.0]);
        assert_eq!(directions.last(), Some(&ScrollDirection::Down));
        assert_eq!(directions[4], ScrollDirection::Up);
        assert_eq!(directions[5], ScrollDirection::Up);
    }

    #[test]
    fn test_hides_bar() {
        assert!(ScrollDirection::Down.hides_bar());
        assert!(!ScrollDirection::Up.hides_bar());
        assert_eq!(ScrollDirection::Down.bar_offset_px(120), -120);
        assert_eq!(ScrollDirection::Up.bar_offset_px(120), 0);
    }
}
