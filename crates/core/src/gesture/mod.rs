//! Drag-release interpretation for the carousel.
//!
//! A release is committed only when the product of travelled distance and
//! release velocity is large enough, so a short fast flick turns the page
//! while a slow drag of the same length snaps back.

use crate::{state::Direction, Result, ShowcaseError};

/// Default commit threshold in px·px/ms.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 10_000.0;

/// `|offset| * velocity` for a drag release.
pub fn swipe_power(offset: f64, velocity: f64) -> f64 {
    offset.abs() * velocity
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureInterpreter {
    threshold: f64,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl GestureInterpreter {
    pub fn new(threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ShowcaseError::invalid_config(format!(
                "swipe threshold must be a non-negative number, got {threshold}"
            )));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Maps a release to `Forward` (advance by one), `Backward` (retreat by
    /// one) or nothing. Dragging towards negative offsets with negative
    /// power moves forward, matching a leftward swipe on a horizontal strip.
    /// Non-finite input never commits.
    pub fn interpret(&self, offset: f64, velocity: f64) -> Option<Direction> {
        let confidence = swipe_power(offset, velocity);
        if !confidence.is_finite() {
            return None;
        }
        if confidence < -self.threshold {
            Some(Direction::Forward)
        } else if confidence > self.threshold {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}
