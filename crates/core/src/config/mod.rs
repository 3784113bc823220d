use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{Result, ShowcaseError};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub carousel: CarouselConfig,
    pub typewriter: TypewriterConfig,
}

impl AppConfig {
    /// Loads a JSON configuration file. Missing sections and fields fall back
    /// to their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.carousel.validate()?;
        self.typewriter.validate()
    }
}

/// Timing and gesture settings for the testimonial carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub autoplay_interval_ms: u64,
    /// Minimum `|offset| * velocity` magnitude for a drag to commit.
    pub swipe_threshold: f64,
    /// Whether the carousel starts in the autoplaying state.
    pub autoplay: bool,
    /// Restart the autoplay interval whenever the user navigates manually.
    /// Off by default: manual and automatic advances share one timer.
    pub reset_autoplay_on_navigate: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5_000,
            swipe_threshold: 10_000.0,
            autoplay: true,
            reset_autoplay_on_navigate: false,
        }
    }
}

impl CarouselConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(ShowcaseError::invalid_config(
                "autoplay interval must be positive",
            ));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(ShowcaseError::invalid_config(format!(
                "swipe threshold must be a non-negative number, got {}",
                self.swipe_threshold
            )));
        }
        Ok(())
    }
}

/// Configuration for the terminal typing effect in the about section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub line_delay_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self { line_delay_ms: 100 }
    }
}

impl TypewriterConfig {
    pub fn line_delay(&self) -> Duration {
        Duration::from_millis(self.line_delay_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.line_delay_ms == 0 {
            return Err(ShowcaseError::invalid_config(
                "typewriter line delay must be positive",
            ));
        }
        Ok(())
    }
}
