use std::time::Duration;

use tracing::trace;

use crate::{config::TypewriterConfig, Result, ShowcaseError};

/// Reveals a fixed script one line at a time, as the about section's fake
/// terminal does. Driven by elapsed time like the autoplay scheduler.
#[derive(Debug, Clone)]
pub struct TerminalTyper {
    lines: Vec<String>,
    line_delay: Duration,
    current_line: usize,
    displayed: String,
    elapsed: Duration,
}

impl TerminalTyper {
    pub fn new(lines: Vec<String>, config: &TypewriterConfig) -> Result<Self> {
        if config.line_delay_ms == 0 {
            return Err(ShowcaseError::invalid_config(
                "typewriter line delay must be positive",
            ));
        }

        Ok(Self {
            lines,
            line_delay: config.line_delay(),
            current_line: 0,
            displayed: String::new(),
            elapsed: Duration::ZERO,
        })
    }

    pub fn displayed_text(&self) -> &str {
        &self.displayed
    }

    pub fn lines_shown(&self) -> usize {
        self.current_line
    }

    pub fn is_finished(&self) -> bool {
        self.current_line >= self.lines.len()
    }

    /// Feeds elapsed time and returns how many new lines became visible.
    pub fn advance(&mut self, delta: Duration) -> usize {
        if self.is_finished() {
            return 0;
        }

        self.elapsed = self.elapsed.saturating_add(delta);
        let mut revealed = 0;
        while self.elapsed >= self.line_delay && !self.is_finished() {
            self.elapsed -= self.line_delay;
            self.displayed.push_str(&self.lines[self.current_line]);
            self.displayed.push('\n');
            self.current_line += 1;
            revealed += 1;
        }

        if self.is_finished() {
            self.elapsed = Duration::ZERO;
        }
        if revealed > 0 {
            trace!(revealed, shown = self.current_line, "typewriter advanced");
        }
        revealed
    }

    pub fn reset(&mut self) {
        self.current_line = 0;
        self.displayed.clear();
        self.elapsed = Duration::ZERO;
    }
}
