use std::{str::FromStr, time::Duration};

use tracing::warn;

use crate::{carousel::CarouselController, Result, ShowcaseError};

/// One scripted carousel interaction, written as `next`, `prev`, `goto:K`,
/// `pause`, `resume`, `swipe:OFFSET:VELOCITY` or `wait:MS`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptStep {
    Next,
    Previous,
    GoTo(usize),
    Pause,
    Resume,
    Swipe { offset: f64, velocity: f64 },
    Wait(Duration),
}

impl FromStr for ScriptStep {
    type Err = ShowcaseError;

    fn from_str(value: &str) -> Result<Self> {
        let mut parts = value.trim().split(':');
        let command = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = parts.collect();

        let step = match (command.as_str(), args.as_slice()) {
            ("next", []) => Self::Next,
            ("prev" | "previous", []) => Self::Previous,
            ("pause", []) => Self::Pause,
            ("resume", []) => Self::Resume,
            ("goto", [index]) => Self::GoTo(parse_number(value, index)?),
            ("wait", [ms]) => Self::Wait(Duration::from_millis(parse_number(value, ms)?)),
            ("swipe", [offset, velocity]) => Self::Swipe {
                offset: parse_number(value, offset)?,
                velocity: parse_number(value, velocity)?,
            },
            _ => return Err(ShowcaseError::msg(format!("unrecognised step `{value}`"))),
        };
        Ok(step)
    }
}

fn parse_number<N: FromStr>(step: &str, raw: &str) -> Result<N> {
    raw.trim()
        .parse()
        .map_err(|_| ShowcaseError::msg(format!("invalid number `{raw}` in step `{step}`")))
}

impl ScriptStep {
    pub fn apply<T>(self, carousel: &mut CarouselController<T>) -> Result<()> {
        match self {
            Self::Next => carousel.next(),
            Self::Previous => carousel.previous(),
            Self::GoTo(index) => carousel.go_to(index)?,
            Self::Pause => carousel.pause(),
            Self::Resume => carousel.resume(),
            Self::Swipe { offset, velocity } => {
                carousel.on_gesture(offset, velocity);
            }
            Self::Wait(delta) => {
                carousel.advance_time(delta);
            }
        }
        Ok(())
    }
}

/// Plays `steps` in order. Out-of-range jumps are reported and skipped, the
/// same way an indicator click on a stale index would be ignored.
pub fn run_script<T>(carousel: &mut CarouselController<T>, steps: &[ScriptStep]) -> Result<usize> {
    let mut rejected = 0;
    for step in steps {
        match step.apply(carousel) {
            Ok(()) => {}
            Err(err @ ShowcaseError::IndexOutOfRange { .. }) => {
                warn!(%err, ?step, "skipping scripted step");
                rejected += 1;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(rejected)
}
