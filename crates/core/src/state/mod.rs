use serde::{Deserialize, Serialize};

use crate::{Result, ShowcaseError};

/// Direction of the most recent transition. Presentation layers use it to
/// pick which side the incoming item slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Signed step that moves one item in this direction.
    pub fn delta(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Index, direction and play flag of a carousel over `len` items.
///
/// `index` is always a valid position: construction rejects empty
/// collections and every mutation goes through modular arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
    direction: Direction,
    playing: bool,
}

impl CarouselState {
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(ShowcaseError::invalid_config(
                "carousel requires at least one item",
            ));
        }

        Ok(Self {
            index: 0,
            len,
            direction: Direction::Forward,
            playing: true,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Returns `(index + delta) mod len`, always in `[0, len - 1]`.
    pub fn advance(&self, delta: i64) -> usize {
        let len = self.len as i128;
        (self.index as i128 + delta as i128).rem_euclid(len) as usize
    }

    pub(crate) fn set(&mut self, index: usize, direction: Direction) {
        debug_assert!(index < self.len);
        self.index = index;
        self.direction = direction;
    }

    pub(crate) fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }
}
