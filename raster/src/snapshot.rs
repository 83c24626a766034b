//! Per-tick inputs coming from outside the compositor.
//!
//! The scan position is produced by the timing generator and the
//! [`GameSnapshot`] by the game-state machine. Both are sampled once per tick
//! and stay immutable while that tick is evaluated.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// The pixel being evaluated on this tick.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ScanPosition {
    pub x: u32,
    pub y: u32,
}

impl ScanPosition {
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The next position in raster order, wrapping at the end of the line and
    /// at the end of the frame.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.x + 1 < SCREEN_WIDTH {
            Self::new(self.x + 1, self.y)
        } else if self.y + 1 < SCREEN_HEIGHT {
            Self::new(0, self.y + 1)
        } else {
            Self::new(0, 0)
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn point(self) -> Point<i32> {
        // Scan coordinates stay below 2^11.
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Horizontal position and top of the gap of one obstacle.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct PipeDescriptor {
    pub x: u32,
    pub gap_y: u32,
}

/// Which character image the game-state machine asks for.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct SpriteFlags {
    pub dead: bool,
    pub dead_reflected: bool,
    pub wing_down: bool,
}

/// Game mode as seen by the renderer.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ModeFlags {
    pub started: bool,
    pub over: bool,
    pub died_by_obstacle: bool,
}

/// Everything the game-state machine exposes to the renderer for one tick.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub character: Point<u32>,
    pub pipes: [PipeDescriptor; 2],
    pub mode: ModeFlags,
    pub sprite: SpriteFlags,
    pub score: u8,
    pub high_score: u8,
    pub death_count: u32,
    pub accessory_unlocked: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            character: Point::new(300, 350),
            pipes: [
                PipeDescriptor { x: 800, gap_y: 250 },
                PipeDescriptor {
                    x: 1300,
                    gap_y: 350,
                },
            ],
            mode: ModeFlags::default(),
            sprite: SpriteFlags::default(),
            score: 0,
            high_score: 0,
            death_count: 0,
            accessory_unlocked: false,
        }
    }
}

impl GameSnapshot {
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn character_point(&self) -> Point<i32> {
        Point::new(self.character.x as i32, self.character.y as i32)
    }
}
