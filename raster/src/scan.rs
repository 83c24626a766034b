//! Software stand-in for the external timing generator.

use crate::snapshot::ScanPosition;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Number of ticks in one full raster pass.
pub const TICKS_PER_FRAME: usize = (SCREEN_WIDTH * SCREEN_HEIGHT) as usize;

/// Endless raster-order scan: left to right, top to bottom, back to `(0, 0)`
/// after the last pixel.
#[derive(Default, Clone, Copy, Debug)]
pub struct ScanGenerator {
    position: ScanPosition,
}

impl ScanGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: ScanPosition::new(0, 0),
        }
    }
}

impl Iterator for ScanGenerator {
    type Item = ScanPosition;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.position;
        self.position = current.next();
        Some(current)
    }
}
