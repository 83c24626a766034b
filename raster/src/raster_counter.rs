use serde::{Deserialize, Serialize};

use crate::point::{Point, Rect};

/// Raster-sequential address generator for a sprite box.
///
/// The counter is zeroed on the tick the scan reaches the box origin and
/// incremented after every tick spent inside the box. The address handed out
/// on a tick is the value before the increment, so for a scan that visits
/// every pixel of the box in raster order it equals `rel_y * width + rel_x`.
///
/// # Precondition
///
/// The caller must present every position inside the box, exactly once, in
/// raster order. Skipped or repeated positions desynchronize the image; this is
/// not detected here.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterCounter {
    value: u32,
}

impl RasterCounter {
    /// Advances for one tick and returns the address to sample, `None` when
    /// `position` is outside `bounds`.
    pub fn advance(&mut self, bounds: &Rect, position: Point<i32>) -> Option<u32> {
        if position == bounds.origin {
            self.value = 0;
        }

        if !bounds.contains(position) {
            return None;
        }

        let address = self.value;
        self.value = self.value.wrapping_add(1);
        Some(address)
    }

    /// Holds the counter at zero, used while the owning layer is disabled.
    pub const fn clear(&mut self) {
        self.value = 0;
    }

    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }
}
