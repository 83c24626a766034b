use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::bitwise::Bits;

/// A 12-bit color, three 4-bit channels packed as `0xRGB`.
///
/// ```text
/// bit   11 .. 8   7 .. 4   3 .. 0
///       red       green    blue
/// ```
///
/// Constructors mask every channel to 4 bits, so a `Color` can never carry a
/// channel outside `0..=15`.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Color(u16);

impl Color {
    /// Black doubles as the "not drawn" key for every asset-backed layer.
    pub const TRANSPARENT: Self = Self(0);

    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        let red = (red & 0xF) as u16;
        let green = (green & 0xF) as u16;
        let blue = (blue & 0xF) as u16;

        Self((red << 8) | (green << 4) | blue)
    }

    /// Builds a color from a packed `0xRGB` word; bits above 11 are dropped.
    #[must_use]
    pub const fn from_packed(value: u16) -> Self {
        Self(value & 0x0FFF)
    }

    #[must_use]
    pub const fn packed(self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn red(self) -> u8 {
        nibble(self.0.get_bits(8..=11))
    }

    #[must_use]
    pub fn green(self) -> u8 {
        nibble(self.0.get_bits(4..=7))
    }

    #[must_use]
    pub fn blue(self) -> u8 {
        nibble(self.0.get_bits(0..=3))
    }

    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.0 == Self::TRANSPARENT.0
    }

    /// `None` for the transparency key, the color otherwise.
    #[must_use]
    pub const fn opaque(self) -> Option<Self> {
        if self.is_transparent() {
            None
        } else {
            Some(self)
        }
    }

    /// Expands every channel to 8 bits by replicating the nibble (`0xF` -> `0xFF`).
    #[must_use]
    pub fn to_rgb8(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()].map(|c| (c << 4) | c)
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn nibble(value: u16) -> u8 {
    (value & 0xF) as u8
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:03x}", self.0)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

pub mod colors {
    use super::Color;

    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(15, 15, 15);
    pub const RED: Color = Color::from_rgb(15, 0, 0);
    pub const GRAY: Color = Color::from_rgb(8, 8, 8);
}
