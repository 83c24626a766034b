use crate::color::{colors, Color};
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

const WIDTH: usize = SCREEN_WIDTH as usize;
const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// One finished raster pass, kept for display only.
///
/// The compositor writes into it but never reads from it.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: Vec<Color>,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            pixels: vec![colors::BLACK; WIDTH * HEIGHT],
        }
    }
}

impl Frame {
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        self[(x, y)] = color;
    }

    /// Row-major 8-bit RGB triples, for handing to an image or texture.
    #[must_use]
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|color| color.to_rgb8()).collect()
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .finish_non_exhaustive()
    }
}

impl std::ops::Index<(usize, usize)> for Frame {
    type Output = Color;

    fn index(&self, (x, y): (usize, usize)) -> &Color {
        assert!(x < WIDTH && y < HEIGHT);
        &self.pixels[y * WIDTH + x]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Frame {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        assert!(x < WIDTH && y < HEIGHT);
        &mut self.pixels[y * WIDTH + x]
    }
}
