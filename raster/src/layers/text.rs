//! Stroked text - the "SCORE" and "HIGH SCORE" labels.
//!
//! There is no font table. Every glyph is a handful of stroke predicates on
//! the position inside its cell:
//!
//! ```text
//!   cell: width w (per glyph) × 30 rows, strokes 5 px thick
//!
//!   top     ▀▀▀▀▀   rows  0..5
//!   middle  ▬▬▬▬▬   rows 12..17
//!   bottom  ▄▄▄▄▄   rows 25..30
//!   left    ▌       columns 0..5
//!   right       ▐   columns w-5..w
//! ```
//!
//! `S` and `R` also carry a diagonal: for every row between the two endpoints
//! the stroke centre column is interpolated with truncating integer division
//! and the stroke covers `[cx, cx + 5)`.
//!
//! Glyphs are laid out left to right with 5 px between cells. Each row inks in
//! the color of the score bar it labels.

use super::background::{HIGH_SCORE_COLOR, SCORE_COLOR};
use super::{Layer, LayerKind, TickContext};
use crate::color::Color;
use crate::point::Point;

pub const ROW_HEIGHT: i32 = 30;
pub const STROKE: i32 = 5;
pub const LETTER_SPACING: i32 = 5;

const MIDDLE: i32 = (ROW_HEIGHT - STROKE) / 2;
const HALF: i32 = ROW_HEIGHT / 2;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Glyph {
    S,
    C,
    O,
    R,
    E,
    H,
    I,
    G,
    Space,
}

impl Glyph {
    #[must_use]
    pub const fn width(self) -> i32 {
        match self {
            Self::S | Self::C | Self::E | Self::H | Self::G => 20,
            Self::O | Self::R => 25,
            Self::I | Self::Space => 10,
        }
    }

    /// True when `(lx, ly)`, relative to the cell, is on a stroke.
    #[must_use]
    pub fn ink(self, lx: i32, ly: i32) -> bool {
        let w = self.width();
        if lx < 0 || lx >= w || ly < 0 || ly >= ROW_HEIGHT {
            return false;
        }

        let top = ly < STROKE;
        let bottom = ly >= ROW_HEIGHT - STROKE;
        let middle = (MIDDLE..MIDDLE + STROKE).contains(&ly);
        let left = lx < STROKE;
        let right = lx >= w - STROKE;
        let upper = ly < HALF;

        match self {
            Self::S => {
                top || bottom
                    || diagonal(
                        lx,
                        ly,
                        Point::new(0, STROKE),
                        Point::new(w - STROKE, ROW_HEIGHT - STROKE),
                    )
            }
            Self::C => top || bottom || left,
            Self::O => top || bottom || left || right,
            Self::R => {
                top || middle
                    || left
                    || (right && upper)
                    || diagonal(
                        lx,
                        ly,
                        Point::new(STROKE, MIDDLE + STROKE),
                        Point::new(w - STROKE, ROW_HEIGHT),
                    )
            }
            Self::E => top || middle || bottom || left,
            Self::H => left || right || middle,
            Self::I => {
                let x0 = (w - STROKE) / 2;
                (x0..x0 + STROKE).contains(&lx)
            }
            Self::G => top || bottom || left || (right && !upper) || (middle && lx >= w / 2),
            Self::Space => false,
        }
    }
}

/// Stroke between `from` and `to`, covering rows `[from.y, to.y)`.
fn diagonal(lx: i32, ly: i32, from: Point<i32>, to: Point<i32>) -> bool {
    if ly < from.y || ly >= to.y {
        return false;
    }

    let cx = from.x + (to.x - from.x) * (ly - from.y) / (to.y - from.y);
    lx >= cx && lx < cx + STROKE
}

const SCORE_LABEL: [Glyph; 5] = [Glyph::S, Glyph::C, Glyph::O, Glyph::R, Glyph::E];
const HIGH_SCORE_LABEL: [Glyph; 10] = [
    Glyph::H,
    Glyph::I,
    Glyph::G,
    Glyph::H,
    Glyph::Space,
    Glyph::S,
    Glyph::C,
    Glyph::O,
    Glyph::R,
    Glyph::E,
];

/// One line of text at a fixed origin.
pub struct TextRow {
    kind: LayerKind,
    origin: Point<i32>,
    glyphs: &'static [Glyph],
    color: Color,
}

impl TextRow {
    #[must_use]
    pub const fn score() -> Self {
        Self {
            kind: LayerKind::ScoreText,
            origin: Point::new(355, 770),
            glyphs: &SCORE_LABEL,
            color: SCORE_COLOR,
        }
    }

    #[must_use]
    pub const fn high_score() -> Self {
        Self {
            kind: LayerKind::HighScoreText,
            origin: Point::new(250, 810),
            glyphs: &HIGH_SCORE_LABEL,
            color: HIGH_SCORE_COLOR,
        }
    }

    /// Total width including the spacing between cells.
    #[must_use]
    pub fn width(&self) -> i32 {
        let cells: i32 = self.glyphs.iter().map(|g| g.width()).sum();
        let gaps = i32::try_from(self.glyphs.len().saturating_sub(1)).unwrap_or(0);
        cells + gaps * LETTER_SPACING
    }

    #[must_use]
    pub fn ink(&self, p: Point<i32>) -> bool {
        let rel = p - self.origin;
        if rel.y < 0 || rel.y >= ROW_HEIGHT || rel.x < 0 {
            return false;
        }

        let mut cell_x = 0;
        for glyph in self.glyphs {
            let lx = rel.x - cell_x;
            if lx < glyph.width() {
                return glyph.ink(lx, rel.y);
            }
            cell_x += glyph.width() + LETTER_SPACING;
        }

        false
    }
}

impl Layer for TextRow {
    fn kind(&self) -> LayerKind {
        self.kind
    }

    fn render(&self, ctx: &TickContext<'_>) -> Option<Color> {
        self.ink(ctx.point()).then_some(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::background::BAR_X;
    use pretty_assertions::assert_eq;

    fn bitmap(glyph: Glyph) -> Vec<String> {
        (0..ROW_HEIGHT)
            .step_by(5)
            .map(|ly| {
                (0..glyph.width())
                    .step_by(5)
                    .map(|lx| if glyph.ink(lx, ly) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn rows_end_before_the_bars() {
        let score = TextRow::score();
        let high = TextRow::high_score();

        assert_eq!(score.width(), 130);
        assert_eq!(high.width(), 235);
        assert_eq!(score.origin.x + score.width(), 485);
        assert_eq!(high.origin.x + high.width(), 485);
        assert!(score.origin.x + score.width() < BAR_X);
    }

    #[test]
    fn letter_o_is_a_box() {
        assert_eq!(
            bitmap(Glyph::O),
            vec!["#####", "#...#", "#...#", "#...#", "#...#", "#####"]
        );
    }

    #[test]
    fn letter_e_and_h() {
        assert_eq!(
            bitmap(Glyph::E),
            vec!["####", "#...", "#...", "####", "#...", "####"]
        );
        assert_eq!(
            bitmap(Glyph::H),
            vec!["#..#", "#..#", "#..#", "####", "#..#", "#..#"]
        );
    }

    #[test]
    fn s_diagonal_interpolates_with_truncation() {
        // From (0, 5) to (15, 25): cx = 15 * (ly - 5) / 20.
        for (ly, cx) in [(5, 0), (6, 0), (7, 1), (10, 3), (15, 7), (24, 14)] {
            assert!(Glyph::S.ink(cx, ly), "row {ly} starts at {cx}");
            assert!(Glyph::S.ink(cx + STROKE - 1, ly), "row {ly}");
            if cx > 0 {
                assert!(!Glyph::S.ink(cx - 1, ly), "row {ly} before {cx}");
            }
            if cx + STROKE < Glyph::S.width() {
                assert!(!Glyph::S.ink(cx + STROKE, ly), "row {ly} after stroke");
            }
        }
    }

    #[test]
    fn r_leg_runs_to_the_bottom_right() {
        // From (5, 17) to (20, 30): cx = 5 + 15 * (ly - 17) / 13.
        assert!(Glyph::R.ink(5, 17));
        assert!(Glyph::R.ink(20, 29));
        assert!(!Glyph::R.ink(12, 29));
        // Right stem stops halfway.
        assert!(Glyph::R.ink(24, 10));
        assert!(!Glyph::R.ink(24, 18));
    }

    #[test]
    fn cells_are_separated_by_spacing() {
        let row = TextRow::score();

        // Left stroke of C starts after S (20) and the gap (5).
        assert!(!row.ink(Point::new(355 + 22, 770 + 15)));
        assert!(row.ink(Point::new(355 + 25, 770 + 15)));
        assert!(!row.ink(Point::new(355 + 15, 770 + 30)));
    }

    #[test]
    fn space_is_blank() {
        let row = TextRow::high_score();
        // H I G H = 20 + 10 + 20 + 20 + 4 gaps = 90; the space cell follows.
        for x in 90..100 {
            for y in 0..ROW_HEIGHT {
                assert!(!row.ink(Point::new(250 + x, 810 + y)), "({x}, {y})");
            }
        }
    }
}
