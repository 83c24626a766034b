//! Pipes - the two gap-bearing obstacles.
//!
//! ```text
//!   px          px+80
//!   │▓ body      ▓│
//!   │▓           ▓│
//!   ███████████████  accent line, 20 px above the gap
//!   │▓           ▓│
//!   ███████████████  gap mouth band (last rows above the gap)
//!                     ─┐
//!        gap           │ 250 px
//!                     ─┘
//!   ███████████████  gap mouth band (first rows below the gap)
//!   │▓           ▓│
//!   ███████████████  accent line, 20 px below the gap
//!   │▓           ▓│
//!   ─────────────────  ground line (y = 721), the pipe stops above it
//! ```
//!
//! The body is shaded in six vertical sub-bands keyed on the distance from
//! the pipe's left edge.

use super::{first_match, Layer, LayerKind, Rule, TickContext};
use crate::color::{colors, Color};
use crate::point::Point;
use crate::snapshot::PipeDescriptor;

pub const PIPE_WIDTH: i32 = 80;
pub const GAP_HEIGHT: i32 = 250;
/// First row that belongs to the ground: pipes end on the row above.
pub const GROUND_LINE: i32 = 721;

const BORDER: i32 = 3;
const ACCENT_DISTANCE: i32 = 20;

/// `(upper bound of dx, color)`, left to right.
const BODY_BANDS: [(i32, Color); 6] = [
    (10, Color::from_rgb(2, 8, 2)),
    (20, Color::from_rgb(4, 11, 3)),
    (35, Color::from_rgb(6, 13, 4)),
    (50, Color::from_rgb(8, 15, 5)),
    (65, Color::from_rgb(5, 12, 4)),
    (PIPE_WIDTH, Color::from_rgb(3, 9, 2)),
];

impl PipeDescriptor {
    #[allow(clippy::cast_possible_wrap)]
    const fn left(&self) -> i32 {
        self.x as i32
    }

    #[allow(clippy::cast_possible_wrap)]
    const fn gap_top(&self) -> i32 {
        self.gap_y as i32
    }

    /// True when `p` is part of the pipe body (not the gap, not below ground).
    #[must_use]
    pub const fn contains(&self, p: Point<i32>) -> bool {
        let in_column = p.x >= self.left() && p.x < self.left() + PIPE_WIDTH;
        let above_gap = p.y < self.gap_top();
        let below_gap = p.y >= self.gap_top() + GAP_HEIGHT && p.y < GROUND_LINE;

        in_column && (above_gap || below_gap)
    }

    fn color_at(&self, p: Point<i32>) -> Option<Color> {
        if !self.contains(p) {
            return None;
        }

        let dx = p.x - self.left();
        let top = self.gap_top();
        let bottom = top + GAP_HEIGHT;
        let in_rows = |from: i32, to: i32| p.y >= from && p.y < to;

        let border = dx < BORDER
            || dx >= PIPE_WIDTH - BORDER
            || in_rows(top - BORDER, top)
            || in_rows(bottom, bottom + BORDER)
            || in_rows(top - ACCENT_DISTANCE - BORDER, top - ACCENT_DISTANCE)
            || in_rows(bottom + ACCENT_DISTANCE, bottom + ACCENT_DISTANCE + BORDER);

        let body = BODY_BANDS
            .iter()
            .find(|(limit, _)| dx < *limit)
            .map_or(BODY_BANDS[5].1, |(_, color)| *color);

        first_match(&[Rule::new(border, colors::BLACK), Rule::new(true, body)])
    }
}

#[derive(Default)]
pub struct Pipes;

impl Layer for Pipes {
    fn kind(&self) -> LayerKind {
        LayerKind::Pipe
    }

    /// The first pipe wins where both would match.
    fn render(&self, ctx: &TickContext<'_>) -> Option<Color> {
        let p = ctx.point();
        ctx.snapshot.pipes.iter().find_map(|pipe| pipe.color_at(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::test_support::Fixture;
    use pretty_assertions::assert_eq;

    fn fixture() -> Fixture {
        let mut fixture = Fixture::default();
        fixture.snapshot.pipes = [
            PipeDescriptor { x: 400, gap_y: 300 },
            PipeDescriptor { x: 900, gap_y: 200 },
        ];
        fixture
    }

    #[test]
    fn column_above_and_below_gap() {
        let pipe = PipeDescriptor { x: 400, gap_y: 300 };

        assert!(pipe.contains(Point::new(400, 0)));
        assert!(pipe.contains(Point::new(479, 299)));
        assert!(!pipe.contains(Point::new(480, 100)));
        assert!(!pipe.contains(Point::new(440, 300)));
        assert!(!pipe.contains(Point::new(440, 549)));
        assert!(pipe.contains(Point::new(440, 550)));
        assert!(pipe.contains(Point::new(440, 720)));
        assert!(!pipe.contains(Point::new(440, 721)));
    }

    #[test]
    fn gap_mouth_band_is_black() {
        let fixture = fixture();
        let pipes = Pipes;

        for y in 297..300 {
            assert_eq!(pipes.render(&fixture.at(440, y)), Some(colors::BLACK));
        }
        for y in 550..553 {
            assert_eq!(pipes.render(&fixture.at(440, y)), Some(colors::BLACK));
        }
        assert_ne!(pipes.render(&fixture.at(440, 296)), Some(colors::BLACK));
    }

    #[test]
    fn accent_lines_and_side_borders() {
        let fixture = fixture();
        let pipes = Pipes;

        assert_eq!(pipes.render(&fixture.at(440, 278)), Some(colors::BLACK));
        assert_eq!(pipes.render(&fixture.at(440, 571)), Some(colors::BLACK));
        assert_eq!(pipes.render(&fixture.at(400, 100)), Some(colors::BLACK));
        assert_eq!(pipes.render(&fixture.at(479, 100)), Some(colors::BLACK));
    }

    #[test]
    fn body_gradient_by_column() {
        let fixture = fixture();
        let pipes = Pipes;

        let expected = [
            (405, BODY_BANDS[0].1),
            (415, BODY_BANDS[1].1),
            (430, BODY_BANDS[2].1),
            (445, BODY_BANDS[3].1),
            (460, BODY_BANDS[4].1),
            (470, BODY_BANDS[5].1),
        ];
        for (x, color) in expected {
            assert_eq!(pipes.render(&fixture.at(x, 100)), Some(color), "x = {x}");
        }
    }

    #[test]
    fn second_pipe_and_empty_space() {
        let fixture = fixture();
        let pipes = Pipes;

        assert_eq!(pipes.render(&fixture.at(940, 100)), Some(BODY_BANDS[3].1));
        assert_eq!(pipes.render(&fixture.at(940, 300)), None);
        assert_eq!(pipes.render(&fixture.at(600, 100)), None);
    }
}
