//! Clouds - three hand-placed puffs plus three round wisps.
//!
//! Clouds live in a `SCREEN_WIDTH`-wide world that scrolls left: the world
//! column sampled for screen column `x` is `(x + cloud_offset) % SCREEN_WIDTH`.
//! Rows are not scrolled and not shaken.
//!
//! Each cloud is a silhouette made of ten horizontal spans. Inside it:
//!
//! ```text
//!        ▄▄▄████▄▄▄            rows  0..20  bright tier   (+ white highlights)
//!     ▄██████████████▄         rows 20..40  mid tier
//!   ▐██████████████████▌       rows 40..    gray tier
//!    ▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀        last rows    shadow band
//! ```

use super::{first_match, Layer, LayerKind, Rule, TickContext};
use crate::color::{colors, Color};
use crate::point::{Point, Rect};
use crate::SCREEN_WIDTH;

const BRIGHT: Color = Color::from_rgb(14, 15, 15);
const MID: Color = Color::from_rgb(12, 14, 15);
const GRAY: Color = Color::from_rgb(10, 12, 14);
const SHADOW: Color = Color::from_rgb(9, 11, 13);

const BRIGHT_UNTIL: i32 = 20;
const MID_UNTIL: i32 = 40;

/// Horizontal run `[x0, x1)` covering rows `[y0, y1)`, relative to the anchor.
#[derive(Copy, Clone, Debug)]
struct Span {
    y0: i32,
    y1: i32,
    x0: i32,
    x1: i32,
}

const fn span(y0: i32, y1: i32, x0: i32, x1: i32) -> Span {
    Span { y0, y1, x0, x1 }
}

struct CloudShape {
    anchor: Point<i32>,
    spans: [Span; 10],
    highlights: [Rect; 2],
    /// First relative row of the shadow band.
    shadow_from: i32,
}

const CLOUDS: [CloudShape; 3] = [
    CloudShape {
        anchor: Point::new(100, 80),
        spans: [
            span(0, 6, 50, 90),
            span(6, 12, 35, 105),
            span(12, 18, 25, 120),
            span(18, 24, 15, 135),
            span(24, 30, 10, 150),
            span(30, 36, 5, 158),
            span(36, 42, 0, 160),
            span(42, 48, 0, 160),
            span(48, 54, 5, 155),
            span(54, 60, 15, 145),
        ],
        highlights: [Rect::new(45, 8, 25, 6), Rect::new(30, 16, 15, 6)],
        shadow_from: 54,
    },
    CloudShape {
        anchor: Point::new(560, 180),
        spans: [
            span(0, 5, 40, 70),
            span(5, 10, 28, 84),
            span(10, 15, 18, 96),
            span(15, 20, 10, 106),
            span(20, 25, 5, 114),
            span(25, 30, 0, 120),
            span(30, 35, 0, 120),
            span(35, 40, 3, 117),
            span(40, 45, 8, 112),
            span(45, 50, 16, 104),
        ],
        highlights: [Rect::new(36, 5, 20, 5), Rect::new(22, 12, 12, 5)],
        shadow_from: 45,
    },
    CloudShape {
        anchor: Point::new(1150, 60),
        spans: [
            span(0, 6, 70, 120),
            span(6, 12, 50, 140),
            span(12, 18, 35, 160),
            span(18, 24, 25, 180),
            span(24, 30, 15, 195),
            span(30, 36, 8, 205),
            span(36, 42, 0, 210),
            span(42, 48, 0, 210),
            span(48, 54, 6, 200),
            span(54, 60, 20, 185),
        ],
        highlights: [Rect::new(70, 8, 30, 6), Rect::new(45, 16, 20, 6)],
        shadow_from: 54,
    },
];

/// Round wisps: centre and radius.
const PUFFS: [(Point<i32>, i32); 3] = [
    (Point::new(860, 120), 22),
    (Point::new(900, 110), 28),
    (Point::new(945, 125), 20),
];

impl CloudShape {
    fn color_at(&self, world: Point<i32>) -> Option<Color> {
        let rel = world - self.anchor;
        let inside = self
            .spans
            .iter()
            .any(|s| rel.y >= s.y0 && rel.y < s.y1 && rel.x >= s.x0 && rel.x < s.x1);

        if !inside {
            return None;
        }

        first_match(&[
            Rule::new(rel.y >= self.shadow_from, SHADOW),
            Rule::new(self.highlights.iter().any(|h| h.contains(rel)), colors::WHITE),
            Rule::new(rel.y < BRIGHT_UNTIL, BRIGHT),
            Rule::new(rel.y < MID_UNTIL, MID),
            Rule::new(true, GRAY),
        ])
    }
}

fn puff_hit(world: Point<i32>) -> bool {
    PUFFS.iter().any(|(centre, radius)| {
        let d = world - *centre;
        d.x * d.x + d.y * d.y < radius * radius
    })
}

#[derive(Default)]
pub struct Clouds;

impl Clouds {
    /// World position sampled for the scan position, after scrolling.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn world_point(ctx: &TickContext<'_>) -> Point<i32> {
        let x = (ctx.position.x + ctx.timers.cloud_offset()) % SCREEN_WIDTH;
        Point::new(x as i32, ctx.position.y as i32)
    }
}

impl Layer for Clouds {
    fn kind(&self) -> LayerKind {
        LayerKind::Background
    }

    fn render(&self, ctx: &TickContext<'_>) -> Option<Color> {
        let world = Self::world_point(ctx);

        CLOUDS
            .iter()
            .find_map(|cloud| cloud.color_at(world))
            .or_else(|| puff_hit(world).then_some(MID))
    }
}
