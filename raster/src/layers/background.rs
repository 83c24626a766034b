//! Background - sky gradient, terrain bands, tombstones and score bars.
//!
//! The background is total: it yields a color for every position and is the
//! default of the compositor's rule table.
//!
//! # Bands
//!
//! Bands are picked on the shake-adjusted y:
//!
//! | y            | band         |
//! |--------------|--------------|
//! | `> 759`      | ground       |
//! | `752..=759`  | dirt         |
//! | `746..=751`  | dark grass   |
//! | `721..=745`  | bright grass |
//! | `<= 720`     | sky          |
//!
//! The ground turns red while the post-death flash is on.
//!
//! # Overrides
//!
//! Later entries win: band → clouds → tombstones → high-score bar → score bar.
//! Tombstones shake with the terrain, score bars are HUD and do not.

use super::clouds::Clouds;
use super::{first_match, Layer, Rule, TickContext};
use crate::color::{colors, Color};
use crate::point::{Point, Rect};

const GROUND_Y: i32 = 759;
const DIRT_Y: i32 = 751;
const DARK_GRASS_Y: i32 = 745;
/// Last sky row; the grass starts on the line below.
pub const HORIZON_Y: i32 = 720;

const SKY_TOP: Color = Color::from_rgb(3, 8, 14);
const SKY_BOTTOM: Color = Color::from_rgb(11, 14, 15);
const BRIGHT_GRASS: Color = Color::from_rgb(7, 14, 2);
const DARK_GRASS: Color = Color::from_rgb(3, 10, 1);
const DIRT: Color = Color::from_rgb(9, 6, 2);
const GROUND: Color = Color::from_rgb(13, 11, 6);

const MARKER_X: i32 = 20;
const MARKER_PITCH: i32 = 20;
const MARKER_WIDTH: i32 = 10;
const MARKER_TOP: i32 = 700;
const MARKER_BOTTOM: i32 = 720;

/// Left edge shared by both score bars.
pub const BAR_X: i32 = 500;
/// Horizontal pitch of one score point.
pub const BAR_UNIT: i32 = 12;
/// Filled part of one score point; the rest of the pitch is the gap.
pub const BAR_FILL: i32 = 10;

pub const SCORE_BAR: Rect = Rect::new(BAR_X, 770, SCREEN_BAR_SPAN, 40);
pub const HIGH_SCORE_BAR: Rect = Rect::new(BAR_X, 810, SCREEN_BAR_SPAN, 40);
const SCREEN_BAR_SPAN: i32 = crate::SCREEN_WIDTH as i32 - BAR_X;

pub const SCORE_COLOR: Color = Color::from_rgb(15, 12, 0);
pub const HIGH_SCORE_COLOR: Color = Color::from_rgb(15, 6, 0);

#[derive(Default)]
pub struct Background {
    clouds: Clouds,
}

impl Background {
    /// The background color at the context's position. Never transparent.
    #[must_use]
    pub fn color(&self, ctx: &TickContext<'_>) -> Color {
        let screen = ctx.point();
        let shaken = screen + ctx.timers.shake.offset(ctx.timing);
        let snapshot = ctx.snapshot;
        let started = snapshot.mode.started;

        let rules = [
            Rule::new(
                started && score_bar_hit(&SCORE_BAR, snapshot.score, screen),
                SCORE_COLOR,
            ),
            Rule::new(
                started && score_bar_hit(&HIGH_SCORE_BAR, snapshot.high_score, screen),
                HIGH_SCORE_COLOR,
            ),
            Rule::new(marker_hit(snapshot.death_count, shaken), colors::GRAY),
        ];

        first_match(&rules)
            .or_else(|| self.clouds.render(ctx))
            .unwrap_or_else(|| band_color(shaken.y, ctx.timers.flash.is_on(ctx.timing)))
    }
}

fn band_color(y: i32, flash_on: bool) -> Color {
    let ground = if flash_on { colors::RED } else { GROUND };

    first_match(&[
        Rule::new(y > GROUND_Y, ground),
        Rule::new(y > DIRT_Y, DIRT),
        Rule::new(y > DARK_GRASS_Y, DARK_GRASS),
        Rule::new(y > HORIZON_Y, BRIGHT_GRASS),
    ])
    .unwrap_or_else(|| sky_color(y))
}

/// Linear blend from `SKY_TOP` (y = 0) to `SKY_BOTTOM` (y = 720), truncated.
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_possible_truncation)]
fn sky_color(y: i32) -> Color {
    let span = HORIZON_Y as u32;
    // Shake can push y above the first line.
    let t = y.clamp(0, HORIZON_Y) as u32;

    let blend = |top: u8, bottom: u8| -> u8 {
        ((u32::from(top) * (span - t) + u32::from(bottom) * t) / span) as u8
    };

    Color::from_rgb(
        blend(SKY_TOP.red(), SKY_BOTTOM.red()),
        blend(SKY_TOP.green(), SKY_BOTTOM.green()),
        blend(SKY_TOP.blue(), SKY_BOTTOM.blue()),
    )
}

fn marker_hit(death_count: u32, p: Point<i32>) -> bool {
    if p.y < MARKER_TOP || p.y >= MARKER_BOTTOM || p.x < MARKER_X {
        return false;
    }

    let dx = p.x - MARKER_X;
    let index = dx / MARKER_PITCH;

    i64::from(index) < i64::from(death_count) && dx % MARKER_PITCH < MARKER_WIDTH
}

/// Segmented bar: `score` units of `BAR_UNIT` pixels, each inked on its first
/// `BAR_FILL` pixels.
fn score_bar_hit(bar: &Rect, score: u8, p: Point<i32>) -> bool {
    let Some(rel) = bar.relative(p) else {
        return false;
    };

    rel.x < i32::from(score) * BAR_UNIT && rel.x % BAR_UNIT < BAR_FILL
}
