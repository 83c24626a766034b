//! The compositor - one output color per scan tick.
//!
//! [`Screen::step`] is the only place where state changes. Per tick it:
//!
//! 1. advances the [`TimerBank`] once,
//! 2. advances the sprite and accessory [`RasterCounter`]s once,
//! 3. builds a read-only [`TickContext`],
//! 4. walks the layers in priority order and returns the first hit, falling
//!    back to the background, which always has a color.
//!
//! | Priority | Layer                        |
//! |----------|------------------------------|
//! | 1        | "HIGH SCORE" text            |
//! | 2        | "SCORE" text                 |
//! | 3        | title / game-over image      |
//! | 4        | accessory                    |
//! | 5        | identifier image             |
//! | 6        | character sprite             |
//! | 7        | pipes                        |
//! | 8        | background                   |

use serde::{Deserialize, Serialize};

use crate::assets::AssetStore;
use crate::config::TimingConfig;
use crate::frame::Frame;
use crate::layers::accessory::{accessory_bounds, accessory_enabled, Accessory};
use crate::layers::background::Background;
use crate::layers::image::{Banner, Identifier};
use crate::layers::pipes::Pipes;
use crate::layers::sprite::{sprite_bounds, Sprite};
use crate::layers::text::TextRow;
use crate::layers::{Layer, LayerKind, PixelInfo, TickContext};
use crate::raster_counter::RasterCounter;
use crate::scan::{ScanGenerator, TICKS_PER_FRAME};
use crate::snapshot::{GameSnapshot, ScanPosition};
use crate::timers::TimerBank;

/// Everything [`Screen::step`] mutates. Saving and restoring it reproduces
/// the animation exactly.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenState {
    pub timers: TimerBank,
    pub sprite_counter: RasterCounter,
    pub accessory_counter: RasterCounter,
}

pub struct Screen {
    timing: TimingConfig,
    assets: AssetStore,
    state: ScreenState,

    high_score_text: TextRow,
    score_text: TextRow,
    banner: Banner,
    accessory: Accessory,
    identifier: Identifier,
    sprite: Sprite,
    pipes: Pipes,
    background: Background,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(AssetStore::default(), TimingConfig::default())
    }
}

impl Screen {
    #[must_use]
    pub fn new(assets: AssetStore, timing: TimingConfig) -> Self {
        Self {
            timing,
            assets,
            state: ScreenState::default(),
            high_score_text: TextRow::high_score(),
            score_text: TextRow::score(),
            banner: Banner::default(),
            accessory: Accessory,
            identifier: Identifier::default(),
            sprite: Sprite,
            pipes: Pipes,
            background: Background::default(),
        }
    }

    /// Evaluates one scan tick.
    ///
    /// The sprite and accessory images are addressed by raster counters, so
    /// the caller must present every position of a frame exactly once and in
    /// raster order for them to come out right. Other layers do not care.
    pub fn step(&mut self, position: ScanPosition, snapshot: &GameSnapshot) -> PixelInfo {
        let point = position.point();

        self.state.timers.tick(snapshot, &self.timing);

        let sprite_address = self
            .state
            .sprite_counter
            .advance(&sprite_bounds(snapshot), point);

        let accessory_address = if accessory_enabled(snapshot) {
            self.state
                .accessory_counter
                .advance(&accessory_bounds(snapshot), point)
        } else {
            self.state.accessory_counter.clear();
            None
        };

        let ctx = TickContext {
            position,
            snapshot,
            timers: &self.state.timers,
            timing: &self.timing,
            assets: &self.assets,
            sprite_address,
            accessory_address,
        };

        self.overlays()
            .into_iter()
            .find_map(|layer| layer.pixel(&ctx))
            .unwrap_or_else(|| PixelInfo {
                color: self.background.color(&ctx),
                layer: LayerKind::Background,
            })
    }

    /// Layers above the background, highest priority first.
    fn overlays(&self) -> [&dyn Layer; 7] {
        [
            &self.high_score_text,
            &self.score_text,
            &self.banner,
            &self.accessory,
            &self.identifier,
            &self.sprite,
            &self.pipes,
        ]
    }

    /// Runs one full raster pass against a fixed snapshot.
    ///
    /// Scanning always starts at `(0, 0)`, whatever position the external
    /// timing generator was last at.
    pub fn render_frame(&mut self, snapshot: &GameSnapshot, frame: &mut Frame) {
        for position in ScanGenerator::new().take(TICKS_PER_FRAME) {
            let pixel = self.step(position, snapshot);
            frame.set_pixel(position.x as usize, position.y as usize, pixel.color);
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn restore(&mut self, state: ScreenState) {
        tracing::debug!(?state, "restoring screen state");
        self.state = state;
    }

    #[must_use]
    pub const fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    pub const fn set_timing(&mut self, timing: TimingConfig) {
        self.timing = timing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetId, AssetTable};
    use crate::color::{colors, Color};
    use crate::point::Point;
    use crate::snapshot::PipeDescriptor;
    use pretty_assertions::assert_eq;

    fn solid(color: Color, len: usize) -> AssetTable {
        AssetTable::new(vec![color; len])
    }

    const SPRITE: Color = Color::from_rgb(1, 2, 3);
    const HAT: Color = Color::from_rgb(4, 5, 6);
    const BANNER: Color = Color::from_rgb(7, 8, 9);

    fn screen() -> Screen {
        let assets = AssetStore::empty()
            .with_table(AssetId::BirdIdle, solid(SPRITE, 40_000))
            .with_table(AssetId::Accessory, solid(HAT, 2_500))
            .with_table(AssetId::Title, solid(BANNER, 90_000))
            .with_table(AssetId::GameOver, solid(BANNER, 90_000));

        Screen::new(assets, TimingConfig::default())
    }

    /// Character box over the title box and over the first pipe.
    fn crowded() -> GameSnapshot {
        GameSnapshot {
            character: Point::new(600, 100),
            pipes: [
                PipeDescriptor { x: 640, gap_y: 500 },
                PipeDescriptor { x: 1300, gap_y: 300 },
            ],
            ..GameSnapshot::default()
        }
    }

    /// Steps every position of a frame and keeps the pixels matching `keep`.
    fn scan(
        screen: &mut Screen,
        snapshot: &GameSnapshot,
        keep: impl Fn(ScanPosition) -> bool,
    ) -> Vec<(ScanPosition, PixelInfo)> {
        ScanGenerator::new()
            .take(TICKS_PER_FRAME)
            .filter_map(|position| {
                let pixel = screen.step(position, snapshot);
                keep(position).then_some((position, pixel))
            })
            .collect()
    }

    fn layer_at(
        pixels: &[(ScanPosition, PixelInfo)],
        x: u32,
        y: u32,
    ) -> Option<LayerKind> {
        pixels
            .iter()
            .find(|(p, _)| *p == ScanPosition::new(x, y))
            .map(|(_, pixel)| pixel.layer)
    }

    #[test]
    fn banner_beats_sprite_beats_pipe() {
        let mut screen = screen();
        let snapshot = crowded();
        let pixels = scan(&mut screen, &snapshot, |p| p.y < 460);

        // Inside title box and sprite box.
        assert_eq!(layer_at(&pixels, 650, 200), Some(LayerKind::Banner));
        // Sprite box only, over the pipe column.
        assert_eq!(layer_at(&pixels, 650, 120), Some(LayerKind::Sprite));
        // Pipe only.
        assert_eq!(layer_at(&pixels, 660, 455), Some(LayerKind::Pipe));
        // Nothing but sky.
        assert_eq!(layer_at(&pixels, 100, 10), Some(LayerKind::Background));
    }

    #[test]
    fn accessory_beats_sprite_once_unlocked() {
        let mut screen = screen();
        let mut snapshot = crowded();
        snapshot.mode.started = true;
        snapshot.accessory_unlocked = true;

        let pixels = scan(&mut screen, &snapshot, |p| p.y < 300);

        assert_eq!(layer_at(&pixels, 675, 120), Some(LayerKind::Accessory));
        assert_eq!(layer_at(&pixels, 724, 169), Some(LayerKind::Accessory));
        assert_eq!(layer_at(&pixels, 725, 169), Some(LayerKind::Sprite));
        assert_eq!(layer_at(&pixels, 674, 120), Some(LayerKind::Sprite));
    }

    #[test]
    fn accessory_counter_held_at_zero_while_disabled() {
        let mut screen = screen();
        let snapshot = crowded();

        let _ = scan(&mut screen, &snapshot, |_| false);
        assert_eq!(screen.state().accessory_counter.value(), 0);
        assert_eq!(screen.state().sprite_counter.value(), 40_000);
    }

    #[test]
    fn text_is_drawn_before_start() {
        let mut screen = screen();
        let snapshot = GameSnapshot::default();

        let pixels = scan(&mut screen, &snapshot, |p| p.y >= 770);
        let score = layer_at(&pixels, 355, 770);
        let high = layer_at(&pixels, 250, 810);

        assert_eq!(score, Some(LayerKind::ScoreText));
        assert_eq!(high, Some(LayerKind::HighScoreText));
    }

    #[test]
    fn render_frame_fills_every_pixel() {
        let mut screen = screen();
        let mut snapshot = crowded();
        snapshot.mode.started = true;
        let mut frame = Frame::default();

        screen.render_frame(&snapshot, &mut frame);

        assert_eq!(frame[(650, 120)], SPRITE);
        assert_eq!(frame[(650, 200)], SPRITE);
        assert_eq!(frame.to_rgb8().len(), TICKS_PER_FRAME * 3);

        let ground = self::screen().step(ScanPosition::new(1439, 899), &snapshot);
        assert_eq!(ground.layer, LayerKind::Background);
        assert_eq!(frame[(1439, 899)], ground.color);
        assert_ne!(ground.color, colors::BLACK);
    }

    #[test]
    fn restore_replays_the_same_pixels() {
        let mut screen = screen();
        let mut snapshot = crowded();
        snapshot.mode.over = true;

        for position in ScanGenerator::new().take(5_000) {
            let _ = screen.step(position, &snapshot);
        }
        let saved = *screen.state();

        let first: Vec<_> = ScanGenerator::new()
            .take(2_000)
            .map(|p| screen.step(p, &snapshot))
            .collect();

        screen.restore(saved);
        let second: Vec<_> = ScanGenerator::new()
            .take(2_000)
            .map(|p| screen.step(p, &snapshot))
            .collect();

        assert_eq!(first, second);
    }
}
