//! Visual layers and the per-tick context they are evaluated against.
//!
//! Every layer is a pure function of one [`TickContext`]: the scan position,
//! the game snapshot, the timer outputs and the raster-counter addresses of
//! the current tick. Stateful parts (timers, raster counters) are advanced by
//! the [`Screen`](crate::screen::Screen) before any layer runs, so layers only
//! ever read them.
//!
//! # Rendering Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Scan position (x, y) + GameSnapshot                            │
//! │         │                                                       │
//! │         ▼                                                       │
//! │  ┌──────────────┐   ┌────────────────┐                          │
//! │  │ TimerBank    │   │ RasterCounters │   (advanced once)        │
//! │  └──────────────┘   └────────────────┘                          │
//! │         │                   │                                   │
//! │         ▼                   ▼                                   │
//! │  ┌──────────────────────────────────────────────────────┐       │
//! │  │ TickContext (read-only for the rest of the tick)     │       │
//! │  └──────────────────────────────────────────────────────┘       │
//! │         │                                                       │
//! │         ▼                                                       │
//! │  text ▸ banner ▸ accessory ▸ identifier ▸ sprite ▸ pipes        │
//! │         │ first layer returning Some(..) wins                   │
//! │         ▼                                                       │
//! │  background (clouds, markers and score bars included)           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Transparency
//!
//! Procedural layers are transparent wherever their geometry does not match.
//! Asset-backed layers are additionally transparent wherever the asset reads
//! black. Returning `None` from [`Layer::render`] lets the next layer through.

use serde::{Deserialize, Serialize};

use crate::assets::AssetStore;
use crate::color::Color;
use crate::config::TimingConfig;
use crate::point::Point;
use crate::snapshot::{GameSnapshot, ScanPosition};
use crate::timers::TimerBank;

pub mod accessory;
pub mod background;
pub mod clouds;
pub mod image;
pub mod pipes;
pub mod sprite;
pub mod text;

/// Which layer produced a pixel.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    HighScoreText,
    ScoreText,
    Banner,
    Accessory,
    Identifier,
    Sprite,
    Pipe,
    Background,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct PixelInfo {
    pub color: Color,
    pub layer: LayerKind,
}

/// Everything a layer may look at while evaluating one tick.
pub struct TickContext<'a> {
    pub position: ScanPosition,
    pub snapshot: &'a GameSnapshot,
    pub timers: &'a TimerBank,
    pub timing: &'a TimingConfig,
    pub assets: &'a AssetStore,
    /// Address produced by the sprite raster counter, `None` outside its box.
    pub sprite_address: Option<u32>,
    /// Address produced by the accessory raster counter, `None` when inactive.
    pub accessory_address: Option<u32>,
}

impl TickContext<'_> {
    #[must_use]
    pub const fn point(&self) -> Point<i32> {
        self.position.point()
    }
}

/// Trait for layers taking part in the compositor's rule table.
pub trait Layer {
    fn kind(&self) -> LayerKind;

    /// Color of this layer at the context's position, `None` when transparent.
    fn render(&self, ctx: &TickContext<'_>) -> Option<Color>;

    fn pixel(&self, ctx: &TickContext<'_>) -> Option<PixelInfo> {
        self.render(ctx).map(|color| PixelInfo {
            color,
            layer: self.kind(),
        })
    }
}

/// One `(predicate, color)` entry of an override table.
#[derive(Copy, Clone, Debug)]
pub struct Rule {
    pub hit: bool,
    pub color: Color,
}

impl Rule {
    #[must_use]
    pub const fn new(hit: bool, color: Color) -> Self {
        Self { hit, color }
    }
}

/// First matching rule, top-down.
#[must_use]
pub fn first_match(rules: &[Rule]) -> Option<Color> {
    rules.iter().find(|rule| rule.hit).map(|rule| rule.color)
}
