//! Per-pixel layered compositor for a side-scrolling arcade game.
//!
//! Feed a [`Screen`] one [`ScanPosition`] and one [`GameSnapshot`] per tick
//! and it answers with the color of that pixel. Nothing is buffered between
//! ticks except the animation timers and the sprite address counters.

#[allow(clippy::cast_possible_truncation)]
mod bitwise;

pub mod assets;
pub mod color;
pub mod config;
pub mod frame;

#[allow(clippy::cast_possible_wrap)]
#[allow(clippy::cast_sign_loss)]
pub mod layers;
pub mod point;
pub mod raster_counter;
pub mod scan;

#[allow(clippy::cast_possible_truncation)]
pub mod screen;
pub mod snapshot;
pub mod timers;

pub use assets::{AssetId, AssetStore, AssetTable};
pub use color::Color;
pub use config::TimingConfig;
pub use frame::Frame;
pub use layers::{LayerKind, PixelInfo};
pub use scan::ScanGenerator;
pub use screen::{Screen, ScreenState};
pub use snapshot::{GameSnapshot, ModeFlags, PipeDescriptor, ScanPosition, SpriteFlags};

/// Visible width of the scan grid.
pub const SCREEN_WIDTH: u32 = 1440;

/// Visible height of the scan grid.
pub const SCREEN_HEIGHT: u32 = 900;
