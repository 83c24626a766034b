use super::{Layer, LayerKind, TickContext};
use crate::assets::AssetId;
use crate::color::Color;
use crate::point::Rect;
use crate::snapshot::GameSnapshot;

/// Offset of the accessory box inside the sprite box.
const INSET_X: i32 = 75;
const INSET_Y: i32 = 20;
pub const ACCESSORY_SIZE: i32 = 50;

/// The 50×50 inset `(+75, +20)..(+125, +70)` of the character box.
#[must_use]
pub const fn accessory_bounds(snapshot: &GameSnapshot) -> Rect {
    let origin = snapshot.character_point();
    Rect::new(
        origin.x + INSET_X,
        origin.y + INSET_Y,
        ACCESSORY_SIZE,
        ACCESSORY_SIZE,
    )
}

/// Drawn only once unlocked and never on the game-over screen.
#[must_use]
pub const fn accessory_enabled(snapshot: &GameSnapshot) -> bool {
    snapshot.accessory_unlocked && !snapshot.mode.over
}

/// Small overlay worn by the character, addressed by its own raster counter.
#[derive(Default)]
pub struct Accessory;

impl Layer for Accessory {
    fn kind(&self) -> LayerKind {
        LayerKind::Accessory
    }

    fn render(&self, ctx: &TickContext<'_>) -> Option<Color> {
        if !accessory_enabled(ctx.snapshot) {
            return None;
        }

        let address = ctx.accessory_address?;
        ctx.assets.get(AssetId::Accessory, address).opaque()
    }
}
