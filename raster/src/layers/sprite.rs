//! Character sprite - 200×200 box anchored at the character position.
//!
//! The image is addressed by the sprite [`RasterCounter`](crate::raster_counter::RasterCounter),
//! not by the relative position: the counter restarts at the box origin and
//! steps once per in-box tick. The [`Screen`](crate::screen::Screen) advances
//! it and passes the address in [`TickContext::sprite_address`].
//!
//! # Variant selection
//!
//! | Priority | Condition                       | Asset                  |
//! |----------|---------------------------------|------------------------|
//! | 1        | `dead_reflected`                | `BirdDeadReflected`    |
//! | 2        | `dead`                          | `BirdDead`             |
//! | 3        | `over && died_by_obstacle`      | `BirdRotated`          |
//! | 4        | `wing_down`                     | `BirdWingDown`         |
//! | 5        | otherwise                       | `BirdIdle`             |

use super::{Layer, LayerKind, TickContext};
use crate::assets::AssetId;
use crate::color::Color;
use crate::point::Rect;
use crate::snapshot::GameSnapshot;

pub const SPRITE_SIZE: i32 = 200;

/// Box the character image is drawn in.
#[must_use]
pub const fn sprite_bounds(snapshot: &GameSnapshot) -> Rect {
    let origin = snapshot.character_point();
    Rect::new(origin.x, origin.y, SPRITE_SIZE, SPRITE_SIZE)
}

#[must_use]
pub const fn variant(snapshot: &GameSnapshot) -> AssetId {
    let sprite = &snapshot.sprite;
    let mode = &snapshot.mode;

    if sprite.dead_reflected {
        AssetId::BirdDeadReflected
    } else if sprite.dead {
        AssetId::BirdDead
    } else if mode.over && mode.died_by_obstacle {
        AssetId::BirdRotated
    } else if sprite.wing_down {
        AssetId::BirdWingDown
    } else {
        AssetId::BirdIdle
    }
}

#[derive(Default)]
pub struct Sprite;

impl Layer for Sprite {
    fn kind(&self) -> LayerKind {
        LayerKind::Sprite
    }

    fn render(&self, ctx: &TickContext<'_>) -> Option<Color> {
        let address = ctx.sprite_address?;
        ctx.assets.get(variant(ctx.snapshot), address).opaque()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetStore, AssetTable};
    use crate::layers::test_support::Fixture;
    use pretty_assertions::assert_eq;

    #[test]
    fn variant_priority() {
        let mut snapshot = GameSnapshot::default();
        assert_eq!(variant(&snapshot), AssetId::BirdIdle);

        snapshot.sprite.wing_down = true;
        assert_eq!(variant(&snapshot), AssetId::BirdWingDown);

        snapshot.mode.over = true;
        assert_eq!(variant(&snapshot), AssetId::BirdWingDown);
        snapshot.mode.died_by_obstacle = true;
        assert_eq!(variant(&snapshot), AssetId::BirdRotated);

        snapshot.sprite.dead = true;
        assert_eq!(variant(&snapshot), AssetId::BirdDead);

        snapshot.sprite.dead_reflected = true;
        assert_eq!(variant(&snapshot), AssetId::BirdDeadReflected);
    }

    #[test]
    fn samples_selected_variant_at_address() {
        let red = Color::from_rgb(15, 0, 0);
        let blue = Color::from_rgb(0, 0, 15);
        let mut fixture = Fixture {
            assets: AssetStore::empty()
                .with_table(AssetId::BirdIdle, AssetTable::new(vec![red, Color::TRANSPARENT]))
                .with_table(AssetId::BirdDead, AssetTable::new(vec![blue])),
            ..Fixture::default()
        };
        let sprite = Sprite;

        let mut ctx = fixture.at(0, 0);
        ctx.sprite_address = Some(0);
        assert_eq!(sprite.render(&ctx), Some(red));

        ctx.sprite_address = Some(1);
        assert_eq!(sprite.render(&ctx), None);

        ctx.sprite_address = None;
        assert_eq!(sprite.render(&ctx), None);

        fixture.snapshot.sprite.dead = true;
        let mut ctx = fixture.at(0, 0);
        ctx.sprite_address = Some(0);
        assert_eq!(sprite.render(&ctx), Some(blue));
    }

    #[test]
    fn bounds_follow_character() {
        let mut snapshot = GameSnapshot::default();
        snapshot.character.x = 12;
        snapshot.character.y = 34;

        assert_eq!(sprite_bounds(&snapshot), Rect::new(12, 34, 200, 200));
    }
}
