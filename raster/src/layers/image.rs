//! Full-block image overlays.
//!
//! Unlike the character, overlays are addressed directly from the position:
//! `address = rel_y * width + rel_x`, so they need no counter and tolerate any
//! scan order.

use super::{Layer, LayerKind, TickContext};
use crate::assets::AssetId;
use crate::color::Color;
use crate::point::Rect;
use crate::snapshot::GameSnapshot;

/// Shared box of the title and game-over screens.
pub const BANNER_BOX: Rect = Rect::new(570, 150, 300, 300);
pub const IDENTIFIER_BOX: Rect = Rect::new(50, 770, 80, 50);

/// One image, its box and when it is visible.
pub struct ImageOverlay {
    asset: AssetId,
    bounds: Rect,
    visible: fn(&GameSnapshot) -> bool,
}

impl ImageOverlay {
    #[must_use]
    pub fn title() -> Self {
        Self {
            asset: AssetId::Title,
            bounds: BANNER_BOX,
            visible: |s| !s.mode.started,
        }
    }

    #[must_use]
    pub fn game_over() -> Self {
        Self {
            asset: AssetId::GameOver,
            bounds: BANNER_BOX,
            visible: |s| s.mode.over,
        }
    }

    #[must_use]
    pub fn identifier() -> Self {
        Self {
            asset: AssetId::Identifier,
            bounds: IDENTIFIER_BOX,
            visible: |_| true,
        }
    }

    fn sample(&self, ctx: &TickContext<'_>) -> Option<Color> {
        if !(self.visible)(ctx.snapshot) {
            return None;
        }

        let address = self.bounds.row_major_address(ctx.point())?;
        ctx.assets.get(self.asset, address).opaque()
    }
}

/// Title and game-over screens share one slot of the rule table.
pub struct Banner {
    images: [ImageOverlay; 2],
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            images: [ImageOverlay::title(), ImageOverlay::game_over()],
        }
    }
}

impl Layer for Banner {
    fn kind(&self) -> LayerKind {
        LayerKind::Banner
    }

    fn render(&self, ctx: &TickContext<'_>) -> Option<Color> {
        self.images.iter().find_map(|image| image.sample(ctx))
    }
}

pub struct Identifier(ImageOverlay);

impl Default for Identifier {
    fn default() -> Self {
        Self(ImageOverlay::identifier())
    }
}

impl Layer for Identifier {
    fn kind(&self) -> LayerKind {
        LayerKind::Identifier
    }

    fn render(&self, ctx: &TickContext<'_>) -> Option<Color> {
        self.0.sample(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetStore, AssetTable};
    use crate::layers::test_support::Fixture;
    use pretty_assertions::assert_eq;

    fn ramp(len: u16) -> AssetTable {
        AssetTable::new((0..len).map(|i| Color::from_packed(i % 0x0FFF + 1)).collect())
    }

    fn fixture() -> Fixture {
        Fixture {
            assets: AssetStore::empty()
                .with_table(AssetId::Title, ramp(60_000))
                .with_table(
                    AssetId::GameOver,
                    AssetTable::new(vec![Color::from_rgb(15, 0, 0); 90_000]),
                )
                .with_table(AssetId::Identifier, ramp(4_000)),
            ..Fixture::default()
        }
    }

    #[test]
    fn title_addresses_row_major() {
        let fixture = fixture();
        let banner = Banner::default();

        assert_eq!(
            banner.render(&fixture.at(570, 150)),
            Some(Color::from_packed(1))
        );
        assert_eq!(
            banner.render(&fixture.at(573, 151)),
            Some(Color::from_packed(300 + 3 + 1))
        );
        // Past the end of a short table: transparent, not a panic.
        assert_eq!(banner.render(&fixture.at(600, 449)), None);
        assert_eq!(banner.render(&fixture.at(569, 150)), None);
    }

    #[test]
    fn title_before_start_game_over_after() {
        let mut fixture = fixture();
        let banner = Banner::default();

        fixture.snapshot.mode.started = true;
        assert_eq!(banner.render(&fixture.at(570, 150)), None);

        fixture.snapshot.mode.over = true;
        assert_eq!(
            banner.render(&fixture.at(570, 150)),
            Some(Color::from_rgb(15, 0, 0))
        );
    }

    #[test]
    fn identifier_is_always_visible() {
        let mut fixture = fixture();
        let identifier = Identifier::default();

        fixture.snapshot.mode.started = true;
        fixture.snapshot.mode.over = true;
        assert_eq!(
            identifier.render(&fixture.at(51, 771)),
            Some(Color::from_packed(80 + 1 + 1))
        );
        assert_eq!(identifier.render(&fixture.at(130, 771)), None);
    }
}
