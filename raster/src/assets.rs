//! Read-only image stores backing the sprite and overlay layers.
//!
//! Every asset is a flat, row-major list of 12-bit colors. Layers never see
//! the storage: they ask the [`AssetStore`] for `(AssetId, address)` and get a
//! [`Color`] back, where black means "not drawn".
//!
//! # File format
//!
//! Assets load from `$readmemh`-style text files, one color per line:
//!
//! ```text
//! // bird, idle
//! 000
//! 000
//! fc0
//! ```
//!
//! Blank lines and `//` comments are skipped. Address directives (`@10`) are
//! not supported: tables are always dense and start at address 0.

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::color::Color;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum AssetId {
    BirdIdle,
    BirdWingDown,
    BirdRotated,
    BirdDead,
    BirdDeadReflected,
    Accessory,
    Title,
    GameOver,
    Identifier,
}

impl AssetId {
    pub const ALL: [Self; 9] = [
        Self::BirdIdle,
        Self::BirdWingDown,
        Self::BirdRotated,
        Self::BirdDead,
        Self::BirdDeadReflected,
        Self::Accessory,
        Self::Title,
        Self::GameOver,
        Self::Identifier,
    ];

    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::BirdIdle => "bird_idle.mem",
            Self::BirdWingDown => "bird_wing_down.mem",
            Self::BirdRotated => "bird_rotated.mem",
            Self::BirdDead => "bird_dead.mem",
            Self::BirdDeadReflected => "bird_dead_reflected.mem",
            Self::Accessory => "accessory.mem",
            Self::Title => "title.mem",
            Self::GameOver => "game_over.mem",
            Self::Identifier => "identifier.mem",
        }
    }

    /// Width and height in pixels of the box the asset is drawn in.
    #[must_use]
    pub const fn size(self) -> (u32, u32) {
        match self {
            Self::BirdIdle
            | Self::BirdWingDown
            | Self::BirdRotated
            | Self::BirdDead
            | Self::BirdDeadReflected => (200, 200),
            Self::Accessory => (50, 50),
            Self::Title | Self::GameOver => (300, 300),
            Self::Identifier => (80, 50),
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// One asset: address → color.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetTable {
    colors: Vec<Color>,
}

impl AssetTable {
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Parses a `$readmemh`-style listing, see the [module docs](self).
    pub fn parse_hex(text: &str) -> Result<Self, Box<dyn Error>> {
        let mut colors = Vec::new();

        for (line_idx, line) in text.lines().enumerate() {
            let word = line
                .split("//")
                .next()
                .map(str::trim)
                .unwrap_or_default();

            if word.is_empty() {
                continue;
            }

            if word.starts_with('@') {
                let line = line_idx + 1;
                return Err(format!("line {line}: address directives are not supported").into());
            }

            let value = u16::from_str_radix(word, 16)
                .map_err(|e| format!("line {}: `{word}` is not a hex color: {e}", line_idx + 1))?;

            if value > 0x0FFF {
                return Err(format!("line {}: `{word}` does not fit 12 bits", line_idx + 1).into());
            }

            colors.push(Color::from_packed(value));
        }

        Ok(Self { colors })
    }

    /// Color at `address`; out-of-range addresses read as transparent.
    #[must_use]
    pub fn get(&self, address: u32) -> Color {
        usize::try_from(address)
            .ok()
            .and_then(|idx| self.colors.get(idx))
            .copied()
            .unwrap_or(Color::TRANSPARENT)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Stand-in artwork used when no file is available for `id`.
    ///
    /// Deterministic, so frames rendered without assets are still stable.
    #[must_use]
    pub fn placeholder(id: AssetId) -> Self {
        let (width, height) = id.size();
        let colors = (0..height)
            .flat_map(|y| (0..width).map(move |x| placeholder_pixel(id, x, y, width, height)))
            .collect();

        Self { colors }
    }
}

#[allow(clippy::cast_possible_wrap)]
fn placeholder_pixel(id: AssetId, x: u32, y: u32, width: u32, height: u32) -> Color {
    let (cx, cy) = ((width / 2) as i32, (height / 2) as i32);
    let (dx, dy) = (x as i32 - cx, y as i32 - cy);
    let in_disc = |r: i32| dx * dx + dy * dy < r * r;
    let border = x < 6 || y < 6 || x >= width - 6 || y >= height - 6;

    match id {
        AssetId::BirdIdle | AssetId::BirdWingDown | AssetId::BirdRotated => {
            let eye = (dx - 30) * (dx - 30) + (dy + 20) * (dy + 20) < 12 * 12;
            let wing = match id {
                AssetId::BirdWingDown => dx > -50 && dx < 0 && dy > 10 && dy < 40,
                _ => dx > -50 && dx < 0 && dy > -30 && dy < 0,
            };
            if eye {
                Color::from_rgb(15, 15, 15)
            } else if wing && in_disc(80) {
                Color::from_rgb(15, 8, 0)
            } else if in_disc(70) {
                Color::from_rgb(15, 12, 1)
            } else {
                Color::TRANSPARENT
            }
        }
        AssetId::BirdDead | AssetId::BirdDeadReflected => {
            let cross = (dx - dy).abs() < 8 || (dx + dy).abs() < 8;
            let mirrored = matches!(id, AssetId::BirdDeadReflected);
            if in_disc(70) && cross {
                Color::from_rgb(15, 0, 0)
            } else if in_disc(70) {
                if mirrored {
                    Color::from_rgb(10, 10, 12)
                } else {
                    Color::from_rgb(12, 10, 2)
                }
            } else {
                Color::TRANSPARENT
            }
        }
        AssetId::Accessory => {
            if y < 35 && x >= 10 && x < 40 {
                Color::from_rgb(2, 2, 3)
            } else if y >= 35 {
                Color::from_rgb(3, 3, 5)
            } else {
                Color::TRANSPARENT
            }
        }
        AssetId::Title => {
            if border {
                Color::from_rgb(15, 12, 0)
            } else if (y / 20) % 2 == 0 {
                Color::from_rgb(1, 6, 2)
            } else {
                Color::TRANSPARENT
            }
        }
        AssetId::GameOver => {
            if border || (dx.abs() - dy.abs()).abs() < 10 {
                Color::from_rgb(13, 1, 1)
            } else {
                Color::TRANSPARENT
            }
        }
        AssetId::Identifier => {
            if ((x / 10) + (y / 10)) % 2 == 0 {
                Color::from_rgb(15, 15, 15)
            } else {
                Color::from_rgb(1, 1, 1)
            }
        }
    }
}

/// All assets the compositor can sample, loaded once at start-up.
#[derive(Clone, Debug)]
pub struct AssetStore {
    tables: Vec<AssetTable>,
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::placeholders()
    }
}

impl AssetStore {
    /// Every asset is a placeholder.
    #[must_use]
    pub fn placeholders() -> Self {
        Self {
            tables: AssetId::ALL.iter().map(|id| AssetTable::placeholder(*id)).collect(),
        }
    }

    /// Every asset is empty, so every lookup is transparent.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tables: vec![AssetTable::default(); AssetId::ALL.len()],
        }
    }

    /// Loads every asset from `dir`, see [`AssetId::file_name`].
    ///
    /// Missing files fall back to placeholders, malformed files are an error.
    pub fn load_dir(dir: &Path) -> Result<Self, Box<dyn Error>> {
        let mut store = Self::placeholders();

        for id in AssetId::ALL {
            let path = dir.join(id.file_name());
            if !path.exists() {
                tracing::warn!(path = %path.display(), "asset missing, using placeholder");
                continue;
            }

            let text = fs::read_to_string(&path)?;
            let table = AssetTable::parse_hex(&text)
                .map_err(|e| format!("{}: {e}", path.display()))?;

            let (width, height) = id.size();
            let expected = (width * height) as usize;
            if table.len() != expected {
                tracing::warn!(
                    path = %path.display(),
                    entries = table.len(),
                    expected,
                    "asset size mismatch, missing entries read as transparent"
                );
            }

            tracing::info!(path = %path.display(), entries = table.len(), "asset loaded");
            store = store.with_table(id, table);
        }

        Ok(store)
    }

    #[must_use]
    pub fn with_table(mut self, id: AssetId, table: AssetTable) -> Self {
        self.tables[id.index()] = table;
        self
    }

    #[must_use]
    pub fn table(&self, id: AssetId) -> &AssetTable {
        &self.tables[id.index()]
    }

    /// Color of asset `id` at `address`.
    #[must_use]
    pub fn get(&self, id: AssetId, address: u32) -> Color {
        self.table(id).get(address)
    }
}
