//! Entity visuals: a text glyph, or an image stretched over the entity's box.
//!
//! Images are loaded up front, before the first frame, so a sprite is
//! either there for the whole session or never.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use image::RgbaImage;

use crate::entities::EntityKind;

/// Pixels with alpha below this are left unpainted.
const ALPHA_CUTOFF: u8 = 128;

const ALL_KINDS: [EntityKind; 5] = [
    EntityKind::Player,
    EntityKind::Enemy,
    EntityKind::PowerUp,
    EntityKind::Fireball,
    EntityKind::Flag,
];

pub fn glyph_for(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Player => "☻",
        EntityKind::Enemy => "Ω",
        EntityKind::PowerUp => "♥",
        EntityKind::Fireball => "∗",
        EntityKind::Flag => "⚑",
    }
}

fn file_name(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Player => "player.png",
        EntityKind::Enemy => "enemy.png",
        EntityKind::PowerUp => "power_up.png",
        EntityKind::Fireball => "fireball.png",
        EntityKind::Flag => "flag.png",
    }
}

#[derive(Clone, Debug)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("failed to load sprite {}", path.display()))?;
        Ok(Self::from_image(image.to_rgba8()))
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Nearest-neighbour colour of cell `(col, row)` when the image is
    /// stretched over a `cols` x `rows` grid.  `None` means transparent.
    pub fn sample(&self, col: u16, row: u16, cols: u16, rows: u16) -> Option<(u8, u8, u8)> {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 || cols == 0 || rows == 0 {
            return None;
        }
        let src_x = ((col as u32 * width) / cols as u32).min(width - 1);
        let src_y = ((row as u32 * height) / rows as u32).min(height - 1);
        let pixel = self.image.get_pixel(src_x, src_y);
        if pixel[3] < ALPHA_CUTOFF {
            return None;
        }
        Some((pixel[0], pixel[1], pixel[2]))
    }
}

/// How one entity kind is drawn.  Exactly one of the two, never both.
#[derive(Clone, Copy, Debug)]
pub enum Visual<'a> {
    Glyph(&'static str),
    Image(&'a Sprite),
}

#[derive(Clone, Debug, Default)]
pub struct SpriteSheet {
    sprites: HashMap<EntityKind, Sprite>,
}

impl SpriteSheet {
    /// Glyphs only.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load whichever sprite files exist in `dir`.  Kinds whose file is
    /// missing or unreadable keep their glyph.
    pub fn load(dir: &Path) -> Self {
        let mut sprites = HashMap::new();
        for kind in ALL_KINDS {
            let path = dir.join(file_name(kind));
            if !path.is_file() {
                tracing::debug!("no sprite for {:?} at {}", kind, path.display());
                continue;
            }
            match Sprite::open(&path) {
                Ok(sprite) => {
                    tracing::info!("loaded sprite for {:?} from {}", kind, path.display());
                    sprites.insert(kind, sprite);
                }
                Err(err) => tracing::warn!("{:#}; falling back to glyph", err),
            }
        }
        Self { sprites }
    }

    pub fn insert(&mut self, kind: EntityKind, sprite: Sprite) {
        self.sprites.insert(kind, sprite);
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn visual(&self, kind: EntityKind) -> Visual<'_> {
        match self.sprites.get(&kind) {
            Some(sprite) => Visual::Image(sprite),
            None => Visual::Glyph(glyph_for(kind)),
        }
    }
}
