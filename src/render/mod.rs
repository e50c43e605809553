//! Minimap rendering: one pixel per tile, terrain first, then unit
//! markers on top.

pub mod palette;

pub use palette::{
    gold_mine_color, oil_patch_color, player_color, terrain_class, tile_color, tile_variant,
    TerrainClass,
};

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Color, Player, Pud, UnitType};

/// A rendered minimap: row-major, top-to-bottom, one color per tile.
#[derive(Debug, Clone)]
pub struct Minimap {
    width: u16,
    height: u16,
    pixels: Vec<Color>,
}

impl Minimap {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixel(&self, x: u16, y: u16) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Binary PPM (P6): text header, then raw RGB triples.
    pub fn ppm_bytes(&self) -> Vec<u8> {
        let mut out = format!("P6\n{} {}\n255\n", self.width, self.height).into_bytes();
        out.reserve(self.pixels.len() * 3);
        for px in &self.pixels {
            out.extend_from_slice(&[px.r, px.g, px.b]);
        }
        out
    }

    pub fn to_ppm(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.ppm_bytes()).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Render the model's minimap.
pub fn render(pud: &Pud) -> Result<Minimap> {
    if !pud.is_init() {
        return Err(Error::NotInitialized);
    }

    let (width, height) = pud.dims.size();
    let mut pixels = Vec::with_capacity(pud.tile_count());
    for &tile in &pud.tiles_map {
        pixels.push(tile_color(pud.era, tile));
    }

    // Unit overlay: resources get fixed colors, everything else its
    // owner's color. One tile per unit at this resolution.
    for unit in &pud.units {
        if unit.x >= width || unit.y >= height {
            continue;
        }
        let color = match unit.unit_type() {
            Some(UnitType::GoldMine) => gold_mine_color(),
            Some(UnitType::OilPatch) => oil_patch_color(),
            _ => player_color(unit.player().unwrap_or(Player::Neutral)),
        };
        pixels[unit.y as usize * width as usize + unit.x as usize] = color;
    }

    Ok(Minimap { width, height, pixels })
}

impl Pud {
    /// Render the minimap to a pixel buffer.
    pub fn minimap(&self) -> Result<Minimap> {
        render(self)
    }

    /// Render the minimap and write it as a PPM file.
    pub fn minimap_to_ppm(&self, path: impl AsRef<Path>) -> Result<()> {
        render(self)?.to_ppm(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimensions, Era};

    #[test]
    fn test_buffer_size_matches_dimensions() {
        for dims in [Dimensions::X32, Dimensions::X64, Dimensions::X96, Dimensions::X128] {
            let pud = Pud::new(Era::Forest, dims);
            let map = pud.minimap().unwrap();
            assert_eq!(map.pixels().len(), dims.tiles());
            assert_eq!(map.width(), dims.size().0);
            assert_eq!(map.height(), dims.size().1);
        }
    }

    #[test]
    fn test_gold_mine_overlay() {
        let mut pud = Pud::new(Era::Forest, Dimensions::X64);
        pud.add_unit(10, 10, Player::Neutral, UnitType::GoldMine, 20).unwrap();
        let map = pud.minimap().unwrap();
        assert_eq!(map.pixels().len(), 4096);
        assert_eq!(map.pixel(10, 10), gold_mine_color());
        // Neighbors keep their terrain color.
        assert_eq!(map.pixel(11, 10), tile_color(Era::Forest, pud.tile_at(11, 10).unwrap()));
    }

    #[test]
    fn test_unit_overlay_uses_player_color() {
        let mut pud = Pud::new(Era::Winter, Dimensions::X32);
        pud.add_unit(5, 6, Player::Yellow, UnitType::Footman, 0).unwrap();
        pud.add_unit(7, 8, Player::Neutral, UnitType::OilPatch, 4).unwrap();
        let map = pud.minimap().unwrap();
        assert_eq!(map.pixel(5, 6), player_color(Player::Yellow));
        assert_eq!(map.pixel(7, 8), oil_patch_color());
    }

    #[test]
    fn test_uninitialized_model_does_not_render() {
        let pud = match Pud::open("/no/such/file.pud", crate::model::OpenMode::WRITE) {
            Ok(p) => p,
            Err(_) => return,
        };
        assert!(matches!(pud.minimap(), Err(Error::NotInitialized)));
    }

    #[test]
    fn test_ppm_layout() {
        let pud = Pud::new(Era::Forest, Dimensions::X32);
        let map = pud.minimap().unwrap();
        let ppm = map.ppm_bytes();
        let header = b"P6\n32 32\n255\n";
        assert_eq!(&ppm[..header.len()], header);
        assert_eq!(ppm.len(), header.len() + 32 * 32 * 3);
    }
}
