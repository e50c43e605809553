//! Tile-id to color mapping, per era.

use crate::model::{Color, Era, Player};

/// Terrain class of a tile id, for palette lookup.
///
/// Solid tiles (id < 0x100) are classed by the high nibble of the low
/// byte; boundary tiles are classed by the high byte, which names the
/// dominant terrain of the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainClass {
    LightWater,
    DarkWater,
    LightCoast,
    DarkCoast,
    LightGround,
    DarkGround,
    Forest,
    Mountains,
    HumanWall,
    OrcWall,
    Rocks,
}

pub fn terrain_class(tile: u16) -> TerrainClass {
    let selector = if tile < 0x0100 { tile >> 4 } else { tile >> 8 };
    match selector {
        0x1 => TerrainClass::LightWater,
        0x2 => TerrainClass::DarkWater,
        0x3 => TerrainClass::LightCoast,
        0x4 => TerrainClass::DarkCoast,
        0x5 => TerrainClass::LightGround,
        0x6 => TerrainClass::DarkGround,
        0x7 => TerrainClass::Forest,
        0x8 => TerrainClass::Mountains,
        0x9 => TerrainClass::HumanWall,
        0xa => TerrainClass::OrcWall,
        0xb => TerrainClass::Rocks,
        _ => TerrainClass::LightGround,
    }
}

/// Shade-variant table indexed by the tile id's low nibble.
///
/// The permutation makes runs of identical tiles render with the same
/// texture noise the game shows: the variant depends only on the id,
/// never on position or any runtime state.
const VARIANTS: [u8; 16] = [0, 3, 1, 2, 2, 0, 3, 1, 1, 2, 0, 3, 3, 1, 2, 0];

pub fn tile_variant(tile: u16) -> u8 {
    VARIANTS[(tile & 0x000f) as usize]
}

fn base_color(era: Era, class: TerrainClass) -> Color {
    use TerrainClass::*;
    match era {
        Era::Forest => match class {
            LightWater => Color::rgb(36, 84, 164),
            DarkWater => Color::rgb(20, 56, 132),
            LightCoast => Color::rgb(140, 120, 84),
            DarkCoast => Color::rgb(112, 92, 60),
            LightGround => Color::rgb(80, 108, 48),
            DarkGround => Color::rgb(60, 88, 36),
            Forest => Color::rgb(16, 64, 16),
            Mountains => Color::rgb(112, 112, 112),
            HumanWall => Color::rgb(180, 180, 180),
            OrcWall => Color::rgb(120, 116, 108),
            Rocks => Color::rgb(96, 96, 96),
        },
        Era::Winter => match class {
            LightWater => Color::rgb(28, 60, 140),
            DarkWater => Color::rgb(16, 40, 108),
            LightCoast => Color::rgb(160, 160, 180),
            DarkCoast => Color::rgb(130, 130, 150),
            LightGround => Color::rgb(220, 220, 228),
            DarkGround => Color::rgb(196, 196, 208),
            Forest => Color::rgb(56, 88, 72),
            Mountains => Color::rgb(150, 150, 160),
            HumanWall => Color::rgb(188, 188, 196),
            OrcWall => Color::rgb(128, 124, 120),
            Rocks => Color::rgb(110, 110, 120),
        },
        Era::Wasteland => match class {
            LightWater => Color::rgb(88, 48, 24),
            DarkWater => Color::rgb(64, 32, 16),
            LightCoast => Color::rgb(120, 80, 44),
            DarkCoast => Color::rgb(96, 64, 36),
            LightGround => Color::rgb(140, 100, 56),
            DarkGround => Color::rgb(116, 84, 48),
            Forest => Color::rgb(80, 56, 24),
            Mountains => Color::rgb(104, 80, 56),
            HumanWall => Color::rgb(172, 156, 140),
            OrcWall => Color::rgb(116, 104, 92),
            Rocks => Color::rgb(92, 76, 60),
        },
        Era::Swamp => match class {
            LightWater => Color::rgb(40, 60, 52),
            DarkWater => Color::rgb(24, 44, 36),
            LightCoast => Color::rgb(88, 84, 52),
            DarkCoast => Color::rgb(68, 64, 40),
            LightGround => Color::rgb(96, 108, 64),
            DarkGround => Color::rgb(76, 88, 52),
            Forest => Color::rgb(40, 72, 36),
            Mountains => Color::rgb(100, 104, 88),
            HumanWall => Color::rgb(176, 176, 168),
            OrcWall => Color::rgb(118, 112, 100),
            Rocks => Color::rgb(90, 92, 80),
        },
    }
}

fn shade(color: Color, variant: u8) -> Color {
    // Each variant darkens by a small fixed step.
    let f = |c: u8| c.saturating_sub(variant * 6);
    Color::rgb(f(color.r), f(color.g), f(color.b))
}

/// Minimap color of one tile.
pub fn tile_color(era: Era, tile: u16) -> Color {
    shade(base_color(era, terrain_class(tile)), tile_variant(tile))
}

pub fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::rgb(164, 0, 0),
        Player::Blue => Color::rgb(0, 60, 192),
        Player::Green => Color::rgb(44, 180, 148),
        Player::Violet => Color::rgb(152, 72, 176),
        Player::Orange => Color::rgb(216, 132, 40),
        Player::Black => Color::rgb(40, 40, 40),
        Player::White => Color::rgb(224, 224, 224),
        Player::Yellow => Color::rgb(224, 224, 0),
        Player::Neutral => Color::rgb(180, 180, 180),
    }
}

pub fn gold_mine_color() -> Color {
    Color::rgb(255, 255, 0)
}

pub fn oil_patch_color() -> Color {
    Color::rgb(8, 8, 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_is_deterministic() {
        for tile in [0x0010u16, 0x0052, 0x0700, 0x012f, 0xffff] {
            let first = tile_variant(tile);
            for _ in 0..100 {
                assert_eq!(tile_variant(tile), first);
            }
        }
    }

    #[test]
    fn test_variant_depends_only_on_low_bits() {
        assert_eq!(tile_variant(0x0051), tile_variant(0x0701));
        assert_eq!(tile_variant(0x0003), tile_variant(0x0103));
    }

    #[test]
    fn test_solid_and_boundary_classes() {
        assert_eq!(terrain_class(0x0010), TerrainClass::LightWater);
        assert_eq!(terrain_class(0x002f), TerrainClass::DarkWater);
        assert_eq!(terrain_class(0x0050), TerrainClass::LightGround);
        assert_eq!(terrain_class(0x0071), TerrainClass::Forest);
        assert_eq!(terrain_class(0x0082), TerrainClass::Mountains);
        assert_eq!(terrain_class(0x0700), TerrainClass::Forest);
        assert_eq!(terrain_class(0x0123), TerrainClass::LightWater);
    }

    #[test]
    fn test_same_tile_same_color() {
        for era in [Era::Forest, Era::Winter, Era::Wasteland, Era::Swamp] {
            assert_eq!(tile_color(era, 0x0052), tile_color(era, 0x0052));
        }
        // Eras disagree on the same tile.
        assert_ne!(tile_color(Era::Forest, 0x0050), tile_color(Era::Winter, 0x0050));
    }
}
