//! Warcraft II PUD map files
//!
//! A Rust library for reading, validating, editing and writing PUD
//! map files, with a one-pixel-per-tile minimap renderer.
//!
//! ```no_run
//! use pud::{OpenMode, Pud};
//!
//! # fn main() -> pud::Result<()> {
//! let mut map = Pud::open("maps/garden_of_war.pud", OpenMode::READ)?;
//! map.parse()?;
//! if let Err(violation) = map.check() {
//!     eprintln!("not playable: {violation}");
//! }
//! map.minimap_to_ppm("preview.ppm")?;
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod error;
pub mod model;
pub mod render;

pub use codec::{parse, serialize, Reader, Section, Writer};
pub use error::{Error, Result, Validation};
pub use model::{
    names, Ai, CanTarget, Color, Dimensions, Era, OpenMode, Owner, Player, Pud,
    Side, SlotTable, UnitCharacteristics, UnitPlacement, UnitType, Upgrade,
    VERSION_BDP, VERSION_TOD,
};
pub use render::{
    gold_mine_color, oil_patch_color, player_color, tile_color, tile_variant, Minimap,
};
