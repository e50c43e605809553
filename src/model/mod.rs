pub mod check;
pub mod defaults;
pub mod names;
pub mod types;

pub use types::*;

use std::path::{Path, PathBuf};

use crate::codec::{self, Section};
use crate::error::{Error, Result};

/// One value per player slot, in wire order: 8 active players, 7
/// reserved slots, then the neutral slot.
///
/// The reserved slots never carry gameplay data but round-trip
/// verbatim, so they are stored rather than skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotTable<T> {
    pub players: [T; ACTIVE_PLAYERS],
    pub unusable: [T; RESERVED_SLOTS],
    pub neutral: T,
}

impl<T: Copy> SlotTable<T> {
    pub fn filled(v: T) -> Self {
        Self { players: [v; ACTIVE_PLAYERS], unusable: [v; RESERVED_SLOTS], neutral: v }
    }

    pub fn get(&self, slot: usize) -> T {
        match slot {
            0..=7 => self.players[slot],
            8..=14 => self.unusable[slot - 8],
            _ => self.neutral,
        }
    }

    pub fn set(&mut self, slot: usize, v: T) {
        match slot {
            0..=7 => self.players[slot] = v,
            8..=14 => self.unusable[slot - 8] = v,
            _ => self.neutral = v,
        }
    }

    /// All 16 values in serialization order.
    pub fn wire(&self) -> impl Iterator<Item = T> + '_ {
        self.players
            .iter()
            .chain(self.unusable.iter())
            .chain(std::iter::once(&self.neutral))
            .copied()
    }

    pub fn of(&self, player: Player) -> T {
        self.get(player as usize)
    }
}

/// Combat and construction characteristics of one unit kind.
///
/// Costs are stored in tens, build time in 0.6 s steps and decay in
/// 6 s steps, as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitCharacteristics {
    pub overlap_frames: u16,
    pub sight: u32,
    pub hp: u16,
    pub has_magic: u8,
    pub build_time: u8,
    pub gold_cost: u8,
    pub lumber_cost: u8,
    pub oil_cost: u8,
    pub size_w: u16,
    pub size_h: u16,
    pub box_w: u16,
    pub box_h: u16,
    pub range: u8,
    pub computer_react_range: u8,
    pub human_react_range: u8,
    pub armor: u8,
    pub rect_sel: u8,
    pub priority: u8,
    pub basic_damage: u8,
    pub piercing_damage: u8,
    pub weapons_upgradable: u8,
    pub armor_upgradable: u8,
    pub missile_weapon: u8,
    pub kind: u8,
    pub decay_rate: u8,
    pub annoy: u8,
    pub mouse_right_btn: u8,
    pub point_value: u16,
    pub can_target: CanTarget,
    pub flags: u32,
}

/// One of the 52 researchable upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Upgrade {
    pub time: u8,
    pub gold: u16,
    pub lumber: u16,
    pub oil: u16,
    pub icon: u16,
    pub group: u16,
    pub flags: u32,
}

/// In-memory model of a PUD map file.
///
/// Built either by [`Pud::open`] + [`Pud::parse`] from an existing file,
/// or by [`Pud::new`] for authoring from defaults. Optional sections a
/// file omits keep their default-table values, so a parsed model is
/// always fully playable. Owned buffers are released by `Drop`, on
/// every exit path, including after a failed parse.
#[derive(Debug, Clone)]
pub struct Pud {
    path: Option<PathBuf>,
    open_mode: OpenMode,
    /// Raw file bytes between open and parse.
    data: Option<Vec<u8>>,

    pub tag: u32,
    pub version: u16,
    pub description: [u8; 32],
    pub era: Era,
    pub dims: Dimensions,

    pub owners: SlotTable<u8>,
    pub sides: SlotTable<u8>,
    pub start_gold: SlotTable<u16>,
    pub start_lumber: SlotTable<u16>,
    pub start_oil: SlotTable<u16>,
    pub ai: SlotTable<u8>,

    pub unit_alow: SlotTable<u32>,
    pub spell_start: SlotTable<u32>,
    pub spell_alow: SlotTable<u32>,
    pub spell_acq: SlotTable<u32>,
    pub up_alow: SlotTable<u32>,
    pub up_acq: SlotTable<u32>,

    pub upgrades: [Upgrade; UPGRADE_COUNT],
    pub unit_data: Box<[UnitCharacteristics; UNIT_KINDS]>,
    /// Obsolete UDTA block, preserved for byte-faithful round-trips.
    pub udta_obsolete: Vec<u16>,
    pub udta_use_defaults: bool,
    pub ugrd_use_defaults: bool,

    pub tiles_map: Vec<u16>,
    pub movement_map: Vec<u16>,
    pub action_map: Vec<u16>,
    pub oil_map: Vec<u8>,

    pub units: Vec<UnitPlacement>,

    sections: u32,
    has_erax: bool,
    init: bool,
}

impl Pud {
    /// Fresh authoring model: defaults seeded, terrain cleared to light
    /// ground, no units.
    pub fn new(era: Era, dims: Dimensions) -> Self {
        let mut pud = Self::empty(OpenMode::READ_WRITE);
        pud.era = era;
        pud.set_dimensions(dims);
        defaults::apply(&mut pud);
        pud.init = true;
        pud
    }

    /// Open a file without parsing it. `mode` must include read access
    /// for [`Pud::parse`] to succeed and write access for
    /// [`Pud::write`].
    pub fn open(path: impl AsRef<Path>, mode: OpenMode) -> Result<Self> {
        let path = path.as_ref();
        let data = if mode.contains(OpenMode::READ) {
            Some(std::fs::read(path).map_err(|source| Error::Io {
                path: path.display().to_string(),
                source,
            })?)
        } else {
            None
        };

        let mut pud = Self::empty(mode);
        pud.path = Some(path.to_path_buf());
        pud.data = data;
        defaults::apply(&mut pud);
        Ok(pud)
    }

    fn empty(mode: OpenMode) -> Self {
        Self {
            path: None,
            open_mode: mode,
            data: None,
            tag: 0,
            version: VERSION_TOD,
            description: [0; 32],
            era: Era::Forest,
            dims: Dimensions::X32,
            owners: SlotTable::default(),
            sides: SlotTable::default(),
            start_gold: SlotTable::default(),
            start_lumber: SlotTable::default(),
            start_oil: SlotTable::default(),
            ai: SlotTable::default(),
            unit_alow: SlotTable::default(),
            spell_start: SlotTable::default(),
            spell_alow: SlotTable::default(),
            spell_acq: SlotTable::default(),
            up_alow: SlotTable::default(),
            up_acq: SlotTable::default(),
            upgrades: [Upgrade::default(); UPGRADE_COUNT],
            unit_data: Box::new([UnitCharacteristics::default(); UNIT_KINDS]),
            udta_obsolete: vec![0; codec::UDTA_OBSOLETE_WORDS],
            udta_use_defaults: true,
            ugrd_use_defaults: true,
            tiles_map: Vec::new(),
            movement_map: Vec::new(),
            action_map: Vec::new(),
            oil_map: Vec::new(),
            units: Vec::new(),
            sections: 0,
            has_erax: false,
            init: false,
        }
    }

    /// Decode the opened file into the model. Consumes the raw buffer on
    /// success; on a fatal format error the model is left unusable (but
    /// still releasable) rather than half-populated.
    pub fn parse(&mut self) -> Result<()> {
        if !self.open_mode.contains(OpenMode::READ) {
            return Err(Error::WriteOnly);
        }
        let data = self.data.take().ok_or(Error::TruncatedInput)?;
        match codec::parse(self, &data) {
            Ok(()) => {
                self.init = true;
                Ok(())
            }
            Err(e) => {
                self.init = false;
                Err(e)
            }
        }
    }

    /// Serialize to bytes in canonical section order, regenerating the
    /// content fingerprint first.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        self.generate_tag();
        codec::serialize(self)
    }

    /// Write the model to `path`, or to the path it was opened from.
    pub fn write(&mut self, path: Option<&Path>) -> Result<()> {
        if !self.open_mode.contains(OpenMode::WRITE) {
            return Err(Error::ReadOnly);
        }
        let target: PathBuf = match path.or(self.path.as_deref()) {
            Some(p) => p.to_path_buf(),
            None => return Err(Error::Io {
                path: String::from("<unset>"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no output path"),
            }),
        };
        let bytes = self.to_bytes()?;
        std::fs::write(&target, bytes).map_err(|source| Error::Io {
            path: target.display().to_string(),
            source,
        })
    }

    pub fn is_init(&self) -> bool {
        self.init
    }

    pub fn open_mode(&self) -> OpenMode {
        self.open_mode
    }

    pub fn width(&self) -> u16 {
        self.dims.size().0
    }

    pub fn height(&self) -> u16 {
        self.dims.size().1
    }

    pub fn tile_count(&self) -> usize {
        self.dims.tiles()
    }

    pub fn section_present(&self, section: Section) -> bool {
        self.sections & section.bit() != 0
    }

    pub(crate) fn mark_section(&mut self, section: Section) {
        self.sections |= section.bit();
    }

    pub(crate) fn set_erax(&mut self, on: bool) {
        self.has_erax = on;
    }

    pub fn has_erax(&self) -> bool {
        self.has_erax
    }

    pub fn set_version(&mut self, version: u16) {
        self.version = version;
    }

    /// Set the free-text description; truncated to 31 bytes plus NUL.
    pub fn set_description(&mut self, descr: &str) {
        self.description = [0; 32];
        let bytes = descr.as_bytes();
        let n = bytes.len().min(31);
        self.description[..n].copy_from_slice(&bytes[..n]);
    }

    pub fn description_str(&self) -> String {
        let end = self
            .description
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.description.len());
        String::from_utf8_lossy(&self.description[..end]).into_owned()
    }

    pub fn set_era(&mut self, era: Era) {
        self.era = era;
    }

    /// Resize the world. Per-tile arrays are reallocated to exactly
    /// width * height; existing terrain content is discarded.
    pub fn set_dimensions(&mut self, dims: Dimensions) {
        self.dims = dims;
        let tiles = dims.tiles();
        self.tiles_map = vec![defaults::DEFAULT_TILE; tiles];
        self.movement_map = vec![0; tiles];
        self.action_map = vec![0; tiles];
        self.oil_map = vec![0; tiles];
    }

    pub fn set_tag(&mut self, tag: u32) {
        self.tag = tag;
    }

    /// Derive the file tag from the current content, so any edit
    /// produces a new identity. Nothing validates the value; it only
    /// has to change with the content and be stable across runs.
    pub fn generate_tag(&mut self) {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&self.description);
        hasher.update(&(self.era as u8).to_le_bytes());
        hasher.update(&self.width().to_le_bytes());
        hasher.update(&self.height().to_le_bytes());
        for owner in self.owners.wire() {
            hasher.update(&[owner]);
        }
        for tile in &self.tiles_map {
            hasher.update(&tile.to_le_bytes());
        }
        for unit in &self.units {
            hasher.update(&unit.x.to_le_bytes());
            hasher.update(&unit.y.to_le_bytes());
            hasher.update(&[unit.unit, unit.owner]);
            hasher.update(&unit.alter.to_le_bytes());
        }
        self.tag = hasher.finalize();
    }

    /// Place a unit. Returns the index of the new record.
    pub fn add_unit(
        &mut self,
        x: u16,
        y: u16,
        owner: Player,
        unit: UnitType,
        alter: u16,
    ) -> Result<usize> {
        let (w, h) = self.dims.size();
        if x >= w || y >= h {
            return Err(Error::OutOfBounds { x, y, w, h });
        }
        self.units.push(UnitPlacement {
            x,
            y,
            unit: unit as u8,
            owner: owner as u8,
            alter,
        });
        Ok(self.units.len() - 1)
    }

    pub fn tile_at(&self, x: u16, y: u16) -> Result<u16> {
        let (w, h) = self.dims.size();
        if x >= w || y >= h {
            return Err(Error::OutOfBounds { x, y, w, h });
        }
        Ok(self.tiles_map[y as usize * w as usize + x as usize])
    }

    pub fn tile_set(&mut self, x: u16, y: u16, tile: u16) -> Result<()> {
        let (w, h) = self.dims.size();
        if x >= w || y >= h {
            return Err(Error::OutOfBounds { x, y, w, h });
        }
        self.tiles_map[y as usize * w as usize + x as usize] = tile;
        Ok(())
    }
}
