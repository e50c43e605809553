//! Section-dispatch parser: walks the byte stream, decodes known
//! sections into the model, skips unknown ones.

use tracing::{debug, trace};

use super::reader::Reader;
use super::section::Section;
use super::{MAGIC, UDTA_OBSOLETE_WORDS, UNIT_RECORD_SIZE};
use crate::error::{Error, Result};
use crate::model::{
    Dimensions, Era, Pud, SlotTable, UnitCharacteristics, UnitPlacement, CanTarget,
    SLOT_COUNT, UNIT_KINDS, UPGRADE_COUNT,
};

/// Decode `data` into `pud`.
///
/// The first section must be TYPE with a valid signature; anything else
/// aborts immediately with `InvalidFormat`. Every other known section
/// must decode to exactly its declared length. After the stream is
/// exhausted every mandatory section must have been seen.
pub fn parse(pud: &mut Pud, data: &[u8]) -> Result<()> {
    let mut r = Reader::new(data);

    let tag = r.read_tag().map_err(|_| Error::InvalidFormat)?;
    if Section::from_tag(tag) != Some(Section::Type) {
        return Err(Error::InvalidFormat);
    }
    let len = r.read_u32_le().map_err(|_| Error::InvalidFormat)? as usize;
    let payload = r.read_bytes(len).map_err(|_| Error::InvalidFormat)?;
    decode_type(pud, payload)?;
    pud.mark_section(Section::Type);

    while !r.is_empty() {
        let at = r.position();
        let tag = r.read_tag()?;
        let len = r.read_u32_le()? as usize;
        let payload = r.read_bytes(len)?;

        match Section::from_tag(tag) {
            Some(section) => {
                debug!(%section, len, at, "decoding section");
                decode_section(pud, section, payload)?;
                pud.mark_section(section);
            }
            None => {
                // Unknown kinds are skipped for forward compatibility,
                // and never satisfy a mandatory bit.
                debug!(tag = ?tag, len, at, "skipping unknown section");
            }
        }
    }

    for section in Section::ALL {
        if !section.is_optional() && !pud.section_present(section) {
            return Err(Error::MissingSection { section });
        }
    }

    trace!(
        units = pud.units.len(),
        tiles = pud.tile_count(),
        "parse complete"
    );
    Ok(())
}

/// TYPE carries the 10-byte signature, two unused bytes and the file
/// tag. A bad signature is fatal.
fn decode_type(pud: &mut Pud, payload: &[u8]) -> Result<()> {
    let mut r = Reader::new(payload);
    let magic = r.read_bytes(MAGIC.len()).map_err(|_| Error::InvalidFormat)?;
    if magic != MAGIC {
        return Err(Error::InvalidFormat);
    }
    r.skip(2).map_err(|_| Error::InvalidFormat)?;
    pud.tag = r.read_u32_le().map_err(|_| Error::InvalidFormat)?;
    if !r.is_empty() {
        return Err(Error::CorruptSection { section: Section::Type });
    }
    Ok(())
}

fn decode_section(pud: &mut Pud, section: Section, payload: &[u8]) -> Result<()> {
    let mut r = Reader::new(payload);
    let corrupt = |_| Error::CorruptSection { section };

    match section {
        Section::Type => decode_type(pud, payload)?,
        Section::Ver => pud.version = r.read_u16_le().map_err(corrupt)?,
        Section::Desc => {
            let bytes = r.read_bytes(32).map_err(corrupt)?;
            pud.description.copy_from_slice(bytes);
        }
        Section::Ownr => pud.owners = read_slots_u8(&mut r).map_err(corrupt)?,
        Section::Era => {
            let v = r.read_u16_le().map_err(corrupt)?;
            // ERAX takes precedence when both are present.
            if !pud.has_erax() {
                pud.era = era_or_forest(v);
            }
        }
        Section::Erax => {
            let v = r.read_u16_le().map_err(corrupt)?;
            pud.era = era_or_forest(v);
            pud.set_erax(true);
        }
        Section::Dim => {
            let w = r.read_u16_le().map_err(corrupt)?;
            let h = r.read_u16_le().map_err(corrupt)?;
            let dims = Dimensions::from_size(w, h)
                .ok_or(Error::CorruptSection { section })?;
            pud.set_dimensions(dims);
        }
        Section::Udta => decode_udta(pud, &mut r).map_err(corrupt)?,
        Section::Alow => {
            pud.unit_alow = read_slots_u32(&mut r).map_err(corrupt)?;
            pud.spell_start = read_slots_u32(&mut r).map_err(corrupt)?;
            pud.spell_alow = read_slots_u32(&mut r).map_err(corrupt)?;
            pud.spell_acq = read_slots_u32(&mut r).map_err(corrupt)?;
            pud.up_alow = read_slots_u32(&mut r).map_err(corrupt)?;
            pud.up_acq = read_slots_u32(&mut r).map_err(corrupt)?;
        }
        Section::Ugrd => decode_ugrd(pud, &mut r).map_err(corrupt)?,
        Section::Side => pud.sides = read_slots_u8(&mut r).map_err(corrupt)?,
        Section::Sgld => pud.start_gold = read_slots_u16(&mut r).map_err(corrupt)?,
        Section::Slbr => pud.start_lumber = read_slots_u16(&mut r).map_err(corrupt)?,
        Section::Soil => pud.start_oil = read_slots_u16(&mut r).map_err(corrupt)?,
        Section::Aipl => pud.ai = read_slots_u8(&mut r).map_err(corrupt)?,
        Section::Mtxm => {
            pud.tiles_map = r.read_u16_array(pud.tile_count()).map_err(corrupt)?;
        }
        Section::Sqm => {
            pud.movement_map = r.read_u16_array(pud.tile_count()).map_err(corrupt)?;
        }
        Section::Oilm => {
            pud.oil_map = r.read_bytes(pud.tile_count()).map_err(corrupt)?.to_vec();
        }
        Section::Regm => {
            pud.action_map = r.read_u16_array(pud.tile_count()).map_err(corrupt)?;
        }
        Section::Unit => {
            if payload.len() % UNIT_RECORD_SIZE != 0 {
                return Err(Error::CorruptSection { section });
            }
            let count = payload.len() / UNIT_RECORD_SIZE;
            let mut units = Vec::with_capacity(count);
            for _ in 0..count {
                units.push(UnitPlacement {
                    x: r.read_u16_le().map_err(corrupt)?,
                    y: r.read_u16_le().map_err(corrupt)?,
                    unit: r.read_u8().map_err(corrupt)?,
                    owner: r.read_u8().map_err(corrupt)?,
                    alter: r.read_u16_le().map_err(corrupt)?,
                });
            }
            pud.units = units;
        }
    }

    // Every decoder must land exactly on the declared section end.
    if !r.is_empty() && section != Section::Type {
        return Err(Error::CorruptSection { section });
    }
    Ok(())
}

fn era_or_forest(v: u16) -> Era {
    Era::from_u16(v).unwrap_or_else(|| {
        debug!(era = v, "unknown era value, falling back to forest");
        Era::Forest
    })
}

fn read_slots_u8(r: &mut Reader) -> Result<SlotTable<u8>> {
    let mut table = SlotTable::default();
    for slot in 0..SLOT_COUNT {
        table.set(slot, r.read_u8()?);
    }
    Ok(table)
}

fn read_slots_u16(r: &mut Reader) -> Result<SlotTable<u16>> {
    let mut table = SlotTable::default();
    for slot in 0..SLOT_COUNT {
        table.set(slot, r.read_u16_le()?);
    }
    Ok(table)
}

fn read_slots_u32(r: &mut Reader) -> Result<SlotTable<u32>> {
    let mut table = SlotTable::default();
    for slot in 0..SLOT_COUNT {
        table.set(slot, r.read_u32_le()?);
    }
    Ok(table)
}

/// UDTA is struct-of-arrays on the wire; the model keeps one record per
/// unit kind. A set use-defaults flag keeps the builtin table.
fn decode_udta(pud: &mut Pud, r: &mut Reader) -> Result<()> {
    let flag = r.read_u16_le()?;
    pud.udta_use_defaults = flag != 0;
    if pud.udta_use_defaults {
        r.skip(r.remaining())?;
        return Ok(());
    }

    let mut table = Box::new([UnitCharacteristics::default(); UNIT_KINDS]);

    let overlap = r.read_u16_array(UNIT_KINDS)?;
    for (entry, v) in table.iter_mut().zip(overlap) {
        entry.overlap_frames = v;
    }
    pud.udta_obsolete = r.read_u16_array(UDTA_OBSOLETE_WORDS)?;
    for entry in table.iter_mut() {
        entry.sight = r.read_u32_le()?;
    }
    for entry in table.iter_mut() {
        entry.hp = r.read_u16_le()?;
    }
    for entry in table.iter_mut() {
        entry.has_magic = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.build_time = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.gold_cost = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.lumber_cost = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.oil_cost = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.size_w = r.read_u16_le()?;
        entry.size_h = r.read_u16_le()?;
    }
    for entry in table.iter_mut() {
        entry.box_w = r.read_u16_le()?;
        entry.box_h = r.read_u16_le()?;
    }
    for entry in table.iter_mut() {
        entry.range = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.computer_react_range = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.human_react_range = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.armor = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.rect_sel = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.priority = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.basic_damage = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.piercing_damage = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.weapons_upgradable = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.armor_upgradable = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.missile_weapon = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.kind = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.decay_rate = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.annoy = r.read_u8()?;
    }
    // Only the first 58 kinds carry a right-click action on the wire.
    for entry in table.iter_mut().take(58) {
        entry.mouse_right_btn = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.point_value = r.read_u16_le()?;
    }
    for entry in table.iter_mut() {
        entry.can_target = CanTarget::from_bits_retain(r.read_u8()?);
    }
    for entry in table.iter_mut() {
        entry.flags = r.read_u32_le()?;
    }

    pud.unit_data = table;
    Ok(())
}

fn decode_ugrd(pud: &mut Pud, r: &mut Reader) -> Result<()> {
    let flag = r.read_u16_le()?;
    pud.ugrd_use_defaults = flag != 0;
    if pud.ugrd_use_defaults {
        r.skip(r.remaining())?;
        return Ok(());
    }

    let mut table = pud.upgrades;
    for entry in table.iter_mut() {
        entry.time = r.read_u8()?;
    }
    for entry in table.iter_mut() {
        entry.gold = r.read_u16_le()?;
    }
    for entry in table.iter_mut() {
        entry.lumber = r.read_u16_le()?;
    }
    for entry in table.iter_mut() {
        entry.oil = r.read_u16_le()?;
    }
    for entry in table.iter_mut() {
        entry.icon = r.read_u16_le()?;
    }
    for entry in table.iter_mut() {
        entry.group = r.read_u16_le()?;
    }
    for entry in table.iter_mut() {
        entry.flags = r.read_u32_le()?;
    }
    pud.upgrades = table;

    debug_assert_eq!(table.len(), UPGRADE_COUNT);
    Ok(())
}
