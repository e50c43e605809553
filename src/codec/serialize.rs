//! Canonical serialization: emits sections in fixed order with
//! recomputed derived fields, regardless of how the source file was
//! arranged.

use tracing::debug;

use super::section::Section;
use super::writer::Writer;
use super::{MAGIC, UNIT_RECORD_SIZE};
use crate::error::Result;
use crate::model::Pud;

/// Serialize the model to bytes.
///
/// Structural only: playability is the validator's job. The unit count
/// is derived from the live unit list; the caller regenerates the tag
/// beforehand (see [`Pud::to_bytes`]).
pub fn serialize(pud: &Pud) -> Result<Vec<u8>> {
    // Fixed sections plus the per-tile and per-unit payloads.
    let estimate = 8 * 1024 + pud.tile_count() * 7 + pud.units.len() * UNIT_RECORD_SIZE;
    let mut w = Writer::with_capacity(estimate);

    section(&mut w, Section::Type, |w| {
        w.write_bytes(&MAGIC);
        w.write_bytes(&[0, 0]);
        w.write_u32_le(pud.tag);
    });
    section(&mut w, Section::Ver, |w| w.write_u16_le(pud.version));
    section(&mut w, Section::Desc, |w| w.write_bytes(&pud.description));
    section(&mut w, Section::Ownr, |w| {
        for v in pud.owners.wire() {
            w.write_u8(v);
        }
    });
    section(&mut w, Section::Era, |w| w.write_u16_le(pud.era as u16));
    if pud.has_erax() {
        section(&mut w, Section::Erax, |w| w.write_u16_le(pud.era as u16));
    }
    section(&mut w, Section::Dim, |w| {
        let (width, height) = pud.dims.size();
        w.write_u16_le(width);
        w.write_u16_le(height);
    });
    section(&mut w, Section::Udta, |w| write_udta(w, pud));
    section(&mut w, Section::Alow, |w| {
        for table in [
            &pud.unit_alow,
            &pud.spell_start,
            &pud.spell_alow,
            &pud.spell_acq,
            &pud.up_alow,
            &pud.up_acq,
        ] {
            for v in table.wire() {
                w.write_u32_le(v);
            }
        }
    });
    section(&mut w, Section::Ugrd, |w| write_ugrd(w, pud));
    section(&mut w, Section::Side, |w| {
        for v in pud.sides.wire() {
            w.write_u8(v);
        }
    });
    section(&mut w, Section::Sgld, |w| {
        for v in pud.start_gold.wire() {
            w.write_u16_le(v);
        }
    });
    section(&mut w, Section::Slbr, |w| {
        for v in pud.start_lumber.wire() {
            w.write_u16_le(v);
        }
    });
    section(&mut w, Section::Soil, |w| {
        for v in pud.start_oil.wire() {
            w.write_u16_le(v);
        }
    });
    section(&mut w, Section::Aipl, |w| {
        for v in pud.ai.wire() {
            w.write_u8(v);
        }
    });
    section(&mut w, Section::Mtxm, |w| {
        for &tile in &pud.tiles_map {
            w.write_u16_le(tile);
        }
    });
    section(&mut w, Section::Sqm, |w| {
        for &v in &pud.movement_map {
            w.write_u16_le(v);
        }
    });
    section(&mut w, Section::Oilm, |w| w.write_bytes(&pud.oil_map));
    section(&mut w, Section::Regm, |w| {
        for &v in &pud.action_map {
            w.write_u16_le(v);
        }
    });
    section(&mut w, Section::Unit, |w| {
        for unit in &pud.units {
            w.write_u16_le(unit.x);
            w.write_u16_le(unit.y);
            w.write_u8(unit.unit);
            w.write_u8(unit.owner);
            w.write_u16_le(unit.alter);
        }
    });

    debug!(bytes = w.len(), units = pud.units.len(), "serialized");
    Ok(w.into_vec())
}

/// Emit `tag | length | payload`, back-filling the length once the
/// payload closure has run.
fn section(w: &mut Writer, section: Section, payload: impl FnOnce(&mut Writer)) {
    w.write_tag(section.tag());
    let at = w.len();
    w.write_u32_le(0);
    payload(w);
    let len = (w.len() - at - 4) as u32;
    w.patch_u32_le(at, len);
}

fn write_udta(w: &mut Writer, pud: &Pud) {
    let table = &pud.unit_data;
    w.write_u16_le(u16::from(pud.udta_use_defaults));
    for entry in table.iter() {
        w.write_u16_le(entry.overlap_frames);
    }
    for &v in &pud.udta_obsolete {
        w.write_u16_le(v);
    }
    for entry in table.iter() {
        w.write_u32_le(entry.sight);
    }
    for entry in table.iter() {
        w.write_u16_le(entry.hp);
    }
    for entry in table.iter() {
        w.write_u8(entry.has_magic);
    }
    for entry in table.iter() {
        w.write_u8(entry.build_time);
    }
    for entry in table.iter() {
        w.write_u8(entry.gold_cost);
    }
    for entry in table.iter() {
        w.write_u8(entry.lumber_cost);
    }
    for entry in table.iter() {
        w.write_u8(entry.oil_cost);
    }
    for entry in table.iter() {
        w.write_u16_le(entry.size_w);
        w.write_u16_le(entry.size_h);
    }
    for entry in table.iter() {
        w.write_u16_le(entry.box_w);
        w.write_u16_le(entry.box_h);
    }
    for entry in table.iter() {
        w.write_u8(entry.range);
    }
    for entry in table.iter() {
        w.write_u8(entry.computer_react_range);
    }
    for entry in table.iter() {
        w.write_u8(entry.human_react_range);
    }
    for entry in table.iter() {
        w.write_u8(entry.armor);
    }
    for entry in table.iter() {
        w.write_u8(entry.rect_sel);
    }
    for entry in table.iter() {
        w.write_u8(entry.priority);
    }
    for entry in table.iter() {
        w.write_u8(entry.basic_damage);
    }
    for entry in table.iter() {
        w.write_u8(entry.piercing_damage);
    }
    for entry in table.iter() {
        w.write_u8(entry.weapons_upgradable);
    }
    for entry in table.iter() {
        w.write_u8(entry.armor_upgradable);
    }
    for entry in table.iter() {
        w.write_u8(entry.missile_weapon);
    }
    for entry in table.iter() {
        w.write_u8(entry.kind);
    }
    for entry in table.iter() {
        w.write_u8(entry.decay_rate);
    }
    for entry in table.iter() {
        w.write_u8(entry.annoy);
    }
    // The wire carries a right-click action for the first 58 kinds only.
    for entry in table.iter().take(58) {
        w.write_u8(entry.mouse_right_btn);
    }
    for entry in table.iter() {
        w.write_u16_le(entry.point_value);
    }
    for entry in table.iter() {
        w.write_u8(entry.can_target.bits());
    }
    for entry in table.iter() {
        w.write_u32_le(entry.flags);
    }
}

fn write_ugrd(w: &mut Writer, pud: &Pud) {
    w.write_u16_le(u16::from(pud.ugrd_use_defaults));
    for entry in &pud.upgrades {
        w.write_u8(entry.time);
    }
    for entry in &pud.upgrades {
        w.write_u16_le(entry.gold);
    }
    for entry in &pud.upgrades {
        w.write_u16_le(entry.lumber);
    }
    for entry in &pud.upgrades {
        w.write_u16_le(entry.oil);
    }
    for entry in &pud.upgrades {
        w.write_u16_le(entry.icon);
    }
    for entry in &pud.upgrades {
        w.write_u16_le(entry.group);
    }
    for entry in &pud.upgrades {
        w.write_u32_le(entry.flags);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Reader;
    use crate::model::{Dimensions, Era};

    fn section_sizes(data: &[u8]) -> Vec<([u8; 4], usize)> {
        let mut r = Reader::new(data);
        let mut out = Vec::new();
        while !r.is_empty() {
            let tag = r.read_tag().unwrap();
            let len = r.read_u32_le().unwrap() as usize;
            r.skip(len).unwrap();
            out.push((tag, len));
        }
        out
    }

    #[test]
    fn test_canonical_order_and_sizes() {
        let pud = Pud::new(Era::Forest, Dimensions::X32);
        let data = serialize(&pud).unwrap();
        let sections = section_sizes(&data);

        let tags: Vec<[u8; 4]> = sections.iter().map(|s| s.0).collect();
        assert_eq!(
            tags,
            vec![
                *b"TYPE", *b"VER ", *b"DESC", *b"OWNR", *b"ERA ", *b"DIM ",
                *b"UDTA", *b"ALOW", *b"UGRD", *b"SIDE", *b"SGLD", *b"SLBR",
                *b"SOIL", *b"AIPL", *b"MTXM", *b"SQM ", *b"OILM", *b"REGM",
                *b"UNIT",
            ]
        );

        let size_of = |tag: &[u8; 4]| sections.iter().find(|s| &s.0 == tag).unwrap().1;
        assert_eq!(size_of(b"TYPE"), 16);
        assert_eq!(size_of(b"VER "), 2);
        assert_eq!(size_of(b"DESC"), 32);
        assert_eq!(size_of(b"OWNR"), 16);
        assert_eq!(size_of(b"DIM "), 4);
        assert_eq!(size_of(b"UDTA"), 5696);
        assert_eq!(size_of(b"ALOW"), 384);
        assert_eq!(size_of(b"UGRD"), 782);
        assert_eq!(size_of(b"SGLD"), 32);
        assert_eq!(size_of(b"MTXM"), 32 * 32 * 2);
        assert_eq!(size_of(b"OILM"), 32 * 32);
        assert_eq!(size_of(b"UNIT"), 0);
    }

    #[test]
    fn test_erax_written_when_flagged() {
        let mut pud = Pud::new(Era::Swamp, Dimensions::X32);
        pud.set_erax(true);
        let data = serialize(&pud).unwrap();
        let tags: Vec<[u8; 4]> = section_sizes(&data).iter().map(|s| s.0).collect();
        assert!(tags.contains(&*b"ERAX"));
        // ERAX directly follows ERA.
        let era_at = tags.iter().position(|t| t == b"ERA ").unwrap();
        assert_eq!(tags[era_at + 1], *b"ERAX");
    }

    #[test]
    fn test_unit_count_tracks_list() {
        let mut pud = Pud::new(Era::Forest, Dimensions::X32);
        pud.add_unit(1, 1, crate::model::Player::Red, crate::model::UnitType::Footman, 0)
            .unwrap();
        pud.add_unit(2, 2, crate::model::Player::Red, crate::model::UnitType::Footman, 0)
            .unwrap();
        let data = serialize(&pud).unwrap();
        let sections = section_sizes(&data);
        let unit = sections.iter().find(|s| &s.0 == b"UNIT").unwrap();
        assert_eq!(unit.1, 2 * UNIT_RECORD_SIZE);
    }
}
