//! End-to-end properties: write-then-parse fidelity, defaults, file IO.

use pud::{
    parse, serialize, Dimensions, Era, Error, OpenMode, Owner, Player, Pud, Section,
    UnitType, Validation, VERSION_BDP,
};

fn reparse(pud: &mut Pud) -> Pud {
    let bytes = pud.to_bytes().expect("serialize");
    let mut out = Pud::new(Era::Forest, Dimensions::X32);
    parse(&mut out, &bytes).expect("parse");
    out
}

fn temp_path(name: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("pud-test-{}-{name}", std::process::id()));
    path
}

#[test]
fn roundtrip_preserves_everything_but_the_tag() {
    let mut map = Pud::new(Era::Winter, Dimensions::X96);
    map.set_version(VERSION_BDP);
    map.set_description("roundtrip");
    map.start_gold.players[3] = 5000;
    map.owners.unusable[2] = 0x42; // reserved slots survive verbatim
    map.tile_set(1, 1, 0x0070).unwrap();
    map.tile_set(95, 95, 0x0022).unwrap();
    map.add_unit(4, 5, Player::Red, UnitType::HumanStart, 0).unwrap();
    map.add_unit(90, 90, Player::Blue, UnitType::OrcStart, 0).unwrap();
    map.add_unit(40, 40, Player::Neutral, UnitType::GoldMine, 25).unwrap();

    let out = reparse(&mut map);

    assert_eq!(out.version, map.version);
    assert_eq!(out.description_str(), "roundtrip");
    assert_eq!(out.era, Era::Winter);
    assert_eq!(out.dims, Dimensions::X96);
    assert_eq!(out.owners, map.owners);
    assert_eq!(out.sides, map.sides);
    assert_eq!(out.start_gold, map.start_gold);
    assert_eq!(out.start_lumber, map.start_lumber);
    assert_eq!(out.start_oil, map.start_oil);
    assert_eq!(out.ai, map.ai);
    assert_eq!(out.unit_alow, map.unit_alow);
    assert_eq!(out.up_alow, map.up_alow);
    assert_eq!(out.tiles_map, map.tiles_map);
    assert_eq!(out.movement_map, map.movement_map);
    assert_eq!(out.action_map, map.action_map);
    assert_eq!(out.oil_map, map.oil_map);
    assert_eq!(out.units, map.units);
}

#[test]
fn roundtrip_unit_records_field_for_field() {
    // Scenario: description, version A, winter era, three units.
    let mut map = Pud::new(Era::Winter, Dimensions::X64);
    map.set_description("Test Map");
    map.add_unit(3, 4, Player::Red, UnitType::HumanStart, 0).unwrap();
    map.add_unit(60, 61, Player::Blue, UnitType::OrcStart, 0).unwrap();
    map.add_unit(30, 31, Player::Red, UnitType::Peasant, 0).unwrap();

    let out = reparse(&mut map);
    assert_eq!(out.units.len(), 3);
    for (a, b) in out.units.iter().zip(&map.units) {
        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y);
        assert_eq!(a.unit, b.unit);
        assert_eq!(a.owner, b.owner);
        assert_eq!(a.alter, b.alter);
    }
    assert_eq!(out.description_str(), "Test Map");
}

#[test]
fn tag_is_regenerated_not_preserved() {
    let mut map = Pud::new(Era::Forest, Dimensions::X32);
    map.set_tag(0xdead_beef);
    let out = reparse(&mut map);
    // to_bytes regenerates from content, so the stored constant is gone.
    assert_ne!(out.tag, 0xdead_beef);
    assert_eq!(out.tag, map.tag);
}

#[test]
fn defaults_survive_when_optional_sections_are_omitted() {
    let mut map = Pud::new(Era::Forest, Dimensions::X32);
    let bytes = map.to_bytes().unwrap();

    // Strip every optional section from the stream.
    let mut lean = Vec::new();
    let mut r = pud::Reader::new(&bytes);
    while !r.is_empty() {
        let tag = r.read_tag().unwrap();
        let len = r.read_u32_le().unwrap() as usize;
        let payload = r.read_bytes(len).unwrap();
        let keep = match Section::from_tag(tag) {
            Some(section) => !section.is_optional(),
            None => true,
        };
        if keep {
            lean.extend_from_slice(&tag);
            lean.extend_from_slice(&(len as u32).to_le_bytes());
            lean.extend_from_slice(payload);
        }
    }

    let mut out = Pud::new(Era::Forest, Dimensions::X32);
    parse(&mut out, &lean).expect("mandatory sections all present");

    let (gold, lumber, oil) = pud::model::defaults::starting_resources(out.era);
    for player in Player::COLORS {
        assert_eq!(out.start_gold.of(player), gold);
        assert_eq!(out.start_lumber.of(player), lumber);
        assert_eq!(out.start_oil.of(player), oil);
    }
    assert_eq!(*out.unit_data, *pud::model::defaults::unit_characteristics());
    assert_eq!(out.upgrades, pud::model::defaults::upgrades());
}

#[test]
fn write_and_reopen_through_the_filesystem() {
    let path = temp_path("reopen.pud");

    let mut map = Pud::new(Era::Wasteland, Dimensions::X32);
    map.set_description("disk");
    map.add_unit(2, 2, Player::Red, UnitType::HumanStart, 0).unwrap();
    map.add_unit(30, 30, Player::Blue, UnitType::OrcStart, 0).unwrap();
    map.write(Some(&path)).expect("write");

    let mut back = Pud::open(&path, OpenMode::READ).expect("open");
    back.parse().expect("parse");
    assert_eq!(back.description_str(), "disk");
    assert_eq!(back.era, Era::Wasteland);
    assert_eq!(back.units.len(), 2);
    assert_eq!(back.check(), Ok(()));
    for section in Section::ALL {
        if !section.is_optional() {
            assert!(back.section_present(section), "{section} missing");
        }
    }

    std::fs::remove_file(&path).ok();
}

#[test]
fn read_only_models_refuse_to_write() {
    let path = temp_path("readonly.pud");
    let mut map = Pud::new(Era::Forest, Dimensions::X32);
    map.write(Some(&path)).unwrap();

    let mut back = Pud::open(&path, OpenMode::READ).unwrap();
    back.parse().unwrap();
    assert!(matches!(back.write(Some(&path)), Err(Error::ReadOnly)));

    std::fs::remove_file(&path).ok();
}

#[test]
fn fresh_map_with_two_start_locations_is_valid() {
    let mut map = Pud::new(Era::Forest, Dimensions::X32);
    map.add_unit(2, 2, Player::Red, UnitType::HumanStart, 0).unwrap();
    map.add_unit(29, 29, Player::Blue, UnitType::OrcStart, 0).unwrap();
    assert_eq!(map.check(), Ok(()));

    map.units.pop();
    assert_eq!(map.check(), Err(Validation::NotEnoughStartLocations { count: 1 }));
}

#[test]
fn nine_start_locations_is_too_many() {
    let mut map = Pud::new(Era::Forest, Dimensions::X32);
    for i in 0..9u16 {
        let player = Player::from_u8((i % 8) as u8).unwrap();
        map.add_unit(i, 0, player, UnitType::OrcStart, 0).unwrap();
    }
    assert_eq!(map.check(), Err(Validation::TooManyStartLocations { count: 9 }));
}

#[test]
fn parsed_model_reports_playability_without_losing_state() {
    let mut map = Pud::new(Era::Forest, Dimensions::X32);
    map.owners.players[1] = Owner::Nobody as u8;
    map.add_unit(2, 2, Player::Red, UnitType::HumanStart, 0).unwrap();
    map.add_unit(5, 5, Player::Blue, UnitType::Grunt, 0).unwrap();
    map.add_unit(29, 29, Player::Red, UnitType::OrcStart, 0).unwrap();

    let mut out = reparse(&mut map);
    assert_eq!(out.check(), Err(Validation::EmptyPlayer { player: Player::Blue }));

    // The model stays editable after a failed check.
    out.owners.players[1] = Owner::Computer as u8;
    assert_eq!(out.check(), Ok(()));
}

#[test]
fn serialize_is_deterministic() {
    let mut a = Pud::new(Era::Swamp, Dimensions::X64);
    a.add_unit(1, 2, Player::Green, UnitType::Farm, 0).unwrap();
    a.generate_tag();
    let first = serialize(&a).unwrap();
    let second = serialize(&a).unwrap();
    assert_eq!(first, second);
}
