//! Static reference data seeded into every model before parsing.
//!
//! A file that omits an optional section keeps these values, so the
//! parsed model is always fully playable.

use super::{
    CanTarget, Era, Owner, Pud, Side, SlotTable, UnitCharacteristics, UnitType, Upgrade,
    UNIT_KINDS, UPGRADE_COUNT,
};

/// Fill tile for freshly authored maps: solid light ground.
pub const DEFAULT_TILE: u16 = 0x0050;

/// Starting resources for every slot, keyed by era.
pub fn starting_resources(era: Era) -> (u16, u16, u16) {
    match era {
        Era::Forest | Era::Winter | Era::Wasteland | Era::Swamp => (2000, 1000, 1000),
    }
}

/// Seed a model with the whole default store: slot configuration,
/// permissions, upgrade costs and unit characteristics.
pub fn apply(pud: &mut Pud) {
    pud.owners = SlotTable {
        players: [
            Owner::Human as u8,
            Owner::Computer as u8,
            Owner::Computer as u8,
            Owner::Computer as u8,
            Owner::Computer as u8,
            Owner::Computer as u8,
            Owner::Computer as u8,
            Owner::Computer as u8,
        ],
        unusable: [Owner::Nobody as u8; 7],
        neutral: Owner::Nobody as u8,
    };

    let mut sides = SlotTable::filled(Side::Neutral as u8);
    for (i, side) in sides.players.iter_mut().enumerate() {
        *side = if i % 2 == 0 { Side::Human as u8 } else { Side::Orc as u8 };
    }
    pud.sides = sides;

    let (gold, lumber, oil) = starting_resources(pud.era);
    pud.start_gold = SlotTable::filled(gold);
    pud.start_lumber = SlotTable::filled(lumber);
    pud.start_oil = SlotTable::filled(oil);

    pud.ai = SlotTable::filled(0x00);

    pud.unit_alow = SlotTable::filled(u32::MAX);
    pud.spell_start = SlotTable::filled(u32::MAX);
    pud.spell_alow = SlotTable::filled(u32::MAX);
    pud.spell_acq = SlotTable::filled(0);
    pud.up_alow = SlotTable::filled(u32::MAX);
    pud.up_acq = SlotTable::filled(0);

    pud.upgrades = upgrades();
    pud.unit_data = unit_characteristics();
    pud.udta_use_defaults = true;
    pud.ugrd_use_defaults = true;
}

/// One row of the builtin unit table. Secondary characteristics
/// (reaction ranges, selection, priorities) are derived from these.
struct Row {
    id: UnitType,
    hp: u16,
    armor: u8,
    sight: u8,
    basic: u8,
    piercing: u8,
    range: u8,
    /// gold / lumber / oil, in tens
    cost: (u8, u8, u8),
    time: u8,
    points: u16,
    size: (u16, u16),
    magic: u8,
}

const fn row(
    id: UnitType,
    hp: u16,
    armor: u8,
    sight: u8,
    basic: u8,
    piercing: u8,
    range: u8,
    cost: (u8, u8, u8),
    time: u8,
    points: u16,
    size: (u16, u16),
    magic: u8,
) -> Row {
    Row { id, hp, armor, sight, basic, piercing, range, cost, time, points, size, magic }
}

use UnitType as U;

#[rustfmt::skip]
static ROWS: &[Row] = &[
    //  unit                      hp  armor sight bas pier rng  (g, l, o)     time points  size  magic
    row(U::Footman,               60,  2,  4,  6,  3, 1, ( 60,  0,  0),  60,   50, (1, 1), 0),
    row(U::Grunt,                 60,  2,  4,  6,  3, 1, ( 60,  0,  0),  60,   50, (1, 1), 0),
    row(U::Peasant,               30,  0,  4,  3,  2, 1, ( 40,  0,  0),  45,   30, (1, 1), 0),
    row(U::Peon,                  30,  0,  4,  3,  2, 1, ( 40,  0,  0),  45,   30, (1, 1), 0),
    row(U::Ballista,             110,  0,  9, 80,  0, 8, ( 90, 30,  0), 250,  100, (1, 1), 0),
    row(U::Catapult,             110,  0,  9, 80,  0, 8, ( 90, 30,  0), 250,  100, (1, 1), 0),
    row(U::Knight,                90,  4,  4,  8,  4, 1, ( 80, 10,  0),  90,  100, (1, 1), 0),
    row(U::Ogre,                  90,  4,  4,  8,  4, 1, ( 80, 10,  0),  90,  100, (1, 1), 0),
    row(U::Archer,                40,  0,  5,  3,  6, 4, ( 50,  5,  0),  70,   60, (1, 1), 0),
    row(U::Axethrower,            40,  0,  5,  3,  6, 4, ( 50,  5,  0),  70,   60, (1, 1), 0),
    row(U::Mage,                  60,  0,  9,  0,  9, 2, (120,  0,  0), 120,  100, (1, 1), 1),
    row(U::DeathKnight,           60,  0,  9,  0,  9, 3, (120,  0,  0), 120,  100, (1, 1), 1),
    row(U::Paladin,               90,  4,  5,  8,  4, 1, ( 80, 10,  0),  90,  110, (1, 1), 1),
    row(U::OgreMage,              90,  4,  5,  8,  4, 1, ( 80, 10,  0),  90,  110, (1, 1), 1),
    row(U::Dwarves,               40,  0,  4,  4,  2, 1, ( 75, 25,  0), 200,  100, (1, 1), 0),
    row(U::GoblinSapper,          40,  0,  4,  4,  2, 1, ( 75, 25,  0), 200,  100, (1, 1), 0),
    row(U::AttackPeasant,         30,  0,  4,  3,  2, 1, ( 40,  0,  0),  45,   30, (1, 1), 0),
    row(U::AttackPeon,            30,  0,  4,  3,  2, 1, ( 40,  0,  0),  45,   30, (1, 1), 0),
    row(U::Ranger,                50,  0,  6,  3,  6, 4, ( 50,  5,  0),  70,   70, (1, 1), 0),
    row(U::Berserker,             50,  0,  6,  3,  6, 4, ( 50,  5,  0),  70,   70, (1, 1), 0),
    row(U::Alleria,              120,  0,  9, 10, 18, 4, (  0,  0,  0),   0,  250, (1, 1), 0),
    row(U::TeronGorefiend,       180,  0,  9,  0, 18, 3, (  0,  0,  0),   0,  250, (1, 1), 1),
    row(U::KurdranAndSkyRee,     250,  5,  6,  0, 25, 4, (  0,  0,  0),   0,  250, (1, 1), 0),
    row(U::Dentarg,              300,  4,  4, 18,  6, 1, (  0,  0,  0),   0,  250, (1, 1), 0),
    row(U::Khadgar,              120,  0,  9,  0, 16, 2, (  0,  0,  0),   0,  250, (1, 1), 1),
    row(U::GromHellscream,       240,  8,  5, 16,  6, 1, (  0,  0,  0),   0,  250, (1, 1), 0),
    row(U::HumanTanker,           90,  0,  4,  0,  0, 0, ( 40, 25,  0),  50,   40, (1, 1), 0),
    row(U::OrcTanker,             90,  0,  4,  0,  0, 0, ( 40, 25,  0),  50,   40, (1, 1), 0),
    row(U::HumanTransport,       150,  0,  4,  0,  0, 0, ( 60, 20, 50),  70,   50, (1, 1), 0),
    row(U::OrcTransport,         150,  0,  4,  0,  0, 0, ( 60, 20, 50),  70,   50, (1, 1), 0),
    row(U::ElvenDestroyer,       100, 10,  8, 35,  0, 4, ( 70, 35, 70),  90,  150, (1, 1), 0),
    row(U::TrollDestroyer,       100, 10,  8, 35,  0, 4, ( 70, 35, 70),  90,  150, (1, 1), 0),
    row(U::Battleship,           150, 15,  8,130,  0, 6, (100, 50,100), 140,  300, (1, 1), 0),
    row(U::Juggernaught,         150, 15,  8,130,  0, 6, (100, 50,100), 140,  300, (1, 1), 0),
    row(U::Deathwing,            800, 10,  6,  0, 25, 4, (  0,  0,  0),   0,  250, (1, 1), 0),
    row(U::GnomishSubmarine,      60,  0,  5, 50,  0, 4, ( 80, 15, 90), 100,  120, (1, 1), 0),
    row(U::GiantTurtle,           60,  0,  5, 50,  0, 4, ( 80, 15, 90), 100,  120, (1, 1), 0),
    row(U::GnomishFlyingMachine, 150,  2,  9,  0,  0, 0, ( 50, 10,  0),  65,   40, (1, 1), 0),
    row(U::GoblinZepplin,        150,  2,  9,  0,  0, 0, ( 50, 10,  0),  65,   40, (1, 1), 0),
    row(U::GryphonRider,         100,  5,  6,  0, 16, 4, (250,  0,  0), 250,  150, (1, 1), 0),
    row(U::Dragon,               100,  5,  6,  0, 16, 4, (250,  0,  0), 250,  150, (1, 1), 0),
    row(U::Turalyon,             180,  6,  5, 14,  8, 1, (  0,  0,  0),   0,  250, (1, 1), 1),
    row(U::EyeOfKilrogg,         100,  0,  3,  0,  0, 0, (  0,  0,  0),   0,    2, (1, 1), 0),
    row(U::Danath,               220,  8,  4, 15,  8, 1, (  0,  0,  0),   0,  250, (1, 1), 0),
    row(U::KargathBladefist,     240,  8,  4, 16,  6, 1, (  0,  0,  0),   0,  250, (1, 1), 0),
    row(U::ChoGall,              180,  4,  5, 10,  7, 1, (  0,  0,  0),   0,  250, (1, 1), 1),
    row(U::Lothar,               200,  8,  5, 15,  8, 1, (  0,  0,  0),   0,  250, (1, 1), 0),
    row(U::GulDan,               120,  0,  9,  0, 16, 2, (  0,  0,  0),   0,  250, (1, 1), 1),
    row(U::UtherLightbringer,    180,  6,  5, 14,  8, 1, (  0,  0,  0),   0,  250, (1, 1), 1),
    row(U::ZulJin,               150,  0,  7,  5, 18, 5, (  0,  0,  0),   0,  250, (1, 1), 0),
    row(U::Skeleton,              40,  0,  3,  6,  2, 1, (  0,  0,  0),   0,    0, (1, 1), 0),
    row(U::Daemon,               100,  0,  5, 10,  5, 1, (  0,  0,  0),   0,  100, (1, 1), 0),
    row(U::Critter,                5,  0,  2,  0,  0, 0, (  0,  0,  0),   0,    1, (1, 1), 0),
    row(U::Farm,                 400, 20,  3,  0,  0, 0, ( 50, 25,  0), 100,  100, (2, 2), 0),
    row(U::PigFarm,              400, 20,  3,  0,  0, 0, ( 50, 25,  0), 100,  100, (2, 2), 0),
    row(U::HumanBarracks,        800, 20,  3,  0,  0, 0, ( 70, 45,  0), 200,  160, (3, 3), 0),
    row(U::OrcBarracks,          800, 20,  3,  0,  0, 0, ( 70, 45,  0), 200,  160, (3, 3), 0),
    row(U::Church,               700, 20,  3,  0,  0, 0, ( 90, 50,  0), 175,  150, (3, 3), 0),
    row(U::AltarOfStorms,        700, 20,  3,  0,  0, 0, ( 90, 50,  0), 175,  150, (3, 3), 0),
    row(U::HumanScoutTower,      100, 20,  9,  0,  0, 0, ( 55, 20,  0),  60,   95, (2, 2), 0),
    row(U::OrcScoutTower,        100, 20,  9,  0,  0, 0, ( 55, 20,  0),  60,   95, (2, 2), 0),
    row(U::Stables,              500, 20,  3,  0,  0, 0, (100, 30,  0), 150,  210, (3, 3), 0),
    row(U::OgreMound,            500, 20,  3,  0,  0, 0, (100, 30,  0), 150,  210, (3, 3), 0),
    row(U::GnomishInventor,      500, 20,  3,  0,  0, 0, (100, 40,  0), 150,  230, (3, 3), 0),
    row(U::GoblinAlchemist,      500, 20,  3,  0,  0, 0, (100, 40,  0), 150,  230, (3, 3), 0),
    row(U::GryphonAviary,        500, 20,  3,  0,  0, 0, (100, 40,  0), 150,  280, (3, 3), 0),
    row(U::DragonRoost,          500, 20,  3,  0,  0, 0, (100, 40,  0), 150,  280, (3, 3), 0),
    row(U::HumanShipyard,       1100, 20,  3,  0,  0, 0, ( 80, 45,  0), 200,  170, (3, 3), 0),
    row(U::OrcShipyard,         1100, 20,  3,  0,  0, 0, ( 80, 45,  0), 200,  170, (3, 3), 0),
    row(U::TownHall,            1200, 20,  4,  0,  0, 0, (120, 80,  0), 255,  200, (4, 4), 0),
    row(U::GreatHall,           1200, 20,  4,  0,  0, 0, (120, 80,  0), 255,  200, (4, 4), 0),
    row(U::ElvenLumberMill,      600, 20,  3,  0,  0, 0, ( 60, 45,  0), 150,  150, (3, 3), 0),
    row(U::TrollLumberMill,      600, 20,  3,  0,  0, 0, ( 60, 45,  0), 150,  150, (3, 3), 0),
    row(U::HumanFoundry,         750, 20,  3,  0,  0, 0, ( 70, 40, 40), 175,  200, (3, 3), 0),
    row(U::OrcFoundry,           750, 20,  3,  0,  0, 0, ( 70, 40, 40), 175,  200, (3, 3), 0),
    row(U::MageTower,            500, 20,  3,  0,  0, 0, (100, 20,  0), 125,  240, (3, 3), 0),
    row(U::TempleOfTheDamned,    500, 20,  3,  0,  0, 0, (100, 20,  0), 125,  240, (3, 3), 0),
    row(U::HumanBlacksmith,      775, 20,  3,  0,  0, 0, ( 80, 45, 10), 200,  170, (3, 3), 0),
    row(U::OrcBlacksmith,        775, 20,  3,  0,  0, 0, ( 80, 45, 10), 200,  170, (3, 3), 0),
    row(U::HumanRefinery,        600, 20,  3,  0,  0, 0, ( 80, 35, 20), 225,  200, (3, 3), 0),
    row(U::OrcRefinery,          600, 20,  3,  0,  0, 0, ( 80, 35, 20), 225,  200, (3, 3), 0),
    row(U::HumanOilWell,         650, 20,  3,  0,  0, 0, ( 70, 45,  0), 200,  160, (3, 3), 0),
    row(U::OrcOilWell,           650, 20,  3,  0,  0, 0, ( 70, 45,  0), 200,  160, (3, 3), 0),
    row(U::Keep,                1400, 20,  6,  0,  0, 0, (200,100, 20), 200,  600, (4, 4), 0),
    row(U::Stronghold,          1400, 20,  6,  0,  0, 0, (200,100, 20), 200,  600, (4, 4), 0),
    row(U::Castle,              1600, 20,  9,  0,  0, 0, (250,120, 50), 200, 1500, (4, 4), 0),
    row(U::Fortress,            1600, 20,  9,  0,  0, 0, (250,120, 50), 200, 1500, (4, 4), 0),
    row(U::GoldMine,           25500, 20,  0,  0,  0, 0, (  0,  0,  0), 150,    0, (3, 3), 0),
    row(U::OilPatch,               0,  0,  0,  0,  0, 0, (  0,  0,  0),   0,    0, (3, 3), 0),
    row(U::HumanStart,             0,  0,  0,  0,  0, 0, (  0,  0,  0),   0,    0, (1, 1), 0),
    row(U::OrcStart,               0,  0,  0,  0,  0, 0, (  0,  0,  0),   0,    0, (1, 1), 0),
    row(U::HumanGuardTower,      130, 20,  9,  4, 12, 6, ( 50, 15,  0), 140,  200, (2, 2), 0),
    row(U::OrcGuardTower,        130, 20,  9,  4, 12, 6, ( 50, 15,  0), 140,  200, (2, 2), 0),
    row(U::HumanCannonTower,     160, 20,  9, 50,  0, 7, (100, 30,  0), 190,  250, (2, 2), 0),
    row(U::OrcCannonTower,       160, 20,  9, 50,  0, 7, (100, 30,  0), 190,  250, (2, 2), 0),
    row(U::CircleOfPower,          0,  0,  0,  0,  0, 0, (  0,  0,  0),   0,    0, (2, 2), 0),
    row(U::DarkPortal,          5000, 20,  4,  0,  0, 0, (  0,  0,  0),   0,    0, (4, 4), 0),
    row(U::Runestone,           5000, 15,  4,  0,  0, 0, (  0,  0,  0),   0,    0, (2, 2), 0),
    row(U::HumanWall,             40, 20,  1,  0,  0, 0, ( 20, 10,  0),  30,    1, (1, 1), 0),
    row(U::OrcWall,               40, 20,  1,  0,  0, 0, ( 20, 10,  0),  30,    1, (1, 1), 0),
    row(U::CritterSheep,           5,  0,  2,  0,  0, 0, (  0,  0,  0),   0,    1, (1, 1), 0),
    row(U::CritterPig,             5,  0,  2,  0,  0, 0, (  0,  0,  0),   0,    1, (1, 1), 0),
    row(U::CritterSeal,            5,  0,  2,  0,  0, 0, (  0,  0,  0),   0,    1, (1, 1), 0),
    row(U::CritterRedPig,          5,  0,  2,  0,  0, 0, (  0,  0,  0),   0,    1, (1, 1), 0),
];

fn can_target_of(unit: UnitType, basic: u8, piercing: u8, range: u8) -> CanTarget {
    if basic == 0 && piercing == 0 {
        return CanTarget::empty();
    }
    if unit.is_underwater() {
        return CanTarget::SEA;
    }
    let mut mask = CanTarget::LAND | CanTarget::SEA;
    // Ranged attackers and fliers can shoot at air.
    if range > 1 && !matches!(unit, U::Ballista | U::Catapult | U::HumanCannonTower | U::OrcCannonTower) {
        mask |= CanTarget::AIR;
    }
    if unit.is_flying() {
        mask |= CanTarget::AIR;
    }
    mask
}

/// The builtin characteristics of all 110 unit kinds. Ids that carry no
/// unit (the gaps in the id space) stay zeroed.
pub fn unit_characteristics() -> Box<[UnitCharacteristics; UNIT_KINDS]> {
    let mut table = Box::new([UnitCharacteristics::default(); UNIT_KINDS]);
    for r in ROWS {
        let kind = if r.id.is_flying() {
            1
        } else if r.id.is_boat() {
            2
        } else {
            0
        };
        table[r.id as usize] = UnitCharacteristics {
            overlap_frames: 0,
            sight: r.sight as u32,
            hp: r.hp,
            has_magic: r.magic,
            build_time: r.time,
            gold_cost: r.cost.0,
            lumber_cost: r.cost.1,
            oil_cost: r.cost.2,
            size_w: r.size.0,
            size_h: r.size.1,
            box_w: r.size.0 * 32,
            box_h: r.size.1 * 32,
            range: r.range,
            computer_react_range: r.sight,
            human_react_range: r.sight.saturating_sub(1).max(1),
            armor: r.armor,
            rect_sel: u8::from(!r.id.is_building()),
            priority: if r.id.is_building() { 20 } else { 60 },
            basic_damage: r.basic,
            piercing_damage: r.piercing,
            weapons_upgradable: u8::from(r.basic + r.piercing > 0 && !r.id.is_building()),
            armor_upgradable: u8::from(!r.id.is_building() && r.armor > 0),
            missile_weapon: 0,
            kind,
            decay_rate: if r.id == U::Skeleton { 45 } else { 0 },
            annoy: 0,
            mouse_right_btn: 0,
            point_value: r.points,
            can_target: can_target_of(r.id, r.basic, r.piercing, r.range),
            flags: 0,
        };
    }
    table
}

#[rustfmt::skip]
static UPGRADE_ROWS: [(u8, u16, u16, u16); UPGRADE_COUNT] = [
    // time  gold  lumber  oil          upgrade
    (200,  800,    0,   0), // sword 1
    (250, 2400,    0,   0), // sword 2
    (200,  500,  100,   0), // axe 1
    (250, 1500,  300,   0), // axe 2
    (200,  300,  300,   0), // arrow 1
    (250,  900,  500,   0), // arrow 2
    (200,  500,  100,   0), // spear 1
    (250, 1300,  500,   0), // spear 2
    (200,  300,  300,   0), // human shield 1
    (250,  900,  500,   0), // human shield 2
    (200,  300,  300,   0), // orc shield 1
    (250,  900,  500,   0), // orc shield 2
    (200,  700,  100,   0), // human ship cannon 1
    (250, 2000,  250,   0), // human ship cannon 2
    (200,  700,  100,   0), // orc ship cannon 1
    (250, 2000,  250,   0), // orc ship cannon 2
    (200,  500,  500,   0), // human ship armor 1
    (250, 1500,  900,   0), // human ship armor 2
    (200,  500,  500,   0), // orc ship armor 1
    (250, 1500,  900,   0), // orc ship armor 2
    (250, 1500,    0,   0), // catapult 1
    (250, 4000,    0,   0), // catapult 2
    (250, 1500,    0,   0), // ballista 1
    (250, 4000,    0,   0), // ballista 2
    (250, 1500,    0,   0), // train rangers
    (250, 2000,    0,   0), // longbow
    (250, 1500,    0,   0), // ranger scouting
    (250, 2500,    0,   0), // ranger marksmanship
    (250, 1500,    0,   0), // train berserkers
    (250, 2000,    0,   0), // lighter axes
    (250, 1500,    0,   0), // berserker scouting
    (250, 3000,    0,   0), // berserker regeneration
    (250, 1000,    0,   0), // train ogre-mages
    (250, 1000,    0,   0), // train paladins
    ( 70,    0,    0,   0), // holy vision
    (200, 1000,    0,   0), // healing
    (200, 2000,    0,   0), // exorcism
    (100, 1000,    0,   0), // flame shield
    (100, 1000,    0,   0), // fireball
    (100,  500,    0,   0), // slow
    (200, 2500,    0,   0), // invisibility
    (200, 2000,    0,   0), // polymorph
    (200, 2000,    0,   0), // blizzard
    (200, 1000,    0,   0), // eye of kilrogg
    (100, 1000,    0,   0), // bloodlust
    (150, 1500,    0,   0), // raise dead
    (100, 1000,    0,   0), // death coil
    (150, 1500,    0,   0), // whirlwind
    (100,  500,    0,   0), // haste
    (200, 2500,    0,   0), // unholy armor
    (150, 1000,    0,   0), // runes
    (200, 2000,    0,   0), // death and decay
];

/// First icon id of the upgrade strip in the icon sheet; upgrades use
/// consecutive icons from there.
const UPGRADE_ICON_BASE: u16 = 117;

/// The builtin upgrade table. The first 24 entries are the paired
/// weapon/armor upgrades; pairs share an exclusivity group.
pub fn upgrades() -> [Upgrade; UPGRADE_COUNT] {
    let mut table = [Upgrade::default(); UPGRADE_COUNT];
    for (i, &(time, gold, lumber, oil)) in UPGRADE_ROWS.iter().enumerate() {
        let group = if i < 24 { (i / 2) as u16 } else { (i - 12) as u16 };
        table[i] = Upgrade {
            time,
            gold,
            lumber,
            oil,
            icon: UPGRADE_ICON_BASE + i as u16,
            group,
            flags: 0,
        };
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_unit_has_a_row() {
        let mut covered = 0;
        for id in 0..=0x6cu8 {
            if let Some(unit) = UnitType::from_u8(id) {
                assert!(
                    ROWS.iter().any(|r| r.id == unit),
                    "no default row for {unit:?}"
                );
                covered += 1;
            }
        }
        assert_eq!(covered, ROWS.len());
    }

    #[test]
    fn test_characteristics_shape() {
        let table = unit_characteristics();
        assert_eq!(table.len(), UNIT_KINDS);

        let footman = table[UnitType::Footman as usize];
        assert_eq!(footman.hp, 60);
        assert_eq!(footman.armor, 2);
        assert_eq!(footman.can_target, CanTarget::LAND | CanTarget::SEA);
        assert_eq!(footman.kind, 0);

        let dragon = table[UnitType::Dragon as usize];
        assert_eq!(dragon.kind, 1);
        assert!(dragon.can_target.contains(CanTarget::AIR));

        let sub = table[UnitType::GnomishSubmarine as usize];
        assert_eq!(sub.kind, 2);
        assert_eq!(sub.can_target, CanTarget::SEA);

        // Gap ids stay zeroed.
        assert_eq!(table[0x22], UnitCharacteristics::default());
    }

    #[test]
    fn test_upgrade_groups_pair_weapon_upgrades() {
        let table = upgrades();
        assert_eq!(table[0].group, table[1].group);
        assert_eq!(table[22].group, table[23].group);
        assert_ne!(table[0].group, table[2].group);
        // Spells are exclusive to themselves.
        assert_ne!(table[34].group, table[35].group);
        assert!(table.iter().all(|u| u.time > 0));
    }

    #[test]
    fn test_resources_keyed_by_era() {
        for era in [Era::Forest, Era::Winter, Era::Wasteland, Era::Swamp] {
            assert_eq!(starting_resources(era), (2000, 1000, 1000));
        }
    }
}
