use bitflags::bitflags;

/// The two format versions recognized on the wire.
pub const VERSION_TOD: u16 = 0x0011;
pub const VERSION_BDP: u16 = 0x0013;

/// Number of player slots serialized in every per-player section.
pub const SLOT_COUNT: usize = 16;
/// Active player slots (indices 0..8).
pub const ACTIVE_PLAYERS: usize = 8;
/// Reserved slots (indices 8..15), preserved verbatim, never played.
pub const RESERVED_SLOTS: usize = 7;
/// Index of the neutral slot.
pub const NEUTRAL_SLOT: usize = 15;

/// Entries in the unit characteristics table.
pub const UNIT_KINDS: usize = 110;
/// Entries in the upgrade table.
pub const UPGRADE_COUNT: usize = 52;

bitflags! {
    /// File open mode. Parsing requires read access, writing requires
    /// write access.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpenMode: u8 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
    }
}

impl OpenMode {
    pub const READ_WRITE: OpenMode = OpenMode::READ.union(OpenMode::WRITE);
}

bitflags! {
    /// What a unit's attacks may hit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CanTarget: u8 {
        const LAND = 1 << 0;
        const SEA = 1 << 1;
        const AIR = 1 << 2;
    }
}

impl Default for CanTarget {
    fn default() -> Self {
        CanTarget::empty()
    }
}

/// Terrain and palette theme of a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Era {
    #[default]
    Forest = 0,
    Winter = 1,
    Wasteland = 2,
    Swamp = 3,
}

impl Era {
    pub fn from_u16(v: u16) -> Option<Self> {
        match v {
            0 => Some(Era::Forest),
            1 => Some(Era::Winter),
            2 => Some(Era::Wasteland),
            3 => Some(Era::Swamp),
            _ => None,
        }
    }
}

/// The four legal map sizes. PUD maps are always square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Dimensions {
    #[default]
    X32 = 1,
    X64 = 2,
    X96 = 3,
    X128 = 4,
}

impl Dimensions {
    pub fn size(self) -> (u16, u16) {
        match self {
            Dimensions::X32 => (32, 32),
            Dimensions::X64 => (64, 64),
            Dimensions::X96 => (96, 96),
            Dimensions::X128 => (128, 128),
        }
    }

    pub fn tiles(self) -> usize {
        let (w, h) = self.size();
        w as usize * h as usize
    }

    pub fn from_size(w: u16, h: u16) -> Option<Self> {
        match (w, h) {
            (32, 32) => Some(Dimensions::X32),
            (64, 64) => Some(Dimensions::X64),
            (96, 96) => Some(Dimensions::X96),
            (128, 128) => Some(Dimensions::X128),
            _ => None,
        }
    }
}

/// An active player color or the neutral slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Red = 0,
    Blue = 1,
    Green = 2,
    Violet = 3,
    Orange = 4,
    Black = 5,
    White = 6,
    Yellow = 7,
    Neutral = 15,
}

impl Player {
    pub const COLORS: [Player; 8] = [
        Player::Red,
        Player::Blue,
        Player::Green,
        Player::Violet,
        Player::Orange,
        Player::Black,
        Player::White,
        Player::Yellow,
    ];

    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Player::Red),
            1 => Some(Player::Blue),
            2 => Some(Player::Green),
            3 => Some(Player::Violet),
            4 => Some(Player::Orange),
            5 => Some(Player::Black),
            6 => Some(Player::White),
            7 => Some(Player::Yellow),
            15 => Some(Player::Neutral),
            _ => None,
        }
    }
}

/// Who controls a player slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Owner {
    Nobody = 0x03,
    PassiveComputer = 0x02,
    Computer = 0x04,
    Human = 0x05,
    RescuePassive = 0x06,
    RescueActive = 0x07,
}

impl Owner {
    /// Map a wire byte to an owner kind. Several codes alias in files
    /// produced by the retail editor; unknown codes map to `None`.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0x00 | 0x03 => Some(Owner::Nobody),
            0x01 | 0x04 => Some(Owner::Computer),
            0x02 => Some(Owner::PassiveComputer),
            0x05 | 0x08 => Some(Owner::Human),
            0x06 => Some(Owner::RescuePassive),
            0x07 => Some(Owner::RescueActive),
            _ => None,
        }
    }
}

/// A player slot's faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Human = 0x00,
    Orc = 0x01,
    Neutral = 0x02,
}

impl Side {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0x00 => Some(Side::Human),
            0x01 => Some(Side::Orc),
            0x02 => Some(Side::Neutral),
            _ => None,
        }
    }
}

/// AI behavior script attached to a computer slot.
///
/// The wire byte space is sparse: a handful of fixed scripts, two
/// interleaved campaign ranges, a block of expansion scenarios, and
/// gaps. Gaps decode to `Unmapped` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ai {
    LandAttack,
    Passive,
    SeaAttack,
    AirAttack,
    /// Orc campaign mission (3..=13)
    OrcCampaign(u8),
    /// Human campaign mission (4..=13)
    HumanCampaign(u8),
    Human14Red,
    Human14White,
    Human14Black,
    Orc14Green,
    Orc14White,
    /// Expansion scenario script (1..=51)
    Expansion(u8),
    /// Reserved or unknown wire value, preserved as-is
    Unmapped(u8),
}

impl Ai {
    pub fn from_u8(v: u8) -> Self {
        match v {
            0x00 => Ai::LandAttack,
            0x01 => Ai::Passive,
            0x19 => Ai::SeaAttack,
            0x1a => Ai::AirAttack,
            0x02..=0x16 if v % 2 == 0 => Ai::OrcCampaign(v / 2 + 2),
            0x03..=0x15 => Ai::HumanCampaign((v + 5) / 2),
            0x1b => Ai::Human14Red,
            0x1c => Ai::Human14White,
            0x1d => Ai::Human14Black,
            0x1e => Ai::Orc14Green,
            0x1f => Ai::Orc14White,
            0x20..=0x52 => Ai::Expansion(v - 0x1f),
            _ => Ai::Unmapped(v),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Ai::LandAttack => 0x00,
            Ai::Passive => 0x01,
            Ai::SeaAttack => 0x19,
            Ai::AirAttack => 0x1a,
            Ai::OrcCampaign(n) => (n - 2) * 2,
            Ai::HumanCampaign(n) => n * 2 - 5,
            Ai::Human14Red => 0x1b,
            Ai::Human14White => 0x1c,
            Ai::Human14Black => 0x1d,
            Ai::Orc14Green => 0x1e,
            Ai::Orc14White => 0x1f,
            Ai::Expansion(n) => n + 0x1f,
            Ai::Unmapped(v) => v,
        }
    }
}

/// RGBA color used by the minimap renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }
}

/// Every unit and building type addressable by a unit record.
///
/// Wire ids 0x00..=0x6c with gaps (0x22, 0x24, 0x25, 0x30, 0x36); ids
/// 0x69..=0x6c are editor extensions for specific critters. Gap values
/// survive in unit records as raw bytes and simply fail typed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UnitType {
    Footman = 0x00,
    Grunt = 0x01,
    Peasant = 0x02,
    Peon = 0x03,
    Ballista = 0x04,
    Catapult = 0x05,
    Knight = 0x06,
    Ogre = 0x07,
    Archer = 0x08,
    Axethrower = 0x09,
    Mage = 0x0a,
    DeathKnight = 0x0b,
    Paladin = 0x0c,
    OgreMage = 0x0d,
    Dwarves = 0x0e,
    GoblinSapper = 0x0f,
    AttackPeasant = 0x10,
    AttackPeon = 0x11,
    Ranger = 0x12,
    Berserker = 0x13,
    Alleria = 0x14,
    TeronGorefiend = 0x15,
    KurdranAndSkyRee = 0x16,
    Dentarg = 0x17,
    Khadgar = 0x18,
    GromHellscream = 0x19,
    HumanTanker = 0x1a,
    OrcTanker = 0x1b,
    HumanTransport = 0x1c,
    OrcTransport = 0x1d,
    ElvenDestroyer = 0x1e,
    TrollDestroyer = 0x1f,
    Battleship = 0x20,
    Juggernaught = 0x21,
    Deathwing = 0x23,
    GnomishSubmarine = 0x26,
    GiantTurtle = 0x27,
    GnomishFlyingMachine = 0x28,
    GoblinZepplin = 0x29,
    GryphonRider = 0x2a,
    Dragon = 0x2b,
    Turalyon = 0x2c,
    EyeOfKilrogg = 0x2d,
    Danath = 0x2e,
    KargathBladefist = 0x2f,
    ChoGall = 0x31,
    Lothar = 0x32,
    GulDan = 0x33,
    UtherLightbringer = 0x34,
    ZulJin = 0x35,
    Skeleton = 0x37,
    Daemon = 0x38,
    Critter = 0x39,
    Farm = 0x3a,
    PigFarm = 0x3b,
    HumanBarracks = 0x3c,
    OrcBarracks = 0x3d,
    Church = 0x3e,
    AltarOfStorms = 0x3f,
    HumanScoutTower = 0x40,
    OrcScoutTower = 0x41,
    Stables = 0x42,
    OgreMound = 0x43,
    GnomishInventor = 0x44,
    GoblinAlchemist = 0x45,
    GryphonAviary = 0x46,
    DragonRoost = 0x47,
    HumanShipyard = 0x48,
    OrcShipyard = 0x49,
    TownHall = 0x4a,
    GreatHall = 0x4b,
    ElvenLumberMill = 0x4c,
    TrollLumberMill = 0x4d,
    HumanFoundry = 0x4e,
    OrcFoundry = 0x4f,
    MageTower = 0x50,
    TempleOfTheDamned = 0x51,
    HumanBlacksmith = 0x52,
    OrcBlacksmith = 0x53,
    HumanRefinery = 0x54,
    OrcRefinery = 0x55,
    HumanOilWell = 0x56,
    OrcOilWell = 0x57,
    Keep = 0x58,
    Stronghold = 0x59,
    Castle = 0x5a,
    Fortress = 0x5b,
    GoldMine = 0x5c,
    OilPatch = 0x5d,
    HumanStart = 0x5e,
    OrcStart = 0x5f,
    HumanGuardTower = 0x60,
    OrcGuardTower = 0x61,
    HumanCannonTower = 0x62,
    OrcCannonTower = 0x63,
    CircleOfPower = 0x64,
    DarkPortal = 0x65,
    Runestone = 0x66,
    HumanWall = 0x67,
    OrcWall = 0x68,
    CritterSheep = 0x69,
    CritterPig = 0x6a,
    CritterSeal = 0x6b,
    CritterRedPig = 0x6c,
}

impl UnitType {
    pub fn from_u8(v: u8) -> Option<Self> {
        use UnitType::*;
        Some(match v {
            0x00 => Footman,
            0x01 => Grunt,
            0x02 => Peasant,
            0x03 => Peon,
            0x04 => Ballista,
            0x05 => Catapult,
            0x06 => Knight,
            0x07 => Ogre,
            0x08 => Archer,
            0x09 => Axethrower,
            0x0a => Mage,
            0x0b => DeathKnight,
            0x0c => Paladin,
            0x0d => OgreMage,
            0x0e => Dwarves,
            0x0f => GoblinSapper,
            0x10 => AttackPeasant,
            0x11 => AttackPeon,
            0x12 => Ranger,
            0x13 => Berserker,
            0x14 => Alleria,
            0x15 => TeronGorefiend,
            0x16 => KurdranAndSkyRee,
            0x17 => Dentarg,
            0x18 => Khadgar,
            0x19 => GromHellscream,
            0x1a => HumanTanker,
            0x1b => OrcTanker,
            0x1c => HumanTransport,
            0x1d => OrcTransport,
            0x1e => ElvenDestroyer,
            0x1f => TrollDestroyer,
            0x20 => Battleship,
            0x21 => Juggernaught,
            0x23 => Deathwing,
            0x26 => GnomishSubmarine,
            0x27 => GiantTurtle,
            0x28 => GnomishFlyingMachine,
            0x29 => GoblinZepplin,
            0x2a => GryphonRider,
            0x2b => Dragon,
            0x2c => Turalyon,
            0x2d => EyeOfKilrogg,
            0x2e => Danath,
            0x2f => KargathBladefist,
            0x31 => ChoGall,
            0x32 => Lothar,
            0x33 => GulDan,
            0x34 => UtherLightbringer,
            0x35 => ZulJin,
            0x37 => Skeleton,
            0x38 => Daemon,
            0x39 => Critter,
            0x3a => Farm,
            0x3b => PigFarm,
            0x3c => HumanBarracks,
            0x3d => OrcBarracks,
            0x3e => Church,
            0x3f => AltarOfStorms,
            0x40 => HumanScoutTower,
            0x41 => OrcScoutTower,
            0x42 => Stables,
            0x43 => OgreMound,
            0x44 => GnomishInventor,
            0x45 => GoblinAlchemist,
            0x46 => GryphonAviary,
            0x47 => DragonRoost,
            0x48 => HumanShipyard,
            0x49 => OrcShipyard,
            0x4a => TownHall,
            0x4b => GreatHall,
            0x4c => ElvenLumberMill,
            0x4d => TrollLumberMill,
            0x4e => HumanFoundry,
            0x4f => OrcFoundry,
            0x50 => MageTower,
            0x51 => TempleOfTheDamned,
            0x52 => HumanBlacksmith,
            0x53 => OrcBlacksmith,
            0x54 => HumanRefinery,
            0x55 => OrcRefinery,
            0x56 => HumanOilWell,
            0x57 => OrcOilWell,
            0x58 => Keep,
            0x59 => Stronghold,
            0x5a => Castle,
            0x5b => Fortress,
            0x5c => GoldMine,
            0x5d => OilPatch,
            0x5e => HumanStart,
            0x5f => OrcStart,
            0x60 => HumanGuardTower,
            0x61 => OrcGuardTower,
            0x62 => HumanCannonTower,
            0x63 => OrcCannonTower,
            0x64 => CircleOfPower,
            0x65 => DarkPortal,
            0x66 => Runestone,
            0x67 => HumanWall,
            0x68 => OrcWall,
            0x69 => CritterSheep,
            0x6a => CritterPig,
            0x6b => CritterSeal,
            0x6c => CritterRedPig,
            _ => return None,
        })
    }

    /// A faction's initial base position marker.
    pub fn is_start_location(self) -> bool {
        matches!(self, UnitType::HumanStart | UnitType::OrcStart)
    }

    pub fn is_building(self) -> bool {
        (self as u8) >= UnitType::Farm as u8
            && (self as u8) <= UnitType::OrcWall as u8
            && !self.is_start_location()
    }

    pub fn is_flying(self) -> bool {
        matches!(
            self,
            UnitType::GnomishFlyingMachine
                | UnitType::GoblinZepplin
                | UnitType::GryphonRider
                | UnitType::Dragon
                | UnitType::Deathwing
                | UnitType::KurdranAndSkyRee
                | UnitType::EyeOfKilrogg
                | UnitType::Daemon
        )
    }

    pub fn is_underwater(self) -> bool {
        matches!(self, UnitType::GnomishSubmarine | UnitType::GiantTurtle)
    }

    pub fn is_boat(self) -> bool {
        matches!(
            self,
            UnitType::HumanTanker
                | UnitType::OrcTanker
                | UnitType::HumanTransport
                | UnitType::OrcTransport
                | UnitType::ElvenDestroyer
                | UnitType::TrollDestroyer
                | UnitType::Battleship
                | UnitType::Juggernaught
                | UnitType::GnomishSubmarine
                | UnitType::GiantTurtle
        )
    }

    pub fn is_oil_well(self) -> bool {
        matches!(self, UnitType::HumanOilWell | UnitType::OrcOilWell)
    }

    pub fn is_coast_building(self) -> bool {
        matches!(
            self,
            UnitType::HumanShipyard
                | UnitType::OrcShipyard
                | UnitType::HumanFoundry
                | UnitType::OrcFoundry
                | UnitType::HumanRefinery
                | UnitType::OrcRefinery
        ) || self.is_oil_well()
    }

    pub fn is_marine(self) -> bool {
        self.is_boat() || self.is_coast_building() || self == UnitType::OilPatch
    }

    pub fn is_land(self) -> bool {
        !self.is_flying() && !self.is_boat() && !self.is_underwater()
    }

    /// Units the engine never hands to an active AI: scenery, resources
    /// and markers.
    pub fn is_always_passive(self) -> bool {
        matches!(
            self,
            UnitType::GoldMine
                | UnitType::OilPatch
                | UnitType::CircleOfPower
                | UnitType::DarkPortal
                | UnitType::Runestone
                | UnitType::Critter
                | UnitType::CritterSheep
                | UnitType::CritterPig
                | UnitType::CritterSeal
                | UnitType::CritterRedPig
        ) || self.is_start_location()
    }

    /// Icon id in the game's icon sheet, or `None` for the invisible
    /// start-location markers.
    pub fn icon(self) -> Option<u16> {
        use UnitType::*;
        Some(match self {
            Peasant | AttackPeasant => 0,
            Peon | AttackPeon => 1,
            Footman => 2,
            Grunt => 3,
            Archer => 4,
            Axethrower => 5,
            Ranger => 6,
            Berserker => 7,
            Knight => 8,
            Ogre => 9,
            Paladin => 10,
            OgreMage => 11,
            Dwarves => 12,
            GoblinSapper => 13,
            Mage => 14,
            DeathKnight => 15,
            Ballista => 16,
            Catapult => 17,
            HumanTanker => 18,
            OrcTanker => 19,
            HumanTransport => 20,
            OrcTransport => 21,
            ElvenDestroyer => 22,
            TrollDestroyer => 23,
            Battleship => 24,
            Juggernaught => 25,
            GnomishSubmarine => 26,
            GiantTurtle => 27,
            GnomishFlyingMachine => 28,
            GoblinZepplin => 29,
            GryphonRider => 30,
            Dragon => 31,
            Lothar => 32,
            GulDan => 33,
            UtherLightbringer => 34,
            ZulJin => 35,
            ChoGall => 36,
            Daemon => 37,
            Farm => 38,
            PigFarm => 39,
            TownHall => 40,
            GreatHall => 41,
            HumanBarracks => 42,
            OrcBarracks => 43,
            ElvenLumberMill => 44,
            TrollLumberMill => 45,
            HumanBlacksmith => 46,
            OrcBlacksmith => 47,
            HumanShipyard => 48,
            OrcShipyard => 49,
            HumanRefinery => 50,
            OrcRefinery => 51,
            HumanFoundry => 52,
            OrcFoundry => 53,
            HumanOilWell => 54,
            OrcOilWell => 55,
            Stables => 56,
            OgreMound => 57,
            GnomishInventor => 58,
            GoblinAlchemist => 59,
            HumanScoutTower => 60,
            OrcScoutTower => 61,
            Church => 62,
            AltarOfStorms => 63,
            MageTower => 64,
            TempleOfTheDamned => 65,
            Keep => 66,
            Stronghold => 67,
            Castle => 68,
            Fortress => 69,
            GryphonAviary => 72,
            DragonRoost => 73,
            GoldMine => 74,
            HumanGuardTower => 75,
            HumanCannonTower => 76,
            OrcGuardTower => 77,
            OrcCannonTower => 78,
            OilPatch => 79,
            DarkPortal => 80,
            CircleOfPower => 81,
            Runestone => 82,
            HumanWall => 92,
            OrcWall => 93,
            EyeOfKilrogg => 111,
            Skeleton => 114,
            Critter | CritterSheep | CritterPig | CritterSeal | CritterRedPig => 115,
            KargathBladefist => 186,
            Alleria => 187,
            Danath => 188,
            TeronGorefiend => 189,
            GromHellscream => 190,
            KurdranAndSkyRee => 191,
            Deathwing => 192,
            Khadgar => 193,
            Dentarg => 194,
            Turalyon => 195,
            HumanStart | OrcStart => return None,
        })
    }

    /// Which faction the type inherently belongs to. Most of the id
    /// space interleaves human (even) and orc (odd); scenery and
    /// critters are neutral.
    pub fn side(self) -> Side {
        match self {
            UnitType::Critter
            | UnitType::CritterSheep
            | UnitType::CritterPig
            | UnitType::CritterSeal
            | UnitType::CritterRedPig
            | UnitType::GoldMine
            | UnitType::OilPatch
            | UnitType::CircleOfPower
            | UnitType::DarkPortal
            | UnitType::Runestone => Side::Neutral,
            u if (u as u8) % 2 == 0 => Side::Human,
            _ => Side::Orc,
        }
    }
}

/// A unit placed on the map: raw wire record plus typed accessors.
///
/// `owner` and `unit` are kept as raw bytes so out-of-range values
/// observed in a file survive a round-trip and can be reported by the
/// validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitPlacement {
    pub x: u16,
    pub y: u16,
    pub unit: u8,
    pub owner: u8,
    /// Resource amount (in units of 2500) for mines, patches and wells;
    /// state word for start locations.
    pub alter: u16,
}

impl UnitPlacement {
    pub fn unit_type(&self) -> Option<UnitType> {
        UnitType::from_u8(self.unit)
    }

    pub fn player(&self) -> Option<Player> {
        Player::from_u8(self.owner)
    }

    pub fn is_start_location(&self) -> bool {
        self.unit_type().is_some_and(UnitType::is_start_location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mapping() {
        let expected = [
            (Dimensions::X32, (32, 32)),
            (Dimensions::X64, (64, 64)),
            (Dimensions::X96, (96, 96)),
            (Dimensions::X128, (128, 128)),
        ];
        for (dim, size) in expected {
            assert_eq!(dim.size(), size);
            assert_eq!(Dimensions::from_size(size.0, size.1), Some(dim));
            assert_eq!(dim.tiles(), size.0 as usize * size.1 as usize);
        }
        assert_eq!(Dimensions::from_size(32, 64), None);
        assert_eq!(Dimensions::from_size(48, 48), None);
    }

    #[test]
    fn test_unit_type_gaps() {
        for gap in [0x22u8, 0x24, 0x25, 0x30, 0x36, 0x6d, 0x7f, 0xff] {
            assert_eq!(UnitType::from_u8(gap), None);
        }
        assert_eq!(UnitType::from_u8(0x5e), Some(UnitType::HumanStart));
        assert_eq!(UnitType::from_u8(0x23), Some(UnitType::Deathwing));
        assert_eq!(UnitType::from_u8(0x6c), Some(UnitType::CritterRedPig));
    }

    #[test]
    fn test_unit_predicates() {
        assert!(UnitType::HumanStart.is_start_location());
        assert!(UnitType::OrcStart.is_start_location());
        assert!(!UnitType::TownHall.is_start_location());

        assert!(UnitType::TownHall.is_building());
        assert!(!UnitType::HumanStart.is_building());
        assert!(!UnitType::Footman.is_building());

        assert!(UnitType::Dragon.is_flying());
        assert!(UnitType::Battleship.is_boat());
        assert!(!UnitType::Battleship.is_land());
        assert!(UnitType::Footman.is_land());
        assert!(UnitType::GoldMine.is_always_passive());
    }

    #[test]
    fn test_unit_sides() {
        assert_eq!(UnitType::Footman.side(), Side::Human);
        assert_eq!(UnitType::Grunt.side(), Side::Orc);
        assert_eq!(UnitType::Deathwing.side(), Side::Orc);
        assert_eq!(UnitType::GoldMine.side(), Side::Neutral);
        assert_eq!(UnitType::CritterSheep.side(), Side::Neutral);
        assert_eq!(UnitType::HumanStart.side(), Side::Human);
    }

    #[test]
    fn test_icons() {
        assert_eq!(UnitType::Peasant.icon(), Some(0));
        assert_eq!(UnitType::AttackPeasant.icon(), Some(0));
        assert_eq!(UnitType::GoldMine.icon(), Some(74));
        assert_eq!(UnitType::CritterSeal.icon(), UnitType::Critter.icon());
        assert_eq!(UnitType::HumanStart.icon(), None);
        // Every non-marker unit has an icon.
        for id in 0..=0x6cu8 {
            if let Some(unit) = UnitType::from_u8(id) {
                assert_eq!(unit.icon().is_none(), unit.is_start_location());
            }
        }
    }

    #[test]
    fn test_owner_aliases() {
        assert_eq!(Owner::from_u8(0x00), Some(Owner::Nobody));
        assert_eq!(Owner::from_u8(0x03), Some(Owner::Nobody));
        assert_eq!(Owner::from_u8(0x01), Some(Owner::Computer));
        assert_eq!(Owner::from_u8(0x05), Some(Owner::Human));
        assert_eq!(Owner::from_u8(0x40), None);
    }

    #[test]
    fn test_ai_wire_roundtrip() {
        for v in 0..=0x60u8 {
            let ai = Ai::from_u8(v);
            assert_eq!(ai.to_u8(), v, "wire value {v:#04x} must round-trip");
        }
        assert_eq!(Ai::from_u8(0x00), Ai::LandAttack);
        assert_eq!(Ai::from_u8(0x02), Ai::OrcCampaign(3));
        assert_eq!(Ai::from_u8(0x03), Ai::HumanCampaign(4));
        assert_eq!(Ai::from_u8(0x16), Ai::OrcCampaign(13));
        assert_eq!(Ai::from_u8(0x15), Ai::HumanCampaign(13));
        assert_eq!(Ai::from_u8(0x20), Ai::Expansion(1));
        assert_eq!(Ai::from_u8(0x52), Ai::Expansion(51));
        assert_eq!(Ai::from_u8(0x60), Ai::Unmapped(0x60));
    }
}
