//! Display names for units, eras and player colors.

use super::{Era, Player, UnitType};

pub fn era_name(era: Era) -> &'static str {
    match era {
        Era::Forest => "forest",
        Era::Winter => "winter",
        Era::Wasteland => "wasteland",
        Era::Swamp => "swamp",
    }
}

pub fn color_name(player: Player) -> &'static str {
    match player {
        Player::Red => "red",
        Player::Blue => "blue",
        Player::Green => "green",
        Player::Violet => "violet",
        Player::Orange => "orange",
        Player::Black => "black",
        Player::White => "white",
        Player::Yellow => "yellow",
        Player::Neutral => "neutral",
    }
}

pub fn unit_name(unit: UnitType) -> &'static str {
    use UnitType::*;
    match unit {
        Footman => "Footman",
        Grunt => "Grunt",
        Peasant => "Peasant",
        Peon => "Peon",
        Ballista => "Ballista",
        Catapult => "Catapult",
        Knight => "Knight",
        Ogre => "Ogre",
        Archer => "Archer",
        Axethrower => "Axethrower",
        Mage => "Mage",
        DeathKnight => "Death Knight",
        Paladin => "Paladin",
        OgreMage => "Ogre Mage",
        Dwarves => "Dwarven Demolition Squad",
        GoblinSapper => "Goblin Sappers",
        AttackPeasant => "Peasant (attacking)",
        AttackPeon => "Peon (attacking)",
        Ranger => "Ranger",
        Berserker => "Berserker",
        Alleria => "Alleria",
        TeronGorefiend => "Teron Gorefiend",
        KurdranAndSkyRee => "Kurdran and Sky'ree",
        Dentarg => "Dentarg",
        Khadgar => "Khadgar",
        GromHellscream => "Grom Hellscream",
        HumanTanker => "Oil Tanker",
        OrcTanker => "Oil Tanker",
        HumanTransport => "Transport",
        OrcTransport => "Transport",
        ElvenDestroyer => "Elven Destroyer",
        TrollDestroyer => "Troll Destroyer",
        Battleship => "Battleship",
        Juggernaught => "Ogre Juggernaught",
        Deathwing => "Deathwing",
        GnomishSubmarine => "Gnomish Submarine",
        GiantTurtle => "Giant Turtle",
        GnomishFlyingMachine => "Gnomish Flying Machine",
        GoblinZepplin => "Goblin Zeppelin",
        GryphonRider => "Gryphon Rider",
        Dragon => "Dragon",
        Turalyon => "Turalyon",
        EyeOfKilrogg => "Eye of Kilrogg",
        Danath => "Danath",
        KargathBladefist => "Kargath Bladefist",
        ChoGall => "Cho'gall",
        Lothar => "Lothar",
        GulDan => "Gul'dan",
        UtherLightbringer => "Uther Lightbringer",
        ZulJin => "Zul'jin",
        Skeleton => "Skeleton",
        Daemon => "Daemon",
        Critter => "Critter",
        Farm => "Farm",
        PigFarm => "Pig Farm",
        HumanBarracks => "Human Barracks",
        OrcBarracks => "Orc Barracks",
        Church => "Church",
        AltarOfStorms => "Altar of Storms",
        HumanScoutTower => "Human Scout Tower",
        OrcScoutTower => "Orc Scout Tower",
        Stables => "Stables",
        OgreMound => "Ogre Mound",
        GnomishInventor => "Gnomish Inventor",
        GoblinAlchemist => "Goblin Alchemist",
        GryphonAviary => "Gryphon Aviary",
        DragonRoost => "Dragon Roost",
        HumanShipyard => "Human Shipyard",
        OrcShipyard => "Orc Shipyard",
        TownHall => "Town Hall",
        GreatHall => "Great Hall",
        ElvenLumberMill => "Elven Lumber Mill",
        TrollLumberMill => "Troll Lumber Mill",
        HumanFoundry => "Human Foundry",
        OrcFoundry => "Orc Foundry",
        MageTower => "Mage Tower",
        TempleOfTheDamned => "Temple of the Damned",
        HumanBlacksmith => "Human Blacksmith",
        OrcBlacksmith => "Orc Blacksmith",
        HumanRefinery => "Human Refinery",
        OrcRefinery => "Orc Refinery",
        HumanOilWell => "Human Oil Platform",
        OrcOilWell => "Orc Oil Platform",
        Keep => "Keep",
        Stronghold => "Stronghold",
        Castle => "Castle",
        Fortress => "Fortress",
        GoldMine => "Gold Mine",
        OilPatch => "Oil Patch",
        HumanStart => "Human Start Location",
        OrcStart => "Orc Start Location",
        HumanGuardTower => "Human Guard Tower",
        OrcGuardTower => "Orc Guard Tower",
        HumanCannonTower => "Human Cannon Tower",
        OrcCannonTower => "Orc Cannon Tower",
        CircleOfPower => "Circle of Power",
        DarkPortal => "Dark Portal",
        Runestone => "Runestone",
        HumanWall => "Human Wall",
        OrcWall => "Orc Wall",
        CritterSheep => "Sheep",
        CritterPig => "Pig",
        CritterSeal => "Seal",
        CritterRedPig => "Red Pig",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_nonempty() {
        for id in 0..=0x6cu8 {
            if let Some(unit) = UnitType::from_u8(id) {
                assert!(!unit_name(unit).is_empty());
            }
        }
        assert_eq!(era_name(Era::Winter), "winter");
        assert_eq!(color_name(Player::Violet), "violet");
    }
}
