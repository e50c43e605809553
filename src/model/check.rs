use super::{Owner, Player, Pud, ACTIVE_PLAYERS, NEUTRAL_SLOT};
use crate::error::Validation;

impl Pud {
    /// Check the model for playability. Pure: never mutates, reports at
    /// most the first violation found. A failed check leaves the model
    /// usable for further editing.
    pub fn check(&self) -> Result<(), Validation> {
        if !self.is_init() {
            return Err(Validation::NotInitialized);
        }

        let starts = self
            .units
            .iter()
            .filter(|u| u.is_start_location())
            .count() as u32;
        // A count of zero is reported as NoStartLocation below, after
        // the per-unit checks have had their chance.
        if starts == 1 {
            return Err(Validation::NotEnoughStartLocations { count: starts });
        }
        if starts > ACTIVE_PLAYERS as u32 {
            return Err(Validation::TooManyStartLocations { count: starts });
        }

        for (idx, unit) in self.units.iter().enumerate() {
            let valid_slot = (unit.owner as usize) < ACTIVE_PLAYERS
                || unit.owner as usize == NEUTRAL_SLOT;
            if !valid_slot {
                return Err(Validation::InvalidPlayer {
                    unit: idx,
                    owner: unit.owner,
                });
            }
        }

        for player in Player::COLORS {
            let owner = Owner::from_u8(self.owners.of(player));
            if owner != Some(Owner::Nobody) {
                continue;
            }
            let referenced = self.units.iter().any(|u| u.player() == Some(player));
            if referenced {
                return Err(Validation::EmptyPlayer { player });
            }
        }

        if starts == 0 {
            return Err(Validation::NoStartLocation);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimensions, Era, UnitType};

    fn two_player_map() -> Pud {
        let mut pud = Pud::new(Era::Forest, Dimensions::X32);
        pud.owners.players[0] = Owner::Human as u8;
        pud.owners.players[1] = Owner::Computer as u8;
        pud.add_unit(2, 2, Player::Red, UnitType::HumanStart, 0).unwrap();
        pud.add_unit(28, 28, Player::Blue, UnitType::OrcStart, 0).unwrap();
        pud
    }

    #[test]
    fn test_valid_two_player_map() {
        assert_eq!(two_player_map().check(), Ok(()));
    }

    #[test]
    fn test_not_initialized() {
        let pud = Pud::open("/nonexistent", crate::model::OpenMode::WRITE);
        // Write-only open never reads the file, so this succeeds but the
        // model is not initialized until parsed or defaulted.
        let pud = match pud {
            Ok(p) => p,
            Err(_) => return,
        };
        assert_eq!(pud.check(), Err(Validation::NotInitialized));
    }

    #[test]
    fn test_single_start_location() {
        let mut pud = two_player_map();
        pud.units.remove(1);
        assert_eq!(
            pud.check(),
            Err(Validation::NotEnoughStartLocations { count: 1 })
        );
    }

    #[test]
    fn test_start_location_bounds() {
        // 2 and 8 are valid, 9 is too many.
        let mut pud = Pud::new(Era::Forest, Dimensions::X32);
        for i in 0..8u16 {
            let player = Player::from_u8(i as u8).unwrap();
            pud.owners.players[i as usize] = Owner::Human as u8;
            pud.add_unit(i, i, player, UnitType::HumanStart, 0).unwrap();
        }
        assert_eq!(pud.check(), Ok(()));

        pud.add_unit(20, 20, Player::Red, UnitType::OrcStart, 0).unwrap();
        assert_eq!(
            pud.check(),
            Err(Validation::TooManyStartLocations { count: 9 })
        );
    }

    #[test]
    fn test_no_start_location() {
        let mut pud = Pud::new(Era::Forest, Dimensions::X32);
        pud.owners.players[0] = Owner::Human as u8;
        pud.add_unit(5, 5, Player::Red, UnitType::Footman, 0).unwrap();
        assert_eq!(pud.check(), Err(Validation::NoStartLocation));
    }

    #[test]
    fn test_invalid_player() {
        let mut pud = two_player_map();
        pud.units.push(crate::model::UnitPlacement {
            x: 1,
            y: 1,
            unit: UnitType::Footman as u8,
            owner: 11,
            alter: 0,
        });
        assert_eq!(
            pud.check(),
            Err(Validation::InvalidPlayer { unit: 2, owner: 11 })
        );
    }

    #[test]
    fn test_empty_player() {
        let mut pud = two_player_map();
        pud.owners.players[2] = Owner::Nobody as u8;
        pud.add_unit(9, 9, Player::Green, UnitType::Footman, 0).unwrap();
        assert_eq!(
            pud.check(),
            Err(Validation::EmptyPlayer { player: Player::Green })
        );
    }

    #[test]
    fn test_neutral_units_are_fine() {
        let mut pud = two_player_map();
        pud.add_unit(16, 16, Player::Neutral, UnitType::GoldMine, 20).unwrap();
        pud.add_unit(17, 17, Player::Neutral, UnitType::CritterSheep, 0).unwrap();
        assert_eq!(pud.check(), Ok(()));
    }
}
