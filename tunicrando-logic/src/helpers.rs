use crate::{AbilityMode, Inventory};
use tunicrando_game::{Ability, Helper, Item};

pub fn has_stick(inventory: &Inventory) -> bool {
    inventory.has(Item::Stick, 1) || inventory.has(Item::SwordUpgrade, 1)
}

pub fn has_sword(inventory: &Inventory) -> bool {
    // The second progressive sword upgrade is the sword itself.
    inventory.has(Item::Sword, 1) || inventory.has(Item::SwordUpgrade, 2)
}

pub fn has_helper(inventory: &Inventory, helper: Helper) -> bool {
    match helper {
        Helper::Stick => has_stick(inventory),
        Helper::Sword => has_sword(inventory),
    }
}

pub fn has_ability(inventory: &Inventory, ability: Ability, mode: &AbilityMode) -> bool {
    match mode {
        AbilityMode::Unshuffled => true,
        AbilityMode::Pages => inventory.has(ability.page(), 1),
        AbilityMode::Tokens(unlocks) => inventory.has(Item::GoldQuestagon, unlocks.get(ability)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AbilityUnlocks;

    #[test]
    fn prayer_without_ability_shuffle() {
        let inventory = Inventory::from_items(&[Item::PrayerPage]);
        assert!(has_ability(&inventory, Ability::Prayer, &AbilityMode::Unshuffled));
        assert!(has_ability(&Inventory::new(), Ability::Prayer, &AbilityMode::Unshuffled));
    }

    #[test]
    fn prayer_with_page() {
        let inventory = Inventory::from_items(&[Item::PrayerPage]);
        assert!(has_ability(&inventory, Ability::Prayer, &AbilityMode::Pages));
        assert!(!has_ability(&inventory, Ability::HolyCross, &AbilityMode::Pages));
    }

    #[test]
    fn prayer_with_token_threshold() {
        let unlocks = AbilityUnlocks {
            prayer: 2,
            holy_cross: 4,
            ice_rod: 6,
        };
        let mode = AbilityMode::Tokens(unlocks);
        let mut inventory = Inventory::new();
        inventory.collect(Item::GoldQuestagon);
        assert!(!has_ability(&inventory, Ability::Prayer, &mode));
        inventory.collect(Item::GoldQuestagon);
        assert!(has_ability(&inventory, Ability::Prayer, &mode));
        assert!(!has_ability(&inventory, Ability::HolyCross, &mode));
    }

    #[test]
    fn stick_and_sword() {
        let mut inventory = Inventory::new();
        assert!(!has_stick(&inventory));
        inventory.collect(Item::SwordUpgrade);
        assert!(has_stick(&inventory));
        assert!(!has_sword(&inventory));
        inventory.collect(Item::SwordUpgrade);
        assert!(has_sword(&inventory));
    }
}
