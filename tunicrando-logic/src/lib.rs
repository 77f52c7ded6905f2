pub mod helpers;

use serde::{Deserialize, Serialize};
use tunicrando_game::{Ability, Capacity, Item, NUM_ITEMS};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub counts: Vec<Capacity>, // indexed by Item
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Inventory {
            counts: vec![0; NUM_ITEMS],
        }
    }

    pub fn from_items(items: &[Item]) -> Self {
        let mut inventory = Inventory::new();
        for &item in items {
            inventory.collect(item);
        }
        inventory
    }

    pub fn collect(&mut self, item: Item) {
        self.collect_n(item, 1);
    }

    pub fn collect_n(&mut self, item: Item, n: Capacity) {
        self.counts[item as usize] += n;
    }

    pub fn count(&self, item: Item) -> Capacity {
        self.counts[item as usize]
    }

    pub fn has(&self, item: Item, count: Capacity) -> bool {
        self.count(item) >= count
    }

    pub fn has_all(&self, items: &[Item]) -> bool {
        items.iter().all(|&item| self.has(item, 1))
    }
}

/// Gold Questagon counts at which each ability unlocks (used in hexagon quest), or 1 for each
/// ability when its manual page is what unlocks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityUnlocks {
    pub prayer: Capacity,
    pub holy_cross: Capacity,
    pub ice_rod: Capacity,
}

impl AbilityUnlocks {
    pub fn get(&self, ability: Ability) -> Capacity {
        match ability {
            Ability::Prayer => self.prayer,
            Ability::HolyCross => self.holy_cross,
            Ability::IceRod => self.ice_rod,
        }
    }

    pub fn set(&mut self, ability: Ability, count: Capacity) {
        match ability {
            Ability::Prayer => self.prayer = count,
            Ability::HolyCross => self.holy_cross = count,
            Ability::IceRod => self.ice_rod = count,
        }
    }
}

impl Default for AbilityUnlocks {
    fn default() -> Self {
        AbilityUnlocks {
            prayer: 1,
            holy_cross: 1,
            ice_rod: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityMode {
    // Abilities are usable from the start.
    Unshuffled,
    // Each ability requires its manual page.
    Pages,
    // Each ability requires a number of Gold Questagons.
    Tokens(AbilityUnlocks),
}

/// Condition for crossing the final edge into the victory region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VictoryCondition {
    ThreeColor,
    Hexagons(Capacity),
}

impl VictoryCondition {
    pub fn is_met(&self, inventory: &Inventory) -> bool {
        match *self {
            VictoryCondition::ThreeColor => inventory.has_all(&[
                Item::RedQuestagon,
                Item::GreenQuestagon,
                Item::BlueQuestagon,
            ]),
            VictoryCondition::Hexagons(goal) => inventory.has(Item::GoldQuestagon, goal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_color_victory() {
        let mut inventory = Inventory::from_items(&[Item::RedQuestagon, Item::BlueQuestagon]);
        assert!(!VictoryCondition::ThreeColor.is_met(&inventory));
        inventory.collect(Item::GreenQuestagon);
        assert!(VictoryCondition::ThreeColor.is_met(&inventory));
    }

    #[test]
    fn hexagon_victory() {
        let mut inventory = Inventory::new();
        inventory.collect_n(Item::GoldQuestagon, 4);
        assert!(!VictoryCondition::Hexagons(5).is_met(&inventory));
        inventory.collect(Item::GoldQuestagon);
        assert!(VictoryCondition::Hexagons(5).is_met(&inventory));
    }
}
