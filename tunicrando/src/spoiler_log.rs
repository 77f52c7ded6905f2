use anyhow::Result;
use serde::{Deserialize, Serialize};
use tunicrando_game::{Ability, Capacity};
use tunicrando_logic::AbilityUnlocks;

use crate::randomize::PortalPairing;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SpoilerEntrance {
    pub entrance: String,
    pub exit: String,
    pub direction: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SpoilerAbilityUnlock {
    pub ability: String,
    pub count: Capacity,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SpoilerLog {
    pub seed: usize,
    pub ability_unlocks: Vec<SpoilerAbilityUnlock>,
    pub entrances: Vec<SpoilerEntrance>,
}

impl SpoilerLog {
    pub fn new(seed: usize, ability_unlocks: &AbilityUnlocks, pairing: &PortalPairing) -> Self {
        let ability_unlocks = Ability::ALL
            .iter()
            .map(|&ability| SpoilerAbilityUnlock {
                ability: <&'static str>::from(ability).to_string(),
                count: ability_unlocks.get(ability),
            })
            .collect();
        let entrances = pairing
            .iter()
            .map(|(a, b)| SpoilerEntrance {
                entrance: a.name.clone(),
                exit: b.name.clone(),
                direction: "both".to_string(),
            })
            .collect();
        SpoilerLog {
            seed,
            ability_unlocks,
            entrances,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
