use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, IntoStaticStr};
use tunicrando_game::Capacity;
use tunicrando_logic::{AbilityMode, AbilityUnlocks, VictoryCondition};

pub const DEFAULT_MAX_RESHUFFLES: usize = 10000;
pub const MAX_HEXAGON_GOAL: Capacity = 100;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct RandomizerSettings {
    pub entrance_rando: bool,
    pub ability_shuffling: bool,
    pub goal: GoalMode,
    pub hexagon_goal: Capacity,
    // Fixed unlock thresholds; drawn at random when absent.
    #[serde(default)]
    pub ability_unlocks: Option<AbilityUnlocks>,
    #[serde(default)]
    pub plando_connections: Vec<PlandoConnection>,
    // Cap on veto-triggered reshuffles during entrance pairing (`null` for no cap).
    #[serde(default = "default_max_reshuffles")]
    pub max_reshuffles: Option<usize>,
}

#[derive(
    Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, EnumString, IntoStaticStr,
)]
pub enum GoalMode {
    ThreeColor,
    HexagonQuest,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct PlandoConnection {
    pub entrance: String,
    pub exit: String,
}

fn default_max_reshuffles() -> Option<usize> {
    Some(DEFAULT_MAX_RESHUFFLES)
}

impl Default for RandomizerSettings {
    fn default() -> Self {
        RandomizerSettings {
            entrance_rando: true,
            ability_shuffling: true,
            goal: GoalMode::ThreeColor,
            hexagon_goal: 20,
            ability_unlocks: None,
            plando_connections: vec![],
            max_reshuffles: default_max_reshuffles(),
        }
    }
}

impl RandomizerSettings {
    pub fn validate(&self) -> Result<()> {
        if self.goal == GoalMode::HexagonQuest {
            ensure!(
                (1..=MAX_HEXAGON_GOAL).contains(&self.hexagon_goal),
                "hexagon_goal must be between 1 and {MAX_HEXAGON_GOAL}, got {}",
                self.hexagon_goal
            );
        }
        if let Some(unlocks) = &self.ability_unlocks {
            ensure!(
                unlocks.prayer >= 1 && unlocks.holy_cross >= 1 && unlocks.ice_rod >= 1,
                "ability unlock thresholds must be positive: {unlocks:?}"
            );
        }
        Ok(())
    }

    pub fn ability_mode(&self, unlocks: AbilityUnlocks) -> AbilityMode {
        if !self.ability_shuffling {
            AbilityMode::Unshuffled
        } else if self.goal == GoalMode::HexagonQuest {
            AbilityMode::Tokens(unlocks)
        } else {
            AbilityMode::Pages
        }
    }

    pub fn victory_condition(&self) -> VictoryCondition {
        match self.goal {
            GoalMode::ThreeColor => VictoryCondition::ThreeColor,
            GoalMode::HexagonQuest => VictoryCondition::Hexagons(self.hexagon_goal),
        }
    }
}

pub fn parse_randomizer_settings(settings_json: &str) -> Result<RandomizerSettings> {
    let mut des = serde_json::Deserializer::from_str(settings_json);
    let settings: RandomizerSettings = serde_path_to_error::deserialize(&mut des)?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_settings() -> Result<()> {
        let settings = parse_randomizer_settings(
            r#"{
                "entrance_rando": true,
                "ability_shuffling": false,
                "goal": "HexagonQuest",
                "hexagon_goal": 5
            }"#,
        )?;
        assert_eq!(settings.goal, GoalMode::HexagonQuest);
        assert_eq!(settings.max_reshuffles, Some(DEFAULT_MAX_RESHUFFLES));
        assert!(settings.plando_connections.is_empty());
        assert_eq!(settings.victory_condition(), VictoryCondition::Hexagons(5));
        Ok(())
    }

    #[test]
    fn unbounded_reshuffles() -> Result<()> {
        let settings = parse_randomizer_settings(
            r#"{
                "entrance_rando": true,
                "ability_shuffling": true,
                "goal": "ThreeColor",
                "hexagon_goal": 20,
                "max_reshuffles": null
            }"#,
        )?;
        assert_eq!(settings.max_reshuffles, None);
        Ok(())
    }

    #[test]
    fn parse_error_names_path() {
        let err = parse_randomizer_settings(
            r#"{
                "entrance_rando": true,
                "ability_shuffling": true,
                "goal": "Fetch",
                "hexagon_goal": 20
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("goal"), "{err}");
    }

    #[test]
    fn hexagon_goal_out_of_range() {
        for goal in [0, MAX_HEXAGON_GOAL + 1, 20000] {
            let err = parse_randomizer_settings(&format!(
                r#"{{
                    "entrance_rando": true,
                    "ability_shuffling": true,
                    "goal": "HexagonQuest",
                    "hexagon_goal": {goal}
                }}"#
            ))
            .unwrap_err();
            assert!(err.to_string().contains("hexagon_goal"), "{err}");
        }
        let settings = RandomizerSettings {
            goal: GoalMode::HexagonQuest,
            hexagon_goal: MAX_HEXAGON_GOAL,
            ..RandomizerSettings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn ability_modes() {
        let unlocks = AbilityUnlocks::default();
        let mut settings = RandomizerSettings {
            ability_shuffling: false,
            ..RandomizerSettings::default()
        };
        assert_eq!(settings.ability_mode(unlocks), AbilityMode::Unshuffled);
        settings.ability_shuffling = true;
        assert_eq!(settings.ability_mode(unlocks), AbilityMode::Pages);
        settings.goal = GoalMode::HexagonQuest;
        assert_eq!(settings.ability_mode(unlocks), AbilityMode::Tokens(unlocks));
    }
}
