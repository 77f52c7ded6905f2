//! Placement vetoes for portals that lead past a gate whose switch (a fuse, or the Far Shore
//! teleporter pads) must stay reachable from the remaining unpaired portals.
//!
//! Each threshold equals the number of non-dead-end catalog portals matching its marker, so a
//! rule vetoes as long as none of those portals has been paired yet. Changing the portal
//! catalog requires recounting them.

use tunicrando_game::Portal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    SceneDestinationTag(&'static str),
    Region(&'static str),
    Regions(&'static [&'static str]),
    Scene(&'static str),
}

impl Marker {
    pub fn matches(&self, portal: &Portal) -> bool {
        match *self {
            Marker::SceneDestinationTag(key) => portal.scene_destination_tag() == key,
            Marker::Region(region) => portal.region == region,
            Marker::Regions(regions) => regions.iter().any(|&r| r == portal.region),
            Marker::Scene(scene) => portal.scene() == scene,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Guard {
    pub marker: Marker,
    pub threshold: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct GateRule {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub guards: &'static [Guard],
}

const FORTRESS_FUSES: [Guard; 2] = [
    Guard {
        marker: Marker::Scene("Fortress Basement"),
        threshold: 2,
    },
    Guard {
        marker: Marker::Scene("Fortress Main"),
        threshold: 6,
    },
];

pub const GATE_RULES: &[GateRule] = &[
    GateRule {
        name: "Sealed Temple door needs the Forest Belltower bell",
        triggers: &["Overworld Redux, Temple_main"],
        guards: &[Guard {
            marker: Marker::SceneDestinationTag("Forest Belltower, Forest Boss Room_"),
            threshold: 1,
        }],
    },
    GateRule {
        name: "Siege Engine arena needs the fortress fuses",
        triggers: &["Fortress Main, Fortress Arena_"],
        guards: &[
            Guard {
                marker: Marker::Region("Fortress Courtyard Upper"),
                threshold: 2,
            },
            FORTRESS_FUSES[0],
            FORTRESS_FUSES[1],
        ],
    },
    GateRule {
        name: "Fortress teleporter needs the fortress fuses",
        triggers: &[
            "Fortress Arena, Transit_teleporter_spidertank",
            "Transit, Fortress Arena_teleporter_spidertank",
        ],
        guards: &[
            Guard {
                marker: Marker::Scene("Fortress Courtyard"),
                threshold: 8,
            },
            FORTRESS_FUSES[0],
            FORTRESS_FUSES[1],
        ],
    },
    GateRule {
        name: "Cathedral main door needs the swamp fuse",
        triggers: &["Swamp Redux 2, Cathedral Redux_main"],
        guards: &[Guard {
            marker: Marker::Regions(&[
                "Swamp",
                "Swamp to Cathedral Treasure Room",
                "Swamp to Cathedral Main Entrance",
            ]),
            threshold: 4,
        }],
    },
    GateRule {
        name: "Ziggurat portal room needs the ziggurat fuse",
        triggers: &["ziggurat2020_FTRoom, ziggurat2020_3_"],
        guards: &[Guard {
            marker: Marker::Scene("ziggurat2020_3"),
            threshold: 2,
        }],
    },
    GateRule {
        name: "Quarry teleporter needs the way into the quarry",
        triggers: &["Quarry Redux, Transit_teleporter_quarry teleporter"],
        guards: &[Guard {
            marker: Marker::Scene("Darkwoods Tunnel"),
            threshold: 2,
        }],
    },
    GateRule {
        name: "Far Shore to Quarry needs the quarry fuse",
        triggers: &["Transit, Quarry Redux_teleporter_quarry teleporter"],
        guards: &[
            Guard {
                marker: Marker::Scene("Darkwoods Tunnel"),
                threshold: 2,
            },
            Guard {
                marker: Marker::Scene("Quarry Redux"),
                threshold: 7,
            },
        ],
    },
    GateRule {
        name: "Far Shore to Library needs the library fuse",
        triggers: &["Transit, Library Lab_teleporter_library teleporter"],
        guards: &[Guard {
            marker: Marker::Scene("Library Lab"),
            threshold: 3,
        }],
    },
    GateRule {
        name: "Far Shore to West Garden needs the West Garden fuse",
        triggers: &["Transit, Archipelagos Redux_teleporter_archipelagos_teleporter"],
        guards: &[Guard {
            marker: Marker::Scene("Archipelagos Redux"),
            threshold: 6,
        }],
    },
];

impl GateRule {
    pub fn is_triggered_by(&self, portal: &Portal) -> bool {
        self.triggers
            .iter()
            .any(|&key| key == portal.scene_destination_tag())
    }

    /// Number of portals in the pool matching each guard's marker.
    pub fn remaining(&self, pool: &[&Portal]) -> Vec<usize> {
        self.guards
            .iter()
            .map(|guard| pool.iter().filter(|p| guard.marker.matches(p)).count())
            .collect()
    }

    pub fn vetoes(&self, pool: &[&Portal]) -> bool {
        self.guards
            .iter()
            .zip(self.remaining(pool))
            .any(|(guard, count)| count >= guard.threshold)
    }
}

pub fn find_rule(portal: &Portal) -> Option<&'static GateRule> {
    GATE_RULES.iter().find(|rule| rule.is_triggered_by(portal))
}

/// Returns true if `portal` must not be paired yet, given the unpaired candidate pool.
pub fn gate_before_switch(portal: &Portal, pool: &[&Portal]) -> bool {
    match find_rule(portal) {
        Some(rule) => rule.vetoes(pool),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tunicrando_game::GameData;

    fn candidate_pool(game_data: &GameData) -> Vec<&Portal> {
        game_data.portals.iter().filter(|p| !p.dead_end).collect()
    }

    #[test]
    fn every_trigger_names_one_portal() -> Result<()> {
        let game_data = GameData::load()?;
        for rule in GATE_RULES {
            for &trigger in rule.triggers {
                let n = game_data
                    .portals
                    .iter()
                    .filter(|p| p.scene_destination_tag() == trigger)
                    .count();
                assert_eq!(n, 1, "{}: trigger {trigger}", rule.name);
            }
        }
        Ok(())
    }

    #[test]
    fn thresholds_match_catalog() -> Result<()> {
        let game_data = GameData::load()?;
        let pool = candidate_pool(&game_data);
        for rule in GATE_RULES {
            for (guard, count) in rule.guards.iter().zip(rule.remaining(&pool)) {
                assert_eq!(count, guard.threshold, "{}: {:?}", rule.name, guard.marker);
            }
        }
        Ok(())
    }

    #[test]
    fn full_pool_vetoes_each_rule() -> Result<()> {
        let game_data = GameData::load()?;
        let pool = candidate_pool(&game_data);
        for rule in GATE_RULES {
            for &trigger in rule.triggers {
                let portal = pool
                    .iter()
                    .find(|p| p.scene_destination_tag() == trigger)
                    .unwrap();
                assert!(gate_before_switch(portal, &pool), "{}", rule.name);
            }
        }
        Ok(())
    }

    #[test]
    fn pairing_one_marker_per_guard_lifts_veto() -> Result<()> {
        let game_data = GameData::load()?;
        for rule in GATE_RULES {
            let mut pool = candidate_pool(&game_data);
            for guard in rule.guards {
                let i = pool.iter().position(|p| guard.marker.matches(p)).unwrap();
                pool.remove(i);
            }
            let portal = game_data
                .portals
                .iter()
                .find(|p| rule.is_triggered_by(p))
                .unwrap();
            assert!(!gate_before_switch(portal, &pool), "{}", rule.name);
        }
        Ok(())
    }

    #[test]
    fn unrelated_portal_is_never_vetoed() -> Result<()> {
        let game_data = GameData::load()?;
        let pool = candidate_pool(&game_data);
        let portal = game_data.portal_by_name("Stick House Entrance").unwrap();
        assert!(find_rule(portal).is_none());
        assert!(!gate_before_switch(portal, &pool));
        Ok(())
    }
}
