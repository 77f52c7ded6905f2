use anyhow::Result;
use hashbrown::{HashMap, HashSet};
use tunicrando::randomize::{GenerationError, Randomization, randomize};
use tunicrando::regions::RegionGraph;
use tunicrando::settings::{GoalMode, PlandoConnection, RandomizerSettings};
use tunicrando::traverse::traverse_topology;
use tunicrando_game::{GameData, NUM_SHOPS};

const SEEDS: std::ops::Range<usize> = 0..12;

fn generate(
    game_data: &GameData,
    settings: &RandomizerSettings,
    seed: usize,
) -> Result<Randomization> {
    let (randomization, _) = randomize(game_data, settings, seed)?;
    Ok(randomization)
}

/// Every catalog portal appears in exactly one pair, alongside exactly one shop portal per shop,
/// and no dead end is paired with another dead end.
#[test]
fn pairing_is_a_perfect_matching() -> Result<()> {
    let game_data = GameData::load()?;
    let settings = RandomizerSettings::default();
    for seed in SEEDS {
        let randomization = generate(&game_data, &settings, seed)?;
        let pairing = &randomization.pairing;
        assert_eq!(pairing.len(), (game_data.portals.len() + NUM_SHOPS) / 2);

        let mut uses: HashMap<&str, usize> = HashMap::new();
        let mut num_shops = 0;
        for (a, b) in pairing.iter() {
            assert!(!(a.dead_end && b.dead_end), "{} paired with {}", a.name, b.name);
            assert!(!a.is_shop());
            if b.is_shop() {
                num_shops += 1;
            } else {
                *uses.entry(b.name.as_str()).or_default() += 1;
            }
            *uses.entry(a.name.as_str()).or_default() += 1;
        }
        assert_eq!(num_shops, NUM_SHOPS);
        assert_eq!(uses.len(), game_data.portals.len());
        assert!(uses.values().all(|&n| n == 1));
    }
    Ok(())
}

/// Ignoring requirements, every non-isolated region can be walked to from the menu.
#[test]
fn every_region_is_connected() -> Result<()> {
    let game_data = GameData::load()?;
    let settings = RandomizerSettings::default();
    for seed in SEEDS {
        let randomization = generate(&game_data, &settings, seed)?;
        let graph = RegionGraph::new(&game_data, &settings, &randomization.pairing)?;
        let reachable = traverse_topology(&graph, graph.menu_region_idx);
        let unreached: Vec<&str> = game_data
            .non_isolated_regions()
            .filter(|&r| !reachable[r])
            .map(|r| game_data.region_name(r))
            .collect();
        assert!(unreached.is_empty(), "seed {seed}: {unreached:?}");
    }
    Ok(())
}

/// Shops sit in six distinct scenes.
#[test]
fn shops_are_spread_across_scenes() -> Result<()> {
    let game_data = GameData::load()?;
    let settings = RandomizerSettings::default();
    for seed in SEEDS {
        let randomization = generate(&game_data, &settings, seed)?;
        let shop_scenes: HashSet<&str> = randomization
            .pairing
            .iter()
            .filter(|(_, b)| b.is_shop())
            .map(|(a, _)| a.scene())
            .collect();
        assert_eq!(shop_scenes.len(), NUM_SHOPS);
        let shop_regions: HashSet<usize> = randomization
            .pairing
            .iter()
            .filter(|(_, b)| b.is_shop())
            .map(|(_, b)| b.region_idx)
            .collect();
        assert_eq!(shop_regions.len(), NUM_SHOPS);
    }
    Ok(())
}

/// Whenever a gated portal was placed, every one of its guards had dropped below threshold.
#[test]
fn gated_portals_are_placed_late() -> Result<()> {
    let game_data = GameData::load()?;
    let settings = RandomizerSettings::default();
    for seed in SEEDS {
        let randomization = generate(&game_data, &settings, seed)?;
        for audit in &randomization.gate_audit {
            assert_eq!(audit.remaining.len(), audit.thresholds.len());
            let lifted = audit
                .remaining
                .iter()
                .zip(&audit.thresholds)
                .all(|(remaining, threshold)| remaining < threshold);
            assert!(lifted, "seed {seed}: {audit:?}");
        }
    }
    Ok(())
}

/// The same seed and settings always produce the same world.
#[test]
fn generation_is_deterministic() -> Result<()> {
    let game_data = GameData::load()?;
    let settings = RandomizerSettings {
        goal: GoalMode::HexagonQuest,
        hexagon_goal: 30,
        ..RandomizerSettings::default()
    };
    for seed in [7, 12345, 987654321] {
        let (r1, log1) = randomize(&game_data, &settings, seed)?;
        let (r2, log2) = randomize(&game_data, &settings, seed)?;
        assert_eq!(r1.pairing, r2.pairing);
        assert_eq!(r1.ability_unlocks, r2.ability_unlocks);
        assert_eq!(log1.to_json()?, log2.to_json()?);
    }
    let (r1, _) = randomize(&game_data, &settings, 1)?;
    let (r2, _) = randomize(&game_data, &settings, 2)?;
    assert_ne!(r1.pairing, r2.pairing);
    Ok(())
}

/// Forced connections come first in the output and are never re-paired.
#[test]
fn plando_connections_are_honored() -> Result<()> {
    let game_data = GameData::load()?;
    let settings = RandomizerSettings {
        plando_connections: vec![
            PlandoConnection {
                entrance: "Stick House Entrance".to_string(),
                exit: "Windmill Entrance".to_string(),
            },
            PlandoConnection {
                entrance: "Well Ladder Entrance".to_string(),
                exit: "Old House Entry Door".to_string(),
            },
        ],
        ..RandomizerSettings::default()
    };
    for seed in SEEDS {
        let (randomization, spoiler_log) = randomize(&game_data, &settings, seed)?;
        let pairing = &randomization.pairing;
        assert_eq!(pairing.pairs[0].0.name, "Stick House Entrance");
        assert_eq!(pairing.pairs[0].1.name, "Windmill Entrance");
        assert_eq!(pairing.pairs[1].0.name, "Well Ladder Entrance");
        assert_eq!(pairing.pairs[1].1.name, "Old House Entry Door");
        assert_eq!(
            pairing.partner("Windmill Entrance").map(|p| p.name.as_str()),
            Some("Stick House Entrance")
        );
        assert_eq!(pairing.len(), (game_data.portals.len() + NUM_SHOPS) / 2);
        assert_eq!(spoiler_log.entrances[0].entrance, "Stick House Entrance");
        assert_eq!(spoiler_log.entrances[0].exit, "Windmill Entrance");
    }
    Ok(())
}

/// A misspelled plando connection aborts generation before any pairing happens.
#[test]
fn bad_plando_aborts() -> Result<()> {
    let game_data = GameData::load()?;
    let settings = RandomizerSettings {
        plando_connections: vec![PlandoConnection {
            entrance: "Stick House Entrance".to_string(),
            exit: "Windmill Entrence".to_string(),
        }],
        ..RandomizerSettings::default()
    };
    let err = randomize(&game_data, &settings, 0).err().unwrap();
    assert_eq!(
        err.downcast_ref::<GenerationError>(),
        Some(&GenerationError::UnknownPlandoPortal {
            side: "exit",
            name: "Windmill Entrence".to_string()
        })
    );
    Ok(())
}

/// With entrance randomization off, every door leads where it does in the unmodified game.
#[test]
fn vanilla_world_when_entrances_are_not_shuffled() -> Result<()> {
    let game_data = GameData::load()?;
    let settings = RandomizerSettings {
        entrance_rando: false,
        ..RandomizerSettings::default()
    };
    let (r1, _) = randomize(&game_data, &settings, 1)?;
    let (r2, _) = randomize(&game_data, &settings, 2)?;
    assert_eq!(r1.pairing, r2.pairing);
    assert_eq!(r1.reshuffles, 0);
    assert!(r1.gate_audit.is_empty());
    Ok(())
}
