use anyhow::Result;
use hashbrown::HashSet;
use rand::{SeedableRng, rngs::StdRng};
use tunicrando::randomize::{GenerationError, pair_portals};
use tunicrando_game::{GameData, NUM_SHOPS, PortalInfo, RegionInfo, shop_entrance_region};

fn leak(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

/// A small world: "Overworld" plus `num_regions` other regions, each in its own scene and each
/// owning `doors` portals, with optional dead ends in an isolated cave.
struct World {
    regions: Vec<RegionInfo>,
    portals: Vec<PortalInfo>,
}

impl World {
    fn new(num_regions: usize, doors: usize, dead_ends: usize) -> World {
        let mut world = World {
            regions: vec![],
            portals: vec![],
        };
        let mut region_names = vec!["Overworld"];
        for i in 1..=num_regions {
            region_names.push(leak(format!("Region {i}")));
        }
        for (i, &name) in region_names.iter().enumerate() {
            world.regions.push(RegionInfo {
                name,
                scene: leak(format!("Scene {i}")),
                isolated: false,
            });
            for d in 0..doors {
                world.portals.push(PortalInfo {
                    name: leak(format!("{name} Door {d}")),
                    region: name,
                    destination: "Elsewhere",
                    tag: leak(format!("{i}_{d}")),
                    dead_end: false,
                });
            }
        }
        world.regions.push(RegionInfo {
            name: "Cave",
            scene: "Cave Scene",
            isolated: true,
        });
        for d in 0..dead_ends {
            world.portals.push(PortalInfo {
                name: leak(format!("Cave Exit {d}")),
                region: "Cave",
                destination: "Scene 0",
                tag: leak(format!("cave_{d}")),
                dead_end: true,
            });
        }
        world.add_shop_regions();
        world
    }

    fn add_shop_regions(&mut self) {
        for i in 0..NUM_SHOPS {
            self.regions.push(RegionInfo {
                name: leak(shop_entrance_region(i)),
                scene: "Shop",
                isolated: true,
            });
        }
    }

    fn game_data(&self) -> Result<GameData> {
        GameData::from_tables(&self.regions, &[], &[], &self.portals)
    }
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Every portal ends up in exactly one pair, with six shops in six distinct scenes.
#[test]
fn small_world_pairs_everything() -> Result<()> {
    let game_data = World::new(7, 5, 0).game_data()?;
    for seed in 0..20 {
        let output = pair_portals(&game_data, &[], &mut rng(seed), Some(100))?;
        let pairing = &output.pairing;
        assert_eq!(pairing.len(), (40 + NUM_SHOPS) / 2);

        let mut seen: HashSet<String> = HashSet::new();
        let mut shop_scenes: HashSet<String> = HashSet::new();
        for (a, b) in pairing.iter() {
            if b.is_shop() {
                assert!(shop_scenes.insert(a.scene().to_string()));
            } else {
                assert!(seen.insert(b.name.clone()), "{} paired twice", b.name);
            }
            assert!(seen.insert(a.name.clone()), "{} paired twice", a.name);
        }
        assert_eq!(seen.len(), 40);
        assert_eq!(shop_scenes.len(), NUM_SHOPS);
        assert_eq!(output.reshuffles, 0);
    }
    Ok(())
}

/// A dead end that leaves an odd number of portals is reported, never silently dropped.
#[test]
fn odd_portal_count_is_fatal() -> Result<()> {
    let game_data = World::new(7, 5, 1).game_data()?;
    let err = pair_portals(&game_data, &[], &mut rng(0), Some(100))
        .err()
        .unwrap();
    assert!(matches!(
        err.downcast_ref::<GenerationError>(),
        Some(GenerationError::OddPortalCount { .. })
    ));
    Ok(())
}

/// More dead ends than portals left to receive them is reported rather than truncated.
#[test]
fn surplus_dead_ends_are_fatal() -> Result<()> {
    let game_data = World::new(7, 5, 40).game_data()?;
    let err = pair_portals(&game_data, &[], &mut rng(0), Some(100))
        .err()
        .unwrap();
    assert!(matches!(
        err.downcast_ref::<GenerationError>(),
        Some(GenerationError::DeadEndUnpaired { name }) if name.starts_with("Cave Exit")
    ));
    Ok(())
}

/// With only four scenes there is no room for six shops.
#[test]
fn shop_overflow_is_fatal() -> Result<()> {
    let game_data = World::new(3, 5, 0).game_data()?;
    let err = pair_portals(&game_data, &[], &mut rng(0), Some(100))
        .err()
        .unwrap();
    assert_eq!(
        err.downcast_ref::<GenerationError>(),
        Some(&GenerationError::ShopOverflow { shop_num: 5 })
    );
    Ok(())
}

/// A region with no portals cannot be connected, and neither can a region whose only door has
/// nothing reached to lead to.
#[test]
fn missing_candidate_is_fatal() -> Result<()> {
    let game_data = World::new(1, 0, 0).game_data()?;
    let err = pair_portals(&game_data, &[], &mut rng(0), Some(100))
        .err()
        .unwrap();
    assert!(matches!(
        err.downcast_ref::<GenerationError>(),
        Some(GenerationError::NoCandidate {
            reached: false,
            unreached: 1
        })
    ));

    let mut world = World::new(1, 0, 0);
    world.portals.push(PortalInfo {
        name: "Lonely Door",
        region: "Region 1",
        destination: "Elsewhere",
        tag: "",
        dead_end: false,
    });
    let game_data = world.game_data()?;
    let err = pair_portals(&game_data, &[], &mut rng(0), Some(100))
        .err()
        .unwrap();
    assert!(matches!(
        err.downcast_ref::<GenerationError>(),
        Some(GenerationError::NoCandidate { reached: true, .. })
    ));
    Ok(())
}

/// The Far Shore library pad can never be placed while the start region owns all three library
/// portals, so the reshuffle cap must end the run.
#[test]
fn permanent_veto_hits_reshuffle_limit() -> Result<()> {
    let mut world = World {
        regions: vec![
            RegionInfo {
                name: "Overworld",
                scene: "Library Lab",
                isolated: false,
            },
            RegionInfo {
                name: "Far Shore to Library",
                scene: "Transit",
                isolated: false,
            },
        ],
        portals: vec![
            PortalInfo {
                name: "Far Shore to Library",
                region: "Far Shore to Library",
                destination: "Library Lab",
                tag: "teleporter_library teleporter",
                dead_end: false,
            },
            PortalInfo {
                name: "Lab Door 1",
                region: "Overworld",
                destination: "Library Arena",
                tag: "",
                dead_end: false,
            },
            PortalInfo {
                name: "Lab Door 2",
                region: "Overworld",
                destination: "Library Rotunda",
                tag: "",
                dead_end: false,
            },
            PortalInfo {
                name: "Lab Door 3",
                region: "Overworld",
                destination: "Transit",
                tag: "teleporter_library teleporter",
                dead_end: false,
            },
        ],
    };
    world.add_shop_regions();
    let game_data = world.game_data()?;
    let err = pair_portals(&game_data, &[], &mut rng(0), Some(25))
        .err()
        .unwrap();
    assert_eq!(
        err.downcast_ref::<GenerationError>(),
        Some(&GenerationError::ReshuffleLimit { limit: 25 })
    );
    Ok(())
}

/// A forced connection is recorded first, and reaching one side of it reaches the other.
#[test]
fn plando_pins_extend_reached_regions() -> Result<()> {
    let game_data = World::new(7, 5, 0).game_data()?;
    let a = game_data.portal_idx_by_name["Region 1 Door 0"];
    let b = game_data.portal_idx_by_name["Overworld Door 0"];
    for seed in 0..10 {
        let output = pair_portals(&game_data, &[(a, b)], &mut rng(seed), Some(100))?;
        let pairing = &output.pairing;
        assert_eq!(pairing.len(), (40 + NUM_SHOPS) / 2);
        assert_eq!(pairing.pairs[0].0.name, "Region 1 Door 0");
        assert_eq!(pairing.pairs[0].1.name, "Overworld Door 0");
        let uses = pairing
            .iter()
            .filter(|(x, y)| x.name == "Region 1 Door 0" || y.name == "Region 1 Door 0")
            .count();
        assert_eq!(uses, 1);
        // Region 1 was reached through the pin, so none of its other doors was needed as a
        // source during the connectivity phase: six connecting pairs follow the pin.
        let connecting = &pairing.pairs[1..7];
        assert!(connecting.iter().all(|(source, _)| source.region != "Region 1"));
    }
    Ok(())
}
