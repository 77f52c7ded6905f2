pub mod gate_before_switch;
pub mod plando;

use anyhow::{Result, bail};
use hashbrown::HashSet;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::prelude::SliceRandom;
use rand::{Rng, rngs::StdRng};
use thiserror::Error;
use tunicrando_game::{
    Ability, Capacity, GameData, NUM_SHOPS, Portal, PortalIdx, RegionIdx, SHOP_SCENE,
};
use tunicrando_logic::AbilityUnlocks;

use crate::settings::{GoalMode, RandomizerSettings};
use crate::spoiler_log::SpoilerLog;
use gate_before_switch::{find_rule, gate_before_switch};
use plando::plando_connect;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Could not find portals named {entrance} and {exit}, please double-check their names")]
    UnknownPlandoPortals { entrance: String, exit: String },
    #[error("Could not find {side} portal named {name}, please double-check its name")]
    UnknownPlandoPortal { side: &'static str, name: String },
    #[error("Portal {name} appears in more than one plando connection")]
    PlandoPortalReused { name: String },
    #[error("Too many shops in the pool: no unused scene left for shop {shop_num}")]
    ShopOverflow { shop_num: usize },
    #[error("No unpaired portal left in {} region ({unreached} regions still unreached)", reach_label(.reached))]
    NoCandidate { reached: bool, unreached: usize },
    #[error("Ran out of portals to pair with dead end {name}")]
    DeadEndUnpaired { name: String },
    #[error("Odd number of portals: {name} was left unpaired")]
    OddPortalCount { name: String },
    #[error("Gave up after {limit} reshuffles while pairing portals")]
    ReshuffleLimit { limit: usize },
    #[error("Could not find the vanilla counterpart of portal {name}")]
    NoVanillaPartner { name: String },
}

fn reach_label(reached: &bool) -> &'static str {
    if *reached { "a reached" } else { "an unreached" }
}

/// Realized portal pairs, in the order they were made. Each pair is a two-way connection,
/// except that nothing leads back out of a shop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PortalPairing {
    pub pairs: Vec<(Portal, Portal)>,
}

impl PortalPairing {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Portal, Portal)> {
        self.pairs.iter()
    }

    pub fn partner(&self, name: &str) -> Option<&Portal> {
        self.pairs.iter().find_map(|(a, b)| {
            if a.name == name {
                Some(b)
            } else if b.name == name {
                Some(a)
            } else {
                None
            }
        })
    }
}

/// Marker counts seen when a gated portal was allowed to be paired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateAudit {
    pub portal: String,
    pub rule: &'static str,
    pub remaining: Vec<usize>,
    pub thresholds: Vec<usize>,
}

pub struct ShuffleOutput {
    pub pairing: PortalPairing,
    pub gate_audit: Vec<GateAudit>,
    pub reshuffles: usize,
}

pub struct Randomization {
    pub seed: usize,
    pub settings: RandomizerSettings,
    pub ability_unlocks: AbilityUnlocks,
    pub pairing: PortalPairing,
    pub gate_audit: Vec<GateAudit>,
    pub reshuffles: usize,
}

enum PairingStep<'a> {
    SeekSource,
    SeekTarget { source: &'a Portal },
    Commit { source: &'a Portal, target: &'a Portal },
}

enum Scan<'a> {
    Found(usize),
    Vetoed(&'a Portal),
    Exhausted,
}

struct EntranceShuffler<'a, R: Rng> {
    game_data: &'a GameData,
    rng: &'a mut R,
    max_reshuffles: Option<usize>,
    candidates: Vec<&'a Portal>,
    dead_ends: Vec<&'a Portal>,
    pinned: Vec<(&'a Portal, &'a Portal)>,
    reached: Vec<bool>,    // indexed by RegionIdx
    num_unreached: usize, // non-isolated regions not yet reached
    pairs: Vec<(Portal, Portal)>,
    reshuffles: usize,
    gate_audit: Vec<GateAudit>,
}

impl<'a, R: Rng> EntranceShuffler<'a, R> {
    fn new(
        game_data: &'a GameData,
        plando: &[(PortalIdx, PortalIdx)],
        rng: &'a mut R,
        max_reshuffles: Option<usize>,
    ) -> Self {
        let pinned: Vec<(&Portal, &Portal)> = plando
            .iter()
            .map(|&(a, b)| (&game_data.portals[a], &game_data.portals[b]))
            .collect();
        let pinned_idxs: HashSet<PortalIdx> = plando.iter().flat_map(|&(a, b)| [a, b]).collect();
        let mut candidates = vec![];
        let mut dead_ends = vec![];
        for (idx, portal) in game_data.portals.iter().enumerate() {
            if pinned_idxs.contains(&idx) {
                continue;
            }
            if portal.dead_end {
                dead_ends.push(portal);
            } else {
                candidates.push(portal);
            }
        }
        candidates.shuffle(rng);
        let pairs = pinned
            .iter()
            .map(|&(a, b)| (a.clone(), b.clone()))
            .collect();
        let mut shuffler = EntranceShuffler {
            game_data,
            rng,
            max_reshuffles,
            candidates,
            dead_ends,
            pinned,
            reached: vec![false; game_data.num_regions()],
            num_unreached: game_data.non_isolated_regions().count(),
            pairs,
            reshuffles: 0,
            gate_audit: vec![],
        };
        shuffler.reach(game_data.start_region_idx);
        shuffler
    }

    fn mark_reached(&mut self, region_idx: RegionIdx) {
        if !self.reached[region_idx] {
            self.reached[region_idx] = true;
            if !self.game_data.region_isolated[region_idx] {
                self.num_unreached -= 1;
            }
        }
    }

    /// Adds the dependent regions of `region_idx`, and of the far side of any forced
    /// connection whose near side becomes reached along the way.
    fn reach(&mut self, region_idx: RegionIdx) {
        let game_data = self.game_data;
        let mut frontier = vec![region_idx];
        while let Some(r) = frontier.pop() {
            self.mark_reached(r);
            for &dep in game_data.dependent_regions(r) {
                self.mark_reached(dep);
            }
            for &(a, b) in &self.pinned {
                if self.reached[a.region_idx] && !self.reached[b.region_idx] {
                    frontier.push(b.region_idx);
                } else if self.reached[b.region_idx] && !self.reached[a.region_idx] {
                    frontier.push(a.region_idx);
                }
            }
        }
    }

    /// Finds the first candidate, in current shuffle order, whose home region is reached (or
    /// not), subject to the gate veto.
    fn scan(&self, want_reached: bool) -> Scan<'a> {
        for (i, &portal) in self.candidates.iter().enumerate() {
            if self.reached[portal.region_idx] != want_reached {
                continue;
            }
            if gate_before_switch(portal, &self.candidates) {
                return Scan::Vetoed(portal);
            }
            return Scan::Found(i);
        }
        Scan::Exhausted
    }

    fn take(&mut self, i: usize) -> &'a Portal {
        let portal = self.candidates[i];
        if let Some(rule) = find_rule(portal) {
            let audit = GateAudit {
                portal: portal.name.clone(),
                rule: rule.name,
                remaining: rule.remaining(&self.candidates),
                thresholds: rule.guards.iter().map(|g| g.threshold).collect(),
            };
            debug!("Placing {}: {:?}", portal.name, audit);
            self.gate_audit.push(audit);
        }
        self.candidates.remove(i)
    }

    fn reshuffle_after_veto(&mut self, vetoed: &Portal) -> Result<()> {
        self.reshuffles += 1;
        if let Some(limit) = self.max_reshuffles {
            if self.reshuffles > limit {
                bail!(GenerationError::ReshuffleLimit { limit });
            }
        }
        debug!(
            "Too early to place {} ({} reshuffles so far)",
            vetoed.name, self.reshuffles
        );
        self.candidates.shuffle(self.rng);
        Ok(())
    }

    fn no_candidate(&self, reached: bool) -> GenerationError {
        GenerationError::NoCandidate {
            reached,
            unreached: self.num_unreached,
        }
    }

    /// Pairs portals until every non-isolated region is reachable from the start.
    fn connect_regions(&mut self) -> Result<()> {
        let mut step = PairingStep::SeekSource;
        loop {
            step = match step {
                PairingStep::SeekSource => {
                    if self.num_unreached == 0 {
                        return Ok(());
                    }
                    match self.scan(false) {
                        Scan::Found(i) => PairingStep::SeekTarget {
                            source: self.take(i),
                        },
                        Scan::Vetoed(portal) => {
                            self.reshuffle_after_veto(portal)?;
                            PairingStep::SeekSource
                        }
                        Scan::Exhausted => bail!(self.no_candidate(false)),
                    }
                }
                PairingStep::SeekTarget { source } => match self.scan(true) {
                    Scan::Found(i) => PairingStep::Commit {
                        source,
                        target: self.take(i),
                    },
                    Scan::Vetoed(portal) => {
                        self.reshuffle_after_veto(portal)?;
                        PairingStep::SeekTarget { source }
                    }
                    Scan::Exhausted => bail!(self.no_candidate(true)),
                },
                PairingStep::Commit { source, target } => {
                    self.pairs.push((source.clone(), target.clone()));
                    self.reach(source.region_idx);
                    self.candidates.shuffle(self.rng);
                    PairingStep::SeekSource
                }
            };
        }
    }

    fn place_shops(&mut self) -> Result<()> {
        let mut shop_scenes: HashSet<&str> = HashSet::new();
        for i in 0..NUM_SHOPS {
            let Some(pos) = self
                .candidates
                .iter()
                .position(|p| !shop_scenes.contains(p.scene()))
            else {
                bail!(GenerationError::ShopOverflow { shop_num: i + 1 });
            };
            let portal = self.candidates.remove(pos);
            shop_scenes.insert(portal.scene());
            self.pairs
                .push((portal.clone(), self.game_data.shop_portal(i)?));
        }
        Ok(())
    }

    fn pair_dead_ends(&mut self) -> Result<()> {
        while let Some(dead_end) = self.dead_ends.pop() {
            let Some(portal) = self.candidates.pop() else {
                bail!(GenerationError::DeadEndUnpaired {
                    name: dead_end.name.clone()
                });
            };
            self.pairs.push((portal.clone(), dead_end.clone()));
        }
        Ok(())
    }

    fn pair_remaining(&mut self) -> Result<()> {
        while let Some(a) = self.candidates.pop() {
            let Some(b) = self.candidates.pop() else {
                bail!(GenerationError::OddPortalCount {
                    name: a.name.clone()
                });
            };
            self.pairs.push((a.clone(), b.clone()));
        }
        Ok(())
    }

    fn run(mut self) -> Result<ShuffleOutput> {
        self.connect_regions()?;
        self.place_shops()?;
        self.pair_dead_ends()?;
        self.pair_remaining()?;
        Ok(ShuffleOutput {
            pairing: PortalPairing { pairs: self.pairs },
            gate_audit: self.gate_audit,
            reshuffles: self.reshuffles,
        })
    }
}

/// Randomly pairs every portal in the catalog (plus the shop portals), keeping every
/// non-isolated region reachable from the start.
pub fn pair_portals<R: Rng>(
    game_data: &GameData,
    plando: &[(PortalIdx, PortalIdx)],
    rng: &mut R,
    max_reshuffles: Option<usize>,
) -> Result<ShuffleOutput> {
    EntranceShuffler::new(game_data, plando, rng, max_reshuffles).run()
}

fn is_vanilla_partner(a: &Portal, b: &Portal) -> bool {
    a.destination == b.scene() && b.destination == a.scene() && a.tag == b.tag
}

/// Pairs every portal with the one it connects to in the unmodified game.
pub fn vanilla_pairing(game_data: &GameData) -> Result<PortalPairing> {
    let portals = &game_data.portals;
    let shop = game_data.vanilla_shop_portal()?;
    let mut paired = vec![false; portals.len()];
    let mut pairs = vec![];
    for (i, portal) in portals.iter().enumerate() {
        if paired[i] {
            continue;
        }
        paired[i] = true;
        if portal.destination == SHOP_SCENE {
            pairs.push((portal.clone(), shop.clone()));
            continue;
        }
        let unpaired = |j: &usize| !paired[*j];
        // Portals within a single scene (e.g. Purgatory's two exits) lead to one another.
        let partner = (0..portals.len())
            .filter(unpaired)
            .find(|&j| is_vanilla_partner(portal, &portals[j]))
            .or_else(|| {
                (0..portals.len()).filter(unpaired).find(|&j| {
                    portals[j].scene() == portal.scene()
                        && portals[j].destination == portal.destination
                })
            });
        let Some(j) = partner else {
            bail!(GenerationError::NoVanillaPartner {
                name: portal.name.clone()
            });
        };
        paired[j] = true;
        pairs.push((portal.clone(), portals[j].clone()));
    }
    Ok(PortalPairing { pairs })
}

/// Assigns each ability the Gold Questagon count that unlocks it (hexagon quest), or the
/// single page that unlocks it otherwise.
pub fn randomize_ability_unlocks<R: Rng>(
    settings: &RandomizerSettings,
    rng: &mut R,
) -> AbilityUnlocks {
    if let Some(unlocks) = settings.ability_unlocks {
        return unlocks;
    }
    let mut abilities = Ability::ALL.to_vec();
    abilities.shuffle(rng);
    let thresholds = match settings.goal {
        GoalMode::ThreeColor => [1, 1, 1],
        GoalMode::HexagonQuest => {
            let goal = settings.hexagon_goal;
            // Three quarters of the goal never exceeds the goal, so it narrows back losslessly.
            let three_quarters = (i32::from(goal) * 3 / 4) as Capacity;
            [goal / 4, goal / 2, three_quarters].map(|t| t.max(1))
        }
    };
    let mut unlocks = AbilityUnlocks::default();
    for (ability, threshold) in abilities.into_iter().zip(thresholds) {
        unlocks.set(ability, threshold);
    }
    unlocks
}

pub fn randomize(
    game_data: &GameData,
    settings: &RandomizerSettings,
    seed: usize,
) -> Result<(Randomization, SpoilerLog)> {
    settings.validate()?;
    let mut rng_seed = [0u8; 32];
    rng_seed[..8].copy_from_slice(&seed.to_le_bytes());
    let mut rng = StdRng::from_seed(rng_seed);

    let ability_unlocks = randomize_ability_unlocks(settings, &mut rng);
    let output = if settings.entrance_rando {
        let plando = plando_connect(game_data, &settings.plando_connections)?;
        pair_portals(game_data, &plando, &mut rng, settings.max_reshuffles)?
    } else {
        if !settings.plando_connections.is_empty() {
            warn!("Ignoring plando connections since entrance randomization is off");
        }
        ShuffleOutput {
            pairing: vanilla_pairing(game_data)?,
            gate_audit: vec![],
            reshuffles: 0,
        }
    };
    info!(
        "[seed {seed}] Paired {} portals ({} reshuffles)",
        output.pairing.len(),
        output.reshuffles
    );

    let spoiler_log = SpoilerLog::new(seed, &ability_unlocks, &output.pairing);
    let randomization = Randomization {
        seed,
        settings: settings.clone(),
        ability_unlocks,
        pairing: output.pairing,
        gate_audit: output.gate_audit,
        reshuffles: output.reshuffles,
    };
    Ok((randomization, spoiler_log))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn ability_unlocks_three_color() {
        let settings = RandomizerSettings::default();
        let unlocks = randomize_ability_unlocks(&settings, &mut seeded_rng(0));
        assert_eq!(unlocks, AbilityUnlocks::default());
    }

    #[test]
    fn ability_unlocks_hexagon_quest() {
        let settings = RandomizerSettings {
            goal: GoalMode::HexagonQuest,
            hexagon_goal: 20,
            ..RandomizerSettings::default()
        };
        for seed in 0..10 {
            let unlocks = randomize_ability_unlocks(&settings, &mut seeded_rng(seed));
            let mut thresholds: Vec<_> = Ability::ALL.iter().map(|&a| unlocks.get(a)).collect();
            thresholds.sort();
            assert_eq!(thresholds, vec![5, 10, 15]);
        }
    }

    #[test]
    fn oversized_hexagon_goal_is_rejected() -> Result<()> {
        let game_data = GameData::load()?;
        let settings = RandomizerSettings {
            goal: GoalMode::HexagonQuest,
            hexagon_goal: 20000,
            ..RandomizerSettings::default()
        };
        assert!(randomize(&game_data, &settings, 1).is_err());

        // Thresholds stay in range even when settings skip validation.
        let unlocks = randomize_ability_unlocks(&settings, &mut seeded_rng(1));
        let mut thresholds: Vec<_> = Ability::ALL.iter().map(|&a| unlocks.get(a)).collect();
        thresholds.sort();
        assert_eq!(thresholds, vec![5000, 10000, 15000]);
        Ok(())
    }

    #[test]
    fn fixed_ability_unlocks_are_kept() {
        let fixed = AbilityUnlocks {
            prayer: 2,
            holy_cross: 3,
            ice_rod: 4,
        };
        let settings = RandomizerSettings {
            ability_unlocks: Some(fixed),
            ..RandomizerSettings::default()
        };
        assert_eq!(randomize_ability_unlocks(&settings, &mut seeded_rng(1)), fixed);
    }

    #[test]
    fn vanilla_pairs_known_doors() -> Result<()> {
        let game_data = GameData::load()?;
        let pairing = vanilla_pairing(&game_data)?;
        let covered: usize = pairing
            .iter()
            .map(|(a, b)| [a, b].iter().filter(|p| !p.is_shop()).count())
            .sum();
        assert_eq!(covered, game_data.portals.len());
        assert_eq!(
            pairing.partner("Purgatory Bottom Exit").map(|p| p.name.as_str()),
            Some("Purgatory Top Exit")
        );
        assert!(pairing.partner("Windmill Shop").unwrap().is_shop());
        for (a, b) in pairing.iter() {
            if !a.is_shop() && !b.is_shop() && a.scene() != b.scene() {
                assert!(is_vanilla_partner(a, b), "{} <-> {}", a.name, b.name);
            }
        }
        Ok(())
    }

    #[test]
    fn shuffle_is_reproducible() -> Result<()> {
        let game_data = GameData::load()?;
        let first = pair_portals(&game_data, &[], &mut seeded_rng(7), None)?;
        let second = pair_portals(&game_data, &[], &mut seeded_rng(7), None)?;
        assert_eq!(first.pairing, second.pairing);
        assert_eq!(first.gate_audit, second.gate_audit);
        Ok(())
    }
}
