// The changes suggested by this lint usually make the code more cluttered and less clear:
#![allow(clippy::needless_range_loop)]

pub mod portals;
pub mod regions;

use anyhow::{Context, Result, bail, ensure};
use hashbrown::{HashMap, HashSet};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::borrow::ToOwned;
use std::hash::Hash;
use strum::VariantNames;
use strum_macros::{EnumString, IntoStaticStr, VariantNames};

pub type RegionIdx = usize; // Index into GameData.region_isv.keys
pub type PortalIdx = usize; // Index into GameData.portals
pub type LinkIdx = usize; // Index into a list of links
pub type Capacity = i16;

pub const MENU_REGION: &str = "Menu";
pub const START_REGION: &str = "Overworld";
pub const SHOP_REGION: &str = "Shop";
pub const SHOP_SCENE: &str = "Shop";
pub const VICTORY_ORIGIN_REGION: &str = "Spirit Arena";
pub const VICTORY_REGION: &str = "Spirit Arena Victory";
pub const VICTORY_LINK_NAME: &str = "Overcome the Heir";
pub const SHOP_PORTAL_NAME: &str = "Shop Portal";
pub const SHOP_PORTAL_DESTINATION: &str = "Previous Region";
// The game cannot tell apart two shops placed in the same scene, and it has six of them.
pub const NUM_SHOPS: usize = 6;

#[derive(Default, Clone)]
pub struct IndexedVec<T: Hash + Eq> {
    pub keys: Vec<T>,
    pub index_by_key: HashMap<T, usize>,
}

impl<T: Hash + Eq> IndexedVec<T> {
    pub fn add<U: ToOwned<Owned = T> + ?Sized>(&mut self, name: &U) -> usize {
        if !self.index_by_key.contains_key(&name.to_owned()) {
            let idx = self.keys.len();
            self.index_by_key.insert(name.to_owned(), self.keys.len());
            self.keys.push(name.to_owned());
            idx
        } else {
            self.index_by_key[&name.to_owned()]
        }
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    IntoStaticStr,
    VariantNames,
    Serialize,
    Deserialize,
    PartialOrd,
    Ord,
)]
#[repr(usize)]
pub enum Item {
    #[strum(serialize = "Stick")]
    Stick,
    #[strum(serialize = "Sword")]
    Sword,
    #[strum(serialize = "Sword Upgrade")]
    #[serde(rename = "Sword Upgrade")]
    SwordUpgrade,
    #[strum(serialize = "Hero's Laurels")]
    #[serde(rename = "Hero's Laurels")]
    HerosLaurels,
    #[strum(serialize = "Magic Orb")]
    #[serde(rename = "Magic Orb")]
    MagicOrb,
    #[strum(serialize = "Magic Dagger")]
    #[serde(rename = "Magic Dagger")]
    MagicDagger,
    #[strum(serialize = "Magic Wand")]
    #[serde(rename = "Magic Wand")]
    MagicWand,
    #[strum(serialize = "Lantern")]
    Lantern,
    #[strum(serialize = "Fairy")]
    Fairy,
    #[strum(serialize = "Golden Coin")]
    #[serde(rename = "Golden Coin")]
    GoldenCoin,
    #[strum(serialize = "Pages 24-25 (Prayer)")]
    #[serde(rename = "Pages 24-25 (Prayer)")]
    PrayerPage,
    #[strum(serialize = "Pages 42-43 (Holy Cross)")]
    #[serde(rename = "Pages 42-43 (Holy Cross)")]
    HolyCrossPage,
    #[strum(serialize = "Pages 52-53 (Ice Rod)")]
    #[serde(rename = "Pages 52-53 (Ice Rod)")]
    IceRodPage,
    #[strum(serialize = "Key")]
    Key,
    #[strum(serialize = "Old House Key")]
    #[serde(rename = "Old House Key")]
    OldHouseKey,
    #[strum(serialize = "Fortress Vault Key")]
    #[serde(rename = "Fortress Vault Key")]
    FortressVaultKey,
    #[strum(serialize = "Scavenger Mask")]
    #[serde(rename = "Scavenger Mask")]
    ScavengerMask,
    #[strum(serialize = "Red Questagon")]
    #[serde(rename = "Red Questagon")]
    RedQuestagon,
    #[strum(serialize = "Green Questagon")]
    #[serde(rename = "Green Questagon")]
    GreenQuestagon,
    #[strum(serialize = "Blue Questagon")]
    #[serde(rename = "Blue Questagon")]
    BlueQuestagon,
    #[strum(serialize = "Gold Questagon")]
    #[serde(rename = "Gold Questagon")]
    GoldQuestagon,
}

pub const NUM_ITEMS: usize = Item::VARIANTS.len();

impl Item {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Checks that stand in for "any of several items will do".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Helper {
    Stick,
    Sword,
}

/// Abilities which can be gated behind their manual pages or behind Gold Questagons.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
pub enum Ability {
    Prayer,
    #[strum(serialize = "Holy Cross")]
    HolyCross,
    #[strum(serialize = "Ice Rod")]
    IceRod,
}

impl Ability {
    pub const ALL: [Ability; 3] = [Ability::Prayer, Ability::HolyCross, Ability::IceRod];

    pub fn page(self) -> Item {
        match self {
            Ability::Prayer => Item::PrayerPage,
            Ability::HolyCross => Item::HolyCrossPage,
            Ability::IceRod => Item::IceRodPage,
        }
    }
}

/// A single term of a declarative requirement, as written in the static tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReqAtom {
    Item(Item),
    Helper(Helper),
    Ability(Ability),
}

impl ReqAtom {
    pub fn to_requirement(self) -> Requirement {
        match self {
            ReqAtom::Item(item) => Requirement::Item(item, 1),
            ReqAtom::Helper(helper) => Requirement::Helper(helper),
            ReqAtom::Ability(ability) => Requirement::Ability(ability),
        }
    }
}

pub mod req_atoms {
    use super::{Ability, Helper, Item, ReqAtom};

    pub const LAURELS: ReqAtom = ReqAtom::Item(Item::HerosLaurels);
    pub const GRAPPLE: ReqAtom = ReqAtom::Item(Item::MagicOrb);
    pub const FIRE_WAND: ReqAtom = ReqAtom::Item(Item::MagicWand);
    pub const LANTERN: ReqAtom = ReqAtom::Item(Item::Lantern);
    pub const KEY: ReqAtom = ReqAtom::Item(Item::Key);
    pub const HOUSE_KEY: ReqAtom = ReqAtom::Item(Item::OldHouseKey);
    pub const MASK: ReqAtom = ReqAtom::Item(Item::ScavengerMask);
    pub const STICK: ReqAtom = ReqAtom::Helper(Helper::Stick);
    pub const SWORD: ReqAtom = ReqAtom::Helper(Helper::Sword);
    pub const PRAYER: ReqAtom = ReqAtom::Ability(Ability::Prayer);
    pub const HOLY_CROSS: ReqAtom = ReqAtom::Ability(Ability::HolyCross);
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Requirement {
    Free,
    Never,
    Item(Item, Capacity),
    Helper(Helper),
    Ability(Ability),
    RegionReachable(RegionIdx),
    And(Vec<Requirement>),
    Or(Vec<Requirement>),
}

impl Requirement {
    pub fn make_and(reqs: Vec<Requirement>) -> Requirement {
        let mut out_reqs: Vec<Requirement> = vec![];
        for req in reqs {
            if let Requirement::Never = req {
                return Requirement::Never;
            } else if let Requirement::Free = req {
                continue;
            } else if let Requirement::And(and_reqs) = req {
                out_reqs.extend(and_reqs);
            } else {
                out_reqs.push(req);
            }
        }
        if out_reqs.len() > 1 {
            Requirement::And(out_reqs)
        } else {
            out_reqs.pop().unwrap_or(Requirement::Free)
        }
    }

    pub fn make_or(reqs: Vec<Requirement>) -> Requirement {
        let mut out_reqs: Vec<Requirement> = vec![];
        for req in reqs {
            if let Requirement::Never = req {
                continue;
            } else if let Requirement::Free = req {
                return Requirement::Free;
            } else if let Requirement::Or(or_reqs) = req {
                out_reqs.extend(or_reqs);
            } else {
                out_reqs.push(req);
            }
        }
        if out_reqs.len() > 1 {
            Requirement::Or(out_reqs)
        } else {
            out_reqs.pop().unwrap_or(Requirement::Never)
        }
    }

    /// Compiles an OR-of-ANDs item list, with every listed region additionally required to be
    /// reachable. An empty item list means the regions alone gate the requirement.
    pub fn from_atoms(or_reqs: &[&[ReqAtom]], region_reqs: &[RegionIdx]) -> Requirement {
        let region_reqs: Vec<Requirement> = region_reqs
            .iter()
            .map(|&r| Requirement::RegionReachable(r))
            .collect();
        if or_reqs.is_empty() {
            return Requirement::make_and(region_reqs);
        }
        Requirement::make_or(
            or_reqs
                .iter()
                .map(|and_reqs| {
                    let mut reqs: Vec<Requirement> =
                        and_reqs.iter().map(|atom| atom.to_requirement()).collect();
                    reqs.extend(region_reqs.iter().cloned());
                    Requirement::make_and(reqs)
                })
                .collect(),
        )
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RegionInfo {
    pub name: &'static str,
    pub scene: &'static str,
    // Isolated regions have a single way in and are only paired as a last resort.
    pub isolated: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct StaticConnection {
    pub origin: &'static str,
    pub destination: &'static str,
    pub requirement: &'static [&'static [ReqAtom]],
    pub region_requirement: &'static [&'static str],
    // Whether destination -> origin exists with the same requirement.
    pub reverse: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct DependentRegionGroup {
    pub triggers: &'static [&'static str],
    pub regions: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct PortalInfo {
    pub name: &'static str,
    pub region: &'static str,
    pub destination: &'static str,
    pub tag: &'static str,
    pub dead_end: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Portal {
    pub name: String,
    pub region: String,
    pub region_idx: RegionIdx,
    pub destination: String,
    pub tag: String,
    pub dead_end: bool,
    scene: String,
    scene_destination_tag: String,
}

impl Portal {
    pub fn new(
        name: &str,
        region: &str,
        region_idx: RegionIdx,
        scene: &str,
        destination: &str,
        tag: &str,
        dead_end: bool,
    ) -> Portal {
        Portal {
            name: name.to_string(),
            region: region.to_string(),
            region_idx,
            destination: destination.to_string(),
            tag: tag.to_string(),
            dead_end,
            scene: scene.to_string(),
            scene_destination_tag: format!("{scene}, {destination}_{tag}"),
        }
    }

    /// Scene that the portal's home region belongs to.
    pub fn scene(&self) -> &str {
        &self.scene
    }

    /// Stable identity of the portal used by the game mod and by the placement veto rules.
    pub fn scene_destination_tag(&self) -> &str {
        &self.scene_destination_tag
    }

    pub fn is_shop(&self) -> bool {
        self.name == SHOP_PORTAL_NAME
    }
}

#[derive(Clone, Debug)]
pub struct Link {
    pub from_region_idx: RegionIdx,
    pub to_region_idx: RegionIdx,
    pub name: String,
    pub requirement: Requirement,
}

#[derive(Clone)]
pub struct GameData {
    pub region_isv: IndexedVec<String>,
    pub region_scene: Vec<String>,
    pub region_isolated: Vec<bool>,
    pub portals: Vec<Portal>,
    pub portal_idx_by_name: HashMap<String, PortalIdx>,
    pub static_links: Vec<Link>,
    pub shop_region_idxs: Vec<RegionIdx>,
    pub start_region_idx: RegionIdx,
    dependent_regions: Vec<Vec<RegionIdx>>, // dependent closure, indexed by RegionIdx
}

impl GameData {
    pub fn load() -> Result<GameData> {
        info!("Loading game data");
        GameData::from_tables(
            regions::REGIONS,
            regions::STATIC_CONNECTIONS,
            regions::DEPENDENT_REGIONS,
            portals::PORTALS,
        )
        .context("invalid built-in game data")
    }

    pub fn from_tables(
        regions: &[RegionInfo],
        connections: &[StaticConnection],
        dependent_groups: &[DependentRegionGroup],
        portals: &[PortalInfo],
    ) -> Result<GameData> {
        let mut game_data = GameData {
            region_isv: IndexedVec::default(),
            region_scene: vec![],
            region_isolated: vec![],
            portals: vec![],
            portal_idx_by_name: HashMap::new(),
            static_links: vec![],
            shop_region_idxs: vec![],
            start_region_idx: 0,
            dependent_regions: vec![],
        };
        // All regions are registered before anything refers to them by index.
        for region in regions {
            ensure!(
                !game_data.region_isv.index_by_key.contains_key(region.name),
                "Duplicate region '{}'",
                region.name
            );
            game_data.region_isv.add(region.name);
            game_data.region_scene.push(region.scene.to_string());
            game_data.region_isolated.push(region.isolated);
        }
        game_data.start_region_idx = game_data.region_idx(START_REGION)?;
        for i in 0..NUM_SHOPS {
            let idx = game_data.region_idx(&shop_entrance_region(i))?;
            game_data.shop_region_idxs.push(idx);
        }
        game_data.load_static_connections(connections)?;
        game_data.load_dependent_regions(dependent_groups)?;
        game_data.load_portals(portals)?;
        Ok(game_data)
    }

    fn load_static_connections(&mut self, connections: &[StaticConnection]) -> Result<()> {
        for cxn in connections {
            let context = || format!("static connection {} -> {}", cxn.origin, cxn.destination);
            let origin = self.region_idx(cxn.origin).with_context(context)?;
            let destination = self.region_idx(cxn.destination).with_context(context)?;
            let region_reqs = cxn
                .region_requirement
                .iter()
                .map(|r| self.region_idx(r))
                .collect::<Result<Vec<RegionIdx>>>()
                .with_context(context)?;
            let requirement = Requirement::from_atoms(cxn.requirement, &region_reqs);
            self.static_links.push(Link {
                from_region_idx: origin,
                to_region_idx: destination,
                name: format!("{} -> {}", cxn.origin, cxn.destination),
                requirement: requirement.clone(),
            });
            if cxn.reverse {
                self.static_links.push(Link {
                    from_region_idx: destination,
                    to_region_idx: origin,
                    name: format!("{} -> {}", cxn.destination, cxn.origin),
                    requirement,
                });
            }
        }
        Ok(())
    }

    fn load_dependent_regions(&mut self, groups: &[DependentRegionGroup]) -> Result<()> {
        let mut resolved: Vec<(HashSet<RegionIdx>, Vec<RegionIdx>)> = vec![];
        for group in groups {
            let triggers = group
                .triggers
                .iter()
                .map(|r| self.region_idx(r))
                .collect::<Result<HashSet<RegionIdx>>>()?;
            let regions = group
                .regions
                .iter()
                .map(|r| self.region_idx(r))
                .collect::<Result<Vec<RegionIdx>>>()?;
            for &t in &triggers {
                if resolved.iter().any(|(other, _)| other.contains(&t)) {
                    warn!(
                        "Region '{}' triggers more than one dependent group; using the first",
                        self.region_name(t)
                    );
                }
            }
            resolved.push((triggers, regions));
        }
        // The first group listing a region as a trigger wins.
        self.dependent_regions = (0..self.region_isv.keys.len())
            .map(|idx| match resolved.iter().find(|(t, _)| t.contains(&idx)) {
                Some((_, regions)) => regions.clone(),
                None => vec![idx],
            })
            .collect();
        Ok(())
    }

    fn load_portals(&mut self, portals: &[PortalInfo]) -> Result<()> {
        for p in portals {
            if self.portal_idx_by_name.contains_key(p.name) {
                bail!("Duplicate portal '{}'", p.name);
            }
            let region_idx = self
                .region_idx(p.region)
                .with_context(|| format!("portal '{}'", p.name))?;
            let portal = Portal::new(
                p.name,
                p.region,
                region_idx,
                &self.region_scene[region_idx],
                p.destination,
                p.tag,
                p.dead_end,
            );
            self.portal_idx_by_name
                .insert(p.name.to_string(), self.portals.len());
            self.portals.push(portal);
        }
        Ok(())
    }

    pub fn region_idx(&self, name: &str) -> Result<RegionIdx> {
        match self.region_isv.index_by_key.get(name) {
            Some(&idx) => Ok(idx),
            None => bail!("Undeclared region '{name}'"),
        }
    }

    pub fn region_name(&self, idx: RegionIdx) -> &str {
        &self.region_isv.keys[idx]
    }

    pub fn num_regions(&self) -> usize {
        self.region_isv.keys.len()
    }

    /// Regions made reachable by reaching `idx`, always including `idx` itself.
    pub fn dependent_regions(&self, idx: RegionIdx) -> &[RegionIdx] {
        &self.dependent_regions[idx]
    }

    pub fn non_isolated_regions(&self) -> impl Iterator<Item = RegionIdx> + '_ {
        (0..self.num_regions()).filter(|&idx| !self.region_isolated[idx])
    }

    pub fn portal_by_name(&self, name: &str) -> Option<&Portal> {
        self.portal_idx_by_name.get(name).map(|&idx| &self.portals[idx])
    }

    /// The `i`-th shop portal, each one behind its own placeholder region.
    pub fn shop_portal(&self, i: usize) -> Result<Portal> {
        let Some(&region_idx) = self.shop_region_idxs.get(i) else {
            bail!("Shop index {i} out of range (only {NUM_SHOPS} shops)");
        };
        Ok(Portal::new(
            SHOP_PORTAL_NAME,
            self.region_name(region_idx),
            region_idx,
            &self.region_scene[region_idx],
            SHOP_PORTAL_DESTINATION,
            "",
            false,
        ))
    }

    /// Shop portal opening directly onto the shop interior, as every shop door does in vanilla.
    pub fn vanilla_shop_portal(&self) -> Result<Portal> {
        let region_idx = self.region_idx(SHOP_REGION)?;
        Ok(Portal::new(
            SHOP_PORTAL_NAME,
            SHOP_REGION,
            region_idx,
            &self.region_scene[region_idx],
            SHOP_PORTAL_DESTINATION,
            "",
            false,
        ))
    }
}

pub fn shop_entrance_region(i: usize) -> String {
    format!("Shop Entrance {}", i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn built_in_tables_load() -> Result<()> {
        let game_data = GameData::load()?;
        assert_eq!(game_data.num_regions(), 147 + NUM_SHOPS);
        assert_eq!(game_data.portals.len(), 214);
        assert_eq!(game_data.portals.iter().filter(|p| p.dead_end).count(), 28);
        assert_eq!(game_data.region_name(game_data.start_region_idx), "Overworld");
        Ok(())
    }

    #[test]
    fn scene_destination_tag() -> Result<()> {
        let game_data = GameData::load()?;
        let portal = game_data.portal_by_name("Temple Door Entrance").unwrap();
        assert_eq!(portal.scene(), "Overworld Redux");
        assert_eq!(portal.scene_destination_tag(), "Overworld Redux, Temple_main");
        let portal = game_data.portal_by_name("Stick House Entrance").unwrap();
        assert_eq!(portal.scene_destination_tag(), "Overworld Redux, Sword Cave_");
        Ok(())
    }

    #[test]
    fn dependent_regions_use_first_matching_group() -> Result<()> {
        let game_data = GameData::load()?;
        let idx = game_data.region_idx("Forest Belltower Upper")?;
        let names: Vec<&str> = game_data
            .dependent_regions(idx)
            .iter()
            .map(|&r| game_data.region_name(r))
            .collect();
        assert_eq!(
            names,
            vec!["Forest Belltower Upper", "Forest Belltower Main", "Forest Belltower Lower"]
        );

        // Not a trigger of any group:
        let idx = game_data.region_idx("Forest Belltower Lower")?;
        assert_eq!(game_data.dependent_regions(idx), &[idx]);
        Ok(())
    }

    #[test]
    fn static_connection_with_region_requirement() -> Result<()> {
        let game_data = GameData::load()?;
        let belltower = game_data.region_idx("Overworld Belltower")?;
        let forest_belltower = game_data.region_idx("Forest Belltower Upper")?;
        let link = game_data
            .static_links
            .iter()
            .find(|l| l.name == "Overworld Temple Door -> Overworld")
            .unwrap();
        let regions = [
            Requirement::RegionReachable(belltower),
            Requirement::RegionReachable(forest_belltower),
        ];
        let expected = Requirement::Or(vec![
            Requirement::And(
                [vec![Requirement::Helper(Helper::Stick)], regions.to_vec()].concat(),
            ),
            Requirement::And(
                [vec![Requirement::Item(Item::MagicWand, 1)], regions.to_vec()].concat(),
            ),
        ]);
        assert_eq!(link.requirement, expected);
        // Reverse direction was added with the same requirement:
        assert!(
            game_data
                .static_links
                .iter()
                .any(|l| l.name == "Overworld -> Overworld Temple Door" && l.requirement == expected)
        );
        Ok(())
    }

    fn minimal_regions() -> Vec<RegionInfo> {
        let mut regions = vec![RegionInfo {
            name: "Overworld",
            scene: "Overworld Redux",
            isolated: false,
        }];
        for name in [
            "Shop Entrance 1",
            "Shop Entrance 2",
            "Shop Entrance 3",
            "Shop Entrance 4",
            "Shop Entrance 5",
            "Shop Entrance 6",
        ] {
            regions.push(RegionInfo {
                name,
                scene: "Shop",
                isolated: true,
            });
        }
        regions
    }

    fn door(name: &'static str, region: &'static str) -> PortalInfo {
        PortalInfo {
            name,
            region,
            destination: "Somewhere",
            tag: "",
            dead_end: false,
        }
    }

    #[test]
    fn undeclared_region_is_reported() {
        let regions = minimal_regions();
        let err = GameData::from_tables(&regions, &[], &[], &[door("Nowhere Door", "Nowhere")])
            .err()
            .unwrap();
        let msg = format!("{err:#}");
        assert!(msg.contains("Nowhere"), "{msg}");
        assert!(msg.contains("Nowhere Door"), "{msg}");
    }

    #[test]
    fn duplicate_region_is_reported() {
        let mut regions = minimal_regions();
        regions.push(RegionInfo {
            name: "Overworld",
            scene: "Overworld Redux",
            isolated: false,
        });
        let err = GameData::from_tables(&regions, &[], &[], &[]).err().unwrap();
        let msg = format!("{err:#}");
        assert!(msg.contains("Duplicate region 'Overworld'"), "{msg}");
    }

    #[test]
    fn duplicate_portal_is_reported() {
        let regions = minimal_regions();
        let portals = [door("Front Door", "Overworld"), door("Front Door", "Overworld")];
        let err = GameData::from_tables(&regions, &[], &[], &portals)
            .err()
            .unwrap();
        let msg = format!("{err:#}");
        assert!(msg.contains("Duplicate portal 'Front Door'"), "{msg}");
    }

    #[test]
    fn requirement_simplification() {
        assert_eq!(Requirement::from_atoms(&[], &[]), Requirement::Free);
        assert_eq!(
            Requirement::from_atoms(&[], &[3]),
            Requirement::RegionReachable(3)
        );
        assert_eq!(
            Requirement::make_or(vec![Requirement::Never, Requirement::Item(Item::Key, 1)]),
            Requirement::Item(Item::Key, 1)
        );
        assert_eq!(
            Requirement::make_and(vec![Requirement::Free, Requirement::Never]),
            Requirement::Never
        );
    }

    #[test]
    fn item_names() {
        assert_eq!(Item::from_str("Hero's Laurels").unwrap(), Item::HerosLaurels);
        assert_eq!(Item::PrayerPage.name(), "Pages 24-25 (Prayer)");
        assert_eq!(Ability::HolyCross.page(), Item::HolyCrossPage);
    }
}
