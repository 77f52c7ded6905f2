use anyhow::Result;
use tunicrando_game::{
    GameData, Item, Link, LinkIdx, MENU_REGION, RegionIdx, Requirement, VICTORY_LINK_NAME,
    VICTORY_ORIGIN_REGION, VICTORY_REGION,
};
use tunicrando_logic::VictoryCondition;

use crate::randomize::PortalPairing;
use crate::settings::RandomizerSettings;

/// All traversal edges of one generated world: static connections, realized portal pairs and
/// finally the victory edge.
pub struct RegionGraph {
    pub links: Vec<Link>,
    pub links_by_src: Vec<Vec<LinkIdx>>,
    pub menu_region_idx: RegionIdx,
    pub victory_region_idx: RegionIdx,
    pub victory_link_idx: LinkIdx,
}

pub fn victory_requirement(settings: &RandomizerSettings) -> Requirement {
    match settings.victory_condition() {
        VictoryCondition::ThreeColor => Requirement::make_and(vec![
            Requirement::Item(Item::RedQuestagon, 1),
            Requirement::Item(Item::GreenQuestagon, 1),
            Requirement::Item(Item::BlueQuestagon, 1),
        ]),
        VictoryCondition::Hexagons(goal) => Requirement::Item(Item::GoldQuestagon, goal),
    }
}

pub fn get_randomized_links(pairing: &PortalPairing) -> Vec<Link> {
    let mut links = vec![];
    for (a, b) in pairing.iter() {
        // A shop can only be left the way it was entered, so no link leaves a shop portal.
        if !a.is_shop() {
            links.push(Link {
                from_region_idx: a.region_idx,
                to_region_idx: b.region_idx,
                name: format!("{} -> {}", a.name, b.name),
                requirement: Requirement::Free,
            });
        }
        if !b.is_shop() {
            links.push(Link {
                from_region_idx: b.region_idx,
                to_region_idx: a.region_idx,
                name: format!("{} -> {}", b.name, a.name),
                requirement: Requirement::Free,
            });
        }
    }
    links
}

impl RegionGraph {
    pub fn new(
        game_data: &GameData,
        settings: &RandomizerSettings,
        pairing: &PortalPairing,
    ) -> Result<RegionGraph> {
        let menu_region_idx = game_data.region_idx(MENU_REGION)?;
        let victory_origin_idx = game_data.region_idx(VICTORY_ORIGIN_REGION)?;
        let victory_region_idx = game_data.region_idx(VICTORY_REGION)?;

        let mut links = game_data.static_links.clone();
        links.extend(get_randomized_links(pairing));
        // Wired last, once every other edge exists.
        let victory_link_idx = links.len();
        links.push(Link {
            from_region_idx: victory_origin_idx,
            to_region_idx: victory_region_idx,
            name: VICTORY_LINK_NAME.to_string(),
            requirement: victory_requirement(settings),
        });

        let mut links_by_src: Vec<Vec<LinkIdx>> = vec![vec![]; game_data.num_regions()];
        for (idx, link) in links.iter().enumerate() {
            links_by_src[link.from_region_idx].push(idx);
        }
        Ok(RegionGraph {
            links,
            links_by_src,
            menu_region_idx,
            victory_region_idx,
            victory_link_idx,
        })
    }

    pub fn num_regions(&self) -> usize {
        self.links_by_src.len()
    }

    pub fn victory_link(&self) -> &Link {
        &self.links[self.victory_link_idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::randomize::vanilla_pairing;
    use crate::settings::GoalMode;

    #[test]
    fn shop_links_are_one_way() -> Result<()> {
        let game_data = GameData::load()?;
        let pairing = vanilla_pairing(&game_data)?;
        let links = get_randomized_links(&pairing);
        let shop_idx = game_data.region_idx("Shop")?;
        assert!(links.iter().any(|l| l.to_region_idx == shop_idx));
        assert!(!links.iter().any(|l| l.from_region_idx == shop_idx));
        let num_shop_pairs = pairing.iter().filter(|(_, b)| b.is_shop()).count();
        assert_eq!(links.len(), 2 * pairing.len() - num_shop_pairs);
        Ok(())
    }

    #[test]
    fn victory_link_is_last() -> Result<()> {
        let game_data = GameData::load()?;
        let settings = RandomizerSettings {
            goal: GoalMode::HexagonQuest,
            hexagon_goal: 5,
            ..RandomizerSettings::default()
        };
        let graph = RegionGraph::new(&game_data, &settings, &vanilla_pairing(&game_data)?)?;
        assert_eq!(graph.victory_link_idx, graph.links.len() - 1);
        let link = graph.victory_link();
        assert_eq!(link.name, "Overcome the Heir");
        assert_eq!(link.requirement, Requirement::Item(Item::GoldQuestagon, 5));
        assert_eq!(game_data.region_name(link.to_region_idx), "Spirit Arena Victory");
        Ok(())
    }
}
