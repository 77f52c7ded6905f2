use tunicrando_game::{RegionIdx, Requirement};
use tunicrando_logic::{
    AbilityMode, Inventory,
    helpers::{has_ability, has_helper},
};

use crate::regions::RegionGraph;

/// Everything a requirement may depend on, apart from which regions are reachable.
#[derive(Clone, Copy)]
pub struct LogicContext<'a> {
    pub inventory: &'a Inventory,
    pub ability_mode: AbilityMode,
}

pub fn apply_requirement(req: &Requirement, ctx: &LogicContext, reachable: &[bool]) -> bool {
    match req {
        Requirement::Free => true,
        Requirement::Never => false,
        Requirement::Item(item, count) => ctx.inventory.has(*item, *count),
        Requirement::Helper(helper) => has_helper(ctx.inventory, *helper),
        Requirement::Ability(ability) => has_ability(ctx.inventory, *ability, &ctx.ability_mode),
        Requirement::RegionReachable(region_idx) => reachable[*region_idx],
        Requirement::And(reqs) => reqs.iter().all(|r| apply_requirement(r, ctx, reachable)),
        Requirement::Or(reqs) => reqs.iter().any(|r| apply_requirement(r, ctx, reachable)),
    }
}

pub struct TraverseResult {
    pub reachable: Vec<bool>, // indexed by RegionIdx
    pub passes: usize,
}

impl TraverseResult {
    pub fn is_reachable(&self, region_idx: RegionIdx) -> bool {
        self.reachable[region_idx]
    }
}

/// Finds every region reachable from the menu under the given inventory.
///
/// Requirements may refer to the reachability of other regions, so a link rejected in one pass
/// can open up later; passes repeat until one adds nothing. Since reachability only grows, this
/// terminates after at most one pass per region.
pub fn traverse(graph: &RegionGraph, ctx: &LogicContext) -> TraverseResult {
    let mut reachable = vec![false; graph.num_regions()];
    reachable[graph.menu_region_idx] = true;
    let mut passes = 0;
    loop {
        passes += 1;
        let mut changed = false;
        let mut stack: Vec<RegionIdx> = (0..graph.num_regions())
            .filter(|&r| reachable[r])
            .collect();
        while let Some(r) = stack.pop() {
            for &link_idx in &graph.links_by_src[r] {
                let link = &graph.links[link_idx];
                let dst = link.to_region_idx;
                if !reachable[dst] && apply_requirement(&link.requirement, ctx, &reachable) {
                    reachable[dst] = true;
                    changed = true;
                    stack.push(dst);
                }
            }
        }
        if !changed {
            break;
        }
    }
    TraverseResult { reachable, passes }
}

/// Reachability over the bare topology, ignoring every requirement.
pub fn traverse_topology(graph: &RegionGraph, start: RegionIdx) -> Vec<bool> {
    let mut reachable = vec![false; graph.num_regions()];
    reachable[start] = true;
    let mut stack = vec![start];
    while let Some(r) = stack.pop() {
        for &link_idx in &graph.links_by_src[r] {
            let dst = graph.links[link_idx].to_region_idx;
            if !reachable[dst] {
                reachable[dst] = true;
                stack.push(dst);
            }
        }
    }
    reachable
}

pub fn is_beatable(graph: &RegionGraph, ctx: &LogicContext) -> bool {
    traverse(graph, ctx).is_reachable(graph.victory_region_idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tunicrando_game::{Ability, Helper, Item};
    use tunicrando_logic::AbilityUnlocks;

    #[test]
    fn region_atoms_read_reachability() {
        let inventory = Inventory::from_items(&[Item::Stick]);
        let ctx = LogicContext {
            inventory: &inventory,
            ability_mode: AbilityMode::Pages,
        };
        let req = Requirement::make_and(vec![
            Requirement::Helper(Helper::Stick),
            Requirement::RegionReachable(1),
        ]);
        assert!(!apply_requirement(&req, &ctx, &[true, false]));
        assert!(apply_requirement(&req, &ctx, &[true, true]));
    }

    #[test]
    fn ability_atoms_follow_mode() {
        let mut inventory = Inventory::new();
        inventory.collect(Item::GoldQuestagon);
        let req = Requirement::Ability(Ability::Prayer);
        let unlocks = AbilityUnlocks {
            prayer: 2,
            holy_cross: 3,
            ice_rod: 4,
        };
        let ctx = LogicContext {
            inventory: &inventory,
            ability_mode: AbilityMode::Tokens(unlocks),
        };
        assert!(!apply_requirement(&req, &ctx, &[]));
        inventory.collect(Item::GoldQuestagon);
        let ctx = LogicContext {
            inventory: &inventory,
            ability_mode: AbilityMode::Tokens(unlocks),
        };
        assert!(apply_requirement(&req, &ctx, &[]));
    }
}
