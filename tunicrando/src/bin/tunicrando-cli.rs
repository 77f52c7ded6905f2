use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use rand::{RngCore, SeedableRng};
use std::path::PathBuf;
use tunicrando::randomize::{GenerationError, Randomization, randomize};
use tunicrando::regions::RegionGraph;
use tunicrando::settings::{RandomizerSettings, parse_randomizer_settings};
use tunicrando::spoiler_log::SpoilerLog;
use tunicrando::traverse::{LogicContext, is_beatable, traverse_topology};
use tunicrando_game::{GameData, Item};
use tunicrando_logic::Inventory;

#[derive(Parser)]
struct Args {
    #[arg(long)]
    settings: Option<PathBuf>,

    #[arg(long)]
    random_seed: Option<usize>,

    #[arg(long)]
    max_attempts: Option<usize>,

    #[arg(long)]
    output_spoiler_log: Option<PathBuf>,

    #[arg(long)]
    check: bool,
}

fn load_settings(args: &Args) -> Result<RandomizerSettings> {
    match &args.settings {
        Some(path) => {
            let settings_str = std::fs::read_to_string(path)
                .with_context(|| format!("Unable to read settings file at {}", path.display()))?;
            parse_randomizer_settings(&settings_str)
                .with_context(|| format!("Unable to parse settings file at {}", path.display()))
        }
        None => Ok(RandomizerSettings::default()),
    }
}

fn get_randomization(
    args: &Args,
    game_data: &GameData,
    settings: &RandomizerSettings,
) -> Result<(Randomization, SpoilerLog)> {
    let root_seed = match args.random_seed {
        Some(s) => s,
        None => (rand::rngs::StdRng::from_entropy().next_u64() & 0xFFFFFFFF) as usize,
    };
    let max_attempts = match args.max_attempts {
        Some(ma) => ma,
        None if args.random_seed.is_some() => 1,
        None => 10,
    };
    for attempt_num in 1..=max_attempts {
        let seed = root_seed.wrapping_add(attempt_num - 1);
        info!("Attempt {attempt_num}/{max_attempts}: seed={seed}");
        match randomize(game_data, settings, seed) {
            Ok(result) => return Ok(result),
            Err(e) => match e.downcast_ref::<GenerationError>() {
                Some(GenerationError::ReshuffleLimit { .. })
                | Some(GenerationError::NoCandidate { .. }) => {
                    info!("Attempt {attempt_num}/{max_attempts}: Randomization failed: {e}");
                }
                _ => return Err(e),
            },
        }
    }
    bail!("Exhausted randomization attempts");
}

fn check_randomization(game_data: &GameData, randomization: &Randomization) -> Result<()> {
    let settings = &randomization.settings;
    let graph = RegionGraph::new(game_data, settings, &randomization.pairing)?;

    let reachable = traverse_topology(&graph, graph.menu_region_idx);
    let unreached: Vec<&str> = game_data
        .non_isolated_regions()
        .filter(|&r| !reachable[r])
        .map(|r| game_data.region_name(r))
        .collect();
    if !unreached.is_empty() {
        bail!("Regions not connected to the start: {unreached:?}");
    }

    let mut inventory = Inventory::new();
    for &item in &[
        Item::Stick,
        Item::Sword,
        Item::HerosLaurels,
        Item::MagicOrb,
        Item::MagicWand,
        Item::Lantern,
        Item::PrayerPage,
        Item::HolyCrossPage,
        Item::IceRodPage,
        Item::Key,
        Item::OldHouseKey,
        Item::ScavengerMask,
        Item::RedQuestagon,
        Item::GreenQuestagon,
        Item::BlueQuestagon,
    ] {
        inventory.collect(item);
    }
    inventory.collect_n(Item::GoldQuestagon, settings.hexagon_goal.max(1));
    let ctx = LogicContext {
        inventory: &inventory,
        ability_mode: settings.ability_mode(randomization.ability_unlocks),
    };
    if !is_beatable(&graph, &ctx) {
        bail!("Victory is not reachable even with every item");
    }
    info!("Check passed: every region is connected and victory is reachable");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let settings = load_settings(&args)?;
    let game_data = GameData::load()?;

    let (randomization, spoiler_log) = get_randomization(&args, &game_data, &settings)?;
    if args.check {
        check_randomization(&game_data, &randomization)?;
    }

    let spoiler_json = spoiler_log.to_json()?;
    if let Some(output_spoiler_log_path) = &args.output_spoiler_log {
        println!(
            "Writing spoiler log to {}",
            output_spoiler_log_path.display()
        );
        std::fs::write(output_spoiler_log_path, spoiler_json)?;
    } else {
        println!("{spoiler_json}");
    }
    Ok(())
}
