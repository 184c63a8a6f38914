//! Runs batches of headless battles through the real controller.
//!
//! Every battle goes through `BattleController` and `InMemoryStore`, so
//! results match what a host would see.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::config::{SimConfig, SimTarget};
use super::report::{RunStats, SimReport};
use crate::battle::BattleController;
use crate::combat::BattleResult;
use crate::content::ContentTables;
use crate::core::config::EngineConfig;
use crate::core::error::EngineResult;
use crate::creature::Creature;
use crate::rewards::apply_experience;
use crate::store::{GameStore, InMemoryStore};

/// Run the full simulation and return a report.
pub fn run_simulation(content: &ContentTables, config: &SimConfig) -> EngineResult<SimReport> {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(content, config, rng)?;
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - W {} / L {} / F {}, Level {}, Ticks {}, Tokens {}",
                run_idx + 1,
                config.num_runs,
                stats.wins,
                stats.losses,
                stats.fled,
                stats.final_level,
                stats.total_ticks,
                stats.raid_tokens
            );
        }
        all_runs.push(stats);
    }

    Ok(SimReport::from_runs(config, all_runs))
}

/// Creature trained to `level` by feeding it exactly enough experience.
fn trained_creature(content: &ContentTables, config: &SimConfig) -> EngineResult<Creature> {
    let mut creature = Creature::hatch(content.species_template(&config.species_id)?);
    while creature.level < config.starting_level {
        let needed = creature.experience_to_next - creature.experience;
        apply_experience(&mut creature, needed);
    }
    Ok(creature)
}

fn simulate_single_run(
    content: &ContentTables,
    config: &SimConfig,
    rng: ChaCha8Rng,
) -> EngineResult<RunStats> {
    let mut store = InMemoryStore::with_creature(trained_creature(content, config)?);
    let mut controller = BattleController::with_rng(content.clone(), EngineConfig::default(), rng);
    let mut stats = RunStats::default();

    if let SimTarget::Route(route_id) = &config.target {
        controller.select_route(&mut store, route_id)?;
    }

    for _ in 0..config.battles_per_run {
        if config.rest_between_battles {
            if let Some(mut creature) = store.creature().cloned() {
                creature.heal_full();
                store.set_creature(creature);
            }
        }

        let raid_id = match &config.target {
            SimTarget::Raid(id) => Some(id.as_str()),
            _ => None,
        };
        controller.start_battle(&mut store, None, raid_id)?;
        let result = controller.run_to_completion(&mut store, config.max_ticks_per_battle)?;

        let Some(session) = controller.session() else {
            break;
        };
        stats.battles += 1;
        stats.total_ticks += session.ticks;
        match result {
            Some(BattleResult::Win) => stats.wins += 1,
            Some(BattleResult::Lose) => stats.losses += 1,
            Some(BattleResult::Fled) => stats.fled += 1,
            None => {
                stats.stuck += 1;
                controller.flee(&mut store)?;
            }
        }
        stats.raid_damage += session_damage(&controller);
        controller.dismiss()?;

        if let SimTarget::Route(route_id) = &config.target {
            if !store.exploration().is_exploring() {
                if result == Some(BattleResult::Win) {
                    stats.routes_cleared += 1;
                    debug!(route = %route_id, "route cleared");
                    break;
                }
                // Knocked out: walk back in and start over
                controller.select_route(&mut store, route_id)?;
            }
        }
    }

    if let Some(creature) = store.creature() {
        stats.final_level = creature.level;
    }
    stats.gold = store.player().gold;
    stats.raid_tokens = store.player().raid_tokens;
    Ok(stats)
}

fn session_damage(controller: &BattleController<ChaCha8Rng>) -> u64 {
    controller
        .session()
        .filter(|s| s.is_raid())
        .map_or(0, |s| s.damage_dealt)
}
