//! Raid mode integration tests
//!
//! Turn-capped titan fights: timeout handling, damage-to-token conversion
//! and the per-day damage ledger.

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use spirit_bond::battle::BattleController;
use spirit_bond::combat::{BattleEvent, BattleResult, Element, LogTone};
use spirit_bond::content::ContentTables;
use spirit_bond::core::EngineConfig;
use spirit_bond::creature::{Creature, StatBlock};
use spirit_bond::exploration::ExplorationProgress;
use spirit_bond::store::{GameStore, InMemoryStore};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

fn controller() -> BattleController<ChaCha8Rng> {
    let mut controller = BattleController::with_rng(
        ContentTables::starter(),
        EngineConfig::default(),
        ChaCha8Rng::seed_from_u64(99),
    );
    controller.set_fixed_day(day());
    controller
}

fn raider() -> Creature {
    Creature::new(
        "raider",
        "Raider",
        Element::Neutral,
        StatBlock::new(5_000, 350, 400, 50, 0),
    )
}

#[test]
fn test_raid_times_out_after_ten_turns() {
    let mut controller = controller();
    let mut store = InMemoryStore::with_creature(raider());

    let session = controller.start_battle(&mut store, None, Some("raid_terra")).unwrap();
    assert!(session.is_raid());
    assert_eq!(session.opponent.level, 99);
    // Raid titans are not scaled by level
    assert_eq!(session.opponent.stats.max_hp, 1_000_000);

    let mut player_turns = 0;
    let mut ended = None;
    while controller.is_active() {
        for event in controller.tick(&mut store).unwrap() {
            match event {
                BattleEvent::PlayerAttack { .. } => player_turns += 1,
                BattleEvent::Ended { result, timed_out } => ended = Some((result, timed_out)),
                BattleEvent::OpponentAttack { .. } => {}
            }
        }
    }

    assert_eq!(player_turns, 10);
    assert_eq!(ended, Some((BattleResult::Fled, true)));

    // 350 - 200 * 0.5 = 250 per hit, Neutral vs Terra
    let snapshot = controller.snapshot(&store);
    assert_eq!(snapshot.turn, 10);
    assert_eq!(snapshot.damage_dealt, 2_500);
    assert!(snapshot.is_raid);

    assert_eq!(store.player().raid_tokens, 25);
    assert_eq!(store.raid_damage_on(day()), 2_500);
    assert_eq!(store.player().gold, 0);
    // Timeout is not a loss
    assert_eq!(store.creature().unwrap().stats.hp, 5_000);
    assert_eq!(store.creature().unwrap().vitals.energy, 100);

    let last = snapshot.log.last().unwrap();
    assert_eq!(last.tone, LogTone::Raid);
    assert!(last.message.contains("25"));
}

#[test]
fn test_raid_damage_accumulates_per_day() {
    let mut controller = controller();
    let mut store = InMemoryStore::with_creature(raider());

    for _ in 0..3 {
        controller.start_battle(&mut store, None, Some("raid_terra")).unwrap();
        controller.run_to_completion(&mut store, 100_000).unwrap();
        controller.dismiss().unwrap();
    }
    assert_eq!(store.raid_damage_on(day()), 7_500);
    assert_eq!(store.player().raid_tokens, 75);

    controller.set_fixed_day(day().succ_opt().unwrap());
    controller.start_battle(&mut store, None, Some("raid_terra")).unwrap();
    controller.run_to_completion(&mut store, 100_000).unwrap();
    assert_eq!(store.raid_damage_on(day()), 7_500);
    assert_eq!(store.raid_damage_on(day().succ_opt().unwrap()), 2_500);
}

#[test]
fn test_raid_loss_still_pays_tokens() {
    let mut controller = controller();
    let glass = Creature::new("glass", "Glass", Element::Neutral, StatBlock::new(30, 300, 0, 50, 0));
    let mut store = InMemoryStore::with_creature(glass);
    store.set_exploration(ExplorationProgress::on_route("terra_1", 2));

    controller.start_battle(&mut store, None, Some("raid_pyro")).unwrap();
    let result = controller.run_to_completion(&mut store, 100_000).unwrap();

    assert_eq!(result, Some(BattleResult::Lose));
    let damage = controller.snapshot(&store).damage_dealt;
    assert_eq!(store.player().raid_tokens, damage / 100);
    let creature = store.creature().unwrap();
    assert_eq!(creature.stats.hp, 1);
    assert_eq!(creature.vitals.energy, 90);
    assert_eq!(creature.vitals.mood, 100);
    // Raids never touch route progress
    assert_eq!(store.exploration(), &ExplorationProgress::on_route("terra_1", 2));
}

#[test]
fn test_raid_takes_priority_over_route() {
    let mut controller = controller();
    let mut store = InMemoryStore::with_creature(raider());
    let session = controller
        .start_battle(&mut store, Some("terra_1"), Some("raid_aqua"))
        .unwrap();
    assert_eq!(session.opponent.template_id, "raid_aqua");
    assert!(!store.exploration().is_exploring());
}

#[test]
fn test_fleeing_a_raid_still_scores() {
    let mut controller = controller();
    let mut store = InMemoryStore::with_creature(raider());
    controller.start_battle(&mut store, None, Some("raid_terra")).unwrap();
    // Two player turns land by tick 40
    for _ in 0..40 {
        controller.tick(&mut store).unwrap();
    }
    let settlement = controller.flee(&mut store).unwrap();
    assert_eq!(settlement.raid.map(|r| r.damage), Some(500));
    assert_eq!(store.player().raid_tokens, 5);
}
