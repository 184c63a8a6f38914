//! Battle flow integration tests
//!
//! Drives full battles through the controller and the in-memory store,
//! checking the tick loop, settlement and the published snapshot together.

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use spirit_bond::battle::BattleController;
use spirit_bond::combat::{BattleEvent, BattleResult, Element, LogTone};
use spirit_bond::content::ContentTables;
use spirit_bond::core::{EngineConfig, EngineError};
use spirit_bond::creature::{Creature, StatBlock};
use spirit_bond::exploration::ExplorationProgress;
use spirit_bond::store::{GameStore, InMemoryStore};

/// One neutral species pinned to level 1 so the arena draw is fixed.
const MIRROR_CONTENT: &str = r#"{
    "species": [{
        "id": "mirror", "name": "Mirror Pupper", "element": "Neutral", "stage": 1,
        "levelRange": [1, 1],
        "baseStats": {"hp":100,"maxHp":100,"attack":20,"defense":20,"speed":20,"luck":0},
        "loot": [{"itemId": "food_meat", "chance": 1.0}]
    }],
    "items": {
        "food_meat": {"id": "food_meat", "name": "Meat on the Bone", "type": "consumable",
                      "effect": {"hunger": 20, "hp": 10}}
    }
}"#;

fn controller(content: ContentTables) -> BattleController<ChaCha8Rng> {
    let mut controller = BattleController::with_rng(
        content,
        EngineConfig::default(),
        ChaCha8Rng::seed_from_u64(12345),
    );
    controller.set_fixed_day(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
    controller
}

fn pupper() -> Creature {
    Creature::new(
        "starter_pupper",
        "Pupper",
        Element::Neutral,
        StatBlock::new(100, 20, 20, 20, 10),
    )
}

// ============================================================================
// Lockstep mirror match
// ============================================================================

#[test]
fn test_mirror_match_full_flow() {
    let mut controller = controller(ContentTables::from_json(MIRROR_CONTENT).unwrap());
    let mut store = InMemoryStore::with_creature(pupper());

    let session = controller.start_battle(&mut store, None, None).unwrap();
    assert_eq!(session.opponent.level, 1);
    assert_eq!(session.opponent.stats.attack, 20);

    let mut ticks = 0;
    let mut player_hits = 0;
    let mut opponent_hits = 0;
    while controller.is_active() {
        for event in controller.tick(&mut store).unwrap() {
            match event {
                BattleEvent::PlayerAttack { damage, .. } => {
                    assert_eq!(damage, 10);
                    player_hits += 1;
                }
                BattleEvent::OpponentAttack { damage, .. } => {
                    assert_eq!(damage, 10);
                    opponent_hits += 1;
                }
                BattleEvent::Ended { result, timed_out } => {
                    assert_eq!(result, BattleResult::Win);
                    assert!(!timed_out);
                }
            }
        }
        ticks += 1;
    }

    assert_eq!((player_hits, opponent_hits), (10, 9));
    assert_eq!(ticks, 501);

    // Level 1 opponent: 10 gold, 20 exp, surviving hp written back
    let creature = store.creature().unwrap();
    assert_eq!(creature.stats.hp, 10);
    assert_eq!(creature.experience, 20);
    assert_eq!(creature.level, 1);
    assert_eq!(creature.vitals.hunger, 98);
    assert_eq!(creature.vitals.energy, 95);
    assert_eq!(store.player().gold, 10);
    assert_eq!(store.item_count("food_meat"), 1);

    let snapshot = controller.snapshot(&store);
    assert!(!snapshot.is_active);
    assert_eq!(snapshot.result, Some(BattleResult::Win));
    assert_eq!(snapshot.opponent_hp, 0);
    assert!(snapshot.log.len() <= 5);
    let last = snapshot.log.last().unwrap();
    assert_eq!(last.tone, LogTone::Reward);
    assert!(last.message.contains("Meat on the Bone"));
}

#[test]
fn test_further_ticks_after_end_do_nothing() {
    let mut controller = controller(ContentTables::from_json(MIRROR_CONTENT).unwrap());
    let mut store = InMemoryStore::with_creature(pupper());
    controller.start_battle(&mut store, None, None).unwrap();
    controller.run_to_completion(&mut store, 10_000).unwrap();
    let gold = store.player().gold;

    for _ in 0..10 {
        assert!(controller.tick(&mut store).unwrap().is_empty());
    }
    // Settled exactly once
    assert_eq!(store.player().gold, gold);
}

// ============================================================================
// Losing
// ============================================================================

#[test]
fn test_loss_leaves_one_hp_and_resets_route() {
    let mut controller = controller(ContentTables::starter());
    let weakling = Creature::new("w", "Weakling", Element::Neutral, StatBlock::new(5, 1, 0, 1, 0));
    let mut store = InMemoryStore::with_creature(weakling);

    store.set_exploration(ExplorationProgress::on_route("pyro_1", 2));
    controller.start_battle(&mut store, None, None).unwrap();
    let result = controller.run_to_completion(&mut store, 100_000).unwrap();

    assert_eq!(result, Some(BattleResult::Lose));
    let creature = store.creature().unwrap();
    assert_eq!(creature.stats.hp, 1);
    assert_eq!(creature.vitals.mood, 80);
    assert_eq!(creature.vitals.energy, 90);
    assert!(!store.exploration().is_exploring());
    assert_eq!(store.exploration().step, 0);
    assert_eq!(store.player().gold, 0);
}

#[test]
fn test_zero_hp_creature_loses_immediately() {
    let mut controller = controller(ContentTables::starter());
    let mut creature = pupper();
    creature.set_hp(0);
    let mut store = InMemoryStore::with_creature(creature);

    controller.start_battle(&mut store, None, None).unwrap();
    let events = controller.tick(&mut store).unwrap();
    assert_eq!(
        events,
        vec![BattleEvent::Ended {
            result: BattleResult::Lose,
            timed_out: false
        }]
    );
    assert_eq!(store.creature().unwrap().stats.hp, 1);
}

// ============================================================================
// Battle bag
// ============================================================================

#[test]
fn test_paused_heal_then_resume() {
    let mut controller = controller(ContentTables::starter());
    let mut creature = pupper();
    creature.set_hp(20);
    let mut store = InMemoryStore::with_creature(creature);
    store.add_inventory_item("potion_hp", 2);

    controller.start_battle(&mut store, None, None).unwrap();
    controller.pause();
    assert_eq!(controller.use_battle_item(&mut store, "potion_hp").unwrap(), 50);
    assert_eq!(controller.snapshot(&store).player_hp, 70);
    assert_eq!(store.item_count("potion_hp"), 1);

    let last = controller.snapshot(&store).log.last().cloned().unwrap();
    assert_eq!(last.tone, LogTone::Heal);

    controller.resume();
    controller.tick(&mut store).unwrap();
    assert!(controller.snapshot(&store).player_gauge > 0.0);
}

#[test]
fn test_battle_bag_needs_a_battle() {
    let mut controller = controller(ContentTables::starter());
    let mut store = InMemoryStore::with_creature(pupper());
    store.add_inventory_item("potion_hp", 1);
    assert!(matches!(
        controller.use_battle_item(&mut store, "potion_hp"),
        Err(EngineError::NoActiveBattle)
    ));
    assert!(matches!(
        controller.heal_player(&store, 10),
        Err(EngineError::NoActiveBattle)
    ));
    assert_eq!(store.item_count("potion_hp"), 1);
}

// ============================================================================
// Observers
// ============================================================================

#[test]
fn test_sessions_are_distinguishable() {
    let mut controller = controller(ContentTables::starter());
    let mut store = InMemoryStore::with_creature(pupper());

    controller.start_battle(&mut store, None, None).unwrap();
    let first = controller.snapshot(&store).session_id;
    controller.flee(&mut store).unwrap();
    controller.dismiss().unwrap();
    controller.start_battle(&mut store, None, None).unwrap();
    let second = controller.snapshot(&store).session_id;

    assert!(first.is_some());
    assert_ne!(first, second);
}

#[test]
fn test_snapshot_serializes_camel_case() {
    let mut controller = controller(ContentTables::starter());
    let mut store = InMemoryStore::with_creature(pupper());
    controller.start_battle(&mut store, None, None).unwrap();
    let json = serde_json::to_value(controller.snapshot(&store)).unwrap();
    assert_eq!(json["isActive"], true);
    assert_eq!(json["playerHp"], 100);
    assert!(json["log"].is_array());
}
