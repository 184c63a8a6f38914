//! Bundled starter content: arena species, elemental routes, raid titans, items.

use std::collections::HashMap;

use super::types::*;
use crate::combat::element::Element;
use crate::creature::StatBlock;

const ENEMY_LUCK: u32 = 10;

fn stats(hp: u32, atk: u32, def: u32, spd: u32) -> StatBlock {
    StatBlock::new(hp, atk, def, spd, ENEMY_LUCK)
}

fn enemy(
    id: &str,
    name: &str,
    element: Element,
    level_range: (u32, u32),
    base_stats: StatBlock,
) -> OpponentTemplate {
    OpponentTemplate {
        id: id.to_string(),
        name: name.to_string(),
        element,
        stage: 1,
        level_range: Some(level_range),
        base_stats,
        loot: vec![],
        is_boss: false,
    }
}

fn boss(
    id: &str,
    name: &str,
    element: Element,
    level: u32,
    base_stats: StatBlock,
    drop: &str,
) -> OpponentTemplate {
    OpponentTemplate {
        loot: vec![LootEntry {
            item_id: drop.to_string(),
            chance: 0.5,
        }],
        is_boss: true,
        ..enemy(id, name, element, (level, level), base_stats)
    }
}

fn species(id: &str, name: &str, base_stats: StatBlock) -> OpponentTemplate {
    OpponentTemplate {
        id: id.to_string(),
        name: name.to_string(),
        element: Element::Neutral,
        stage: 1,
        level_range: None,
        base_stats,
        loot: vec![],
        is_boss: false,
    }
}

fn raid(id: &str, name: &str, element: Element, atk: u32, def: u32, spd: u32) -> OpponentTemplate {
    OpponentTemplate {
        id: id.to_string(),
        name: name.to_string(),
        element,
        stage: 4,
        level_range: Some((99, 99)),
        base_stats: StatBlock::new(1_000_000, atk, def, spd, 0),
        loot: vec![],
        is_boss: true,
    }
}

fn route(id: &str, name: &str, element: Element, required_level: u32) -> RouteDef {
    RouteDef {
        id: id.to_string(),
        name: name.to_string(),
        element,
        required_level,
        enemy_template_ids: ["m1", "m2", "m3", "mini"]
            .iter()
            .map(|slot| format!("{id}_{slot}"))
            .collect(),
        boss_template_id: Some(format!("{id}_boss")),
    }
}

fn item(id: &str, name: &str, kind: ItemKind, effect: Option<ItemEffect>) -> ItemDef {
    ItemDef {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        effect,
    }
}

fn route_enemies() -> Vec<OpponentTemplate> {
    use Element::*;
    // Tier 1 routes sit at levels 1-4, tier 2 routes at 5-8.
    let (m1, mini1, boss1) = ((1, 2), (3, 3), 4);
    let (m2, mini2, boss2) = ((5, 6), (7, 7), 8);
    vec![
        enemy("terra_1_m1", "Walking Boulder", Terra, m1, stats(80, 15, 25, 5)),
        enemy("terra_1_m2", "Mud Slime", Terra, m1, stats(90, 12, 20, 8)),
        enemy("terra_1_m3", "Sand Bat", Terra, m1, stats(60, 20, 10, 20)),
        enemy("terra_1_mini", "Stone Sentinel", Terra, mini1, stats(150, 25, 40, 10)),
        boss("terra_1_boss", "Laterite King", Terra, boss1, stats(300, 40, 50, 5), "evo_shard_terra"),
        enemy("terra_2_m1", "Gem Shard", Terra, m2, stats(100, 25, 30, 10)),
        enemy("terra_2_m2", "Glass Spider", Terra, m2, stats(110, 30, 15, 15)),
        enemy("terra_2_m3", "Stalagmite Doll", Terra, m2, stats(130, 20, 35, 5)),
        enemy("terra_2_mini", "Crystal Crab", Terra, mini2, stats(200, 35, 45, 12)),
        boss("terra_2_boss", "Crystal Wyrm", Terra, boss2, stats(400, 50, 40, 15), "evo_gem_terra"),
        enemy("aero_1_m1", "Breeze Sprite", Aero, m1, stats(60, 18, 10, 25)),
        enemy("aero_1_m2", "Drifting Seed", Aero, m1, stats(50, 15, 5, 30)),
        enemy("aero_1_m3", "Giant Locust", Aero, m1, stats(70, 20, 15, 20)),
        enemy("aero_1_mini", "Gale Wolf", Aero, mini1, stats(140, 30, 20, 35)),
        boss("aero_1_boss", "Sky Griffin", Aero, boss1, stats(280, 45, 30, 45), "evo_feather_aero"),
        enemy("aero_2_m1", "Mist Wraith", Aero, m2, stats(90, 25, 15, 25)),
        enemy("aero_2_m2", "Sky Ray", Aero, m2, stats(100, 28, 18, 22)),
        enemy("aero_2_m3", "Thunder Chick", Aero, m2, stats(80, 35, 10, 30)),
        enemy("aero_2_mini", "Harpy", Aero, mini2, stats(180, 45, 15, 40)),
        boss("aero_2_boss", "Cloud Djinn", Aero, boss2, stats(350, 60, 25, 45), "evo_cloud_aero"),
        enemy("aqua_1_m1", "Living Bubble", Aqua, m1, stats(70, 15, 15, 15)),
        enemy("aqua_1_m2", "Leaf Frog", Aqua, m1, stats(75, 18, 18, 18)),
        enemy("aqua_1_m3", "Lotus Sprite", Aqua, m1, stats(80, 16, 20, 10)),
        enemy("aqua_1_mini", "River Serpent", Aqua, mini1, stats(150, 28, 28, 20)),
        boss("aqua_1_boss", "Ancient Emerald Turtle", Aqua, boss1, stats(320, 35, 55, 10), "evo_shell_aqua"),
        enemy("aqua_2_m1", "Frost Jelly", Aqua, m2, stats(100, 25, 30, 10)),
        enemy("aqua_2_m2", "Penguin Soldier", Aqua, m2, stats(110, 30, 25, 15)),
        enemy("aqua_2_m3", "Icicle Fiend", Aqua, m2, stats(90, 32, 20, 18)),
        enemy("aqua_2_mini", "Siren", Aqua, mini2, stats(190, 45, 25, 28)),
        boss("aqua_2_boss", "Giant Ice Crab", Aqua, boss2, stats(400, 50, 50, 15), "evo_ice_aqua"),
        enemy("pyro_1_m1", "Ember Spirit", Pyro, m1, stats(60, 25, 10, 15)),
        enemy("pyro_1_m2", "Fire Bat", Pyro, m1, stats(50, 22, 12, 25)),
        enemy("pyro_1_m3", "Lava Slime", Pyro, m1, stats(70, 20, 18, 10)),
        enemy("pyro_1_mini", "Lava Golem", Pyro, mini1, stats(160, 35, 30, 8)),
        boss("pyro_1_boss", "Blaze Salamander", Pyro, boss1, stats(280, 50, 25, 20), "evo_tail_pyro"),
        enemy("pyro_2_m1", "Sand Snake", Pyro, m2, stats(80, 35, 15, 22)),
        enemy("pyro_2_m2", "Fire Ant", Pyro, m2, stats(70, 40, 20, 20)),
        enemy("pyro_2_m3", "Mummy Hound", Pyro, m2, stats(90, 32, 25, 15)),
        enemy("pyro_2_mini", "Cactus General", Pyro, mini2, stats(190, 50, 35, 15)),
        boss("pyro_2_boss", "Flame Scorpion King", Pyro, boss2, stats(380, 65, 40, 18), "evo_stinger_pyro"),
    ]
}

fn items() -> Vec<ItemDef> {
    use ItemKind::*;
    let heal = |hunger: i32, mood: i32, hp: u32| ItemEffect {
        hunger,
        mood,
        hp,
        hp_percent: 0.0,
    };
    let mut items = vec![
        item("food_meat", "Meat on the Bone", Consumable, Some(heal(20, 0, 10))),
        item("food_apple", "Wild Apple", Consumable, Some(heal(10, 5, 5))),
        item("potion_hp", "Restoring Tonic", Consumable, Some(heal(0, 0, 50))),
        item(
            "potion_hp_big",
            "Greater Tonic",
            Consumable,
            Some(ItemEffect {
                hp_percent: 50.0,
                ..Default::default()
            }),
        ),
        item("stone_terra", "Earth Stone", EvoMaterial, None),
        item("stone_aero", "Wind Stone", EvoMaterial, None),
        item("stone_aqua", "Water Stone", EvoMaterial, None),
        item("stone_pyro", "Fire Stone", EvoMaterial, None),
    ];
    for (id, name) in [
        ("evo_shard_terra", "Laterite Shard"),
        ("evo_gem_terra", "Crystal Core"),
        ("evo_feather_aero", "Griffin Feather"),
        ("evo_cloud_aero", "Bottled Cloud"),
        ("evo_shell_aqua", "Emerald Shell"),
        ("evo_ice_aqua", "Everfrost Claw"),
        ("evo_tail_pyro", "Salamander Tail"),
        ("evo_stinger_pyro", "Scorpion Stinger"),
    ] {
        items.push(item(id, name, Material, None));
    }
    items
}

impl ContentTables {
    /// The bundled default content set.
    pub fn starter() -> Self {
        use Element::*;
        let species = vec![
            species("starter_pupper", "Pupper", stats(100, 20, 20, 20)),
            species("starter_drago", "Drago", StatBlock::new(80, 30, 15, 25, 10)),
            species("starter_jelly", "Jelly", stats(150, 15, 15, 15)),
            species("starter_tori", "Tori", StatBlock::new(90, 25, 10, 35, 15)),
            species("starter_sprout", "Sprout", stats(110, 15, 30, 15)),
            species("starter_robo", "Robo", StatBlock::new(100, 20, 20, 20, 25)),
        ];

        let raid_bosses = [
            raid("raid_terra", "Terra Titan", Terra, 100, 200, 10),
            raid("raid_pyro", "Pyro Titan", Pyro, 250, 50, 40),
            raid("raid_aqua", "Aqua Titan", Aqua, 150, 150, 30),
            raid("raid_aero", "Aero Titan", Aero, 180, 80, 100),
        ];

        let routes = vec![
            route("terra_1", "Laterite Valley", Terra, 1),
            route("terra_2", "Crystal Cave", Terra, 5),
            route("aero_1", "Windswept Meadow", Aero, 1),
            route("aero_2", "Cloudveil Peak", Aero, 5),
            route("aqua_1", "Emerald Lake", Aqua, 1),
            route("aqua_2", "Undersea Ice Grotto", Aqua, 5),
            route("pyro_1", "Volcano Crater", Pyro, 1),
            route("pyro_2", "Scorching Desert", Pyro, 5),
        ];

        Self {
            species,
            enemies: by_id(route_enemies()),
            raid_bosses: by_id(raid_bosses),
            routes,
            items: items().into_iter().map(|i| (i.id.clone(), i)).collect(),
        }
    }
}

fn by_id(templates: impl IntoIterator<Item = OpponentTemplate>) -> HashMap<String, OpponentTemplate> {
    templates.into_iter().map(|t| (t.id.clone(), t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_slot_resolves() {
        let tables = ContentTables::starter();
        assert_eq!(tables.routes.len(), 8);
        for route in &tables.routes {
            assert_eq!(route.enemy_template_ids.len(), 4, "{}", route.id);
            for id in &route.enemy_template_ids {
                assert!(tables.enemy(id).is_ok(), "missing {}", id);
            }
            let boss_id = route.boss_template_id.as_deref().unwrap();
            assert!(tables.enemy(boss_id).unwrap().is_boss);
        }
    }

    #[test]
    fn test_every_drop_is_a_known_item() {
        let tables = ContentTables::starter();
        for template in tables.enemies.values() {
            for entry in &template.loot {
                assert!(tables.item(&entry.item_id).is_ok(), "{}", entry.item_id);
            }
        }
    }

    #[test]
    fn test_level_ranges_are_ordered() {
        let tables = ContentTables::starter();
        for template in tables.enemies.values().chain(tables.raid_bosses.values()) {
            let (min, max) = template.level_range.unwrap();
            assert!(min >= 1 && min <= max, "{}", template.id);
        }
    }

    #[test]
    fn test_raid_titans_have_huge_hp() {
        let tables = ContentTables::starter();
        assert_eq!(tables.raid_bosses.len(), 4);
        for titan in tables.raid_bosses.values() {
            assert_eq!(titan.base_stats.max_hp, 1_000_000);
            assert_eq!(titan.level_range, Some((99, 99)));
        }
    }

    #[test]
    fn test_starter_json_roundtrip_keeps_routes() {
        let tables = ContentTables::starter();
        let json = serde_json::to_string(&tables).unwrap();
        let parsed = ContentTables::from_json(&json).unwrap();
        assert_eq!(parsed.routes, tables.routes);
        assert_eq!(parsed.enemies.len(), tables.enemies.len());
    }
}
