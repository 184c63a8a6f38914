use rand::Rng;

use crate::content::LootEntry;

/// Rolls every loot entry independently. An entry drops one unit when a
/// uniform `[0, 1)` draw is at most its chance.
pub fn roll_loot(loot: &[LootEntry], rng: &mut impl Rng) -> Vec<String> {
    loot.iter()
        .filter(|entry| rng.gen::<f64>() <= entry.chance)
        .map(|entry| entry.item_id.clone())
        .collect()
}

/// Gold for beating an opponent of `level`.
pub fn gold_for_level(level: u32) -> u64 {
    level as u64 * crate::core::constants::GOLD_PER_LEVEL
}

/// Experience for beating an opponent of `level`.
pub fn experience_for_level(level: u32) -> u64 {
    level as u64 * crate::core::constants::EXP_PER_LEVEL
}
