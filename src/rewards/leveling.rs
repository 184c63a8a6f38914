use crate::core::constants::{EXP_THRESHOLD_GROWTH, STAT_GROWTH};
use crate::creature::Creature;

/// Next-level threshold after a level up.
pub fn next_threshold(current: u64) -> u64 {
    ((current as f64 * EXP_THRESHOLD_GROWTH).floor() as u64).max(1)
}

/// Adds experience and processes every level up it pays for.
///
/// Growth compounds on base stats only: the equipment bonus is taken out
/// before the first level and folded back in after the last. A creature
/// that gained any level is healed to full; otherwise hp is untouched.
/// Returns the number of levels gained.
pub fn apply_experience(creature: &mut Creature, experience: u64) -> u32 {
    creature.experience = creature.experience.saturating_add(experience);
    // A zero threshold would never drain
    creature.experience_to_next = creature.experience_to_next.max(1);

    let mut levels = 0;
    let mut base = creature.base_stats();
    while creature.experience >= creature.experience_to_next {
        creature.experience -= creature.experience_to_next;
        creature.level += 1;
        creature.experience_to_next = next_threshold(creature.experience_to_next);
        base = base.scaled(STAT_GROWTH);
        levels += 1;
    }

    if levels > 0 {
        creature.stats = base.plus(&creature.equipment_bonus);
        creature.heal_full();
    }
    levels
}
