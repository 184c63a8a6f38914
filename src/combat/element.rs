//! Elemental tags and the type-effectiveness matrix.
//!
//! Terra beats Aero, Aero beats Aqua, Aqua beats Pyro, Pyro beats Terra.
//! The relationship is one-directional: reversing a winning pair yields the
//! resisted multiplier, never a reciprocal bonus. Neutral is 1.0 both ways.

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    NEUTRAL_MULTIPLIER, NOT_VERY_EFFECTIVE_MULTIPLIER, SUPER_EFFECTIVE_MULTIPLIER,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Terra,
    Aero,
    Aqua,
    Pyro,
    #[default]
    Neutral,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Terra,
        Element::Aero,
        Element::Aqua,
        Element::Pyro,
        Element::Neutral,
    ];

    /// The element this one is super-effective against.
    pub fn strong_against(self) -> Option<Element> {
        match self {
            Element::Terra => Some(Element::Aero),
            Element::Aero => Some(Element::Aqua),
            Element::Aqua => Some(Element::Pyro),
            Element::Pyro => Some(Element::Terra),
            Element::Neutral => None,
        }
    }

    /// The element this one is not very effective against.
    pub fn weak_against(self) -> Option<Element> {
        match self {
            Element::Terra => Some(Element::Pyro),
            Element::Aero => Some(Element::Terra),
            Element::Aqua => Some(Element::Aero),
            Element::Pyro => Some(Element::Aqua),
            Element::Neutral => None,
        }
    }
}

/// Damage multiplier for `attacker` hitting `defender`. Total over all pairs.
pub fn multiplier(attacker: Element, defender: Element) -> f64 {
    if attacker.strong_against() == Some(defender) {
        SUPER_EFFECTIVE_MULTIPLIER
    } else if attacker.weak_against() == Some(defender) {
        NOT_VERY_EFFECTIVE_MULTIPLIER
    } else {
        NEUTRAL_MULTIPLIER
    }
}

/// How a hit landed, for log text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effectiveness {
    Super,
    Normal,
    Resisted,
}

impl Effectiveness {
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier > NEUTRAL_MULTIPLIER {
            Effectiveness::Super
        } else if multiplier < NEUTRAL_MULTIPLIER {
            Effectiveness::Resisted
        } else {
            Effectiveness::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cycle_is_super_effective() {
        assert_eq!(multiplier(Element::Terra, Element::Aero), 1.5);
        assert_eq!(multiplier(Element::Aero, Element::Aqua), 1.5);
        assert_eq!(multiplier(Element::Aqua, Element::Pyro), 1.5);
        assert_eq!(multiplier(Element::Pyro, Element::Terra), 1.5);
    }

    #[test]
    fn test_reverse_cycle_is_resisted() {
        assert_eq!(multiplier(Element::Terra, Element::Pyro), 0.5);
        assert_eq!(multiplier(Element::Aero, Element::Terra), 0.5);
        assert_eq!(multiplier(Element::Aqua, Element::Aero), 0.5);
        assert_eq!(multiplier(Element::Pyro, Element::Aqua), 0.5);
    }

    #[test]
    fn test_reversed_super_pair_is_not_reciprocal_bonus() {
        // Aero vs Terra is the resisted direction, never a 1.5 bonus
        assert_ne!(multiplier(Element::Aero, Element::Terra), 1.5);
        // Opposite elements in the cycle do not interact
        assert_eq!(multiplier(Element::Terra, Element::Aqua), 1.0);
        assert_eq!(multiplier(Element::Aqua, Element::Terra), 1.0);
        assert_eq!(multiplier(Element::Aero, Element::Pyro), 1.0);
    }

    #[test]
    fn test_neutral_and_mirror_matches() {
        for element in Element::ALL {
            assert_eq!(multiplier(Element::Neutral, element), 1.0);
            assert_eq!(multiplier(element, Element::Neutral), 1.0);
            assert_eq!(multiplier(element, element), 1.0);
        }
    }

    #[test]
    fn test_effectiveness_from_multiplier() {
        assert_eq!(Effectiveness::from_multiplier(1.5), Effectiveness::Super);
        assert_eq!(Effectiveness::from_multiplier(1.0), Effectiveness::Normal);
        assert_eq!(Effectiveness::from_multiplier(0.5), Effectiveness::Resisted);
    }

    fn arb_element() -> impl Strategy<Value = Element> {
        prop::sample::select(Element::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_multiplier_in_known_set(a in arb_element(), d in arb_element()) {
            let m = multiplier(a, d);
            prop_assert!(m == 0.5 || m == 1.0 || m == 1.5, "got {}", m);
        }

        #[test]
        fn prop_super_effective_never_symmetric(a in arb_element(), d in arb_element()) {
            if multiplier(a, d) == 1.5 {
                prop_assert_eq!(multiplier(d, a), 0.5);
            }
        }
    }
}
