//! The illness → cure table.

use std::collections::BTreeMap;

use ns_core::{Cure, Illness};

/// Fixed mapping from illness to the cure that resolves it.
///
/// Built once at startup and never mutated.  Lookups for an illness the
/// table does not list return `None`; nurses never fetch a cure for such a
/// house.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CureCatalog {
    cures: BTreeMap<Illness, Cure>,
}

impl CureCatalog {
    /// The reference table covering every [`Illness`].
    pub fn standard() -> Self {
        Self::from_pairs([
            (Illness::Lupus,         Cure::Voclosporin),
            (Illness::Alcoholism,    Cure::AaBrochures),
            (Illness::Frostbite,     Cure::Furnace),
            (Illness::FoodPoisoning, Cure::Pedialyte),
            (Illness::IglooFever,    Cure::GameConsole),
            (Illness::Loneliness,    Cure::TickleMeElmo),
        ])
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (Illness, Cure)>) -> Self {
        Self { cures: pairs.into_iter().collect() }
    }

    #[inline]
    pub fn cure_for(&self, illness: Illness) -> Option<Cure> {
        self.cures.get(&illness).copied()
    }

    /// Illnesses this catalog can cure, in `Illness` order.
    pub fn illnesses(&self) -> impl Iterator<Item = Illness> + '_ {
        self.cures.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.cures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cures.is_empty()
    }
}

impl Default for CureCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
