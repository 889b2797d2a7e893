// crates/popmap-core/src/lookup.rs
use crate::model::{Population, Year};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of asking a city for its population in one year.
///
/// There is no "zero means unknown" convention: a recorded zero is
/// `Present(0)`, a missing record is `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PopulationLookup {
    Present(Population),
    Absent,
}

impl PopulationLookup {
    #[inline]
    pub fn is_present(self) -> bool {
        matches!(self, PopulationLookup::Present(_))
    }

    #[inline]
    pub fn value(self) -> Option<Population> {
        match self {
            PopulationLookup::Present(n) => Some(n),
            PopulationLookup::Absent => None,
        }
    }
}

impl From<Option<Population>> for PopulationLookup {
    fn from(value: Option<Population>) -> Self {
        match value {
            Some(n) => PopulationLookup::Present(n),
            None => PopulationLookup::Absent,
        }
    }
}

/// Exact-key lookup of `year`. No interpolation between recorded years and
/// no range check.
#[inline]
pub fn lookup(populations: &BTreeMap<Year, Population>, year: Year) -> PopulationLookup {
    populations.get(&year).copied().into()
}
