//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.
//!
//! `AgentId` is a 0-based index into the nurse SoA arrays.  `HospitalId` and
//! `HouseId` are 1-based (the first generated hospital is `HospitalId(1)`),
//! matching the names shown to observers (`Hospital 1`, `House 1`).

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID": equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a nurse in SoA storage.
    pub struct AgentId(u32);
}

typed_id! {
    /// 1-based identifier of a hospital.
    pub struct HospitalId(u32);
}

typed_id! {
    /// 1-based identifier of a house.
    pub struct HouseId(u32);
}

impl AgentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Observer-facing label, `Nurse 1` for `AgentId(0)`.
    pub fn label(self) -> String {
        format!("Nurse {}", self.0 + 1)
    }

    /// Inverse of [`label`](Self::label).
    pub fn from_label(label: &str) -> Option<AgentId> {
        let n: u32 = label.strip_prefix("Nurse ")?.parse().ok()?;
        n.checked_sub(1).map(AgentId)
    }
}

/// Serde adapter writing an `AgentId` as its `Nurse n` label.
///
/// Use with `#[serde(with = "ns_core::ids::nurse_label")]`.
#[cfg(feature = "serde")]
pub mod nurse_label {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::AgentId;

    pub fn serialize<S: Serializer>(id: &AgentId, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&id.label())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<AgentId, D::Error> {
        let label = String::deserialize(deserializer)?;
        AgentId::from_label(&label).ok_or_else(|| D::Error::custom(format!("bad nurse label {label:?}")))
    }
}

impl HouseId {
    /// Position in the house list, or `None` for the `0` / `INVALID` ids.
    #[inline]
    pub fn slot(self) -> Option<usize> {
        if self == Self::INVALID {
            return None;
        }
        (self.0 as usize).checked_sub(1)
    }
}
