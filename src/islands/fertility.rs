//! Island fertility flag set.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Base weight of each fertility, indexed by bit position.
///
/// Tier 2 chains are worth the most, construction materials count half of
/// the tiers they feed.
const WEIGHTS: [f64; Fertility::COUNT] = [
    70.0, // mackerel: garum
    70.0, // lavender: soap
    50.0, // resin: amphorae
    50.0, // olive: olives
    30.0, // grapes: wine
    60.0, // flax: togas, loungers
    30.0, // murex snails: togas, loungers
    90.0, // sandarac: writing tablets, loungers, lyres
    30.0, // oyster: oysters with caviar
    30.0, // sturgeon: oysters with caviar
    45.0, // marble: forum, baths, temple, library, amphitheatre
    50.0, // iron: weapons, armor
    35.0, // mineral: fine glass, necklaces, mosaics
    20.0, // gold ore: necklaces, lyres
];

const NAMES: [&str; Fertility::COUNT] = [
    "Mackerel",
    "Lavender",
    "Resin",
    "Olive",
    "Grapes",
    "Flax",
    "Murex Snails",
    "Sandarac",
    "Oyster",
    "Sturgeon",
    "Marble",
    "Iron",
    "Mineral",
    "Gold Ore",
];

/// A set of Latium fertilities stored as a bitmask.
///
/// Bit order matches the column order of island records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fertility(u16);

impl Fertility {
    /// Number of distinct fertilities.
    pub const COUNT: usize = 14;

    pub const NONE: Fertility = Fertility(0);
    pub const MACKEREL: Fertility = Fertility(1 << 0);
    pub const LAVENDER: Fertility = Fertility(1 << 1);
    pub const RESIN: Fertility = Fertility(1 << 2);
    pub const OLIVE: Fertility = Fertility(1 << 3);
    pub const GRAPES: Fertility = Fertility(1 << 4);
    pub const FLAX: Fertility = Fertility(1 << 5);
    pub const MUREX_SNAILS: Fertility = Fertility(1 << 6);
    pub const SANDARAC: Fertility = Fertility(1 << 7);
    pub const OYSTER: Fertility = Fertility(1 << 8);
    pub const STURGEON: Fertility = Fertility(1 << 9);
    pub const MARBLE: Fertility = Fertility(1 << 10);
    pub const IRON: Fertility = Fertility(1 << 11);
    pub const MINERAL: Fertility = Fertility(1 << 12);
    pub const GOLD_ORE: Fertility = Fertility(1 << 13);
    pub const ALL: Fertility = Fertility((1 << Self::COUNT) - 1);

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Builds a set from raw bits, rejecting bits beyond the known flags.
    pub const fn from_bits(bits: u16) -> Option<Fertility> {
        if bits & !Self::ALL.0 == 0 {
            Some(Fertility(bits))
        } else {
            None
        }
    }

    /// The single flag at record column `index` (0-based).
    pub fn from_index(index: usize) -> Option<Fertility> {
        (index < Self::COUNT).then(|| Fertility(1 << index))
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every flag in `other` is also set in `self`.
    pub const fn contains(self, other: Fertility) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Fertility) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Fertility) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Fertility) {
        self.0 &= !other.0;
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates over the single flags set in `self`, in record order.
    pub fn iter(self) -> impl Iterator<Item = Fertility> {
        (0..Self::COUNT)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(|i| Fertility(1 << i))
    }

    /// Sum of the base weights of every flag in the set.
    pub fn weight(self) -> f64 {
        (0..Self::COUNT)
            .filter(|&i| self.0 & (1 << i) != 0)
            .map(|i| WEIGHTS[i])
            .sum()
    }

    /// Display name of a single flag. `None` for empty or multi-flag sets.
    pub fn name(self) -> Option<&'static str> {
        if self.0.count_ones() == 1 {
            Some(NAMES[self.0.trailing_zeros() as usize])
        } else {
            None
        }
    }
}

impl BitOr for Fertility {
    type Output = Fertility;

    fn bitor(self, rhs: Fertility) -> Fertility {
        Fertility(self.0 | rhs.0)
    }
}

impl BitOrAssign for Fertility {
    fn bitor_assign(&mut self, rhs: Fertility) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Fertility {
    type Output = Fertility;

    fn bitand(self, rhs: Fertility) -> Fertility {
        Fertility(self.0 & rhs.0)
    }
}

impl BitAndAssign for Fertility {
    fn bitand_assign(&mut self, rhs: Fertility) {
        self.0 &= rhs.0;
    }
}

impl Not for Fertility {
    type Output = Fertility;

    /// Complement within the known flags.
    fn not(self) -> Fertility {
        Fertility(!self.0 & Self::ALL.0)
    }
}

impl FromIterator<Fertility> for Fertility {
    fn from_iter<I: IntoIterator<Item = Fertility>>(iter: I) -> Self {
        iter.into_iter().fold(Fertility::NONE, |acc, f| acc | f)
    }
}

impl fmt::Display for Fertility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        for (n, flag) in self.iter().enumerate() {
            if n > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(flag.name().unwrap_or("?"))?;
        }
        Ok(())
    }
}
