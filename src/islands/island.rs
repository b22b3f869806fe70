//! Latium island model and per-island scoring.

use std::fmt;

use super::fertility::Fertility;

/// Island size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IslandSize {
    ExtraLarge,
    #[default]
    Large,
    Medium,
    Small,
}

impl IslandSize {
    /// Score contribution of the island's size.
    pub fn weight(self) -> f64 {
        match self {
            IslandSize::ExtraLarge => 100.0,
            IslandSize::Large => 50.0,
            IslandSize::Medium => 20.0,
            IslandSize::Small => 10.0,
        }
    }

    /// Record code: `XL`, `L`, `M` or `S`.
    pub fn code(self) -> &'static str {
        match self {
            IslandSize::ExtraLarge => "XL",
            IslandSize::Large => "L",
            IslandSize::Medium => "M",
            IslandSize::Small => "S",
        }
    }

    /// Parses a record code. Unrecognised codes are read as `Small`.
    pub fn from_code(code: &str) -> IslandSize {
        match code {
            "XL" => IslandSize::ExtraLarge,
            "L" => IslandSize::Large,
            "M" => IslandSize::Medium,
            _ => IslandSize::Small,
        }
    }
}

impl fmt::Display for IslandSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A Latium island: fertilities, building slots and size.
///
/// # Examples
///
/// ```
/// use u_anneal::islands::{Fertility, Island, IslandSize};
///
/// let island = Island::new("Ostia")
///     .with_fertilities(Fertility::MACKEREL | Fertility::OLIVE | Fertility::MARBLE)
///     .with_river_slots(12)
///     .with_mountain_slots(8);
///
/// assert_eq!(island.size, IslandSize::Large);
/// assert_eq!(island.score(Fertility::ALL), 235.0);
/// assert_eq!(island.score(Fertility::NONE), 70.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Island {
    pub name: String,
    pub fertilities: Fertility,
    pub river_slots: u32,
    pub mountain_slots: u32,
    pub size: IslandSize,
}

impl Island {
    /// A large island with no fertilities and no slots.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fertilities: Fertility::NONE,
            river_slots: 0,
            mountain_slots: 0,
            size: IslandSize::default(),
        }
    }

    pub fn with_fertilities(mut self, fertilities: Fertility) -> Self {
        self.fertilities = fertilities;
        self
    }

    pub fn with_river_slots(mut self, slots: u32) -> Self {
        self.river_slots = slots;
        self
    }

    pub fn with_mountain_slots(mut self, slots: u32) -> Self {
        self.mountain_slots = slots;
        self
    }

    pub fn with_size(mut self, size: IslandSize) -> Self {
        self.size = size;
        self
    }

    pub fn has_fertility(&self, fertility: Fertility) -> bool {
        self.fertilities.contains(fertility)
    }

    pub fn add_fertility(&mut self, fertility: Fertility) {
        self.fertilities.insert(fertility);
    }

    pub fn remove_fertility(&mut self, fertility: Fertility) {
        self.fertilities.remove(fertility);
    }

    /// Scores the island, counting only fertilities that are in `include`.
    ///
    /// River slots are worth 1 each, plus 0.5 per slot for each of sturgeon
    /// and gold ore on the island. Mountain slots are worth 1 each, plus 0.5
    /// per slot with mineral. Slots and size always count, whatever
    /// `include` says.
    pub fn score(&self, include: Fertility) -> f64 {
        let fertility_score = (self.fertilities & include).weight();

        let rivers = f64::from(self.river_slots);
        let mut river_score = rivers;
        if self.has_fertility(Fertility::STURGEON) {
            river_score += 0.5 * rivers;
        }
        if self.has_fertility(Fertility::GOLD_ORE) {
            river_score += 0.5 * rivers;
        }

        let mountains = f64::from(self.mountain_slots);
        let mut mountain_score = mountains;
        if self.has_fertility(Fertility::MINERAL) {
            mountain_score += 0.5 * mountains;
        }

        fertility_score + river_score + mountain_score + self.size.weight()
    }
}
