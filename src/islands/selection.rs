//! Order-sensitive scoring of an island pick list.

use std::convert::Infallible;

use super::fertility::Fertility;
use super::island::Island;
use crate::sa::Scorer;

/// Scores the first `picks` islands of an ordering as a settlement plan.
///
/// Islands are taken in order. Each one scores only the fertilities that no
/// earlier pick already supplies; its slots and size always count. Annealing
/// over the island order therefore searches for the best set of `picks`
/// islands and the order in which to claim them.
///
/// # Examples
///
/// ```
/// use u_anneal::islands::{Fertility, Island, IslandSelection};
/// use u_anneal::sa::Scorer;
///
/// let fish = Island::new("fish").with_fertilities(Fertility::MACKEREL);
/// let more_fish = Island::new("more fish").with_fertilities(Fertility::MACKEREL);
///
/// // the second mackerel adds nothing but the island's size
/// let score = IslandSelection::new(2).score(&[fish, more_fish]).unwrap();
/// assert_eq!(score, 120.0 + 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IslandSelection {
    picks: usize,
}

impl IslandSelection {
    pub fn new(picks: usize) -> Self {
        Self { picks }
    }

    pub fn picks(&self) -> usize {
        self.picks
    }

    /// Score contributed by each picked island, in order.
    pub fn breakdown(&self, islands: &[Island]) -> Vec<f64> {
        let mut available = Fertility::ALL;
        islands
            .iter()
            .take(self.picks)
            .map(|island| {
                let score = island.score(available);
                available.remove(island.fertilities);
                score
            })
            .collect()
    }

    /// Fertilities supplied by the picked islands.
    pub fn coverage(&self, islands: &[Island]) -> Fertility {
        islands
            .iter()
            .take(self.picks)
            .map(|island| island.fertilities)
            .collect()
    }
}

impl Scorer<Island> for IslandSelection {
    type Error = Infallible;

    fn score(&self, islands: &[Island]) -> Result<f64, Infallible> {
        Ok(self.breakdown(islands).iter().sum())
    }
}
