//! Latium island selection.
//!
//! A ready-made scoring domain for the annealer: islands carry a set of
//! fertilities, river and mountain building slots and a size class.
//! [`IslandSelection`] scores an ordering of islands so that annealing picks
//! the islands that together cover the most valuable fertilities.
//!
//! Island data is read from comma-separated records ([`read_islands`],
//! [`load_islands`]).

mod fertility;
mod island;
mod record;
mod selection;

pub use fertility::Fertility;
pub use island::{Island, IslandSize};
pub use record::{load_islands, read_islands, IslandParseError, FIELD_COUNT};
pub use selection::IslandSelection;
