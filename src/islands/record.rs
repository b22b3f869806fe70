//! Comma-separated island records.
//!
//! One island per line, at least 18 fields:
//!
//! ```text
//! Name,Mackerel,Lavender,Resin,Olive,Grapes,Flax,Murex Snail,Sandarac,Oyster,Sturgeon,Marble,Iron,Mineral,Gold Ore,Mountains,Rivers,Size
//! ```
//!
//! Fertility columns are present when non-empty (conventionally `1`).
//! `Size` is `XL`, `L`, `M` or `S`. Columns past the eighteenth are ignored.
//! Blank lines and lines starting with `#` are skipped by [`read_islands`].

use std::io::Read;
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;

use csv::{Reader, ReaderBuilder, StringRecord};
use thiserror::Error;

use super::fertility::Fertility;
use super::island::{Island, IslandSize};

/// Number of comma-separated fields an island record needs.
pub const FIELD_COUNT: usize = 2 + Fertility::COUNT + 2;

const MOUNTAINS: usize = 1 + Fertility::COUNT;
const RIVERS: usize = MOUNTAINS + 1;
const SIZE: usize = RIVERS + 1;

/// Error reading island records.
#[derive(Debug, Error)]
pub enum IslandParseError {
    #[error("expected at least {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid {column} count {value:?}: {source}")]
    InvalidSlots {
        column: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: {source}")]
    AtLine {
        line: u64,
        #[source]
        source: Box<IslandParseError>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn record_reader() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).comment(Some(b'#')).flexible(true);
    builder
}

impl TryFrom<&StringRecord> for Island {
    type Error = IslandParseError;

    fn try_from(record: &StringRecord) -> Result<Self, Self::Error> {
        if record.len() < FIELD_COUNT {
            return Err(IslandParseError::FieldCount {
                expected: FIELD_COUNT,
                found: record.len(),
            });
        }

        // presence is any non-empty text, whitespace included
        let fertilities = (0..Fertility::COUNT)
            .filter(|&i| !record[i + 1].is_empty())
            .filter_map(Fertility::from_index)
            .collect();

        Ok(Island {
            name: record[0].to_string(),
            fertilities,
            mountain_slots: parse_slots("mountain", &record[MOUNTAINS])?,
            river_slots: parse_slots("river", &record[RIVERS])?,
            size: IslandSize::from_code(&record[SIZE]),
        })
    }
}

impl FromStr for Island {
    type Err = IslandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut reader = record_reader().from_reader(line.as_bytes());
        let mut record = StringRecord::new();
        if !reader.read_record(&mut record)? {
            return Err(IslandParseError::FieldCount {
                expected: FIELD_COUNT,
                found: 0,
            });
        }
        Island::try_from(&record)
    }
}

fn parse_slots(column: &'static str, value: &str) -> Result<u32, IslandParseError> {
    value
        .trim()
        .parse()
        .map_err(|source| IslandParseError::InvalidSlots {
            column,
            value: value.to_string(),
            source,
        })
}

impl Island {
    /// Formats the island as one record line (without newline).
    pub fn to_record(&self) -> String {
        let mut fields = Vec::with_capacity(FIELD_COUNT);
        fields.push(self.name.clone());
        for i in 0..Fertility::COUNT {
            let present = Fertility::from_index(i).is_some_and(|f| self.has_fertility(f));
            fields.push(String::from(if present { "1" } else { "" }));
        }
        fields.push(self.mountain_slots.to_string());
        fields.push(self.river_slots.to_string());
        fields.push(self.size.code().to_string());
        fields.join(",")
    }
}

/// Reads every island record from `reader`.
///
/// # Errors
///
/// The first malformed record, tagged with its 1-based line number, or the
/// underlying CSV or I/O error.
pub fn read_islands<R: Read>(reader: R) -> Result<Vec<Island>, IslandParseError> {
    collect_islands(record_reader().from_reader(reader))
}

/// Reads every island record from the file at `path`.
pub fn load_islands(path: impl AsRef<Path>) -> Result<Vec<Island>, IslandParseError> {
    collect_islands(record_reader().from_path(path)?)
}

fn collect_islands<R: Read>(mut reader: Reader<R>) -> Result<Vec<Island>, IslandParseError> {
    let mut islands = Vec::new();
    for result in reader.records() {
        let record = result?;
        let island = Island::try_from(&record).map_err(|e| IslandParseError::AtLine {
            line: record.position().map_or(0, |p| p.line()),
            source: Box::new(e),
        })?;
        islands.push(island);
    }
    tracing::debug!(count = islands.len(), "read island records");
    Ok(islands)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "#Name,Mackerel,Lavender,Resin,Olive,Grapes,Flax,Murex Snail,\
                          Sandarac,Oyster,Sturgeon,Marble,Iron,Mineral,Gold Ore,Mountains,Rivers,Size";

    #[test]
    fn test_parse_record() {
        let island: Island = "Ostia,1,,,1,,,,,,,1,,,,8,12,L".parse().unwrap();
        assert_eq!(island.name, "Ostia");
        assert_eq!(
            island.fertilities,
            Fertility::MACKEREL | Fertility::OLIVE | Fertility::MARBLE
        );
        assert_eq!(island.mountain_slots, 8);
        assert_eq!(island.river_slots, 12);
        assert_eq!(island.size, IslandSize::Large);
    }

    #[test]
    fn test_parse_trailing_carriage_return() {
        let island: Island = "Capri,,,,,,,,,,,,,,1,0,3,XL\r".parse().unwrap();
        assert_eq!(island.fertilities, Fertility::GOLD_ORE);
        assert_eq!(island.size, IslandSize::ExtraLarge);
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let err = "Short,1,2".parse::<Island>().unwrap_err();
        assert!(matches!(err, IslandParseError::FieldCount { found: 3, .. }));
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let island: Island = "Ostia,1,,,1,,,,,,,1,,,,8,12,L,".parse().unwrap();
        assert_eq!(island.size, IslandSize::Large);
        assert_eq!(island.river_slots, 12);

        let island: Island = "Ostia,1,,,1,,,,,,,1,,,,8,12,L,note,more".parse().unwrap();
        assert_eq!(island.name, "Ostia");
        assert_eq!(island.mountain_slots, 8);
    }

    #[test]
    fn test_parse_whitespace_flag_is_present() {
        let island: Island = "X, ,,,,,,,,,,,,,,0,0,S".parse().unwrap();
        assert_eq!(island.fertilities, Fertility::MACKEREL);
    }

    #[test]
    fn test_parse_slots_tolerate_padding() {
        let island: Island = "Elba,,,,,,,,,,,,,, , 10 ,2,S".parse().unwrap();
        assert_eq!(island.fertilities, Fertility::GOLD_ORE);
        assert_eq!(island.mountain_slots, 10);
    }

    #[test]
    fn test_parse_bad_slots() {
        let err = "Bad,,,,,,,,,,,,,,,many,2,S".parse::<Island>().unwrap_err();
        assert!(matches!(err, IslandParseError::InvalidSlots { column: "mountain", .. }));
    }

    #[test]
    fn test_to_record_parses_back() {
        let record = "Ostia,1,,,1,,,,,,,1,,,,8,12,L";
        let island: Island = record.parse().unwrap();
        assert_eq!(island.to_record(), record);
    }

    #[test]
    fn test_read_islands_skips_header_and_blanks() {
        let text = format!(
            "{HEADER}\n\
             Ostia,1,,,1,,,,,,,1,,,,8,12,L\n\
             \n\
             Capri,,,,,,,,,,,,,,1,0,3,XL\n"
        );
        let islands = read_islands(text.as_bytes()).unwrap();
        assert_eq!(islands.len(), 2);
        assert_eq!(islands[1].name, "Capri");
    }

    #[test]
    fn test_read_islands_reports_line() {
        let text = "Ostia,1,,,1,,,,,,,1,,,,8,12,L\nbroken\n";
        let err = read_islands(text.as_bytes()).unwrap_err();
        assert!(matches!(err, IslandParseError::AtLine { line: 2, .. }));
        assert!(err.to_string().starts_with("line 2:"));
    }

    #[test]
    fn test_load_islands_missing_file() {
        let err = load_islands("/nonexistent/islands.csv").unwrap_err();
        assert!(matches!(err, IslandParseError::Csv(ref e) if e.is_io_error()));
    }
}
