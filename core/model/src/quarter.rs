//! FILENAME: core/model/src/quarter.rs
//! PURPOSE: Quarter tags ("2024-Q1") with chronological ordering.
//! CONTEXT: The quarterly sales trend sorts by (year, quarter number), not
//!          by string - "2024-Q9" must sort before "2024-Q10", which a plain
//!          string sort gets wrong.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a quarter tag cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuarterParseError {
    #[error("quarter tag missing '-Q' separator: {0}")]
    MissingSeparator(String),

    #[error("invalid year in quarter tag: {0}")]
    InvalidYear(String),

    #[error("invalid quarter number in quarter tag: {0}")]
    InvalidNumber(String),
}

/// A calendar quarter, ordered chronologically.
///
/// `Ord` compares by year first, then quarter number, which is the ordering
/// contract for the quarterly sales series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Quarter {
    pub year: u16,
    pub number: u8,
}

impl Quarter {
    pub fn new(year: u16, number: u8) -> Self {
        Quarter { year, number }
    }
}

impl FromStr for Quarter {
    type Err = QuarterParseError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let (year_part, number_part) = tag
            .split_once("-Q")
            .ok_or_else(|| QuarterParseError::MissingSeparator(tag.to_string()))?;

        let year: u16 = year_part
            .parse()
            .map_err(|_| QuarterParseError::InvalidYear(tag.to_string()))?;
        let number: u8 = number_part
            .parse()
            .map_err(|_| QuarterParseError::InvalidNumber(tag.to_string()))?;

        Ok(Quarter { year, number })
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-Q{}", self.year, self.number)
    }
}
