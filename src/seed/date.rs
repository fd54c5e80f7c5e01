use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Utc};

use crate::foundation::error::{ManifoldError, ManifoldResult};

const SEED_FORMAT: &str = "%Y-%m-%d";

/// A validated calendar date in ISO `YYYY-MM-DD` form, the sole input of a run.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Seed {
    text: String,
    #[serde(skip)]
    date: NaiveDate,
}

impl Seed {
    /// Parse a strict `YYYY-MM-DD` date string.
    pub fn parse(text: &str) -> ManifoldResult<Self> {
        if !has_iso_shape(text) {
            return Err(ManifoldError::invalid_seed(format!(
                "\"{text}\" is not in YYYY-MM-DD form"
            )));
        }
        let date = NaiveDate::parse_from_str(text, SEED_FORMAT).map_err(|e| {
            ManifoldError::invalid_seed(format!("\"{text}\" is not a calendar date: {e}"))
        })?;
        Ok(Self {
            text: text.to_owned(),
            date,
        })
    }

    /// Seed for an already-known date.
    pub fn from_date(date: NaiveDate) -> ManifoldResult<Self> {
        Self::parse(&date.format(SEED_FORMAT).to_string())
    }

    /// Seed for the current UTC date.
    pub fn today() -> ManifoldResult<Self> {
        Self::from_date(Utc::now().date_naive())
    }

    /// The seed text exactly as it keys the RNG.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Zero-based day of the year (1 January is day 0).
    pub fn day_of_year0(&self) -> u32 {
        self.date.ordinal0()
    }
}

fn has_iso_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl FromStr for Seed {
    type Err = ManifoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seed/date.rs"]
mod tests;
