use crate::seed::date::Seed;

/// A named curve family with its fold count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Theme {
    /// Display name, shown in the watermark.
    pub name: &'static str,
    /// Dimension count `n`: folds per frame.
    pub dimensions: u32,
}

/// Ordered theme table; the day of year selects an entry.
pub const THEMES: [Theme; 3] = [
    Theme {
        name: "Calabi-Yau Quintic",
        dimensions: 5,
    },
    Theme {
        name: "Calabi-Yau Sextic",
        dimensions: 6,
    },
    Theme {
        name: "Calabi-Yau Septic",
        dimensions: 7,
    },
];

/// Background colors; one is picked per day from the seeded stream.
pub const BACKGROUNDS: [&str; 5] = ["#04040E", "#06061A", "#080814", "#050510", "#0A0A12"];

impl Theme {
    /// Theme for a zero-based day of year. Does not touch the RNG.
    pub fn for_day(day_of_year0: u32) -> Self {
        THEMES[day_of_year0 as usize % THEMES.len()]
    }

    /// Theme for the seed's date.
    pub fn for_seed(seed: &Seed) -> Self {
        Self::for_day(seed.day_of_year0())
    }
}

#[cfg(test)]
#[path = "../tests/unit/theme.rs"]
mod tests;
