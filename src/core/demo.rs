//! Synthetic patient generation for demos.

use std::str::FromStr;

use chrono::{NaiveDateTime, TimeDelta};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::core::severity::{MAX_SEVERITY, MIN_SEVERITY};

/// Names drawn for demo patients.
pub const DEMO_NAMES: [&str; 9] = [
    "Nguyen An",
    "Tran Binh",
    "Le Chi",
    "Pham Dung",
    "Hoang Em",
    "Vu Gia",
    "Dang Hoa",
    "Ly Khang",
    "Do Lan",
];

/// Layout of generated admission times.
pub const DEMO_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// How demo severities are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityMode {
    /// Uniform in 1-10 per patient.
    #[default]
    Random,
    /// The same severity for every patient.
    Fixed(u8),
}

impl SeverityMode {
    /// Fixed severity when `level` is in 1-10, otherwise random.
    #[must_use]
    pub fn from_level(level: i64) -> Self {
        u8::try_from(level)
            .ok()
            .filter(|value| (MIN_SEVERITY..=MAX_SEVERITY).contains(value))
            .map_or(Self::Random, Self::Fixed)
    }

    /// Draw a severity.
    pub fn draw<R: Rng>(self, rng: &mut R) -> u8 {
        match self {
            Self::Random => rng.random_range(MIN_SEVERITY..=MAX_SEVERITY),
            Self::Fixed(value) => value,
        }
    }
}

impl FromStr for SeverityMode {
    type Err = std::convert::Infallible;

    /// `"random"` or an integer; anything unusable falls back to random.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("random") {
            return Ok(Self::Random);
        }
        Ok(s.parse::<i64>().map_or(Self::Random, Self::from_level))
    }
}

/// Code of the form `BN###`, offset from the current heap size.
pub fn draw_code<R: Rng>(rng: &mut R, live: usize) -> String {
    format!("BN{:03}", live + rng.random_range(1..=999_usize))
}

/// A name from [`DEMO_NAMES`].
pub fn draw_name<R: Rng>(rng: &mut R) -> String {
    DEMO_NAMES
        .choose(rng)
        .copied()
        .unwrap_or(DEMO_NAMES[0])
        .to_string()
}

/// An admission time up to `window_minutes` before `now`.
pub fn draw_admission<R: Rng>(
    rng: &mut R,
    now: NaiveDateTime,
    window_minutes: u32,
) -> String {
    let back = rng.random_range(0..=window_minutes);
    (now - TimeDelta::minutes(i64::from(back)))
        .format(DEMO_TIME_FORMAT)
        .to_string()
}
