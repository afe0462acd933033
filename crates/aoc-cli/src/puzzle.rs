//! Puzzle coordinates and their validation.
//!
//! Everything here is checked before any request leaves the machine.

use chrono::Datelike;

use crate::error::{AocError, Result};

/// The first Advent of Code event.
pub const FIRST_YEAR: i32 = 2015;
pub const LAST_DAY: u32 = 25;
pub const PARTS: u32 = 2;

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// A validated (year, day) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub year: i32,
    pub day: u32,
}

impl Puzzle {
    /// Validate against the current year.
    pub fn new(year: i32, day: u32) -> Result<Self> {
        Self::new_as_of(year, day, current_year())
    }

    /// Validate against an explicit "current" year.
    pub fn new_as_of(year: i32, day: u32, current_year: i32) -> Result<Self> {
        if !(1..=LAST_DAY).contains(&day) {
            return Err(AocError::InvalidDay(day));
        }
        if !(FIRST_YEAR..=current_year).contains(&year) {
            return Err(AocError::InvalidYear(year));
        }
        Ok(Self { year, day })
    }

    /// `{base}/{year}/day/{day}`
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}/day/{}", base_url.trim_end_matches('/'), self.year, self.day)
    }

    pub fn input_url(&self, base_url: &str) -> String {
        format!("{}/input", self.url(base_url))
    }

    pub fn answer_url(&self, base_url: &str) -> String {
        format!("{}/answer", self.url(base_url))
    }
}

/// Check a puzzle part number (1 or 2).
pub fn validate_part(part: u32) -> Result<u32> {
    if (1..=PARTS).contains(&part) {
        Ok(part)
    } else {
        Err(AocError::InvalidPart(part))
    }
}
