// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! On/off rotation patterns.
//!
//! A rotation pattern is a repeating cycle of on-duty and off-duty days.
//! Crews run the same pattern staggered by a day offset; the helpers here
//! answer how many crews a pattern needs and which cycle days a given set of
//! offsets leaves uncovered.
//!
//! Patterns are written with `O` for an on day and `F` for an off day.
//! Parsing also accepts `W`/`1` (on) and `X`/`0` (off), ignores whitespace
//! and `-`, and is case-insensitive.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 28-day Panama rotation (2-2-3), 50% duty, four crews.
const PANAMA: &str = "OOFFOOO FFOOFFF OOFFOOO FFOOFFF";

/// 28-day `DuPont` rotation, 50% duty, four crews.
const DUPONT: &str = "OOOO FFF OOO F OOO FFF OOOO FFFFFFF";

/// 10-day cycle: 3 on, 2 off, 2 on, 3 off.
const COA2: [bool; 10] = [
    true, true, true, false, false, true, true, false, false, false,
];

/// A repeating on/off duty cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RotationPattern {
    /// `true` for each on-duty day of the cycle.
    days: Vec<bool>,
}

impl RotationPattern {
    /// Creates a pattern from explicit on/off flags.
    ///
    /// # Errors
    ///
    /// Returns an error if `days` is empty.
    pub fn new(days: Vec<bool>) -> Result<Self, DomainError> {
        if days.is_empty() {
            return Err(DomainError::EmptyPattern);
        }
        Ok(Self { days })
    }

    /// Parses a pattern string such as `OOOFFOOFFF`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string has no days or contains an
    /// unrecognised character.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let mut days: Vec<bool> = Vec::with_capacity(input.len());

        for (position, character) in input.chars().enumerate() {
            match character.to_ascii_uppercase() {
                'O' | 'W' | '1' => days.push(true),
                'F' | 'X' | '0' => days.push(false),
                c if c.is_whitespace() || c == '-' => {}
                _ => {
                    return Err(DomainError::InvalidPatternCharacter {
                        character,
                        position,
                    });
                }
            }
        }

        Self::new(days)
    }

    /// Builds `on` consecutive on days followed by `off` off days.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting pattern is empty.
    pub fn fixed(on: usize, off: usize) -> Result<Self, DomainError> {
        let mut days: Vec<bool> = vec![true; on];
        days.extend(std::iter::repeat_n(false, off));
        Self::new(days)
    }

    /// Builds a block of `days_on` on days followed by enough off days that
    /// `crews` staggered crews tile the cycle exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error if `days_on` or `crews` is zero.
    pub fn simple(days_on: usize, crews: usize) -> Result<Self, DomainError> {
        if days_on == 0 {
            return Err(DomainError::PatternWithoutDuty);
        }
        if crews == 0 {
            return Err(DomainError::EmptyPattern);
        }
        Self::fixed(days_on, days_on * (crews - 1))
    }

    /// The 10-day COA2 cycle: 3 on, 2 off, 2 on, 3 off.
    #[must_use]
    pub fn coa2() -> Self {
        Self {
            days: COA2.to_vec(),
        }
    }

    /// The 14-day cycle of 11 on days followed by 3 off days.
    #[must_use]
    pub fn eleven_on_three_off() -> Self {
        let mut days: Vec<bool> = vec![true; 11];
        days.extend([false; 3]);
        Self { days }
    }

    /// Splits `len` days into an on half followed by an off half.
    ///
    /// The on half gets the extra day when `len` is odd. A zero length
    /// yields a single on day.
    #[must_use]
    pub fn halves(len: usize) -> Self {
        let len: usize = len.max(1);
        let on: usize = len.div_ceil(2);
        let mut days: Vec<bool> = vec![true; on];
        days.extend(std::iter::repeat_n(false, len - on));
        Self { days }
    }

    /// Looks up a named preset: `panama`, `dupont`, `coa2`, or `11-3`.
    ///
    /// # Errors
    ///
    /// Returns an error if the preset name is unknown.
    pub fn preset(name: &str) -> Result<Self, DomainError> {
        match name.to_lowercase().as_str() {
            "panama" => Self::parse(PANAMA),
            "dupont" => Self::parse(DUPONT),
            "coa2" => Ok(Self::coa2()),
            "11-3" | "eleven_three" => Ok(Self::eleven_on_three_off()),
            _ => Err(DomainError::UnknownPatternPreset(name.to_string())),
        }
    }

    /// Returns the cycle length in days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always `false`: construction rejects empty patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the on/off flags.
    #[must_use]
    pub fn days(&self) -> &[bool] {
        &self.days
    }

    /// Returns the cycle position for an unbounded (possibly negative) day.
    #[must_use]
    pub fn position(&self, day: i64) -> usize {
        // len() is at least 1 and far below i64::MAX
        let len: i64 = i64::try_from(self.days.len()).unwrap_or(i64::MAX);
        usize::try_from(day.rem_euclid(len)).unwrap_or(0)
    }

    /// Returns whether the cycle is on at `day`, wrapping in both directions.
    #[must_use]
    pub fn is_on(&self, day: i64) -> bool {
        self.days[self.position(day)]
    }

    /// Returns the number of on days per cycle.
    #[must_use]
    pub fn on_days(&self) -> usize {
        self.days.iter().filter(|d| **d).count()
    }

    /// Returns the share of the cycle spent on duty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn duty_fraction(&self) -> f64 {
        self.on_days() as f64 / self.days.len() as f64
    }

    /// Returns the logical negation of this pattern.
    #[must_use]
    pub fn complement(&self) -> Self {
        Self {
            days: self.days.iter().map(|d| !d).collect(),
        }
    }

    /// Returns whether exactly one of `self` and `other` is on for every day.
    #[must_use]
    pub fn is_complement_of(&self, other: &Self) -> bool {
        self.days.len() == other.days.len()
            && self.days.iter().zip(&other.days).all(|(a, b)| a != b)
    }

    /// Returns the fewest staggered crews that can cover every cycle day.
    ///
    /// Returns 0 for a pattern with no on days.
    #[must_use]
    pub fn min_crews_for_coverage(&self) -> usize {
        let on: usize = self.on_days();
        if on == 0 {
            return 0;
        }
        self.days.len().div_ceil(on)
    }

    /// Counts crews on duty at `day` when each runs this pattern shifted by
    /// its offset (`(day - offset) mod len`).
    #[must_use]
    pub fn crews_on_duty(&self, day: i64, offsets: &[u16]) -> usize {
        offsets
            .iter()
            .filter(|offset| self.is_on(day - i64::from(**offset)))
            .count()
    }

    /// Returns the cycle days on which no crew with the given offsets is on.
    #[must_use]
    pub fn uncovered_days(&self, offsets: &[u16]) -> Vec<usize> {
        (0..self.days.len())
            .filter(|day| {
                let day: i64 = i64::try_from(*day).unwrap_or(i64::MAX);
                self.crews_on_duty(day, offsets) == 0
            })
            .collect()
    }
}

/// Spreads `crews` offsets evenly across a cycle of `pattern_len` days.
///
/// Offset `i` is `round(i * pattern_len / crews)`.
#[must_use]
pub fn staggered_offsets(pattern_len: usize, crews: usize) -> Vec<u16> {
    if crews == 0 {
        return Vec::new();
    }

    (0..crews)
        .map(|i| {
            let offset: usize = (2 * i * pattern_len + crews) / (2 * crews);
            u16::try_from(offset % pattern_len.max(1)).unwrap_or(0)
        })
        .collect()
}

impl FromStr for RotationPattern {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RotationPattern {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::preset(&value).or_else(|_| Self::parse(&value))
    }
}

impl From<RotationPattern> for String {
    fn from(pattern: RotationPattern) -> Self {
        pattern.to_string()
    }
}

impl std::fmt::Display for RotationPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for on in &self.days {
            f.write_str(if *on { "O" } else { "F" })?;
        }
        Ok(())
    }
}
