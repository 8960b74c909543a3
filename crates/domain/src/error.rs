// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::PersonId;
use time::Date;

/// Errors that can occur while building or validating roster inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The calendar span ends before it starts.
    EndBeforeStart {
        /// The configured start date.
        start_date: Date,
        /// The configured end date.
        end_date: Date,
    },
    /// Pay period length must be at least one day.
    InvalidPeriodLength {
        /// The invalid length value.
        days: u16,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// The roster has no people at all.
    EmptyRoster,
    /// A crew has no members.
    EmptyCrew {
        /// The crew name.
        crew: String,
    },
    /// A crew name is empty.
    InvalidCrewName,
    /// A person ID is empty.
    InvalidPersonId,
    /// The same person appears more than once in the roster.
    DuplicatePerson {
        /// The duplicated person.
        person: PersonId,
    },
    /// A crew offset does not fall inside the rotation pattern.
    CrewOffsetOutOfRange {
        /// The crew name.
        crew: String,
        /// The configured offset.
        offset: u16,
        /// The pattern length.
        pattern_len: usize,
    },
    /// A rotation pattern has no days.
    EmptyPattern,
    /// A rotation pattern contains no on-duty days.
    PatternWithoutDuty,
    /// A rotation pattern string contains an unrecognised character.
    InvalidPatternCharacter {
        /// The offending character.
        character: char,
        /// Zero-based position in the input string.
        position: usize,
    },
    /// Named pattern preset is not known.
    UnknownPatternPreset(String),
    /// Staffing mode is not known.
    UnknownStaffingMode(String),
    /// Duty status is not known.
    UnknownDutyStatus(String),
    /// Two patterns that must be complementary are not.
    PatternsNotComplementary {
        /// The first pattern, rendered.
        pattern_a: String,
        /// The second pattern, rendered.
        pattern_b: String,
    },
    /// A pattern that must span a pay period has the wrong length.
    PatternLengthMismatch {
        /// The expected length (pay period days).
        expected: usize,
        /// The actual pattern length.
        actual: usize,
    },
    /// People drawn per pay period must be a positive, even number.
    InvalidPeoplePerPeriod {
        /// The invalid count.
        count: usize,
    },
    /// The pool cannot supply the people drawn per pay period.
    PoolTooSmall {
        /// People in the pool.
        pool_size: usize,
        /// People required per pay period.
        required: usize,
    },
    /// Shift length must be positive.
    InvalidShiftHours {
        /// The invalid hours value.
        hours: u16,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndBeforeStart {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "End date {end_date} is before start date {start_date}"
                )
            }
            Self::InvalidPeriodLength { days } => {
                write!(
                    f,
                    "Invalid pay period length: {days}. Must be at least 1 day"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::EmptyRoster => write!(f, "Roster has no personnel"),
            Self::EmptyCrew { crew } => write!(f, "Crew '{crew}' has no members"),
            Self::InvalidCrewName => write!(f, "Crew name cannot be empty"),
            Self::InvalidPersonId => write!(f, "Person ID cannot be empty"),
            Self::DuplicatePerson { person } => {
                write!(f, "Person '{person}' appears more than once in the roster")
            }
            Self::CrewOffsetOutOfRange {
                crew,
                offset,
                pattern_len,
            } => {
                write!(
                    f,
                    "Crew '{crew}' offset {offset} is outside the {pattern_len}-day pattern"
                )
            }
            Self::EmptyPattern => write!(f, "Rotation pattern has no days"),
            Self::PatternWithoutDuty => {
                write!(f, "Rotation pattern has no on-duty days")
            }
            Self::InvalidPatternCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "Invalid rotation pattern character '{character}' at position {position}"
                )
            }
            Self::UnknownPatternPreset(name) => {
                write!(f, "Unknown rotation pattern preset: {name}")
            }
            Self::UnknownStaffingMode(mode) => write!(f, "Unknown staffing mode: {mode}"),
            Self::UnknownDutyStatus(status) => write!(f, "Unknown duty status: {status}"),
            Self::PatternsNotComplementary {
                pattern_a,
                pattern_b,
            } => {
                write!(
                    f,
                    "Patterns {pattern_a} and {pattern_b} are not complementary"
                )
            }
            Self::PatternLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Pattern length {actual} does not match pay period length {expected}"
                )
            }
            Self::InvalidPeoplePerPeriod { count } => {
                write!(
                    f,
                    "Invalid people per period: {count}. Must be a positive even number"
                )
            }
            Self::PoolTooSmall {
                pool_size,
                required,
            } => {
                write!(
                    f,
                    "Pool of {pool_size} cannot supply {required} people per pay period"
                )
            }
            Self::InvalidShiftHours { hours } => {
                write!(f, "Invalid shift length: {hours} hours. Must be positive")
            }
        }
    }
}

impl std::error::Error for DomainError {}
