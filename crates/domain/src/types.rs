// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifies a single member of the personnel roster.
///
/// Person IDs are compared verbatim; the roster decides what they look like
/// (operating initials, employee numbers, generated codes such as `A01`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PersonId(String);

impl PersonId {
    /// Creates a new `PersonId`, trimming surrounding whitespace.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    /// Returns the ID value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PersonId {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<PersonId> for String {
    fn from(value: PersonId) -> Self {
        value.0
    }
}

/// A named shift slot such as `Days` or `Night 1900-0700`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftLabel(String);

impl ShiftLabel {
    /// Creates a new `ShiftLabel`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the label text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShiftLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named crew (or team) of people that rotate together.
///
/// Member order is significant: strategies that alternate shifts by member
/// position, and every report, follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crew {
    /// The crew name (e.g., "Team A", "Crew 3").
    name: String,
    /// Ordered crew members.
    members: Vec<PersonId>,
    /// Day offset into the rotation pattern. `None` lets the strategy stagger
    /// crews evenly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    offset: Option<u16>,
}

impl Crew {
    /// Creates a new `Crew` without an explicit offset.
    #[must_use]
    pub fn new(name: &str, members: Vec<PersonId>) -> Self {
        Self {
            name: name.to_string(),
            members,
            offset: None,
        }
    }

    /// Sets the crew's pattern offset.
    #[must_use]
    pub fn with_offset(mut self, offset: u16) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Creates a crew whose members are generated as `{prefix}{NN}`.
    ///
    /// `Crew::numbered("Team A", "A", 6)` produces members `A01` to `A06`.
    #[must_use]
    pub fn numbered(name: &str, prefix: &str, size: usize) -> Self {
        let members: Vec<PersonId> = (1..=size)
            .map(|n| PersonId::new(&format!("{prefix}{n:02}")))
            .collect();
        Self::new(name, members)
    }

    /// Returns the crew name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered members.
    #[must_use]
    pub fn members(&self) -> &[PersonId] {
        &self.members
    }

    /// Returns the explicit offset, if configured.
    #[must_use]
    pub const fn offset(&self) -> Option<u16> {
        self.offset
    }
}

/// The personnel backing a strategy.
///
/// Exactly one shape backs any given strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Roster {
    /// Named crews with ordered members.
    Crews(Vec<Crew>),
    /// A flat, ordered, cyclic pool of people.
    Pool(Vec<PersonId>),
}

impl Roster {
    /// Returns the roster shape.
    #[must_use]
    pub const fn shape(&self) -> RosterShape {
        match self {
            Self::Crews(_) => RosterShape::Crews,
            Self::Pool(_) => RosterShape::Pool,
        }
    }

    /// Returns every person in roster order.
    #[must_use]
    pub fn people(&self) -> Vec<&PersonId> {
        match self {
            Self::Crews(crews) => crews.iter().flat_map(|c| c.members.iter()).collect(),
            Self::Pool(pool) => pool.iter().collect(),
        }
    }

    /// Returns the number of people in the roster.
    #[must_use]
    pub fn headcount(&self) -> usize {
        match self {
            Self::Crews(crews) => crews.iter().map(|c| c.members.len()).sum(),
            Self::Pool(pool) => pool.len(),
        }
    }
}

/// Which roster shape a strategy consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterShape {
    /// Crew-based roster.
    Crews,
    /// Flat pool roster.
    Pool,
}

impl std::fmt::Display for RosterShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Crews => write!(f, "crews"),
            Self::Pool => write!(f, "pool"),
        }
    }
}

/// The duty status of one person on one day (or one slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DutyStatus {
    /// On duty and assigned to a shift.
    Watch,
    /// Not on duty, unpaid.
    Off,
    /// On duty by rotation but moved off the watch floor because the hour
    /// cap would otherwise be exceeded.
    Admin,
    /// Paid, not assigned to a shift.
    #[serde(rename = "Normal Duty")]
    NormalDuty,
}

impl DutyStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Watch => "Watch",
            Self::Off => "Off",
            Self::Admin => "Admin",
            Self::NormalDuty => "Normal Duty",
        }
    }

    /// Returns whether a record with this status carries a shift label.
    #[must_use]
    pub const fn is_on_shift(&self) -> bool {
        matches!(self, Self::Watch)
    }
}

impl FromStr for DutyStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Watch" | "On-Duty" | "Work" => Ok(Self::Watch),
            "Off" => Ok(Self::Off),
            "Admin" => Ok(Self::Admin),
            "Normal Duty" | "Normal-Duty" => Ok(Self::NormalDuty),
            _ => Err(DomainError::UnknownDutyStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Selects the shift label set and the length of each shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StaffingMode {
    /// Three 8-hour shifts: Days, Mids, Nights.
    #[default]
    ThreeByEight,
    /// Two 12-hour shifts: Day 0700-1900, Night 1900-0700.
    TwoByTwelve,
}

impl StaffingMode {
    /// Returns the ordered shift labels for this mode.
    #[must_use]
    pub fn shift_labels(&self) -> Vec<ShiftLabel> {
        let labels: &[&str] = match self {
            Self::ThreeByEight => &["Days", "Mids", "Nights"],
            Self::TwoByTwelve => &["Day 0700-1900", "Night 1900-0700"],
        };
        labels.iter().map(|l| ShiftLabel::new(l)).collect()
    }

    /// Returns the paid length of one shift, in hours.
    #[must_use]
    pub const fn shift_hours(&self) -> u16 {
        match self {
            Self::ThreeByEight => 8,
            Self::TwoByTwelve => 12,
        }
    }

    /// Converts this mode to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ThreeByEight => "three_by_eight",
            Self::TwoByTwelve => "two_by_twelve",
        }
    }
}

impl FromStr for StaffingMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "three_by_eight" | "3x8" => Ok(Self::ThreeByEight),
            "two_by_twelve" | "2x12" => Ok(Self::TwoByTwelve),
            _ => Err(DomainError::UnknownStaffingMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for StaffingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
