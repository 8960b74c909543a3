// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod error;
mod pattern;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// ISO `YYYY-MM-DD` serde format shared by every date field in the crate.
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

pub use calendar::{
    CalendarSpan, DEFAULT_FIRST_PERIOD_NUMBER, DEFAULT_PERIOD_LENGTH_DAYS, PayPeriod,
};
pub use error::DomainError;
pub use pattern::{RotationPattern, staggered_offsets};
pub use types::{Crew, DutyStatus, PersonId, Roster, RosterShape, ShiftLabel, StaffingMode};
pub use validation::{
    validate_crew_fields, validate_crew_offsets, validate_people_unique, validate_roster,
    validate_shift_hours,
};
