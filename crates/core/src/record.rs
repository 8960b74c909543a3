// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Duty records, the atomic output of every rotation strategy.

use serde::{Deserialize, Serialize};
use time::Date;
use watchbill_domain::{DutyStatus, PayPeriod, PersonId, ShiftLabel};

/// One person's duty on one day, or in one shift slot for pool strategies.
///
/// Records are immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DutyRecord {
    /// The duty date.
    #[serde(with = "crate::iso_date")]
    pub date: Date,
    /// Label of the pay period containing `date`.
    pub pay_period: String,
    /// ISO 8601 week number of `date`.
    pub iso_week: u8,
    /// Crew or team name; `None` for pool strategies.
    pub unit: Option<String>,
    /// The person on (or off) duty.
    pub person: PersonId,
    /// The duty status.
    pub status: DutyStatus,
    /// The assigned shift; set only for `Watch`.
    pub shift: Option<ShiftLabel>,
    /// Hours paid for this record.
    pub paid_hours: u16,
}

impl DutyRecord {
    /// Creates a record from a day stamp and an assignment.
    #[must_use]
    pub fn new(
        stamp: &DayStamp,
        unit: Option<&str>,
        person: &PersonId,
        assignment: Assignment,
    ) -> Self {
        let (status, shift, paid_hours): (DutyStatus, Option<ShiftLabel>, u16) = match assignment {
            Assignment::Watch { shift, hours } => (DutyStatus::Watch, Some(shift), hours),
            Assignment::Off => (DutyStatus::Off, None, 0),
            Assignment::Admin => (DutyStatus::Admin, None, 0),
            Assignment::NormalDuty { hours } => (DutyStatus::NormalDuty, None, hours),
        };

        Self {
            date: stamp.date,
            pay_period: stamp.pay_period.clone(),
            iso_week: stamp.iso_week,
            unit: unit.map(String::from),
            person: person.clone(),
            status,
            shift,
            paid_hours,
        }
    }
}

/// What a strategy decided for one person on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// On watch on `shift`, paid `hours`.
    Watch {
        /// The assigned shift.
        shift: ShiftLabel,
        /// Paid hours.
        hours: u16,
    },
    /// Off duty.
    Off,
    /// Held off the watch floor by the hour cap; paid 0 here.
    Admin,
    /// Paid non-shift duty.
    NormalDuty {
        /// Paid hours.
        hours: u16,
    },
}

/// The calendar columns shared by every record on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayStamp {
    /// The date.
    pub date: Date,
    /// Pay period label.
    pub pay_period: String,
    /// ISO week number.
    pub iso_week: u8,
}

impl DayStamp {
    /// Stamps `date` within `period`.
    #[must_use]
    pub fn new(date: Date, period: &PayPeriod) -> Self {
        Self {
            date,
            pay_period: period.label().to_string(),
            iso_week: date.iso_week(),
        }
    }
}
