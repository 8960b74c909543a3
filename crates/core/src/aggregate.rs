// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stateless projections of duty records.
//!
//! Every view here is a pure grouping over immutable records; sums and
//! counts always match the underlying records.

use crate::record::DutyRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use time::Date;
use watchbill_domain::{DutyStatus, PayPeriod, PersonId, ShiftLabel};

/// Paid hours for one person in one ISO week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
    /// The person.
    pub person: PersonId,
    /// ISO week-numbering year.
    pub iso_year: i32,
    /// ISO week number.
    pub iso_week: u8,
    /// Paid hours.
    pub hours: u32,
}

/// One person's totals within one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodSummary {
    /// Pay period label.
    pub pay_period: String,
    /// The person.
    pub person: PersonId,
    /// Paid hours across all statuses.
    pub total_hours: u32,
    /// Watch records.
    pub watch_days: u32,
    /// Admin records.
    pub admin_days: u32,
    /// Off records.
    pub off_days: u32,
    /// Normal Duty records.
    pub normal_duty_days: u32,
}

impl PayPeriodSummary {
    /// Creates an empty row for `person` in `pay_period`.
    #[must_use]
    pub fn new(pay_period: &str, person: &PersonId) -> Self {
        Self {
            pay_period: pay_period.to_string(),
            person: person.clone(),
            total_hours: 0,
            watch_days: 0,
            admin_days: 0,
            off_days: 0,
            normal_duty_days: 0,
        }
    }
}

/// One person's workload across the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairnessRow {
    /// The person.
    pub person: PersonId,
    /// Watch records.
    pub total_shifts: u32,
    /// Paid hours.
    pub total_hours: u32,
    /// Pay periods with any paid record.
    pub periods_worked: u32,
}

/// Headcount on one shift on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageRow {
    /// The date.
    #[serde(with = "crate::iso_date")]
    pub date: Date,
    /// Pay period label.
    pub pay_period: String,
    /// The shift.
    pub shift: ShiftLabel,
    /// Watch records on this shift.
    pub pax: u32,
    /// Minimum required headcount.
    pub required: u32,
    /// Whether `pax` meets `required`.
    pub coverage_ok: bool,
}

/// All derived views of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summaries {
    /// Weekly hours, ordered by person then week.
    pub weekly: Vec<WeeklyHours>,
    /// Pay period totals, ordered by period then person.
    pub pay_periods: Vec<PayPeriodSummary>,
    /// Fairness rows, in roster order.
    pub fairness: Vec<FairnessRow>,
    /// Coverage rows, ordered by date then shift order.
    pub coverage: Vec<CoverageRow>,
}

impl Summaries {
    /// Builds every view.
    ///
    /// # Arguments
    ///
    /// * `records` - Generated duty records, in date order
    /// * `people` - Every rostered person, in roster order
    /// * `periods` - The pay periods of the span
    /// * `shifts` - The shift labels in rotation order
    /// * `min_pax` - Minimum headcount per shift
    #[must_use]
    pub fn build(
        records: &[DutyRecord],
        people: &[&PersonId],
        periods: &[PayPeriod],
        shifts: &[ShiftLabel],
        min_pax: u32,
    ) -> Self {
        Self {
            weekly: weekly_hours(records),
            pay_periods: pay_period_summary(records),
            fairness: fairness_summary(records, people),
            coverage: coverage_grid(records, periods, shifts, min_pax),
        }
    }
}

/// Sums paid hours per (person, ISO year, ISO week).
#[must_use]
pub fn weekly_hours(records: &[DutyRecord]) -> Vec<WeeklyHours> {
    let mut totals: BTreeMap<(PersonId, i32, u8), u32> = BTreeMap::new();

    for record in records {
        let (iso_year, iso_week, _) = record.date.to_iso_week_date();
        *totals
            .entry((record.person.clone(), iso_year, iso_week))
            .or_insert(0) += u32::from(record.paid_hours);
    }

    totals
        .into_iter()
        .map(|((person, iso_year, iso_week), hours)| WeeklyHours {
            person,
            iso_year,
            iso_week,
            hours,
        })
        .collect()
}

/// Totals hours and status counts per (pay period, person).
///
/// Periods are ordered by first appearance, which is chronological for
/// records in date order.
#[must_use]
pub fn pay_period_summary(records: &[DutyRecord]) -> Vec<PayPeriodSummary> {
    let mut period_order: HashMap<&str, usize> = HashMap::new();
    let mut rows: BTreeMap<(usize, &PersonId), PayPeriodSummary> = BTreeMap::new();

    for record in records {
        let next: usize = period_order.len();
        let ordinal: usize = *period_order
            .entry(record.pay_period.as_str())
            .or_insert(next);

        let row: &mut PayPeriodSummary = rows
            .entry((ordinal, &record.person))
            .or_insert_with(|| PayPeriodSummary::new(&record.pay_period, &record.person));

        row.total_hours += u32::from(record.paid_hours);
        match record.status {
            DutyStatus::Watch => row.watch_days += 1,
            DutyStatus::Admin => row.admin_days += 1,
            DutyStatus::Off => row.off_days += 1,
            DutyStatus::NormalDuty => row.normal_duty_days += 1,
        }
    }

    rows.into_values().collect()
}

/// Totals workload per person across the run.
///
/// Every rostered person gets a row, including those with no records.
/// Records for people outside `people` are ignored.
#[must_use]
pub fn fairness_summary(records: &[DutyRecord], people: &[&PersonId]) -> Vec<FairnessRow> {
    let mut rows: Vec<FairnessRow> = people
        .iter()
        .map(|person| FairnessRow {
            person: (*person).clone(),
            total_shifts: 0,
            total_hours: 0,
            periods_worked: 0,
        })
        .collect();
    let index: HashMap<&PersonId, usize> = people
        .iter()
        .enumerate()
        .map(|(position, person)| (*person, position))
        .collect();
    let mut worked: BTreeSet<(usize, &str)> = BTreeSet::new();

    for record in records {
        let Some(&position) = index.get(&record.person) else {
            continue;
        };
        let row: &mut FairnessRow = &mut rows[position];

        if record.status == DutyStatus::Watch {
            row.total_shifts += 1;
        }
        row.total_hours += u32::from(record.paid_hours);

        if record.paid_hours > 0 && worked.insert((position, record.pay_period.as_str())) {
            row.periods_worked += 1;
        }
    }

    rows
}

/// Counts Watch headcount for every (date, shift) in the span.
///
/// Slots with no records at all still get a row with `pax == 0`.
#[must_use]
pub fn coverage_grid(
    records: &[DutyRecord],
    periods: &[PayPeriod],
    shifts: &[ShiftLabel],
    min_pax: u32,
) -> Vec<CoverageRow> {
    let mut pax: HashMap<(Date, &ShiftLabel), u32> = HashMap::new();

    for record in records {
        if record.status != DutyStatus::Watch {
            continue;
        }
        if let Some(shift) = &record.shift {
            *pax.entry((record.date, shift)).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<CoverageRow> = Vec::new();
    for period in periods {
        for date in period.days() {
            for shift in shifts {
                let count: u32 = pax.get(&(date, shift)).copied().unwrap_or(0);
                rows.push(CoverageRow {
                    date,
                    pay_period: period.label().to_string(),
                    shift: shift.clone(),
                    pax: count,
                    required: min_pax,
                    coverage_ok: count >= min_pax,
                });
            }
        }
    }

    rows
}
