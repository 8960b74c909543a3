// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Post-hoc checks over generated records.
//!
//! Validation is advisory. It never mutates its inputs and never stops
//! generation; constraint violations come back as structured data and the
//! caller decides whether any of them is fatal.

use crate::aggregate::{CoverageRow, FairnessRow, PayPeriodSummary, Summaries};
use crate::strategy::CapExhaustion;
use serde::{Deserialize, Serialize};
use watchbill_domain::PersonId;

/// Workload metric the fairness spread is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FairnessMetric {
    /// Watch records per person.
    TotalShifts,
    /// Pay periods with any paid record per person.
    PeriodsWorked,
    /// Paid hours per person.
    TotalHours,
}

impl FairnessMetric {
    /// Returns this metric's value for a fairness row.
    #[must_use]
    pub const fn value(&self, row: &FairnessRow) -> u32 {
        match self {
            Self::TotalShifts => row.total_shifts,
            Self::PeriodsWorked => row.periods_worked,
            Self::TotalHours => row.total_hours,
        }
    }

    /// Returns the metric name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TotalShifts => "total_shifts",
            Self::PeriodsWorked => "periods_worked",
            Self::TotalHours => "total_hours",
        }
    }
}

impl std::fmt::Display for FairnessMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Thresholds the validator checks against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Maximum paid hours per person per pay period.
    pub hour_cap: u32,
    /// Minimum Watch headcount per (date, shift).
    pub min_pax_per_shift: u32,
    /// Maximum allowed fairness spread.
    pub fairness_tolerance: u32,
    /// Metric the fairness spread is computed over.
    pub fairness_metric: FairnessMetric,
}

/// A (person, pay period) total above the cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourCapViolation {
    /// The person.
    pub person: PersonId,
    /// Pay period label.
    pub pay_period: String,
    /// Paid hours in the period.
    pub hours: u32,
    /// The cap.
    pub cap: u32,
}

/// Result of the hour-cap check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourCapReport {
    /// Whether no (person, pay period) exceeds the cap.
    pub passed: bool,
    /// Every offending pair.
    pub violations: Vec<HourCapViolation>,
}

/// Result of the coverage check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Whether every slot meets the minimum.
    pub passed: bool,
    /// Number of (date, shift) slots checked.
    pub slots_checked: usize,
    /// Every slot below the minimum.
    pub shortfalls: Vec<CoverageRow>,
}

/// Result of the fairness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairnessReport {
    /// Whether the spread is within tolerance.
    pub passed: bool,
    /// The metric used.
    pub metric: FairnessMetric,
    /// Lowest metric value.
    pub min: u32,
    /// Highest metric value.
    pub max: u32,
    /// `max - min`.
    pub spread: u32,
    /// The allowed spread.
    pub tolerance: u32,
}

/// Descriptive statistics over a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Rostered people.
    pub people: usize,
    /// Lowest (person, pay period) total.
    pub min_hours_per_period: u32,
    /// Highest (person, pay period) total.
    pub max_hours_per_period: u32,
    /// Mean (person, pay period) total.
    pub avg_hours_per_period: f64,
    /// Watch records.
    pub watch_days: u32,
    /// Admin records.
    pub admin_days: u32,
    /// Off records.
    pub off_days: u32,
    /// Normal Duty records.
    pub normal_duty_days: u32,
    /// Paid hours across all records.
    pub total_paid_hours: u64,
    /// Greedy slots where every candidate was at the cap.
    pub cap_exhaustions: usize,
}

/// The full validation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether all three checks passed.
    pub passed: bool,
    /// Hour-cap check.
    pub hour_cap: HourCapReport,
    /// Coverage check.
    pub coverage: CoverageReport,
    /// Fairness check.
    pub fairness: FairnessReport,
    /// Descriptive statistics.
    pub statistics: Statistics,
}

/// Runs the hour-cap, coverage, and fairness checks.
///
/// # Arguments
///
/// * `summaries` - The aggregated views of the run
/// * `cap_exhaustions` - Exhaustions reported by the strategy
/// * `policy` - The thresholds to check against
#[must_use]
pub fn validate(
    summaries: &Summaries,
    cap_exhaustions: &[CapExhaustion],
    policy: &ValidationPolicy,
) -> ValidationReport {
    let hour_cap: HourCapReport = check_hour_cap(&summaries.pay_periods, policy.hour_cap);
    let coverage: CoverageReport = check_coverage(&summaries.coverage);
    let fairness: FairnessReport = check_fairness(
        &summaries.fairness,
        policy.fairness_metric,
        policy.fairness_tolerance,
    );
    let statistics: Statistics = compute_statistics(summaries, cap_exhaustions.len());

    ValidationReport {
        passed: hour_cap.passed && coverage.passed && fairness.passed,
        hour_cap,
        coverage,
        fairness,
        statistics,
    }
}

/// Flags every (person, pay period) whose paid hours exceed `cap`.
#[must_use]
pub fn check_hour_cap(rows: &[PayPeriodSummary], cap: u32) -> HourCapReport {
    let violations: Vec<HourCapViolation> = rows
        .iter()
        .filter(|row| row.total_hours > cap)
        .map(|row| HourCapViolation {
            person: row.person.clone(),
            pay_period: row.pay_period.clone(),
            hours: row.total_hours,
            cap,
        })
        .collect();

    HourCapReport {
        passed: violations.is_empty(),
        violations,
    }
}

/// Collects every coverage row below its minimum.
#[must_use]
pub fn check_coverage(rows: &[CoverageRow]) -> CoverageReport {
    let shortfalls: Vec<CoverageRow> = rows
        .iter()
        .filter(|row| !row.coverage_ok)
        .cloned()
        .collect();

    CoverageReport {
        passed: shortfalls.is_empty(),
        slots_checked: rows.len(),
        shortfalls,
    }
}

/// Compares the spread of `metric` across people against `tolerance`.
///
/// An empty roster has a spread of zero.
#[must_use]
pub fn check_fairness(
    rows: &[FairnessRow],
    metric: FairnessMetric,
    tolerance: u32,
) -> FairnessReport {
    let values: Vec<u32> = rows.iter().map(|row| metric.value(row)).collect();
    let min: u32 = values.iter().copied().min().unwrap_or(0);
    let max: u32 = values.iter().copied().max().unwrap_or(0);
    let spread: u32 = max - min;

    FairnessReport {
        passed: spread <= tolerance,
        metric,
        min,
        max,
        spread,
        tolerance,
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_statistics(summaries: &Summaries, cap_exhaustions: usize) -> Statistics {
    let rows: &[PayPeriodSummary] = &summaries.pay_periods;
    let total_paid_hours: u64 = rows.iter().map(|row| u64::from(row.total_hours)).sum();
    let avg_hours_per_period: f64 = if rows.is_empty() {
        0.0
    } else {
        total_paid_hours as f64 / rows.len() as f64
    };

    Statistics {
        people: summaries.fairness.len(),
        min_hours_per_period: rows.iter().map(|row| row.total_hours).min().unwrap_or(0),
        max_hours_per_period: rows.iter().map(|row| row.total_hours).max().unwrap_or(0),
        avg_hours_per_period,
        watch_days: rows.iter().map(|row| row.watch_days).sum(),
        admin_days: rows.iter().map(|row| row.admin_days).sum(),
        off_days: rows.iter().map(|row| row.off_days).sum(),
        normal_duty_days: rows.iter().map(|row| row.normal_duty_days).sum(),
        total_paid_hours,
        cap_exhaustions,
    }
}
