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

mod aggregate;
mod config;
mod error;
mod ledger;
mod record;
mod run;
mod strategy;
mod validator;

#[cfg(test)]
mod tests;

// ISO `YYYY-MM-DD` serde format for dates in records and configuration.
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

// Re-export public types and functions
pub use aggregate::{
    CoverageRow, FairnessRow, PayPeriodSummary, Summaries, WeeklyHours, coverage_grid,
    fairness_summary, pay_period_summary, weekly_hours,
};
pub use config::{
    DEFAULT_FAIRNESS_TOLERANCE, DEFAULT_HOUR_CAP, DEFAULT_MIN_PAX_PER_SHIFT, RosterConfig,
    StrategyConfig,
};
pub use error::CoreError;
pub use ledger::{HourLedger, RotationCursor};
pub use record::{Assignment, DayStamp, DutyRecord};
pub use run::{RosterRun, run};
pub use strategy::{
    CapExhaustion, DEFAULT_STAGGER, ExhaustionPolicy, Generation, GenerationContext,
    GreedyCapAware, OffsetCycle, PairedPattern, RankRotation, ResolvedPairing, RotationGap,
    RotationStrategy,
};
pub use validator::{
    CoverageReport, FairnessMetric, FairnessReport, HourCapReport, HourCapViolation, Statistics,
    ValidationPolicy, ValidationReport, check_coverage, check_fairness, check_hour_cap, validate,
};
