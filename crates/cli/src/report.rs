// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Console rendering of a run's validation report.

use std::fmt;
use watchbill::{RosterRun, Statistics, ValidationReport};

/// Longest violation list printed per check.
const MAX_LISTED: usize = 10;

/// Human-readable summary of a run: one line per check plus statistics.
pub struct ConsoleReport<'a> {
    run: &'a RosterRun,
}

impl<'a> ConsoleReport<'a> {
    pub const fn new(run: &'a RosterRun) -> Self {
        Self { run }
    }
}

/// Names the checks that failed, in report order.
pub fn failed_checks(run: &RosterRun) -> Vec<&'static str> {
    let report: &ValidationReport = &run.report;
    [
        ("hour cap", report.hour_cap.passed),
        ("coverage", report.coverage.passed),
        ("fairness", report.fairness.passed),
    ]
    .into_iter()
    .filter(|(_, passed)| !passed)
    .map(|(name, _)| name)
    .collect()
}

const fn verdict(passed: bool) -> &'static str {
    if passed { "PASS" } else { "FAIL" }
}

fn write_overflow(f: &mut fmt::Formatter<'_>, total: usize) -> fmt::Result {
    if total > MAX_LISTED {
        writeln!(f, "    ... and {} more", total - MAX_LISTED)?;
    }
    Ok(())
}

impl fmt::Display for ConsoleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let run: &RosterRun = self.run;
        let report: &ValidationReport = &run.report;

        match (run.periods.first(), run.periods.last()) {
            (Some(first), Some(last)) => writeln!(
                f,
                "Roster: {} from {} to {}, {} pay periods ({}-{}), {} records",
                run.strategy,
                first.start_date(),
                last.end_date(),
                run.periods.len(),
                first.label(),
                last.label(),
                run.records.len()
            )?,
            _ => writeln!(f, "Roster: {}, no pay periods", run.strategy)?,
        }
        writeln!(f)?;

        writeln!(
            f,
            "[{}] Hour cap: {}h per person per pay period",
            verdict(report.hour_cap.passed),
            run.policy.hour_cap
        )?;
        for violation in report.hour_cap.violations.iter().take(MAX_LISTED) {
            writeln!(
                f,
                "    {} {}: {}h",
                violation.pay_period, violation.person, violation.hours
            )?;
        }
        write_overflow(f, report.hour_cap.violations.len())?;

        writeln!(
            f,
            "[{}] Coverage: at least {} per shift, {} of {} slots short",
            verdict(report.coverage.passed),
            run.policy.min_pax_per_shift,
            report.coverage.shortfalls.len(),
            report.coverage.slots_checked
        )?;
        for row in report.coverage.shortfalls.iter().take(MAX_LISTED) {
            writeln!(f, "    {} {}: {}/{}", row.date, row.shift, row.pax, row.required)?;
        }
        write_overflow(f, report.coverage.shortfalls.len())?;

        writeln!(
            f,
            "[{}] Fairness: {} spread {} (min {}, max {}), tolerance {}",
            verdict(report.fairness.passed),
            report.fairness.metric,
            report.fairness.spread,
            report.fairness.min,
            report.fairness.max,
            report.fairness.tolerance
        )?;

        if !run.cap_exhaustions.is_empty() {
            writeln!(f)?;
            writeln!(f, "Cap exhaustions: {}", run.cap_exhaustions.len())?;
            for exhaustion in run.cap_exhaustions.iter().take(MAX_LISTED) {
                match (&exhaustion.assigned, exhaustion.hours_after) {
                    (Some(person), Some(hours)) => writeln!(
                        f,
                        "    {} {}: {} over cap at {}h",
                        exhaustion.date, exhaustion.shift, person, hours
                    )?,
                    _ => writeln!(f, "    {} {}: left vacant", exhaustion.date, exhaustion.shift)?,
                }
            }
            write_overflow(f, run.cap_exhaustions.len())?;
        }

        if let Some(gap) = &run.rotation_gap {
            let days: Vec<String> = gap.uncovered_days.iter().map(ToString::to_string).collect();
            writeln!(f)?;
            writeln!(
                f,
                "Rotation gap: pattern {} with {} crews at offsets {:?} (needs at least {})",
                gap.pattern,
                gap.offsets.len(),
                gap.offsets,
                gap.min_crews
            )?;
            writeln!(f, "    uncovered cycle days: {}", days.join(", "))?;
        }

        let stats: &Statistics = &report.statistics;
        writeln!(f)?;
        writeln!(f, "Statistics")?;
        writeln!(f, "  People: {}", stats.people)?;
        writeln!(
            f,
            "  Hours per person per pay period: min {}, max {}, avg {:.1}",
            stats.min_hours_per_period, stats.max_hours_per_period, stats.avg_hours_per_period
        )?;
        writeln!(
            f,
            "  Watch {}, Admin {}, Off {}, Normal Duty {}",
            stats.watch_days, stats.admin_days, stats.off_days, stats.normal_duty_days
        )?;
        writeln!(f, "  Total paid hours: {}", stats.total_paid_hours)?;
        writeln!(f)?;
        writeln!(f, "Overall: {}", verdict(report.passed))
    }
}
