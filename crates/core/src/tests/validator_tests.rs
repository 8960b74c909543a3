// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the post-hoc validator.

use super::helpers::{START, create_config, create_crews, create_pool};
use crate::{
    CoverageRow, DutyRecord, ExhaustionPolicy, FairnessMetric, FairnessReport, FairnessRow,
    HourCapReport, PayPeriodSummary, RosterConfig, RosterRun, Statistics, StrategyConfig,
    check_fairness, check_hour_cap, coverage_grid, run,
};
use time::{Date, Duration};
use watchbill_domain::{Crew, PersonId, Roster, RotationPattern, ShiftLabel};

fn create_greedy_run(pool: usize) -> RosterRun {
    run(&create_config(
        14,
        create_pool(pool),
        StrategyConfig::GreedyCapAware {
            on_exhaustion: ExhaustionPolicy::EmitOverCap,
        },
    ))
    .unwrap()
}

fn create_fairness_row(person: &str, total_shifts: u32, periods_worked: u32) -> FairnessRow {
    FairnessRow {
        person: PersonId::new(person),
        total_shifts,
        total_hours: total_shifts * 8,
        periods_worked,
    }
}

#[test]
fn test_covered_roster_passes_every_row() {
    let result: RosterRun = create_greedy_run(5);

    assert!(result.report.coverage.passed);
    assert_eq!(result.report.coverage.slots_checked, 14 * 3);
    assert!(result.summaries.coverage.iter().all(|row| row.coverage_ok));
}

#[test]
fn test_removing_an_assignee_flips_that_row() {
    let result: RosterRun = create_greedy_run(5);
    let target: ShiftLabel = ShiftLabel::new("Mids");
    let records: Vec<DutyRecord> = result
        .records
        .iter()
        .filter(|r| !(r.date == START && r.shift.as_ref() == Some(&target)))
        .cloned()
        .collect();
    assert_eq!(records.len(), result.records.len() - 1);

    let shifts: Vec<ShiftLabel> = vec![
        ShiftLabel::new("Days"),
        target.clone(),
        ShiftLabel::new("Nights"),
    ];
    let rows: Vec<CoverageRow> = coverage_grid(&records, &result.periods, &shifts, 1);
    let failing: Vec<&CoverageRow> = rows.iter().filter(|row| !row.coverage_ok).collect();

    assert_eq!(failing.len(), 1);
    assert_eq!(failing[0].date, START);
    assert_eq!(failing[0].shift, target);
    assert_eq!(failing[0].pax, 0);
}

#[test]
fn test_raising_minimum_pax_fails_single_coverage() {
    let mut config: RosterConfig = create_config(
        14,
        create_pool(5),
        StrategyConfig::GreedyCapAware {
            on_exhaustion: ExhaustionPolicy::EmitOverCap,
        },
    );
    config.min_pax_per_shift = 2;
    let result: RosterRun = run(&config).unwrap();

    assert!(!result.report.coverage.passed);
    assert_eq!(result.report.coverage.shortfalls.len(), 14 * 3);
    assert!(!result.report.passed);
}

#[test]
fn test_hour_cap_enumerates_every_offender() {
    let result: RosterRun = create_greedy_run(4);
    let report: &HourCapReport = &result.report.hour_cap;

    assert!(!report.passed);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].person, PersonId::new("P04"));
    assert_eq!(report.violations[0].pay_period, "PP05");
    assert_eq!(report.violations[0].hours, 96);
    assert_eq!(result.report.statistics.cap_exhaustions, 2);
}

#[test]
fn test_hour_cap_boundary_is_inclusive() {
    let mut at_cap: PayPeriodSummary = PayPeriodSummary::new("PP05", &PersonId::new("A"));
    at_cap.total_hours = 80;
    let mut over_cap: PayPeriodSummary = PayPeriodSummary::new("PP05", &PersonId::new("B"));
    over_cap.total_hours = 81;
    let rows: Vec<PayPeriodSummary> = vec![at_cap, over_cap];

    let report: HourCapReport = check_hour_cap(&rows, 80);

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].person, PersonId::new("B"));
}

#[test]
fn test_fairness_spread_within_tolerance() {
    let rows: Vec<FairnessRow> = vec![
        create_fairness_row("A", 9, 1),
        create_fairness_row("B", 8, 1),
    ];

    let report: FairnessReport = check_fairness(&rows, FairnessMetric::TotalShifts, 1);

    assert!(report.passed);
    assert_eq!(report.spread, 1);
}

#[test]
fn test_fairness_spread_beyond_tolerance() {
    let rows: Vec<FairnessRow> = vec![
        create_fairness_row("A", 10, 2),
        create_fairness_row("B", 8, 2),
        create_fairness_row("C", 0, 0),
    ];

    let shifts: FairnessReport = check_fairness(&rows, FairnessMetric::TotalShifts, 1);
    assert!(!shifts.passed);
    assert_eq!((shifts.min, shifts.max, shifts.spread), (0, 10, 10));

    let periods: FairnessReport = check_fairness(&rows, FairnessMetric::PeriodsWorked, 2);
    assert!(periods.passed);
    assert_eq!(periods.metric, FairnessMetric::PeriodsWorked);
}

#[test]
fn test_empty_fairness_has_zero_spread() {
    let report: FairnessReport = check_fairness(&[], FairnessMetric::TotalHours, 0);
    assert!(report.passed);
    assert_eq!(report.spread, 0);
}

#[test]
fn test_rank_rotation_statistics() {
    let crews: Vec<Crew> = create_crews(&[9, 9, 9, 8])
        .into_iter()
        .zip([0, 4, 7, 10])
        .map(|(crew, offset)| crew.with_offset(offset))
        .collect();
    let result: RosterRun = run(&create_config(
        14,
        Roster::Crews(crews),
        StrategyConfig::RankRotation {
            pattern: RotationPattern::eleven_on_three_off(),
        },
    ))
    .unwrap();
    let stats: &Statistics = &result.report.statistics;

    assert_eq!(stats.people, 35);
    assert_eq!(stats.watch_days, 350);
    assert_eq!(stats.admin_days, 35);
    assert_eq!(stats.off_days, 105);
    assert_eq!(stats.normal_duty_days, 0);
    assert_eq!(stats.min_hours_per_period, 80);
    assert_eq!(stats.max_hours_per_period, 80);
    assert!((stats.avg_hours_per_period - 80.0).abs() < f64::EPSILON);
    assert_eq!(stats.total_paid_hours, 35 * 80);

    assert!(result.report.hour_cap.passed);
    assert!(result.report.fairness.passed);

    // Every crew on duty on the last day is held on Admin
    let last_day: Date = START + Duration::days(13);
    assert_eq!(result.report.coverage.shortfalls.len(), 3);
    assert!(
        result
            .report
            .coverage
            .shortfalls
            .iter()
            .all(|row| row.date == last_day)
    );
    assert!(!result.report.passed);
}
