// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end runs from configuration.

use super::helpers::{create_config, create_pool};
use crate::{
    CoreError, ExhaustionPolicy, FairnessMetric, RosterConfig, RosterRun, StrategyConfig, run,
};
use time::macros::date;
use watchbill_domain::{Crew, DomainError, PersonId, Roster, RotationPattern, StaffingMode};

const GREEDY_JSON: &str = r#"{
    "start_date": "2026-02-08",
    "end_date": "2026-05-02",
    "roster": { "pool": ["P01", "P02", "P03", "P04", "P05"] },
    "strategy": { "kind": "greedy_cap_aware" }
}"#;

const RANK_JSON: &str = r#"{
    "start_date": "2026-02-08",
    "end_date": "2026-02-21",
    "staffing_mode": "three_by_eight",
    "hour_cap": 96,
    "roster": {
        "crews": [
            { "name": "Crew A", "members": ["A01", "A02"], "offset": 0 },
            { "name": "Crew B", "members": ["B01", "B02"] }
        ]
    },
    "strategy": { "kind": "rank_rotation", "pattern": "11-3" }
}"#;

#[test]
fn test_config_defaults_from_json() {
    let config: RosterConfig = serde_json::from_str(GREEDY_JSON).unwrap();

    assert_eq!(config.start_date, date!(2026 - 02 - 08));
    assert_eq!(config.end_date, date!(2026 - 05 - 02));
    assert_eq!(config.period_length_days, 14);
    assert_eq!(config.first_period_number, 5);
    assert_eq!(config.hour_cap, 80);
    assert_eq!(config.staffing_mode, StaffingMode::ThreeByEight);
    assert_eq!(config.min_pax_per_shift, 1);
    assert_eq!(config.fairness_tolerance, 1);
    assert_eq!(config.fairness_metric, None);
    assert_eq!(
        config.strategy,
        StrategyConfig::GreedyCapAware {
            on_exhaustion: ExhaustionPolicy::EmitOverCap
        }
    );
}

#[test]
fn test_crew_config_from_json() {
    let config: RosterConfig = serde_json::from_str(RANK_JSON).unwrap();

    let Roster::Crews(crews) = &config.roster else {
        panic!("expected crews");
    };
    assert_eq!(crews[0].offset(), Some(0));
    assert_eq!(crews[1].offset(), None);
    assert_eq!(crews[1].members(), &[PersonId::new("B01"), PersonId::new("B02")]);
    assert_eq!(
        config.strategy,
        StrategyConfig::RankRotation {
            pattern: RotationPattern::eleven_on_three_off()
        }
    );
    assert_eq!(config.hour_cap, 96);
}

#[test]
fn test_strategy_parameters_default_when_omitted() {
    let offset: StrategyConfig = serde_json::from_str(r#"{ "kind": "offset_cycle" }"#).unwrap();
    assert_eq!(
        offset,
        StrategyConfig::OffsetCycle {
            cycle: RotationPattern::coa2(),
            stagger: 2
        }
    );

    let paired: StrategyConfig =
        serde_json::from_str(r#"{ "kind": "paired_pattern", "people_per_period": 4 }"#).unwrap();
    assert_eq!(
        paired,
        StrategyConfig::PairedPattern {
            pattern_a: None,
            pattern_b: None,
            people_per_period: Some(4)
        }
    );

    let vacant: StrategyConfig = serde_json::from_str(
        r#"{ "kind": "greedy_cap_aware", "on_exhaustion": "leave_vacant" }"#,
    )
    .unwrap();
    assert_eq!(
        vacant,
        StrategyConfig::GreedyCapAware {
            on_exhaustion: ExhaustionPolicy::LeaveVacant
        }
    );
}

#[test]
fn test_invalid_pattern_in_config_is_rejected() {
    let result: Result<StrategyConfig, serde_json::Error> =
        serde_json::from_str(r#"{ "kind": "rank_rotation", "pattern": "OOQ" }"#);
    assert!(result.is_err());
}

#[test]
fn test_config_round_trips_through_json() {
    let config: RosterConfig = serde_json::from_str(RANK_JSON).unwrap();
    let json: String = serde_json::to_string(&config).unwrap();
    let reparsed: RosterConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(config, reparsed);
}

#[test]
fn test_run_covers_whole_span() {
    let config: RosterConfig = serde_json::from_str(GREEDY_JSON).unwrap();
    let result: RosterRun = run(&config).unwrap();

    assert_eq!(result.strategy, "greedy_cap_aware");
    assert_eq!(result.periods.len(), 6);
    assert_eq!(result.periods[0].label(), "PP05");
    assert_eq!(result.periods[5].label(), "PP10");
    assert_eq!(result.records.len(), 84 * 3);
    assert_eq!(result.summaries.fairness.len(), 5);
    assert_eq!(result.policy.fairness_metric, FairnessMetric::TotalShifts);
}

#[test]
fn test_runs_are_identical() {
    let config: RosterConfig = serde_json::from_str(RANK_JSON).unwrap();

    let first: RosterRun = run(&config).unwrap();
    let second: RosterRun = run(&config).unwrap();

    assert_eq!(first.records, second.records);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_paired_pattern_judges_fairness_by_periods_worked() {
    let config: RosterConfig = create_config(
        28,
        create_pool(8),
        StrategyConfig::PairedPattern {
            pattern_a: None,
            pattern_b: None,
            people_per_period: None,
        },
    );
    let result: RosterRun = run(&config).unwrap();

    assert_eq!(result.policy.fairness_metric, FairnessMetric::PeriodsWorked);
    // P01 to P04 are drawn twice, P05 to P08 once
    assert_eq!(result.report.fairness.min, 1);
    assert_eq!(result.report.fairness.max, 2);
    assert!(result.report.fairness.passed);
    // Normal Duty is paid, so drawn people work every day of the period
    assert!(!result.report.hour_cap.passed);
}

#[test]
fn test_fairness_metric_override() {
    let mut config: RosterConfig = serde_json::from_str(GREEDY_JSON).unwrap();
    config.fairness_metric = Some(FairnessMetric::TotalHours);
    config.fairness_tolerance = 8;

    let result: RosterRun = run(&config).unwrap();

    assert_eq!(result.report.fairness.metric, FairnessMetric::TotalHours);
    assert!(result.report.fairness.spread <= 8);
}

#[test]
fn test_end_before_start_is_configuration_error() {
    let mut config: RosterConfig = serde_json::from_str(GREEDY_JSON).unwrap();
    config.end_date = date!(2026 - 02 - 01);

    let result: Result<RosterRun, CoreError> = run(&config);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::EndBeforeStart { .. }))
    ));
}

#[test]
fn test_zero_period_length_is_configuration_error() {
    let mut config: RosterConfig = serde_json::from_str(GREEDY_JSON).unwrap();
    config.period_length_days = 0;

    assert!(matches!(
        config.validate(),
        Err(CoreError::DomainViolation(DomainError::InvalidPeriodLength { days: 0 }))
    ));
}

#[test]
fn test_empty_roster_is_configuration_error() {
    let config: RosterConfig = create_config(
        14,
        Roster::Pool(Vec::new()),
        StrategyConfig::GreedyCapAware {
            on_exhaustion: ExhaustionPolicy::EmitOverCap,
        },
    );

    assert!(matches!(
        run(&config),
        Err(CoreError::DomainViolation(DomainError::EmptyRoster))
    ));
}

#[test]
fn test_duplicate_person_is_configuration_error() {
    let config: RosterConfig = create_config(
        14,
        Roster::Crews(vec![
            Crew::new("Crew A", vec![PersonId::new("X01")]),
            Crew::new("Crew B", vec![PersonId::new("X01")]),
        ]),
        StrategyConfig::RankRotation {
            pattern: RotationPattern::eleven_on_three_off(),
        },
    );

    assert!(matches!(
        config.validate(),
        Err(CoreError::DomainViolation(DomainError::DuplicatePerson { .. }))
    ));
}

#[test]
fn test_shape_mismatch_message() {
    let config: RosterConfig = create_config(
        14,
        create_pool(3),
        StrategyConfig::RankRotation {
            pattern: RotationPattern::eleven_on_three_off(),
        },
    );

    let err: CoreError = config.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Configuration error: strategy 'rank_rotation' needs a crews roster, got pool"
    );
}

#[test]
fn test_blank_person_in_json_is_configuration_error() {
    let json: &str = r#"{
        "start_date": "2026-02-08",
        "end_date": "2026-02-21",
        "roster": { "pool": [" P01 ", "  ", "P03"] },
        "strategy": { "kind": "greedy_cap_aware" }
    }"#;
    let config: RosterConfig = serde_json::from_str(json).unwrap();

    if let Roster::Pool(pool) = &config.roster {
        assert_eq!(pool[0], PersonId::new("P01"));
    } else {
        panic!("expected a pool roster");
    }
    assert_eq!(
        config.validate(),
        Err(CoreError::DomainViolation(DomainError::InvalidPersonId))
    );
}
