// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{START, create_config, create_crews, create_pool, generate, records_on};
use crate::{CoreError, DutyRecord, Generation, RosterConfig, StrategyConfig};
use std::collections::BTreeSet;
use time::{Date, Duration};
use watchbill_domain::{DomainError, DutyStatus, PersonId, Roster, RotationPattern, ShiftLabel};

fn create_paired(days: i64, pool: usize, people_per_period: Option<usize>) -> RosterConfig {
    create_config(
        days,
        create_pool(pool),
        StrategyConfig::PairedPattern {
            pattern_a: None,
            pattern_b: None,
            people_per_period,
        },
    )
}

fn people_in(records: &[DutyRecord], pay_period: &str) -> BTreeSet<String> {
    records
        .iter()
        .filter(|r| r.pay_period == pay_period)
        .map(|r| r.person.value().to_string())
        .collect()
}

#[test]
fn test_exactly_one_watch_per_shift_per_day() {
    let generation: Generation = generate(&create_paired(28, 8, None));
    let shifts: [ShiftLabel; 3] = [
        ShiftLabel::new("Days"),
        ShiftLabel::new("Mids"),
        ShiftLabel::new("Nights"),
    ];

    for day in 0..28 {
        let date: Date = START + Duration::days(day);
        let records: Vec<&DutyRecord> = records_on(&generation.records, date);
        for shift in &shifts {
            let pax: usize = records
                .iter()
                .filter(|r| r.status == DutyStatus::Watch && r.shift.as_ref() == Some(shift))
                .count();
            assert_eq!(pax, 1, "{shift} on {date}");
        }
    }
}

#[test]
fn test_off_pattern_days_are_paid_normal_duty() {
    let generation: Generation = generate(&create_paired(14, 6, None));

    // One record per drawn person per day
    assert_eq!(generation.records.len(), 6 * 14);

    for record in &generation.records {
        assert_eq!(record.paid_hours, 8);
        match record.status {
            DutyStatus::Watch => assert!(record.shift.is_some()),
            DutyStatus::NormalDuty => assert!(record.shift.is_none()),
            other => panic!("unexpected status {other}"),
        }
        assert!(record.unit.is_none());
    }
}

#[test]
fn test_pair_members_alternate_by_halves() {
    let generation: Generation = generate(&create_paired(14, 6, None));
    let p01: PersonId = PersonId::new("P01");
    let p02: PersonId = PersonId::new("P02");

    for day in 0..14 {
        let records: Vec<&DutyRecord> =
            records_on(&generation.records, START + Duration::days(day));
        let first: &DutyRecord = records.iter().find(|r| r.person == p01).unwrap();
        let second: &DutyRecord = records.iter().find(|r| r.person == p02).unwrap();

        // Days 0..=6 belong to pattern A, 7..=13 to pattern B
        let expect_first_on: bool = day < 7;
        assert_eq!(first.status == DutyStatus::Watch, expect_first_on);
        assert_eq!(second.status == DutyStatus::Watch, !expect_first_on);
        assert_eq!(first.shift.as_ref().or(second.shift.as_ref()), Some(&ShiftLabel::new("Days")));
    }
}

#[test]
fn test_cursor_continues_across_pay_periods() {
    let generation: Generation = generate(&create_paired(42, 8, None));

    let expected_pp05: BTreeSet<String> =
        ["P01", "P02", "P03", "P04", "P05", "P06"].map(String::from).into();
    let expected_pp06: BTreeSet<String> =
        ["P07", "P08", "P01", "P02", "P03", "P04"].map(String::from).into();
    let expected_pp07: BTreeSet<String> =
        ["P05", "P06", "P07", "P08", "P01", "P02"].map(String::from).into();

    assert_eq!(people_in(&generation.records, "PP05"), expected_pp05);
    assert_eq!(people_in(&generation.records, "PP06"), expected_pp06);
    assert_eq!(people_in(&generation.records, "PP07"), expected_pp07);
}

#[test]
fn test_extra_people_are_normal_duty_all_period() {
    let generation: Generation = generate(&create_paired(14, 8, Some(8)));
    let extras: [PersonId; 2] = [PersonId::new("P07"), PersonId::new("P08")];

    let extra_records: Vec<&DutyRecord> = generation
        .records
        .iter()
        .filter(|r| extras.contains(&r.person))
        .collect();
    assert_eq!(extra_records.len(), 2 * 14);
    assert!(extra_records.iter().all(|r| r.status == DutyStatus::NormalDuty));
}

#[test]
fn test_short_final_period_uses_leading_pattern_days() {
    let generation: Generation = generate(&create_paired(20, 6, None));
    let final_period: Vec<&DutyRecord> = generation
        .records
        .iter()
        .filter(|r| r.pay_period == "PP06")
        .collect();

    // Six days, all in the pattern A half
    assert_eq!(final_period.len(), 6 * 6);
    let first_of_pair: PersonId = PersonId::new("P01");
    assert!(
        final_period
            .iter()
            .filter(|r| r.person == first_of_pair)
            .all(|r| r.status == DutyStatus::Watch)
    );
}

#[test]
fn test_explicit_complementary_patterns_are_accepted() {
    let pattern_a: RotationPattern = RotationPattern::parse("OFOFOFO FOFOFOF").unwrap();
    let mut config: RosterConfig = create_paired(14, 6, None);
    config.strategy = StrategyConfig::PairedPattern {
        pattern_b: Some(pattern_a.complement()),
        pattern_a: Some(pattern_a),
        people_per_period: None,
    };

    assert!(config.validate().is_ok());
}

#[test]
fn test_non_complementary_patterns_are_rejected() {
    let mut config: RosterConfig = create_paired(14, 6, None);
    config.strategy = StrategyConfig::PairedPattern {
        pattern_a: Some(RotationPattern::halves(14)),
        pattern_b: Some(RotationPattern::halves(14)),
        people_per_period: None,
    };

    assert!(matches!(
        config.validate(),
        Err(CoreError::DomainViolation(DomainError::PatternsNotComplementary { .. }))
    ));
}

#[test]
fn test_pattern_length_must_match_period() {
    let mut config: RosterConfig = create_paired(14, 6, None);
    config.strategy = StrategyConfig::PairedPattern {
        pattern_a: Some(RotationPattern::coa2()),
        pattern_b: None,
        people_per_period: None,
    };

    assert!(matches!(
        config.validate(),
        Err(CoreError::DomainViolation(DomainError::PatternLengthMismatch {
            expected: 14,
            actual: 10
        }))
    ));
}

#[test]
fn test_odd_people_per_period_is_rejected() {
    let config: RosterConfig = create_paired(14, 8, Some(5));

    assert!(matches!(
        config.validate(),
        Err(CoreError::DomainViolation(DomainError::InvalidPeoplePerPeriod { count: 5 }))
    ));
}

#[test]
fn test_pool_smaller_than_draw_is_rejected() {
    let config: RosterConfig = create_paired(14, 4, None);

    assert!(matches!(
        config.validate(),
        Err(CoreError::DomainViolation(DomainError::PoolTooSmall {
            pool_size: 4,
            required: 6
        }))
    ));
}

#[test]
fn test_paired_pattern_rejects_crews() {
    let config: RosterConfig = create_config(
        14,
        Roster::Crews(create_crews(&[6])),
        StrategyConfig::PairedPattern {
            pattern_a: None,
            pattern_b: None,
            people_per_period: None,
        },
    );

    assert!(matches!(
        config.validate(),
        Err(CoreError::RosterShapeMismatch { strategy: "paired_pattern", .. })
    ));
}
