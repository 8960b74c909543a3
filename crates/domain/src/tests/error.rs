// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, PersonId};
use time::macros::date;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::EndBeforeStart {
        start_date: date!(2026 - 02 - 08),
        end_date: date!(2026 - 02 - 01),
    };
    assert_eq!(
        format!("{err}"),
        "End date 2026-02-01 is before start date 2026-02-08"
    );

    let err: DomainError = DomainError::InvalidPeriodLength { days: 0 };
    assert_eq!(
        format!("{err}"),
        "Invalid pay period length: 0. Must be at least 1 day"
    );

    let err: DomainError = DomainError::EmptyRoster;
    assert_eq!(format!("{err}"), "Roster has no personnel");

    let err: DomainError = DomainError::EmptyCrew {
        crew: String::from("Team F"),
    };
    assert_eq!(format!("{err}"), "Crew 'Team F' has no members");

    let err: DomainError = DomainError::DuplicatePerson {
        person: PersonId::new("A01"),
    };
    assert_eq!(
        format!("{err}"),
        "Person 'A01' appears more than once in the roster"
    );

    let err: DomainError = DomainError::CrewOffsetOutOfRange {
        crew: String::from("Crew 4"),
        offset: 14,
        pattern_len: 14,
    };
    assert_eq!(
        format!("{err}"),
        "Crew 'Crew 4' offset 14 is outside the 14-day pattern"
    );

    let err: DomainError = DomainError::InvalidPatternCharacter {
        character: 'Z',
        position: 3,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid rotation pattern character 'Z' at position 3"
    );

    let err: DomainError = DomainError::PatternsNotComplementary {
        pattern_a: String::from("OOF"),
        pattern_b: String::from("FOO"),
    };
    assert_eq!(
        format!("{err}"),
        "Patterns OOF and FOO are not complementary"
    );

    let err: DomainError = DomainError::PoolTooSmall {
        pool_size: 4,
        required: 6,
    };
    assert_eq!(
        format!("{err}"),
        "Pool of 4 cannot supply 6 people per pay period"
    );

    let err: DomainError = DomainError::InvalidPeoplePerPeriod { count: 3 };
    assert_eq!(
        format!("{err}"),
        "Invalid people per period: 3. Must be a positive even number"
    );
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DomainError::EmptyPattern);
    assert_eq!(err.to_string(), "Rotation pattern has no days");
}
