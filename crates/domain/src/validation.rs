// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Crew, PersonId, Roster};
use std::collections::HashSet;

/// Validates the structure of a roster.
///
/// This function is pure and deterministic. It checks field constraints
/// and uniqueness; it does NOT check anything strategy-specific.
///
/// # Arguments
///
/// * `roster` - The roster to validate
///
/// # Errors
///
/// Returns an error if:
/// - The roster has no people
/// - A crew name is empty
/// - A crew has no members
/// - A person ID is empty
/// - A person appears more than once
pub fn validate_roster(roster: &Roster) -> Result<(), DomainError> {
    if roster.headcount() == 0 {
        return Err(DomainError::EmptyRoster);
    }

    if let Roster::Crews(crews) = roster {
        for crew in crews {
            validate_crew_fields(crew)?;
        }
    }

    validate_people_unique(&roster.people())
}

/// Validates a single crew's fields.
///
/// # Errors
///
/// Returns an error if the crew name is empty or the crew has no members.
pub fn validate_crew_fields(crew: &Crew) -> Result<(), DomainError> {
    // Rule: crew name must not be empty
    if crew.name().trim().is_empty() {
        return Err(DomainError::InvalidCrewName);
    }

    // Rule: a crew must have at least one member
    if crew.members().is_empty() {
        return Err(DomainError::EmptyCrew {
            crew: crew.name().to_string(),
        });
    }

    Ok(())
}

/// Validates that person IDs are non-empty and unique.
///
/// # Errors
///
/// Returns an error on the first empty or duplicated ID.
pub fn validate_people_unique(people: &[&PersonId]) -> Result<(), DomainError> {
    let mut seen: HashSet<&PersonId> = HashSet::with_capacity(people.len());

    for person in people {
        if person.value().trim().is_empty() {
            return Err(DomainError::InvalidPersonId);
        }

        // Rule: a person is rostered exactly once
        if !seen.insert(person) {
            return Err(DomainError::DuplicatePerson {
                person: (*person).clone(),
            });
        }
    }

    Ok(())
}

/// Validates that every explicit crew offset lies inside the pattern.
///
/// # Errors
///
/// Returns an error naming the first crew whose offset is out of range.
pub fn validate_crew_offsets(crews: &[Crew], pattern_len: usize) -> Result<(), DomainError> {
    for crew in crews {
        if let Some(offset) = crew.offset()
            && usize::from(offset) >= pattern_len
        {
            return Err(DomainError::CrewOffsetOutOfRange {
                crew: crew.name().to_string(),
                offset,
                pattern_len,
            });
        }
    }

    Ok(())
}

/// Validates a shift length.
///
/// # Errors
///
/// Returns an error if `hours` is zero.
pub const fn validate_shift_hours(hours: u16) -> Result<(), DomainError> {
    if hours == 0 {
        return Err(DomainError::InvalidShiftHours { hours });
    }
    Ok(())
}
