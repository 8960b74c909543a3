// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutable state owned by a single strategy run.
//!
//! An `HourLedger` lives for exactly one pay period; strategies create a
//! fresh one at every period boundary. A `RotationCursor` lives for the whole
//! run and is handed from one period to the next.

use std::collections::BTreeMap;
use watchbill_domain::PersonId;

/// Hours accumulated per person within one pay period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourLedger {
    /// Maximum paid hours per person in the period.
    cap: u32,
    /// Accumulated hours, keyed by person.
    hours: BTreeMap<PersonId, u32>,
}

impl HourLedger {
    /// Creates an empty ledger for a new pay period.
    #[must_use]
    pub const fn new(cap: u32) -> Self {
        Self {
            cap,
            hours: BTreeMap::new(),
        }
    }

    /// Returns the cap.
    #[must_use]
    pub const fn cap(&self) -> u32 {
        self.cap
    }

    /// Returns the hours accumulated so far by `person`.
    #[must_use]
    pub fn hours(&self, person: &PersonId) -> u32 {
        self.hours.get(person).copied().unwrap_or(0)
    }

    /// Returns whether `person` can take `shift_hours` more without
    /// exceeding the cap.
    #[must_use]
    pub fn can_take(&self, person: &PersonId, shift_hours: u16) -> bool {
        self.hours(person) + u32::from(shift_hours) <= self.cap
    }

    /// Adds `shift_hours` to `person` and returns the new total.
    ///
    /// The cap is not enforced here; callers decide.
    pub fn credit(&mut self, person: &PersonId, shift_hours: u16) -> u32 {
        let total: &mut u32 = self.hours.entry(person.clone()).or_insert(0);
        *total += u32::from(shift_hours);
        *total
    }
}

/// Position in a cyclic pool, persisted across pay periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationCursor {
    /// Index of the next candidate.
    position: usize,
    /// Pool size.
    len: usize,
}

impl RotationCursor {
    /// Creates a cursor at the start of a pool of `len` people.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { position: 0, len }
    }

    /// Returns the index of the next candidate.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the pool index `steps` ahead of the cursor, without moving.
    #[must_use]
    pub const fn peek(&self, steps: usize) -> usize {
        if self.len == 0 {
            return 0;
        }
        (self.position + steps) % self.len
    }

    /// Draws the next `count` pool indices and moves past them.
    pub fn take(&mut self, count: usize) -> Vec<usize> {
        let drawn: Vec<usize> = (0..count).map(|step| self.peek(step)).collect();
        self.advance(count);
        drawn
    }

    /// Moves the cursor forward by `steps`.
    pub const fn advance(&mut self, steps: usize) {
        self.position = self.peek(steps);
    }

    /// Moves the cursor to just after pool index `index`.
    pub const fn advance_past(&mut self, index: usize) {
        if self.len > 0 {
            self.position = (index + 1) % self.len;
        }
    }
}
