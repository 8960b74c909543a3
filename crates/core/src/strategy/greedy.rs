// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{CapExhaustion, Generation, GenerationContext, RotationStrategy};
use crate::error::CoreError;
use crate::ledger::{HourLedger, RotationCursor};
use crate::record::{Assignment, DayStamp, DutyRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use watchbill_domain::{PersonId, RosterShape};

/// What to do with a slot when everyone in the pool is at the hour cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    /// Assign the last candidate scanned anyway, exceeding the cap.
    #[default]
    EmitOverCap,
    /// Leave the slot unfilled.
    LeaveVacant,
}

/// Round-robin over a pool, skipping anyone the slot would push past the cap.
///
/// Each slot scans at most `pool_size` candidates from the cursor. The cursor
/// persists across pay periods; the hour ledger does not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyCapAware {
    on_exhaustion: ExhaustionPolicy,
}

impl GreedyCapAware {
    /// Creates the strategy.
    #[must_use]
    pub const fn new(on_exhaustion: ExhaustionPolicy) -> Self {
        Self { on_exhaustion }
    }

    /// Returns the exhaustion policy.
    #[must_use]
    pub const fn on_exhaustion(&self) -> ExhaustionPolicy {
        self.on_exhaustion
    }
}

impl RotationStrategy for GreedyCapAware {
    fn name(&self) -> &'static str {
        "greedy_cap_aware"
    }

    fn roster_shape(&self) -> RosterShape {
        RosterShape::Pool
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Generation, CoreError> {
        self.check(ctx)?;
        let pool: &[PersonId] = ctx.pool(self.name())?;
        let mut cursor: RotationCursor = RotationCursor::new(pool.len());
        let mut generation: Generation = Generation::default();

        for period in ctx.periods {
            let mut ledger: HourLedger = HourLedger::new(ctx.hour_cap);

            debug!(
                pay_period = period.label(),
                cursor = cursor.position(),
                "Generating greedy pay period"
            );

            for date in period.days() {
                let stamp: DayStamp = DayStamp::new(date, period);

                for shift in ctx.shifts {
                    let chosen: Option<usize> = (0..pool.len())
                        .map(|step| cursor.peek(step))
                        .find(|index| ledger.can_take(&pool[*index], ctx.shift_hours));

                    let assignee: Option<usize> = match (chosen, self.on_exhaustion) {
                        (Some(index), _) => Some(index),
                        (None, policy) => {
                            // Every candidate is at the cap
                            let last_scanned: usize = cursor.peek(pool.len().saturating_sub(1));
                            let assigned: Option<usize> =
                                (policy == ExhaustionPolicy::EmitOverCap).then_some(last_scanned);
                            let hours_after: Option<u32> = assigned.map(|index| {
                                ledger.hours(&pool[index]) + u32::from(ctx.shift_hours)
                            });

                            warn!(
                                date = %date,
                                shift = %shift,
                                policy = ?policy,
                                "Every pool member is at the hour cap"
                            );

                            generation.cap_exhaustions.push(CapExhaustion {
                                date,
                                pay_period: stamp.pay_period.clone(),
                                shift: shift.clone(),
                                assigned: assigned.map(|index| pool[index].clone()),
                                hours_after,
                            });
                            assigned
                        }
                    };

                    if let Some(index) = assignee {
                        let person: &PersonId = &pool[index];
                        ledger.credit(person, ctx.shift_hours);
                        cursor.advance_past(index);
                        generation.records.push(DutyRecord::new(
                            &stamp,
                            None,
                            person,
                            Assignment::Watch {
                                shift: shift.clone(),
                                hours: ctx.shift_hours,
                            },
                        ));
                    }
                }
            }
        }

        Ok(generation)
    }
}
