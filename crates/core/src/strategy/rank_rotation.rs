// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{Generation, GenerationContext, RotationGap, RotationStrategy};
use crate::error::CoreError;
use crate::ledger::HourLedger;
use crate::record::{Assignment, DayStamp, DutyRecord};
use tracing::{debug, warn};
use watchbill_domain::{
    Crew, RosterShape, RotationPattern, ShiftLabel, staggered_offsets, validate_crew_offsets,
};

/// Per-crew on/off pattern with shift types rotated by pay period.
///
/// A crew is on at `(day_in_period - offset) mod P`. On-duty crews are ranked
/// in roster order and crew `rank` works shift `(period_index + rank) mod
/// shift_count`. A person whose period hours would pass the cap is marked
/// Admin instead of Watch and earns no ledger credit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankRotation {
    pattern: RotationPattern,
}

impl RankRotation {
    /// Creates the strategy.
    #[must_use]
    pub const fn new(pattern: RotationPattern) -> Self {
        Self { pattern }
    }

    /// Returns the pattern.
    #[must_use]
    pub const fn pattern(&self) -> &RotationPattern {
        &self.pattern
    }

    /// Returns each crew's offset, filling gaps with evenly staggered ones.
    #[must_use]
    pub fn crew_offsets(&self, crews: &[Crew]) -> Vec<u16> {
        let spread: Vec<u16> = staggered_offsets(self.pattern.len(), crews.len());
        crews
            .iter()
            .zip(spread)
            .map(|(crew, fallback)| crew.offset().unwrap_or(fallback))
            .collect()
    }
}

impl Default for RankRotation {
    fn default() -> Self {
        Self::new(RotationPattern::eleven_on_three_off())
    }
}

impl RotationStrategy for RankRotation {
    fn name(&self) -> &'static str {
        "rank_rotation"
    }

    fn roster_shape(&self) -> RosterShape {
        RosterShape::Crews
    }

    fn check(&self, ctx: &GenerationContext<'_>) -> Result<(), CoreError> {
        let crews: &[Crew] = ctx.crews(self.name())?;
        validate_crew_offsets(crews, self.pattern.len())?;
        Ok(())
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Generation, CoreError> {
        self.check(ctx)?;
        let crews: &[Crew] = ctx.crews(self.name())?;
        let offsets: Vec<u16> = self.crew_offsets(crews);
        let mut generation: Generation = Generation {
            rotation_gap: RotationGap::detect(self.name(), &self.pattern, &offsets),
            ..Generation::default()
        };

        for period in ctx.periods {
            // Hours never carry over a pay-period boundary
            let mut ledger: HourLedger = HourLedger::new(ctx.hour_cap);
            let mut admin_days: usize = 0;
            let crews_on: Vec<usize> = (0..period.duration_days())
                .map(|day| self.pattern.crews_on_duty(day, &offsets))
                .collect();

            debug!(
                pay_period = period.label(),
                index = period.index(),
                offsets = ?offsets,
                min_crews_on = crews_on.iter().min().copied().unwrap_or(0),
                max_crews_on = crews_on.iter().max().copied().unwrap_or(0),
                "Generating rank-rotation pay period"
            );

            for (day_in_period, date) in (0_i64..).zip(period.days()) {
                let stamp: DayStamp = DayStamp::new(date, period);
                let mut rank: usize = 0;

                for (crew, offset) in crews.iter().zip(&offsets) {
                    let on_duty: bool = self.pattern.is_on(day_in_period - i64::from(*offset));
                    let shift: Option<&ShiftLabel> = if on_duty && !ctx.shifts.is_empty() {
                        let slot: usize = (usize::from(period.index()) + rank) % ctx.shifts.len();
                        rank += 1;
                        Some(&ctx.shifts[slot])
                    } else {
                        None
                    };

                    for person in crew.members() {
                        let assignment: Assignment = match shift {
                            Some(shift) if ledger.can_take(person, ctx.shift_hours) => {
                                ledger.credit(person, ctx.shift_hours);
                                Assignment::Watch {
                                    shift: shift.clone(),
                                    hours: ctx.shift_hours,
                                }
                            }
                            Some(_) => {
                                admin_days += 1;
                                Assignment::Admin
                            }
                            None => Assignment::Off,
                        };

                        generation.records.push(DutyRecord::new(
                            &stamp,
                            Some(crew.name()),
                            person,
                            assignment,
                        ));
                    }
                }
            }

            if admin_days > 0 {
                warn!(
                    pay_period = period.label(),
                    admin_days,
                    cap = ctx.hour_cap,
                    "Hour cap converted on-duty days to Admin"
                );
            }
        }

        Ok(generation)
    }
}
