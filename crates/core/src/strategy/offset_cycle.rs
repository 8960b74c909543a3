// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{Generation, GenerationContext, RotationGap, RotationStrategy};
use crate::error::CoreError;
use crate::record::{Assignment, DayStamp, DutyRecord};
use tracing::debug;
use watchbill_domain::{Crew, RosterShape, RotationPattern, ShiftLabel, validate_crew_offsets};

/// Default per-team stagger, in days.
pub const DEFAULT_STAGGER: u16 = 2;

/// Fixed repeating on/off cycle per team, staggered by team index.
///
/// Team `t` on day `d` sits at cycle position `(d + t * stagger) mod len`;
/// an explicit crew offset replaces `t * stagger`. Working members rotate
/// through the shift labels by `(d + member_index) mod shift_count`. No hour
/// cap is enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetCycle {
    cycle: RotationPattern,
    stagger: u16,
}

impl OffsetCycle {
    /// Creates the strategy.
    #[must_use]
    pub const fn new(cycle: RotationPattern, stagger: u16) -> Self {
        Self { cycle, stagger }
    }

    /// Returns the cycle.
    #[must_use]
    pub const fn cycle(&self) -> &RotationPattern {
        &self.cycle
    }

    /// Returns the stagger.
    #[must_use]
    pub const fn stagger(&self) -> u16 {
        self.stagger
    }

    fn team_offset(&self, team_index: usize, crew: &Crew) -> usize {
        crew.offset().map_or_else(
            || (team_index * usize::from(self.stagger)) % self.cycle.len(),
            usize::from,
        )
    }
}

impl Default for OffsetCycle {
    fn default() -> Self {
        Self::new(RotationPattern::coa2(), DEFAULT_STAGGER)
    }
}

impl RotationStrategy for OffsetCycle {
    fn name(&self) -> &'static str {
        "offset_cycle"
    }

    fn roster_shape(&self) -> RosterShape {
        RosterShape::Crews
    }

    fn check(&self, ctx: &GenerationContext<'_>) -> Result<(), CoreError> {
        let crews: &[Crew] = ctx.crews(self.name())?;
        validate_crew_offsets(crews, self.cycle.len())?;
        Ok(())
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Generation, CoreError> {
        self.check(ctx)?;
        let crews: &[Crew] = ctx.crews(self.name())?;
        let offsets: Vec<usize> = crews
            .iter()
            .enumerate()
            .map(|(team_index, crew)| self.team_offset(team_index, crew))
            .collect();

        // Team position `d + offset` is pattern day `d - (len - offset)`
        let lags: Vec<u16> = offsets
            .iter()
            .map(|offset| {
                let lag: usize = (self.cycle.len() - offset) % self.cycle.len();
                u16::try_from(lag).unwrap_or(0)
            })
            .collect();

        let mut generation: Generation = Generation {
            rotation_gap: RotationGap::detect(self.name(), &self.cycle, &lags),
            ..Generation::default()
        };
        let mut day_index: usize = 0;

        for period in ctx.periods {
            debug!(
                pay_period = period.label(),
                cycle = %self.cycle,
                stagger = self.stagger,
                "Generating offset-cycle pay period"
            );

            for date in period.days() {
                let stamp: DayStamp = DayStamp::new(date, period);

                for (crew, offset) in crews.iter().zip(&offsets) {
                    let working: bool = self.cycle.days()[(day_index + offset) % self.cycle.len()];

                    for (member_index, person) in crew.members().iter().enumerate() {
                        let assignment: Assignment = if working && !ctx.shifts.is_empty() {
                            let shift: &ShiftLabel =
                                &ctx.shifts[(day_index + member_index) % ctx.shifts.len()];
                            Assignment::Watch {
                                shift: shift.clone(),
                                hours: ctx.shift_hours,
                            }
                        } else {
                            Assignment::Off
                        };

                        generation.records.push(DutyRecord::new(
                            &stamp,
                            Some(crew.name()),
                            person,
                            assignment,
                        ));
                    }
                }

                day_index += 1;
            }
        }

        Ok(generation)
    }
}
