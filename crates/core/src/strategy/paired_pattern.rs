// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{Generation, GenerationContext, RotationStrategy};
use crate::error::CoreError;
use crate::ledger::RotationCursor;
use crate::record::{Assignment, DayStamp, DutyRecord};
use crate::validator::FairnessMetric;
use tracing::debug;
use watchbill_domain::{DomainError, PersonId, RosterShape, RotationPattern};

/// Shared pool drawn in pairs, one pair per shift, with complementary patterns.
///
/// Every pay period draws the next `people_per_period` people from a cursor
/// that never resets. Person `2s` works shift `s` on pattern A days and
/// person `2s + 1` on pattern B days; the other days are Normal Duty. People
/// drawn beyond the paired slots are Normal Duty for the whole period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairedPattern {
    pattern_a: Option<RotationPattern>,
    pattern_b: Option<RotationPattern>,
    people_per_period: Option<usize>,
}

/// Patterns and draw size after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPairing {
    /// Pattern for the first person of each pair.
    pub pattern_a: RotationPattern,
    /// Pattern for the second person of each pair.
    pub pattern_b: RotationPattern,
    /// People drawn per pay period.
    pub people_per_period: usize,
}

impl PairedPattern {
    /// Creates the strategy. Unset parameters take their defaults at
    /// generation time, when the period length and shift set are known.
    #[must_use]
    pub const fn new(
        pattern_a: Option<RotationPattern>,
        pattern_b: Option<RotationPattern>,
        people_per_period: Option<usize>,
    ) -> Self {
        Self {
            pattern_a,
            pattern_b,
            people_per_period,
        }
    }

    /// Applies defaults and checks the pairing against the context.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Pattern A is not one pay period long
    /// - Pattern B is not the complement of pattern A
    /// - `people_per_period` is odd or zero
    /// - The pool is smaller than `people_per_period`
    pub fn resolve(&self, ctx: &GenerationContext<'_>) -> Result<ResolvedPairing, CoreError> {
        let pool: &[PersonId] = ctx.pool(self.name())?;
        let period_len: usize = usize::from(ctx.span.period_length_days());

        let pattern_a: RotationPattern = self
            .pattern_a
            .clone()
            .unwrap_or_else(|| RotationPattern::halves(period_len));
        if pattern_a.len() != period_len {
            return Err(DomainError::PatternLengthMismatch {
                expected: period_len,
                actual: pattern_a.len(),
            }
            .into());
        }

        let pattern_b: RotationPattern = self
            .pattern_b
            .clone()
            .unwrap_or_else(|| pattern_a.complement());
        if !pattern_b.is_complement_of(&pattern_a) {
            return Err(DomainError::PatternsNotComplementary {
                pattern_a: pattern_a.to_string(),
                pattern_b: pattern_b.to_string(),
            }
            .into());
        }

        let people_per_period: usize = self.people_per_period.unwrap_or(2 * ctx.shifts.len());
        if people_per_period == 0 || !people_per_period.is_multiple_of(2) {
            return Err(DomainError::InvalidPeoplePerPeriod {
                count: people_per_period,
            }
            .into());
        }
        if people_per_period > pool.len() {
            return Err(DomainError::PoolTooSmall {
                pool_size: pool.len(),
                required: people_per_period,
            }
            .into());
        }

        Ok(ResolvedPairing {
            pattern_a,
            pattern_b,
            people_per_period,
        })
    }
}

impl RotationStrategy for PairedPattern {
    fn name(&self) -> &'static str {
        "paired_pattern"
    }

    fn roster_shape(&self) -> RosterShape {
        RosterShape::Pool
    }

    fn fairness_metric(&self) -> FairnessMetric {
        FairnessMetric::PeriodsWorked
    }

    fn check(&self, ctx: &GenerationContext<'_>) -> Result<(), CoreError> {
        self.resolve(ctx).map(|_| ())
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Generation, CoreError> {
        let pairing: ResolvedPairing = self.resolve(ctx)?;
        let pool: &[PersonId] = ctx.pool(self.name())?;
        let paired_slots: usize = (2 * ctx.shifts.len()).min(pairing.people_per_period);

        let mut cursor: RotationCursor = RotationCursor::new(pool.len());
        let mut generation: Generation = Generation::default();

        for period in ctx.periods {
            let start: usize = cursor.position();
            let drawn: Vec<&PersonId> = cursor
                .take(pairing.people_per_period)
                .into_iter()
                .map(|index| &pool[index])
                .collect();

            debug!(
                pay_period = period.label(),
                cursor_start = start,
                cursor_end = cursor.position(),
                drawn = drawn.len(),
                "Drew paired-pattern personnel"
            );

            for (day_in_period, date) in (0_i64..).zip(period.days()) {
                let stamp: DayStamp = DayStamp::new(date, period);
                let normal_duty: Assignment = Assignment::NormalDuty {
                    hours: ctx.shift_hours,
                };

                for (pair, shift) in drawn[..paired_slots].chunks_exact(2).zip(ctx.shifts) {
                    let watch: Assignment = Assignment::Watch {
                        shift: shift.clone(),
                        hours: ctx.shift_hours,
                    };
                    let on_a: bool = pairing.pattern_a.is_on(day_in_period);
                    let on_b: bool = pairing.pattern_b.is_on(day_in_period);

                    generation.records.push(DutyRecord::new(
                        &stamp,
                        None,
                        pair[0],
                        if on_a { watch.clone() } else { normal_duty.clone() },
                    ));
                    generation.records.push(DutyRecord::new(
                        &stamp,
                        None,
                        pair[1],
                        if on_b { watch } else { normal_duty.clone() },
                    ));
                }

                for person in &drawn[paired_slots..] {
                    generation.records.push(DutyRecord::new(
                        &stamp,
                        None,
                        person,
                        normal_duty.clone(),
                    ));
                }
            }
        }

        Ok(generation)
    }
}
