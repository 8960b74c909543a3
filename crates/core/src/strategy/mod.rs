// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rotation strategies.
//!
//! Every strategy turns the same inputs (calendar, roster, shift set, hour
//! cap) into an ordered sequence of duty records. Strategies are
//! interchangeable and selected by configuration.
//!
//! Generation is strictly sequential: days are processed in date order, and
//! any per-period ledger or pool cursor is owned by the running strategy and
//! passed explicitly from one period to the next.

mod greedy;
mod offset_cycle;
mod paired_pattern;
mod rank_rotation;

pub use greedy::{ExhaustionPolicy, GreedyCapAware};
pub use offset_cycle::{DEFAULT_STAGGER, OffsetCycle};
pub use paired_pattern::{PairedPattern, ResolvedPairing};
pub use rank_rotation::RankRotation;

use crate::error::CoreError;
use crate::record::DutyRecord;
use crate::validator::FairnessMetric;
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::warn;
use watchbill_domain::{
    CalendarSpan, Crew, PayPeriod, PersonId, Roster, RosterShape, RotationPattern, ShiftLabel,
};

/// A roster generation algorithm.
pub trait RotationStrategy {
    /// Short, stable strategy name used in logs and reports.
    fn name(&self) -> &'static str;

    /// The roster shape this strategy consumes.
    fn roster_shape(&self) -> RosterShape;

    /// The workload metric fairness is judged on for this strategy.
    fn fairness_metric(&self) -> FairnessMetric {
        FairnessMetric::TotalShifts
    }

    /// Checks strategy-specific configuration before generation.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy parameters do not fit the context.
    fn check(&self, ctx: &GenerationContext<'_>) -> Result<(), CoreError> {
        ctx.require_shape(self.name(), self.roster_shape())
    }

    /// Generates duty records for every pay period in the context.
    ///
    /// # Errors
    ///
    /// Returns an error if the context does not fit the strategy.
    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Generation, CoreError>;
}

/// Inputs shared by every strategy.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    /// The calendar span.
    pub span: &'a CalendarSpan,
    /// Pay periods derived from `span`, in order.
    pub periods: &'a [PayPeriod],
    /// The personnel roster.
    pub roster: &'a Roster,
    /// Shift labels, in rotation order.
    pub shifts: &'a [ShiftLabel],
    /// Paid hours per shift.
    pub shift_hours: u16,
    /// Maximum paid hours per person per pay period.
    pub hour_cap: u32,
}

impl GenerationContext<'_> {
    /// Fails unless the roster has the expected shape.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::RosterShapeMismatch` on a shape mismatch.
    pub fn require_shape(
        &self,
        strategy: &'static str,
        expected: RosterShape,
    ) -> Result<(), CoreError> {
        let actual: RosterShape = self.roster.shape();
        if actual != expected {
            return Err(CoreError::RosterShapeMismatch {
                strategy,
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Returns the crews, or a shape mismatch error.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is a pool.
    pub fn crews(&self, strategy: &'static str) -> Result<&[Crew], CoreError> {
        match self.roster {
            Roster::Crews(crews) => Ok(crews),
            Roster::Pool(_) => Err(CoreError::RosterShapeMismatch {
                strategy,
                expected: RosterShape::Crews,
                actual: RosterShape::Pool,
            }),
        }
    }

    /// Returns the pool, or a shape mismatch error.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is crew-based.
    pub fn pool(&self, strategy: &'static str) -> Result<&[PersonId], CoreError> {
        match self.roster {
            Roster::Pool(pool) => Ok(pool),
            Roster::Crews(_) => Err(CoreError::RosterShapeMismatch {
                strategy,
                expected: RosterShape::Pool,
                actual: RosterShape::Crews,
            }),
        }
    }
}

/// The output of one strategy run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    /// Duty records in date order.
    pub records: Vec<DutyRecord>,
    /// Slots where every candidate was already at the hour cap.
    pub cap_exhaustions: Vec<CapExhaustion>,
    /// Cycle days no crew covers, for crew strategies.
    pub rotation_gap: Option<RotationGap>,
}

/// Cycle days on which a crew rotation puts nobody on duty.
///
/// Offsets use the `(day - offset) mod len` convention of
/// `RotationPattern::crews_on_duty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationGap {
    /// The crew pattern.
    pub pattern: RotationPattern,
    /// Offset of each crew, in roster order.
    pub offsets: Vec<u16>,
    /// Fewest evenly staggered crews that could cover the cycle.
    pub min_crews: usize,
    /// Uncovered cycle positions.
    pub uncovered_days: Vec<usize>,
}

impl RotationGap {
    /// Returns the gap left by running `pattern` at `offsets`, or `None` if
    /// every cycle day has a crew on.
    #[must_use]
    pub fn detect(
        strategy: &'static str,
        pattern: &RotationPattern,
        offsets: &[u16],
    ) -> Option<Self> {
        let uncovered_days: Vec<usize> = pattern.uncovered_days(offsets);
        if uncovered_days.is_empty() {
            return None;
        }

        let gap: Self = Self {
            pattern: pattern.clone(),
            offsets: offsets.to_vec(),
            min_crews: pattern.min_crews_for_coverage(),
            uncovered_days,
        };
        warn!(
            strategy,
            pattern = %gap.pattern,
            offsets = ?gap.offsets,
            crews = offsets.len(),
            min_crews = gap.min_crews,
            uncovered_days = ?gap.uncovered_days,
            "Crew rotation leaves cycle days with nobody on duty"
        );
        Some(gap)
    }
}

/// A slot the greedy strategy could not fill within the hour cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapExhaustion {
    /// The slot date.
    #[serde(with = "crate::iso_date")]
    pub date: Date,
    /// The pay period label.
    pub pay_period: String,
    /// The unfilled shift.
    pub shift: ShiftLabel,
    /// The person assigned over the cap, if the policy emits one.
    pub assigned: Option<PersonId>,
    /// That person's period total after the over-cap assignment.
    pub hours_after: Option<u32>,
}
