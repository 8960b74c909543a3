// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Run configuration.
//!
//! `RosterConfig` is the single input to a run. It deserializes from JSON
//! with defaults for everything except the span, the roster, and the
//! strategy selection.

use crate::error::CoreError;
use crate::strategy::{
    ExhaustionPolicy, GenerationContext, GreedyCapAware, OffsetCycle, PairedPattern,
    RankRotation, RotationStrategy, DEFAULT_STAGGER,
};
use crate::validator::{FairnessMetric, ValidationPolicy};
use serde::{Deserialize, Serialize};
use time::Date;
use watchbill_domain::{
    CalendarSpan, DEFAULT_FIRST_PERIOD_NUMBER, DEFAULT_PERIOD_LENGTH_DAYS, PayPeriod, Roster,
    RotationPattern, ShiftLabel, StaffingMode, validate_roster, validate_shift_hours,
};

/// Default maximum paid hours per person per pay period.
pub const DEFAULT_HOUR_CAP: u32 = 80;

/// Default minimum Watch headcount per shift.
pub const DEFAULT_MIN_PAX_PER_SHIFT: u32 = 1;

/// Default allowed fairness spread.
pub const DEFAULT_FAIRNESS_TOLERANCE: u32 = 1;

const fn default_period_length_days() -> u16 {
    DEFAULT_PERIOD_LENGTH_DAYS
}

const fn default_first_period_number() -> u16 {
    DEFAULT_FIRST_PERIOD_NUMBER
}

const fn default_hour_cap() -> u32 {
    DEFAULT_HOUR_CAP
}

const fn default_min_pax_per_shift() -> u32 {
    DEFAULT_MIN_PAX_PER_SHIFT
}

const fn default_fairness_tolerance() -> u32 {
    DEFAULT_FAIRNESS_TOLERANCE
}

const fn default_stagger() -> u16 {
    DEFAULT_STAGGER
}

/// Everything a run needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// First day of the span.
    #[serde(with = "crate::iso_date")]
    pub start_date: Date,
    /// Last day of the span, inclusive.
    #[serde(with = "crate::iso_date")]
    pub end_date: Date,
    /// Days per pay period.
    #[serde(default = "default_period_length_days")]
    pub period_length_days: u16,
    /// Number of the first pay period.
    #[serde(default = "default_first_period_number")]
    pub first_period_number: u16,
    /// Maximum paid hours per person per pay period.
    #[serde(default = "default_hour_cap")]
    pub hour_cap: u32,
    /// Shift label set and shift length.
    #[serde(default)]
    pub staffing_mode: StaffingMode,
    /// Minimum Watch headcount per (date, shift).
    #[serde(default = "default_min_pax_per_shift")]
    pub min_pax_per_shift: u32,
    /// Maximum allowed fairness spread.
    #[serde(default = "default_fairness_tolerance")]
    pub fairness_tolerance: u32,
    /// Overrides the strategy's fairness metric.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fairness_metric: Option<FairnessMetric>,
    /// The personnel.
    pub roster: Roster,
    /// Which strategy runs, with its parameters.
    pub strategy: StrategyConfig,
}

impl RosterConfig {
    /// Creates a configuration with default thresholds.
    #[must_use]
    pub const fn new(
        start_date: Date,
        end_date: Date,
        roster: Roster,
        strategy: StrategyConfig,
    ) -> Self {
        Self {
            start_date,
            end_date,
            period_length_days: DEFAULT_PERIOD_LENGTH_DAYS,
            first_period_number: DEFAULT_FIRST_PERIOD_NUMBER,
            hour_cap: DEFAULT_HOUR_CAP,
            staffing_mode: StaffingMode::ThreeByEight,
            min_pax_per_shift: DEFAULT_MIN_PAX_PER_SHIFT,
            fairness_tolerance: DEFAULT_FAIRNESS_TOLERANCE,
            fairness_metric: None,
            roster,
            strategy,
        }
    }

    /// Builds the calendar span.
    ///
    /// # Errors
    ///
    /// Returns an error if the end date precedes the start date or the
    /// period length is zero.
    pub fn calendar(&self) -> Result<CalendarSpan, CoreError> {
        Ok(CalendarSpan::new(
            self.start_date,
            self.end_date,
            self.period_length_days,
            self.first_period_number,
        )?)
    }

    /// Performs every configuration check a run would, without generating.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error found.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.with_context(|strategy, ctx| strategy.check(ctx))
    }

    /// Returns the thresholds to validate a run of `strategy` against.
    #[must_use]
    pub fn validation_policy(&self, strategy: &dyn RotationStrategy) -> ValidationPolicy {
        ValidationPolicy {
            hour_cap: self.hour_cap,
            min_pax_per_shift: self.min_pax_per_shift,
            fairness_tolerance: self.fairness_tolerance,
            fairness_metric: self
                .fairness_metric
                .unwrap_or_else(|| strategy.fairness_metric()),
        }
    }

    /// Builds the strategy and its generation context, then hands both to `f`.
    pub(crate) fn with_context<T>(
        &self,
        f: impl FnOnce(&dyn RotationStrategy, &GenerationContext<'_>) -> Result<T, CoreError>,
    ) -> Result<T, CoreError> {
        let span: CalendarSpan = self.calendar()?;
        let periods: Vec<PayPeriod> = span.pay_periods()?;
        validate_roster(&self.roster)?;
        validate_shift_hours(self.staffing_mode.shift_hours())?;

        let shifts: Vec<ShiftLabel> = self.staffing_mode.shift_labels();
        let strategy: Box<dyn RotationStrategy> = self.strategy.build();
        let ctx: GenerationContext<'_> = GenerationContext {
            span: &span,
            periods: &periods,
            roster: &self.roster,
            shifts: &shifts,
            shift_hours: self.staffing_mode.shift_hours(),
            hour_cap: self.hour_cap,
        };

        f(strategy.as_ref(), &ctx)
    }
}

/// Strategy selection, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    /// Fixed cycle per team, staggered by team index.
    OffsetCycle {
        /// The repeating cycle.
        #[serde(default = "RotationPattern::coa2")]
        cycle: RotationPattern,
        /// Days of stagger per team.
        #[serde(default = "default_stagger")]
        stagger: u16,
    },
    /// Per-crew pattern with shift types rotated by pay period.
    RankRotation {
        /// The per-crew on/off pattern.
        #[serde(default = "RotationPattern::eleven_on_three_off")]
        pattern: RotationPattern,
    },
    /// Pool drawn in pairs with complementary patterns.
    PairedPattern {
        /// Pattern for the first of each pair.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pattern_a: Option<RotationPattern>,
        /// Pattern for the second of each pair.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pattern_b: Option<RotationPattern>,
        /// People drawn per pay period.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        people_per_period: Option<usize>,
    },
    /// Cap-aware round robin over a pool.
    GreedyCapAware {
        /// What to do when everyone is at the cap.
        #[serde(default)]
        on_exhaustion: ExhaustionPolicy,
    },
}

impl StrategyConfig {
    /// Instantiates the selected strategy.
    #[must_use]
    pub fn build(&self) -> Box<dyn RotationStrategy> {
        match self {
            Self::OffsetCycle { cycle, stagger } => {
                Box::new(OffsetCycle::new(cycle.clone(), *stagger))
            }
            Self::RankRotation { pattern } => Box::new(RankRotation::new(pattern.clone())),
            Self::PairedPattern {
                pattern_a,
                pattern_b,
                people_per_period,
            } => Box::new(PairedPattern::new(
                pattern_a.clone(),
                pattern_b.clone(),
                *people_per_period,
            )),
            Self::GreedyCapAware { on_exhaustion } => {
                Box::new(GreedyCapAware::new(*on_exhaustion))
            }
        }
    }
}
