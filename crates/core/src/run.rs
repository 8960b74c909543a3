// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::aggregate::Summaries;
use crate::config::RosterConfig;
use crate::error::CoreError;
use crate::record::DutyRecord;
use crate::strategy::{CapExhaustion, Generation, RotationGap};
use crate::validator::{ValidationPolicy, ValidationReport, validate};
use serde::{Deserialize, Serialize};
use tracing::info;
use watchbill_domain::PayPeriod;

/// Everything one run produced.
///
/// Collaborators (console reporter, file exporters) consume this value and
/// nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRun {
    /// Name of the strategy that ran.
    pub strategy: String,
    /// Pay periods of the span.
    pub periods: Vec<PayPeriod>,
    /// Duty records in date order.
    pub records: Vec<DutyRecord>,
    /// Slots the greedy strategy could not fill within the cap.
    pub cap_exhaustions: Vec<CapExhaustion>,
    /// Cycle days the crew rotation leaves uncovered, if any.
    pub rotation_gap: Option<RotationGap>,
    /// Aggregated views.
    pub summaries: Summaries,
    /// Thresholds the run was validated against.
    pub policy: ValidationPolicy,
    /// The validation result.
    pub report: ValidationReport,
}

/// Generates and validates a roster.
///
/// The run is deterministic: the same configuration always yields identical
/// records.
///
/// # Arguments
///
/// * `config` - The run configuration
///
/// # Errors
///
/// Returns an error if the configuration is invalid. Constraint violations
/// are not errors; they are reported in `RosterRun::report`.
pub fn run(config: &RosterConfig) -> Result<RosterRun, CoreError> {
    config.with_context(|strategy, ctx| {
        strategy.check(ctx)?;

        info!(
            strategy = strategy.name(),
            start = %ctx.span.start_date(),
            end = %ctx.span.end_date(),
            periods = ctx.periods.len(),
            people = ctx.roster.headcount(),
            "Generating roster"
        );

        let generation: Generation = strategy.generate(ctx)?;
        let summaries: Summaries = Summaries::build(
            &generation.records,
            &ctx.roster.people(),
            ctx.periods,
            ctx.shifts,
            config.min_pax_per_shift,
        );
        let policy: ValidationPolicy = config.validation_policy(strategy);
        let report: ValidationReport =
            validate(&summaries, &generation.cap_exhaustions, &policy);

        info!(
            strategy = strategy.name(),
            records = generation.records.len(),
            cap_exhaustions = generation.cap_exhaustions.len(),
            rotation_gap = generation.rotation_gap.is_some(),
            passed = report.passed,
            "Roster generated"
        );

        Ok(RosterRun {
            strategy: strategy.name().to_string(),
            periods: ctx.periods.to_vec(),
            records: generation.records,
            cap_exhaustions: generation.cap_exhaustions,
            rotation_gap: generation.rotation_gap,
            summaries,
            policy,
            report,
        })
    })
}
