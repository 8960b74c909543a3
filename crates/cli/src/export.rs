// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of a run, one file per sheet.

use crate::error::CliError;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use watchbill::RosterRun;

pub const DAILY_ASSIGNMENTS: &str = "Daily_Assignments";
pub const WEEKLY_SUMMARY: &str = "Weekly_Summary";
pub const PAY_PERIOD_SUMMARY: &str = "PayPeriod_Summary";
pub const FAIRNESS_SUMMARY: &str = "Fairness_Summary";
pub const COVERAGE_CHECK: &str = "Coverage_Check";

/// Writes every sheet of `run` into `dir`, creating it if needed.
///
/// # Errors
///
/// Returns an error if the directory or any sheet cannot be written.
pub fn write_sheets(dir: &Path, run: &RosterRun) -> Result<Vec<PathBuf>, CliError> {
    std::fs::create_dir_all(dir).map_err(|source| CliError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    Ok(vec![
        write_sheet(dir, DAILY_ASSIGNMENTS, &run.records)?,
        write_sheet(dir, WEEKLY_SUMMARY, &run.summaries.weekly)?,
        write_sheet(dir, PAY_PERIOD_SUMMARY, &run.summaries.pay_periods)?,
        write_sheet(dir, FAIRNESS_SUMMARY, &run.summaries.fairness)?,
        write_sheet(dir, COVERAGE_CHECK, &run.summaries.coverage)?,
    ])
}

fn write_sheet<T: Serialize>(dir: &Path, name: &str, rows: &[T]) -> Result<PathBuf, CliError> {
    let path: PathBuf = dir.join(format!("{name}.csv"));
    let sheet_error = |source: csv::Error| CliError::WriteSheet {
        path: path.display().to_string(),
        source,
    };

    let mut writer = csv::Writer::from_path(&path).map_err(sheet_error)?;
    for row in rows {
        writer.serialize(row).map_err(sheet_error)?;
    }
    writer.flush().map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;

    debug!(sheet = name, rows = rows.len(), "Wrote sheet");
    Ok(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use time::macros::date;
    use watchbill::{RosterConfig, StrategyConfig};
    use watchbill_domain::{Crew, Roster, RotationPattern, StaffingMode};

    fn create_run() -> RosterRun {
        let mut config: RosterConfig = RosterConfig::new(
            date!(2026 - 02 - 08),
            date!(2026 - 02 - 21),
            Roster::Crews(vec![
                Crew::numbered("Team A", "A", 2),
                Crew::numbered("Team B", "B", 2),
            ]),
            StrategyConfig::OffsetCycle {
                cycle: RotationPattern::coa2(),
                stagger: 2,
            },
        );
        config.staffing_mode = StaffingMode::TwoByTwelve;
        watchbill::run(&config).unwrap()
    }

    #[test]
    fn test_writes_all_five_sheets() {
        let dir = tempfile::tempdir().unwrap();
        let written: Vec<PathBuf> = write_sheets(dir.path(), &create_run()).unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "Daily_Assignments.csv",
                "Weekly_Summary.csv",
                "PayPeriod_Summary.csv",
                "Fairness_Summary.csv",
                "Coverage_Check.csv",
            ]
        );
        assert!(written.iter().all(|p| p.exists()));
    }

    #[test]
    fn test_daily_sheet_has_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let run: RosterRun = create_run();
        write_sheets(dir.path(), &run).unwrap();

        let text: String =
            std::fs::read_to_string(dir.path().join("Daily_Assignments.csv")).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("date,pay_period,iso_week,unit,person,status,shift,paid_hours")
        );
        assert_eq!(
            lines.next(),
            Some("2026-02-08,PP05,6,Team A,A01,Watch,Day 0700-1900,12")
        );
        assert_eq!(text.lines().count(), run.records.len() + 1);
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested: PathBuf = dir.path().join("out").join("pp05");

        write_sheets(&nested, &create_run()).unwrap();

        assert!(nested.join("Coverage_Check.csv").exists());
    }
}
