// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DutyRecord, Generation, RosterConfig, StrategyConfig};
use time::macros::date;
use time::{Date, Duration};
use watchbill_domain::{Crew, PersonId, Roster};

/// Sunday 2026-02-08, the first day of PP05.
pub const START: Date = date!(2026 - 02 - 08);

pub fn create_crews(sizes: &[usize]) -> Vec<Crew> {
    sizes
        .iter()
        .zip(['A', 'B', 'C', 'D', 'E', 'F'])
        .map(|(size, letter)| {
            Crew::numbered(&format!("Crew {letter}"), &letter.to_string(), *size)
        })
        .collect()
}

pub fn create_pool(size: usize) -> Roster {
    Roster::Pool(
        (1..=size)
            .map(|n| PersonId::new(&format!("P{n:02}")))
            .collect(),
    )
}

pub fn create_config(days: i64, roster: Roster, strategy: StrategyConfig) -> RosterConfig {
    RosterConfig::new(START, START + Duration::days(days - 1), roster, strategy)
}

pub fn generate(config: &RosterConfig) -> Generation {
    config
        .with_context(|strategy, ctx| strategy.generate(ctx))
        .unwrap()
}

pub fn records_on(records: &[DutyRecord], date: Date) -> Vec<&DutyRecord> {
    records.iter().filter(|r| r.date == date).collect()
}
