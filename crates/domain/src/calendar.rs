// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar span and pay period derivation.
//!
//! A calendar span is an inclusive date range. Its pay periods are derived
//! deterministically: they start on the span's start date, are contiguous and
//! non-overlapping, and all have the configured length except possibly the
//! last, which is clipped to the span's end date.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Duration};

/// Default pay period length, in days.
pub const DEFAULT_PERIOD_LENGTH_DAYS: u16 = 14;

/// Default ordinal of the first pay period in a span (`PP05`).
pub const DEFAULT_FIRST_PERIOD_NUMBER: u16 = 5;

/// An inclusive date range partitioned into pay periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSpan {
    /// The first day of the span (inclusive).
    #[serde(with = "crate::iso_date")]
    start_date: Date,
    /// The last day of the span (inclusive).
    #[serde(with = "crate::iso_date")]
    end_date: Date,
    /// The length of a full pay period.
    period_length_days: u16,
    /// The ordinal used to label the first pay period.
    first_period_number: u16,
}

impl CalendarSpan {
    /// Creates a new `CalendarSpan`.
    ///
    /// # Arguments
    ///
    /// * `start_date` - The first day of the span (inclusive)
    /// * `end_date` - The last day of the span (inclusive)
    /// * `period_length_days` - Days per full pay period
    /// * `first_period_number` - Ordinal used for the first period's label
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The end date is before the start date
    /// - The period length is zero
    pub fn new(
        start_date: Date,
        end_date: Date,
        period_length_days: u16,
        first_period_number: u16,
    ) -> Result<Self, DomainError> {
        if end_date < start_date {
            return Err(DomainError::EndBeforeStart {
                start_date,
                end_date,
            });
        }

        if period_length_days == 0 {
            return Err(DomainError::InvalidPeriodLength {
                days: period_length_days,
            });
        }

        Ok(Self {
            start_date,
            end_date,
            period_length_days,
            first_period_number,
        })
    }

    /// Returns the start date of the span.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the end date of the span.
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the configured pay period length.
    #[must_use]
    pub const fn period_length_days(&self) -> u16 {
        self.period_length_days
    }

    /// Returns the ordinal of the first pay period.
    #[must_use]
    pub const fn first_period_number(&self) -> u16 {
        self.first_period_number
    }

    /// Returns the number of days in the span.
    #[must_use]
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).whole_days() + 1
    }

    /// Returns every date in the span, in order.
    #[must_use]
    pub fn days(&self) -> Vec<Date> {
        let mut days: Vec<Date> = Vec::new();
        let mut current: Option<Date> = Some(self.start_date);

        while let Some(day) = current {
            if day > self.end_date {
                break;
            }
            days.push(day);
            current = day.next_day();
        }

        days
    }

    /// Derives all pay periods covering the span.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows.
    pub fn pay_periods(&self) -> Result<Vec<PayPeriod>, DomainError> {
        let mut periods: Vec<PayPeriod> = Vec::new();
        let mut period_start: Date = self.start_date;
        let mut index: u16 = 0;

        loop {
            let period: PayPeriod = self.derive_pay_period(index, period_start)?;
            let period_end: Date = period.end_date();
            periods.push(period);

            if period_end >= self.end_date {
                break;
            }

            period_start =
                period_end
                    .next_day()
                    .ok_or_else(|| DomainError::DateArithmeticOverflow {
                        operation: format!("calculating pay period {} start date", index + 1),
                    })?;
            index = index
                .checked_add(1)
                .ok_or_else(|| DomainError::DateArithmeticOverflow {
                    operation: String::from("counting pay periods"),
                })?;
        }

        Ok(periods)
    }

    /// Returns the pay period containing `date`, if the date is in the span.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows.
    pub fn period_containing(&self, date: Date) -> Result<Option<PayPeriod>, DomainError> {
        if date < self.start_date || date > self.end_date {
            return Ok(None);
        }

        let offset: i64 = (date - self.start_date).whole_days();
        let index: u16 = u16::try_from(offset / i64::from(self.period_length_days)).map_err(|_| {
            DomainError::DateArithmeticOverflow {
                operation: format!("locating pay period for {date}"),
            }
        })?;
        let period_start: Date = self
            .start_date
            .checked_add(Duration::days(
                i64::from(index) * i64::from(self.period_length_days),
            ))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("calculating pay period {index} start date"),
            })?;

        self.derive_pay_period(index, period_start).map(Some)
    }

    /// Derives a single pay period starting at `period_start`.
    ///
    /// The end date is clipped to the end of the span.
    fn derive_pay_period(&self, index: u16, period_start: Date) -> Result<PayPeriod, DomainError> {
        // A full period ends length - 1 days after it starts. If that date is
        // not representable it is certainly past the span end.
        let full_end: Option<Date> =
            period_start.checked_add(Duration::days(i64::from(self.period_length_days) - 1));
        let period_end: Date = match full_end {
            Some(end) if end < self.end_date => end,
            _ => self.end_date,
        };

        let number: u16 = self
            .first_period_number
            .checked_add(index)
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("numbering pay period {index}"),
            })?;

        Ok(PayPeriod {
            index,
            number,
            label: format!("PP{number:02}"),
            start_date: period_start,
            end_date: period_end,
        })
    }
}

/// A single pay period within a calendar span.
///
/// Pay periods are immutable and derived from the span definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The 0-based position of this period within the span.
    index: u16,
    /// The ordinal shown in the label (`first_period_number + index`).
    number: u16,
    /// Human label, e.g. `PP05`.
    label: String,
    /// The start date of this pay period (inclusive).
    #[serde(with = "crate::iso_date")]
    start_date: Date,
    /// The end date of this pay period (inclusive).
    #[serde(with = "crate::iso_date")]
    end_date: Date,
}

impl PayPeriod {
    /// Returns the 0-based index within the span.
    #[must_use]
    pub const fn index(&self) -> u16 {
        self.index
    }

    /// Returns the period ordinal.
    #[must_use]
    pub const fn number(&self) -> u16 {
        self.number
    }

    /// Returns the label, e.g. `PP05`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the start date (inclusive).
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the end date (inclusive).
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the number of days in this pay period.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).whole_days() + 1
    }

    /// Returns whether `date` falls inside this period.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns every date in this period, in order.
    #[must_use]
    pub fn days(&self) -> Vec<Date> {
        let mut days: Vec<Date> = Vec::new();
        let mut current: Option<Date> = Some(self.start_date);

        while let Some(day) = current {
            if day > self.end_date {
                break;
            }
            days.push(day);
            current = day.next_day();
        }

        days
    }
}
