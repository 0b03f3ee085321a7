// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Month grid construction and per-day annotation.
//!
//! A month renders as a 7-wide grid starting on Sunday: leading blanks up
//! to the weekday of the 1st, then one cell per day. No trailing padding
//! is produced; callers let the last row under-fill.
//!
//! ## Invariants
//!
//! - Months are 1-based (1 = January)
//! - The leading-blank count equals the zero-based day-of-week of the 1st
//!   (0 = Sunday)
//! - Cell annotations are derived, recomputed on every call from the
//!   booking list and the injected "today"

use crate::availability::{booking_for_date, is_date_booked};
use crate::booking::Booking;
use crate::date_key::DateKey;
use crate::error::DomainError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Earliest year a cursor may point at.
const MIN_YEAR: i32 = 1900;
/// Latest year a cursor may point at.
const MAX_YEAR: i32 = 2200;

/// The month a calendar is currently displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCursor {
    /// The displayed year.
    year: i32,
    /// The displayed month (1-based).
    month: u32,
}

impl MonthCursor {
    /// Creates a new `MonthCursor`.
    ///
    /// # Arguments
    ///
    /// * `year` - The displayed year
    /// * `month` - The displayed month (1 = January)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The year is outside 1900-2200
    /// - The month is outside 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DomainError::YearOutOfRange { year });
        }
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// Returns the displayed year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the displayed month (1-based).
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Returns the cursor advanced by one month, rolling over December
    /// into January of the next year.
    ///
    /// Navigation saturates at the supported year range.
    #[must_use]
    pub const fn next_month(self) -> Self {
        if self.month == 12 {
            if self.year == MAX_YEAR {
                return self;
            }
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Returns the cursor moved back one month, rolling January over into
    /// December of the previous year.
    ///
    /// Navigation saturates at the supported year range.
    #[must_use]
    pub const fn prev_month(self) -> Self {
        if self.month == 1 {
            if self.year == MIN_YEAR {
                return self;
            }
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

/// Returns true for Gregorian leap years.
const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month.
const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Builds the day slots for one month.
///
/// # Arguments
///
/// * `cursor` - The month to build
///
/// # Returns
///
/// Leading `None` entries for each weekday before the 1st (Sunday basis),
/// followed by one `Some(date)` per day of the month. The output length
/// is not padded to a fixed grid size.
#[must_use]
pub fn build_month(cursor: MonthCursor) -> Vec<Option<NaiveDate>> {
    let Some(first) = NaiveDate::from_ymd_opt(cursor.year(), cursor.month(), 1) else {
        return Vec::new();
    };

    let mut slots: Vec<Option<NaiveDate>> = Vec::new();
    for _ in 0..first.weekday().num_days_from_sunday() {
        slots.push(None);
    }
    for day in 1..=days_in_month(cursor.year(), cursor.month()) {
        slots.push(NaiveDate::from_ymd_opt(cursor.year(), cursor.month(), day));
    }
    slots
}

/// One renderable cell of the month grid.
///
/// Derived data: recomputed on every call from the booking list and the
/// caller-supplied "today".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalendarCell {
    /// The calendar day, or `None` for leading padding.
    pub date: Option<NaiveDate>,
    /// Whether an active booking occupies this day.
    pub is_booked: bool,
    /// The booking occupying this day, when there is one.
    pub occupying_booking: Option<Booking>,
    /// Whether this day is before "today".
    pub is_past: bool,
    /// Whether this day is "today".
    pub is_today: bool,
}

/// Builds the annotated cell grid for one month.
///
/// # Arguments
///
/// * `cursor` - The month to build
/// * `today` - The current day, injected by the caller
/// * `bookings` - The booking history for one room
///
/// # Returns
///
/// One `CalendarCell` per slot of [`build_month`]; padding slots carry
/// all-false annotations.
#[must_use]
pub fn month_cells(cursor: MonthCursor, today: DateKey, bookings: &[Booking]) -> Vec<CalendarCell> {
    build_month(cursor)
        .into_iter()
        .map(|slot| match slot {
            None => CalendarCell::default(),
            Some(date) => {
                let day = DateKey::new(date);
                CalendarCell {
                    date: Some(date),
                    is_booked: is_date_booked(day, bookings),
                    occupying_booking: booking_for_date(day, bookings).cloned(),
                    is_past: day < today,
                    is_today: day == today,
                }
            }
        })
        .collect()
}
