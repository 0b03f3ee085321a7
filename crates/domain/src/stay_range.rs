// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Proposed stay ranges and conflict detection against existing bookings.
//!
//! All ranges are half-open `[check_in, check_out)`. Two half-open ranges
//! `[a, b)` and `[c, d)` intersect iff `a < d && c < b`; that single
//! inequality covers the starts-inside, ends-inside, and fully-contains
//! cases, so no case analysis is needed (or wanted - a branch per case is
//! easy to mis-negate).

use crate::booking::Booking;
use crate::date_key::DateKey;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A validated half-open stay range `[check_in, check_out)`.
///
/// Construction enforces `check_in < check_out`, so a `StayRange` always
/// covers at least one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRange {
    /// First occupied day.
    check_in: DateKey,
    /// First day after the stay (exclusive).
    check_out: DateKey,
}

impl StayRange {
    /// Creates a new `StayRange`.
    ///
    /// # Arguments
    ///
    /// * `check_in` - First occupied day
    /// * `check_out` - First day after the stay (exclusive)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStayRange` if `check_in` is not
    /// strictly before `check_out`.
    pub fn new(check_in: DateKey, check_out: DateKey) -> Result<Self, DomainError> {
        if check_in >= check_out {
            return Err(DomainError::InvalidStayRange {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the first occupied day.
    #[must_use]
    pub const fn check_in(self) -> DateKey {
        self.check_in
    }

    /// Returns the first day after the stay.
    #[must_use]
    pub const fn check_out(self) -> DateKey {
        self.check_out
    }

    /// Returns the number of nights covered by this range.
    ///
    /// Always at least 1 by construction.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out.date() - self.check_in.date()).num_days()
    }

    /// Returns true if the given day falls inside this range.
    ///
    /// Check-out exclusive, like all occupancy tests.
    #[must_use]
    pub fn contains(&self, day: DateKey) -> bool {
        self.check_in <= day && day < self.check_out
    }

    /// Returns true if this range intersects the booking's range.
    ///
    /// Bookings in a non-active status never conflict.
    #[must_use]
    pub fn conflicts_with(&self, booking: &Booking) -> bool {
        booking.is_active()
            && self.check_in < booking.check_out()
            && booking.check_in() < self.check_out
    }
}

/// Checks whether a proposed `[check_in, check_out)` range overlaps any
/// active booking.
///
/// A degenerate range (check-in not strictly before check-out) is an
/// empty interval and conflicts with nothing. Adjacent ranges that share
/// only the boundary day do not conflict, since the check-out day is
/// free for a new arrival.
///
/// # Arguments
///
/// * `check_in` - First occupied day of the proposed stay
/// * `check_out` - First day after the proposed stay (exclusive)
/// * `bookings` - The booking history for one room
#[must_use]
pub fn range_conflicts(check_in: DateKey, check_out: DateKey, bookings: &[Booking]) -> bool {
    StayRange::new(check_in, check_out)
        .is_ok_and(|range| bookings.iter().any(|booking| range.conflicts_with(booking)))
}
