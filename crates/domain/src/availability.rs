// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day-level occupancy lookups over a room's booking history.
//!
//! These are read-only scans over an already-fetched slice of bookings.
//! Only active bookings (paid or pending) occupy days, and occupancy is
//! check-in inclusive, check-out exclusive.

use crate::booking::Booking;
use crate::date_key::DateKey;

/// Checks whether any active booking occupies the given day.
///
/// # Arguments
///
/// * `day` - The calendar day to test
/// * `bookings` - The booking history for one room
///
/// # Returns
///
/// `true` if at least one active booking's `[check_in, check_out)` range
/// contains `day`.
#[must_use]
pub fn is_date_booked(day: DateKey, bookings: &[Booking]) -> bool {
    bookings.iter().any(|booking| booking.occupies(day))
}

/// Finds the booking that occupies the given day, if any.
///
/// When bookings overlap (which upstream data should prevent, but this
/// function does not validate), the first match in input order wins.
/// That order is the insertion order of the slice, not a guarantee.
///
/// # Arguments
///
/// * `day` - The calendar day to look up
/// * `bookings` - The booking history for one room
///
/// # Returns
///
/// The first active booking whose range contains `day`, or `None`.
#[must_use]
pub fn booking_for_date(day: DateKey, bookings: &[Booking]) -> Option<&Booking> {
    bookings.iter().find(|booking| booking.occupies(day))
}
