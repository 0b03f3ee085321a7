// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use room_cal_domain::Booking;

// Re-export public types and functions
pub use apply::{apply, confirm_stay};
pub use command::Command;
pub use error::CoreError;
pub use state::{CalendarView, ConfirmedStay, TransitionResult, ViewEvent};

/// Validates that every booking belongs to the given room.
///
/// This is a read-only validation shared by view construction and
/// booking replacement.
///
/// # Arguments
///
/// * `room_id` - The room the calendar is scoped to
/// * `bookings` - The bookings to check
///
/// # Returns
///
/// * `Ok(())` if all bookings belong to the room
/// * `Err(CoreError::RoomMismatch)` on the first booking that does not
///
/// # Errors
///
/// Returns an error if any booking belongs to a different room.
pub fn validate_room_scope(room_id: i64, bookings: &[Booking]) -> Result<(), CoreError> {
    for booking in bookings {
        if booking.room_id() != room_id {
            return Err(CoreError::RoomMismatch {
                expected: room_id,
                found: booking.room_id(),
            });
        }
    }
    Ok(())
}
