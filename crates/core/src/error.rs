// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use room_cal_domain::{DateKey, DomainError, SelectionPhase};

/// Errors that can occur during view transitions and stay confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A stay cannot be confirmed before both boundary days are picked.
    IncompleteSelection {
        /// The phase the selection was in.
        phase: SelectionPhase,
    },
    /// The selected range overlaps an existing active booking.
    RangeUnavailable {
        /// The selected check-in day.
        check_in: DateKey,
        /// The selected check-out day.
        check_out: DateKey,
    },
    /// A booking for a different room was offered to this calendar.
    RoomMismatch {
        /// The room this calendar is scoped to.
        expected: i64,
        /// The room the offending booking belongs to.
        found: i64,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::IncompleteSelection { phase } => {
                write!(f, "Cannot confirm stay: selection is {phase}")
            }
            Self::RangeUnavailable {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "This date range is already booked: {check_in} to {check_out}"
                )
            }
            Self::RoomMismatch { expected, found } => {
                write!(
                    f,
                    "Booking for room {found} cannot be applied to the calendar for room {expected}"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
