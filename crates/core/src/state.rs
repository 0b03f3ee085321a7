// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use room_cal_domain::{
    Booking, CalendarCell, DateKey, MonthCursor, SelectionPhase, SelectionState, month_cells,
};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The complete calendar state scoped to a single room.
///
/// The booking list is already-fetched input; re-fetching belongs to the
/// caller, which swaps a new list in via `Command::ReplaceBookings`.
/// "Today" is injected at construction rather than read from a clock, so
/// every transition over this state is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarView {
    /// The room this calendar is scoped to.
    pub room_id: i64,
    /// The booking history for the room.
    pub bookings: Vec<Booking>,
    /// The month currently displayed.
    pub cursor: MonthCursor,
    /// The current day, as seen by the caller.
    pub today: DateKey,
    /// The current check-in/check-out selection.
    pub selection: SelectionState,
}

impl CalendarView {
    /// Creates a new view with an empty selection.
    ///
    /// # Arguments
    ///
    /// * `room_id` - The room this calendar is scoped to
    /// * `bookings` - The booking history for the room
    /// * `cursor` - The month to display initially
    /// * `today` - The current day
    ///
    /// # Errors
    ///
    /// Returns `CoreError::RoomMismatch` if any booking belongs to a
    /// different room.
    pub fn new(
        room_id: i64,
        bookings: Vec<Booking>,
        cursor: MonthCursor,
        today: DateKey,
    ) -> Result<Self, CoreError> {
        crate::validate_room_scope(room_id, &bookings)?;

        Ok(Self {
            room_id,
            bookings,
            cursor,
            today,
            selection: SelectionState::empty(),
        })
    }

    /// Builds the annotated cell grid for the displayed month.
    #[must_use]
    pub fn month_cells(&self) -> Vec<CalendarCell> {
        month_cells(self.cursor, self.today, &self.bookings)
    }
}

/// Facts about what a transition changed.
///
/// Events are informational: the authoritative state is the new view
/// carried alongside them. Rejection events additionally carry the
/// user-facing message the original form surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewEvent {
    /// A click was applied to the selection.
    SelectionChanged {
        /// The phase the selection ended up in.
        phase: SelectionPhase,
    },
    /// The selection was explicitly cleared.
    SelectionCleared,
    /// A click on a day before today was rejected.
    ClickRejectedPastDate {
        /// The rejected day.
        date: DateKey,
    },
    /// A click on an occupied day was rejected.
    ClickRejectedBooked {
        /// The rejected day.
        date: DateKey,
        /// The booking occupying that day.
        booking_id: i64,
    },
    /// The displayed month changed.
    MonthChanged {
        /// The newly displayed year.
        year: i32,
        /// The newly displayed month (1-based).
        month: u32,
    },
    /// The booking list was swapped for a freshly fetched one.
    BookingsReplaced {
        /// Number of bookings in the new list.
        count: usize,
    },
}

impl ViewEvent {
    /// Returns the user-facing message for rejection events.
    #[must_use]
    pub const fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::ClickRejectedPastDate { .. } => Some("You cannot select a past date."),
            Self::ClickRejectedBooked { .. } => Some("This date is already booked."),
            _ => None,
        }
    }

    /// Returns true if this event records a rejected click.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::ClickRejectedPastDate { .. } | Self::ClickRejectedBooked { .. }
        )
    }
}

/// The result of a successful view transition.
///
/// Transitions are atomic: they either succeed completely or fail
/// without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The view after the transition.
    pub new_view: CalendarView,
    /// What the transition changed.
    pub event: ViewEvent,
}

/// A selection that passed the submission gate.
///
/// This is the payload the checkout form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedStay {
    /// The room being booked.
    pub room_id: i64,
    /// First occupied day.
    pub check_in: DateKey,
    /// First day after the stay (exclusive).
    pub check_out: DateKey,
    /// Number of nights, always at least 1.
    pub nights: i64,
}
