// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{CalendarView, ConfirmedStay, TransitionResult, ViewEvent};
use room_cal_domain::{DateKey, booking_for_date, on_date_clicked, range_conflicts};

/// Applies a command to the view, producing a new view and an event.
///
/// The input view is never mutated; a rejected click returns the view
/// unchanged together with a rejection event carrying the user-facing
/// message.
///
/// # Arguments
///
/// * `view` - The current view (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new view and the event
/// * `Err(CoreError)` if the command is invalid for this view
///
/// # Errors
///
/// Returns an error if a replacement booking list contains a booking for
/// a different room.
pub fn apply(view: &CalendarView, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::ClickDate { date } => Ok(apply_click(view, date)),
        Command::NextMonth => {
            let mut new_view: CalendarView = view.clone();
            new_view.cursor = view.cursor.next_month();

            let event = ViewEvent::MonthChanged {
                year: new_view.cursor.year(),
                month: new_view.cursor.month(),
            };
            Ok(TransitionResult { new_view, event })
        }
        Command::PrevMonth => {
            let mut new_view: CalendarView = view.clone();
            new_view.cursor = view.cursor.prev_month();

            let event = ViewEvent::MonthChanged {
                year: new_view.cursor.year(),
                month: new_view.cursor.month(),
            };
            Ok(TransitionResult { new_view, event })
        }
        Command::ClearSelection => {
            let mut new_view: CalendarView = view.clone();
            new_view.selection = room_cal_domain::SelectionState::empty();

            Ok(TransitionResult {
                new_view,
                event: ViewEvent::SelectionCleared,
            })
        }
        Command::ReplaceBookings { bookings } => {
            crate::validate_room_scope(view.room_id, &bookings)?;

            let count: usize = bookings.len();
            let mut new_view: CalendarView = view.clone();
            new_view.bookings = bookings;

            Ok(TransitionResult {
                new_view,
                event: ViewEvent::BookingsReplaced { count },
            })
        }
    }
}

/// Applies a day click, guarding past and occupied days.
///
/// The guards run before the pure selection transition so the transition
/// itself stays total: a rejected click leaves the selection untouched.
fn apply_click(view: &CalendarView, date: DateKey) -> TransitionResult {
    if date < view.today {
        return TransitionResult {
            new_view: view.clone(),
            event: ViewEvent::ClickRejectedPastDate { date },
        };
    }

    if let Some(booking) = booking_for_date(date, &view.bookings) {
        return TransitionResult {
            new_view: view.clone(),
            event: ViewEvent::ClickRejectedBooked {
                date,
                booking_id: booking.booking_id(),
            },
        };
    }

    let mut new_view: CalendarView = view.clone();
    new_view.selection = on_date_clicked(date, &view.selection);

    TransitionResult {
        event: ViewEvent::SelectionChanged {
            phase: new_view.selection.phase(),
        },
        new_view,
    }
}

/// Validates the selection and gates submission.
///
/// # Arguments
///
/// * `view` - The current view
///
/// # Returns
///
/// * `Ok(ConfirmedStay)` when both boundary days are picked and the
///   range is free
/// * `Err(CoreError)` otherwise
///
/// # Errors
///
/// Returns an error if:
/// - The selection is not full (`IncompleteSelection`)
/// - The selected range overlaps an active booking (`RangeUnavailable`)
pub fn confirm_stay(view: &CalendarView) -> Result<ConfirmedStay, CoreError> {
    let Some(range) = view.selection.stay_range() else {
        return Err(CoreError::IncompleteSelection {
            phase: view.selection.phase(),
        });
    };

    if range_conflicts(range.check_in(), range.check_out(), &view.bookings) {
        return Err(CoreError::RangeUnavailable {
            check_in: range.check_in(),
            check_out: range.check_out(),
        });
    }

    Ok(ConfirmedStay {
        room_id: view.room_id,
        check_in: range.check_in(),
        check_out: range.check_out(),
        nights: range.nights(),
    })
}
