// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CalendarView, Command, ConfirmedStay, CoreError, apply, confirm_stay};
use room_cal_domain::{Booking, BookingStatus, DateKey, MonthCursor, SelectionPhase};

fn key(s: &str) -> DateKey {
    s.parse().unwrap()
}

fn make_view(bookings: Vec<Booking>) -> CalendarView {
    CalendarView::new(
        10,
        bookings,
        MonthCursor::new(2025, 3).unwrap(),
        key("2025-03-01"),
    )
    .unwrap()
}

fn click(view: &CalendarView, date: &str) -> CalendarView {
    apply(
        view,
        Command::ClickDate {
            date: key(date),
        },
    )
    .unwrap()
    .new_view
}

#[test]
fn test_confirm_rejects_empty_selection() {
    let view: CalendarView = make_view(vec![]);

    let result = confirm_stay(&view);
    assert!(matches!(
        result,
        Err(CoreError::IncompleteSelection {
            phase: SelectionPhase::Empty
        })
    ));
}

#[test]
fn test_confirm_rejects_partial_selection() {
    let view: CalendarView = make_view(vec![]);
    let view = click(&view, "2025-03-10");

    let result = confirm_stay(&view);
    assert!(matches!(
        result,
        Err(CoreError::IncompleteSelection {
            phase: SelectionPhase::PartialSelection
        })
    ));
}

#[test]
fn test_confirm_accepts_free_range() {
    let view: CalendarView = make_view(vec![]);
    let view = click(&view, "2025-03-10");
    let view = click(&view, "2025-03-15");

    let stay: ConfirmedStay = confirm_stay(&view).unwrap();

    assert_eq!(stay.room_id, 10);
    assert_eq!(stay.check_in, key("2025-03-10"));
    assert_eq!(stay.check_out, key("2025-03-15"));
    assert_eq!(stay.nights, 5);
}

#[test]
fn test_confirm_blocks_range_swallowing_a_booking() {
    // The click guards only reject clicks ON booked days; a selection
    // that brackets a booking passes them and must be caught here.
    let booking: Booking = Booking::new(
        1,
        10,
        key("2025-03-12"),
        key("2025-03-14"),
        BookingStatus::Paid,
        None,
    )
    .unwrap();
    let view: CalendarView = make_view(vec![booking]);

    let view = click(&view, "2025-03-10");
    let view = click(&view, "2025-03-16");

    let result = confirm_stay(&view);
    assert!(matches!(result, Err(CoreError::RangeUnavailable { .. })));
}

#[test]
fn test_confirm_allows_back_to_back_with_existing_booking() {
    let booking: Booking = Booking::new(
        1,
        10,
        key("2025-03-10"),
        key("2025-03-15"),
        BookingStatus::Paid,
        None,
    )
    .unwrap();
    let view: CalendarView = make_view(vec![booking]);

    // Check in on the existing guest's departure day
    let view = click(&view, "2025-03-15");
    let view = click(&view, "2025-03-18");

    let stay: ConfirmedStay = confirm_stay(&view).unwrap();
    assert_eq!(stay.nights, 3);
}

#[test]
fn test_confirm_ignores_cancelled_bookings() {
    let booking: Booking = Booking::new(
        1,
        10,
        key("2025-03-10"),
        key("2025-03-15"),
        BookingStatus::Cancelled,
        None,
    )
    .unwrap();
    let view: CalendarView = make_view(vec![booking]);

    let view = click(&view, "2025-03-10");
    let view = click(&view, "2025-03-15");

    assert!(confirm_stay(&view).is_ok());
}

#[test]
fn test_confirm_catches_booking_added_after_selection() {
    // The user completed a selection, then a re-fetch brought in a
    // conflicting booking made by someone else in the meantime.
    let view: CalendarView = make_view(vec![]);
    let view = click(&view, "2025-03-10");
    let view = click(&view, "2025-03-15");

    let conflicting: Booking = Booking::new(
        9,
        10,
        key("2025-03-12"),
        key("2025-03-13"),
        BookingStatus::Pending,
        None,
    )
    .unwrap();
    let view = apply(
        &view,
        Command::ReplaceBookings {
            bookings: vec![conflicting],
        },
    )
    .unwrap()
    .new_view;

    let result = confirm_stay(&view);
    assert!(matches!(result, Err(CoreError::RangeUnavailable { .. })));
}
