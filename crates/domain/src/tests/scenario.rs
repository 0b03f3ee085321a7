// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Booking, BookingStatus, DateKey, SelectionPhase, SelectionState, on_date_clicked,
    range_conflicts,
};

fn key(s: &str) -> DateKey {
    s.parse().unwrap()
}

#[test]
fn test_pick_shrink_deselect_scenario() {
    // Start empty, pick a check-in
    let state: SelectionState = SelectionState::empty();
    let state = on_date_clicked(key("2025-03-10"), &state);
    assert_eq!(state.phase(), SelectionPhase::PartialSelection);
    assert_eq!(state.check_in(), Some(key("2025-03-10")));

    // Complete the range
    let state = on_date_clicked(key("2025-03-15"), &state);
    assert_eq!(state.phase(), SelectionPhase::FullSelection);
    assert_eq!(state.check_out(), Some(key("2025-03-15")));

    // A click inside the range shrinks to the new check-out
    let state = on_date_clicked(key("2025-03-12"), &state);
    assert_eq!(state.phase(), SelectionPhase::FullSelection);
    assert_eq!(state.check_in(), Some(key("2025-03-10")));
    assert_eq!(state.check_out(), Some(key("2025-03-12")));

    // Clicking the check-in clears everything
    let state = on_date_clicked(key("2025-03-10"), &state);
    assert_eq!(state, SelectionState::empty());
}

#[test]
fn test_selection_invariant_holds_across_arbitrary_click_sequences() {
    let clicks: Vec<DateKey> = vec![
        key("2025-03-20"),
        key("2025-03-05"),
        key("2025-03-25"),
        key("2025-03-25"),
        key("2025-03-05"),
        key("2025-03-14"),
        key("2025-03-14"),
    ];

    let mut state: SelectionState = SelectionState::empty();
    for clicked in clicks {
        state = on_date_clicked(clicked, &state);

        if let (Some(check_in), Some(check_out)) = (state.check_in(), state.check_out()) {
            assert!(check_in < check_out, "invariant violated after {clicked}");
        }
        if state.check_in().is_none() {
            assert!(state.check_out().is_none());
        }
    }
}

#[test]
fn test_completed_selection_gates_on_conflicts() {
    let bookings: Vec<Booking> = vec![
        Booking::new(
            1,
            10,
            key("2025-03-12"),
            key("2025-03-14"),
            BookingStatus::Pending,
            None,
        )
        .unwrap(),
    ];

    // The user selects around the pending booking
    let state = on_date_clicked(key("2025-03-10"), &SelectionState::empty());
    let state = on_date_clicked(key("2025-03-16"), &state);
    let range = state.stay_range().unwrap();

    // Submission must be blocked: the selected range swallows the booking
    assert!(range_conflicts(
        range.check_in(),
        range.check_out(),
        &bookings
    ));
}

#[test]
fn test_selection_state_serialization_round_trip() {
    let state: SelectionState =
        SelectionState::with_range(key("2025-03-10"), key("2025-03-15")).unwrap();

    let json: String = serde_json::to_string(&state).unwrap();
    let back: SelectionState = serde_json::from_str(&json).unwrap();

    assert_eq!(back, state);
    assert_eq!(back.phase(), SelectionPhase::FullSelection);
}

#[test]
fn test_booking_serialization_uses_snake_case_status() {
    let booking: Booking = Booking::new(
        42,
        10,
        key("2025-03-10"),
        key("2025-03-15"),
        BookingStatus::Refunded,
        Some(String::from("Alice")),
    )
    .unwrap();

    let json: String = serde_json::to_string(&booking).unwrap();
    assert!(json.contains("\"refunded\""));
    assert!(json.contains("\"2025-03-10\""));

    let back: Booking = serde_json::from_str(&json).unwrap();
    assert_eq!(back, booking);
}
