// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking records and their status lifecycle.
//!
//! Bookings are read-only input to this crate: they are fetched and owned
//! elsewhere, and availability logic only inspects them. Only bookings in
//! an active status (paid or pending) occupy their date range.

use crate::date_key::DateKey;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Payment status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Payment completed.
    Paid,
    /// Payment initiated but not yet confirmed.
    Pending,
    /// Booking cancelled by the guest or owner.
    Cancelled,
    /// Payment failed at the gateway.
    Failed,
    /// Payment refunded after cancellation.
    Refunded,
}

impl BookingStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBookingStatus` if the string is not a
    /// valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "paid" => Ok(Self::Paid),
            "pending" => Ok(Self::Pending),
            "cancelled" => Ok(Self::Cancelled),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            _ => Err(DomainError::InvalidBookingStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if a booking in this status occupies its date range.
    ///
    /// Cancelled, failed, and refunded bookings never block availability.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Paid | Self::Pending)
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

/// A booking of one room over a half-open date range.
///
/// The range is `[check_in, check_out)`: the check-out day itself is free
/// for a new arrival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The canonical numeric identifier assigned by the backend.
    booking_id: i64,
    /// The room this booking belongs to.
    room_id: i64,
    /// First occupied day.
    check_in: DateKey,
    /// First day after the stay; never occupied by this booking.
    check_out: DateKey,
    /// Payment status.
    status: BookingStatus,
    /// Display name of the guest, when known.
    guest_name: Option<String>,
}

impl Booking {
    /// Creates a new `Booking`.
    ///
    /// # Arguments
    ///
    /// * `booking_id` - The canonical numeric identifier
    /// * `room_id` - The room this booking belongs to
    /// * `check_in` - First occupied day
    /// * `check_out` - First day after the stay (exclusive)
    /// * `status` - Payment status
    /// * `guest_name` - Display name of the guest, when known
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStayRange` if `check_in` is not
    /// strictly before `check_out`.
    pub fn new(
        booking_id: i64,
        room_id: i64,
        check_in: DateKey,
        check_out: DateKey,
        status: BookingStatus,
        guest_name: Option<String>,
    ) -> Result<Self, DomainError> {
        if check_in >= check_out {
            return Err(DomainError::InvalidStayRange {
                check_in,
                check_out,
            });
        }

        Ok(Self {
            booking_id,
            room_id,
            check_in,
            check_out,
            status,
            guest_name,
        })
    }

    /// Returns the canonical numeric identifier.
    #[must_use]
    pub const fn booking_id(&self) -> i64 {
        self.booking_id
    }

    /// Returns the room identifier.
    #[must_use]
    pub const fn room_id(&self) -> i64 {
        self.room_id
    }

    /// Returns the first occupied day.
    #[must_use]
    pub const fn check_in(&self) -> DateKey {
        self.check_in
    }

    /// Returns the first day after the stay.
    #[must_use]
    pub const fn check_out(&self) -> DateKey {
        self.check_out
    }

    /// Returns the payment status.
    #[must_use]
    pub const fn status(&self) -> BookingStatus {
        self.status
    }

    /// Returns the guest's display name, when known.
    #[must_use]
    pub fn guest_name(&self) -> Option<&str> {
        self.guest_name.as_deref()
    }

    /// Returns true if this booking currently occupies its date range.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns true if this booking occupies the given day.
    ///
    /// Check-in is inclusive and check-out is exclusive: a guest departing
    /// on day X does not block day X for a new arrival. Bookings in a
    /// non-active status never occupy any day.
    #[must_use]
    pub fn occupies(&self, day: DateKey) -> bool {
        self.is_active() && self.check_in <= day && day < self.check_out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_status_string_round_trip() {
        let statuses = vec![
            BookingStatus::Paid,
            BookingStatus::Pending,
            BookingStatus::Cancelled,
            BookingStatus::Failed,
            BookingStatus::Refunded,
        ];

        for status in statuses {
            let s = status.as_str();
            match BookingStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        let result = BookingStatus::parse_str("confirmed");
        assert!(matches!(
            result,
            Err(DomainError::InvalidBookingStatus { .. })
        ));
    }

    #[test]
    fn test_active_statuses() {
        assert!(BookingStatus::Paid.is_active());
        assert!(BookingStatus::Pending.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
        assert!(!BookingStatus::Failed.is_active());
        assert!(!BookingStatus::Refunded.is_active());
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let result = Booking::new(
            1,
            10,
            key("2025-03-15"),
            key("2025-03-10"),
            BookingStatus::Paid,
            None,
        );
        assert!(matches!(result, Err(DomainError::InvalidStayRange { .. })));
    }

    #[test]
    fn test_new_rejects_zero_night_range() {
        let result = Booking::new(
            1,
            10,
            key("2025-03-10"),
            key("2025-03-10"),
            BookingStatus::Paid,
            None,
        );
        assert!(matches!(result, Err(DomainError::InvalidStayRange { .. })));
    }

    #[test]
    fn test_occupies_is_check_out_exclusive() {
        let booking = Booking::new(
            1,
            10,
            key("2025-03-10"),
            key("2025-03-13"),
            BookingStatus::Paid,
            Some(String::from("Alice")),
        )
        .unwrap();

        assert!(booking.occupies(key("2025-03-10")));
        assert!(booking.occupies(key("2025-03-12")));
        assert!(!booking.occupies(key("2025-03-13")));
        assert!(!booking.occupies(key("2025-03-09")));
    }

    #[test]
    fn test_inactive_booking_occupies_nothing() {
        let booking = Booking::new(
            1,
            10,
            key("2025-03-10"),
            key("2025-03-13"),
            BookingStatus::Cancelled,
            None,
        )
        .unwrap();

        assert!(!booking.occupies(key("2025-03-10")));
        assert!(!booking.occupies(key("2025-03-12")));
    }
}
