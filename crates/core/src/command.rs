// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use room_cal_domain::{Booking, DateKey};

/// A command represents user intent as data only.
///
/// Commands are the only way to request view changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The user clicked a day cell.
    ClickDate {
        /// The clicked day.
        date: DateKey,
    },
    /// The user navigated to the next month.
    NextMonth,
    /// The user navigated to the previous month.
    PrevMonth,
    /// The user discarded the current selection.
    ClearSelection,
    /// The caller re-fetched the room's bookings.
    ReplaceBookings {
        /// The freshly fetched booking list.
        bookings: Vec<Booking>,
    },
}
