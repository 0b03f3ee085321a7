// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Check-in/check-out selection from calendar clicks.
//!
//! Selection is a small state machine over which of the two boundary days
//! are set. The transition function is pure and total; rejecting clicks
//! on past or already-booked days is the caller's job, done before the
//! transition is invoked.
//!
//! Transition rules for a click on day `c`:
//!
//! | Current | Condition | Next |
//! |---|---|---|
//! | Empty | - | Partial(check_in = c) |
//! | Partial | c > check_in | Full(check_out = c) |
//! | Partial | c < check_in | Partial(check_in = c) |
//! | Partial | c == check_in | Empty |
//! | Full | c == check_in | Empty |
//! | Full | c == check_out | Partial(check_in kept) |
//! | Full | c < check_in | Partial(check_in = c) |
//! | Full | c > check_out | Full(check_out = c) |
//! | Full | check_in < c < check_out | Full(check_out = c) |

use crate::date_key::DateKey;
use crate::error::DomainError;
use crate::stay_range::StayRange;
use serde::{Deserialize, Serialize};

/// Which boundary days of a selection are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPhase {
    /// Neither boundary is set.
    Empty,
    /// Only the check-in day is set.
    PartialSelection,
    /// Both boundaries are set.
    FullSelection,
}

impl SelectionPhase {
    /// Converts this phase to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::PartialSelection => "partial_selection",
            Self::FullSelection => "full_selection",
        }
    }
}

impl std::fmt::Display for SelectionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The current check-in/check-out selection.
///
/// ## Invariants
///
/// - Whenever both boundaries are set, `check_in < check_out`
/// - `check_out` is never set without `check_in`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    /// The selected check-in day, if any.
    check_in: Option<DateKey>,
    /// The selected check-out day, if any.
    check_out: Option<DateKey>,
}

impl SelectionState {
    /// Creates an empty selection.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            check_in: None,
            check_out: None,
        }
    }

    /// Creates a partial selection with only the check-in day set.
    #[must_use]
    pub const fn with_check_in(check_in: DateKey) -> Self {
        Self {
            check_in: Some(check_in),
            check_out: None,
        }
    }

    /// Creates a full selection.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStayRange` if `check_in` is not
    /// strictly before `check_out`.
    pub fn with_range(check_in: DateKey, check_out: DateKey) -> Result<Self, DomainError> {
        if check_in >= check_out {
            return Err(DomainError::InvalidStayRange {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in: Some(check_in),
            check_out: Some(check_out),
        })
    }

    /// Returns the selected check-in day, if any.
    #[must_use]
    pub const fn check_in(self) -> Option<DateKey> {
        self.check_in
    }

    /// Returns the selected check-out day, if any.
    #[must_use]
    pub const fn check_out(self) -> Option<DateKey> {
        self.check_out
    }

    /// Returns which boundaries are currently set.
    #[must_use]
    pub const fn phase(self) -> SelectionPhase {
        match (self.check_in, self.check_out) {
            (None, _) => SelectionPhase::Empty,
            (Some(_), None) => SelectionPhase::PartialSelection,
            (Some(_), Some(_)) => SelectionPhase::FullSelection,
        }
    }

    /// Returns the selected range when the selection is full.
    #[must_use]
    pub fn stay_range(self) -> Option<StayRange> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => StayRange::new(check_in, check_out).ok(),
            _ => None,
        }
    }
}

/// Applies one calendar click to the selection.
///
/// Pure and total: the caller must already have rejected clicks on past
/// or booked days. Repeated and out-of-order clicks re-anchor the
/// selection per the table in the module documentation.
///
/// # Arguments
///
/// * `clicked` - The day that was clicked
/// * `state` - The selection before the click
///
/// # Returns
///
/// The selection after the click.
#[must_use]
pub fn on_date_clicked(clicked: DateKey, state: &SelectionState) -> SelectionState {
    match (state.check_in, state.check_out) {
        (None, _) => SelectionState::with_check_in(clicked),
        (Some(check_in), None) => {
            if clicked > check_in {
                SelectionState {
                    check_in: Some(check_in),
                    check_out: Some(clicked),
                }
            } else if clicked < check_in {
                SelectionState::with_check_in(clicked)
            } else {
                SelectionState::empty()
            }
        }
        (Some(check_in), Some(check_out)) => {
            if clicked == check_in {
                SelectionState::empty()
            } else if clicked == check_out {
                SelectionState::with_check_in(check_in)
            } else if clicked < check_in {
                SelectionState::with_check_in(clicked)
            } else {
                // Past the check-out it extends; inside the range it
                // shrinks. Both just move the check-out.
                SelectionState {
                    check_in: Some(check_in),
                    check_out: Some(clicked),
                }
            }
        }
    }
}
