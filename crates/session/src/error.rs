// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for session access and role guards.

use crate::types::Role;
use thiserror::Error;

/// Session access errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Role string is not recognized.
    #[error("Invalid role: '{role}'")]
    InvalidRole {
        /// The unrecognized role value.
        role: String,
    },

    /// No session is active.
    #[error("No session is active")]
    NotAuthenticated,

    /// The active session does not have the required role.
    #[error("This action requires the {required} role (current role: {actual})")]
    RoleMismatch {
        /// The role required for the action.
        required: Role,
        /// The role of the active session.
        actual: Role,
    },
}
