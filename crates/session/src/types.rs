// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The role an authenticated user acts under.
///
/// Each role corresponds to one surface of the application: the customer
/// site, the owner dashboard, or the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A guest searching and booking rooms.
    Customer,
    /// A hotel owner managing hotels, rooms, and withdrawals.
    Owner,
    /// An administrator approving hotels and managing users.
    Admin,
}

impl Role {
    /// Returns the string representation of the role.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Owner => "owner",
            Self::Admin => "admin",
        }
    }

    /// Parses a role from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidRole` if the string is not a valid
    /// role.
    fn parse_str(s: &str) -> Result<Self, SessionError> {
        match s {
            "customer" => Ok(Self::Customer),
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            _ => Err(SessionError::InvalidRole {
                role: s.to_string(),
            }),
        }
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The authenticated session's data.
///
/// This is the shape the authentication layer hands over after login and
/// persists wherever it persists sessions; this crate only holds it in
/// memory and announces changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// The bearer token for authenticated requests.
    pub token: String,
    /// The logged-in user's name.
    pub username: String,
    /// The role the user acts under.
    pub role: Role,
}
