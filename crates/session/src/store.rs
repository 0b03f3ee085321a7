// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The process-wide session store.
//!
//! One store replaces scattered per-component reads of persisted session
//! state. Components read through the accessors and subscribe for change
//! notifications instead of polling; the authentication layer calls
//! `login`/`logout` at the lifecycle boundaries.
//!
//! # Architecture
//!
//! - Events are broadcast to all subscribers
//! - Events are informational only; the store itself is authoritative
//!   and can always be read directly
//! - Publishing never blocks; events are dropped when nobody subscribes

use crate::error::SessionError;
use crate::types::{Role, SessionData};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::broadcast;
use tracing::debug;

/// Maximum number of events to buffer in the broadcast channel.
/// If subscribers cannot keep up, older events will be dropped.
const EVENT_BUFFER_SIZE: usize = 16;

/// Session lifecycle events.
///
/// These events announce changes to the active session and are purely
/// informational; subscribers read the store for authoritative state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A session was established.
    LoggedIn {
        /// The logged-in user's name.
        username: String,
        /// The role the user acts under.
        role: Role,
    },
    /// The active session was torn down.
    LoggedOut {
        /// The name of the user who was logged in.
        username: String,
    },
}

/// Shared handle to the process-wide session state.
///
/// Handles are cheap to clone; all clones read and write the same state
/// and publish on the same channel.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// The active session, if any.
    state: Arc<RwLock<Option<SessionData>>>,
    /// The broadcast channel sender.
    tx: broadcast::Sender<SessionEvent>,
}

impl SessionStore {
    /// Creates a new store with no active session.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self {
            state: Arc::new(RwLock::new(None)),
            tx,
        }
    }

    /// Establishes a session, replacing any existing one.
    ///
    /// Publishes `SessionEvent::LoggedIn` after the state is updated.
    pub fn login(&self, data: SessionData) {
        let event = SessionEvent::LoggedIn {
            username: data.username.clone(),
            role: data.role,
        };

        {
            let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
            *guard = Some(data);
        }

        self.publish(&event);
    }

    /// Tears down the active session.
    ///
    /// Idempotent: publishes `SessionEvent::LoggedOut` only when a
    /// session actually existed.
    pub fn logout(&self) {
        let previous: Option<SessionData> = {
            let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
            guard.take()
        };

        if let Some(data) = previous {
            self.publish(&SessionEvent::LoggedOut {
                username: data.username,
            });
        }
    }

    /// Returns a copy of the active session, if any.
    #[must_use]
    pub fn current(&self) -> Option<SessionData> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the active session's bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.current().map(|data| data.token)
    }

    /// Returns the active session's role, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.current().map(|data| data.role)
    }

    /// Returns true if a session is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Returns the active session if it holds the required role.
    ///
    /// This is the guard route handlers run before showing a dashboard.
    ///
    /// # Arguments
    ///
    /// * `required` - The role the action requires
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No session is active
    /// - The active session has a different role
    pub fn require_role(&self, required: Role) -> Result<SessionData, SessionError> {
        let data: SessionData = self.current().ok_or(SessionError::NotAuthenticated)?;

        if data.role == required {
            Ok(data)
        } else {
            Err(SessionError::RoleMismatch {
                required,
                actual: data.role,
            })
        }
    }

    /// Subscribes to session lifecycle events.
    ///
    /// Returns a receiver that will receive all future events. Events
    /// published before subscription are not received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    /// Publishes an event to all subscribers.
    ///
    /// Non-blocking; if nobody subscribes, the event is silently dropped.
    fn publish(&self, event: &SessionEvent) {
        match self.tx.send(event.clone()) {
            Ok(count) => {
                debug!(?event, receivers = count, "Published session event");
            }
            Err(_) => {
                // No receivers, which is fine
                debug!(?event, "No subscribers for session event");
            }
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
