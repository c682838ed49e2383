// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::{SessionState, Ticket};
use bqm_domain::{DomainError, Field};

/// Errors that can occur during session transitions.
///
/// None of these are faults: the controller treats each one as a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A form edit violated a field range.
    DomainViolation(DomainError),
    /// The command is not valid in the current state.
    InvalidTransition {
        /// The state the session was in.
        from: SessionState,
        /// The rejected command.
        command: &'static str,
    },
    /// A completion arrived for a submission that is no longer awaited.
    StaleCompletion {
        /// The ticket currently awaited, if any.
        awaited: Option<Ticket>,
        /// The ticket that arrived.
        received: Ticket,
    },
    /// A step control was pressed at a non-wrapping bound.
    AtBound(Field),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidTransition { from, command } => {
                write!(f, "Command {command} is not valid in state {from}")
            }
            Self::StaleCompletion { awaited, received } => match awaited {
                Some(awaited) => write!(
                    f,
                    "Discarding completion for submission {received}; awaiting {awaited}"
                ),
                None => write!(
                    f,
                    "Discarding completion for submission {received}; nothing in flight"
                ),
            },
            Self::AtBound(field) => write!(f, "Field {field} is already at its limit"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
