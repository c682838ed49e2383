// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bqm_domain::{FormInput, QualificationOutcome};

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// Editing the form.
    #[default]
    Input,
    /// Waiting for the qualification service.
    Loading,
    /// Showing a verdict or an error.
    Result,
}

impl SessionState {
    /// Converts this state to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Loading => "Loading",
            Self::Result => "Result",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifies one dispatched submission.
///
/// A completion is applied only if its ticket matches the one the session
/// is awaiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The complete state of one input → loading → result session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The current screen.
    pub state: SessionState,
    /// The live form.
    pub form: FormInput,
    /// The outcome shown on the result screen. Set only in `Result`.
    pub outcome: Option<QualificationOutcome>,
    /// The submission being awaited. Set only in `Loading`.
    pub in_flight: Option<Ticket>,
    /// Id the next submission will receive.
    pub(crate) next_ticket: u64,
}

impl Session {
    /// Creates a session on the input screen with the given form.
    #[must_use]
    pub const fn new(form: FormInput) -> Self {
        Self {
            state: SessionState::Input,
            form,
            outcome: None,
            in_flight: None,
            next_ticket: 1,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(FormInput::default())
    }
}

/// A form snapshot to hand to the qualification client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    /// The ticket the completion must carry.
    pub ticket: Ticket,
    /// The form as it was when submitted.
    pub form: FormInput,
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do beyond re-rendering.
    None,
    /// Send this submission to the qualification service.
    Dispatch(Submission),
}

/// The result of a successful session transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The session after the transition.
    pub new_session: Session,
    /// Follow-up work for the caller.
    pub effect: Effect,
}
