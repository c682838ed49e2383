// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Ticket;
use bqm_domain::{Edit, Field, QualificationOutcome, Step};

/// A command represents user intent or a network completion as data only.
///
/// Commands are the only way to request session changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace one form field with a new value.
    UpdateField(Edit),
    /// Press an increment/decrement control on a field.
    StepField {
        /// The field being stepped.
        field: Field,
        /// The direction of the press.
        step: Step,
    },
    /// Send the current form to the qualification service.
    Submit,
    /// Deliver the outcome of a dispatched submission.
    RequestComplete {
        /// The ticket issued when the submission was dispatched.
        ticket: Ticket,
        /// What the service returned.
        outcome: QualificationOutcome,
    },
    /// Return to the input screen, abandoning any wait or result.
    Reset,
}

impl Command {
    /// Returns a short name for logging and error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UpdateField(_) => "UpdateField",
            Self::StepField { .. } => "StepField",
            Self::Submit => "Submit",
            Self::RequestComplete { .. } => "RequestComplete",
            Self::Reset => "Reset",
        }
    }
}
