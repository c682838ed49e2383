// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Effect, Session, SessionState, Submission, Ticket, TransitionResult};
use crate::view::{DEFAULT_RACE, ScreenView};
use bqm_domain::{Edit, Field, FormInput, QualificationOutcome, Step};
use tracing::{debug, info};

/// Owns the single live session and mediates every change to it.
///
/// Rejected commands are no-ops: the session is left exactly as it was and
/// the method reports `false` (or `None`).
#[derive(Debug, Clone)]
pub struct FlowController {
    session: Session,
    race: String,
}

impl FlowController {
    /// Creates a controller on the input screen with `form` pre-filled.
    #[must_use]
    pub fn new(form: FormInput, race: impl Into<String>) -> Self {
        Self {
            session: Session::new(form),
            race: race.into(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.session.state
    }

    #[must_use]
    pub const fn form(&self) -> &FormInput {
        &self.session.form
    }

    #[must_use]
    pub fn race(&self) -> &str {
        &self.race
    }

    /// Returns what the current screen should show.
    #[must_use]
    pub fn view(&self) -> ScreenView {
        ScreenView::of(&self.session, &self.race)
    }

    /// Replaces one field. Returns whether the edit was applied.
    pub fn update_field(&mut self, edit: Edit) -> bool {
        self.run(Command::UpdateField(edit)).is_some()
    }

    /// Presses a step control. Returns whether the form changed.
    pub fn step_field(&mut self, field: Field, step: Step) -> bool {
        self.run(Command::StepField { field, step }).is_some()
    }

    /// Moves to the loading screen and returns the submission to dispatch.
    ///
    /// Returns `None` unless the session is on the input screen.
    pub fn submit(&mut self) -> Option<Submission> {
        match self.run(Command::Submit)? {
            Effect::Dispatch(submission) => {
                info!(ticket = %submission.ticket, "Submitted form for qualification");
                Some(submission)
            }
            Effect::None => None,
        }
    }

    /// Applies a completion. Returns `false` if it was stale and discarded.
    pub fn on_request_complete(&mut self, ticket: Ticket, outcome: QualificationOutcome) -> bool {
        let is_error: bool = outcome.is_error();
        let applied: bool = self
            .run(Command::RequestComplete { ticket, outcome })
            .is_some();
        if applied {
            info!(%ticket, is_error, "Showing qualification result");
        }
        applied
    }

    /// Returns to the input screen. Returns `false` if already there.
    pub fn reset(&mut self) -> bool {
        let abandoned: Option<Ticket> = self.session.in_flight;
        let applied: bool = self.run(Command::Reset).is_some();
        if let (true, Some(ticket)) = (applied, abandoned) {
            info!(%ticket, "Abandoned in-flight submission");
        }
        applied
    }

    fn run(&mut self, command: Command) -> Option<Effect> {
        let name: &'static str = command.name();
        match apply(&self.session, command) {
            Ok(TransitionResult {
                new_session,
                effect,
            }) => {
                if new_session.state != self.session.state {
                    debug!(
                        from = %self.session.state,
                        to = %new_session.state,
                        command = name,
                        "Session transition"
                    );
                }
                self.session = new_session;
                Some(effect)
            }
            Err(err) => {
                log_ignored(&err);
                None
            }
        }
    }
}

impl Default for FlowController {
    fn default() -> Self {
        Self::new(FormInput::default(), DEFAULT_RACE)
    }
}

fn log_ignored(err: &CoreError) {
    debug!(error = %err, "Ignoring command");
}
