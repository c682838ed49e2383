// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Effect, Session, SessionState, Submission, Ticket, TransitionResult};
use bqm_domain::{Edit, FormInput};

/// Applies a command to a session, producing the next session and any follow-up work.
///
/// The permitted transitions are:
///
/// - `Input --Submit--> Loading` (emits [`Effect::Dispatch`])
/// - `Loading --RequestComplete--> Result` (matching ticket only)
/// - `Result --Reset--> Input`
/// - `Loading --Reset--> Input` (the awaited ticket is forgotten)
///
/// Field edits are accepted only on the input screen and never change state.
///
/// # Arguments
///
/// * `session` - The current session (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new session and effect
/// * `Err(CoreError)` if the command is not valid now
///
/// # Errors
///
/// Returns an error if:
/// - The command is not valid in the current state
/// - A field edit is out of range, or a step is at a non-wrapping bound
/// - A completion carries a ticket that is not being awaited
pub fn apply(session: &Session, command: Command) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();
    let invalid = || CoreError::InvalidTransition {
        from: session.state,
        command: name,
    };

    match command {
        Command::UpdateField(edit) => {
            if session.state != SessionState::Input {
                return Err(invalid());
            }
            Ok(unchanged_state(session, session.form.with_edit(edit)?))
        }
        Command::StepField { field, step } => {
            if session.state != SessionState::Input {
                return Err(invalid());
            }
            let edit: Edit = session
                .form
                .step(field, step)
                .ok_or(CoreError::AtBound(field))?;
            Ok(unchanged_state(session, session.form.with_edit(edit)?))
        }
        Command::Submit => {
            if session.state != SessionState::Input {
                return Err(invalid());
            }

            let ticket: Ticket = Ticket::new(session.next_ticket);
            let mut new_session: Session = session.clone();
            new_session.state = SessionState::Loading;
            new_session.outcome = None;
            new_session.in_flight = Some(ticket);
            new_session.next_ticket = session.next_ticket.wrapping_add(1);

            Ok(TransitionResult {
                new_session,
                effect: Effect::Dispatch(Submission {
                    ticket,
                    form: session.form,
                }),
            })
        }
        Command::RequestComplete { ticket, outcome } => {
            if session.state != SessionState::Loading || session.in_flight != Some(ticket) {
                return Err(CoreError::StaleCompletion {
                    awaited: session.in_flight,
                    received: ticket,
                });
            }

            let mut new_session: Session = session.clone();
            new_session.state = SessionState::Result;
            new_session.outcome = Some(outcome);
            new_session.in_flight = None;

            Ok(TransitionResult {
                new_session,
                effect: Effect::None,
            })
        }
        Command::Reset => {
            if session.state == SessionState::Input {
                return Err(invalid());
            }

            let mut new_session: Session = session.clone();
            new_session.state = SessionState::Input;
            new_session.outcome = None;
            new_session.in_flight = None;

            Ok(TransitionResult {
                new_session,
                effect: Effect::None,
            })
        }
    }
}

fn unchanged_state(session: &Session, form: FormInput) -> TransitionResult {
    let mut new_session: Session = session.clone();
    new_session.form = form;
    TransitionResult {
        new_session,
        effect: Effect::None,
    }
}
