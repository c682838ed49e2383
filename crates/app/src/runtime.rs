// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event loop that drives one session.
//!
//! All controller mutations happen on the loop. Network exchanges run on
//! spawned tasks and report back over an unbounded channel, so a completion
//! can never race a user-triggered reset.

use crate::input::{UserAction, parse_line};
use crate::render::Renderer;
use bqm::{FlowController, SessionState, Submission, Ticket};
use bqm_client::Qualifier;
use bqm_domain::QualificationOutcome;
use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Minimum time the loading screen is shown before the request goes out.
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(1000);

/// Settings for the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Wait between entering the loading screen and sending the request.
    pub loading_delay: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            loading_delay: DEFAULT_LOADING_DELAY,
        }
    }
}

/// A finished exchange, tagged with the ticket it was dispatched under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The ticket issued by the controller at submit time.
    pub ticket: Ticket,
    /// What the qualifier returned.
    pub outcome: QualificationOutcome,
}

/// Whether the loop should keep going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Owns the controller and the background exchange for one session.
pub struct SessionRuntime<Q: Qualifier> {
    controller: FlowController,
    qualifier: Q,
    config: RuntimeConfig,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    pending: Option<JoinHandle<()>>,
}

impl<Q: Qualifier> SessionRuntime<Q> {
    #[must_use]
    pub fn new(controller: FlowController, qualifier: Q, config: RuntimeConfig) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            controller,
            qualifier,
            config,
            completions_tx,
            completions_rx,
            pending: None,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub const fn controller(&self) -> &FlowController {
        &self.controller
    }

    /// Applies one user action to the session.
    pub fn handle(&mut self, action: UserAction) -> Control {
        match action {
            UserAction::Step { field, step } => {
                self.controller.step_field(field, step);
            }
            UserAction::Set(edit) => {
                self.controller.update_field(edit);
            }
            UserAction::Submit => {
                if let Some(submission) = self.controller.submit() {
                    self.dispatch(submission);
                }
            }
            UserAction::Reset => {
                if self.controller.reset() {
                    self.cancel_pending();
                }
            }
            UserAction::Redraw => {}
            UserAction::Quit => {
                self.cancel_pending();
                return Control::Quit;
            }
        }
        Control::Continue
    }

    /// Applies a completion. Returns `false` if it was stale.
    pub fn on_completion(&mut self, completion: Completion) -> bool {
        let applied: bool = self
            .controller
            .on_request_complete(completion.ticket, completion.outcome);
        if applied {
            self.pending = None;
        } else {
            debug!(ticket = %completion.ticket, "Discarded stale completion");
        }
        applied
    }

    /// Waits for the next completion from any dispatched exchange.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.completions_rx.recv().await
    }

    /// Runs the loop until `quit` or end of input.
    ///
    /// At end of input an in-flight exchange is still awaited so that piped
    /// sessions show their result.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub async fn run<R, W>(
        mut self,
        input: R,
        out: &mut W,
        renderer: &dyn Renderer,
    ) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        renderer.render(&self.controller.view(), out)?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };
                    let action: UserAction = match parse_line(&line) {
                        Ok(action) => action,
                        Err(err) => {
                            writeln!(out, "{err}")?;
                            continue;
                        }
                    };
                    if self.handle(action) == Control::Quit {
                        return Ok(());
                    }
                }
                Some(completion) = self.next_completion() => {
                    if !self.on_completion(completion) {
                        continue;
                    }
                }
            }
            renderer.render(&self.controller.view(), out)?;
        }

        if self.controller.state() == SessionState::Loading {
            info!("Input closed; waiting for in-flight result");
            while let Some(completion) = self.next_completion().await {
                if self.on_completion(completion) {
                    renderer.render(&self.controller.view(), out)?;
                    break;
                }
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, submission: Submission) {
        let qualifier: Q = self.qualifier.clone();
        let tx: mpsc::UnboundedSender<Completion> = self.completions_tx.clone();
        let delay: Duration = self.config.loading_delay;

        self.cancel_pending();
        self.pending = Some(tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let outcome: QualificationOutcome = qualifier.qualify(submission.form).await;
            if tx
                .send(Completion {
                    ticket: submission.ticket,
                    outcome,
                })
                .is_err()
            {
                warn!(ticket = %submission.ticket, "Session closed before result arrived");
            }
        }));
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::render::Rectangular;
    use bqm_domain::{Classification, Field, FormInput, QualificationFailure, Step};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed outcome after an optional hold, counting calls.
    #[derive(Clone)]
    struct FixedQualifier {
        outcome: QualificationOutcome,
        hold: Duration,
        calls: Arc<AtomicUsize>,
        forms: Arc<std::sync::Mutex<Vec<FormInput>>>,
    }

    impl FixedQualifier {
        fn new(outcome: QualificationOutcome) -> Self {
            Self {
                outcome,
                hold: Duration::ZERO,
                calls: Arc::new(AtomicUsize::new(0)),
                forms: Arc::new(std::sync::Mutex::new(Vec::new())),
            }
        }

        fn holding(mut self, hold: Duration) -> Self {
            self.hold = hold;
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Qualifier for FixedQualifier {
        async fn qualify(&self, form: FormInput) -> QualificationOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.forms.lock().unwrap().push(form);
            if !self.hold.is_zero() {
                tokio::time::sleep(self.hold).await;
            }
            self.outcome.clone()
        }
    }

    fn qualified() -> QualificationOutcome {
        QualificationOutcome::Classified(Classification::Qualified)
    }

    fn runtime(qualifier: FixedQualifier, delay: Duration) -> SessionRuntime<FixedQualifier> {
        SessionRuntime::new(
            FlowController::default(),
            qualifier,
            RuntimeConfig {
                loading_delay: delay,
            },
        )
    }

    async fn run_script(qualifier: FixedQualifier, script: &str) -> String {
        let mut out: Vec<u8> = Vec::new();
        runtime(qualifier, Duration::ZERO)
            .run(script.as_bytes(), &mut out, &Rectangular)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_submit_delivers_completion_and_shows_result() {
        let qualifier: FixedQualifier = FixedQualifier::new(qualified());
        let mut runtime = runtime(qualifier.clone(), Duration::ZERO);

        runtime.handle(UserAction::Submit);
        assert_eq!(runtime.controller().state(), SessionState::Loading);

        let completion: Completion = runtime.next_completion().await.unwrap();
        assert!(runtime.on_completion(completion));
        assert_eq!(runtime.controller().state(), SessionState::Result);
        assert_eq!(qualifier.calls(), 1);
    }

    #[tokio::test]
    async fn test_submitted_form_reflects_edits() {
        let qualifier: FixedQualifier = FixedQualifier::new(qualified());
        let mut runtime = runtime(qualifier.clone(), Duration::ZERO);

        runtime.handle(UserAction::Step {
            field: Field::Age,
            step: Step::Increment,
        });
        runtime.handle(UserAction::Submit);
        runtime.next_completion().await.unwrap();

        let forms = qualifier.forms.lock().unwrap().clone();
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].age(), 37);
    }

    #[tokio::test]
    async fn test_reset_during_loading_delay_never_sends() {
        let qualifier: FixedQualifier = FixedQualifier::new(qualified());
        let mut runtime = runtime(qualifier.clone(), Duration::from_millis(200));

        runtime.handle(UserAction::Submit);
        runtime.handle(UserAction::Reset);
        tokio::time::sleep(Duration::from_millis(300)).await;

        assert_eq!(qualifier.calls(), 0);
        assert_eq!(runtime.controller().state(), SessionState::Input);
        let waited =
            tokio::time::timeout(Duration::from_millis(50), runtime.next_completion()).await;
        assert!(waited.is_err());
    }

    #[tokio::test]
    async fn test_reset_while_in_flight_drops_result() {
        let qualifier: FixedQualifier =
            FixedQualifier::new(qualified()).holding(Duration::from_millis(100));
        let mut runtime = runtime(qualifier.clone(), Duration::ZERO);

        runtime.handle(UserAction::Submit);
        tokio::time::sleep(Duration::from_millis(20)).await;
        runtime.handle(UserAction::Reset);

        let waited =
            tokio::time::timeout(Duration::from_millis(250), runtime.next_completion()).await;
        assert!(waited.is_err());
        assert_eq!(runtime.controller().state(), SessionState::Input);
    }

    #[tokio::test]
    async fn test_late_completion_after_reset_is_ignored() {
        let qualifier: FixedQualifier = FixedQualifier::new(qualified());
        let mut runtime = runtime(qualifier, Duration::from_secs(60));

        runtime.handle(UserAction::Submit);
        let ticket: Ticket = runtime.controller().session().in_flight.unwrap();
        runtime.handle(UserAction::Reset);
        let before = runtime.controller().session().clone();

        let applied: bool = runtime.on_completion(Completion {
            ticket,
            outcome: qualified(),
        });

        assert!(!applied);
        assert_eq!(runtime.controller().session(), &before);
    }

    #[tokio::test]
    async fn test_piped_submit_waits_for_result() {
        let output: String = run_script(FixedQualifier::new(qualified()), "submit\n").await;

        assert!(output.contains("Calculating..."), "{output}");
        assert!(
            output.contains("You Are Qualified for Boston 2026 Marathon"),
            "{output}"
        );
    }

    #[tokio::test]
    async fn test_server_error_is_rendered_not_raised() {
        let failure: QualificationOutcome =
            QualificationOutcome::Failed(QualificationFailure::HttpStatus {
                code: 500,
                reason: Some(String::from("Internal Server Error")),
            });

        let output: String = run_script(FixedQualifier::new(failure), "submit\n").await;

        assert!(output.contains("[ERROR]"), "{output}");
        assert!(output.contains("Error 500: Internal Server Error"), "{output}");
    }

    #[tokio::test]
    async fn test_quit_stops_without_sending() {
        let qualifier: FixedQualifier = FixedQualifier::new(qualified());

        let output: String = run_script(qualifier.clone(), "quit\nsubmit\n").await;

        assert_eq!(qualifier.calls(), 0);
        assert!(!output.contains("Calculating..."));
    }

    #[tokio::test]
    async fn test_out_of_range_set_prints_hint_and_keeps_form() {
        let output: String = run_script(FixedQualifier::new(qualified()), "set age 90\n").await;

        assert!(
            output.contains("Value 90 for age is out of range. Must be between 18 and 80"),
            "{output}"
        );
        assert!(output.contains("Age       36"), "{output}");
        assert!(!output.contains("Age       90"), "{output}");
    }

    #[tokio::test]
    async fn test_bad_command_prints_hint_and_continues() {
        let output: String =
            run_script(FixedQualifier::new(qualified()), "fly away now\nhours+\n").await;

        assert!(output.contains("Unknown command"), "{output}");
        assert!(output.contains("Hours      3"), "{output}");
    }
}
