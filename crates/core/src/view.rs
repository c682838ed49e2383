// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Presentation-neutral description of what each screen shows.
//!
//! Render adapters consume a [`ScreenView`]; they never look at the session
//! directly.

use crate::state::{Session, SessionState};
use bqm_domain::{Classification, FormInput, QualificationOutcome};

/// Race named in verdict texts when none is configured.
pub const DEFAULT_RACE: &str = "Boston 2026 Marathon";

/// Text shown while waiting for the service.
pub const LOADING_TEXT: &str = "Calculating...";

/// How a result screen should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Qualified,
    NotQualified,
    /// Any failure or unrecognized classification.
    Error,
}

/// Everything a renderer needs for the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Input {
        form: FormInput,
    },
    Loading {
        text: &'static str,
    },
    Result {
        verdict: Verdict,
        text: String,
    },
}

impl ScreenView {
    /// Builds the view for `session`, naming `race` in verdict texts.
    #[must_use]
    pub fn of(session: &Session, race: &str) -> Self {
        match (session.state, &session.outcome) {
            (SessionState::Input, _) => Self::Input { form: session.form },
            (SessionState::Loading, _) => Self::Loading { text: LOADING_TEXT },
            (SessionState::Result, Some(outcome)) => {
                let (verdict, text) = describe(outcome, race);
                Self::Result { verdict, text }
            }
            // Result is always entered with an outcome.
            (SessionState::Result, None) => Self::Loading { text: LOADING_TEXT },
        }
    }
}

fn describe(outcome: &QualificationOutcome, race: &str) -> (Verdict, String) {
    match outcome {
        QualificationOutcome::Classified(Classification::Qualified) => (
            Verdict::Qualified,
            format!("✅\nYou Are Qualified for {race}"),
        ),
        QualificationOutcome::Classified(Classification::NotQualified) => (
            Verdict::NotQualified,
            format!("❌\nYou Are Not Qualified for {race}"),
        ),
        QualificationOutcome::Classified(Classification::Unrecognized(message)) => (
            Verdict::Error,
            format!("❗ Error: Unexpected result \"{message}\""),
        ),
        QualificationOutcome::Failed(failure) => (Verdict::Error, failure.to_string()),
    }
}
