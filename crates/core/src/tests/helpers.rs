// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Effect, Session, SessionState, Submission, apply};
use bqm_domain::{Classification, FormInput, Gender, QualificationFailure, QualificationOutcome};

pub fn create_test_form() -> FormInput {
    FormInput::new(36, Gender::Female, 2, 50, 0).unwrap()
}

pub fn create_test_session() -> Session {
    Session::new(create_test_form())
}

pub fn qualified() -> QualificationOutcome {
    QualificationOutcome::Classified(Classification::Qualified)
}

pub fn not_qualified() -> QualificationOutcome {
    QualificationOutcome::Classified(Classification::NotQualified)
}

pub fn server_error() -> QualificationOutcome {
    QualificationOutcome::Failed(QualificationFailure::HttpStatus {
        code: 500,
        reason: Some(String::from("Internal Server Error")),
    })
}

/// Submits from `session` and returns the loading session plus its submission.
pub fn submitted(session: &Session) -> (Session, Submission) {
    let result = apply(session, Command::Submit).unwrap();
    let Effect::Dispatch(submission) = result.effect else {
        panic!("submit must dispatch");
    };
    assert_eq!(result.new_session.state, SessionState::Loading);
    (result.new_session, submission)
}
