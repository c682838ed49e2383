// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_form, not_qualified, qualified, server_error};
use crate::{FlowController, LOADING_TEXT, ScreenView, Submission, Verdict};
use bqm_domain::{Classification, QualificationFailure, QualificationOutcome};

fn view_after(outcome: QualificationOutcome) -> ScreenView {
    let mut controller: FlowController = FlowController::new(create_test_form(), "Boston 2026 Marathon");
    let submission: Submission = controller.submit().unwrap();
    assert!(controller.on_request_complete(submission.ticket, outcome));
    controller.view()
}

#[test]
fn test_input_view_carries_form() {
    let controller: FlowController = FlowController::new(create_test_form(), "Boston 2026 Marathon");
    assert_eq!(
        controller.view(),
        ScreenView::Input {
            form: create_test_form()
        }
    );
}

#[test]
fn test_loading_view_shows_calculating() {
    let mut controller: FlowController = FlowController::new(create_test_form(), "Boston 2026 Marathon");
    controller.submit().unwrap();
    assert_eq!(controller.view(), ScreenView::Loading { text: LOADING_TEXT });
    assert_eq!(LOADING_TEXT, "Calculating...");
}

#[test]
fn test_qualified_text_names_race() {
    assert_eq!(
        view_after(qualified()),
        ScreenView::Result {
            verdict: Verdict::Qualified,
            text: String::from("✅\nYou Are Qualified for Boston 2026 Marathon"),
        }
    );
}

#[test]
fn test_not_qualified_text_names_race() {
    assert_eq!(
        view_after(not_qualified()),
        ScreenView::Result {
            verdict: Verdict::NotQualified,
            text: String::from("❌\nYou Are Not Qualified for Boston 2026 Marathon"),
        }
    );
}

#[test]
fn test_unrecognized_text_quotes_message() {
    let outcome: QualificationOutcome =
        QualificationOutcome::Classified(Classification::Unrecognized(String::from("WAITLIST")));
    assert_eq!(
        view_after(outcome),
        ScreenView::Result {
            verdict: Verdict::Error,
            text: String::from("❗ Error: Unexpected result \"WAITLIST\""),
        }
    );
}

#[test]
fn test_http_status_text_embeds_code() {
    let ScreenView::Result { verdict, text } = view_after(server_error()) else {
        panic!("expected result view");
    };
    assert_eq!(verdict, Verdict::Error);
    assert!(text.contains("500"), "{text}");
}

#[test]
fn test_parse_failure_text_embeds_message() {
    let outcome: QualificationOutcome = QualificationOutcome::Failed(QualificationFailure::Parse {
        message: String::from("expected value at line 1 column 1"),
    });
    let ScreenView::Result { verdict, text } = view_after(outcome) else {
        panic!("expected result view");
    };
    assert_eq!(verdict, Verdict::Error);
    assert!(text.contains("expected value at line 1 column 1"), "{text}");
}

#[test]
fn test_custom_race_name() {
    let mut controller: FlowController = FlowController::new(create_test_form(), "Chicago 2027");
    let submission: Submission = controller.submit().unwrap();
    controller.on_request_complete(submission.ticket, qualified());
    assert!(matches!(
        controller.view(),
        ScreenView::Result { text, .. } if text.ends_with("Chicago 2027")
    ));
}
