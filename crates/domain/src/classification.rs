// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Wire value for a qualifying result.
const QUALIFIED: &str = "QUALIFIED";

/// Wire value for a non-qualifying result.
const NOT_QUALIFIED: &str = "NOT QUALIFIED";

/// The verdict returned by the qualification service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Qualified,
    NotQualified,
    /// Any string other than the two known verdicts, kept verbatim.
    Unrecognized(String),
}

impl Classification {
    /// Maps a `RESULT_MESSAGE_OUT` value to a classification.
    ///
    /// Matching is exact: case and surrounding whitespace are significant.
    #[must_use]
    pub fn from_message(message: &str) -> Self {
        match message {
            QUALIFIED => Self::Qualified,
            NOT_QUALIFIED => Self::NotQualified,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

/// Why a qualification exchange did not produce a classification.
///
/// The `Display` text is what the result screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QualificationFailure {
    /// Connection, DNS or timeout failure.
    #[error("Exception: {message}")]
    Transport { message: String },
    /// The service answered with a non-success status.
    ///
    /// `reason` is absent for codes without a standard reason phrase.
    #[error("Error {code}{}", reason_suffix(.reason.as_deref()))]
    HttpStatus { code: u16, reason: Option<String> },
    /// The body was not JSON or had no `RESULT_MESSAGE_OUT`.
    #[error("Error: could not read response: {message}")]
    Parse { message: String },
}

fn reason_suffix(reason: Option<&str>) -> String {
    reason.map(|r| format!(": {r}")).unwrap_or_default()
}

/// The single value delivered back to the controller per submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualificationOutcome {
    Classified(Classification),
    Failed(QualificationFailure),
}

impl QualificationOutcome {
    /// Returns whether this outcome is something other than a known verdict.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(
            self,
            Self::Failed(_) | Self::Classified(Classification::Unrecognized(_))
        )
    }
}

impl From<Result<Classification, QualificationFailure>> for QualificationOutcome {
    fn from(result: Result<Classification, QualificationFailure>) -> Self {
        match result {
            Ok(classification) => Self::Classified(classification),
            Err(failure) => Self::Failed(failure),
        }
    }
}
