// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::ClientConfig;
use crate::error::ClientError;
use bqm_domain::{
    Classification, FormInput, QualificationFailure, QualificationOutcome, QualificationRequest,
    QualificationResponse,
};
use reqwest::StatusCode;
use tracing::{debug, info, warn};

/// Client for the remote qualification service.
///
/// Each call is an independent single-attempt exchange: no retries, no
/// caching, no idempotency key.
#[derive(Debug, Clone)]
pub struct QualificationClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl QualificationClient {
    /// Creates a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder: reqwest::ClientBuilder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submits a form snapshot and returns the service's verdict.
    ///
    /// Transport failures, non-success statuses and unreadable bodies are
    /// returned as [`QualificationOutcome::Failed`].
    pub async fn submit_for_qualification(&self, form: &FormInput) -> QualificationOutcome {
        let request: QualificationRequest = form.to_request();
        info!(
            endpoint = %self.config.endpoint(),
            age = request.age,
            gender = %request.gender,
            hours = request.hours,
            minutes = request.minutes,
            seconds = request.seconds,
            "Submitting qualification request"
        );

        let outcome: QualificationOutcome = self.exchange(&request).await.into();
        match &outcome {
            QualificationOutcome::Classified(classification) => {
                info!(?classification, "Qualification request completed");
            }
            QualificationOutcome::Failed(failure) => {
                warn!(error = %failure, "Qualification request failed");
            }
        }
        outcome
    }

    async fn exchange(
        &self,
        request: &QualificationRequest,
    ) -> Result<Classification, QualificationFailure> {
        let response: reqwest::Response = self
            .http
            .put(self.config.endpoint().clone())
            .json(request)
            .send()
            .await
            .map_err(|e| QualificationFailure::Transport {
                message: error_chain(&e),
            })?;

        let status: StatusCode = response.status();
        if !status.is_success() {
            return Err(QualificationFailure::HttpStatus {
                code: status.as_u16(),
                reason: status.canonical_reason().map(str::to_string),
            });
        }

        let body: String = response
            .text()
            .await
            .map_err(|e| QualificationFailure::Transport {
                message: error_chain(&e),
            })?;
        debug!(%body, "Received qualification response");

        let parsed: QualificationResponse =
            QualificationResponse::from_json(&body).map_err(|e| QualificationFailure::Parse {
                message: e.to_string(),
            })?;

        Ok(Classification::from_message(&parsed.result_message))
    }
}

/// Joins an error with its sources, outermost first.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message: String = err.to_string();
    let mut source: Option<&dyn std::error::Error> = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
