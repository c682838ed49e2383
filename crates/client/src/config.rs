// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ClientError;
use reqwest::Url;
use std::time::Duration;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:1897/Rocket-Build-25/BQM/1.4/INPUT-REQUEST";

/// Validated client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: Url,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Parses and validates an endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or is not http/https.
    pub fn new(endpoint: &str) -> Result<Self, ClientError> {
        let url: Url = Url::parse(endpoint).map_err(|e| ClientError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
            });
        }

        Ok(Self {
            endpoint: url,
            timeout: None,
        })
    }

    /// Sets an overall request timeout. Without one the transport default applies.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
