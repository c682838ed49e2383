// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors raised while configuring the client.
///
/// These happen before any request is sent. Failures of the exchange itself
/// are reported as [`bqm_domain::QualificationFailure`] instead.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Unsupported endpoint scheme '{scheme}'. Must be http or https")]
    UnsupportedScheme { scheme: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}
