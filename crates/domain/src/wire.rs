// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire types exchanged with the qualification service.
//!
//! Field names and declaration order are fixed by the service contract.

use crate::types::Gender;
use serde::{Deserialize, Serialize};

/// Body of the PUT request sent to the qualification service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationRequest {
    /// Runner age.
    #[serde(rename = "AGE_IN")]
    pub age: u8,
    /// Runner gender code.
    #[serde(rename = "GENDER_IN")]
    pub gender: Gender,
    /// Finishing time, hours part.
    #[serde(rename = "HOURS_IN")]
    pub hours: u8,
    /// Finishing time, minutes part.
    #[serde(rename = "MINUTES_IN")]
    pub minutes: u8,
    /// Finishing time, seconds part.
    #[serde(rename = "SECONDS_IN")]
    pub seconds: u8,
}

impl QualificationRequest {
    /// Serializes the request to its compact JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Body returned by the qualification service on success.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationResponse {
    /// The classification string.
    #[serde(rename = "RESULT_MESSAGE_OUT")]
    pub result_message: String,
}

impl QualificationResponse {
    /// Parses a raw response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not JSON or lacks `RESULT_MESSAGE_OUT`.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
