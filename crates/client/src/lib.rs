// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One-shot request/response exchange with the qualification service.
//!
//! Every failure is folded into a [`QualificationOutcome`] at this boundary.
//! Callers never see a transport, status or parse error as an `Err`.
//!
//! [`QualificationOutcome`]: bqm_domain::QualificationOutcome

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod client;
mod config;
mod error;
mod qualifier;

#[cfg(test)]
mod tests;

pub use client::QualificationClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::ClientError;
pub use qualifier::Qualifier;
