// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod classification;
mod error;
mod form;
mod types;
mod validation;
mod wire;

#[cfg(test)]
mod tests;

pub use classification::{Classification, QualificationFailure, QualificationOutcome};
pub use error::DomainError;
pub use form::FormInput;
pub use types::{Edit, Field, Gender, Step};
pub use validation::{AGE_RANGE, HOURS_RANGE, MINUTES_RANGE, SECONDS_RANGE, validate_edit};
pub use wire::{QualificationRequest, QualificationResponse};
