// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Field;

/// Errors that can occur during form validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A numeric value falls outside its field's declared range.
    OutOfRange {
        /// The field being edited.
        field: Field,
        /// The rejected value.
        value: u8,
        /// Inclusive lower bound.
        min: u8,
        /// Inclusive upper bound.
        max: u8,
    },
    /// A gender code outside the permitted set.
    UnknownGender(String),
    /// A field name the form does not have.
    UnknownField(String),
    /// A raw value that is not a number.
    InvalidNumber {
        /// The field being edited.
        field: Field,
        /// The raw input.
        raw: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "Value {value} for {field} is out of range. Must be between {min} and {max}"
                )
            }
            Self::UnknownGender(raw) => {
                write!(f, "Unknown gender '{raw}'. Must be one of M, F, NB")
            }
            Self::UnknownField(raw) => write!(f, "Unknown field '{raw}'"),
            Self::InvalidNumber { field, raw } => {
                write!(f, "Invalid number '{raw}' for {field}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
