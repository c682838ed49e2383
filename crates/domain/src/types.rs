// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Gender category accepted by the qualification service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    #[serde(rename = "M")]
    Male,
    /// Female.
    #[serde(rename = "F")]
    Female,
    /// Non-binary.
    #[serde(rename = "NB")]
    NonBinary,
}

impl Gender {
    /// All permitted values, in stepping order.
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::NonBinary];

    /// Returns the wire code for this gender.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::NonBinary => "NB",
        }
    }

    /// Returns the next value, wrapping `NB` back to `M`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::NonBinary,
            Self::NonBinary => Self::Male,
        }
    }

    /// Returns the previous value, wrapping `M` back to `NB`.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Male => Self::NonBinary,
            Self::Female => Self::Male,
            Self::NonBinary => Self::Female,
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            "NB" => Ok(Self::NonBinary),
            _ => Err(DomainError::UnknownGender(s.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifies one editable element of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Age,
    Gender,
    Hours,
    Minutes,
    Seconds,
}

impl Field {
    /// All fields in on-screen order.
    pub const ALL: [Self; 5] = [
        Self::Age,
        Self::Gender,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
    ];

    /// Returns the lowercase name used by the input layer.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }

    /// Returns whether stepping past a bound rolls over to the other bound.
    #[must_use]
    pub const fn wraps(&self) -> bool {
        matches!(self, Self::Gender | Self::Minutes | Self::Seconds)
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "age" => Ok(Self::Age),
            "gender" => Ok(Self::Gender),
            "hours" | "h" => Ok(Self::Hours),
            "minutes" | "m" => Ok(Self::Minutes),
            "seconds" | "s" => Ok(Self::Seconds),
            _ => Err(DomainError::UnknownField(s.to_string())),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of a single increment/decrement control press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Increment,
    Decrement,
}

/// A replacement value for one field of the form.
///
/// Edits carry the new value, not a delta. They are validated against the
/// field's range before being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Age(u8),
    Gender(Gender),
    Hours(u8),
    Minutes(u8),
    Seconds(u8),
}

impl Edit {
    /// Returns the field this edit targets.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::Age(_) => Field::Age,
            Self::Gender(_) => Field::Gender,
            Self::Hours(_) => Field::Hours,
            Self::Minutes(_) => Field::Minutes,
            Self::Seconds(_) => Field::Seconds,
        }
    }

    /// Builds an edit carrying `value` for a numeric field.
    ///
    /// Returns `None` for [`Field::Gender`].
    #[must_use]
    pub const fn numeric(field: Field, value: u8) -> Option<Self> {
        match field {
            Field::Age => Some(Self::Age(value)),
            Field::Hours => Some(Self::Hours(value)),
            Field::Minutes => Some(Self::Minutes(value)),
            Field::Seconds => Some(Self::Seconds(value)),
            Field::Gender => None,
        }
    }

    /// Parses a raw value for `field` into an edit.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a number (or a gender code for
    /// the gender field). Range checks happen in [`crate::validate_edit`].
    pub fn parse(field: Field, raw: &str) -> Result<Self, DomainError> {
        if field == Field::Gender {
            return raw.parse::<Gender>().map(Self::Gender);
        }

        let invalid = || DomainError::InvalidNumber {
            field,
            raw: raw.to_string(),
        };
        let value: u8 = raw.trim().parse::<u8>().map_err(|_| invalid())?;
        Self::numeric(field, value).ok_or_else(invalid)
    }
}
