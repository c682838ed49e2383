// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Edit, Field, Gender, Step};
use crate::validation::{range_for, validate_edit};
use crate::wire::QualificationRequest;

/// The in-progress form a runner fills in before submitting.
///
/// Every field always holds an in-range value. The only ways to change a
/// field are [`FormInput::new`] and [`FormInput::with_edit`], both of which
/// validate first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormInput {
    age: u8,
    gender: Gender,
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl FormInput {
    /// Creates a form from explicit values.
    ///
    /// # Errors
    ///
    /// Returns an error if any numeric value is outside its field's range.
    pub fn new(
        age: u8,
        gender: Gender,
        hours: u8,
        minutes: u8,
        seconds: u8,
    ) -> Result<Self, DomainError> {
        for edit in [
            Edit::Age(age),
            Edit::Hours(hours),
            Edit::Minutes(minutes),
            Edit::Seconds(seconds),
        ] {
            validate_edit(&edit)?;
        }
        Ok(Self {
            age,
            gender,
            hours,
            minutes,
            seconds,
        })
    }

    #[must_use]
    pub const fn age(&self) -> u8 {
        self.age
    }

    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub const fn hours(&self) -> u8 {
        self.hours
    }

    #[must_use]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    #[must_use]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Returns a copy of this form with `edit` applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the edit's value is out of range. `self` is
    /// never modified.
    pub fn with_edit(&self, edit: Edit) -> Result<Self, DomainError> {
        validate_edit(&edit)?;
        let mut next: Self = *self;
        match edit {
            Edit::Age(v) => next.age = v,
            Edit::Gender(g) => next.gender = g,
            Edit::Hours(v) => next.hours = v,
            Edit::Minutes(v) => next.minutes = v,
            Edit::Seconds(v) => next.seconds = v,
        }
        Ok(next)
    }

    /// Computes the edit produced by pressing a step control on `field`.
    ///
    /// Minutes, seconds and gender wrap at their bounds. Age and hours stop:
    /// stepping past a bound yields `None`.
    #[must_use]
    pub fn step(&self, field: Field, step: Step) -> Option<Edit> {
        let current: u8 = match field {
            Field::Gender => {
                return Some(Edit::Gender(match step {
                    Step::Increment => self.gender.next(),
                    Step::Decrement => self.gender.previous(),
                }));
            }
            Field::Age => self.age,
            Field::Hours => self.hours,
            Field::Minutes => self.minutes,
            Field::Seconds => self.seconds,
        };

        let range = range_for(field)?;
        let (min, max): (u8, u8) = (*range.start(), *range.end());
        let value: u8 = match step {
            Step::Increment if current >= max => field.wraps().then_some(min)?,
            Step::Decrement if current <= min => field.wraps().then_some(max)?,
            Step::Increment => current + 1,
            Step::Decrement => current - 1,
        };

        Edit::numeric(field, value)
    }

    /// Builds the immutable wire request for this form.
    #[must_use]
    pub const fn to_request(&self) -> QualificationRequest {
        QualificationRequest {
            age: self.age,
            gender: self.gender,
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
        }
    }
}

impl Default for FormInput {
    /// A 36 year old female runner with a 2:50:00 finish.
    fn default() -> Self {
        Self {
            age: 36,
            gender: Gender::Female,
            hours: 2,
            minutes: 50,
            seconds: 0,
        }
    }
}
