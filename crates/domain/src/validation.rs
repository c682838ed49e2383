// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Edit, Field};
use std::ops::RangeInclusive;

/// Accepted runner ages.
pub const AGE_RANGE: RangeInclusive<u8> = 18..=80;

/// Accepted finishing-time hours.
pub const HOURS_RANGE: RangeInclusive<u8> = 0..=10;

/// Accepted finishing-time minutes.
pub const MINUTES_RANGE: RangeInclusive<u8> = 0..=59;

/// Accepted finishing-time seconds.
pub const SECONDS_RANGE: RangeInclusive<u8> = 0..=59;

/// Returns the declared range for a numeric field, or `None` for gender.
pub(crate) const fn range_for(field: Field) -> Option<RangeInclusive<u8>> {
    match field {
        Field::Age => Some(AGE_RANGE),
        Field::Hours => Some(HOURS_RANGE),
        Field::Minutes => Some(MINUTES_RANGE),
        Field::Seconds => Some(SECONDS_RANGE),
        Field::Gender => None,
    }
}

/// Validates that an edit's value lies within its field's declared range.
///
/// Gender edits are always valid: the [`crate::Gender`] type only admits
/// the permitted set.
///
/// # Arguments
///
/// * `edit` - The edit to validate
///
/// # Returns
///
/// * `Ok(())` if the value is within range
/// * `Err(DomainError::OutOfRange)` otherwise
///
/// # Errors
///
/// Returns an error if a numeric value is outside its field's range.
pub fn validate_edit(edit: &Edit) -> Result<(), DomainError> {
    let value: u8 = match *edit {
        Edit::Gender(_) => return Ok(()),
        Edit::Age(v) | Edit::Hours(v) | Edit::Minutes(v) | Edit::Seconds(v) => v,
    };

    let field: Field = edit.field();
    let Some(range) = range_for(field) else {
        return Ok(());
    };

    if !range.contains(&value) {
        return Err(DomainError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}
