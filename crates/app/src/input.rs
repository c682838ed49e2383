// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Line commands typed at the terminal.
//!
//! ```text
//! age+  age-  gender+  hours-  minutes+  seconds-   step a field
//! age 40  set gender NB                            set a field
//! submit | check                                   send the form
//! reset | back                                     return to input
//! quit | exit | q                                  leave
//! ```

use bqm_domain::{DomainError, Edit, Field, Step, validate_edit};
use thiserror::Error;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Step { field: Field, step: Step },
    Set(Edit),
    Submit,
    Reset,
    Redraw,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown command '{0}'. Try: age+, minutes-, set gender NB, submit, back, quit")]
    UnknownCommand(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Parses one line of input.
///
/// # Errors
///
/// Returns an error if the line is not a recognized command, names an
/// unknown field, or sets a value that is unparseable or out of range.
pub fn parse_line(line: &str) -> Result<UserAction, InputError> {
    let line: &str = line.trim();
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(UserAction::Redraw);
    };
    let rest: Vec<&str> = words.collect();

    match (first.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("submit" | "check", []) => return Ok(UserAction::Submit),
        ("reset" | "back", []) => return Ok(UserAction::Reset),
        ("quit" | "exit" | "q", []) => return Ok(UserAction::Quit),
        ("set", [field, value]) => return set(field, value),
        _ => {}
    }

    match rest.as_slice() {
        [] => match split_step(first) {
            Some((name, step)) => Ok(UserAction::Step {
                field: name.parse::<Field>()?,
                step,
            }),
            None => Err(InputError::UnknownCommand(line.to_string())),
        },
        ["+" | "up"] => Ok(UserAction::Step {
            field: first.parse::<Field>()?,
            step: Step::Increment,
        }),
        ["-" | "down"] => Ok(UserAction::Step {
            field: first.parse::<Field>()?,
            step: Step::Decrement,
        }),
        [value] => set(first, value),
        _ => Err(InputError::UnknownCommand(line.to_string())),
    }
}

fn set(field: &str, value: &str) -> Result<UserAction, InputError> {
    let field: Field = field.parse::<Field>()?;
    let edit: Edit = Edit::parse(field, value)?;
    validate_edit(&edit)?;
    Ok(UserAction::Set(edit))
}

/// Splits `age+` into `("age", Increment)`.
fn split_step(word: &str) -> Option<(&str, Step)> {
    if let Some(name) = word.strip_suffix('+') {
        return Some((name, Step::Increment));
    }
    word.strip_suffix('-').map(|name| (name, Step::Decrement))
}
