/// Errors from environment validation.
use std::fmt;

use thiserror::Error;

use super::value::VarKind;

/// A declared variable whose text does not parse as its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidVar {
    /// Full variable name, prefix included.
    pub name: String,
    /// The offending text, untrimmed.
    pub value: String,
    /// What the variable should have held.
    pub expected: VarKind,
}

impl fmt::Display for InvalidVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={:?} is not a valid {}",
            self.name, self.value, self.expected
        )
    }
}

/// One or more declared variables failed validation.
#[derive(Debug, Error)]
#[error("Invalid environment:\n  {}", format_all(.invalid))]
pub struct EnvError {
    /// Every failing variable, in schema order.
    pub invalid: Vec<InvalidVar>,
}

fn format_all(invalid: &[InvalidVar]) -> String {
    invalid
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n  ")
}
