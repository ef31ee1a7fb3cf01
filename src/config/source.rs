/// Per-field provenance and the precedence rule.
use std::fmt;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Default,
    Environment,
    Argument,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Default => "default",
            Self::Environment => "environment",
            Self::Argument => "argument",
        })
    }
}

/// A resolved value tagged with the layer that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source<T> {
    Default(T),
    FromEnvironment(T),
    FromArgument(T),
}

impl<T> Source<T> {
    #[must_use]
    pub fn value(&self) -> &T {
        match self {
            Self::Default(v) | Self::FromEnvironment(v) | Self::FromArgument(v) => v,
        }
    }

    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Default(v) | Self::FromEnvironment(v) | Self::FromArgument(v) => v,
        }
    }

    #[must_use]
    pub fn origin(&self) -> Origin {
        match self {
            Self::Default(_) => Origin::Default,
            Self::FromEnvironment(_) => Origin::Environment,
            Self::FromArgument(_) => Origin::Argument,
        }
    }
}

/// Pick one field's value: an explicit argument beats the environment,
/// which beats the built-in default.
#[must_use]
pub fn layer<T>(default: T, environment: Option<T>, argument: Option<T>) -> Source<T> {
    match (argument, environment) {
        (Some(v), _) => Source::FromArgument(v),
        (None, Some(v)) => Source::FromEnvironment(v),
        (None, None) => Source::Default(default),
    }
}
