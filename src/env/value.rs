/// Typed values for environment variables.
use std::fmt;

/// Declared type of an environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Bool,
    U8,
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("boolean (true/false, 1/0, yes/no, on/off)"),
            Self::U8 => f.write_str("unsigned 8-bit integer (0-255)"),
        }
    }
}

/// A successfully parsed environment value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvValue {
    Bool(bool),
    U8(u8),
}

impl VarKind {
    /// Parse `raw` as this kind. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(self, raw: &str) -> Option<EnvValue> {
        let text = raw.trim();
        match self {
            Self::Bool => parse_bool(text).map(EnvValue::Bool),
            Self::U8 => parse_u8(text).map(EnvValue::U8),
        }
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_u8(text: &str) -> Option<u8> {
    // `u8::from_str` accepts a leading '+', which we don't.
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
