/// Environment schema: which prefixed variables exist and how they parse.
use std::collections::HashMap;

use super::errors::{EnvError, InvalidVar};
use super::value::{EnvValue, VarKind};

/// Prefix shared by every launcher variable.
pub const PREFIX: &str = "VKGS_";

pub const VALIDATION_LAYERS: &str = "VALIDATION_LAYERS";
pub const PHYSICAL_DEVICE: &str = "PHYSICAL_DEVICE";
pub const IMMEDIATE_SWAPCHAIN: &str = "IMMEDIATE_SWAPCHAIN";

/// Undeclared names this close to a declared one get a suggestion.
const SUGGESTION_DISTANCE: usize = 2;

/// One declared variable, named without its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarSpec {
    pub name: &'static str,
    pub kind: VarKind,
}

/// A set of typed variables under one prefix.
#[derive(Debug, Clone)]
pub struct EnvSchema {
    prefix: &'static str,
    vars: Vec<VarSpec>,
}

/// A prefixed variable the schema does not declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unrecognized {
    /// Full variable name as found in the environment.
    pub name: String,
    /// Closest declared full name, if any is close enough to be a typo.
    pub suggestion: Option<String>,
}

/// Typed, presence-aware values for the declared variables.
///
/// A variable absent from the environment has no entry; there is no
/// "present but defaulted" state at this layer.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    values: HashMap<&'static str, EnvValue>,
    unrecognized: Vec<Unrecognized>,
}

impl EnvSchema {
    /// An empty schema for `prefix` (which should include its trailing `_`).
    #[must_use]
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            vars: Vec::new(),
        }
    }

    /// The launcher's schema: `VKGS_VALIDATION_LAYERS`, `VKGS_PHYSICAL_DEVICE`,
    /// `VKGS_IMMEDIATE_SWAPCHAIN`.
    #[must_use]
    pub fn vkgs() -> Self {
        Self::new(PREFIX)
            .declare(VALIDATION_LAYERS, VarKind::Bool)
            .declare(PHYSICAL_DEVICE, VarKind::U8)
            .declare(IMMEDIATE_SWAPCHAIN, VarKind::Bool)
    }

    /// Add a variable to the schema.
    #[must_use]
    pub fn declare(mut self, name: &'static str, kind: VarKind) -> Self {
        self.vars.push(VarSpec { name, kind });
        self
    }

    /// Full variable name for `name`, prefix included.
    #[must_use]
    pub fn full_name(&self, name: &str) -> String {
        format!("{}{name}", self.prefix)
    }

    /// Parse and validate an environment snapshot against the schema.
    ///
    /// Variables outside the prefix are ignored. Undeclared prefixed
    /// variables are recorded in [`EnvSnapshot::unrecognized`] and otherwise
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `EnvError` listing every declared variable whose text does not
    /// parse as its declared kind.
    pub fn parse<I, K, V>(&self, vars: I) -> Result<EnvSnapshot, EnvError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut raw: HashMap<String, String> = HashMap::new();
        let mut unrecognized = Vec::new();

        for (key, value) in vars {
            let key = key.as_ref();
            let Some(name) = key.strip_prefix(self.prefix) else {
                continue;
            };
            if self.vars.iter().any(|spec| spec.name == name) {
                raw.insert(name.to_owned(), value.as_ref().to_owned());
            } else {
                unrecognized.push(Unrecognized {
                    name: key.to_owned(),
                    suggestion: self.suggest(name),
                });
            }
        }
        unrecognized.sort_by(|a, b| a.name.cmp(&b.name));

        let mut values = HashMap::new();
        let mut invalid = Vec::new();
        for spec in &self.vars {
            let Some(text) = raw.get(spec.name) else {
                continue;
            };
            match spec.kind.parse(text) {
                Some(value) => {
                    values.insert(spec.name, value);
                }
                None => invalid.push(InvalidVar {
                    name: self.full_name(spec.name),
                    value: text.clone(),
                    expected: spec.kind,
                }),
            }
        }

        if invalid.is_empty() {
            Ok(EnvSnapshot {
                values,
                unrecognized,
            })
        } else {
            Err(EnvError { invalid })
        }
    }

    fn suggest(&self, name: &str) -> Option<String> {
        self.vars
            .iter()
            .map(|spec| (edit_distance(name, spec.name), spec.name))
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, declared)| self.full_name(declared))
    }
}

impl EnvSnapshot {
    /// Value of a declared boolean variable, if it was set.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(EnvValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Value of a declared `u8` variable, if it was set.
    #[must_use]
    pub fn get_u8(&self, name: &str) -> Option<u8> {
        match self.values.get(name) {
            Some(EnvValue::U8(value)) => Some(*value),
            _ => None,
        }
    }

    /// Prefixed variables the schema does not declare, sorted by name.
    #[must_use]
    pub fn unrecognized(&self) -> &[Unrecognized] {
        &self.unrecognized
    }
}

/// The process environment, skipping entries that are not valid UTF-8.
pub fn process_vars() -> impl Iterator<Item = (String, String)> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
}

/// Levenshtein distance over bytes; names are ASCII.
fn edit_distance(a: &str, b: &str) -> usize {
    let b = b.as_bytes();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.bytes().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != *cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(vars: &[(&str, &str)]) -> Result<EnvSnapshot, EnvError> {
        EnvSchema::vkgs().parse(vars.iter().copied())
    }

    #[test]
    fn test_empty_environment() {
        let env = parse(&[]).unwrap();
        assert_eq!(env.get_bool(VALIDATION_LAYERS), None);
        assert_eq!(env.get_u8(PHYSICAL_DEVICE), None);
        assert_eq!(env.get_bool(IMMEDIATE_SWAPCHAIN), None);
        assert!(env.unrecognized().is_empty());
    }

    #[test]
    fn test_declared_values() {
        let env = parse(&[
            ("VKGS_VALIDATION_LAYERS", "true"),
            ("VKGS_PHYSICAL_DEVICE", "5"),
            ("VKGS_IMMEDIATE_SWAPCHAIN", "0"),
            ("PATH", "/usr/bin"),
        ])
        .unwrap();
        assert_eq!(env.get_bool(VALIDATION_LAYERS), Some(true));
        assert_eq!(env.get_u8(PHYSICAL_DEVICE), Some(5));
        assert_eq!(env.get_bool(IMMEDIATE_SWAPCHAIN), Some(false));
    }

    #[test]
    fn test_explicit_false_is_present() {
        let env = parse(&[("VKGS_VALIDATION_LAYERS", "false")]).unwrap();
        assert_eq!(env.get_bool(VALIDATION_LAYERS), Some(false));
    }

    #[test]
    fn test_kind_mismatch_reads_as_absent() {
        let env = parse(&[("VKGS_PHYSICAL_DEVICE", "1")]).unwrap();
        assert_eq!(env.get_bool(PHYSICAL_DEVICE), None);
    }

    #[test]
    fn test_invalid_number() {
        let err = parse(&[("VKGS_PHYSICAL_DEVICE", "notanumber")]).unwrap_err();
        assert_eq!(err.invalid.len(), 1);
        assert_eq!(err.invalid[0].name, "VKGS_PHYSICAL_DEVICE");
        assert_eq!(err.invalid[0].value, "notanumber");
        assert_eq!(err.invalid[0].expected, VarKind::U8);
    }

    #[test]
    fn test_all_invalid_reported_together() {
        let err = parse(&[
            ("VKGS_IMMEDIATE_SWAPCHAIN", "maybe"),
            ("VKGS_VALIDATION_LAYERS", "sure"),
            ("VKGS_PHYSICAL_DEVICE", "300"),
        ])
        .unwrap_err();
        let names: Vec<&str> = err.invalid.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "VKGS_VALIDATION_LAYERS",
                "VKGS_PHYSICAL_DEVICE",
                "VKGS_IMMEDIATE_SWAPCHAIN"
            ]
        );
        let message = err.to_string();
        assert!(message.contains("VKGS_PHYSICAL_DEVICE=\"300\""));
    }

    #[test]
    fn test_undeclared_prefixed_variable_is_ignored() {
        let env = parse(&[("VKGS_FULLSCREEN", "notabool"), ("VKGS_VALIDATION_LAYERS", "1")])
            .unwrap();
        assert_eq!(env.get_bool(VALIDATION_LAYERS), Some(true));
        assert_eq!(
            env.unrecognized(),
            [Unrecognized {
                name: "VKGS_FULLSCREEN".to_owned(),
                suggestion: None,
            }]
        );
    }

    #[test]
    fn test_typo_gets_suggestion() {
        let env = parse(&[("VKGS_PHYSICAL_DEVICES", "1")]).unwrap();
        assert_eq!(env.get_u8(PHYSICAL_DEVICE), None);
        assert_eq!(
            env.unrecognized()[0].suggestion.as_deref(),
            Some("VKGS_PHYSICAL_DEVICE")
        );
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        let env = parse(&[("vkgs_VALIDATION_LAYERS", "true")]).unwrap();
        assert_eq!(env.get_bool(VALIDATION_LAYERS), None);
        assert!(env.unrecognized().is_empty());
    }

    #[test]
    fn test_custom_schema() {
        let schema = EnvSchema::new("APP_").declare("LEVEL", VarKind::U8);
        let env = schema.parse([("APP_LEVEL", "3")]).unwrap();
        assert_eq!(env.get_u8("LEVEL"), Some(3));
        assert_eq!(schema.full_name("LEVEL"), "APP_LEVEL");
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("DEVICE", "DEVICE"), 0);
    }
}
