//! The resolution result.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use crate::error::EnvError;
use crate::value::Value;

/// The immutable result of resolving a parser's declarations against an
/// environment snapshot.
///
/// Holds one entry per declared variable, keyed by its namespace field name
/// (the lower-cased variable name unless a `dest` override was given). An
/// optional variable that was absent with no default is present as an
/// explicit no-value entry: [`contains`](Self::contains) is true but
/// [`get`](Self::get) returns `None`.
///
/// A `Namespace` has no link back to the parser or the environment; later
/// registrations or environment changes do not affect it.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    values: BTreeMap<String, Option<Value>>,
}

impl Namespace {
    pub(crate) fn new(values: BTreeMap<String, Option<Value>>) -> Self {
        Self { values }
    }

    /// Returns the decoded value for `field`, or `None` if the field is
    /// unset or was never declared.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field).and_then(|v| v.as_ref())
    }

    /// Returns true if `field` was declared on the parser that produced
    /// this namespace, whether or not it carries a value.
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Returns true if `field` carries a value (found in the environment or
    /// filled from a default).
    pub fn is_set(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Iterates over all declared fields and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Deserializes the namespace into a caller-defined struct.
    ///
    /// Fields are matched by namespace field name. Unset fields are omitted,
    /// so they deserialize into `Option` fields as `None`.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use envparse::{Decoder, EnvParser, Var};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Settings {
    ///     port: i64,
    ///     host: Option<String>,
    /// }
    ///
    /// let mut parser = EnvParser::new();
    /// parser.register(Var::new("PORT").decoder(Decoder::Int))?;
    /// parser.register(Var::new("HOST").required(false))?;
    ///
    /// let env: HashMap<String, String> =
    ///     [("PORT".to_string(), "8080".to_string())].into();
    /// let settings: Settings = parser.parse(&env)?.deserialize()?;
    /// assert_eq!(settings.port, 8080);
    /// assert_eq!(settings.host, None);
    /// # Ok::<(), envparse::EnvError>(())
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, EnvError> {
        let mut table = toml::Table::new();
        for (field, value) in &self.values {
            if let Some(value) = value {
                table.insert(field.clone(), value.to_toml());
            }
        }
        toml::Value::Table(table)
            .try_into()
            .map_err(EnvError::Deserialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Namespace {
        Namespace::new(BTreeMap::from([
            ("port".to_string(), Some(Value::Int(8080))),
            ("host".to_string(), None),
        ]))
    }

    #[test]
    fn test_get_distinguishes_unset_from_undeclared() {
        let ns = sample();
        assert_eq!(ns.get("port"), Some(&Value::Int(8080)));
        assert_eq!(ns.get("host"), None);
        assert!(ns.contains("host"));
        assert!(!ns.contains("user"));
        assert!(ns.is_set("port"));
        assert!(!ns.is_set("host"));
    }

    #[test]
    fn test_deserialize_skips_unset_fields() {
        #[derive(serde::Deserialize)]
        struct Settings {
            port: i64,
            host: Option<String>,
        }

        let settings: Settings = sample().deserialize().unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.host, None);
    }

    #[test]
    fn test_deserialize_type_mismatch() {
        #[derive(Debug, serde::Deserialize)]
        struct Settings {
            #[allow(dead_code)]
            port: String,
        }

        let result = sample().deserialize::<Settings>();
        assert!(matches!(result, Err(EnvError::Deserialize(_))));
    }
}
