//! Environment variable declarations.

use crate::error::EnvError;
use crate::value::{Decoder, Value};

// Closed truth grammars for boolean decoding. Any other spelling (e.g.
// "YES", "on") is a parse error rather than a coerced truthy value.
const TRUTH_SET: [&str; 3] = ["true", "True", "1"];
const FALSE_SET: [&str; 3] = ["false", "False", "0"];

/// A declaration of one expected environment variable: its name, whether it
/// is required, how its raw string is decoded, an optional default, and the
/// namespace field it lands in.
///
/// A `Var` is a pure description of intent; it performs no lookups itself.
/// Options are set in builder style and validated when the declaration is
/// registered on an [`EnvParser`](crate::EnvParser).
///
/// ```
/// use envparse::{Decoder, Var};
///
/// let var = Var::new("NUM_WORKERS")
///     .decoder(Decoder::Int)
///     .required(false)
///     .default(4i64);
/// ```
#[derive(Debug, Clone)]
#[must_use = "declarations do nothing until registered on a parser"]
pub struct Var {
    pub(crate) name: String,
    pub(crate) decoder: Decoder,
    pub(crate) required: bool,
    pub(crate) default: Option<Value>,
    pub(crate) dest: Option<String>,
}

impl Var {
    /// Declares a variable looked up by `name`, required, decoded as a
    /// string.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decoder: Decoder::Str,
            required: true,
            default: None,
            dest: None,
        }
    }

    /// Sets the decoder applied to the raw value.
    pub fn decoder(mut self, decoder: Decoder) -> Self {
        self.decoder = decoder;
        self
    }

    /// Marks the variable as required or optional.
    ///
    /// Resolving a missing required variable fails; a missing optional one
    /// falls back to its default, or to the no-value marker.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets an already-decoded default, used when the variable is absent.
    ///
    /// The default's kind must match the decoder, and the variable must be
    /// optional; both are checked at registration.
    pub fn default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Overrides the namespace field name. Defaults to the variable name in
    /// lower case.
    pub fn dest(mut self, dest: impl Into<String>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    /// The namespace field this variable resolves into.
    pub(crate) fn field(&self) -> String {
        match &self.dest {
            Some(dest) => dest.clone(),
            None => self.name.to_lowercase(),
        }
    }

    /// Decodes a raw environment string according to this declaration's
    /// decoder.
    pub(crate) fn decode(&self, raw: &str) -> Result<Value, EnvError> {
        match self.decoder {
            Decoder::Str => Ok(Value::Str(raw.to_string())),
            Decoder::Int => raw
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| self.parse_error(raw)),
            Decoder::Float => raw
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| self.parse_error(raw)),
            Decoder::Bool => {
                if TRUTH_SET.contains(&raw) {
                    Ok(Value::Bool(true))
                } else if FALSE_SET.contains(&raw) {
                    Ok(Value::Bool(false))
                } else {
                    Err(self.parse_error(raw))
                }
            }
        }
    }

    fn parse_error(&self, raw: &str) -> EnvError {
        EnvError::Parse {
            name: self.name.clone(),
            kind: self.decoder,
            value: raw.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_decode_is_identity() {
        let var = Var::new("STR");
        assert_eq!(var.decode("STR-val").unwrap(), Value::from("STR-val"));
    }

    #[test]
    fn test_int_decode() {
        let var = Var::new("INT").decoder(Decoder::Int);
        assert_eq!(var.decode("42").unwrap(), Value::Int(42));
        assert_eq!(var.decode("-7").unwrap(), Value::Int(-7));
    }

    #[test]
    fn test_int_decode_rejects_non_numeric() {
        let var = Var::new("INT").decoder(Decoder::Int);
        let err = var.decode("abc").unwrap_err();
        assert!(matches!(
            err,
            EnvError::Parse { name, kind: Decoder::Int, value }
                if name == "INT" && value == "abc"
        ));
    }

    #[test]
    fn test_float_decode() {
        let var = Var::new("FLOAT").decoder(Decoder::Float);
        assert_eq!(var.decode("123.123").unwrap(), Value::Float(123.123));
        assert!(var.decode("1.2.3").is_err());
    }

    #[test]
    fn test_bool_truth_set() {
        let var = Var::new("B").decoder(Decoder::Bool);
        for raw in ["true", "True", "1"] {
            assert_eq!(var.decode(raw).unwrap(), Value::Bool(true));
        }
        for raw in ["false", "False", "0"] {
            assert_eq!(var.decode(raw).unwrap(), Value::Bool(false));
        }
    }

    #[test]
    fn test_bool_rejects_open_spellings() {
        let var = Var::new("B").decoder(Decoder::Bool);
        for raw in ["YES", "no", "TRUE", "on", ""] {
            let err = var.decode(raw).unwrap_err();
            assert!(matches!(err, EnvError::Parse { kind: Decoder::Bool, .. }));
        }
    }

    #[test]
    fn test_field_defaults_to_lowercase_name() {
        assert_eq!(Var::new("NUM_WORKERS").field(), "num_workers");
        assert_eq!(Var::new("STR").dest("sTr").field(), "sTr");
    }
}
