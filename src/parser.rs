//! Schema registry and resolution.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::environment::{Environment, ProcessEnv};
use crate::error::{EnvError, RegistrationError};
use crate::namespace::Namespace;
use crate::variable::Var;

/// A schema-driven parser for environment variables.
///
/// Declarations are registered up front with [`register`](Self::register)
/// and resolved in registration order by [`parse`](Self::parse), producing
/// a [`Namespace`] with one field per declaration. Resolution is
/// all-or-nothing: the first missing required variable or undecodable value
/// fails the whole call.
///
/// ```
/// use std::collections::HashMap;
/// use envparse::{Decoder, EnvParser, Var};
///
/// let mut parser = EnvParser::new();
/// parser.register(Var::new("NUM_WORKERS").decoder(Decoder::Int).required(false).default(1i64))?;
/// parser.register(Var::new("RETENTION_POLICY").required(false).default("keep-alive"))?;
///
/// let env: HashMap<String, String> = HashMap::new();
/// let ns = parser.parse(&env)?;
/// assert_eq!(ns.get("num_workers").and_then(|v| v.as_i64()), Some(1));
/// assert_eq!(ns.get("retention_policy").and_then(|v| v.as_str()), Some("keep-alive"));
/// # Ok::<(), envparse::EnvError>(())
/// ```
#[derive(Debug, Default)]
pub struct EnvParser {
    variables: Vec<Var>,
}

impl EnvParser {
    /// Creates a parser with no declarations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a declaration, validating it first.
    ///
    /// Fails if the name is empty, if a required variable carries a default,
    /// or if the default's kind does not match the decoder. Registering a
    /// name that is already declared replaces the earlier declaration in
    /// place, keeping its position in the resolution order.
    pub fn register(&mut self, var: Var) -> Result<(), RegistrationError> {
        if var.name.is_empty() {
            return Err(RegistrationError::EmptyName);
        }
        if let Some(default) = &var.default {
            if var.required {
                return Err(RegistrationError::RequiredWithDefault(var.name));
            }
            if default.kind() != var.decoder {
                return Err(RegistrationError::DefaultMismatch {
                    name: var.name,
                    expected: var.decoder,
                    found: default.kind(),
                });
            }
        }

        match self.variables.iter_mut().find(|v| v.name == var.name) {
            Some(existing) => *existing = var,
            None => self.variables.push(var),
        }
        Ok(())
    }

    /// Resolves all declarations against the given environment.
    ///
    /// Declarations are visited in registration order. A found value is
    /// decoded with the declaration's decoder; a missing required variable
    /// or a decode failure aborts immediately, so no partial [`Namespace`]
    /// is ever returned. A missing optional variable falls back to its
    /// default, or to an explicit no-value entry.
    pub fn parse(&self, env: &impl Environment) -> Result<Namespace, EnvError> {
        let mut values = BTreeMap::new();

        for var in &self.variables {
            let value = match env.get(&var.name) {
                Some(raw) => Some(var.decode(&raw)?),
                None if var.default.is_some() => var.default.clone(),
                None if var.required => {
                    return Err(EnvError::Required(var.name.clone()));
                }
                None => None,
            };
            values.insert(var.field(), value);
        }

        Ok(Namespace::new(values))
    }

    /// Resolves all declarations against the process environment.
    ///
    /// The environment is read once per declaration within this call;
    /// concurrent mutation of the process environment during resolution is
    /// not guaranteed safe.
    pub fn parse_env(&self) -> Result<Namespace, EnvError> {
        self.parse(&ProcessEnv)
    }

    /// Renders a human-readable summary of the schema, one line per
    /// declaration in registration order.
    ///
    /// The text is recomputed from the current declarations on every call
    /// and each line is newline-terminated, so it can be embedded verbatim
    /// in a larger help message.
    pub fn description(&self) -> String {
        let mut out = String::new();
        for var in &self.variables {
            let requirement = if var.required { "required" } else { "optional" };
            let _ = write!(out, "{} ({}, {}", var.name, requirement, var.decoder);
            if let Some(default) = &var.default {
                let _ = write!(out, ", default: {default}");
            }
            out.push_str(")\n");
        }
        out
    }
}
