use thiserror::Error;

use crate::value::Decoder;

/// An invalid declaration, rejected at registration time.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistrationError {
    #[error("cannot register a variable with an empty name")]
    EmptyName,

    #[error("variable '{0}' is required and cannot carry a default value")]
    RequiredWithDefault(String),

    #[error("default for variable '{name}' is a {found}, but its decoder expects a {expected}")]
    DefaultMismatch {
        name: String,
        expected: Decoder,
        found: Decoder,
    },
}

/// Top-level error type for the envparse library.
///
/// Every variant names the offending variable so the environment can be
/// fixed without reading source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvError {
    #[error("invalid declaration: {0}")]
    Registration(#[from] RegistrationError),

    #[error("environment variable '{0}' was required but not found")]
    Required(String),

    #[error("environment variable '{name}' of type '{kind}' could not be parsed using value '{value}'")]
    Parse {
        name: String,
        kind: Decoder,
        value: String,
    },

    #[error("failed to deserialize namespace: {0}")]
    Deserialize(#[from] toml::de::Error),
}
