//! Schema-driven environment variable parsing.
//!
//! Declare the variables a process expects on an [`EnvParser`], resolve them
//! against the environment, and read the decoded values off the resulting
//! [`Namespace`] or deserialize them into a typed struct.
//!
//! ```
//! use std::collections::HashMap;
//! use envparse::{Decoder, EnvParser, Var};
//!
//! let mut parser = EnvParser::new();
//! parser.register(Var::new("SYSTEM_ONLINE").decoder(Decoder::Bool))?;
//! parser.register(Var::new("NUM_WORKERS").decoder(Decoder::Int).required(false).default(1i64))?;
//!
//! let env: HashMap<String, String> =
//!     [("SYSTEM_ONLINE".to_string(), "true".to_string())].into();
//!
//! let ns = parser.parse(&env)?;
//! assert_eq!(ns.get("system_online").and_then(|v| v.as_bool()), Some(true));
//! assert_eq!(ns.get("num_workers").and_then(|v| v.as_i64()), Some(1));
//! # Ok::<(), envparse::EnvError>(())
//! ```

mod environment;
mod error;
mod namespace;
mod parser;
mod value;
mod variable;

pub use environment::{Environment, ProcessEnv};
pub use error::{EnvError, RegistrationError};
pub use namespace::Namespace;
pub use parser::EnvParser;
pub use value::{Decoder, Value};
pub use variable::Var;
