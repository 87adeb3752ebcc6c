//! The environment lookup seam.

use std::collections::HashMap;

/// A source of raw environment values, looked up by name.
///
/// [`EnvParser::parse`](crate::EnvParser::parse) takes any `Environment`
/// rather than reading process state directly, so resolution can be tested
/// against a plain `HashMap` without touching the real environment.
pub trait Environment {
    /// Returns the raw value for `name`, or `None` if it is not set.
    fn get(&self, name: &str) -> Option<String>;
}

/// The process environment.
///
/// Each lookup reads the live environment once; a variable that is not set,
/// or whose value is not valid Unicode, is treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_lookup() {
        let env: HashMap<String, String> =
            [("PORT".to_string(), "8080".to_string())].into();
        assert_eq!(Environment::get(&env, "PORT").as_deref(), Some("8080"));
        assert_eq!(Environment::get(&env, "HOST"), None);
    }
}
