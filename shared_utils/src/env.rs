use thiserror::Error;

/// An environment variable required by the application is not set.
#[derive(Debug, Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVar(pub String);

/// Reads a required environment variable, returning a structured error if it
/// is missing.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn require_env(name: &str) -> Result<String, MissingEnvVar> {
    std::env::var(name).map_err(|_| MissingEnvVar(name.to_string()))
}

/// Reads an optional environment variable.
///
/// Unset and non-unicode values both read as `None`; callers that need to
/// distinguish the two should use [`std::env::var`] directly.
pub fn lookup_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
