//! Environment variable read helpers.
//!
//! Empty values count as unset, so `TBRUN_RUNNER=""` falls back to the
//! default instead of producing an unrunnable empty program name.

use std::env;

/// Read an environment variable, falling back to `default` when unset or empty.
pub fn env_or<F>(key: &str, default: F) -> String
where
    F: FnOnce() -> String,
{
    env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(default)
}

/// Read an environment variable as `Option`, treating empty as unset.
pub fn env_optional(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|s| {
        let s = s.trim().to_string();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    })
}

/// Parse a boolean environment variable: 0/false/no/off are false,
/// anything else set is true.
pub fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        Err(_) => default,
    }
}
