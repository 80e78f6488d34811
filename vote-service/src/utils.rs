//! Shared utility functions for the vote service

/// Parse an environment variable into a type implementing FromStr, with a default fallback
pub fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_parse_default_on_missing() {
        let port: u16 = env_parse("VOTE_SERVICE_TEST_UNSET_VAR", 3001);
        assert_eq!(port, 3001);
    }
}
