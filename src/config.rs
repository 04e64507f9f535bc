/// Application-level constants
pub const APP_NAME: &str = "Dosetrack";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound on the backward streak walk (ten years of daily intake).
/// The records service exposes no account-creation date, so the walk is
/// capped here instead to keep it finite on synthetic or corrupted data.
pub const MAX_STREAK_DAYS: u32 = 3660;

/// Connection settings for the Medication Records Service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ServiceConfig {
    /// Create a config pointing at an explicit service instance.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        }
    }

    /// Default local development instance with a 30-second timeout.
    pub fn default_local() -> Self {
        Self::new("http://localhost:5000", 30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let config = ServiceConfig::new("http://records.example/", 10);
        assert_eq!(config.base_url, "http://records.example");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
