use std::collections::HashMap;

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "CSV_UPLOADER_API_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const UPLOAD_PATH: &str = "/api/v1/uploads/csv/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploaderConfig {
    pub base_url: String,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl UploaderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.strip_suffix('/').unwrap_or(&base_url);
        if trimmed.is_empty() {
            return Self::default();
        }
        Self {
            base_url: trimmed.to_string(),
        }
    }

    /// Reads the process environment once. Meant to be called from `main`.
    pub fn from_env() -> Self {
        Self::from_env_with(&std::env::vars().collect())
    }

    pub fn from_env_with(env: &HashMap<String, String>) -> Self {
        match env.get(BASE_URL_ENV) {
            Some(url) => Self::new(url.trim()),
            None => Self::default(),
        }
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_when_unset() {
        let config = UploaderConfig::from_env_with(&env(&[]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.upload_url(), "http://localhost:8000/api/v1/uploads/csv/");
    }

    #[test]
    fn test_empty_value_falls_back() {
        let config = UploaderConfig::from_env_with(&env(&[(BASE_URL_ENV, "")]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_override_strips_trailing_slash() {
        let config =
            UploaderConfig::from_env_with(&env(&[(BASE_URL_ENV, "https://api.example.com/")]));
        assert_eq!(config.upload_url(), "https://api.example.com/api/v1/uploads/csv/");
    }

    #[test]
    fn test_unrelated_vars_ignored() {
        let config = UploaderConfig::from_env_with(&env(&[("API_URL", "http://elsewhere")]));
        assert_eq!(config, UploaderConfig::default());
    }
}
