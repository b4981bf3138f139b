//! Configuration module
//!
//! Handles CLI configuration including the collection API URL.

use anyhow::Result;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the collection API
    pub api_url: String,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!("api_url cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            api_url: "http://localhost:3333".to_string(),
        };
        assert!(config.validate().is_ok());

        config.api_url = String::new();
        assert!(config.validate().is_err());

        config.api_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.api_url = "https://api.example.com".to_string();
        assert!(config.validate().is_ok());
    }
}
