//! Configuration validation.

use url::Url;

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error, if any, into a `ConfigError`.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::check_api(config, &mut result);
        Self::check_embed(config, &mut result);

        result
    }

    /// Validate only the `[api]` section.
    pub fn validate_api(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();
        Self::check_api(config, &mut result);
        result
    }

    /// Validate only the `[embed]` section.
    pub fn validate_embed(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();
        Self::check_embed(config, &mut result);
        result
    }

    fn check_api(config: &Config, result: &mut ValidationResult) {
        match Url::parse(&config.api.base_url) {
            Ok(url) if url.scheme() == "https" => {}
            Ok(url) if url.scheme() == "http" => {
                result.add_warning(ValidationWarning::new(
                    "api.base_url",
                    "base_url uses plain http, the api key is sent unencrypted",
                ));
            }
            Ok(_) => {
                result.add_error(ValidationError::new(
                    "api.base_url",
                    "base_url must start with http:// or https://",
                ));
            }
            Err(e) => {
                result.add_error(ValidationError::new(
                    "api.base_url",
                    format!("base_url is not a valid URL: {}", e),
                ));
            }
        }

        if config.api.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "api.timeout_seconds",
                "timeout_seconds must be greater than 0",
            ));
        }

        if config.api.timeout_seconds > 300 {
            result.add_warning(ValidationWarning::new(
                "api.timeout_seconds",
                "timeout_seconds is very high (>300), a hung store will block the command",
            ));
        }

        if config.api.api_key.is_none() {
            result.add_warning(ValidationWarning::new(
                "api.api_key",
                "API key is not set, requests are sent unauthenticated",
            ));
        }
    }

    fn check_embed(config: &Config, result: &mut ValidationResult) {
        if config.embed.public_base_url.trim().is_empty() {
            result.add_error(ValidationError::new(
                "embed.public_base_url",
                "public_base_url cannot be empty",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
