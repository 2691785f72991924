//! Configuration validation
//!
//! Hard errors are rejected by the loader; this module collects soft
//! warnings that are shown on startup without preventing the app from running.

mod checks;

use super::types::Config;

/// Result of configuration validation
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// Soft validation warnings shown on startup
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    InvalidEndpoint {
        field: String,
        url: String,
        reason: String,
    },
    ZeroTimeout,
    UnknownLogLevel {
        level: String,
    },
    DuplicateKeybinding {
        key: String,
        actions: Vec<String>,
    },
    InvalidKeybindingSyntax {
        key: String,
        reason: String,
    },
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::InvalidEndpoint { field, url, reason } => {
                write!(f, "{}: '{}' is not a usable URL: {}", field, url, reason)
            }
            ValidationWarning::ZeroTimeout => {
                write!(f, "http.timeout_secs is 0; every request will time out")
            }
            ValidationWarning::UnknownLogLevel { level } => {
                write!(f, "Unknown log level '{}', falling back to info", level)
            }
            ValidationWarning::DuplicateKeybinding { key, actions } => {
                write!(
                    f,
                    "Key '{}' bound to multiple actions: {}",
                    key,
                    actions.join(", ")
                )
            }
            ValidationWarning::InvalidKeybindingSyntax { key, reason } => {
                write!(f, "Invalid keybinding '{}': {}", key, reason)
            }
        }
    }
}

/// Configuration validator
pub struct ConfigValidator<'a> {
    pub(super) config: &'a Config,
    pub(super) result: ValidationResult,
}

impl<'a> ConfigValidator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            result: ValidationResult::default(),
        }
    }

    /// Run all validation checks
    pub fn validate(mut self) -> ValidationResult {
        self.check_endpoints();
        self.check_timeout();
        self.check_log_level();
        self.check_keybindings();
        self.result
    }
}
