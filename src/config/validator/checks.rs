//! Validation check implementations

use super::{ConfigValidator, ValidationWarning};
use crate::keybindings::KeyBinding;

impl<'a> ConfigValidator<'a> {
    /// Endpoints must be absolute http(s) URLs
    pub(super) fn check_endpoints(&mut self) {
        let endpoints = &self.config.endpoints;
        let fields = [
            ("endpoints.products", &endpoints.products),
            ("endpoints.categories", &endpoints.categories),
        ];

        for (field, url) in fields {
            let reason = match reqwest::Url::parse(url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => continue,
                Ok(parsed) => format!("unsupported scheme '{}'", parsed.scheme()),
                Err(e) => e.to_string(),
            };

            self.result.add_warning(ValidationWarning::InvalidEndpoint {
                field: field.to_string(),
                url: url.clone(),
                reason,
            });
        }
    }

    pub(super) fn check_timeout(&mut self) {
        if self.config.http.timeout_secs == 0 {
            self.result.add_warning(ValidationWarning::ZeroTimeout);
        }
    }

    pub(super) fn check_log_level(&mut self) {
        let level = &self.config.logging.level;
        if crate::logging::parse_log_level(level).is_err() {
            self.result.add_warning(ValidationWarning::UnknownLogLevel {
                level: level.clone(),
            });
        }
    }

    /// Report unparseable keys and keys remapped to more than one action
    pub(super) fn check_keybindings(&mut self) {
        let Some(keybindings) = &self.config.keybindings else {
            return;
        };

        let mut usage: Vec<(KeyBinding, String, Vec<String>)> = Vec::new();

        for (action, key) in keybindings.entries() {
            match KeyBinding::parse(key) {
                Ok(binding) => {
                    match usage.iter_mut().find(|(existing, _, _)| existing == &binding) {
                        Some((_, _, actions)) => actions.push(action.to_string()),
                        None => usage.push((binding, key.to_string(), vec![action.to_string()])),
                    }
                }
                Err(reason) => {
                    self.result
                        .add_warning(ValidationWarning::InvalidKeybindingSyntax {
                            key: format!("{} = {}", action, key),
                            reason,
                        });
                }
            }
        }

        for (_, key, actions) in usage {
            if actions.len() > 1 {
                self.result
                    .add_warning(ValidationWarning::DuplicateKeybinding { key, actions });
            }
        }
    }
}
