use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Configuration file loader
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(config_path: Option<&str>) -> Self {
        Self {
            config_path: config_path.map(PathBuf::from),
        }
    }

    /// Load and parse the configuration file
    ///
    /// Falls back to defaults when no file exists in the standard locations.
    /// An explicitly requested file that is missing is an error.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.find_config_file()? else {
            return Ok(Config::default());
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        self.validate(&config)?;

        Ok(config)
    }

    /// Search for configuration file in standard locations
    fn find_config_file(&self) -> Result<Option<PathBuf>> {
        // If explicit path provided, use it
        if let Some(path) = &self.config_path {
            let expanded = expand_home(path)?;
            if expanded.exists() {
                return Ok(Some(expanded));
            }
            return Err(anyhow!("Config file not found: {}", path.display()));
        }

        let mut search_paths = vec![
            PathBuf::from("./storefront.yml"),
            PathBuf::from("./storefront.yaml"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            search_paths.push(config_dir.join("storefront").join("config.yml"));
            search_paths.push(config_dir.join("storefront").join("config.yaml"));
        }

        search_paths.push(PathBuf::from("/etc/storefront/config.yml"));
        search_paths.push(PathBuf::from("/etc/storefront/config.yaml"));

        Ok(search_paths.into_iter().find(|path| path.exists()))
    }

    /// Hard errors that make the configuration unusable
    fn validate(&self, config: &Config) -> Result<()> {
        if config.endpoints.products.trim().is_empty() {
            return Err(anyhow!("endpoints.products must not be empty"));
        }
        if config.endpoints.categories.trim().is_empty() {
            return Err(anyhow!("endpoints.categories must not be empty"));
        }
        if config.logging.enabled && config.logging.file.trim().is_empty() {
            return Err(anyhow!("logging.file must be set when logging is enabled"));
        }
        Ok(())
    }
}

/// Expand ~ to home directory
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    if let Some(stripped) = path_str.strip_prefix('~') {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Cannot determine home directory"))?;
        let rest = stripped.strip_prefix('/').unwrap_or(stripped);
        Ok(home.join(rest))
    } else {
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_explicit_file() {
        let file = write_config(
            "endpoints:\n  products: http://127.0.0.1:9000/p\n  categories: http://127.0.0.1:9000/c\n",
        );
        let loader = ConfigLoader::new(file.path().to_str());

        let config = loader.load().unwrap();
        assert_eq!(config.endpoints.products, "http://127.0.0.1:9000/p");
        assert_eq!(config.endpoints.categories, "http://127.0.0.1:9000/c");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let loader = ConfigLoader::new(Some("/nonexistent/storefront.yml"));
        let err = loader.load().unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let file = write_config("endpoints: [unclosed");
        let loader = ConfigLoader::new(file.path().to_str());
        let err = loader.load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let file = write_config("endpoints:\n  products: \"\"\n");
        let loader = ConfigLoader::new(file.path().to_str());
        let err = loader.load().unwrap_err();
        assert!(err.to_string().contains("endpoints.products"));
    }

    #[test]
    fn test_expand_home() {
        let plain = expand_home(Path::new("/var/log/storefront.log")).unwrap();
        assert_eq!(plain, PathBuf::from("/var/log/storefront.log"));

        if let Some(home) = dirs::home_dir() {
            let expanded = expand_home(Path::new("~/logs/app.log")).unwrap();
            assert_eq!(expanded, home.join("logs/app.log"));
        }
    }
}
