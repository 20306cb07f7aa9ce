//! Configuration management for pagemix.
//!
//! Parses `pagemix.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Confluence credentials support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `confluence.base_url`
//! - `confluence.email`
//! - `confluence.api_token`
//! - `confluence.space_key`
//!
//! ## Example
//!
//! ```toml
//! [confluence]
//! base_url = "${ATLASSIAN_BASE_URL}"
//! email = "${ATLASSIAN_EMAIL}"
//! api_token = "${ATLASSIAN_API_TOKEN}"
//! space_key = "DOCS"
//!
//! [diagrams]
//! language = "plantuml"
//! subtypes = ["uml", "mindmap", "gantt"]
//!
//! [extension]
//! label = "PlantUML for Confluence"
//! environment = "PRODUCTION"
//! ```

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override Confluence space key.
    pub space_key: Option<String>,
    /// Override diagram fence language.
    pub language: Option<String>,
    /// Override markdown macro name.
    pub macro_name: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pagemix.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Diagram detection configuration.
    pub diagrams: DiagramsConfig,
    /// Diagram rendering extension.
    pub extension: ExtensionDescriptor,
    /// Markdown macro configuration.
    pub markdown: MarkdownConfig,
    /// Confluence connection (optional section).
    pub confluence: Option<ConfluenceConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Diagram detection configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagramsConfig {
    /// Language tag of fenced diagram blocks.
    pub language: String,
    /// Subtype keywords for `@start<subtype>` markers.
    ///
    /// `None` keeps the built-in `PlantUML` list.
    pub subtypes: Option<Vec<String>>,
}

impl Default for DiagramsConfig {
    fn default() -> Self {
        Self {
            language: "plantuml".to_owned(),
            subtypes: None,
        }
    }
}

/// Confluence extension that renders diagram blocks.
///
/// Defaults to the "`PlantUML` for Confluence" Forge app. The values are
/// deployment constants: the converter reads them, never derives them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtensionDescriptor {
    /// Forge app and environment id pair (`<app-uuid>/<environment-uuid>`).
    pub namespace_id: String,
    /// Static module key within the app.
    pub extension_id: String,
    /// Display title shown by Confluence.
    pub label: String,
    /// Forge environment tag (`PRODUCTION`, `STAGING`, `DEVELOPMENT`).
    pub environment: String,
}

impl ExtensionDescriptor {
    /// Extension key: `<namespace_id>/static/<extension_id>`.
    #[must_use]
    pub fn extension_key(&self) -> String {
        format!("{}/static/{}", self.namespace_id, self.extension_id)
    }

    /// Atlassian resource identifier of the extension.
    #[must_use]
    pub fn extension_ari(&self) -> String {
        format!("ari:cloud:ecosystem::extension/{}", self.extension_key())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.namespace_id, "extension.namespace_id")?;
        require_non_empty(&self.extension_id, "extension.extension_id")?;
        require_non_empty(&self.label, "extension.label")?;
        require_non_empty(&self.environment, "extension.environment")?;
        Ok(())
    }
}

impl Default for ExtensionDescriptor {
    fn default() -> Self {
        Self {
            namespace_id:
                "f46085f3-e7c3-4cb5-ba7a-99a19de6e28c/31e52f94-5266-4b1d-a7c8-cef0486bc2e7"
                    .to_owned(),
            extension_id: "plantuml-for-confluence".to_owned(),
            label: "PlantUML for Confluence".to_owned(),
            environment: "PRODUCTION".to_owned(),
        }
    }
}

/// Markdown macro configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Name of the structured macro that renders markdown.
    pub macro_name: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            macro_name: "markdown".to_owned(),
        }
    }
}

/// Confluence configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfluenceConfig {
    /// Confluence site base URL (e.g. `https://acme.atlassian.net`).
    pub base_url: String,
    /// Account email for basic authentication.
    pub email: String,
    /// API token for basic authentication.
    pub api_token: String,
    /// Default space for new pages.
    #[serde(default)]
    pub space_key: Option<String>,
}

impl ConfluenceConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "confluence.base_url")?;
        require_http_url(&self.base_url, "confluence.base_url")?;
        require_non_empty(&self.email, "confluence.email")?;
        require_non_empty(&self.api_token, "confluence.api_token")?;
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`confluence.api_token`").
        field: String,
        /// Error message (e.g., "${`ATLASSIAN_API_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pagemix.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, then the result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(space_key) = &settings.space_key
            && let Some(confluence) = self.confluence.as_mut()
        {
            confluence.space_key = Some(space_key.clone());
        }
        if let Some(language) = &settings.language {
            self.diagrams.language.clone_from(language);
        }
        if let Some(macro_name) = &settings.macro_name {
            self.markdown.macro_name.clone_from(macro_name);
        }
    }

    /// Get validated Confluence configuration.
    ///
    /// Returns the Confluence config if the `[confluence]` section is present
    /// and all fields are valid. Use this instead of accessing the `confluence`
    /// field directly when the command requires Confluence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_confluence(&self) -> Result<&ConfluenceConfig, ConfigError> {
        let conf = self.confluence.as_ref().ok_or_else(|| {
            ConfigError::Validation("[confluence] section required in config".into())
        })?;
        conf.validate()?;
        Ok(conf)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// The `[confluence]` section is only checked by
    /// [`require_confluence`](Self::require_confluence), so offline conversion
    /// works with incomplete credentials.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_diagrams()?;
        self.extension.validate()?;
        require_non_empty(&self.markdown.macro_name, "markdown.macro_name")?;
        Ok(())
    }

    /// Validate diagrams configuration.
    fn validate_diagrams(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.diagrams.language, "diagrams.language")?;

        if let Some(subtypes) = &self.diagrams.subtypes {
            if subtypes.is_empty() {
                return Err(ConfigError::Validation(
                    "diagrams.subtypes cannot be an empty list".to_owned(),
                ));
            }
            // Same rule as the scanner: surrounding whitespace is ignored.
            if let Some(bad) = subtypes.iter().find(|s| {
                let keyword = s.trim();
                keyword.is_empty() || !keyword.chars().all(|c| c.is_ascii_alphanumeric())
            }) {
                return Err(ConfigError::Validation(format!(
                    "diagrams.subtypes entry '{bad}' must contain only ASCII letters and digits"
                )));
            }
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut confluence) = self.confluence {
            confluence.base_url = expand::expand_env(&confluence.base_url, "confluence.base_url")?;
            confluence.email = expand::expand_env(&confluence.email, "confluence.email")?;
            confluence.api_token =
                expand::expand_env(&confluence.api_token, "confluence.api_token")?;
            if let Some(space_key) = &confluence.space_key {
                confluence.space_key =
                    Some(expand::expand_env(space_key, "confluence.space_key")?);
            }
        }

        Ok(())
    }
}
