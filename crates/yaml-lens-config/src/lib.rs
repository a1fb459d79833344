use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use yaml_lens_syntax::DisplayClass;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "YAML_LENS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Start with every block folded.
    pub collapse_on_open: bool,
    pub theme: Theme,
}

/// One terminal color name per display class.
///
/// Names are whatever the renderer understands (`"red"`, `"lightblue"`,
/// `"#ff8800"`); unknown names fall back to the terminal default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub operator: String,
    pub keyword: String,
    pub string: String,
    pub number: String,
    pub comment: String,
    pub error: String,
    pub word: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            operator: "yellow".to_string(),
            keyword: "lightblue".to_string(),
            string: "green".to_string(),
            number: "magenta".to_string(),
            comment: "darkgray".to_string(),
            error: "red".to_string(),
            word: "white".to_string(),
        }
    }
}

impl Theme {
    pub fn color_for(&self, class: DisplayClass) -> &str {
        match class {
            DisplayClass::Operator => &self.operator,
            DisplayClass::Keyword => &self.keyword,
            DisplayClass::String => &self.string,
            DisplayClass::Number => &self.number,
            DisplayClass::Comment => &self.comment,
            DisplayClass::Error => &self.error,
            DisplayClass::Word => &self.word,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the config file, or the defaults when there is none.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// `$YAML_LENS_CONFIG` (shell-expanded) if set, else
    /// `~/.config/yaml-lens/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Ok(custom) = std::env::var(CONFIG_PATH_ENV)
            && !custom.is_empty()
        {
            return Self::expand_path(Path::new(&custom)).unwrap_or_else(|| PathBuf::from(custom));
        }
        let config_dir = shellexpand::tilde("~/.config/yaml-lens");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    // The only test touching `YAML_LENS_CONFIG`; keep every case here so the
    // env changes cannot race with each other.
    #[test]
    fn test_config_path_env_override() {
        unsafe {
            env::remove_var(CONFIG_PATH_ENV);
        }
        let default_path = Config::config_path();
        let path_str = default_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/yaml-lens/config.toml"));

        unsafe {
            env::set_var("YAML_LENS_TEST_DIR", "/test/override");
            env::set_var(CONFIG_PATH_ENV, "$YAML_LENS_TEST_DIR/custom.toml");
        }
        assert_eq!(
            Config::config_path(),
            PathBuf::from("/test/override/custom.toml")
        );

        unsafe {
            env::set_var(CONFIG_PATH_ENV, "~/yaml-lens-custom.toml");
        }
        let tilde_path = Config::config_path();
        assert!(!tilde_path.to_string_lossy().starts_with('~'));
        assert!(tilde_path.ends_with("yaml-lens-custom.toml"));

        unsafe {
            env::set_var(CONFIG_PATH_ENV, "");
        }
        assert_eq!(Config::config_path(), default_path);

        unsafe {
            env::remove_var(CONFIG_PATH_ENV);
            env::remove_var("YAML_LENS_TEST_DIR");
        }
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            collapse_on_open: true,
            theme: Theme {
                keyword: "#ff8800".to_string(),
                ..Theme::default()
            },
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
[theme]
comment = "gray"
"#,
        )
        .unwrap();

        assert!(!config.collapse_on_open);
        assert_eq!(config.theme.comment, "gray");
        assert_eq!(config.theme.keyword, Theme::default().keyword);
    }

    #[test]
    fn test_color_for_each_class() {
        let theme = Theme::default();
        assert_eq!(theme.color_for(DisplayClass::Error), "red");
        assert_eq!(theme.color_for(DisplayClass::String), "green");
        for class in DisplayClass::ALL {
            assert!(!theme.color_for(class).is_empty(), "{}", class.as_str());
        }
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("YAML_LENS_TEST_ROOT", "/test/env/path");
        }

        let expanded = Config::expand_path(Path::new("$YAML_LENS_TEST_ROOT/config.toml"));
        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/config.toml")));

        unsafe {
            env::remove_var("YAML_LENS_TEST_ROOT");
        }
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        assert_eq!(Config::expand_path(&path), Some(path));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "collapse_on_open = \"sometimes\"").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            collapse_on_open: true,
            theme: Theme::default(),
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}
