//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/gentree/gentree.toml`
//! 3. Local config: `<project_dir>/.gentree.toml`
//! 4. Environment variables: `GENTREE_*` prefix

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::stats::Strategy;

/// How trees are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Every node, the root included, carries a connector
    #[default]
    Boxed,
    /// termtree listing, root printed bare
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Traversal families reported by `stats`
    pub strategy: Strategy,
    /// Listing style used by `render`
    pub style: RenderStyle,
    /// Highlight headings in terminal output
    pub color: bool,
    /// Upper bound on nodes of a generated tree
    pub max_nodes: usize,
    /// Upper bound on the depth of a generated tree; recursive walks need one frame per level
    pub max_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strategy: Strategy::Both,
            style: RenderStyle::Boxed,
            color: true,
            max_nodes: 100_000,
            max_depth: 2_000,
        }
    }
}

/// Get the XDG config directory for gentree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gentree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("gentree.toml"))
}

/// Directory searched for the local config: `project_dir`, else the current directory.
pub fn resolve_project_dir(project_dir: Option<&Path>) -> Option<PathBuf> {
    project_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok())
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".gentree.toml")
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Directory holding a local `.gentree.toml`, defaults to cwd
    pub fn load(project_dir: Option<&Path>) -> TreeResult<Self> {
        let global = global_config_path();
        let local = resolve_project_dir(project_dir).map(|dir| local_config_path(&dir));
        Self::load_from(global.as_deref(), local.as_deref(), None)
    }

    /// Load settings from explicit sources.
    ///
    /// `env` replaces the process environment when given; keys carry the
    /// `GENTREE_` prefix, e.g. `GENTREE_MAX_NODES`.
    #[instrument(level = "debug")]
    pub fn load_from(
        global: Option<&Path>,
        local: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> TreeResult<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("strategy", "both")
            .map_err(config_err)?
            .set_default("style", "boxed")
            .map_err(config_err)?
            .set_default("color", defaults.color)
            .map_err(config_err)?
            .set_default("max_nodes", defaults.max_nodes as i64)
            .map_err(config_err)?
            .set_default("max_depth", defaults.max_depth as i64)
            .map_err(config_err)?;

        for path in [global, local].into_iter().flatten() {
            if path.exists() {
                debug!("config file: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("GENTREE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> TreeResult<String> {
        toml::to_string_pretty(self).map_err(|e| TreeError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# gentree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/gentree/gentree.toml
#   Local:  <project_dir>/.gentree.toml
#   Env:    GENTREE_* environment variables (e.g. GENTREE_MAX_NODES=500)

# Traversals reported by `stats`: "both", "recursive" or "iterative"
# strategy = "both"

# Listing style of `render`: "boxed" or "compact"
# style = "boxed"

# Highlight headings in terminal output
# color = true

# Largest tree `render` and `stats` will generate
# max_nodes = 100000

# Deepest tree `render` and `stats` will generate (chain length, complete depth)
# max_depth = 2000
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> TreeError {
    TreeError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn no_env() -> Option<HashMap<String, String>> {
        Some(HashMap::new())
    }

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_from(None, None, no_env()).expect("load defaults");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_local_file_when_loading_then_overrides_global() {
        let dir = tempfile::tempdir().expect("tempdir");
        let global = dir.path().join("gentree.toml");
        let local = dir.path().join(".gentree.toml");
        fs::write(&global, "strategy = \"recursive\"\nmax_nodes = 10\n").unwrap();
        fs::write(&local, "strategy = \"iterative\"\n").unwrap();

        let settings = Settings::load_from(Some(global.as_path()), Some(local.as_path()), no_env()).unwrap();
        assert_eq!(settings.strategy, Strategy::Iterative);
        assert_eq!(settings.max_nodes, 10);
        assert_eq!(settings.style, RenderStyle::Boxed);
    }

    #[test]
    fn given_env_vars_when_loading_then_env_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let local = dir.path().join(".gentree.toml");
        fs::write(&local, "style = \"compact\"\ncolor = true\n").unwrap();

        let env = HashMap::from([
            ("GENTREE_COLOR".to_string(), "false".to_string()),
            ("GENTREE_MAX_NODES".to_string(), "42".to_string()),
        ]);
        let settings = Settings::load_from(None, Some(local.as_path()), Some(env)).unwrap();
        assert!(!settings.color);
        assert_eq!(settings.max_nodes, 42);
        assert_eq!(settings.style, RenderStyle::Compact);
    }

    #[test]
    fn given_no_project_dir_when_resolving_then_uses_cwd() {
        let cwd = std::env::current_dir().expect("cwd");
        assert_eq!(resolve_project_dir(None), Some(cwd));
        assert_eq!(
            resolve_project_dir(Some(Path::new("/tmp/project"))),
            Some(PathBuf::from("/tmp/project"))
        );
    }

    #[test]
    fn given_local_file_in_resolved_dir_when_loading_then_applies() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(local_config_path(dir.path()), "max_depth = 12\n").unwrap();

        let local = resolve_project_dir(Some(dir.path())).map(|d| local_config_path(&d));
        let settings = Settings::load_from(None, local.as_deref(), no_env()).unwrap();
        assert_eq!(settings.max_depth, 12);
    }

    #[test]
    fn given_missing_files_when_loading_then_ignores_them() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.toml");
        let settings = Settings::load_from(Some(missing.as_path()), Some(missing.as_path()), no_env()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_invalid_value_when_loading_then_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let local = dir.path().join(".gentree.toml");
        fs::write(&local, "strategy = \"sideways\"\n").unwrap();

        let err = Settings::load_from(None, Some(local.as_path()), no_env()).unwrap_err();
        assert!(matches!(err, TreeError::Config { .. }));
    }

    #[test]
    fn test_to_toml_round_trips_through_loader() {
        let dir = tempfile::tempdir().expect("tempdir");
        let local = dir.path().join(".gentree.toml");
        let settings = Settings {
            strategy: Strategy::Recursive,
            style: RenderStyle::Compact,
            color: false,
            max_nodes: 7,
            max_depth: 3,
        };
        fs::write(&local, settings.to_toml().unwrap()).unwrap();

        let loaded = Settings::load_from(None, Some(local.as_path()), no_env()).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_template_is_valid_toml() {
        let parsed: toml::Table = toml::from_str(&Settings::template()).unwrap();
        assert!(parsed.is_empty());
    }
}
