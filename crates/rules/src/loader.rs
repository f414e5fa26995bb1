//! Filesystem rule loader with hot-reload via `notify` watcher.
//!
//! Scans a directory (recursively) for `*.yml` / `*.yaml` files, each
//! holding one `RuleDefinition`, and assembles them into a
//! `RuleConfiguration`. Per-file parse errors are reported but do not
//! abort the scan. The watcher rescans on any rule-file change and swaps
//! the engine's snapshot; a failed rescan keeps the previous snapshot.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{info, warn};

use sift_core::ConfigError;

use crate::engine::RuleEngine;
use crate::schema::{RuleConfiguration, RuleDefinition};

/// Errors raised while loading rule files or starting the watcher.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("notify watcher error: {0}")]
    Notify(#[from] notify::Error),
}

/// Outcome of loading a single rule file.
#[derive(Debug)]
pub struct LoadOutcome {
    pub path: PathBuf,
    pub status: LoadStatus,
}

/// Status of a single file load attempt.
#[derive(Debug)]
pub enum LoadStatus {
    Loaded { rule_id: String },
    Skipped { reason: String },
    Failed { error: String },
}

/// Filesystem-backed rule configuration source.
pub struct RuleLoader {
    rules_dir: PathBuf,
    /// Active watcher, held to keep it alive.
    _watcher: Option<RecommendedWatcher>,
}

impl RuleLoader {
    pub fn new(rules_dir: PathBuf) -> Self {
        Self {
            rules_dir,
            _watcher: None,
        }
    }

    pub fn rules_dir(&self) -> &Path {
        &self.rules_dir
    }

    /// Scan the rules directory and build a configuration from every
    /// parseable rule file.
    ///
    /// Dotfiles and non-YAML files are skipped; parse failures are
    /// reported per file without aborting the scan.
    pub fn load_all(&self) -> Result<(RuleConfiguration, Vec<LoadOutcome>), LoadError> {
        let mut rules = Vec::new();
        let mut outcomes = Vec::new();
        scan_dir(&self.rules_dir, &mut rules, &mut outcomes)?;
        Ok((RuleConfiguration::new(rules), outcomes))
    }

    /// Parse a single YAML file into a rule definition.
    pub fn load_file(path: &Path) -> Result<RuleDefinition, LoadError> {
        let contents = fs::read_to_string(path)?;
        let rule: RuleDefinition = serde_yaml::from_str(&contents)?;
        if rule.id.is_empty() {
            return Err(ConfigError::EmptyRuleId.into());
        }
        Ok(rule)
    }

    /// Start a filesystem watcher that rescans the rules directory on any
    /// rule-file change and reloads the engine.
    ///
    /// A rescan that fails to parse or validate leaves the engine on its
    /// previous snapshot.
    pub fn watch(&mut self, engine: Arc<RuleEngine>) -> Result<(), LoadError> {
        let rules_dir = self.rules_dir.clone();

        let mut watcher = notify::recommended_watcher(
            move |res: std::result::Result<notify::Event, notify::Error>| match res {
                Ok(event) => {
                    if event.paths.iter().any(|p| is_rule_file(p)) {
                        rescan_and_reload(&rules_dir, &engine);
                    }
                }
                Err(e) => warn!(error = %e, "filesystem watcher error"),
            },
        )?;

        watcher.watch(&self.rules_dir, RecursiveMode::Recursive)?;
        info!(path = %self.rules_dir.display(), "watching rules directory for changes");
        self._watcher = Some(watcher);
        Ok(())
    }
}

fn is_rule_file(path: &Path) -> bool {
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "yml" || e == "yaml")
        .unwrap_or(false);
    let is_dotfile = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(true);
    is_yaml && !is_dotfile
}

fn scan_dir(
    dir: &Path,
    rules: &mut Vec<RuleDefinition>,
    outcomes: &mut Vec<LoadOutcome>,
) -> Result<(), LoadError> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "failed to read rules directory");
            return Ok(());
        }
    };

    for entry in entries {
        let path = entry?.path();

        if path.is_dir() {
            scan_dir(&path, rules, outcomes)?;
            continue;
        }

        if !is_rule_file(&path) {
            outcomes.push(LoadOutcome {
                path,
                status: LoadStatus::Skipped {
                    reason: "not a rule file".to_string(),
                },
            });
            continue;
        }

        match RuleLoader::load_file(&path) {
            Ok(rule) => {
                info!(rule_id = %rule.id, path = %path.display(), "loaded rule");
                outcomes.push(LoadOutcome {
                    path,
                    status: LoadStatus::Loaded {
                        rule_id: rule.id.clone(),
                    },
                });
                rules.push(rule);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load rule file");
                outcomes.push(LoadOutcome {
                    path,
                    status: LoadStatus::Failed {
                        error: e.to_string(),
                    },
                });
            }
        }
    }

    Ok(())
}

fn rescan_and_reload(rules_dir: &Path, engine: &RuleEngine) {
    let loader = RuleLoader::new(rules_dir.to_path_buf());
    match loader.load_all() {
        Ok((config, _)) => {
            let rules = config.rules.len();
            match engine.reload(config) {
                Ok(()) => info!(rules, "hot-reloaded rule configuration"),
                Err(e) => {
                    warn!(error = %e, "rule reload rejected, keeping previous configuration")
                }
            }
        }
        Err(e) => warn!(error = %e, "rescan failed, keeping previous configuration"),
    }
}
