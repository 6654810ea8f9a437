// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.budgety", "Budgety", "budgety"));

pub const CURRENCY_ENV: &str = "BUDGETY_CURRENCY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub currency: String,
    /// Shown instead of a percentage while there is no income.
    pub placeholder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            placeholder: "---".into(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("settings.json"))
}

/// Effective settings: the file at `path` (or defaults) plus environment overrides.
pub fn load(path: &Path) -> Result<Settings> {
    let settings = load_from(path)?;
    Ok(with_overrides(settings, std::env::var(CURRENCY_ENV).ok()))
}

/// Reads settings from `path`, falling back to defaults when the file is absent.
pub fn load_from(path: &Path) -> Result<Settings> {
    let settings: Settings = if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read settings at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid settings file {}", path.display()))?
    } else {
        debug!(path = %path.display(), "no settings file, using defaults");
        Settings::default()
    };
    Ok(settings)
}

pub fn with_overrides(mut settings: Settings, currency: Option<String>) -> Settings {
    if let Some(ccy) = currency {
        if !ccy.trim().is_empty() {
            settings.currency = ccy.trim().to_uppercase();
        }
    }
    settings
}

pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config dir")?;
    }
    fs::write(path, serde_json::to_string_pretty(settings)?)
        .with_context(|| format!("Write settings to {}", path.display()))?;
    Ok(())
}
