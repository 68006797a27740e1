use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::{Result, VacationError};

const SETTINGS_ENV: &str = "VACATION_CORE_SETTINGS";
const HOME_ENV: &str = "VACATION_CORE_HOME";
const APP_DIR: &str = "vacation_core";
const SETTINGS_FILE: &str = "settings.json";

/// File locations and output preferences shared by the three tools.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding one `<year>/` folder per year.
    pub ledger_root: PathBuf,
    pub legal_holidays: PathBuf,
    pub school_holidays: PathBuf,
    pub entitlement: PathBuf,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ledger_root: PathBuf::from("."),
            legal_holidays: PathBuf::from("data/legal_holidays.csv"),
            school_holidays: PathBuf::from("data/school_vacations.csv"),
            entitlement: PathBuf::from("data/vacation_entitlement.json"),
            color: true,
        }
    }
}

/// Locates and loads [`Settings`].
pub struct SettingsManager {
    path: PathBuf,
}

impl SettingsManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `explicit` when given, then `VACATION_CORE_SETTINGS`, then the
    /// platform config directory.
    pub fn locate(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::new(path);
        }
        if let Some(custom) = env::var_os(SETTINGS_ENV) {
            return Self::new(custom);
        }
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Missing files give the defaults; `VACATION_CORE_HOME` overrides the
    /// ledger root either way.
    pub fn load(&self) -> Result<Settings> {
        let mut settings = if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| {
                VacationError::Config(format!("{}: {err}", self.path.display()))
            })?
        } else {
            Settings::default()
        };
        if let Some(home) = env::var_os(HOME_ENV) {
            settings.ledger_root = PathBuf::from(home);
        }
        Ok(settings)
    }
}
