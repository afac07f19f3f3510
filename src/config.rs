// ⚙️ Driver configuration - defaults with environment overrides

use std::env;

pub const GRADE_ENV: &str = "ROSTER_GRADE";
pub const SUFFIX_ENV: &str = "ROSTER_SUFFIX";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Grade the selection step keeps
    pub target_grade: String,

    /// Suffix appended to every grade by the upgrade step
    pub upgrade_suffix: String,
}

impl DriverConfig {
    /// Defaults, overridden by `ROSTER_GRADE` / `ROSTER_SUFFIX` when set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DriverConfig::default();

        DriverConfig {
            target_grade: lookup(GRADE_ENV).unwrap_or(defaults.target_grade),
            upgrade_suffix: lookup(SUFFIX_ENV).unwrap_or(defaults.upgrade_suffix),
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            target_grade: "B".to_string(),
            upgrade_suffix: "+".to_string(),
        }
    }
}
