use std::str::FromStr;

use crate::error::BootError;

/// Startup settings. A CSR bundle has no process environment, so overrides
/// are read at build time from `CINEMA_MOUNT_ID`, `CINEMA_LOG_LEVEL` and
/// `CINEMA_TITLE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Id of the host-page element the app mounts into.
    pub mount_id: String,
    pub log_level: log::Level,
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mount_id: "app".to_string(),
            log_level: log::Level::Info,
            title: "Cinema".to_string(),
        }
    }
}

impl SiteConfig {
    /// Settings from the build environment. Each override that cannot be
    /// used leaves its default in place and is reported alongside.
    pub fn from_build_env() -> (Self, Vec<BootError>) {
        Self::from_lookup(|key| match key {
            "CINEMA_MOUNT_ID" => option_env!("CINEMA_MOUNT_ID"),
            "CINEMA_LOG_LEVEL" => option_env!("CINEMA_LOG_LEVEL"),
            "CINEMA_TITLE" => option_env!("CINEMA_TITLE"),
            _ => None,
        })
    }

    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> (Self, Vec<BootError>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();
        if let Some(id) = lookup("CINEMA_MOUNT_ID").filter(|s| !s.is_empty()) {
            config.mount_id = id.trim_start_matches('#').to_string();
        }
        if let Some(level) = lookup("CINEMA_LOG_LEVEL") {
            match log::Level::from_str(level) {
                Ok(level) => config.log_level = level,
                Err(_) => rejected.push(BootError::InvalidLogLevel(level.to_string())),
            }
        }
        if let Some(title) = lookup("CINEMA_TITLE") {
            config.title = title.to_string();
        }
        (config, rejected)
    }
}
