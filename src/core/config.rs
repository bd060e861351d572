use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::{LauncherError, LauncherResult};
use super::java_resolver::HostPlatform;

pub const INSTALL_DIR_NAME: &str = "McSkill";
pub const ARTIFACT_URL: &str = "https://mcskill.net/McSkill.jar";
pub const ARTIFACT_FILE_NAME: &str = "McSkill.jar";
pub const RUNTIME_BASE_URL: &str = "https://cdn.azul.com/zulu/bin";
pub const RUNTIME_RELEASE: &str = "zulu8.74.0.17-ca-fx-jdk8.0.392";
pub const RUNTIME_FOLDER_PREFIX: &str = "zulu";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkTuning {
    /// Some hosts reject the default client identifier, so requests carry a browser-like one.
    pub user_agent: String,
    pub connect_timeout_secs: u64,
}

impl Default for NetworkTuning {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".to_string(),
            connect_timeout_secs: 12,
        }
    }
}

/// Everything the launcher needs to know about where things live.
///
/// Built once in `main` and passed down; tests build their own with a
/// temporary install root and a mock server URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherConfig {
    pub install_root: PathBuf,
    pub artifact_url: String,
    pub artifact_file_name: String,
    pub runtime_base_url: String,
    pub runtime_release: String,
    pub runtime_folder_prefix: String,
    pub host: HostPlatform,
    pub network: NetworkTuning,
}

impl LauncherConfig {
    pub fn new(install_root: PathBuf, host: HostPlatform) -> Self {
        Self {
            install_root,
            artifact_url: ARTIFACT_URL.to_string(),
            artifact_file_name: ARTIFACT_FILE_NAME.to_string(),
            runtime_base_url: RUNTIME_BASE_URL.to_string(),
            runtime_release: RUNTIME_RELEASE.to_string(),
            runtime_folder_prefix: RUNTIME_FOLDER_PREFIX.to_string(),
            host,
            network: NetworkTuning::default(),
        }
    }

    pub fn from_home() -> LauncherResult<Self> {
        let home = dirs::home_dir().ok_or(LauncherError::HomeDirectoryUnavailable)?;
        Ok(Self::new(home.join(INSTALL_DIR_NAME), HostPlatform::detect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_mcskill_and_azul() {
        let config = LauncherConfig::new(PathBuf::from("/home/player/McSkill"), HostPlatform::detect());
        assert_eq!(config.artifact_url, "https://mcskill.net/McSkill.jar");
        assert_eq!(config.artifact_file_name, "McSkill.jar");
        assert_eq!(config.runtime_folder_prefix, "zulu");
        assert_eq!(config.network.user_agent, "Mozilla/5.0");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let config = LauncherConfig::new(PathBuf::from("/srv/mc"), HostPlatform::new("linux", "x86_64"));
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["installRoot"], "/srv/mc");
        assert_eq!(value["network"]["connectTimeoutSecs"], 12);
        assert_eq!(value["host"]["os"], "linux");
    }
}
