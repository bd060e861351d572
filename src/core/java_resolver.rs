use serde::{Deserialize, Serialize};

use super::config::LauncherConfig;
use super::error::{LauncherError, LauncherResult};

/// Raw operating system and machine names of the host.
///
/// Kept unnormalised so that an unknown platform is only rejected when a
/// runtime actually has to be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostPlatform {
    pub os: String,
    pub arch: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeOs {
    Windows,
    Linux,
    MacOs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeArch {
    X64,
    Aarch64,
}

impl HostPlatform {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    pub fn detect() -> Self {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }

    pub fn is_windows(&self) -> bool {
        matches!(self.runtime_os(), Ok(RuntimeOs::Windows))
    }

    pub fn runtime_os(&self) -> LauncherResult<RuntimeOs> {
        match self.os.to_ascii_lowercase().as_str() {
            "windows" => Ok(RuntimeOs::Windows),
            "linux" => Ok(RuntimeOs::Linux),
            "macos" | "darwin" => Ok(RuntimeOs::MacOs),
            _ => Err(self.unsupported()),
        }
    }

    pub fn runtime_arch(&self) -> LauncherResult<RuntimeArch> {
        match self.arch.as_str() {
            "x86_64" | "AMD64" | "amd64" => Ok(RuntimeArch::X64),
            "aarch64" | "arm64" => Ok(RuntimeArch::Aarch64),
            _ => Err(self.unsupported()),
        }
    }

    fn unsupported(&self) -> LauncherError {
        LauncherError::UnsupportedPlatform {
            os: self.os.clone(),
            arch: self.arch.clone(),
        }
    }
}

impl RuntimeOs {
    pub fn platform_tag(self) -> &'static str {
        match self {
            Self::Windows => "win",
            Self::Linux => "linux",
            Self::MacOs => "macosx",
        }
    }

    pub fn archive_extension(self) -> &'static str {
        match self {
            Self::Windows => "zip",
            Self::Linux | Self::MacOs => "tar.gz",
        }
    }
}

impl RuntimeArch {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::X64 => "x64",
            Self::Aarch64 => "aarch64",
        }
    }
}

/// Builds the download URL of the pinned runtime build for the configured host.
pub fn resolve_runtime_url(config: &LauncherConfig) -> LauncherResult<String> {
    let arch = config.host.runtime_arch()?;
    let os = config.host.runtime_os()?;

    Ok(format!(
        "{}/{}-{}_{}.{}",
        config.runtime_base_url.trim_end_matches('/'),
        config.runtime_release,
        os.platform_tag(),
        arch.suffix(),
        os.archive_extension()
    ))
}
