use std::path::{Path, PathBuf};

use super::java_resolver::HostPlatform;

pub fn java_bin_name(host: &HostPlatform) -> &'static str {
    if host.is_windows() {
        "java.exe"
    } else {
        "java"
    }
}

/// `<runtime>/bin/java[.exe]`
pub fn runtime_executable(runtime_dir: &Path, host: &HostPlatform) -> PathBuf {
    runtime_dir.join("bin").join(java_bin_name(host))
}
