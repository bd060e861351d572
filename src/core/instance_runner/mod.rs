use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};

use super::error::{LauncherError, LauncherResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchCommand {
    pub java_path: PathBuf,
    pub jar_path: PathBuf,
}

impl LaunchCommand {
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.java_path);
        command.arg("-jar").arg(&self.jar_path);
        command
    }
}

/// Starts the application and blocks until it exits.
///
/// Returns the child's exit code when it has one; the caller does not
/// treat a non-zero code as a failure.
pub trait InstanceRunner {
    fn launch(&self, launch_command: &LaunchCommand) -> LauncherResult<Option<i32>>;
}

/// Runs the child with the launcher's own stdin, stdout and stderr.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl InstanceRunner for SystemRunner {
    fn launch(&self, launch_command: &LaunchCommand) -> LauncherResult<Option<i32>> {
        let status = launch_command
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|error| LauncherError::LaunchFailed {
                program: launch_command.java_path.clone(),
                message: error.to_string(),
            })?;

        if status.success() {
            log::info!("{} exited cleanly", launch_command.jar_path.display());
        } else {
            log::warn!("{} exited with {status}", launch_command.jar_path.display());
        }
        Ok(status.code())
    }
}
