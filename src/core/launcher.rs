use super::error::{LauncherError, LauncherResult};
use super::instance_runner::{InstanceRunner, LaunchCommand};
use super::java::runtime_executable;
use super::java_resolver::HostPlatform;
use super::launch_pipeline::InstallLayout;
use super::notifier::Notifier;

/// Builds the `java -jar` command for the installed runtime.
///
/// Fails with `MissingExecutable` when the runtime has no `bin/java`, which
/// is checked before anything is spawned.
pub fn prepare_launch(layout: &InstallLayout, host: &HostPlatform) -> LauncherResult<LaunchCommand> {
    let java_path = runtime_executable(&layout.runtime, host);
    if !java_path.exists() {
        return Err(LauncherError::MissingExecutable { path: java_path });
    }

    Ok(LaunchCommand {
        java_path,
        jar_path: layout.artifact.clone(),
    })
}

pub fn launch_application(
    layout: &InstallLayout,
    host: &HostPlatform,
    runner: &dyn InstanceRunner,
    notifier: &dyn Notifier,
) -> LauncherResult<Option<i32>> {
    let command = prepare_launch(layout, host)?;
    notifier.status(&format!("Запуск {}...", file_label(&command)));
    log::info!(
        "running {} -jar {}",
        command.java_path.display(),
        command.jar_path.display()
    );
    runner.launch(&command)
}

fn file_label(command: &LaunchCommand) -> String {
    command
        .jar_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| command.jar_path.display().to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;

    #[test]
    fn runtime_without_java_is_reported_with_expected_path() {
        let dir = tempfile::tempdir().unwrap();
        let layout = InstallLayout::from_root(dir.path(), "McSkill.jar");
        fs::create_dir_all(layout.runtime.join("bin")).unwrap();

        let host = HostPlatform::new("linux", "x86_64");
        match prepare_launch(&layout, &host) {
            Err(LauncherError::MissingExecutable { path }) => {
                assert_eq!(path, layout.runtime.join("bin").join("java"));
            }
            other => panic!("expected MissingExecutable, got {other:?}"),
        }
    }

    #[test]
    fn windows_hosts_look_for_java_exe() {
        let dir = tempfile::tempdir().unwrap();
        let layout = InstallLayout::from_root(dir.path(), "McSkill.jar");
        let bin = layout.runtime.join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("java.exe"), b"MZ").unwrap();

        let command = prepare_launch(&layout, &HostPlatform::new("windows", "x86_64")).unwrap();
        assert_eq!(command.java_path, bin.join("java.exe"));
        assert_eq!(command.jar_path, dir.path().join("McSkill.jar"));
        assert!(prepare_launch(&layout, &HostPlatform::new("linux", "x86_64")).is_err());
        assert_eq!(file_label(&command), "McSkill.jar");
        assert!(Path::new(&command.java_path).is_file());
    }
}
