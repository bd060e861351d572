use std::fs;
use std::path::{Path, PathBuf};

use super::archive::ArchiveKind;
use super::config::LauncherConfig;
use super::error::{LauncherError, LauncherResult};
use super::instance_runner::InstanceRunner;
use super::launcher::launch_application;
use super::network::Fetcher;
use super::notifier::{Dialog, Notifier};
use super::runtime_manager::{RuntimeInstall, RuntimeManager};
use super::LaunchState;

pub const RUNTIME_DIR_NAME: &str = "jdk";
pub const RUNTIME_ARCHIVE_STEM: &str = "jdk_archive";

#[derive(Debug, Clone)]
pub struct InstallLayout {
    pub root: PathBuf,
    pub artifact: PathBuf,
    pub runtime: PathBuf,
}

impl InstallLayout {
    pub fn from_root(root: &Path, artifact_file_name: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            artifact: root.join(artifact_file_name),
            runtime: root.join(RUNTIME_DIR_NAME),
        }
    }

    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::from_root(&config.install_root, &config.artifact_file_name)
    }

    pub fn runtime_archive(&self, kind: ArchiveKind) -> PathBuf {
        self.root
            .join(format!("{RUNTIME_ARCHIVE_STEM}.{}", kind.extension()))
    }

    pub fn ensure(&self) -> LauncherResult<()> {
        fs::create_dir_all(&self.root).map_err(|error| {
            LauncherError::io(
                format!("Не удалось создать папку установки {}", self.root.display()),
                error,
            )
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub runtime: RuntimeInstall,
    pub exit_code: Option<i32>,
}

/// Download, install, launch, report. Each step runs only if the previous one succeeded.
pub struct LaunchPipeline<'a> {
    config: &'a LauncherConfig,
    layout: InstallLayout,
    notifier: &'a dyn Notifier,
    runner: &'a dyn InstanceRunner,
}

impl<'a> LaunchPipeline<'a> {
    pub fn new(
        config: &'a LauncherConfig,
        notifier: &'a dyn Notifier,
        runner: &'a dyn InstanceRunner,
    ) -> Self {
        Self {
            config,
            layout: InstallLayout::from_config(config),
            notifier,
            runner,
        }
    }

    pub async fn execute(&self) -> LauncherResult<LaunchReport> {
        self.enter(LaunchState::Preparing);
        self.layout.ensure()?;
        let fetcher = Fetcher::new(&self.config.network)?;

        self.enter(LaunchState::DownloadingArtifact);
        self.notifier
            .status(&format!("Скачивание {}...", self.config.artifact_file_name));
        fetcher
            .download(&self.config.artifact_url, &self.layout.artifact, self.notifier)
            .await?;

        self.enter(LaunchState::InstallingRuntime);
        let runtime = RuntimeManager::new(self.config, &self.layout)
            .ensure_runtime(&fetcher, self.notifier)
            .await?;

        self.enter(LaunchState::Running);
        let exit_code =
            launch_application(&self.layout, &self.config.host, self.runner, self.notifier)?;

        self.enter(LaunchState::Finished);
        Ok(LaunchReport { runtime, exit_code })
    }

    /// Reports the outcome on the console and in a dialog, and returns the process exit code.
    pub fn conclude(&self, outcome: &LauncherResult<LaunchReport>) -> i32 {
        match outcome {
            Ok(_) => {
                self.notifier.dialog(&Dialog::info(
                    "Успех",
                    format!("{} успешно запущен!", self.config.artifact_file_name),
                ));
                0
            }
            Err(error) => {
                self.enter(LaunchState::Failed);
                let message = error.to_string();
                self.notifier.failure(&message);
                self.notifier.dialog(&Dialog::error("Ошибка", message));
                1
            }
        }
    }

    pub async fn run(&self) -> i32 {
        let outcome = self.execute().await;
        self.conclude(&outcome)
    }

    fn enter(&self, state: LaunchState) {
        log::info!("launch state: {state:?}");
    }
}
