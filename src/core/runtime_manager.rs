use std::fs;
use std::path::{Path, PathBuf};

use super::archive::{extract_archive, ArchiveKind};
use super::config::LauncherConfig;
use super::error::{LauncherError, LauncherResult};
use super::java_resolver::resolve_runtime_url;
use super::launch_pipeline::InstallLayout;
use super::network::Fetcher;
use super::notifier::Notifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeInstall {
    AlreadyInstalled,
    Installed { url: String },
}

pub struct RuntimeManager<'a> {
    config: &'a LauncherConfig,
    layout: &'a InstallLayout,
}

impl<'a> RuntimeManager<'a> {
    pub fn new(config: &'a LauncherConfig, layout: &'a InstallLayout) -> Self {
        Self { config, layout }
    }

    /// Installs the runtime unless `<root>/jdk` is already there.
    ///
    /// Presence of the folder is the only check; its contents are trusted.
    pub async fn ensure_runtime(
        &self,
        fetcher: &Fetcher,
        notifier: &dyn Notifier,
    ) -> LauncherResult<RuntimeInstall> {
        if self.layout.runtime.exists() {
            notifier.success("JDK уже установлен");
            return Ok(RuntimeInstall::AlreadyInstalled);
        }

        let url = resolve_runtime_url(self.config)?;
        let kind = ArchiveKind::from_path(Path::new(&url))?;
        let archive_path = self.layout.runtime_archive(kind);

        fetcher.download(&url, &archive_path, notifier).await?;
        extract_archive(&archive_path, &self.layout.root, notifier)?;

        let extracted = find_runtime_folder(&self.layout.root, &self.config.runtime_folder_prefix)?;
        if let Some(folder) = &extracted {
            log::debug!(
                "moving {} -> {}",
                folder.display(),
                self.layout.runtime.display()
            );
            fs::rename(folder, &self.layout.runtime).map_err(|error| {
                LauncherError::io(
                    format!(
                        "Не удалось переместить {} в {}",
                        folder.display(),
                        self.layout.runtime.display()
                    ),
                    error,
                )
            })?;
        }

        fs::remove_file(&archive_path).map_err(|error| {
            LauncherError::io(
                format!("Не удалось удалить {}", archive_path.display()),
                error,
            )
        })?;

        if extracted.is_none() {
            return Err(LauncherError::RuntimeFolderMissing {
                prefix: self.config.runtime_folder_prefix.clone(),
                root: self.layout.root.clone(),
            });
        }

        Ok(RuntimeInstall::Installed { url })
    }
}

/// First top-level directory (by name) whose name starts with `prefix`, ignoring case.
fn find_runtime_folder(root: &Path, prefix: &str) -> LauncherResult<Option<PathBuf>> {
    let prefix = prefix.to_lowercase();
    let entries = fs::read_dir(root).map_err(|error| {
        LauncherError::io(format!("Не удалось прочитать {}", root.display()), error)
    })?;

    let mut candidates = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_lowercase();
        let path = entry.path();
        if name.starts_with(&prefix) && path.is_dir() {
            candidates.push(path);
        }
    }
    candidates.sort();

    Ok(candidates.into_iter().next())
}
