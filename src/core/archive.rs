use std::fs;
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use tar::Archive;

use super::error::{LauncherError, LauncherResult};
use super::notifier::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    TarGz,
}

impl ArchiveKind {
    pub fn from_path(path: &Path) -> LauncherResult<Self> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if name.ends_with(".zip") {
            Ok(Self::Zip)
        } else if name.ends_with(".tar.gz") {
            Ok(Self::TarGz)
        } else {
            Err(LauncherError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::TarGz => "tar.gz",
        }
    }
}

pub fn extract_archive(
    archive_path: &Path,
    destination: &Path,
    notifier: &dyn Notifier,
) -> LauncherResult<()> {
    let kind = ArchiveKind::from_path(archive_path)?;
    notifier.status(&format!("Распаковка: {}", archive_path.display()));
    log::debug!(
        "unpacking {:?} archive {} into {}",
        kind,
        archive_path.display(),
        destination.display()
    );

    fs::create_dir_all(destination).map_err(|error| {
        LauncherError::io(
            format!("Не удалось создать {}", destination.display()),
            error,
        )
    })?;

    match kind {
        ArchiveKind::Zip => unpack_zip(archive_path, destination)?,
        ArchiveKind::TarGz => unpack_tar_gz(archive_path, destination)?,
    }

    notifier.success("Распаковка завершена");
    Ok(())
}

/// Rejects absolute paths and `..` components so nothing lands outside the destination.
fn sanitize_entry_path(raw: &Path) -> LauncherResult<PathBuf> {
    let mut clean = PathBuf::new();
    for component in raw.components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(LauncherError::UnsafeArchiveEntry {
                    entry: raw.display().to_string(),
                })
            }
        }
    }
    Ok(clean)
}

/// Fails when an already extracted symlink would carry `relative` outside `destination`.
fn ensure_parent_inside(destination: &Path, relative: &Path, raw: &Path) -> LauncherResult<()> {
    let escape = || LauncherError::UnsafeArchiveEntry {
        entry: raw.display().to_string(),
    };
    let root = destination.canonicalize().map_err(|error| {
        LauncherError::io(format!("Не удалось открыть {}", destination.display()), error)
    })?;

    let mut current = relative.parent();
    while let Some(ancestor) = current {
        if ancestor.as_os_str().is_empty() {
            break;
        }
        let candidate = destination.join(ancestor);
        if fs::symlink_metadata(&candidate).is_ok() {
            let resolved = candidate.canonicalize().map_err(|_| escape())?;
            if !resolved.starts_with(&root) {
                return Err(escape());
            }
            break;
        }
        current = ancestor.parent();
    }

    Ok(())
}

fn unpack_zip(archive_path: &Path, destination: &Path) -> LauncherResult<()> {
    let file = fs::File::open(archive_path)
        .map_err(|error| LauncherError::archive(archive_path, error))?;
    let mut zip =
        zip::ZipArchive::new(file).map_err(|error| LauncherError::archive(archive_path, error))?;

    for i in 0..zip.len() {
        let mut entry = zip
            .by_index(i)
            .map_err(|error| LauncherError::archive(archive_path, error))?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(LauncherError::UnsafeArchiveEntry {
                entry: entry.name().to_string(),
            });
        };
        if relative.as_os_str().is_empty() {
            continue;
        }

        let target = destination.join(&relative);
        if entry.is_dir() {
            fs::create_dir_all(&target)
                .map_err(|error| LauncherError::archive(archive_path, error))?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .map_err(|error| LauncherError::archive(archive_path, error))?;
        }
        let mut out =
            fs::File::create(&target).map_err(|error| LauncherError::archive(archive_path, error))?;
        std::io::copy(&mut entry, &mut out)
            .map_err(|error| LauncherError::archive(archive_path, error))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&target, fs::Permissions::from_mode(mode & 0o7777))
                    .map_err(|error| LauncherError::archive(archive_path, error))?;
            }
        }
    }

    Ok(())
}

fn unpack_tar_gz(archive_path: &Path, destination: &Path) -> LauncherResult<()> {
    let file = fs::File::open(archive_path)
        .map_err(|error| LauncherError::archive(archive_path, error))?;
    let mut archive = Archive::new(GzDecoder::new(file));
    archive.set_preserve_permissions(true);

    let entries = archive
        .entries()
        .map_err(|error| LauncherError::archive(archive_path, error))?;
    for entry in entries {
        let mut entry = entry.map_err(|error| LauncherError::archive(archive_path, error))?;
        let raw_path = entry
            .path()
            .map_err(|error| LauncherError::archive(archive_path, error))?
            .into_owned();
        let relative = sanitize_entry_path(&raw_path)?;
        if relative.as_os_str().is_empty() {
            continue;
        }
        ensure_parent_inside(destination, &relative, &raw_path)?;

        let unpacked = entry
            .unpack_in(destination)
            .map_err(|error| LauncherError::archive(archive_path, error))?;
        if !unpacked {
            return Err(LauncherError::UnsafeArchiveEntry {
                entry: raw_path.display().to_string(),
            });
        }
    }

    Ok(())
}
