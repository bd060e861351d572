use std::path::PathBuf;

use thiserror::Error;

/// Every failure the launcher can surface to the user.
///
/// The `Display` text is what ends up on the console and in the error
/// dialog, so each message names the thing that went wrong.
#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Не удалось определить домашнюю папку пользователя")]
    HomeDirectoryUnavailable,

    #[error("Неподдерживаемая платформа: {os} ({arch})")]
    UnsupportedPlatform { os: String, arch: String },

    #[error("Не удалось скачать {url}: {message}")]
    Network { url: String, message: String },

    #[error("Неизвестный формат архива: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Элемент архива выходит за пределы папки назначения: {entry}")]
    UnsafeArchiveEntry { entry: String },

    #[error("Не удалось распаковать {}: {message}", path.display())]
    Archive { path: PathBuf, message: String },

    #[error("В {} не найдена папка JDK с префиксом '{prefix}'", root.display())]
    RuntimeFolderMissing { prefix: String, root: PathBuf },

    #[error("Не найден исполняемый файл Java: {}", path.display())]
    MissingExecutable { path: PathBuf },

    #[error("Не удалось запустить {}: {message}", program.display())]
    LaunchFailed { program: PathBuf, message: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl LauncherError {
    pub(crate) fn network(url: &str, cause: impl std::fmt::Display) -> Self {
        Self::Network {
            url: url.to_string(),
            message: cause.to_string(),
        }
    }

    pub(crate) fn archive(path: &std::path::Path, cause: impl std::fmt::Display) -> Self {
        Self::Archive {
            path: path.to_path_buf(),
            message: cause.to_string(),
        }
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

pub type LauncherResult<T> = Result<T, LauncherError>;
