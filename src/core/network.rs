use std::path::Path;
use std::time::Duration;

use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use super::config::NetworkTuning;
use super::error::{LauncherError, LauncherResult};
use super::notifier::Notifier;

/// Plain HTTP GET to file. One attempt, no resume.
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(tuning: &NetworkTuning) -> LauncherResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(tuning.user_agent.as_str())
            .connect_timeout(Duration::from_secs(tuning.connect_timeout_secs))
            .build()
            .map_err(|error| LauncherError::network("<client>", error))?;
        Ok(Self { client })
    }

    /// Streams `url` into `destination`, replacing whatever was there.
    pub async fn download(
        &self,
        url: &str,
        destination: &Path,
        notifier: &dyn Notifier,
    ) -> LauncherResult<()> {
        notifier.status(&format!("Скачивание: {url}"));
        log::debug!("GET {url} -> {}", destination.display());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| LauncherError::network(url, error))?
            .error_for_status()
            .map_err(|error| LauncherError::network(url, error))?;

        let mut file = tokio::fs::File::create(destination)
            .await
            .map_err(|error| {
                LauncherError::network(
                    url,
                    format!("не удалось создать {}: {error}", destination.display()),
                )
            })?;

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|error| LauncherError::network(url, error))?;
            file.write_all(&chunk).await.map_err(|error| {
                LauncherError::network(
                    url,
                    format!("не удалось записать {}: {error}", destination.display()),
                )
            })?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(|error| {
            LauncherError::network(
                url,
                format!("не удалось записать {}: {error}", destination.display()),
            )
        })?;
        log::info!("downloaded {written} bytes from {url}");

        let file_name = destination
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| destination.display().to_string());
        notifier.success(&format!("Скачано: {file_name}"));
        Ok(())
    }
}
