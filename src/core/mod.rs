pub mod archive;
pub mod config;
pub mod error;
pub mod instance_runner;
pub mod java;
pub mod java_resolver;
pub mod launch_pipeline;
pub mod launcher;
pub mod network;
pub mod notifier;
pub mod runtime_manager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchState {
    Preparing,
    DownloadingArtifact,
    InstallingRuntime,
    Running,
    Finished,
    Failed,
}
