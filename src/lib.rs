pub mod core;

pub use crate::core::config::LauncherConfig;
pub use crate::core::error::{LauncherError, LauncherResult};
pub use crate::core::instance_runner::{InstanceRunner, LaunchCommand, SystemRunner};
pub use crate::core::launch_pipeline::{InstallLayout, LaunchPipeline, LaunchReport};
pub use crate::core::notifier::{ConsoleNotifier, DesktopNotifier, Dialog, DialogKind, Notifier};
pub use crate::core::runtime_manager::RuntimeInstall;
