use std::process::ExitCode;

use mcskill_launcher_lib::{
    DesktopNotifier, Dialog, LauncherConfig, LaunchPipeline, Notifier, SystemRunner,
};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let notifier = DesktopNotifier::default();
    let config = match LauncherConfig::from_home() {
        Ok(config) => config,
        Err(error) => {
            let message = error.to_string();
            notifier.failure(&message);
            notifier.dialog(&Dialog::error("Ошибка", message));
            return ExitCode::FAILURE;
        }
    };
    if let Ok(json) = serde_json::to_string(&config) {
        log::debug!("launcher config: {json}");
    }

    let runner = SystemRunner;
    let pipeline = LaunchPipeline::new(&config, &notifier, &runner);

    // Dialogs block; show them only once the async runtime has shut down.
    let outcome = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime.block_on(pipeline.execute()),
        Err(error) => Err(mcskill_launcher_lib::LauncherError::io(
            "Не удалось запустить асинхронную среду",
            error,
        )),
    };

    match pipeline.conclude(&outcome) {
        0 => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
