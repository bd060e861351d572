use console::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Where progress and the final outcome are reported.
///
/// `status`, `success` and `failure` are console lines. `dialog` blocks
/// until the user acknowledges it and is only called once the run is over.
pub trait Notifier {
    fn status(&self, message: &str);
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
    fn dialog(&self, dialog: &Dialog);
}

fn print_line(symbol: &str, style: &Style, message: &str) {
    println!("{}", style.apply_to(format!("{symbol} {message}")));
}

/// Console-only notifier; dialogs are printed instead of shown.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn status(&self, message: &str) {
        print_line("🔄", &Style::new().cyan(), message);
    }

    fn success(&self, message: &str) {
        print_line("✅", &Style::new().green(), message);
    }

    fn failure(&self, message: &str) {
        print_line("❌", &Style::new().red(), message);
    }

    fn dialog(&self, dialog: &Dialog) {
        let style = match dialog.kind {
            DialogKind::Info => Style::new().bold(),
            DialogKind::Error => Style::new().bold().red(),
        };
        println!("{} {}", style.apply_to(&dialog.title), dialog.message);
    }
}

/// Console lines plus native message boxes.
#[derive(Debug, Default)]
pub struct DesktopNotifier {
    console: ConsoleNotifier,
}

impl Notifier for DesktopNotifier {
    fn status(&self, message: &str) {
        self.console.status(message);
    }

    fn success(&self, message: &str) {
        self.console.success(message);
    }

    fn failure(&self, message: &str) {
        self.console.failure(message);
    }

    fn dialog(&self, dialog: &Dialog) {
        let level = match dialog.kind {
            DialogKind::Info => rfd::MessageLevel::Info,
            DialogKind::Error => rfd::MessageLevel::Error,
        };
        log::debug!("showing {:?} dialog '{}'", dialog.kind, dialog.title);
        let _ = rfd::MessageDialog::new()
            .set_level(level)
            .set_title(dialog.title.as_str())
            .set_description(dialog.message.as_str())
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
