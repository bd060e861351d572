#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{Cursor, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use mcskill_launcher_lib::core::java_resolver::HostPlatform;
use mcskill_launcher_lib::{
    Dialog, InstanceRunner, LaunchCommand, LauncherConfig, LauncherResult, Notifier,
};
use zip::write::SimpleFileOptions;

pub const RUNTIME_FOLDER: &str = "zulu8.74.0.17-ca-fx-jdk8.0.392-linux_x64";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Status(String),
    Success(String),
    Failure(String),
    Dialog(Dialog),
}

#[derive(Default)]
pub struct RecordingNotifier {
    events: RefCell<Vec<Event>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn dialogs(&self) -> Vec<Dialog> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Dialog(dialog) => Some(dialog.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn status(&self, message: &str) {
        self.events.borrow_mut().push(Event::Status(message.to_string()));
    }

    fn success(&self, message: &str) {
        self.events.borrow_mut().push(Event::Success(message.to_string()));
    }

    fn failure(&self, message: &str) {
        self.events.borrow_mut().push(Event::Failure(message.to_string()));
    }

    fn dialog(&self, dialog: &Dialog) {
        self.events.borrow_mut().push(Event::Dialog(dialog.clone()));
    }
}

/// Records launch commands instead of spawning anything.
#[derive(Default)]
pub struct RecordingRunner {
    launched: RefCell<Vec<LaunchCommand>>,
}

impl RecordingRunner {
    pub fn launched(&self) -> Vec<LaunchCommand> {
        self.launched.borrow().clone()
    }
}

impl InstanceRunner for RecordingRunner {
    fn launch(&self, launch_command: &LaunchCommand) -> LauncherResult<Option<i32>> {
        self.launched.borrow_mut().push(launch_command.clone());
        Ok(Some(0))
    }
}

pub fn test_config(root: &Path, server_url: &str, host: HostPlatform) -> LauncherConfig {
    let mut config = LauncherConfig::new(root.to_path_buf(), host);
    config.artifact_url = format!("{server_url}/McSkill.jar");
    config.runtime_base_url = format!("{server_url}/zulu/bin");
    config
}

/// (path, contents, unix mode); `None` contents means a directory.
pub fn runtime_entries(folder: &str, java_name: &str) -> Vec<(String, Option<Vec<u8>>, u32)> {
    vec![
        (format!("{folder}/"), None, 0o755),
        (format!("{folder}/bin/"), None, 0o755),
        (
            format!("{folder}/bin/{java_name}"),
            Some(b"#!/bin/sh\necho fake java\n".to_vec()),
            0o755,
        ),
        (
            format!("{folder}/release"),
            Some(b"JAVA_VERSION=\"1.8.0_392\"\n".to_vec()),
            0o644,
        ),
        (
            format!("{folder}/jre/lib/rt.jar"),
            Some(vec![0x50, 0x4b, 0x03, 0x04, 0, 0, 0, 0]),
            0o644,
        ),
    ]
}

pub fn build_tar_gz(entries: &[(String, Option<Vec<u8>>, u32)]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for (path, contents, mode) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_mode(*mode);
        match contents {
            Some(data) => {
                header.set_entry_type(tar::EntryType::Regular);
                header.set_size(data.len() as u64);
                builder
                    .append_data(&mut header, path, data.as_slice())
                    .unwrap();
            }
            None => {
                header.set_entry_type(tar::EntryType::Directory);
                header.set_size(0);
                builder
                    .append_data(&mut header, path, std::io::empty())
                    .unwrap();
            }
        }
    }

    builder.into_inner().unwrap().finish().unwrap()
}

pub fn build_zip(entries: &[(String, Option<Vec<u8>>, u32)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));

    for (path, contents, mode) in entries {
        let options = SimpleFileOptions::default().unix_permissions(*mode);
        match contents {
            Some(data) => {
                writer.start_file(path.as_str(), options).unwrap();
                writer.write_all(data).unwrap();
            }
            None => {
                writer
                    .add_directory(path.trim_end_matches('/'), options)
                    .unwrap();
            }
        }
    }

    writer.finish().unwrap().into_inner()
}
