use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub plain_mode: bool,
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
    pub audio_feedback: bool,
}

impl OutputPreferences {
    pub fn from_config(config: &Config) -> Self {
        Self {
            plain_mode: config.plain_mode,
            screen_reader_mode: config.screen_reader_mode,
            high_contrast_mode: config.high_contrast_mode,
            audio_feedback: config.audio_feedback,
        }
    }

    fn undecorated(&self) -> bool {
        self.plain_mode || self.screen_reader_mode
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn decoration(kind: MessageKind) -> Option<(&'static str, &'static str)> {
    match kind {
        MessageKind::Info => None,
        MessageKind::Success => Some(("✔", "OK:")),
        MessageKind::Warning => Some(("⚠", "WARNING:")),
        MessageKind::Error => Some(("✖", "ERROR:")),
    }
}

/// Renders `message` the way [`print`] would show it under `prefs`.
pub fn styled(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let Some((icon, plain_label)) = decoration(kind) else {
        return message.to_string();
    };

    if prefs.undecorated() {
        return format!("{plain_label} {message}");
    }

    let text = format!("{icon} {message}");
    if prefs.high_contrast_mode {
        return text.bold().to_string();
    }
    match kind {
        MessageKind::Success => text.green().to_string(),
        MessageKind::Warning => text.yellow().to_string(),
        MessageKind::Error => text.red().to_string(),
        MessageKind::Info => text,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = current_preferences();
    if prefs.audio_feedback && matches!(kind, MessageKind::Warning | MessageKind::Error) {
        print!("\x07");
    }
    println!("{}", styled(kind, message, &prefs));
}

/// Prints report and menu text verbatim.
pub fn line(text: impl fmt::Display) {
    println!("{text}");
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn blank_line() {
    println!();
}
