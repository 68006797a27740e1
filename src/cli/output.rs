use colored::Colorize;
use std::fmt;

/// Message categories printed by the tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
}

/// Writes user-facing notices to stdout.
#[derive(Clone, Copy, Debug)]
pub struct Output {
    color: bool,
}

impl Output {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn info(&self, message: impl fmt::Display) {
        println!("{}", self.format(MessageKind::Info, message));
    }

    pub fn success(&self, message: impl fmt::Display) {
        println!("{}", self.format(MessageKind::Success, message));
    }

    pub fn warning(&self, message: impl fmt::Display) {
        println!("{}", self.format(MessageKind::Warning, message));
    }

    pub fn format(&self, kind: MessageKind, message: impl fmt::Display) -> String {
        let label = match kind {
            MessageKind::Info => "INFO:",
            MessageKind::Success => "SUCCESS:",
            MessageKind::Warning => "WARNING:",
        };
        if !self.color {
            return format!("{label} {message}");
        }
        let label = match kind {
            MessageKind::Info => label.cyan(),
            MessageKind::Success => label.green().bold(),
            MessageKind::Warning => label.yellow().bold(),
        };
        format!("{label} {message}")
    }
}
