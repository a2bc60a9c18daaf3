//! User-visible notices raised by failed loads.

use std::fmt;
use std::time::Instant;

use owo_colors::OwoColorize;

/// Message shown when an item listing cannot be loaded.
pub const LIST_LOAD_FAILED: &str = "Failed to load items";

/// Message shown when an item's detail cannot be loaded.
pub const DETAIL_LOAD_FAILED: &str = "Failed to load item details";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A short message for the user, with the underlying cause kept separately
/// so it can be shown on request.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub detail: Option<String>,
    pub level: NoticeLevel,
    pub raised_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            message: message.into(),
            detail: None,
            level,
            raised_at: Instant::now(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NoticeLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeLevel::Error)
    }

    pub fn with_detail(mut self, detail: impl fmt::Display) -> Self {
        self.detail = Some(detail.to_string());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl PartialEq for Notice {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message && self.detail == other.detail && self.level == other.level
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self.level {
            NoticeLevel::Info => self.message.cyan().to_string(),
            NoticeLevel::Warning => self.message.yellow().to_string(),
            NoticeLevel::Error => self.message.red().bold().to_string(),
        };
        match &self.detail {
            Some(detail) => write!(f, "{message} ({})", detail.dimmed()),
            None => write!(f, "{message}"),
        }
    }
}
