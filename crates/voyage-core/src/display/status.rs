//! Notices shown after an operation.

use std::fmt;

use crate::error::TripError;

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A dismissible one-line message about the last operation.
///
/// Failures of the catalog provider or the itinerary generator are reported
/// as notices while the session keeps its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// Suggested next action, if any
    pub hint: Option<String>,
}

impl Notice {
    /// Create a new informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
            hint: None,
        }
    }

    /// Create a new success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            hint: None,
        }
    }

    /// Create a new failure notice.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Failure notice for an error, hinting at a retry when one may help.
    pub fn from_error(error: &TripError) -> Self {
        let notice = Self::failure(error.to_string());
        if error.is_retryable() {
            notice.with_hint("Nothing was lost; try again.")
        } else {
            notice
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            NoticeKind::Info => "Note:",
            NoticeKind::Success => "Success:",
            NoticeKind::Error => "Error:",
        };
        write!(f, "{label} {}", self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " {hint}")?;
        }
        writeln!(f)
    }
}
