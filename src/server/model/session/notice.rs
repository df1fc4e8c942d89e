//! Transient notices shown on the next rendered page.
//!
//! Notices are queued in the session by one request (for example after a redirect following a
//! successful form submission) and consumed by the first page that renders them.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key for the queue of pending notices.
pub const SESSION_NOTICES_KEY: &str = "carregamento:notices";

/// Severity of a notice, mapped to its CSS class in the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Operation succeeded.
    Success,
    /// Neutral information.
    Info,
    /// Input was rejected.
    Warning,
    /// Authentication failed.
    Danger,
}

impl NoticeLevel {
    /// CSS class name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// A message shown once to the employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity of the message.
    pub level: NoticeLevel,
    /// Text shown to the employee.
    pub message: String,
}

impl Notice {
    /// Creates a notice with the given level.
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Creates a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    /// Creates an informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    /// Creates a warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    /// Creates a danger notice.
    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Danger, message)
    }
}

/// Session wrapper for the queue of pending notices.
pub struct SessionNotices;

impl SessionNotices {
    /// Appends a notice to the pending queue.
    ///
    /// # Arguments
    /// - `session` - Employee's session
    /// - `notice` - Notice to show on the next rendered page
    ///
    /// # Returns
    /// - `Ok(())` - Notice queued
    /// - `Err(Error::SessionError)` - Session load or serialization failed
    pub async fn push(session: &Session, notice: Notice) -> Result<(), Error> {
        let mut notices: Vec<Notice> = session.get(SESSION_NOTICES_KEY).await?.unwrap_or_default();
        notices.push(notice);

        session.insert(SESSION_NOTICES_KEY, notices).await?;

        Ok(())
    }

    /// Removes and returns all pending notices, oldest first.
    pub async fn take(session: &Session) -> Result<Vec<Notice>, Error> {
        Ok(session
            .remove::<Vec<Notice>>(SESSION_NOTICES_KEY)
            .await?
            .unwrap_or_default())
    }
}
