//! Notices shown to the user after a mutation.
//!
//! The view helpers report success or failure of create/update/delete through a
//! [`Notifier`]. Clients decide how notices are surfaced: the CLI prints them,
//! tests collect them in a [`NoticeLog`].

use serde::Serialize;
use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub content: String,
}

impl Notice {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            content: content.into(),
        }
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Collects notices in memory.
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: RefCell<Vec<Notice>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn take(&self) -> Vec<Notice> {
        self.notices.take()
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_collects_in_order() {
        let log = NoticeLog::new();
        log.notify(Notice::success("saved"));
        log.notify(Notice::error("failed"));

        let notices = log.take();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(notices[1].content, "failed");
        assert!(log.notices().is_empty());
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let json = serde_json::to_string(&Notice::warning("careful")).unwrap();
        assert_eq!(json, r#"{"level":"warning","content":"careful"}"#);
    }
}
