//! User-visible notices.
//!
//! There are two channels. The success notice clears itself after a fixed
//! delay; the error notice stays until an operation clears it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

/// Default lifetime of a success notice.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug)]
pub struct NoticeBoard {
    success: Arc<watch::Sender<Option<String>>>,
    error: Option<String>,
    ttl: Duration,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        let (success, _) = watch::channel(None);
        Self {
            success: Arc::new(success),
            error: None,
            ttl,
        }
    }

    /// Shows a success notice and schedules its removal.
    ///
    /// The scheduled clear is never cancelled. If another notice is posted
    /// before it fires, that newer notice is cleared early.
    ///
    /// Must be called from within a tokio runtime.
    pub fn post_success(&self, message: impl Into<String>) {
        self.success.send_replace(Some(message.into()));

        let success = Arc::clone(&self.success);
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            success.send_replace(None);
        });
    }

    pub fn post_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Current success notice, if it has not expired yet.
    pub fn success(&self) -> Option<String> {
        self.success.borrow().clone()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Receiver that observes every change of the success notice,
    /// including the automatic clear.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.success.subscribe()
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JUST_AFTER: Duration = Duration::from_millis(1);

    #[tokio::test(start_paused = true)]
    async fn test_success_notice_clears_after_ttl() {
        let board = NoticeBoard::default();
        board.post_success("Item added successfully");
        assert_eq!(board.success().as_deref(), Some("Item added successfully"));

        tokio::time::sleep(DEFAULT_NOTICE_TTL - JUST_AFTER).await;
        assert!(board.success().is_some());

        tokio::time::sleep(JUST_AFTER * 2).await;
        assert_eq!(board.success(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_clear_removes_newer_notice() {
        let board = NoticeBoard::new(Duration::from_secs(3));
        board.post_success("first");

        tokio::time::sleep(Duration::from_secs(2)).await;
        board.post_success("second");

        // The clear scheduled by "first" fires at t=3s.
        tokio::time::sleep(Duration::from_secs(1) + JUST_AFTER).await;
        assert_eq!(board.success(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriber_sees_clear() {
        let board = NoticeBoard::new(Duration::from_secs(1));
        let mut rx = board.subscribe();

        board.post_success("saved");
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().as_deref(), Some("saved"));

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), None);
    }

    #[test]
    fn test_error_notice_persists_until_cleared() {
        let mut board = NoticeBoard::default();
        assert_eq!(board.error(), None);

        board.post_error("Unable to create Todo item");
        assert_eq!(board.error(), Some("Unable to create Todo item"));

        board.clear_error();
        assert_eq!(board.error(), None);
    }
}
