//! The backup requester: one authenticated POST per user action.

use super::notify::Notifier;
use super::status::{BackupOutcome, Severity, Status};
use crate::api::BackupApi;
use crate::auth::TokenStore;
use crate::config::messages;
use crate::error::ConsoleError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, error};

/// Holds the busy flag for the duration of one request.
///
/// Acquire fails while another guard is alive; dropping the guard clears
/// the flag on every exit path, including early returns.
struct BusyGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self { flag })
        }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Triggers server-side database backups and projects the result.
///
/// Each invocation emits its status to two sinks with identical text and
/// severity: the inline `status` record (read by the UI) and the injected
/// [`Notifier`]. Failures never escape; every path ends in a displayed
/// message and the user may simply try again.
pub struct BackupRequester<A> {
    api: A,
    store: Box<dyn TokenStore>,
    notifier: Rc<dyn Notifier>,
    busy: Cell<bool>,
    status: RefCell<Option<Status>>,
}

impl<A: BackupApi> BackupRequester<A> {
    pub fn new(api: A, store: Box<dyn TokenStore>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            api,
            store,
            notifier,
            busy: Cell::new(false),
            status: RefCell::new(None),
        }
    }

    /// Whether a request is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// The currently displayed status, if any.
    pub fn status(&self) -> Option<Status> {
        self.status.borrow().clone()
    }

    /// Run one backup request end to end.
    ///
    /// At most one request is in flight at a time; a second invocation
    /// while busy does nothing. No retries, no cancellation: the request
    /// runs to completion and its outcome replaces the status.
    pub async fn initiate_backup(&self) {
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            debug!("Backup request already in flight");
            return;
        };

        self.transition(Severity::Info, messages::INITIATING);

        let outcome = match self.store.access_token() {
            None => BackupOutcome::MissingCredential,
            Some(token) => match self.api.trigger_backup(&token).await {
                Ok(receipt) => BackupOutcome::Success(
                    receipt
                        .message
                        .unwrap_or_else(|| messages::SUCCESS_FALLBACK.to_string()),
                ),
                Err(ConsoleError::Server(message)) => BackupOutcome::Failure(message),
                Err(err) => {
                    BackupOutcome::Failure(format!("Network error or unexpected issue: {}", err))
                }
            },
        };

        self.project(outcome);
    }

    /// Map an outcome to the displayed status and notification.
    fn project(&self, outcome: BackupOutcome) {
        match outcome {
            BackupOutcome::MissingCredential => {
                self.transition(Severity::Error, messages::MISSING_TOKEN);
            }
            BackupOutcome::Success(message) => {
                self.transition(Severity::Success, message);
            }
            BackupOutcome::Failure(message) => {
                error!("Backup request failed: {}", message);
                self.transition(Severity::Error, message);
            }
        }
    }

    /// Emit a status to both sinks as one atomic transition.
    fn transition(&self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        self.notifier.notify(&message, severity);
        self.status.replace(Some(Status::new(severity, message)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BackupReceipt;
    use crate::backup::notify::Notification;
    use crate::error::Result;

    struct FakeStore(Option<&'static str>);

    impl TokenStore for FakeStore {
        fn access_token(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[derive(Default)]
    struct Recorder {
        notes: RefCell<Vec<Notification>>,
    }

    impl Recorder {
        fn notes(&self) -> Vec<Notification> {
            self.notes.borrow().clone()
        }
    }

    impl Notifier for Recorder {
        fn notify(&self, message: &str, severity: Severity) {
            self.notes.borrow_mut().push(Notification {
                message: message.to_string(),
                severity,
            });
        }
    }

    enum FakeResponse {
        Message(&'static str),
        Empty,
        ServerError(&'static str),
        Transport(&'static str),
    }

    struct FakeApi {
        response: FakeResponse,
        calls: Rc<Cell<usize>>,
    }

    impl BackupApi for FakeApi {
        async fn trigger_backup(&self, _token: &str) -> Result<BackupReceipt> {
            self.calls.set(self.calls.get() + 1);
            match self.response {
                FakeResponse::Message(m) => Ok(BackupReceipt {
                    message: Some(m.to_string()),
                }),
                FakeResponse::Empty => Ok(BackupReceipt { message: None }),
                FakeResponse::ServerError(m) => Err(ConsoleError::Server(m.to_string())),
                FakeResponse::Transport(m) => Err(std::io::Error::other(m).into()),
            }
        }
    }

    fn requester(
        response: FakeResponse,
        token: Option<&'static str>,
    ) -> (BackupRequester<FakeApi>, Rc<Recorder>, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let recorder = Rc::new(Recorder::default());
        let api = FakeApi {
            response,
            calls: calls.clone(),
        };
        let requester = BackupRequester::new(api, Box::new(FakeStore(token)), recorder.clone());
        (requester, recorder, calls)
    }

    #[tokio::test]
    async fn test_missing_token_skips_network_call() {
        let (requester, recorder, calls) = requester(FakeResponse::Empty, None);

        requester.initiate_backup().await;

        assert_eq!(calls.get(), 0);
        let errors: Vec<_> = recorder
            .notes()
            .into_iter()
            .filter(|n| n.severity == Severity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, messages::MISSING_TOKEN);
        assert!(!requester.is_busy());
    }

    #[tokio::test]
    async fn test_info_status_emitted_first() {
        let (requester, recorder, _) = requester(FakeResponse::Empty, Some("tok"));

        requester.initiate_backup().await;

        let notes = recorder.notes();
        assert_eq!(notes[0].message, messages::INITIATING);
        assert_eq!(notes[0].severity, Severity::Info);
    }

    #[tokio::test]
    async fn test_success_message_from_body() {
        let (requester, recorder, calls) =
            requester(FakeResponse::Message("Backup queued"), Some("tok"));

        requester.initiate_backup().await;

        assert_eq!(calls.get(), 1);
        let last = recorder.notes().pop().unwrap();
        assert_eq!(last.message, "Backup queued");
        assert_eq!(last.severity, Severity::Success);
    }

    #[tokio::test]
    async fn test_success_falls_back_to_default_message() {
        let (requester, recorder, _) = requester(FakeResponse::Empty, Some("tok"));

        requester.initiate_backup().await;

        let last = recorder.notes().pop().unwrap();
        assert_eq!(last.message, messages::SUCCESS_FALLBACK);
        assert_eq!(last.severity, Severity::Success);
    }

    #[tokio::test]
    async fn test_server_error_body_is_displayed() {
        let (requester, recorder, _) =
            requester(FakeResponse::ServerError("Admin privileges required"), Some("tok"));

        requester.initiate_backup().await;

        let last = recorder.notes().pop().unwrap();
        assert_eq!(last.message, "Admin privileges required");
        assert_eq!(last.severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_transport_error_text_is_included() {
        let (requester, recorder, _) =
            requester(FakeResponse::Transport("connection refused"), Some("tok"));

        requester.initiate_backup().await;

        let last = recorder.notes().pop().unwrap();
        assert_eq!(last.severity, Severity::Error);
        assert!(last.message.starts_with("Network error or unexpected issue:"));
        assert!(last.message.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_status_matches_last_notification() {
        let (requester, recorder, _) =
            requester(FakeResponse::Message("Backup queued"), Some("tok"));

        requester.initiate_backup().await;

        let status = requester.status().unwrap();
        let last = recorder.notes().pop().unwrap();
        assert_eq!(status.message, last.message);
        assert_eq!(status.severity, last.severity);
    }

    #[tokio::test]
    async fn test_busy_cleared_on_every_path() {
        for (response, token) in [
            (FakeResponse::Empty, None),
            (FakeResponse::Message("ok"), Some("tok")),
            (FakeResponse::ServerError("nope"), Some("tok")),
            (FakeResponse::Transport("timed out"), Some("tok")),
        ] {
            let (requester, _, _) = requester(response, token);
            assert!(!requester.is_busy());
            requester.initiate_backup().await;
            assert!(!requester.is_busy());
        }
    }

    #[test]
    fn test_busy_guard_blocks_reentry() {
        let flag = Cell::new(false);

        let guard = BusyGuard::acquire(&flag).unwrap();
        assert!(flag.get());
        assert!(BusyGuard::acquire(&flag).is_none());

        drop(guard);
        assert!(!flag.get());
        assert!(BusyGuard::acquire(&flag).is_some());
    }
}
