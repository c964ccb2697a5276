//! Fire-and-forget notification dispatch.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::notifier::NotifyError;

/// Run a notification on its own task.
///
/// The caller never waits for delivery. Failures are logged with the
/// notification `kind` and then dropped; nothing is retried.
pub fn spawn_notification<F>(kind: &'static str, delivery: F) -> JoinHandle<()>
where
    F: Future<Output = Result<(), NotifyError>> + Send + 'static,
{
    tokio::spawn(async move {
        match delivery.await {
            Ok(()) => tracing::debug!(notification = kind, "Notification delivered"),
            Err(e) => tracing::warn!(notification = kind, error = %e, "Notification failed"),
        }
    })
}
