use crate::app_event::AppEvent;
use tokio::sync::mpsc::UnboundedSender;
use tracing::error;

#[derive(Clone, Debug)]
pub(crate) struct AppEventSender {
    tx: UnboundedSender<AppEvent>,
}

impl AppEventSender {
    pub(crate) fn new(tx: UnboundedSender<AppEvent>) -> Self {
        Self { tx }
    }

    /// Send an event to the app event loop. Failure means the loop is
    /// shutting down, so the event is dropped.
    pub(crate) fn send(&self, event: AppEvent) {
        if let Err(err) = self.tx.send(event) {
            error!("failed to send event: {err}");
        }
    }
}
