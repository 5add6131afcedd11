use ess_client::{UpdateError, UpdateRequest, UpdateResponse};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone)]
pub(super) enum Action {
    /// Send a validated request in the background.
    SubmitUpdate(UpdateRequest),
    /// The in-flight request resolved.
    UpdateFinished(Result<UpdateResponse, UpdateError>),
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
