use gepetto_core::{NodeCallback, NodeEvent, Position};
use tokio::sync::mpsc;
use tracing::debug;

/// Node callback that turns viewer notifications into a stream of
/// [`NodeEvent`]s.
///
/// The receiver can be drained from async code with `recv().await` or from a
/// plain thread with `blocking_recv()`.
#[derive(Debug, Clone)]
pub struct CallbackChannel {
    tx: mpsc::UnboundedSender<NodeEvent>,
}

impl CallbackChannel {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<NodeEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl NodeCallback for CallbackChannel {
    fn selected(&self, name: &str, position: Position, normal: Position) {
        if self.tx.send(NodeEvent::selected(name, position, normal)).is_err() {
            debug!(node = name, "Dropping selection event, receiver closed");
        }
    }
}
