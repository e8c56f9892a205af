//! Background writer that applies persistence writes in enqueue order.

use std::collections::BTreeMap;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::gateway::SharedKeyValueStore;

/// The key and message of a write that failed.
type WriteFailure = (String, String);

/// Keys whose most recent write failed, with the error message.
type Failures = BTreeMap<String, String>;

enum WriteCommand {
    Put { key: String, value: String },
    Flush(oneshot::Sender<Option<WriteFailure>>),
}

/// Handle to the writer task. Dropping it lets the task drain its queue
/// and exit.
pub(crate) struct PersistenceWriter {
    tx: mpsc::UnboundedSender<WriteCommand>,
}

impl PersistenceWriter {
    /// Spawn the writer on the current Tokio runtime.
    pub(crate) fn spawn(gateway: SharedKeyValueStore) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(gateway, rx));
        Self { tx }
    }

    /// Queue a write without waiting for it.
    pub(crate) fn enqueue(&self, key: &str, value: String) {
        let cmd = WriteCommand::Put {
            key: key.to_string(),
            value,
        };
        if self.tx.send(cmd).is_err() {
            warn!(key, "persistence writer has stopped; write dropped");
        }
    }

    /// Wait until every write queued so far has been attempted.
    ///
    /// Reports a key whose most recent write failed since the previous
    /// flush. A later successful write to the same key clears its failure.
    pub(crate) async fn flush(&self) -> Result<(), StoreError> {
        let (reply, done) = oneshot::channel();
        self.tx
            .send(WriteCommand::Flush(reply))
            .map_err(|_| StoreError::WriterClosed)?;
        match done.await.map_err(|_| StoreError::WriterClosed)? {
            None => Ok(()),
            Some((key, message)) => Err(StoreError::PersistenceWrite { key, message }),
        }
    }
}

async fn run(gateway: SharedKeyValueStore, mut rx: mpsc::UnboundedReceiver<WriteCommand>) {
    let mut failures = Failures::new();
    while let Some(cmd) = rx.recv().await {
        match cmd {
            WriteCommand::Put { key, value } => match gateway.set(&key, &value).await {
                Ok(()) => {
                    debug!(key = %key, bytes = value.len(), "persisted");
                    failures.remove(&key);
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "persistence write failed");
                    failures.insert(key, e.to_string());
                }
            },
            WriteCommand::Flush(reply) => {
                let _ = reply.send(std::mem::take(&mut failures).into_iter().next());
            }
        }
    }
    debug!("persistence writer stopped");
}
