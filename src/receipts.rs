//! Simulated read receipts for outgoing messages

use std::time::Duration;
use tokio::sync::mpsc;

use crate::app::AppMessage;

/// Acknowledges sent messages after a delay, standing in for the peer
/// client that would mark them as read.
pub struct ReadReceipts {
    message_tx: mpsc::Sender<AppMessage>,
    delay: Duration,
}

impl ReadReceipts {
    pub fn new(message_tx: mpsc::Sender<AppMessage>, delay: Duration) -> Self {
        Self { message_tx, delay }
    }

    /// Schedule a read acknowledgement for a message.
    pub fn acknowledge(&self, message_id: u64) {
        let tx = self.message_tx.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppMessage::MessageRead(message_id)).await;
        });
    }
}
