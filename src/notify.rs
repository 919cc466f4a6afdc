//! Process-wide change-notification channel.
//!
//! One `Notifier` is created at startup and shared by every handler. Each
//! successful create/update/delete broadcasts a typed, resource-scoped event
//! (`{"resource":"important-dates","op":"create"}`) to every connected
//! WebSocket client. Delivery is fire-and-forget: no replay, no ordering
//! guarantee relative to the HTTP response of the triggering mutation.

use std::sync::{Arc, RwLock};

use tokio::sync::mpsc;

pub type Notifier = Arc<RwLock<Vec<mpsc::UnboundedSender<String>>>>;

pub fn new_notifier() -> Notifier {
    Arc::new(RwLock::new(Vec::new()))
}

/// Register a new listener; used by the WS handler and by tests.
pub fn subscribe(notifier: &Notifier) -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    if let Ok(mut senders) = notifier.write() {
        senders.push(tx);
    }
    rx
}

/// Broadcast one change event to every live listener. Listeners whose
/// receiving side is gone are pruned on the way through.
pub fn broadcast(notifier: &Notifier, resource: &str, op: &str) {
    let msg = serde_json::json!({ "resource": resource, "op": op }).to_string();
    let mut senders = match notifier.write() {
        Ok(s) => s,
        Err(_) => return,
    };
    senders.retain(|tx| tx.send(msg.clone()).is_ok());
}
