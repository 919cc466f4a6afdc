use actix_web::{web, HttpRequest, HttpResponse};
use actix_ws::Message;
use serde_json::{json, Value};

use crate::notify::{self, Notifier};

/// GET /ws - WebSocket upgrade for change notifications.
///
/// The server pushes one JSON event per mutation; the only client-to-server
/// message understood is `{"type":"ping","ts":...}`, answered with a pong
/// echoing the same `ts`. Everything else from the client is ignored.
pub async fn ws_connect(
    req: HttpRequest,
    body: web::Payload,
    notifier: web::Data<Notifier>,
) -> Result<HttpResponse, actix_web::Error> {
    let (response, mut session, mut msg_stream) = actix_ws::handle(&req, body)?;

    let mut rx = notify::subscribe(&notifier);

    actix_web::rt::spawn(async move {
        loop {
            tokio::select! {
                Some(msg) = rx.recv() => {
                    if session.text(msg).await.is_err() {
                        break;
                    }
                }
                Some(Ok(msg)) = msg_stream.recv() => {
                    match msg {
                        Message::Ping(bytes) => {
                            if session.pong(&bytes).await.is_err() {
                                break;
                            }
                        }
                        Message::Text(text) => {
                            if let Some(pong) = pong_for(&text) {
                                if session.text(pong.to_string()).await.is_err() {
                                    break;
                                }
                            }
                        }
                        Message::Close(_) => break,
                        _ => {}
                    }
                }
                else => break,
            }
        }
        // Dropping rx here is the cleanup: the next broadcast prunes the
        // matching sender from the notifier list.
    });

    Ok(response)
}

/// Build the pong reply for an application-level ping, or None for any
/// other client text.
fn pong_for(text: &str) -> Option<Value> {
    let parsed: Value = serde_json::from_str(text).ok()?;
    if parsed.get("type").and_then(Value::as_str) != Some("ping") {
        return None;
    }
    let ts = parsed.get("ts").cloned().unwrap_or(Value::Null);
    Some(json!({ "type": "pong", "ts": ts }))
}
