use std::sync::OnceLock;

use serde::Serialize;
use tokio::sync::broadcast;

/// Change notifications published after every persisted mutation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum BroadcastMessage {
    ProjectsChanged,
    ProjectUpdated(uuid::Uuid),
    UdimPresetsChanged,
    GlassPresetsChanged,
    /// Project id, model name (`None` for a whole-project export), files copied.
    TextureExportFinished(uuid::Uuid, Option<String>, u32),
}

static BROADCASTER: OnceLock<broadcast::Sender<BroadcastMessage>> = OnceLock::new();

pub fn get_broadcaster() -> broadcast::Sender<BroadcastMessage> {
    BROADCASTER
        .get_or_init(|| broadcast::channel(100).0)
        .clone()
}

pub fn subscribe() -> broadcast::Receiver<BroadcastMessage> {
    get_broadcaster().subscribe()
}

/// Sends to current subscribers; having none is fine.
pub fn publish(message: BroadcastMessage) {
    if get_broadcaster().send(message.clone()).is_err() {
        tracing::trace!(?message, "no subscribers for broadcast");
    }
}
