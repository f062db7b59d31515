use crate::protocol::Message;

/// Bidirectional, ordered delivery of protocol messages between the two
/// seats of a match. Implementations decide the medium; the session layer
/// never sees anything below `Message`.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<Message>;
}

pub mod in_memory;
pub mod tcp;
