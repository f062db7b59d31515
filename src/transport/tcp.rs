use std::io::ErrorKind;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::protocol::Message;
use crate::transport::Transport;

/// Largest accepted frame. A full 24-point snapshot is a few kilobytes;
/// anything near this bound is a corrupt or hostile length prefix.
const MAX_FRAME_SIZE: u32 = 1_000_000;

/// Remote-turn play is asynchronous, so the peer may legitimately sit on
/// a turn for a while before answering.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Message stream over TCP: 4-byte big-endian length prefix, bincode
/// body.
pub struct TcpTransport {
    stream: TcpStream,
    timeout_duration: Duration,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            timeout_duration: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(stream: TcpStream, timeout_duration: Duration) -> Self {
        Self {
            stream,
            timeout_duration,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }
}

fn map_io(err: std::io::Error, op: &str) -> anyhow::Error {
    match err.kind() {
        ErrorKind::UnexpectedEof | ErrorKind::BrokenPipe | ErrorKind::ConnectionReset => {
            anyhow::anyhow!("connection closed by peer during {}", op)
        }
        _ => anyhow::anyhow!("{} error: {}", op, err),
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let body = bincode::serialize(&msg)?;
        if body.len() > MAX_FRAME_SIZE as usize {
            anyhow::bail!(
                "frame too large: {} bytes (max {})",
                body.len(),
                MAX_FRAME_SIZE
            );
        }

        let timeout_duration = self.timeout_duration;
        let op = async {
            self.stream
                .write_all(&(body.len() as u32).to_be_bytes())
                .await?;
            self.stream.write_all(&body).await?;
            Ok::<_, std::io::Error>(())
        };
        timeout(timeout_duration, op)
            .await
            .map_err(|_| anyhow::anyhow!("send timed out after {:?}", timeout_duration))?
            .map_err(|e| map_io(e, "send"))
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let timeout_duration = self.timeout_duration;
        let op = async {
            let mut len_buf = [0u8; 4];
            self.stream.read_exact(&mut len_buf).await?;
            let len = u32::from_be_bytes(len_buf);
            if len == 0 || len > MAX_FRAME_SIZE {
                return Err(std::io::Error::new(
                    ErrorKind::InvalidData,
                    format!("bad frame length {}", len),
                ));
            }
            let mut body = vec![0u8; len as usize];
            self.stream.read_exact(&mut body).await?;
            Ok(body)
        };
        let body = timeout(timeout_duration, op)
            .await
            .map_err(|_| anyhow::anyhow!("recv timed out after {:?}", timeout_duration))?
            .map_err(|e| map_io(e, "recv"))?;

        let msg = bincode::deserialize(&body)
            .map_err(|e| anyhow::anyhow!("undecodable frame: {}", e))?;
        Ok(msg)
    }
}
