//! Messages exchanged between two match sessions.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Version stamped on every message; peers must agree exactly.
pub const PROTOCOL_VERSION: u16 = 1;

/// The remote-turn wire protocol. A turn travels as the sender's whole
/// game state, serialized into an opaque payload the transport never
/// inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// Opening message, sent by the seat that moves first.
    Handshake { version: u16 },
    /// Reply confirming the protocol version.
    HandshakeAck { version: u16 },
    /// One completed turn: a snapshot of the full game state after the
    /// sender's placement/move and any capture it earned.
    TakeTurn {
        version: u16,
        seq: u64,
        payload: Vec<u8>,
    },
}
