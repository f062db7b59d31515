//! One seat of an asynchronous remote match.
//!
//! Mirrors the turn exchange the original app ran through its cloud
//! matchmaking service: after each completed turn the mover serializes
//! the whole game state and hands it to the peer as an opaque payload.
//! The session owns its state exclusively; the peer only ever sees
//! whole-turn snapshots.

use rand::rngs::SmallRng;

use crate::game::GameState;
use crate::participant::{play_local_turn, Participant};
use crate::protocol::{Message, PROTOCOL_VERSION};
use crate::token::Player;
use crate::transport::Transport;

pub struct MatchSession {
    seat: Player,
    participant: Box<dyn Participant>,
    state: GameState,
    transport: Box<dyn Transport>,
}

impl MatchSession {
    pub fn new(
        seat: Player,
        participant: Box<dyn Participant>,
        state: GameState,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            seat,
            participant,
            state,
            transport,
        }
    }

    /// Establish the protocol version before the first turn travels.
    async fn handshake(&mut self, initiator: bool) -> anyhow::Result<()> {
        if initiator {
            self.transport
                .send(Message::Handshake {
                    version: PROTOCOL_VERSION,
                })
                .await?;
            match self.transport.recv().await? {
                Message::HandshakeAck { version } if version == PROTOCOL_VERSION => Ok(()),
                Message::HandshakeAck { version } => anyhow::bail!(
                    "protocol version mismatch: expected {}, peer answered {}",
                    PROTOCOL_VERSION,
                    version
                ),
                other => anyhow::bail!("expected HandshakeAck, got {:?}", other),
            }
        } else {
            match self.transport.recv().await? {
                Message::Handshake { version } if version == PROTOCOL_VERSION => {
                    self.transport
                        .send(Message::HandshakeAck {
                            version: PROTOCOL_VERSION,
                        })
                        .await
                }
                Message::Handshake { version } => anyhow::bail!(
                    "protocol version mismatch: expected {}, peer sent {}",
                    PROTOCOL_VERSION,
                    version
                ),
                other => anyhow::bail!("expected Handshake, got {:?}", other),
            }
        }
    }

    /// Play the match to completion: take the local seat's turns, adopt
    /// the peer's snapshots in between, stop once either side's turn
    /// produced a winner.
    pub async fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        let initiator = self.state.current_player() == self.seat;
        self.handshake(initiator).await?;

        let mut my_seq: u64 = 0;
        let mut expected_recv_seq: u64 = 0;
        while self.state.winner().is_none() {
            if self.state.current_player() == self.seat {
                play_local_turn(&mut self.state, self.participant.as_mut(), rng)?;
                let payload = self.state.to_payload()?;
                self.transport
                    .send(Message::TakeTurn {
                        version: PROTOCOL_VERSION,
                        seq: my_seq,
                        payload,
                    })
                    .await?;
                log::info!("{} sent turn {}", self.seat.name(), my_seq);
                my_seq += 1;
            } else {
                match self.transport.recv().await? {
                    Message::TakeTurn {
                        version,
                        seq,
                        payload,
                    } => {
                        if version != PROTOCOL_VERSION {
                            anyhow::bail!(
                                "protocol version mismatch in TakeTurn: expected {}, got {}",
                                PROTOCOL_VERSION,
                                version
                            );
                        }
                        if seq != expected_recv_seq {
                            anyhow::bail!(
                                "out-of-order turn: expected seq {}, got {}",
                                expected_recv_seq,
                                seq
                            );
                        }
                        self.state = GameState::from_payload(&payload);
                        expected_recv_seq += 1;
                        log::info!("{} adopted turn {}", self.seat.name(), seq);
                    }
                    other => anyhow::bail!("expected TakeTurn, got {:?}", other),
                }
            }
        }
        Ok(())
    }

    pub fn seat(&self) -> Player {
        self.seat
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
