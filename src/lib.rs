#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
mod game;
mod grid;
mod token;

#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod participant;
pub mod protocol;
#[cfg(feature = "std")]
mod session;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
mod ui;

pub use config::*;
pub use game::*;
pub use grid::*;
pub use protocol::*;
pub use token::*;

#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use participant::{
    legal_moves, play_local_turn, CliParticipant, Participant, RandomParticipant,
};
#[cfg(feature = "std")]
pub use session::MatchSession;
#[cfg(feature = "std")]
pub use transport::tcp::TcpTransport;
#[cfg(feature = "std")]
pub use ui::{parse_point, point_label, print_board, render_board};
