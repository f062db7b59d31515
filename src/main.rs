#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use nine_knights::{
    init_logging, play_local_turn, print_board, CliParticipant, GameState, MatchSession,
    Participant, Player, RandomParticipant, TcpTransport,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
#[cfg(feature = "std")]
enum SeatKind {
    Human,
    Random,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Hot-seat game on this terminal, both seats local.
    Local {
        #[arg(long, value_enum, default_value_t = SeatKind::Human)]
        knight: SeatKind,
        #[arg(long, value_enum, default_value_t = SeatKind::Human)]
        troll: SeatKind,
        #[arg(long, help = "Fix RNG seed for reproducible random play (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 500, help = "Abort random self-play after this many half-moves")]
        max_turns: u32,
    },
    /// Host a remote match and play the Knight seat.
    TcpServer {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
        #[arg(long, value_enum, default_value_t = SeatKind::Human)]
        player: SeatKind,
        #[arg(long, help = "Fix RNG seed for reproducible random play (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Join a remote match and play the Troll seat.
    TcpClient {
        #[arg(long, default_value = "127.0.0.1:8080")]
        connect: String,
        #[arg(long, value_enum, default_value_t = SeatKind::Human)]
        player: SeatKind,
        #[arg(long, help = "Fix RNG seed for reproducible random play (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn make_participant(kind: &SeatKind) -> Box<dyn Participant> {
    match kind {
        SeatKind::Human => Box::new(CliParticipant::new()),
        SeatKind::Random => Box::new(RandomParticipant::new()),
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local {
            knight,
            troll,
            seed,
            max_turns,
        } => {
            let mut rng = make_rng(seed);
            let mut knight_seat = make_participant(&knight);
            let mut troll_seat = make_participant(&troll);
            let mut state = GameState::new();

            while state.winner().is_none() && state.turn() < max_turns {
                print_board(&state);
                println!("{}", state.message_to_display());
                let participant = if state.current_player() == Player::Knight {
                    knight_seat.as_mut()
                } else {
                    troll_seat.as_mut()
                };
                play_local_turn(&mut state, participant, &mut rng)?;
            }

            print_board(&state);
            println!("{}", state.message_to_display());
            if state.winner().is_none() {
                println!("No winner after {} half-moves, calling it a draw.", max_turns);
            }
        }
        Commands::TcpServer { bind, player, seed } => {
            println!("Hosting a match at {}...", bind);
            let listener = TcpListener::bind(&bind).await?;
            println!("Waiting for an opponent to connect...");
            let (stream, addr) = listener.accept().await?;
            println!("Opponent connected from {}", addr);

            let mut rng = make_rng(seed);
            let mut session = MatchSession::new(
                Player::Knight,
                make_participant(&player),
                GameState::new(),
                Box::new(TcpTransport::new(stream)),
            );
            finish_session(&mut session, &mut rng).await;
        }
        Commands::TcpClient {
            connect,
            player,
            seed,
        } => {
            println!("Joining the match at {}...", connect);
            let transport = TcpTransport::connect(&connect).await?;
            println!("Connected.");

            let mut rng = make_rng(seed);
            let mut session = MatchSession::new(
                Player::Troll,
                make_participant(&player),
                GameState::new(),
                Box::new(transport),
            );
            finish_session(&mut session, &mut rng).await;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn finish_session(session: &mut MatchSession, rng: &mut SmallRng) {
    if let Err(e) = session.run(rng).await {
        eprintln!("Match ended with an error: {}", e);
        return;
    }
    print_board(session.state());
    println!("{}", session.state().message_to_display());
}
