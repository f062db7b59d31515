use nine_knights::{
    transport::in_memory::InMemoryTransport, GameState, MatchSession, Player, RandomParticipant,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let (t1, t2) = InMemoryTransport::pair();

    let knight = async move {
        let mut session = MatchSession::new(
            Player::Knight,
            Box::new(RandomParticipant::new()),
            GameState::new(),
            Box::new(t1),
        );
        session.run(&mut rng1).await?;
        Ok::<GameState, anyhow::Error>(session.state().clone())
    };

    let troll = async move {
        let mut session = MatchSession::new(
            Player::Troll,
            Box::new(RandomParticipant::new()),
            GameState::new(),
            Box::new(t2),
        );
        session.run(&mut rng2).await?;
        Ok::<GameState, anyhow::Error>(session.state().clone())
    };

    let (knight_view, troll_view) = tokio::try_join!(knight, troll)?;

    let result = json!({
        "winner": knight_view.winner().map(|p| p.name()),
        "turns": knight_view.turn(),
        "states_agree": knight_view == troll_view,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
