//! Seeded computer-vs-computer match, reporting the outcome as JSON.

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use seabattle::{AiPlayer, Board, Player, ShotResult, MAX_AI_TURNS};
#[cfg(feature = "std")]
use serde_json::json;

/// Run one side's turn: the shooter keeps firing while it hits.
#[cfg(feature = "std")]
fn run_turn<R: Rng>(
    player: &mut AiPlayer,
    rng: &mut R,
    target: &mut Board,
) -> anyhow::Result<usize> {
    let mut shots = 0;
    loop {
        let (row, col) = player.select_target(rng, target);
        let result = target.shoot(row, col).map_err(|e| anyhow::anyhow!(e))?;
        player.handle_shot_result((row, col), result, target);
        shots += 1;
        if result == ShotResult::Miss || !target.has_ships_left() {
            return Ok(shots);
        }
        if shots > MAX_AI_TURNS {
            anyhow::bail!("turn exceeded the consecutive shot cap");
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();
    let mut b1 = Board::new();
    let mut b2 = Board::new();
    p1.place_ships(&mut rng1, &mut b1).map_err(|e| anyhow::anyhow!(e))?;
    p2.place_ships(&mut rng2, &mut b2).map_err(|e| anyhow::anyhow!(e))?;

    let mut shots1 = 0;
    let mut shots2 = 0;
    let winner = loop {
        shots1 += run_turn(&mut p1, &mut rng1, &mut b2)?;
        if !b2.has_ships_left() {
            break "player1";
        }
        shots2 += run_turn(&mut p2, &mut rng2, &mut b1)?;
        if !b1.has_ships_left() {
            break "player2";
        }
    };

    let result = json!({
        "player1": {"shots": shots1, "ships_left": b1.ships_remaining()},
        "player2": {"shots": shots2, "ships_left": b2.ships_remaining()},
        "winner": winner,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
