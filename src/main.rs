#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use seabattle::{
    coord_to_string, init_logging, print_board, CliPlayer, Game, GamePhase, Player, Turn, Winner,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Place your fleet randomly instead of by hand")]
        auto: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed, auto } => play(seed, auto),
    }
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
fn render(game: &Game) {
    println!("\nComputer board ({} ships afloat):", game.computer_board().ships_remaining());
    print_board(game.computer_board(), false);
    println!("\nYour board ({} ships afloat):", game.human_board().ships_remaining());
    print_board(game.human_board(), true);
}

#[cfg(feature = "std")]
fn play(seed: Option<u64>, auto: bool) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    let mut game = Game::new();
    let mut player = CliPlayer::new();
    if auto {
        game.human_board_mut()
            .auto_place(&mut rng)
            .map_err(|e| anyhow::anyhow!(e))?;
    } else {
        player
            .place_ships(&mut rng, game.human_board_mut())
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    game.start(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    println!("All ships placed. Battle begins!");

    while game.phase() == GamePhase::InProgress {
        render(&game);
        let (row, col) = player.select_target(&mut rng, game.computer_board());
        match game.human_shot(row, col) {
            Ok(result) => {
                player.handle_shot_result((row, col), result, game.computer_board())
            }
            Err(e) => {
                println!("Error: {}", e);
                continue;
            }
        }
        if game.phase() == GamePhase::InProgress && game.turn() == Turn::Computer {
            let shots = game.computer_turn(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            for ((r, c), result) in shots {
                println!("Computer fired at {} -> {:?}", coord_to_string(r, c), result);
            }
        }
    }

    render(&game);
    match game.winner() {
        Some(Winner::Human) => println!("\nVictory! You have sunk the whole enemy fleet."),
        Some(Winner::Computer) => println!("\nDefeat. All your ships have been destroyed."),
        None => {}
    }
    Ok(())
}
