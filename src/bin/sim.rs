use broadside::{init_logging, BattleshipGame, GameConfig, GameStatus, CLASSIC_FLEET};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Batch-simulate CPU targeting games", long_about = None)]
struct Cli {
    /// Number of games to simulate.
    #[arg(long, default_value_t = 100)]
    games: usize,
    /// Targeting difficulty in [0, 1]; 1.0 is pure greedy.
    #[arg(long, default_value_t = 1.0)]
    difficulty: f64,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Board width.
    #[arg(long, default_value_t = 10)]
    width: usize,
    /// Board height.
    #[arg(long, default_value_t = 10)]
    height: usize,
    /// Print the final score grid of each game.
    #[arg(long)]
    show_grid: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let config = GameConfig::new(cli.width, cli.height, CLASSIC_FLEET.to_vec());
    let mut total_shots = 0usize;
    let mut min_shots = usize::MAX;
    let mut max_shots = 0usize;

    for game_index in 0..cli.games {
        let mut game = BattleshipGame::new(&config, cli.difficulty);
        game.place_defender_fleet_randomly(&mut rng)?;

        let mut shots = 0usize;
        while game.status() == GameStatus::InProgress {
            let report = game.take_turn(&mut rng)?;
            shots += 1;
            log::debug!(
                "game {}: shot {} at {} -> {:?}",
                game_index,
                shots,
                report.coordinate,
                report.result
            );
        }

        if cli.show_grid {
            print_score_grid(&game.extract_score_grid());
        }
        log::info!("game {} finished in {} shots", game_index, shots);

        total_shots += shots;
        min_shots = min_shots.min(shots);
        max_shots = max_shots.max(shots);
    }

    if cli.games > 0 {
        println!(
            "games: {}  difficulty: {}  board: {}x{}",
            cli.games, cli.difficulty, cli.width, cli.height
        );
        println!(
            "shots to win: avg {:.2}  min {}  max {}",
            total_shots as f64 / cli.games as f64,
            min_shots,
            max_shots
        );
    }
    Ok(())
}

/// Render the sentinel score grid: `*` hit, `-` miss, `X` sunk, numbers for
/// open cells.
fn print_score_grid(grid: &[Vec<i32>]) {
    for row in grid {
        let line: Vec<String> = row
            .iter()
            .map(|&score| match score {
                broadside::SCORE_HIT => "  *".to_string(),
                broadside::SCORE_MISS => "  -".to_string(),
                broadside::SCORE_SUNK => "  X".to_string(),
                score => format!("{:3}", score),
            })
            .collect();
        println!("{}", line.join(" "));
    }
    println!();
}
