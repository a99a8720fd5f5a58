use awale_search::core::PlayerId;
use awale_search::game::Game;
use awale_search::player::ai::{AIConfig, PlayerSetup};
use awale_search::player::AIPlayer;
use env_logger::Env;
use std::time::Duration;

/// Usage: awale-search [P1_ALGO [P1_DEPTH] P2_ALGO [P2_DEPTH]] [--json]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = if let Some(i) = args.iter().position(|a| a == "--json") {
        args.remove(i);
        true
    } else {
        false
    };

    let mut config = AIConfig::load_or_default();
    match args.as_slice() {
        [] => {}
        // Depths left out fall back to `search.default_depth`.
        [a1, a2] => {
            config.players = [
                PlayerSetup {
                    algorithm: a1.clone(),
                    depth: None,
                },
                PlayerSetup {
                    algorithm: a2.clone(),
                    depth: None,
                },
            ];
        }
        [a1, d1, a2, d2] => {
            config.players = [
                PlayerSetup {
                    algorithm: a1.clone(),
                    depth: Some(d1.parse()?),
                },
                PlayerSetup {
                    algorithm: a2.clone(),
                    depth: Some(d2.parse()?),
                },
            ];
        }
        _ => anyhow::bail!(
            "usage: awale-search [P1_ALGO [P1_DEPTH] P2_ALGO [P2_DEPTH]] [--json]"
        ),
    }

    let p1 = AIPlayer::from_setup(PlayerId::Player1, &config.players[0], &config)?;
    let p2 = AIPlayer::from_setup(PlayerId::Player2, &config.players[1], &config)?;
    println!(
        "=== {} (depth {}) vs {} (depth {}) ===",
        p1.name(),
        p1.depth,
        p2.name(),
        p2.depth
    );

    let time_limit = Duration::from_millis(config.search.max_time_per_move_ms);
    let mut game = Game::with_rules(
        awale_search::logic::StandardRules::new(config.rules),
        time_limit,
    );
    let report = game.play([&p1, &p2], config.rules.max_moves as usize + 1);

    match report.winner {
        Some(winner) => println!("{} wins", winner),
        None => println!("Draw"),
    }
    println!(
        "Moves: {}  Captured: {} - {}  Seeds left: {}",
        report.total_moves, report.player1_captured, report.player2_captured, report.seeds_on_board
    );
    if let Some(loser) = report.forfeit {
        println!("{} forfeited", loser);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
