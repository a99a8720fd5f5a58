//! Strategy selection: binds a named search algorithm and its depth to a seat.

use super::config::{AIConfig, PlayerSetup};
use super::evaluator::{Evaluator, SeedEvaluator};
use super::search::{clamp_depth, SearchStats};
use super::{AlphaBetaAI, BreadthFirstAI, DepthFirstAI, IterativeDeepeningAI, MinimaxAI, RandomAI};
use crate::core::{Move, PlayerId, Position};
use crate::logic::{Rules, StandardRules};
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    Minimax,
    AlphaBeta,
    IterativeDeepening,
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?} (expected bfs, dfs, minimax, alphabeta, iddfs or random)")]
pub struct UnknownAlgorithm(pub String);

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::Minimax,
        Algorithm::AlphaBeta,
        Algorithm::IterativeDeepening,
        Algorithm::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "bfs",
            Algorithm::DepthFirst => "dfs",
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alphabeta",
            Algorithm::IterativeDeepening => "iddfs",
            Algorithm::Random => "random",
        }
    }

    /// Builds the strategy. For iterative deepening `depth` is the ceiling of
    /// the depth ladder; the random tier ignores it.
    pub fn build<R, E>(
        self,
        label: &str,
        depth: usize,
        rules: R,
        evaluator: E,
    ) -> Box<dyn PlayerController>
    where
        R: Rules + 'static,
        E: Evaluator + 'static,
    {
        match self {
            Algorithm::BreadthFirst => {
                Box::new(BreadthFirstAI::with_parts(label, depth, rules, evaluator))
            }
            Algorithm::DepthFirst => {
                Box::new(DepthFirstAI::with_parts(label, depth, rules, evaluator))
            }
            Algorithm::Minimax => Box::new(MinimaxAI::with_parts(label, depth, rules, evaluator)),
            Algorithm::AlphaBeta => {
                Box::new(AlphaBetaAI::with_parts(label, depth, rules, evaluator))
            }
            Algorithm::IterativeDeepening => {
                Box::new(IterativeDeepeningAI::with_parts(label, depth, rules, evaluator))
            }
            Algorithm::Random => Box::new(RandomAI::with_rules(label, rules)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth" => Ok(Algorithm::DepthFirst),
            "minimax" | "minmax" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" => Ok(Algorithm::AlphaBeta),
            "iddfs" | "iterative" => Ok(Algorithm::IterativeDeepening),
            "random" => Ok(Algorithm::Random),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// An automated seat: one strategy, one depth, one player identity.
pub struct AIPlayer {
    pub player_id: PlayerId,
    pub algorithm: Algorithm,
    pub depth: usize,
    strategy: Box<dyn PlayerController>,
}

impl AIPlayer {
    pub fn new(player_id: PlayerId, algorithm: Algorithm, depth: usize) -> Self {
        Self::with_parts(
            player_id,
            algorithm,
            depth,
            StandardRules::default(),
            SeedEvaluator::default(),
        )
    }

    pub fn with_parts<R, E>(
        player_id: PlayerId,
        algorithm: Algorithm,
        depth: usize,
        rules: R,
        evaluator: E,
    ) -> Self
    where
        R: Rules + 'static,
        E: Evaluator + 'static,
    {
        let depth = clamp_depth(depth);
        let label = format!("{}-P{}", algorithm.name(), player_id.number());
        AIPlayer {
            player_id,
            algorithm,
            depth,
            strategy: algorithm.build(&label, depth, rules, evaluator),
        }
    }

    /// Seat described by a config entry, with the config's rules, weights and
    /// default depth.
    pub fn from_setup(
        player_id: PlayerId,
        setup: &PlayerSetup,
        config: &AIConfig,
    ) -> Result<Self, UnknownAlgorithm> {
        let algorithm: Algorithm = setup.algorithm.parse()?;
        Ok(Self::with_parts(
            player_id,
            algorithm,
            config.depth_for(setup),
            StandardRules::new(config.rules),
            SeedEvaluator::from_config(&config.evaluation),
        ))
    }

    pub fn get_move(&self, position: &Position) -> Move {
        self.strategy.choose_move(position, self.player_id)
    }

    pub fn name(&self) -> &str {
        self.strategy.name()
    }

    pub fn stats(&self) -> SearchStats {
        self.strategy.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("AlphaBeta".parse::<Algorithm>(), Ok(Algorithm::AlphaBeta));
        assert_eq!(
            "greedy".parse::<Algorithm>(),
            Err(UnknownAlgorithm("greedy".to_string()))
        );
    }

    #[test]
    fn every_algorithm_plays_the_opening() {
        let pos = Position::initial();
        for algorithm in Algorithm::ALL {
            let seat = AIPlayer::new(PlayerId::Player1, algorithm, 2);
            let mv = seat.get_move(&pos);
            assert!(mv.valid, "{} found no move", algorithm);
            assert!(PlayerId::Player1.owns(mv.hole), "{} played {}", algorithm, mv);
        }
    }

    #[test]
    fn seat_built_from_config() {
        let config = AIConfig::default();
        let seat = AIPlayer::from_setup(PlayerId::Player2, &config.players[1], &config).unwrap();
        assert_eq!(seat.algorithm, Algorithm::Minimax);
        assert_eq!(seat.depth, 3);
        assert_eq!(seat.name(), "minimax-P2");

        let mut position = Position::initial();
        position.current_player = PlayerId::Player2;
        assert!(PlayerId::Player2.owns(seat.get_move(&position).hole));
        assert!(seat.stats().nodes_explored > 0);
    }

    #[test]
    fn seat_reports_the_depth_it_searches() {
        let seat = AIPlayer::new(PlayerId::Player1, Algorithm::Minimax, 0);
        assert_eq!(seat.depth, 1);
        seat.get_move(&Position::initial());
        assert_eq!(seat.stats().completed_depth, 1);
    }

    #[test]
    fn seat_without_depth_takes_the_config_default() {
        let mut config = AIConfig::default();
        config.search.default_depth = 2;
        let setup = PlayerSetup {
            algorithm: "alphabeta".to_string(),
            depth: None,
        };
        let seat = AIPlayer::from_setup(PlayerId::Player1, &setup, &config).unwrap();
        assert_eq!(seat.depth, 2);
    }

    #[test]
    fn unknown_name_in_config_is_an_error() {
        let config = AIConfig::default();
        let setup = PlayerSetup {
            algorithm: "mcts".to_string(),
            depth: Some(2),
        };
        assert!(AIPlayer::from_setup(PlayerId::Player1, &setup, &config).is_err());
    }
}
