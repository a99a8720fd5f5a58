use super::evaluator::{Evaluator, SeedEvaluator};
use super::minimax::MinimaxAI;
use super::search::{clamp_depth, SearchStats};
use crate::core::{Move, PlayerId, Position};
use crate::logic::{Rules, StandardRules};
use crate::player::PlayerController;
use log::debug;
use std::cell::Cell;

/// Iterative deepening over depth-limited minimax.
///
/// Runs complete searches at depth 1, 2, ... `max_depth` and keeps the move of
/// the deepest iteration that found one. Deepening stops early once an
/// iteration proves a forced win. An iteration proving a forced loss is
/// discarded in favour of the previous depth's move, and the ladder stops.
pub struct IterativeDeepeningAI<R = StandardRules, E = SeedEvaluator> {
    pub name: String,
    pub max_depth: usize,
    searcher: MinimaxAI<R, E>,
    stats: Cell<SearchStats>,
}

impl IterativeDeepeningAI {
    pub fn new(name: &str, max_depth: usize) -> Self {
        Self::with_parts(name, max_depth, StandardRules::default(), SeedEvaluator::default())
    }
}

impl<R: Rules, E: Evaluator> IterativeDeepeningAI<R, E> {
    pub fn with_parts(name: &str, max_depth: usize, rules: R, evaluator: E) -> Self {
        let max_depth = clamp_depth(max_depth);
        Self {
            name: name.to_string(),
            max_depth,
            searcher: MinimaxAI::with_parts(name, max_depth, rules, evaluator),
            stats: Cell::new(SearchStats::default()),
        }
    }
}

impl<R: Rules, E: Evaluator> PlayerController for IterativeDeepeningAI<R, E> {
    fn choose_move(&self, position: &Position, player: PlayerId) -> Move {
        self.stats.set(SearchStats::default());
        let mut best_move = Move::none();

        for depth in 1..=self.max_depth {
            let (score, mv) = self.searcher.search(position, player, depth);
            let nodes = self.searcher.stats().nodes_explored;
            debug!(
                "{}: depth {} -> {} ({}), {} nodes",
                self.name, depth, mv, score, nodes
            );

            if !mv.is_valid() {
                continue;
            }
            // Every move loses at this depth, so the returned move is just the first
            // legal one. Keep the shallower choice.
            if score == f64::NEG_INFINITY && best_move.is_valid() {
                break;
            }

            best_move = mv;
            self.stats.set(SearchStats {
                nodes_explored: nodes,
                pruned_branches: 0,
                completed_depth: depth,
            });
            if score.is_infinite() {
                break;
            }
        }

        best_move
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn stats(&self) -> SearchStats {
        self.stats.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    #[test]
    fn matches_minimax_at_the_final_depth() {
        let pos = Position::initial();
        let iterative = IterativeDeepeningAI::new("IDDFS", 3);
        let fixed = MinimaxAI::new("MinMax", 3);
        assert_eq!(
            iterative.choose_move(&pos, PlayerId::Player1),
            fixed.choose_move(&pos, PlayerId::Player1)
        );
        assert_eq!(iterative.stats().completed_depth, 3);
    }

    #[test]
    fn stops_deepening_once_a_win_is_proven() {
        // 46 vs 39 captured. Red from hole 1 drops a seed in hole 2 and
        // captures 3: 49 seeds wins on the spot.
        let mut pos = Position::empty();
        pos.set_captured(PlayerId::Player1, 46);
        pos.set_captured(PlayerId::Player2, 39);
        pos.set_seeds(1, Color::Red, 1);
        pos.set_seeds(2, Color::Blue, 2);
        pos.set_seeds(3, Color::Blue, 4);
        pos.set_seeds(6, Color::Red, 4);

        let ai = IterativeDeepeningAI::new("IDDFS", 6);
        assert_eq!(ai.choose_move(&pos, PlayerId::Player1), Move::colored(1, Color::Red));
        assert_eq!(ai.stats().completed_depth, 1);
    }

    #[test]
    fn proven_loss_keeps_the_shallower_move() {
        // 37 vs 48 captured, 11 seeds on the board.
        // 1R captures 2 and leaves 9 seeds: the game ends lost on the spot.
        // 3R and 5B survive one ply, but Player2 then captures (4R or 2B) past 49.
        let mut pos = Position::empty();
        pos.set_captured(PlayerId::Player1, 37);
        pos.set_captured(PlayerId::Player2, 48);
        pos.set_seeds(1, Color::Red, 1);
        pos.set_seeds(2, Color::Blue, 1);
        pos.set_seeds(3, Color::Red, 1);
        pos.set_seeds(5, Color::Blue, 1);
        pos.set_seeds(8, Color::Red, 7);

        let minimax = MinimaxAI::new("MinMax", 2);
        assert_eq!(
            minimax.search(&pos, PlayerId::Player1, 2),
            (f64::NEG_INFINITY, Move::colored(1, Color::Red))
        );
        let (shallow, shallow_move) = minimax.search(&pos, PlayerId::Player1, 1);
        assert!(shallow.is_finite());
        assert_eq!(shallow_move, Move::colored(3, Color::Red));

        let ai = IterativeDeepeningAI::new("IDDFS", 2);
        assert_eq!(ai.choose_move(&pos, PlayerId::Player1), Move::colored(3, Color::Red));
        assert_eq!(ai.stats().completed_depth, 1);
    }

    #[test]
    fn lost_at_depth_one_still_plays() {
        // Only 1R is legal and it ends the game lost.
        let mut pos = Position::empty();
        pos.set_captured(PlayerId::Player1, 37);
        pos.set_captured(PlayerId::Player2, 48);
        pos.set_seeds(1, Color::Red, 1);
        pos.set_seeds(2, Color::Blue, 1);
        pos.set_seeds(8, Color::Red, 9);

        let ai = IterativeDeepeningAI::new("IDDFS", 3);
        assert_eq!(ai.choose_move(&pos, PlayerId::Player1), Move::colored(1, Color::Red));
        assert_eq!(ai.stats().completed_depth, 1);
    }

    #[test]
    fn terminal_root_gives_the_sentinel() {
        let mut pos = Position::empty();
        pos.set_seeds(1, Color::Red, 8);
        pos.set_captured(PlayerId::Player1, 45);
        pos.set_captured(PlayerId::Player2, 43);
        let ai = IterativeDeepeningAI::new("IDDFS", 4);
        assert!(!ai.choose_move(&pos, PlayerId::Player1).valid);
        assert_eq!(ai.stats().completed_depth, 0);
    }
}
