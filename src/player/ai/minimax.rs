use super::evaluator::{Evaluator, SeedEvaluator};
use super::search::{clamp_depth, leaf_score, prepare_root, Role, SearchStats};
use crate::core::{Move, PlayerId, Position};
use crate::logic::{Rules, StandardRules};
use crate::player::PlayerController;
use log::debug;
use std::cell::Cell;

/// Full-width minimax that counts the nodes it visits.
///
/// Same tree and scores as [`DepthFirstAI`](super::DepthFirstAI); the node
/// count is what alpha-beta is measured against.
pub struct MinimaxAI<R = StandardRules, E = SeedEvaluator> {
    pub name: String,
    pub depth: usize,
    rules: R,
    evaluator: E,
    nodes_explored: Cell<u64>,
}

impl MinimaxAI {
    pub fn new(name: &str, depth: usize) -> Self {
        Self::with_parts(name, depth, StandardRules::default(), SeedEvaluator::default())
    }
}

impl<R: Rules, E: Evaluator> MinimaxAI<R, E> {
    pub fn with_parts(name: &str, depth: usize, rules: R, evaluator: E) -> Self {
        Self {
            name: name.to_string(),
            depth: clamp_depth(depth),
            rules,
            evaluator,
            nodes_explored: Cell::new(0),
        }
    }

    /// Complete search of `position` for `player` down to `depth` plies.
    /// Counters start from zero. Returns the root score and best move; the
    /// move is `Move::none()` when there is nothing to play.
    pub fn search(&self, position: &Position, player: PlayerId, depth: usize) -> (f64, Move) {
        self.nodes_explored.set(0);
        match prepare_root(&self.rules, position, player) {
            Some(root) => self.minimax(&root, player, clamp_depth(depth)),
            None => (
                leaf_score(&self.rules, &self.evaluator, position, player),
                Move::none(),
            ),
        }
    }

    fn minimax(&self, position: &Position, player: PlayerId, depth: usize) -> (f64, Move) {
        self.nodes_explored.set(self.nodes_explored.get() + 1);

        if self.rules.is_terminal(position) {
            return (self.evaluator.terminal_score(position, player), Move::none());
        }
        if depth == 0 {
            return (self.evaluator.evaluate(position, player), Move::none());
        }

        let moves = self.rules.legal_moves(position, position.current_player);
        if moves.is_empty() {
            return (self.evaluator.evaluate(position, player), Move::none());
        }

        let role = Role::of(position, player);
        let mut best_score = role.worst();
        let mut best_move = Move::none();

        for mv in moves {
            let next = self.rules.apply_move(position, &mv);
            let (score, _) = self.minimax(&next, player, depth - 1);
            if !best_move.valid || role.prefers(score, best_score) {
                best_score = score;
                best_move = mv;
            }
        }

        (best_score, best_move)
    }
}

impl<R: Rules, E: Evaluator> PlayerController for MinimaxAI<R, E> {
    fn choose_move(&self, position: &Position, player: PlayerId) -> Move {
        let (score, best) = self.search(position, player, self.depth);
        debug!(
            "{}: depth {} -> {} ({}), {} nodes",
            self.name,
            self.depth,
            best,
            score,
            self.nodes_explored.get()
        );
        best
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn stats(&self) -> SearchStats {
        SearchStats {
            nodes_explored: self.nodes_explored.get(),
            pruned_branches: 0,
            completed_depth: self.depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::ai::DepthFirstAI;

    #[test]
    fn agrees_with_plain_minimax() {
        let rules = StandardRules::default();
        let mut pos = Position::initial();
        for depth in 1..=3 {
            let counted = MinimaxAI::new("MinMax", depth);
            let plain = DepthFirstAI::new("DFS", depth);
            assert_eq!(
                counted.choose_move(&pos, pos.current_player),
                plain.choose_move(&pos, pos.current_player)
            );
            let mv = rules.legal_moves(&pos, pos.current_player)[depth * 3];
            pos = rules.apply_move(&pos, &mv);
        }
    }

    #[test]
    fn counters_reset_between_queries() {
        let ai = MinimaxAI::new("MinMax", 2);
        let pos = Position::initial();
        ai.choose_move(&pos, PlayerId::Player1);
        let first = ai.stats().nodes_explored;
        ai.choose_move(&pos, PlayerId::Player1);
        assert_eq!(ai.stats().nodes_explored, first);
        // root + 32 replies + 32 * 32 grandchildren
        assert_eq!(first, 1 + 32 + 32 * 32);
    }
}
