use super::evaluator::{Evaluator, SeedEvaluator};
use super::search::{clamp_depth, leaf_score, prepare_root, Role, SearchStats};
use crate::core::{Move, PlayerId, Position};
use crate::logic::{Rules, StandardRules};
use crate::player::PlayerController;
use log::debug;
use std::cell::Cell;

/// Minimax with alpha-beta pruning.
///
/// Selects the same move with the same score as the full-width search; the
/// pruning only cuts down the number of nodes visited.
pub struct AlphaBetaAI<R = StandardRules, E = SeedEvaluator> {
    pub name: String,
    pub depth: usize,
    rules: R,
    evaluator: E,
    nodes_explored: Cell<u64>,
    pruned_branches: Cell<u64>,
}

impl AlphaBetaAI {
    pub fn new(name: &str, depth: usize) -> Self {
        Self::with_parts(name, depth, StandardRules::default(), SeedEvaluator::default())
    }
}

impl<R: Rules, E: Evaluator> AlphaBetaAI<R, E> {
    pub fn with_parts(name: &str, depth: usize, rules: R, evaluator: E) -> Self {
        Self {
            name: name.to_string(),
            depth: clamp_depth(depth),
            rules,
            evaluator,
            nodes_explored: Cell::new(0),
            pruned_branches: Cell::new(0),
        }
    }

    /// Root score and best move at this instance's depth, counters reset.
    pub fn search(&self, position: &Position, player: PlayerId) -> (f64, Move) {
        self.nodes_explored.set(0);
        self.pruned_branches.set(0);

        let Some(root) = prepare_root(&self.rules, position, player) else {
            return (
                leaf_score(&self.rules, &self.evaluator, position, player),
                Move::none(),
            );
        };
        self.alpha_beta(
            &root,
            player,
            self.depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            Role::of(&root, player),
        )
    }

    // alpha: best score the maximizer is already assured of.
    // beta: best score the minimizer is already assured of.
    fn alpha_beta(
        &self,
        position: &Position,
        player: PlayerId,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        role: Role,
    ) -> (f64, Move) {
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

        let mut best_score = role.worst();
        let mut best_move = Move::none();

        for mv in moves {
            let next = self.rules.apply_move(position, &mv);
            // The child's role comes from who moves there, not from the ply.
            let next_role = Role::of(&next, player);
            let (score, _) = self.alpha_beta(&next, player, depth - 1, alpha, beta, next_role);

            if !best_move.valid || role.prefers(score, best_score) {
                best_score = score;
                best_move = mv;
            }

            match role {
                Role::Maximizing => alpha = alpha.max(score),
                Role::Minimizing => beta = beta.min(score),
            }
            if beta <= alpha {
                self.pruned_branches.set(self.pruned_branches.get() + 1);
                break;
            }
        }

        (best_score, best_move)
    }
}

impl<R: Rules, E: Evaluator> PlayerController for AlphaBetaAI<R, E> {
    fn choose_move(&self, position: &Position, player: PlayerId) -> Move {
        let (score, best) = self.search(position, player);
        debug!(
            "{}: depth {} -> {} ({}), {} nodes, {} cutoffs",
            self.name,
            self.depth,
            best,
            score,
            self.nodes_explored.get(),
            self.pruned_branches.get()
        );
        best
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn stats(&self) -> SearchStats {
        SearchStats {
            nodes_explored: self.nodes_explored.get(),
            pruned_branches: self.pruned_branches.get(),
            completed_depth: self.depth,
        }
    }
}
