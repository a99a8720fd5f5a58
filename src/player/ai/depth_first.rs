use super::evaluator::{Evaluator, SeedEvaluator};
use super::search::{clamp_depth, prepare_root, Role};
use crate::core::{Move, PlayerId, Position};
use crate::logic::{Rules, StandardRules};
use crate::player::PlayerController;
use log::debug;

/// Plain depth-limited minimax, no pruning and no bookkeeping.
pub struct DepthFirstAI<R = StandardRules, E = SeedEvaluator> {
    pub name: String,
    pub depth: usize,
    rules: R,
    evaluator: E,
}

impl DepthFirstAI {
    pub fn new(name: &str, depth: usize) -> Self {
        Self::with_parts(name, depth, StandardRules::default(), SeedEvaluator::default())
    }
}

impl<R: Rules, E: Evaluator> DepthFirstAI<R, E> {
    pub fn with_parts(name: &str, depth: usize, rules: R, evaluator: E) -> Self {
        Self {
            name: name.to_string(),
            depth: clamp_depth(depth),
            rules,
            evaluator,
        }
    }

    /// Returns the backed-up score of `position` and the move leading to it.
    fn minimax(&self, position: &Position, player: PlayerId, depth: usize) -> (f64, Move) {
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

impl<R: Rules, E: Evaluator> PlayerController for DepthFirstAI<R, E> {
    fn choose_move(&self, position: &Position, player: PlayerId) -> Move {
        let Some(root) = prepare_root(&self.rules, position, player) else {
            return Move::none();
        };
        let (score, best) = self.minimax(&root, player, self.depth);
        debug!("{}: depth {} -> {} ({})", self.name, self.depth, best, score);
        best
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    #[test]
    fn opening_move_is_on_own_side() {
        let ai = DepthFirstAI::new("DFS", 2);
        let mv = ai.choose_move(&Position::initial(), PlayerId::Player1);
        assert!(mv.valid);
        assert!(PlayerId::Player1.owns(mv.hole));
    }

    #[test]
    fn grabs_an_immediate_capture() {
        let mut pos = Position::empty();
        pos.set_seeds(1, Color::Red, 1);
        pos.set_seeds(2, Color::Blue, 2);
        pos.set_seeds(5, Color::Blue, 1);
        pos.set_seeds(12, Color::Red, 9);
        pos.set_seeds(14, Color::Red, 9);

        let ai = DepthFirstAI::new("DFS", 1);
        assert_eq!(
            ai.choose_move(&pos, PlayerId::Player1),
            Move::colored(1, Color::Red)
        );
    }

    #[test]
    fn no_legal_move_gives_the_sentinel() {
        let mut pos = Position::empty();
        pos.set_seeds(2, Color::Red, 6);
        pos.set_seeds(4, Color::Red, 6);
        let ai = DepthFirstAI::new("DFS", 3);
        assert!(!ai.choose_move(&pos, PlayerId::Player1).valid);
    }
}
