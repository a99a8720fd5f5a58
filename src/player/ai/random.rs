use crate::core::{Move, PlayerId, Position};
use crate::logic::{Rules, StandardRules};
use crate::player::PlayerController;
use rand::seq::SliceRandom;

/// Baseline opponent: any legal move, uniformly.
pub struct RandomAI<R = StandardRules> {
    pub name: String,
    rules: R,
}

impl RandomAI {
    pub fn new(name: &str) -> Self {
        Self::with_rules(name, StandardRules::default())
    }
}

impl<R: Rules> RandomAI<R> {
    pub fn with_rules(name: &str, rules: R) -> Self {
        RandomAI {
            name: name.to_string(),
            rules,
        }
    }
}

impl<R: Rules> PlayerController for RandomAI<R> {
    fn choose_move(&self, position: &Position, player: PlayerId) -> Move {
        if self.rules.is_terminal(position) {
            return Move::none();
        }
        let moves = self.rules.legal_moves(position, player);
        let mut rng = rand::thread_rng();
        moves.choose(&mut rng).copied().unwrap_or_else(Move::none)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
