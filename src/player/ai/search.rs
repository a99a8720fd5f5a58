use super::evaluator::Evaluator;
use crate::core::{PlayerId, Position};
use crate::logic::Rules;
use serde::{Deserialize, Serialize};

/// Per-query diagnostics, reset at the start of every `choose_move`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes_explored: u64,
    pub pruned_branches: u64,
    /// Deepest depth limit whose search produced a move.
    pub completed_depth: usize,
}

/// Whether a node picks the highest or the lowest child score.
///
/// Decided from who actually moves in the node's position, never from ply
/// parity: a rule variant may hand the mover another turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Maximizing,
    Minimizing,
}

impl Role {
    pub fn of(position: &Position, player: PlayerId) -> Role {
        if position.current_player == player {
            Role::Maximizing
        } else {
            Role::Minimizing
        }
    }

    /// Starting value of a node's running best.
    pub fn worst(self) -> f64 {
        match self {
            Role::Maximizing => f64::NEG_INFINITY,
            Role::Minimizing => f64::INFINITY,
        }
    }

    pub fn prefers(self, candidate: f64, best: f64) -> bool {
        match self {
            Role::Maximizing => candidate > best,
            Role::Minimizing => candidate < best,
        }
    }
}

/// Root of a query: `position` with `player` to move, or `None` when the game
/// is over or `player` has nothing to play.
pub(crate) fn prepare_root<R: Rules>(
    rules: &R,
    position: &Position,
    player: PlayerId,
) -> Option<Position> {
    if rules.is_terminal(position) {
        return None;
    }
    let mut root = *position;
    root.current_player = player;
    if rules.legal_moves(&root, player).is_empty() {
        return None;
    }
    Some(root)
}

/// Terminal score for finished games, heuristic otherwise.
pub(crate) fn leaf_score<R: Rules, E: Evaluator>(
    rules: &R,
    evaluator: &E,
    position: &Position,
    player: PlayerId,
) -> f64 {
    if rules.is_terminal(position) {
        evaluator.terminal_score(position, player)
    } else {
        evaluator.evaluate(position, player)
    }
}

/// Depth 0 makes no sense for a search; treat it as 1.
pub(crate) fn clamp_depth(depth: usize) -> usize {
    depth.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::StandardRules;

    #[test]
    fn role_follows_the_mover() {
        let mut pos = Position::initial();
        assert_eq!(Role::of(&pos, PlayerId::Player1), Role::Maximizing);
        assert_eq!(Role::of(&pos, PlayerId::Player2), Role::Minimizing);
        pos.current_player = PlayerId::Player2;
        assert_eq!(Role::of(&pos, PlayerId::Player2), Role::Maximizing);
    }

    #[test]
    fn root_is_handed_to_the_querying_player() {
        let rules = StandardRules::default();
        let root = prepare_root(&rules, &Position::initial(), PlayerId::Player2).unwrap();
        assert_eq!(root.current_player, PlayerId::Player2);

        let mut over = Position::initial();
        over.move_count = 400;
        assert!(prepare_root(&rules, &over, PlayerId::Player1).is_none());
    }

    #[test]
    fn zero_depth_is_clamped() {
        assert_eq!(clamp_depth(0), 1);
        assert_eq!(clamp_depth(4), 4);
    }
}
