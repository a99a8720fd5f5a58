//! Position evaluation.
//!
//! Heuristic scores are finite. Finished games are scored with signed
//! infinities so that a proven win or loss always outranks any estimate,
//! whatever the search depth.

use super::config::EvaluationConfig;
use crate::core::{PlayerId, Position};

pub trait Evaluator {
    /// Heuristic score of `position` from `player`'s point of view.
    /// Positive favours `player`.
    fn evaluate(&self, position: &Position, player: PlayerId) -> f64;

    /// Score of a finished game: `+inf` win, `-inf` loss, `0` draw.
    fn terminal_score(&self, position: &Position, player: PlayerId) -> f64 {
        let mine = position.captured(player);
        let theirs = position.captured(player.opponent());
        match mine.cmp(&theirs) {
            std::cmp::Ordering::Greater => f64::INFINITY,
            std::cmp::Ordering::Less => f64::NEG_INFINITY,
            std::cmp::Ordering::Equal => 0.0,
        }
    }

    fn name(&self) -> &str;
}

/// `capture_weight * (captured diff) + board_weight * (seeds in own holes diff)`.
///
/// Hole ownership is the fixed odd/even split carried by [`PlayerId::holes`],
/// which is also what `Rules::player_holes` hands out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedEvaluator {
    pub capture_weight: f64,
    pub board_weight: f64,
}

impl Default for SeedEvaluator {
    fn default() -> Self {
        SeedEvaluator::from_config(&EvaluationConfig::default())
    }
}

impl SeedEvaluator {
    pub fn from_config(config: &EvaluationConfig) -> Self {
        SeedEvaluator {
            capture_weight: config.capture_weight,
            board_weight: config.board_weight,
        }
    }
}

impl Evaluator for SeedEvaluator {
    fn evaluate(&self, position: &Position, player: PlayerId) -> f64 {
        let opponent = player.opponent();
        let captured = position.captured(player) as f64 - position.captured(opponent) as f64;
        let board = position.seeds_controlled_by(player) as f64
            - position.seeds_controlled_by(opponent) as f64;
        self.capture_weight * captured + self.board_weight * board
    }

    fn name(&self) -> &str {
        "seed-balance"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    #[test]
    fn evaluation_is_antisymmetric() {
        let mut pos = Position::empty();
        pos.set_captured(PlayerId::Player1, 12);
        pos.set_captured(PlayerId::Player2, 7);
        pos.set_seeds(1, Color::Red, 3);
        pos.set_seeds(2, Color::Transparent, 1);
        pos.set_seeds(4, Color::Blue, 4);

        let eval = SeedEvaluator::default();
        // 10 * (12 - 7) + 2 * (3 - 5)
        assert_eq!(eval.evaluate(&pos, PlayerId::Player1), 46.0);
        assert_eq!(eval.evaluate(&pos, PlayerId::Player2), -46.0);
    }

    #[test]
    fn weights_are_tunable() {
        let mut pos = Position::empty();
        pos.set_captured(PlayerId::Player1, 2);
        pos.set_seeds(3, Color::Red, 1);
        let eval = SeedEvaluator {
            capture_weight: 1.0,
            board_weight: 0.5,
        };
        assert_eq!(eval.evaluate(&pos, PlayerId::Player1), 2.5);
    }

    #[test]
    fn own_side_matches_the_rules_partition() {
        use crate::logic::{Rules, StandardRules};

        let rules = StandardRules::default();
        let mut pos = Position::empty();
        for hole in 1..=16u8 {
            pos.set_seeds(hole, Color::Red, hole);
        }
        let eval = SeedEvaluator {
            capture_weight: 0.0,
            board_weight: 1.0,
        };
        let side = |p: PlayerId| -> f64 {
            rules.player_holes(p).iter().map(|&h| pos.total_seeds(h) as f64).sum()
        };
        let expected = side(PlayerId::Player1) - side(PlayerId::Player2);
        // 1 + 3 + ... + 15 against 2 + 4 + ... + 16
        assert_eq!(expected, -8.0);
        assert_eq!(eval.evaluate(&pos, PlayerId::Player1), expected);
        assert_eq!(eval.evaluate(&pos, PlayerId::Player2), -expected);
    }

    #[test]
    fn terminal_scores_are_unbounded() {
        let eval = SeedEvaluator::default();
        let mut pos = Position::empty();
        pos.set_captured(PlayerId::Player1, 45);
        pos.set_captured(PlayerId::Player2, 43);
        assert_eq!(eval.terminal_score(&pos, PlayerId::Player1), f64::INFINITY);
        assert_eq!(eval.terminal_score(&pos, PlayerId::Player2), f64::NEG_INFINITY);

        pos.set_captured(PlayerId::Player2, 45);
        assert_eq!(eval.terminal_score(&pos, PlayerId::Player1), 0.0);
    }
}
