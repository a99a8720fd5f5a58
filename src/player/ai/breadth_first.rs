use super::evaluator::{Evaluator, SeedEvaluator};
use super::search::{clamp_depth, leaf_score, prepare_root, SearchStats};
use crate::core::{Move, PlayerId, Position};
use crate::logic::{Rules, StandardRules};
use crate::player::PlayerController;
use log::debug;
use std::cell::Cell;
use std::collections::VecDeque;

/// Shallow level-order lookahead.
///
/// Only positions where the querying player is to move get expanded; a
/// position handed to the opponent is scored as a leaf without generating
/// the replies. This compares the player's own move sequences and does not
/// model the opponent adversarially.
pub struct BreadthFirstAI<R = StandardRules, E = SeedEvaluator> {
    pub name: String,
    pub depth: usize,
    rules: R,
    evaluator: E,
    nodes_explored: Cell<u64>,
}

/// Frontier entry, tagged with the root move that leads to it.
struct Frontier {
    position: Position,
    depth: usize,
    first_move: Move,
}

impl BreadthFirstAI {
    pub fn new(name: &str, depth: usize) -> Self {
        Self::with_parts(name, depth, StandardRules::default(), SeedEvaluator::default())
    }
}

impl<R: Rules, E: Evaluator> BreadthFirstAI<R, E> {
    pub fn with_parts(name: &str, depth: usize, rules: R, evaluator: E) -> Self {
        Self {
            name: name.to_string(),
            depth: clamp_depth(depth),
            rules,
            evaluator,
            nodes_explored: Cell::new(0),
        }
    }

    fn search(&self, root: Position, player: PlayerId) -> (f64, Move) {
        let mut queue = VecDeque::new();
        queue.push_back(Frontier {
            position: root,
            depth: 0,
            first_move: Move::none(),
        });

        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = Move::none();

        while let Some(entry) = queue.pop_front() {
            self.nodes_explored.set(self.nodes_explored.get() + 1);

            let expandable = entry.depth < self.depth
                && entry.position.current_player == player
                && !self.rules.is_terminal(&entry.position);
            let moves = if expandable {
                self.rules.legal_moves(&entry.position, player)
            } else {
                Vec::new()
            };

            if moves.is_empty() {
                if entry.first_move.valid {
                    let score = leaf_score(&self.rules, &self.evaluator, &entry.position, player);
                    if !best_move.valid || score > best_score {
                        best_score = score;
                        best_move = entry.first_move;
                    }
                }
                continue;
            }

            for mv in moves {
                let first_move = if entry.first_move.valid {
                    entry.first_move
                } else {
                    mv
                };
                queue.push_back(Frontier {
                    position: self.rules.apply_move(&entry.position, &mv),
                    depth: entry.depth + 1,
                    first_move,
                });
            }
        }

        (best_score, best_move)
    }
}

impl<R: Rules, E: Evaluator> PlayerController for BreadthFirstAI<R, E> {
    fn choose_move(&self, position: &Position, player: PlayerId) -> Move {
        self.nodes_explored.set(0);
        let Some(root) = prepare_root(&self.rules, position, player) else {
            return Move::none();
        };
        let (score, best) = self.search(root, player);
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
