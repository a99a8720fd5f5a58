//! Game rules.
//!
//! The search code only talks to the rules through the [`Rules`] trait: the
//! end-of-game predicate, legal move generation and move application.
//! [`StandardRules`] implements the 16-hole, three-color sowing game.

use crate::core::{Color, Move, PlayerId, Position, HOLE_COUNT};
use serde::{Deserialize, Serialize};

pub trait Rules {
    /// End-of-game predicate.
    fn is_terminal(&self, position: &Position) -> bool;

    /// Moves available to `player` in `position`, in a stable order.
    fn legal_moves(&self, position: &Position, player: PlayerId) -> Vec<Move>;

    /// Plays `mv` for `position.current_player` and returns the resulting position.
    /// The input is left untouched.
    fn apply_move(&self, position: &Position, mv: &Move) -> Position;

    /// Winner of a finished game, `None` for a draw.
    fn winner(&self, position: &Position) -> Option<PlayerId>;

    fn player_holes(&self, player: PlayerId) -> &'static [u8; 8] {
        player.holes()
    }
}

/// Thresholds and variants of the standard rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Hard cap on moves played in a game.
    pub max_moves: u32,
    /// Captured seeds needed for an outright win.
    pub winning_seeds: u32,
    /// The game is drawn once both players reach this many captured seeds.
    pub draw_seeds: u32,
    /// The game stops when fewer seeds than this remain on the board.
    pub min_board_seeds: u32,
    /// Variant: a move that captures lets the mover play again.
    pub extra_turn_on_capture: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            max_moves: 400,
            winning_seeds: 49,
            draw_seeds: 40,
            min_board_seeds: 10,
            extra_turn_on_capture: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StandardRules {
    pub config: RuleConfig,
}

impl StandardRules {
    pub fn new(config: RuleConfig) -> Self {
        StandardRules { config }
    }

    /// Standard rules with the extra-turn-on-capture variant switched on.
    pub fn with_extra_turns() -> Self {
        StandardRules {
            config: RuleConfig {
                extra_turn_on_capture: true,
                ..RuleConfig::default()
            },
        }
    }
}

impl Rules for StandardRules {
    fn is_terminal(&self, position: &Position) -> bool {
        let cfg = &self.config;
        if position.move_count >= cfg.max_moves {
            return true;
        }

        let c1 = position.captured(PlayerId::Player1);
        let c2 = position.captured(PlayerId::Player2);
        if c1 >= cfg.winning_seeds || c2 >= cfg.winning_seeds {
            return true;
        }
        if c1 >= cfg.draw_seeds && c2 >= cfg.draw_seeds {
            return true;
        }

        position.seeds_on_board() < cfg.min_board_seeds
    }

    fn legal_moves(&self, position: &Position, player: PlayerId) -> Vec<Move> {
        let mut moves = Vec::new();
        for &hole in self.player_holes(player) {
            if position.seeds(hole, Color::Red) > 0 {
                moves.push(Move::colored(hole, Color::Red));
            }
            if position.seeds(hole, Color::Blue) > 0 {
                moves.push(Move::colored(hole, Color::Blue));
            }
            if position.seeds(hole, Color::Transparent) > 0 {
                moves.push(Move::transparent(hole, Color::Red));
                moves.push(Move::transparent(hole, Color::Blue));
            }
        }
        moves
    }

    fn apply_move(&self, position: &Position, mv: &Move) -> Position {
        let mut next = *position;
        if !mv.valid {
            return next;
        }

        let mover = position.current_player;
        let origin = mv.hole;

        // Transparent seeds go down first, then the seeds of the color they stand for.
        let (transparent, colored) = if mv.use_transparent {
            (
                next.take_seeds(origin, Color::Transparent),
                next.take_seeds(origin, mv.transparent_as),
            )
        } else {
            (0, next.take_seeds(origin, mv.color))
        };
        let colored_as = mv.sowing_color();
        let sown = std::iter::repeat(Color::Transparent)
            .take(transparent as usize)
            .chain(std::iter::repeat(colored_as).take(colored as usize));

        let pattern = mv.sowing_color();
        let mut cursor = origin;
        let mut last = None;
        for color in sown {
            cursor = next_target(cursor, origin, pattern, mover);
            next.add_seed(cursor, color);
            last = Some(cursor);
        }

        let mut captured_any = false;
        if let Some(mut hole) = last {
            for _ in 0..HOLE_COUNT {
                let total = next.total_seeds(hole);
                if total != 2 && total != 3 {
                    break;
                }
                let banked = next.clear_hole(hole);
                next.add_captured(mover, banked);
                captured_any = true;
                hole = previous_hole(hole);
            }
        }

        next.move_count += 1;
        next.current_player = if captured_any && self.config.extra_turn_on_capture {
            mover
        } else {
            mover.opponent()
        };
        next
    }

    fn winner(&self, position: &Position) -> Option<PlayerId> {
        position.winner(self.config.winning_seeds)
    }
}

/// Next hole receiving a seed. Red sowing visits every hole but the origin,
/// blue sowing only the opponent's holes.
fn next_target(from: u8, origin: u8, pattern: Color, mover: PlayerId) -> u8 {
    let mut hole = from;
    loop {
        hole = hole % HOLE_COUNT as u8 + 1;
        if hole == origin {
            continue;
        }
        if pattern == Color::Blue && !mover.opponent().owns(hole) {
            continue;
        }
        return hole;
    }
}

fn previous_hole(hole: u8) -> u8 {
    if hole == 1 {
        HOLE_COUNT as u8
    } else {
        hole - 1
    }
}
