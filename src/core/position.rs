use super::types::{Color, PlayerId, HOLE_COUNT};
use serde::{Deserialize, Serialize};

/// Seeds of each color placed in every hole at the start of a game.
pub const INITIAL_SEEDS_PER_COLOR: u8 = 2;

/// Total seeds in play for a standard game (16 holes x 3 colors x 2 seeds).
pub const TOTAL_SEEDS: u32 = (HOLE_COUNT * 3) as u32 * INITIAL_SEEDS_PER_COLOR as u32;

/// Board snapshot. Positions are plain values: the search derives new ones
/// through `Rules::apply_move` and never edits a position it was handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Seed counts per hole (index = hole - 1), per color (index = `Color::index`).
    holes: [[u8; 3]; HOLE_COUNT],
    /// Seeds banked by each player (index = `PlayerId::index`).
    captured: [u32; 2],
    pub current_player: PlayerId,
    pub move_count: u32,
}

impl Default for Position {
    fn default() -> Self {
        Position::initial()
    }
}

impl Position {
    /// Starting position: two seeds of each color in every hole, Player1 to move.
    pub fn initial() -> Self {
        Position {
            holes: [[INITIAL_SEEDS_PER_COLOR; 3]; HOLE_COUNT],
            captured: [0, 0],
            current_player: PlayerId::Player1,
            move_count: 0,
        }
    }

    /// Board with no seeds at all; handy for building test positions.
    pub fn empty() -> Self {
        Position {
            holes: [[0; 3]; HOLE_COUNT],
            captured: [0, 0],
            current_player: PlayerId::Player1,
            move_count: 0,
        }
    }

    pub fn seeds(&self, hole: u8, color: Color) -> u8 {
        self.holes[Self::slot(hole)][color.index()]
    }

    pub fn set_seeds(&mut self, hole: u8, color: Color, count: u8) {
        self.holes[Self::slot(hole)][color.index()] = count;
    }

    pub fn add_seed(&mut self, hole: u8, color: Color) {
        self.holes[Self::slot(hole)][color.index()] += 1;
    }

    /// Removes every seed of `color` from `hole` and returns how many there were.
    pub fn take_seeds(&mut self, hole: u8, color: Color) -> u8 {
        let slot = &mut self.holes[Self::slot(hole)][color.index()];
        std::mem::take(slot)
    }

    /// Removes every seed from `hole` and returns the total.
    pub fn clear_hole(&mut self, hole: u8) -> u32 {
        let total = self.total_seeds(hole);
        self.holes[Self::slot(hole)] = [0; 3];
        total
    }

    pub fn total_seeds(&self, hole: u8) -> u32 {
        self.holes[Self::slot(hole)].iter().map(|&c| c as u32).sum()
    }

    pub fn seeds_on_board(&self) -> u32 {
        (1..=HOLE_COUNT as u8).map(|h| self.total_seeds(h)).sum()
    }

    /// Seeds sitting in the holes owned by `player`, every color counted.
    pub fn seeds_controlled_by(&self, player: PlayerId) -> u32 {
        player.holes().iter().map(|&h| self.total_seeds(h)).sum()
    }

    pub fn captured(&self, player: PlayerId) -> u32 {
        self.captured[player.index()]
    }

    pub fn set_captured(&mut self, player: PlayerId, count: u32) {
        self.captured[player.index()] = count;
    }

    pub fn add_captured(&mut self, player: PlayerId, count: u32) {
        self.captured[player.index()] += count;
    }

    /// Winner by captured seeds: a player holding `winning_seeds` or more wins
    /// outright, otherwise the larger bank wins. `None` is a draw.
    pub fn winner(&self, winning_seeds: u32) -> Option<PlayerId> {
        let c1 = self.captured(PlayerId::Player1);
        let c2 = self.captured(PlayerId::Player2);
        if c1 >= winning_seeds {
            return Some(PlayerId::Player1);
        }
        if c2 >= winning_seeds {
            return Some(PlayerId::Player2);
        }
        match c1.cmp(&c2) {
            std::cmp::Ordering::Greater => Some(PlayerId::Player1),
            std::cmp::Ordering::Less => Some(PlayerId::Player2),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn slot(hole: u8) -> usize {
        debug_assert!((1..=HOLE_COUNT as u8).contains(&hole), "hole {} out of range", hole);
        hole as usize - 1
    }
}
