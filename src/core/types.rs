use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of holes on the board, numbered 1..=16 clockwise.
pub const HOLE_COUNT: usize = 16;

/// Holes owned by each player. Player1 plays the odd holes, Player2 the even ones.
pub const PLAYER1_HOLES: [u8; 8] = [1, 3, 5, 7, 9, 11, 13, 15];
pub const PLAYER2_HOLES: [u8; 8] = [2, 4, 6, 8, 10, 12, 14, 16];

/// Player identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Player1,
    Player2,
}

impl Default for PlayerId {
    fn default() -> Self {
        PlayerId::Player1
    }
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// The fixed set of eight holes this player sows from.
    pub fn holes(self) -> &'static [u8; 8] {
        match self {
            PlayerId::Player1 => &PLAYER1_HOLES,
            PlayerId::Player2 => &PLAYER2_HOLES,
        }
    }

    pub fn owns(self, hole: u8) -> bool {
        match self {
            PlayerId::Player1 => hole % 2 == 1,
            PlayerId::Player2 => hole % 2 == 0,
        }
    }

    /// 0 for Player1, 1 for Player2.
    pub fn index(self) -> usize {
        match self {
            PlayerId::Player1 => 0,
            PlayerId::Player2 => 1,
        }
    }

    /// Player number as used in notation and reports (1 or 2).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Seed color. Transparent seeds are played as one of the two opaque colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Transparent,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Blue, Color::Transparent];

    pub fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Transparent => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Transparent => 'T',
        }
    }

    pub fn from_symbol(c: char) -> Option<Color> {
        match c.to_ascii_uppercase() {
            'R' => Some(Color::Red),
            'B' => Some(Color::Blue),
            'T' => Some(Color::Transparent),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hole_sets_partition_the_board() {
        let mut seen = [false; HOLE_COUNT];
        for player in [PlayerId::Player1, PlayerId::Player2] {
            for &hole in player.holes() {
                assert!(player.owns(hole));
                assert!(!player.opponent().owns(hole));
                assert!(!seen[hole as usize - 1]);
                seen[hole as usize - 1] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn color_symbols() {
        for color in Color::ALL {
            assert_eq!(Color::from_symbol(color.symbol()), Some(color));
        }
        assert_eq!(Color::from_symbol('b'), Some(Color::Blue));
        assert_eq!(Color::from_symbol('X'), None);
    }
}
