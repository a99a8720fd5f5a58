use super::types::{Color, HOLE_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A candidate or chosen action.
///
/// `valid == false` is the "no move found" sentinel returned by every strategy
/// when the mover has nothing to play; it must never be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub hole: u8,
    /// Color actually lifted from the hole (`Transparent` for transparent moves).
    pub color: Color,
    /// Color the transparent seeds stand for. Equals `color` for opaque moves.
    pub transparent_as: Color,
    pub use_transparent: bool,
    pub valid: bool,
}

impl Default for Move {
    fn default() -> Self {
        Move::none()
    }
}

impl Move {
    /// The "no move" sentinel.
    pub const fn none() -> Self {
        Move {
            hole: 0,
            color: Color::Red,
            transparent_as: Color::Red,
            use_transparent: false,
            valid: false,
        }
    }

    /// Sow the red or blue seeds of `hole`.
    pub fn colored(hole: u8, color: Color) -> Self {
        debug_assert!(color != Color::Transparent);
        Move {
            hole,
            color,
            transparent_as: color,
            use_transparent: false,
            valid: true,
        }
    }

    /// Sow the transparent seeds of `hole`, treated as `as_color`.
    pub fn transparent(hole: u8, as_color: Color) -> Self {
        debug_assert!(as_color != Color::Transparent);
        Move {
            hole,
            color: Color::Transparent,
            transparent_as: as_color,
            use_transparent: true,
            valid: true,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// `None` for the sentinel.
    pub fn into_option(self) -> Option<Move> {
        if self.valid {
            Some(self)
        } else {
            None
        }
    }

    /// The opaque color whose sowing pattern this move follows.
    pub fn sowing_color(&self) -> Color {
        if self.use_transparent {
            self.transparent_as
        } else {
            self.color
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.valid {
            return write!(f, "NOMOVE");
        }
        if self.use_transparent {
            write!(f, "{}T{}", self.hole, self.transparent_as)
        } else {
            write!(f, "{}{}", self.hole, self.color)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("empty move")]
    Empty,
    #[error("bad hole number in {0:?}")]
    BadHole(String),
    #[error("hole {0} is outside 1..=16")]
    HoleOutOfRange(u32),
    #[error("bad color in {0:?}, expected R, B, TR or TB")]
    BadColor(String),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses `3R`, `14B`, `5TR` or `8TB` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        if token.is_empty() {
            return Err(ParseMoveError::Empty);
        }

        let digits_end = token
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| ParseMoveError::BadColor(token.clone()))?;
        let (number, suffix) = token.split_at(digits_end);
        if number.is_empty() {
            return Err(ParseMoveError::BadHole(token.clone()));
        }
        let hole: u32 = number
            .parse()
            .map_err(|_| ParseMoveError::BadHole(token.clone()))?;
        if !(1..=HOLE_COUNT as u32).contains(&hole) {
            return Err(ParseMoveError::HoleOutOfRange(hole));
        }
        let hole = hole as u8;

        let mut chars = suffix.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some('T'), Some(c), None) => match Color::from_symbol(c) {
                Some(color @ (Color::Red | Color::Blue)) => Ok(Move::transparent(hole, color)),
                _ => Err(ParseMoveError::BadColor(token.clone())),
            },
            (Some(c), None, None) => match Color::from_symbol(c) {
                Some(color @ (Color::Red | Color::Blue)) => Ok(Move::colored(hole, color)),
                _ => Err(ParseMoveError::BadColor(token.clone())),
            },
            _ => Err(ParseMoveError::BadColor(token.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_examples() {
        assert_eq!(Move::colored(3, Color::Red).to_string(), "3R");
        assert_eq!(Move::colored(14, Color::Blue).to_string(), "14B");
        assert_eq!(Move::transparent(5, Color::Red).to_string(), "5TR");
        assert_eq!(Move::transparent(8, Color::Blue).to_string(), "8TB");
        assert_eq!(Move::none().to_string(), "NOMOVE");
    }

    #[test]
    fn notation_is_a_bijection_over_all_moves() {
        for hole in 1..=16u8 {
            let moves = [
                Move::colored(hole, Color::Red),
                Move::colored(hole, Color::Blue),
                Move::transparent(hole, Color::Red),
                Move::transparent(hole, Color::Blue),
            ];
            for mv in moves {
                let parsed: Move = mv.to_string().parse().unwrap();
                assert_eq!(parsed, mv);
            }
        }
    }

    #[test]
    fn parse_is_lenient_about_case_and_whitespace() {
        assert_eq!(" 12tb\n".parse::<Move>(), Ok(Move::transparent(12, Color::Blue)));
        assert_eq!("7r".parse::<Move>(), Ok(Move::colored(7, Color::Red)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("".parse::<Move>(), Err(ParseMoveError::Empty));
        assert!(matches!("R".parse::<Move>(), Err(ParseMoveError::BadHole(_))));
        assert_eq!("17R".parse::<Move>(), Err(ParseMoveError::HoleOutOfRange(17)));
        assert_eq!("0B".parse::<Move>(), Err(ParseMoveError::HoleOutOfRange(0)));
        assert!(matches!("3T".parse::<Move>(), Err(ParseMoveError::BadColor(_))));
        assert!(matches!("3TT".parse::<Move>(), Err(ParseMoveError::BadColor(_))));
        assert!(matches!("3X".parse::<Move>(), Err(ParseMoveError::BadColor(_))));
        assert!(matches!("12".parse::<Move>(), Err(ParseMoveError::BadColor(_))));
    }

    #[test]
    fn invalid_move_converts_to_none() {
        assert_eq!(Move::none().into_option(), None);
        assert!(Move::colored(1, Color::Red).into_option().is_some());
    }
}
