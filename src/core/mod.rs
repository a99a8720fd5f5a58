pub mod position;
pub mod r#move;
pub mod types;

pub use position::{Position, INITIAL_SEEDS_PER_COLOR, TOTAL_SEEDS};
pub use r#move::{Move, ParseMoveError};
pub use types::{Color, PlayerId, HOLE_COUNT, PLAYER1_HOLES, PLAYER2_HOLES};
