use crate::core::{Move, PlayerId, Position};
use crate::player::ai::SearchStats;

/// Capability shared by every automated player.
pub trait PlayerController {
    /// Best move for `player` in `position`, or `Move::none()` when `player`
    /// has no legal move (or the game is already over).
    fn choose_move(&self, position: &Position, player: PlayerId) -> Move;

    fn name(&self) -> &str;

    /// Counters of the last `choose_move` call.
    fn stats(&self) -> SearchStats {
        SearchStats::default()
    }
}
