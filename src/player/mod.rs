pub mod ai;
pub mod controller;

pub use ai::{AIPlayer, Algorithm};
pub use controller::PlayerController;
