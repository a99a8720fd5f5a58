pub mod core;
pub mod game;
pub mod logic;
pub mod player;
