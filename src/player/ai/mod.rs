pub mod alpha_beta;
pub mod breadth_first;
pub mod config;
pub mod depth_first;
pub mod evaluator;
pub mod iterative;
pub mod minimax;
pub mod random;
pub mod search;
pub mod selector;

pub use alpha_beta::AlphaBetaAI;
pub use breadth_first::BreadthFirstAI;
pub use config::{AIConfig, EvaluationConfig, PlayerSetup, SearchConfig};
pub use depth_first::DepthFirstAI;
pub use evaluator::{Evaluator, SeedEvaluator};
pub use iterative::IterativeDeepeningAI;
pub use minimax::MinimaxAI;
pub use random::RandomAI;
pub use search::{Role, SearchStats};
pub use selector::{AIPlayer, Algorithm, UnknownAlgorithm};
