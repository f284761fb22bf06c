//! Computer opponents: the [`Agent`] interface, the alpha-beta minimax
//! opponent, and a uniformly random baseline.

mod agent;
mod minimax;
mod random;

pub use agent::Agent;
pub use minimax::{MinimaxAgent, SearchConfig};
pub use random::RandomAgent;
