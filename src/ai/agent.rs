use crate::game::GameState;

/// Universal interface for computer opponents.
pub trait Agent {
    /// Select a column for the side to move.
    ///
    /// Callers must only invoke this while the game is in progress with at
    /// least one open column; the state itself is never modified.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent>;
}
