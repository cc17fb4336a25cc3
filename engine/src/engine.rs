/// A stateful game session driven one action at a time by an adapter.
///
/// Players are numbered from 1. A rejected action must leave the session untouched.
pub trait GameEngine {
    type Action;
    type Outcome;
    type Error;

    fn take_action(&mut self, action: &Self::Action) -> Result<Self::Outcome, Self::Error>;
    fn terminal_state(&self) -> Option<Self::Outcome>;
    fn player_to_move(&self) -> usize;
    fn move_number(&self) -> usize;
}
