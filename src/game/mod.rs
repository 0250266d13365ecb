pub mod automaton;
pub mod cost;
pub mod state;
pub mod zones;

pub use automaton::{instant_window, step, Outcome, ACTION_CAP};
pub use state::{Boardstate, EngineFault};
pub use zones::{
    Battlefield, CardArena, CardId, CardInstance, Exile, ExileEntry, Library, EXILE_TIMER,
    MANA_PER_COUNTER_SET, MAX_COUNTERS,
};
