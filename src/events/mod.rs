//! Event handling for PlayZone.
//!
//! Terminal input becomes [`Action`](crate::state::Action)s through the
//! [`EventHandler`]. Countdown ticks arrive on the same action channel from
//! the tasks owned by a [`TimerSet`].

mod handler;
mod input;
mod ticker;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, Modifiers};
pub use ticker::{TimerGuard, TimerSet};
