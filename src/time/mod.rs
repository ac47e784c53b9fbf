//! Time sources and time-derived display values.
//!
//! Everything here is a pure function of a timestamp and "now", so the
//! current instant is always read through a [`Clock`].

mod clock;
mod countdown;
mod format;

pub use clock::{Clock, FixedClock, SharedClock, SystemClock};
pub use countdown::{Countdown, CountdownStyle, Remaining};
pub use format::{format_long_date, format_relative, group_thousands};
