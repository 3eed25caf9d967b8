#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod abort;
pub mod config;
pub mod error;
pub mod option;
pub mod time;

pub use abort::{set_abort_handler, system_abort};
pub use error::Error;
pub use option::Optional;
pub use time::{
    DurationExt, Hours, Micros, Millis, Minutes, Seconds, TimeUnit,
    clock::{Clock, calculate_deadline, deadline_elapsed, now_us, set_clock},
};
