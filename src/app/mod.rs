pub mod cli;
pub mod config;
pub mod events;
pub mod keys;
pub mod logging;
pub mod print;
pub mod source;
pub mod state;

pub use state::*;
