pub mod app;
pub mod error;
pub mod fit;
pub mod ui;

pub use error::{Error, Result};
