pub mod config;
pub mod style;

pub use config::*;
pub use style::*;
