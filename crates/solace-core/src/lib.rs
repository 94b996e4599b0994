pub mod config;
pub mod error;

pub use config::SolaceConfig;
pub use error::{Result, SolaceError};
