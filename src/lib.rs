pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod status;

pub use error::{Result, StatusError};
