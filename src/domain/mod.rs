//! Domain logic - pure string rules independent of running git

pub mod describe;
pub mod version;

pub use describe::TagDescription;
pub use version::VersionString;
