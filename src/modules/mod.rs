//! Package management modules

pub mod error;
pub mod system;

// Re-export commonly used types
pub use error::*;
