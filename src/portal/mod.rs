//! Portal runtime support
//!
//! Error handling, logging setup and request-document loading shared by the
//! library and the `nextu-portal` binary.

pub mod error;
pub mod logging;
pub mod requests;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use requests::*;
