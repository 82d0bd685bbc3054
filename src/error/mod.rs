//! Error handling module for console-demo
//!
//! The SDK-backed loop never fails; these types exist for the injected
//! backend seam, where host and test backends can report misuse.

pub mod backend;
pub mod types;

// Re-export main types
pub use backend::BackendError;
pub use types::{DemoError, DemoResult};
