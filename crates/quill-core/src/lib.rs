pub mod article;
pub mod config;
pub mod error;
pub mod session;
pub mod token;

// Re-export common error type
pub use error::QuillError;
