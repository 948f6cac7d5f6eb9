pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

// Re-export all models and services for external use
pub use error::*;
pub use models::*;
pub use services::*;
pub use state::DirectoryState;
