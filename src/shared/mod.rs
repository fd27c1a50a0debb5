// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (storage, logging)
pub mod utils; // Shared utilities

// Re-exports for convenience
pub use infrastructure::storage::{DocumentStore, InMemoryStore, JsonFileStore};
