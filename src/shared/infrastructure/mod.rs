pub mod storage;

pub use storage::{DocumentStore, InMemoryStore, JsonFileStore};
