// Service exports
pub mod store;

pub use store::{EventCatalog, MemoryStore, PreferenceStore, StoreError};
