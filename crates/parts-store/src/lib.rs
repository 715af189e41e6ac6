//! Store boundary for the auto parts catalog.
//!
//! The catalog never talks to a database directly. It issues simple
//! `select(table)` queries with equality filters through the [`Store`]
//! trait, so the search core can run against a live backend or against
//! an in-memory fixture.
//!
//! # Example
//!
//! ```rust
//! use parts_store::{MemoryStore, Select, Store};
//!
//! let store = MemoryStore::from_json(r#"{
//!     "car_brands": [
//!         {"id": 1, "name": "Brembo"},
//!         {"id": 2, "name": "Bosch"}
//!     ]
//! }"#).unwrap();
//!
//! let result = store.select(&Select::from("car_brands").eq("id", 2)).unwrap();
//! assert_eq!(result.len(), 1);
//! assert_eq!(result.first().unwrap().get_text("name"), Some("Bosch"));
//! ```

mod error;
mod memory;
mod query;
mod store;
mod types;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use query::{Condition, Select};
pub use store::Store;
pub use types::{QueryResult, Row, Value};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{MemoryStore, QueryResult, Row, Select, Store, StoreError, Value};
}
