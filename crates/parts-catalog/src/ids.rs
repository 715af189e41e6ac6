//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a BrandId where a ModelId is expected.

use parts_store::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate integer newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A store-assigned integer identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID.
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the raw integer.
            pub const fn get(self) -> i64 {
                self.0
            }

            /// Whether the store could ever have assigned this ID.
            ///
            /// Store IDs start at 1, so zero and negative values never
            /// identify a record.
            pub const fn is_valid(self) -> bool {
                self.0 > 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Value {
            fn from(id: $name) -> Self {
                Value::Integer(id.0)
            }
        }
    };
}

define_id!(BrandId);
define_id!(ModelId);
define_id!(CategoryId);
define_id!(ProductId);
