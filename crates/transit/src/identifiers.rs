//! Typed entity identifiers.
//!
//! Each entity gets its own `Arc<str>` newtype so a stop id cannot be
//! handed to a vehicle lookup by accident. Clones share the allocation,
//! which keeps the id-heavy store and arrival paths cheap.

use std::fmt;
use std::sync::Arc;

macro_rules! identifier {
    ($name:ident, $entity:literal) => {
        #[doc = concat!("Identifier of a ", $entity, " record.")]
        #[derive(Clone, Debug, Eq, Hash)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(id: impl AsRef<str>) -> Self {
                Self(id.as_ref().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        // Clones share the Arc, so compare pointers before contents.
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self::new(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

identifier!(VehicleIdentifier, "vehicle");
identifier!(RouteIdentifier, "route");
identifier!(StopIdentifier, "stop");
