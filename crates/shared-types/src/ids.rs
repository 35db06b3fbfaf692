//! Typed record identifiers.
//!
//! Every persisted collection keys its records by a UUID wrapped in a
//! collection-specific newtype, so a request id can never be passed where a
//! user id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generates a fresh random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

record_id!(
    /// Identifier of any user record (receiver, donor, or organization).
    UserId
);
record_id!(
    /// Identifier of a blood request.
    RequestId
);
record_id!(
    /// Identifier of a donation log entry.
    DonationId
);
record_id!(
    /// Identifier of an inventory item.
    InventoryId
);
record_id!(
    /// Identifier of a hospital verification request.
    VerificationId
);
