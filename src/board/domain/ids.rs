//! Identifier types for the board domain.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Parses an identifier from its textual UUID form.
            ///
            /// # Errors
            ///
            /// Returns [`BoardDomainError::InvalidIdentifier`] when the value
            /// is not a UUID.
            pub fn parse(value: &str) -> Result<Self, BoardDomainError> {
                Uuid::parse_str(value.trim())
                    .map(Self)
                    .map_err(|_| BoardDomainError::InvalidIdentifier {
                        kind: $label,
                        value: value.to_owned(),
                    })
            }

            /// Returns the wrapped UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl AsRef<Uuid> for $name {
            fn as_ref(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_identifier!(
    /// Unique identifier for a board document.
    BoardId,
    "board"
);

uuid_identifier!(
    /// Unique identifier for a task record.
    TaskId,
    "task"
);

uuid_identifier!(
    /// Unique identifier for a registered user.
    UserId,
    "user"
);
