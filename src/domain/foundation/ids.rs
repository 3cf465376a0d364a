//! Strongly-typed identifier value objects.
//!
//! The backend hands out numeric (database) identifiers. Wrapping them keeps a
//! `BarId` from being passed where a `ReviewId` is expected when building
//! request paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw backend identifier.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier.
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

numeric_id!(
    /// Identifier of a registered user.
    UserId
);
numeric_id!(
    /// Identifier of a bar (venue).
    BarId
);
numeric_id!(
    /// Identifier of a review.
    ReviewId
);
numeric_id!(
    /// Identifier of a personal memo.
    MemoId
);
numeric_id!(
    /// Identifier of an outing plan.
    PlanId
);
numeric_id!(
    /// Identifier of a scheduled outing (also keys calendar events).
    ScheduleId
);
