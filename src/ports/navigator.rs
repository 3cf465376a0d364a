//! Navigator port - Interface to the host's page navigation.
//!
//! Implementations wrap whatever can move the user to another screen (a
//! browser location, a native shell's router, a recorder in tests). The
//! navigation is a full, one-way move: callers do not wait for it and cannot
//! cancel it.

/// Reads and changes the user's current location.
pub trait Navigator: Send + Sync {
    /// Path plus query string of the current screen, e.g. `/plans/3?tab=votes`.
    fn current_location(&self) -> String;

    /// Moves the user to `target`. Fire-and-forget.
    fn navigate(&self, target: &str);
}
