//! In-memory navigator.
//!
//! Keeps a current location and records every requested navigation instead
//! of moving anywhere. Used in tests and by hosts without a screen (the CLI),
//! where a login redirect can only be reported.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ports::Navigator;

#[derive(Debug)]
pub struct RecordingNavigator {
    location: Mutex<String>,
    navigations: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Starts at `location` (path plus query).
    pub fn at(location: impl Into<String>) -> Self {
        Self {
            location: Mutex::new(location.into()),
            navigations: Mutex::new(Vec::new()),
        }
    }

    /// Simulates an in-app route change.
    pub fn set_location(&self, location: impl Into<String>) {
        *lock(&self.location) = location.into();
    }

    /// Targets passed to `navigate`, oldest first.
    pub fn navigations(&self) -> Vec<String> {
        lock(&self.navigations).clone()
    }

    pub fn navigation_count(&self) -> usize {
        lock(&self.navigations).len()
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::at("/")
    }
}

impl Navigator for RecordingNavigator {
    fn current_location(&self) -> String {
        lock(&self.location).clone()
    }

    fn navigate(&self, target: &str) {
        lock(&self.navigations).push(target.to_string());
        // A full navigation lands the user on the target.
        *lock(&self.location) = target.to_string();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
