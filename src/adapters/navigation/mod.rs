//! Navigation adapters.
//!
//! - `RecordingNavigator` - In-memory location plus navigation log

mod recording_navigator;

pub use recording_navigator::RecordingNavigator;
