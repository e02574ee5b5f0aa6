// ABOUTME: Alert de-duplication — per-kind Armed/Fired state machines.
// ABOUTME: Each alert kind notifies once per true episode and re-arms on a false reading.

pub mod arming;
pub mod types;

pub use arming::*;
pub use types::*;
