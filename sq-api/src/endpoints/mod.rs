//! API endpoint modules organized by resource.
//!
//! Each module adds methods to [`SleepIqClient`](crate::SleepIqClient) for a
//! group of related endpoints.

pub mod beds;
pub mod foundation;
pub mod sleepers;
