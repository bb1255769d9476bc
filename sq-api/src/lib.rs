//! SleepIQ API - client for the Sleep Number SleepIQ cloud REST API.
//!
//! This crate provides a typed client covering the bed, sleeper and
//! foundation endpoints. It manages the login session, attaches the session
//! token to every request, and re-authenticates once when the server reports
//! the token as expired.

pub mod client;
pub mod endpoints;
pub mod models;
pub mod response;
pub mod session;
pub mod transport;

// Re-export key types
pub use client::SleepIqClient;
pub use endpoints::foundation::{Outlet, OutletSetting, Preset, PresetSpeed, SleepNumber};
pub use models::{Attributes, Bed, BedSides, FamilyStatus, Side, SideStatus, Sleeper};
pub use session::{Credentials, Session};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
