//! Application-wide constants.

/// Application name.
pub const APP_NAME: &str = "SleepIQ";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Vendor cloud API host.
pub const DEFAULT_BASE_URL: &str = "https://api.sleepiq.sleepnumber.com";

/// Default API request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Default TCP connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 15;

/// Query parameter carrying the session token on authenticated requests.
pub const AUTH_QUERY_PARAM: &str = "_k";

/// REST endpoint paths, relative to the API host.
pub mod paths {
    pub const LOGIN: &str = "/rest/login";
    pub const SLEEPERS: &str = "/rest/sleeper";
    pub const BEDS: &str = "/rest/bed";
    pub const FAMILY_STATUS: &str = "/rest/bed/familyStatus";

    /// Foundation outlet (lights) endpoint for one bed.
    pub fn outlet(bed_id: &str) -> String {
        format!("{BEDS}/{bed_id}/foundation/outlet")
    }

    /// Foundation preset endpoint for one bed.
    pub fn preset(bed_id: &str) -> String {
        format!("{BEDS}/{bed_id}/foundation/preset")
    }

    /// Firmness endpoint for one bed.
    pub fn sleep_number(bed_id: &str) -> String {
        format!("{BEDS}/{bed_id}/sleepNumber")
    }
}

/// Firmness bounds accepted by the sleep number endpoint.
pub mod sleep_number {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;
    pub const STEP: u8 = 5;
}
