use std::time::Duration;

/// Production portal serving the slot calendar.
pub(crate) const PORTAL_URL: &str = "https://projects.intra.42.fr";

/// Environment variable overriding the portal base URL.
pub(crate) const PORTAL_URL_ENV: &str = "SLOTWATCH_PORTAL_URL";

/// Name of the intra session cookie that carries the token.
pub(crate) const SESSION_COOKIE: &str = "_intra_42_session_production";

/// Slot timestamps as served by the portal: "2026-08-25T13:30:00"
pub(crate) const SLOT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Date format for the start/end query parameters: "2026-08-25"
pub(crate) const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp prefix on console event lines.
pub(crate) const EVENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Seconds between polls unless --interval says otherwise.
pub(crate) const DEFAULT_INTERVAL_SECS: u64 = 10;

/// Hard cap on a single HTTP round trip.
pub(crate) const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Portal base URL, honoring the environment override.
pub(crate) fn portal_base_url() -> String {
    std::env::var(PORTAL_URL_ENV).unwrap_or_else(|_| PORTAL_URL.to_string())
}
