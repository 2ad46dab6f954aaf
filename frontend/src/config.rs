use chrono_tz::Tz;

/// Base URL of the backend that receives contact messages. Empty means the
/// site and the API share an origin.
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")
}

pub const CONTACT_PATH: &str = "/api/contact";

/// Upper bound for a single API request before it is reported as failed.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Zone shown in the hero status badge.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

pub const OWNER_NAME: &str = "ABDELLAH GRAM";
pub const OWNER_ORIGIN: &str = "MOROCCAN | EN · FR · AR";

pub const HERO_PHRASES: [&str; 3] = [
    "Script Development",
    "Managing Cultural Archives",
    "Media Content Operations",
];

pub const TYPING_INTERVAL_MS: u64 = 80;
pub const DELETING_INTERVAL_MS: u64 = 50;
pub const PAUSE_BEFORE_DELETE_MS: u64 = 2_000;
