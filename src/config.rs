//! Application-level configuration constants.

// Countdown behaviour
pub const INITIAL_SECONDS: u32 = 15;
pub const TICK_MS: u32 = 1_000;
pub const WARNING_AT_SECONDS: u32 = 10;

// Largest value the two-cell hour display can show (99:59:59)
pub const MAX_TOTAL_SECONDS: u32 = 99 * 3600 + 59 * 60 + 59;

// Assets
pub const WARNING_SOUND_SRC: &str = "/finishing.mp3";
pub const LOGO_SRC: &str = "/logo.svg";

// Displayed text
pub const FINISHED_TITLE: &str = "FINALIZOU SEU TEMPORIZER!";
pub const SECOND_SINGULAR: &str = "segundo";
pub const SECOND_PLURAL: &str = "segundos";
