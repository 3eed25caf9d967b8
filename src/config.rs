// ---- Unit ratios. No touchy, every conversion is derived from these ----
pub const MICROS_PER_MILLI: i64 = 1_000;
pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const SECONDS_PER_MINUTE: i64 = 60;
pub const MINUTES_PER_HOUR: i64 = 60;

// ---- Calculated ratios ----
pub const MICROS_PER_SECOND: i64 = MICROS_PER_MILLI * MILLIS_PER_SECOND;
pub const MICROS_PER_MINUTE: i64 = MICROS_PER_SECOND * SECONDS_PER_MINUTE;
pub const MICROS_PER_HOUR: i64 = MICROS_PER_MINUTE * MINUTES_PER_HOUR;

// ---- Abort messages ----
// Reported when unwrap() is called on an empty Optional
pub const UNWRAP_NONE_MESSAGE: &str = "unwrapped Option without value!";
// Reported when the time is read before set_clock() and there is no default clock
pub const NO_CLOCK_MESSAGE: &str = "no clock source registered! Call set_clock() first";
