//! Duration argument of moderation commands: `<integer><unit>` with unit `m`, `h`, `d` or `w`.
//!
//! Anything that does not parse means "no expiry", never an error.

use chrono::{DateTime, Duration, Utc};
use lazy_regex::regex_captures;

/// Turns a duration argument into an absolute expiry time relative to `now`.
///
/// The argument is lowercased and trimmed and must start with digits followed by a unit letter;
/// trailing text is ignored (`"10m за флуд"` is ten minutes). Returns `None` for a missing,
/// empty or malformed argument, an unknown unit, or a value that overflows.
pub fn parse_until(arg: Option<&str>, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let arg = arg?.trim().to_lowercase();
    let (_, value, unit) = regex_captures!(r"^([0-9]+)([a-z])", &arg)?;
    let value: i64 = value.parse().ok()?;

    let delta = match unit {
        "m" => Duration::try_minutes(value),
        "h" => Duration::try_hours(value),
        "d" => Duration::try_days(value),
        "w" => Duration::try_weeks(value),
        _ => None,
    }?;

    now.checked_add_signed(delta)
}

/// [`parse_until`] relative to the current time.
pub fn parse_until_now(arg: Option<&str>) -> Option<DateTime<Utc>> {
    parse_until(arg, Utc::now())
}
