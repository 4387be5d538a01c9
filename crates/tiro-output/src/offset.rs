use std::time::Duration;

const MICROS_PER_SECOND: u128 = 1_000_000;
const SECONDS_PER_DAY: u128 = 86_400;

/// Render an offset as `H:MM:SS[.ffffff]`, prefixed with `N day(s), ` past
/// 24 hours. Sub-microsecond precision is truncated.
pub fn format_offset(offset: Duration) -> String {
    let total_micros = offset.as_micros();
    let micros = total_micros % MICROS_PER_SECOND;
    let total_seconds = total_micros / MICROS_PER_SECOND;
    let days = total_seconds / SECONDS_PER_DAY;
    let seconds_of_day = total_seconds % SECONDS_PER_DAY;

    let hours = seconds_of_day / 3600;
    let minutes = seconds_of_day % 3600 / 60;
    let seconds = seconds_of_day % 60;

    let mut out = String::new();
    if days > 0 {
        let unit = if days == 1 { "day" } else { "days" };
        out.push_str(&format!("{days} {unit}, "));
    }
    out.push_str(&format!("{hours}:{minutes:02}:{seconds:02}"));
    if micros != 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out
}
