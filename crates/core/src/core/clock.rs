use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// `DD-MM-YYYY H:MM AM/PM`, 12-hour clock (`0:05` renders as `12:05 AM`).
pub fn format_time(t: &NaiveDateTime) -> String {
    let hour24 = t.hour();
    let ampm = if hour24 >= 12 { "PM" } else { "AM" };
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    format!(
        "{:02}-{:02}-{} {}:{:02} {}",
        t.day(),
        t.month(),
        t.year(),
        hour12,
        t.minute(),
        ampm
    )
}

pub fn year_text(t: &NaiveDateTime) -> String {
    t.year().to_string()
}

/// Build a local wall-clock time from calendar fields (month is 1-based).
/// Out-of-range fields yield `None`.
pub fn local_datetime(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
}
