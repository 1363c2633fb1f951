use chrono::{DateTime, Local, TimeZone};

/// Hour and minute as `HHMM`, used to stamp export file names
pub fn hour_minute_stamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%H%M").to_string()
}

/// Current local `HHMM`
pub fn current_hour_minute() -> String {
    hour_minute_stamp(&Local::now())
}
