use chrono::{
  NaiveDateTime,
  Timelike
};

/// Header date line, e.g. `Sunday,
/// October 18`.
pub fn format_header_date(
  now: NaiveDateTime
) -> String {
  now.format("%A, %B %-d").to_string()
}

pub fn format_header_time(
  now: NaiveDateTime
) -> String {
  now.format("%H:%M").to_string()
}

pub fn greeting(
  now: NaiveDateTime
) -> &'static str {
  match now.hour() {
    | 5..=11 => "Good morning",
    | 12..=17 => "Good afternoon",
    | _ => "Good evening"
  }
}

/// Clock value shown in the header; ticks
/// inside the same minute compare equal.
pub fn to_minute(
  now: NaiveDateTime
) -> NaiveDateTime {
  now
    .with_second(0)
    .and_then(|t| t.with_nanosecond(0))
    .unwrap_or(now)
}
