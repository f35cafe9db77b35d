//! Wall-clock labels shown under each chat bubble.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Format a 24-hour local time as `hh:mm AM` / `hh:mm PM`.
///
/// Matches the browser's `en-US` two-digit locale format but stays a pure
/// function so labels can be tested natively.
pub fn format_time_label(hours: u32, minutes: u32) -> String {
    let suffix = if hours % 24 < 12 { "AM" } else { "PM" };
    let hour12 = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12:02}:{:02} {suffix}", minutes % 60)
}

/// Current local time label, or an empty string outside the browser.
pub fn time_label() -> String {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        format_time_label(now.get_hours(), now.get_minutes())
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
