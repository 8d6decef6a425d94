//! Formatting of the last-login stamp (e.g., "Sun Mar 14 23:14:25").

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a Unix timestamp (UTC) as `Www Mmm DD hh:mm:ss`.
pub fn format_login_date(timestamp: u64) -> String {
    let days = timestamp / 86400;
    let secs = timestamp % 86400;

    // 1970-01-01 was a Thursday
    let weekday = WEEKDAYS[((days + 4) % 7) as usize];

    let mut year = 1970i64;
    let mut remaining_days = days as i64;
    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 0;
    for days_in_month in days_in_months.iter() {
        if remaining_days < *days_in_month {
            break;
        }
        remaining_days -= days_in_month;
        month += 1;
    }

    format!(
        "{} {} {:02} {:02}:{:02}:{:02}",
        weekday,
        MONTHS[month],
        remaining_days + 1,
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Check if a year is a leap year.
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
