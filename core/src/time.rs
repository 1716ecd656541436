use chrono::NaiveDate;

/// Compact hours-and-minutes rendering: "0min", "45min", "1h", "1h30".
pub fn format_duration(minutes: u32) -> String {
    if minutes == 0 {
        return "0min".to_string();
    }
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours == 0 {
        return format!("{}min", mins);
    }
    if mins == 0 {
        return format!("{}h", hours);
    }
    format!("{}h{}", hours, mins)
}

/// Two-digit day/month stamp used for closed-week history entries.
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name for a 0-11 month index.
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES[month0 as usize % 12]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0min");
        assert_eq!(format_duration(30), "30min");
        assert_eq!(format_duration(45), "45min");
        assert_eq!(format_duration(60), "1h");
        assert_eq!(format_duration(90), "1h30");
        assert_eq!(format_duration(360), "6h");
    }

    #[test]
    fn test_format_day_month() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_day_month(date), "07/03");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(11), "December");
    }
}
