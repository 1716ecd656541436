use chrono::{Datelike, Local};
use studytrack_core::{format_duration, month_name, TrackerState, Weekday};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Day")]
    day: &'static str,
    #[tabled(rename = "Studied")]
    studied: String,
    #[tabled(rename = "Daily goal")]
    progress: String,
}

pub fn show_status(state: &TrackerState) {
    if state.viewing_week == state.current_week {
        println!("Week {} (open)", state.current_week);
    } else {
        println!(
            "Week {} (viewing; week {} is open)",
            state.viewing_week, state.current_week
        );
    }

    let rows: Vec<DayRow> = Weekday::ALL
        .iter()
        .map(|day| DayRow {
            day: day.label(),
            studied: format_duration(state.weekly_minutes.get(*day)),
            progress: format!("{:.0}%", state.day_progress(*day)),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("{}", table);

    println!(
        "Weekly:  {} ({:.0}% of goal)",
        format_duration(state.weekly_total()),
        state.weekly_progress()
    );
    println!(
        "{}: {} ({:.0}% of goal)",
        month_name(Local::now().month0()),
        format_duration(state.monthly_minutes),
        state.monthly_progress()
    );
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Week")]
    week: u32,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Closed")]
    date: String,
}

pub fn show_history(state: &TrackerState) {
    if state.week_history.is_empty() {
        println!("No closed weeks yet.");
        return;
    }

    let rows: Vec<HistoryRow> = state
        .week_history
        .iter()
        .map(|entry| HistoryRow {
            week: entry.week,
            total: format_duration(entry.minutes),
            date: entry.date.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("{}", table);
}
