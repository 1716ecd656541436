pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use model::day::{DayMinutes, Weekday};
pub use model::tracker::{
    TrackerState, WeekHistoryEntry, DAILY_GOAL_MINUTES, MONTHLY_GOAL_MINUTES, SESSION_MINUTES,
    WEEKLY_GOAL_MINUTES,
};
pub use repository::{FileStateRepository, StateRepository};
pub use service::TrackerService;
pub use time::{format_day_month, format_duration, month_name};
