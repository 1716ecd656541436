use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::day::{DayMinutes, Weekday};
use crate::time::format_day_month;

pub const SESSION_MINUTES: u32 = 30;
pub const DAILY_GOAL_MINUTES: u32 = 360; // 6 hours
pub const WEEKLY_GOAL_MINUTES: u32 = 720; // 12 hours
pub const MONTHLY_GOAL_MINUTES: u32 = 2880; // 48 hours

/// Closed weeks kept in the history list, newest first.
pub const HISTORY_LIMIT: usize = 2;

/// Snapshot taken when a week is closed out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeekHistoryEntry {
    pub week: u32,
    pub minutes: u32,
    pub date: String,
}

/// The whole tracker document, persisted as a single JSON object.
/// Field names stay camelCase on disk so existing stored state loads as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackerState {
    pub current_week: u32,
    #[serde(default)]
    pub viewing_week: u32,
    pub weekly_minutes: DayMinutes,
    pub week_history: Vec<WeekHistoryEntry>,
    pub monthly_minutes: u32,
    /// Month index 0-11 of the last monthly rollover. Year is not recorded.
    pub last_reset_month: u32,
    #[serde(default)]
    pub week_data: BTreeMap<u32, DayMinutes>,
}

impl TrackerState {
    pub fn new(current_month: u32) -> Self {
        let mut week_data = BTreeMap::new();
        week_data.insert(1, DayMinutes::default());
        Self {
            current_week: 1,
            viewing_week: 1,
            weekly_minutes: DayMinutes::default(),
            week_history: Vec::new(),
            monthly_minutes: 0,
            last_reset_month: current_month,
            week_data,
        }
    }

    /// Fill in fields that older persisted documents did not carry.
    pub fn normalize(&mut self) {
        if self.viewing_week == 0 {
            self.viewing_week = self.current_week;
        }
        if self.week_data.is_empty() {
            self.week_data
                .insert(self.current_week, self.weekly_minutes.clone());
        }
    }

    /// Log one 30-minute session on a weekday of the open week.
    /// Returns false without touching anything while a past week is viewed.
    pub fn add_time(&mut self, day: Weekday) -> bool {
        if self.viewing_week != self.current_week {
            return false;
        }
        self.weekly_minutes.add(day, SESSION_MINUTES);
        self.week_data
            .insert(self.current_week, self.weekly_minutes.clone());
        self.monthly_minutes += SESSION_MINUTES;
        true
    }

    /// Close the open week and start the next one.
    pub fn advance_week(&mut self, today: NaiveDate) {
        let entry = WeekHistoryEntry {
            week: self.current_week,
            minutes: self.weekly_total(),
            date: format_day_month(today),
        };
        self.week_history.insert(0, entry);
        self.week_history.truncate(HISTORY_LIMIT);

        self.current_week += 1;
        self.viewing_week = self.current_week;
        self.weekly_minutes = DayMinutes::default();
        self.week_data
            .insert(self.current_week, DayMinutes::default());
    }

    /// Change the viewed week. An unrecorded week shows zeros but is not
    /// archived until time is actually logged in it.
    pub fn switch_to_week(&mut self, week: u32) {
        self.viewing_week = week;
        self.weekly_minutes = self.week_data.get(&week).cloned().unwrap_or_default();
    }

    /// Back to week 1 with everything cleared. The monthly rollover marker
    /// is independent of a user reset and stays put.
    pub fn reset_all(&mut self) {
        let last_reset_month = self.last_reset_month;
        *self = TrackerState::new(last_reset_month);
    }

    /// Zero the monthly total when the calendar month has moved on.
    /// Safe to call redundantly; a same-month call changes nothing.
    pub fn apply_monthly_reset(&mut self, current_month: u32) -> bool {
        if self.last_reset_month == current_month {
            return false;
        }
        self.monthly_minutes = 0;
        self.last_reset_month = current_month;
        true
    }

    pub fn weekly_total(&self) -> u32 {
        self.weekly_minutes.total()
    }

    /// Percent of the daily goal, unclamped.
    pub fn day_progress(&self, day: Weekday) -> f64 {
        self.weekly_minutes.get(day) as f64 / DAILY_GOAL_MINUTES as f64 * 100.0
    }

    /// Percent of the weekly goal, unclamped.
    pub fn weekly_progress(&self) -> f64 {
        self.weekly_total() as f64 / WEEKLY_GOAL_MINUTES as f64 * 100.0
    }

    /// Percent of the monthly goal, unclamped.
    pub fn monthly_progress(&self) -> f64 {
        self.monthly_minutes as f64 / MONTHLY_GOAL_MINUTES as f64 * 100.0
    }
}
