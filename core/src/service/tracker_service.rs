use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};

use crate::model::day::Weekday;
use crate::model::tracker::TrackerState;
use crate::repository::StateRepository;

/// Sole owner of the live tracker state. Callers get read-only snapshots
/// through `state()` and mutate through the methods here, which persist the
/// whole document after every transition that actually changed something.
pub struct TrackerService<R: StateRepository> {
    repo: R,
    state: TrackerState,
}

impl<R: StateRepository> TrackerService<R> {
    pub fn new(repo: R) -> Result<Self> {
        Self::with_month(repo, Local::now().month0())
    }

    /// Initialization with an explicit calendar month, so tests can pin the
    /// clock. Missing or unreadable persisted state starts the tracker
    /// fresh; a month rollover is applied as part of loading.
    pub fn with_month(repo: R, current_month: u32) -> Result<Self> {
        let mut state = match repo.load() {
            Ok(Some(state)) => state,
            Ok(None) | Err(_) => TrackerState::new(current_month),
        };
        state.normalize();
        state.apply_monthly_reset(current_month);
        repo.save(&state)?;

        Ok(Self { repo, state })
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Log 30 minutes on a weekday of the open week. Returns false without
    /// writing anything while a past week is being viewed.
    pub fn add_time(&mut self, day: Weekday) -> Result<bool> {
        if !self.state.add_time(day) {
            return Ok(false);
        }
        self.repo.save(&self.state)?;
        Ok(true)
    }

    pub fn advance_week(&mut self) -> Result<()> {
        self.advance_week_on(Local::now().date_naive())
    }

    pub fn advance_week_on(&mut self, today: NaiveDate) -> Result<()> {
        self.state.advance_week(today);
        self.repo.save(&self.state)
    }

    pub fn switch_to_week(&mut self, week: u32) -> Result<()> {
        self.state.switch_to_week(week);
        self.repo.save(&self.state)
    }

    pub fn reset_all(&mut self) -> Result<()> {
        self.state.reset_all();
        self.repo.save(&self.state)
    }

    /// Invoked on load and re-invoked periodically by the front end, since
    /// the process may sit open across a month boundary. A same-month call
    /// changes nothing and writes nothing.
    pub fn check_monthly_reset(&mut self) -> Result<bool> {
        self.check_monthly_reset_on(Local::now().month0())
    }

    pub fn check_monthly_reset_on(&mut self, current_month: u32) -> Result<bool> {
        if !self.state.apply_monthly_reset(current_month) {
            return Ok(false);
        }
        self.repo.save(&self.state)?;
        Ok(true)
    }
}
