use ratatui::widgets::TableState;
use studytrack_core::{FileStateRepository, TrackerService, Weekday};

pub struct App {
    pub service: TrackerService<FileStateRepository>,
    pub state: TableState,
}

impl App {
    pub fn new(service: TrackerService<FileStateRepository>) -> App {
        let mut state = TableState::default();
        state.select(Some(0));
        App { service, state }
    }

    pub fn selected_day(&self) -> Weekday {
        Weekday::ALL[self.state.selected().unwrap_or(0)]
    }

    pub fn next(&mut self) {
        let i = match self.state.selected() {
            Some(i) => {
                if i >= Weekday::ALL.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    Weekday::ALL.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn log_time(&mut self) {
        let _ = self.service.add_time(self.selected_day());
    }

    pub fn advance_week(&mut self) {
        let _ = self.service.advance_week();
    }

    pub fn previous_week(&mut self) {
        let viewing = self.service.state().viewing_week;
        if viewing > 1 {
            let _ = self.service.switch_to_week(viewing - 1);
        }
    }

    pub fn next_week(&mut self) {
        let state = self.service.state();
        if state.viewing_week < state.current_week {
            let week = state.viewing_week + 1;
            let _ = self.service.switch_to_week(week);
        }
    }

    pub fn reset(&mut self) {
        let _ = self.service.reset_all();
    }

    pub fn check_monthly_reset(&mut self) {
        let _ = self.service.check_monthly_reset();
    }
}
