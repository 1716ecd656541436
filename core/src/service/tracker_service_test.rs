#[cfg(test)]
mod tests {
    use crate::model::day::Weekday;
    use crate::model::tracker::TrackerState;
    use crate::repository::StateRepository;
    use crate::service::tracker_service::TrackerService;
    use anyhow::{anyhow, Result};
    use chrono::NaiveDate;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// In-memory store whose innards stay observable after the service
    /// takes its clone.
    #[derive(Clone, Default)]
    struct MockStateRepository {
        stored: Rc<RefCell<Option<TrackerState>>>,
        saves: Rc<Cell<usize>>,
        fail_load: bool,
    }

    impl StateRepository for MockStateRepository {
        fn load(&self) -> Result<Option<TrackerState>> {
            if self.fail_load {
                return Err(anyhow!("storage unreadable"));
            }
            Ok(self.stored.borrow().clone())
        }

        fn save(&self, state: &TrackerState) -> Result<()> {
            *self.stored.borrow_mut() = Some(state.clone());
            self.saves.set(self.saves.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_fresh_start_persists_initial_state() {
        let repo = MockStateRepository::default();
        let service = TrackerService::with_month(repo.clone(), 2).unwrap();

        assert_eq!(service.state(), &TrackerState::new(2));
        assert_eq!(repo.stored.borrow().as_ref(), Some(service.state()));
    }

    #[test]
    fn test_load_failure_falls_back_to_initial_state() {
        let repo = MockStateRepository {
            fail_load: true,
            ..Default::default()
        };
        let service = TrackerService::with_month(repo, 6).unwrap();
        assert_eq!(service.state(), &TrackerState::new(6));
    }

    #[test]
    fn test_month_rollover_applied_on_load() {
        let mut saved = TrackerState::new(3);
        saved.add_time(Weekday::Monday);
        let repo = MockStateRepository::default();
        *repo.stored.borrow_mut() = Some(saved);

        let service = TrackerService::with_month(repo, 4).unwrap();

        assert_eq!(service.state().monthly_minutes, 0);
        assert_eq!(service.state().last_reset_month, 4);
        // The week tally itself survives the rollover
        assert_eq!(service.state().weekly_minutes.monday, 30);
    }

    #[test]
    fn test_legacy_document_is_normalized_on_load() {
        let mut saved = TrackerState::new(0);
        saved.current_week = 4;
        saved.viewing_week = 0;
        saved.week_data.clear();
        saved.weekly_minutes.friday = 60;
        let repo = MockStateRepository::default();
        *repo.stored.borrow_mut() = Some(saved);

        let service = TrackerService::with_month(repo, 0).unwrap();

        assert_eq!(service.state().viewing_week, 4);
        assert_eq!(
            service.state().week_data.get(&4),
            Some(&service.state().weekly_minutes)
        );
    }

    #[test]
    fn test_add_time_persists() {
        let repo = MockStateRepository::default();
        let mut service = TrackerService::with_month(repo.clone(), 0).unwrap();

        assert!(service.add_time(Weekday::Thursday).unwrap());

        let stored = repo.stored.borrow().clone().unwrap();
        assert_eq!(stored.weekly_minutes.thursday, 30);
        assert_eq!(stored.monthly_minutes, 30);
    }

    #[test]
    fn test_noop_add_does_not_write() {
        let repo = MockStateRepository::default();
        let mut service = TrackerService::with_month(repo.clone(), 0).unwrap();
        service
            .advance_week_on(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
            .unwrap();
        service.switch_to_week(1).unwrap();

        let saves_before = repo.saves.get();
        assert!(!service.add_time(Weekday::Monday).unwrap());
        assert_eq!(repo.saves.get(), saves_before);
    }

    #[test]
    fn test_same_month_check_does_not_write() {
        let repo = MockStateRepository::default();
        let mut service = TrackerService::with_month(repo.clone(), 9).unwrap();

        let saves_before = repo.saves.get();
        assert!(!service.check_monthly_reset_on(9).unwrap());
        assert_eq!(repo.saves.get(), saves_before);

        assert!(service.check_monthly_reset_on(10).unwrap());
        assert_eq!(repo.saves.get(), saves_before + 1);
    }

    #[test]
    fn test_reset_all_persists_initial_state() {
        let repo = MockStateRepository::default();
        let mut service = TrackerService::with_month(repo.clone(), 5).unwrap();
        service.add_time(Weekday::Monday).unwrap();
        service
            .advance_week_on(NaiveDate::from_ymd_opt(2025, 6, 9).unwrap())
            .unwrap();

        service.reset_all().unwrap();

        let stored = repo.stored.borrow().clone().unwrap();
        assert_eq!(stored, TrackerState::new(5));
    }
}
