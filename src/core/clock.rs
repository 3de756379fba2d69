use chrono::{NaiveDate, Utc};

// Clock abstracts the calendar date consumed by the overdue classifier and
// renewals so tests can pin it.
pub trait Clock: Sync + Send {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

// Fixed calendar date, for tests and report cutoffs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::core::clock::{Clock, FixedClock, SystemClock};

    #[tokio::test]
    async fn test_should_pin_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let clock = FixedClock::new(date);
        assert_eq!(date, clock.today());
    }

    #[tokio::test]
    async fn test_should_read_system_clock() {
        let clock = SystemClock;
        let _ = clock.today();
    }
}
