use crate::calendar::{CalendarDate, YearMonth};
use crate::nav::Screen;
use chrono::{Local, NaiveDate};

/// Shared application state: the displayed month, the real-world today and
/// the active screen. Screen changes are decided by the caller (key command
/// or gesture routing) and written back here explicitly.
pub struct Context {
    pub month: YearMonth,
    pub today: NaiveDate,
    pub screen: Screen,
}

impl Context {
    pub fn new() -> Context {
        let today = Local::now().date_naive();

        Context {
            month: today.into(),
            today,
            screen: Screen::Index,
        }
    }

    /// Refreshes `today` from the local clock; called on every tick.
    pub fn update(&mut self) {
        self.today = Local::now().date_naive();
    }

    pub fn today_cell(&self) -> CalendarDate {
        CalendarDate::from_naive(self.today)
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}
