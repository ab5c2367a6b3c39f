use crate::calendar::{CalendarDate, MonthGrid};
use crate::ui::widgets::{GridWidgets, Styled};
use std::cmp::Ordering;

/// Assembles a month grid into rows of rendering descriptions through the
/// configured hooks. Pure; painting happens elsewhere.
pub struct MonthPane<'a> {
    grid: &'a MonthGrid,
    today: CalendarDate,
    widgets: &'a GridWidgets,
}

impl<'a> MonthPane<'a> {
    pub const COLUMNS: u16 = 7;
    /// Cell text plus one column of spacing.
    pub const CELL_WIDTH: u16 = 3;

    pub fn new(grid: &'a MonthGrid, today: CalendarDate, widgets: &'a GridWidgets) -> Self {
        MonthPane {
            grid,
            today,
            widgets,
        }
    }

    pub fn width() -> u16 {
        Self::COLUMNS * Self::CELL_WIDTH
    }

    pub fn title(&self) -> Styled {
        (self.widgets.header)(self.grid.month(), self.today.month)
    }

    pub fn label_row(&self) -> Vec<Styled> {
        self.grid
            .weekdays()
            .iter()
            .map(|day| (self.widgets.weekday_label)(*day))
            .collect()
    }

    /// One entry per week row; filler cells are dispatched to the
    /// adjacent-month hooks by comparing against the displayed month.
    pub fn rows(&self) -> Vec<Vec<Styled>> {
        self.grid
            .weeks()
            .iter()
            .map(|week| {
                week.iter()
                    .map(|cell| match cell.month.cmp(&self.grid.month()) {
                        Ordering::Less => (self.widgets.prior_month_day)(cell),
                        Ordering::Equal => (self.widgets.day)(cell, &self.today),
                        Ordering::Greater => (self.widgets.next_month_day)(cell),
                    })
                    .collect()
            })
            .collect()
    }
}
