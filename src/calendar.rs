use chrono::naive::NaiveDate;
use chrono::{Datelike, Month, Weekday};
use num_traits::FromPrimitive;
use std::fmt;
use std::ops::Deref;

/// A year/month pair, the unit the calendar navigates in.
///
/// Month arithmetic is unbounded in both directions; shifting past December
/// or January rolls the year over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> YearMonth {
        debug_assert!((1..=12).contains(&month));
        YearMonth { year, month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Number of days in this month.
    pub fn len(&self) -> u32 {
        self.succ()
            .first_day()
            .signed_duration_since(self.first_day())
            .num_days() as u32
    }

    /// Zero-based weekday index of the 1st, relative to `week_start`.
    pub fn offset(&self, week_start: Weekday) -> u32 {
        (self.first_day().weekday().num_days_from_monday() + 7
            - week_start.num_days_from_monday())
            % 7
    }

    /// Shifts by whole months, `delta` signed.
    pub fn shift(self, delta: i32) -> YearMonth {
        let total = self.year * 12 + (self.month as i32 - 1) + delta;

        YearMonth {
            year: total.div_euclid(12),
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn pred(self) -> YearMonth {
        self.shift(-1)
    }

    pub fn succ(self) -> YearMonth {
        self.shift(1)
    }

    pub fn name(&self) -> &'static str {
        Month::from_u32(self.month).unwrap().name()
    }
}

impl<T: Datelike> From<T> for YearMonth {
    fn from(d: T) -> Self {
        YearMonth::new(d.year(), d.month())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

/// A single day cell of a month grid.
///
/// Filler cells carry the adjacent month in `month`, not the displayed one,
/// so a renderer can tell them apart by comparing against the grid's month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub day: u32,
    pub weekday: Weekday,
    pub month: YearMonth,
}

impl CalendarDate {
    pub fn from_naive(date: NaiveDate) -> CalendarDate {
        CalendarDate {
            day: date.day(),
            weekday: date.weekday(),
            month: date.into(),
        }
    }
}

/// Exactly seven consecutive day cells, starting on the configured
/// week-start day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow([CalendarDate; 7]);

impl Deref for WeekRow {
    type Target = [CalendarDate];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A full month laid out as week rows, flanked by adjacent-month filler so
/// every row holds seven cells. Derived fresh whenever the displayed month
/// changes; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    week_start: Weekday,
    weeks: Vec<WeekRow>,
}

impl MonthGrid {
    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn weeks(&self) -> &[WeekRow] {
        &self.weeks
    }

    /// The seven weekdays in display order.
    pub fn weekdays(&self) -> [Weekday; 7] {
        weekdays_from(self.week_start)
    }

    /// All cells in row order.
    pub fn cells(&self) -> impl Iterator<Item = &CalendarDate> {
        self.weeks.iter().flat_map(|week| week.iter())
    }
}

fn weekdays_from(start: Weekday) -> [Weekday; 7] {
    let mut days = [start; 7];
    for i in 1..7 {
        days[i] = days[i - 1].succ();
    }
    days
}

/// Computes the month grid for `month`.
///
/// Leading cells count down from the tail of the previous month, trailing
/// cells continue into the next month from day 1. A month that ends exactly
/// on a row boundary gets no trailing filler and no extra row. Total over
/// all valid months; never fails.
pub fn month_grid(month: YearMonth, week_start: Weekday) -> MonthGrid {
    let first_day_offset = month.offset(week_start);
    let month_length = month.len();
    let prior = month.pred();
    let prior_month_length = prior.len();
    let next = month.succ();
    let weekdays = weekdays_from(week_start);

    let week_count = (first_day_offset + month_length) / 7;
    let last_day_count = (first_day_offset + month_length) % 7;
    let rows = if last_day_count == 0 {
        week_count
    } else {
        week_count + 1
    };

    let weeks = (0..rows)
        .map(|row| {
            WeekRow(std::array::from_fn(|slot| {
                let linear = row * 7 + slot as u32;
                let weekday = weekdays[slot];

                if linear < first_day_offset {
                    CalendarDate {
                        day: prior_month_length - (first_day_offset - linear) + 1,
                        weekday,
                        month: prior,
                    }
                } else if linear - first_day_offset < month_length {
                    CalendarDate {
                        day: linear - first_day_offset + 1,
                        weekday,
                        month,
                    }
                } else {
                    CalendarDate {
                        day: linear - first_day_offset - month_length + 1,
                        weekday,
                        month: next,
                    }
                }
            }))
        })
        .collect();

    MonthGrid {
        month,
        week_start,
        weeks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(year: i32, month: u32) -> MonthGrid {
        month_grid(YearMonth::new(year, month), Weekday::Mon)
    }

    #[test]
    fn leap_february_rows() {
        // Feb 1st 2024 is a Thursday, offset 3 from Monday.
        let grid = grid(2024, 2);
        assert_eq!(grid.weeks().len(), 5);

        let first: Vec<(u32, u32)> = grid.weeks()[0]
            .iter()
            .map(|c| (c.month.month(), c.day))
            .collect();
        assert_eq!(
            first,
            vec![(1, 29), (1, 30), (1, 31), (2, 1), (2, 2), (2, 3), (2, 4)]
        );

        let last: Vec<(u32, u32)> = grid.weeks()[4]
            .iter()
            .map(|c| (c.month.month(), c.day))
            .collect();
        assert_eq!(
            last,
            vec![(2, 26), (2, 27), (2, 28), (2, 29), (3, 1), (3, 2), (3, 3)]
        );
        assert_eq!(grid.weeks()[4][3].weekday, Weekday::Thu);
    }

    #[test]
    fn month_ending_on_row_boundary_has_no_filler_row() {
        // June 2024 starts on a Saturday and ends on a Sunday: 35 cells.
        let grid = grid(2024, 6);
        assert_eq!(grid.weeks().len(), 5);

        let first: Vec<(u32, u32)> = grid.weeks()[0]
            .iter()
            .map(|c| (c.month.month(), c.day))
            .collect();
        assert_eq!(
            first,
            vec![(5, 27), (5, 28), (5, 29), (5, 30), (5, 31), (6, 1), (6, 2)]
        );

        let last = &grid.weeks()[4];
        assert!(last.iter().all(|c| c.month == YearMonth::new(2024, 6)));
        assert_eq!(last[6].day, 30);
    }

    #[test]
    fn rows_always_hold_seven_cells() {
        for month in 1..=12 {
            let grid = grid(2023, month);
            for week in grid.weeks() {
                assert_eq!(week.len(), 7);
            }
        }
    }

    #[test]
    fn current_month_days_are_contiguous() {
        for &(year, month) in &[(2024, 2), (2024, 6), (2023, 12), (1999, 1), (2027, 2)] {
            let target = YearMonth::new(year, month);
            let grid = month_grid(target, Weekday::Mon);

            let days: Vec<u32> = grid
                .cells()
                .filter(|c| c.month == target)
                .map(|c| c.day)
                .collect();
            let expected: Vec<u32> = (1..=target.len()).collect();
            assert_eq!(days, expected);
        }
    }

    #[test]
    fn leading_filler_is_prior_month_tail() {
        let target = YearMonth::new(2024, 2);
        let grid = month_grid(target, Weekday::Mon);

        let leading: Vec<u32> = grid
            .cells()
            .filter(|c| c.month == target.pred())
            .map(|c| c.day)
            .collect();
        assert_eq!(leading.len() as u32, target.offset(Weekday::Mon));
        assert_eq!(leading, vec![29, 30, 31]);
    }

    #[test]
    fn trailing_filler_starts_at_one() {
        let target = YearMonth::new(2024, 2);
        let grid = month_grid(target, Weekday::Mon);

        let trailing: Vec<u32> = grid
            .cells()
            .filter(|c| c.month == target.succ())
            .map(|c| c.day)
            .collect();
        let last_day_count = (target.offset(Weekday::Mon) + target.len()) % 7;
        assert_eq!(trailing.len() as u32, (7 - last_day_count) % 7);
        assert_eq!(trailing, vec![1, 2, 3]);
    }

    #[test]
    fn filler_counts_hold_across_months() {
        for year in 2023..=2025 {
            for month in 1..=12 {
                let target = YearMonth::new(year, month);
                let grid = month_grid(target, Weekday::Mon);
                let offset = target.offset(Weekday::Mon);
                let last_day_count = (offset + target.len()) % 7;

                let leading: Vec<u32> = grid
                    .cells()
                    .filter(|c| c.month == target.pred())
                    .map(|c| c.day)
                    .collect();
                let expected: Vec<u32> =
                    ((target.pred().len() - offset + 1)..=target.pred().len()).collect();
                assert_eq!(leading, expected);

                let trailing: Vec<u32> = grid
                    .cells()
                    .filter(|c| c.month == target.succ())
                    .map(|c| c.day)
                    .collect();
                assert_eq!(trailing, (1..=(7 - last_day_count) % 7).collect::<Vec<u32>>());
            }
        }
    }

    #[test]
    fn cell_count_matches_row_count() {
        for month in 1..=12 {
            let grid = grid(2024, month);
            assert_eq!(grid.cells().count(), 7 * grid.weeks().len());
        }
    }

    #[test]
    fn weekdays_cycle_from_week_start() {
        let grid = month_grid(YearMonth::new(2024, 2), Weekday::Sun);
        for week in grid.weeks() {
            let days: Vec<Weekday> = week.iter().map(|c| c.weekday).collect();
            assert_eq!(
                days,
                vec![
                    Weekday::Sun,
                    Weekday::Mon,
                    Weekday::Tue,
                    Weekday::Wed,
                    Weekday::Thu,
                    Weekday::Fri,
                    Weekday::Sat,
                ]
            );
        }
    }

    #[test]
    fn sunday_week_start_moves_the_offset() {
        // Feb 1st 2024, counted from a Sunday week start, sits at index 4.
        let target = YearMonth::new(2024, 2);
        assert_eq!(target.offset(Weekday::Sun), 4);

        let grid = month_grid(target, Weekday::Sun);
        assert_eq!(grid.weeks()[0][4].day, 1);
        assert_eq!(grid.weeks()[0][4].month, target);
    }

    #[test]
    fn recompute_is_idempotent() {
        let a = month_grid(YearMonth::new(2024, 2), Weekday::Mon);
        let b = month_grid(YearMonth::new(2024, 2), Weekday::Mon);
        assert_eq!(a, b);
    }

    #[test]
    fn shift_rolls_the_year_over() {
        assert_eq!(YearMonth::new(2024, 1).shift(-1), YearMonth::new(2023, 12));
        assert_eq!(YearMonth::new(2023, 12).shift(1), YearMonth::new(2024, 1));
        assert_eq!(YearMonth::new(2024, 3).shift(-27), YearMonth::new(2021, 12));
        assert_eq!(YearMonth::new(2024, 3).shift(24), YearMonth::new(2026, 3));
    }

    #[test]
    fn pred_and_succ_are_inverse() {
        let month = YearMonth::new(2024, 1);
        assert_eq!(month.pred().succ(), month);
        assert_eq!(month.succ().pred(), month);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(YearMonth::new(2024, 2).len(), 29);
        assert_eq!(YearMonth::new(2023, 2).len(), 28);
        assert_eq!(YearMonth::new(2024, 12).len(), 31);
        assert_eq!(YearMonth::new(2024, 6).len(), 30);
    }

    #[test]
    fn displays_month_name_and_year() {
        assert_eq!(YearMonth::new(2024, 2).to_string(), "February 2024");
    }
}
