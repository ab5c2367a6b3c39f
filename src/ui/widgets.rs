use crate::calendar::{CalendarDate, YearMonth};
use crate::gesture::MonthSwipe;
use chrono::Weekday;

/// Palette selector; the terminal layer decides the actual escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Default,
    White,
    Gray,
    LightGray,
    Teal,
}

impl Default for Color {
    fn default() -> Self {
        Color::Default
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    fg: Color,
    bg: Color,
    bold: bool,
}

impl Style {
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn foreground(&self) -> Color {
        self.fg
    }

    pub fn background(&self) -> Color {
        self.bg
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }
}

/// A rendering description: what to print and how. Hooks produce these;
/// they never touch the terminal themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Styled {
    pub text: String,
    pub style: Style,
}

impl Styled {
    pub fn new<S: Into<String>>(text: S) -> Styled {
        Styled {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Styled {
        self.style = style;
        self
    }
}

/// The named rendering hooks of the month pane, each a pure function from
/// cell data to a rendering description.
pub struct GridWidgets {
    pub header: fn(YearMonth, YearMonth) -> Styled,
    pub weekday_label: fn(Weekday) -> Styled,
    pub day: fn(&CalendarDate, &CalendarDate) -> Styled,
    pub prior_month_day: fn(&CalendarDate) -> Styled,
    pub next_month_day: fn(&CalendarDate) -> Styled,
}

impl Default for GridWidgets {
    fn default() -> GridWidgets {
        GridWidgets {
            header: default_header,
            weekday_label: default_weekday_label,
            day: default_day,
            // Next-month filler borrows the prior-month look.
            prior_month_day: default_adjacent_day,
            next_month_day: default_adjacent_day,
        }
    }
}

pub fn default_header(month: YearMonth, today_month: YearMonth) -> Styled {
    let style = if month == today_month {
        Style::default().bold()
    } else {
        Style::default()
    };

    Styled::new(month.to_string()).style(style)
}

pub fn default_weekday_label(day: Weekday) -> Styled {
    // "Mon" -> "M"
    let letter = day.to_string().chars().next().unwrap_or(' ');
    Styled::new(letter.to_string()).style(Style::default().fg(Color::Gray))
}

pub fn default_day(date: &CalendarDate, today: &CalendarDate) -> Styled {
    let text = format!("{:>2}", date.day);

    if date == today {
        return Styled::new(text).style(Style::default().fg(Color::White).bg(Color::Teal).bold());
    }

    let has_passed = date.month == today.month && date.day < today.day;
    let style = if has_passed {
        Style::default().fg(Color::Gray)
    } else {
        Style::default()
    };

    Styled::new(text).style(style)
}

pub fn default_adjacent_day(date: &CalendarDate) -> Styled {
    Styled::new(format!("{:>2}", date.day)).style(Style::default().fg(Color::LightGray))
}

/// Month navigation callbacks, bundled per render. Swipes default to the
/// click behaviour.
pub struct Actions<'a> {
    pub on_clicked_previous_month: Box<dyn FnMut() + 'a>,
    pub on_clicked_next_month: Box<dyn FnMut() + 'a>,
    pub on_swiped_previous_month: Box<dyn FnMut() + 'a>,
    pub on_swiped_next_month: Box<dyn FnMut() + 'a>,
}

impl<'a> Actions<'a> {
    pub fn from_clicks<P, N>(prev: P, next: N) -> Actions<'a>
    where
        P: FnMut() + Clone + 'a,
        N: FnMut() + Clone + 'a,
    {
        Actions {
            on_clicked_previous_month: Box::new(prev.clone()),
            on_clicked_next_month: Box::new(next.clone()),
            on_swiped_previous_month: Box::new(prev),
            on_swiped_next_month: Box::new(next),
        }
    }

    pub fn clicked_previous_month(&mut self) {
        (self.on_clicked_previous_month)()
    }

    pub fn clicked_next_month(&mut self) {
        (self.on_clicked_next_month)()
    }

    pub fn swiped(&mut self, swipe: MonthSwipe) {
        match swipe {
            MonthSwipe::Previous => (self.on_swiped_previous_month)(),
            MonthSwipe::Next => (self.on_swiped_next_month)(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::Cell;

    fn cell(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_naive(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    #[test]
    fn today_is_highlighted() {
        let today = cell(2024, 2, 15);
        let styled = default_day(&today, &today);
        assert_eq!(styled.style.background(), Color::Teal);
        assert!(styled.style.is_bold());
    }

    #[test]
    fn passed_days_of_the_current_month_are_dimmed() {
        let today = cell(2024, 2, 15);
        assert_eq!(
            default_day(&cell(2024, 2, 3), &today).style.foreground(),
            Color::Gray
        );
        assert_eq!(
            default_day(&cell(2024, 2, 20), &today).style.foreground(),
            Color::Default
        );
    }

    #[test]
    fn adjacent_days_are_muted() {
        let styled = default_adjacent_day(&cell(2024, 1, 31));
        assert_eq!(styled.style.foreground(), Color::LightGray);
    }

    #[test]
    fn header_is_bold_for_the_current_month() {
        let feb = YearMonth::new(2024, 2);
        assert!(default_header(feb, feb).style.is_bold());
        assert!(!default_header(feb.pred(), feb).style.is_bold());
        assert_eq!(default_header(feb, feb).text, "February 2024");
    }

    #[test]
    fn swipes_default_to_the_click_behaviour() {
        let month = Cell::new(YearMonth::new(2024, 1));
        let mut actions = Actions::from_clicks(
            || month.set(month.get().pred()),
            || month.set(month.get().succ()),
        );

        actions.swiped(MonthSwipe::Previous);
        assert_eq!(month.get(), YearMonth::new(2023, 12));

        actions.swiped(MonthSwipe::Next);
        actions.clicked_next_month();
        assert_eq!(month.get(), YearMonth::new(2024, 2));
    }
}
