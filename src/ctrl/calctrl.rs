use crate::cmds::{Cmd, CmdResult};
use crate::ctrl::Control;
use crate::ctx::Context;

/// Handles month navigation on the calendar screen; everything else is
/// passed back to the caller.
#[derive(Default)]
pub struct CalendarController {}

impl Control for CalendarController {
    fn send_cmd(&mut self, cmd: &Cmd, context: &mut Context) -> CmdResult {
        match cmd {
            Cmd::PrevMonth => {
                context.month = context.month.pred();
                Ok(Cmd::Noop)
            }
            Cmd::NextMonth => {
                context.month = context.month.succ();
                Ok(Cmd::Noop)
            }
            Cmd::Today => {
                context.update();
                context.month = context.today.into();
                Ok(Cmd::Noop)
            }
            _ => Ok(*cmd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::YearMonth;

    #[test]
    fn month_commands_shift_the_displayed_month() {
        let mut ctrl = CalendarController::default();
        let mut ctx = Context::new();
        ctx.month = YearMonth::new(2024, 1);

        ctrl.send_cmd(&Cmd::PrevMonth, &mut ctx).unwrap();
        assert_eq!(ctx.month, YearMonth::new(2023, 12));

        ctrl.send_cmd(&Cmd::NextMonth, &mut ctx).unwrap();
        assert_eq!(ctx.month, YearMonth::new(2024, 1));
    }

    #[test]
    fn today_returns_to_the_current_month() {
        let mut ctrl = CalendarController::default();
        let mut ctx = Context::new();
        ctx.month = YearMonth::new(1999, 1);

        ctrl.send_cmd(&Cmd::Today, &mut ctx).unwrap();
        assert_eq!(ctx.month, YearMonth::from(ctx.today));
    }

    #[test]
    fn unhandled_commands_are_passed_back() {
        let mut ctrl = CalendarController::default();
        let mut ctx = Context::new();

        assert_eq!(ctrl.send_cmd(&Cmd::Exit, &mut ctx).unwrap(), Cmd::Exit);
    }
}
