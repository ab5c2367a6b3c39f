use crate::api::{MockFocusApi, MockPerfilApi};
use crate::cmds::{Cmd, CmdError, CmdResult};
use crate::config::Config;
use crate::ctrl::{CalendarController, Control};
use crate::ctx::Context;
use crate::events::Event;
use crate::gesture::{month_swipe, Fling, MonthSwipe};
use crate::nav::{dispatch, Gesture, Screen};
use crate::ui::screens;
use crate::ui::widgets::{Actions, GridWidgets};
use std::cell::Cell;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use termion::event::{Event as TermEvent, Key, MouseButton, MouseEvent};

/// Displacement up to which a press/release pair still counts as a tap.
const TAP_SLOP_CELLS: i32 = 1;
const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(400);

struct Press {
    x: u16,
    y: u16,
    at: Instant,
}

pub struct App<'a> {
    config: &'a Config,
    ctx: Context,
    calctrl: CalendarController,
    widgets: GridWidgets,
    focus: MockFocusApi,
    perfil: MockPerfilApi,
    press: Option<Press>,
    last_tap: Option<Press>,
    quit: bool,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config) -> App<'a> {
        App {
            config,
            ctx: Context::new(),
            calctrl: CalendarController::default(),
            widgets: GridWidgets::default(),
            focus: MockFocusApi::new(),
            perfil: MockPerfilApi::new(),
            press: None,
            last_tap: None,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn handle(&mut self, event: Event) -> CmdResult {
        match event {
            Event::Tick => {
                self.ctx.update();
                Ok(Cmd::Noop)
            }
            Event::Input(TermEvent::Key(key)) => self.handle_key(key),
            Event::Input(TermEvent::Mouse(mouse)) => self.handle_mouse(mouse),
            Event::Input(_) => Ok(Cmd::Noop),
        }
    }

    pub fn draw<W: Write>(&self, w: &mut W) -> io::Result<()> {
        screens::draw(
            w,
            &self.ctx,
            self.config,
            &self.widgets,
            &self.focus,
            &self.perfil,
        )
    }

    fn handle_key(&mut self, key: Key) -> CmdResult {
        match self.config.key_map.get(&key) {
            Some(Cmd::Exit) => {
                self.quit = true;
                Ok(Cmd::Noop)
            }
            Some(Cmd::Goto(screen)) => {
                log::debug!("key routes to {}", screen);
                self.ctx.screen = *screen;
                Ok(Cmd::Noop)
            }
            Some(cmd) => self.calctrl.send_cmd(cmd, &mut self.ctx),
            None => Err(CmdError::new(format!("could not find map for '{:?}'", key))),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> CmdResult {
        match mouse {
            MouseEvent::Press(MouseButton::Left, x, y) => {
                self.press = Some(Press {
                    x,
                    y,
                    at: Instant::now(),
                });
                Ok(Cmd::Noop)
            }
            MouseEvent::Release(x, y) => self.handle_release(x, y),
            _ => Ok(Cmd::Noop),
        }
    }

    fn handle_release(&mut self, x: u16, y: u16) -> CmdResult {
        let press = match self.press.take() {
            Some(press) => press,
            None => return Ok(Cmd::Noop),
        };

        let dx = i32::from(x) - i32::from(press.x);
        let dy = i32::from(y) - i32::from(press.y);
        if dx.abs() <= TAP_SLOP_CELLS && dy.abs() <= TAP_SLOP_CELLS {
            return self.handle_tap(x, y);
        }

        let fling = Fling::between(
            (press.x.into(), press.y.into()),
            (x.into(), y.into()),
            press.at.elapsed(),
        );

        // The month pane consumes horizontal swipes itself; everything else
        // goes through the screen transition table.
        if self.ctx.screen == Screen::Calendar {
            if let Some(swipe) = month_swipe(fling.vx, &self.config.swipe) {
                self.apply_month_swipe(swipe);
                return Ok(Cmd::Noop);
            }
        }

        if let Some(target) = dispatch(self.ctx.screen, &Gesture::Fling(fling), &self.config.swipe)
        {
            self.ctx.screen = target;
        }

        Ok(Cmd::Noop)
    }

    fn handle_tap(&mut self, x: u16, y: u16) -> CmdResult {
        if let Some(last) = self.last_tap.take() {
            let near = (i32::from(x) - i32::from(last.x)).abs() <= TAP_SLOP_CELLS
                && (i32::from(y) - i32::from(last.y)).abs() <= TAP_SLOP_CELLS;

            if near && last.at.elapsed() <= DOUBLE_TAP_WINDOW {
                if let Some(target) =
                    dispatch(self.ctx.screen, &Gesture::DoubleTap, &self.config.swipe)
                {
                    self.ctx.screen = target;
                }
                return Ok(Cmd::Noop);
            }
        }

        self.last_tap = Some(Press {
            x,
            y,
            at: Instant::now(),
        });

        if self.ctx.screen == Screen::Calendar && y == screens::TITLE_ROW {
            let month = Cell::new(self.ctx.month);
            let mut actions = Actions::from_clicks(
                || month.set(month.get().pred()),
                || month.set(month.get().succ()),
            );

            if x <= screens::ARROW_LEFT_COL + 1 {
                actions.clicked_previous_month();
            } else if x >= screens::ARROW_RIGHT_COL - 1 {
                actions.clicked_next_month();
            }

            self.ctx.month = month.get();
        }

        Ok(Cmd::Noop)
    }

    fn apply_month_swipe(&mut self, swipe: MonthSwipe) {
        let month = Cell::new(self.ctx.month);
        let mut actions = Actions::from_clicks(
            || month.set(month.get().pred()),
            || month.set(month.get().succ()),
        );

        actions.swiped(swipe);
        self.ctx.month = month.get();
    }
}
