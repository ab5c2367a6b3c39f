use crate::api::{FocusApi, PerfilApi};
use crate::calendar::month_grid;
use crate::config::Config;
use crate::ctx::Context;
use crate::nav::Screen;
use crate::ui::monthpane::MonthPane;
use crate::ui::paint::{paint, paint_at};
use crate::ui::widgets::{Color, GridWidgets, Style, Styled};
use itertools::Itertools;
use std::io::{self, Write};

/// Row of the month pane title; the arrow hot zones live on it.
pub const TITLE_ROW: u16 = 1;
pub const ARROW_LEFT_COL: u16 = 1;
pub const ARROW_RIGHT_COL: u16 = 21;

pub fn draw<W: Write>(
    w: &mut W,
    ctx: &Context,
    config: &Config,
    widgets: &GridWidgets,
    focus: &dyn FocusApi,
    perfil: &dyn PerfilApi,
) -> io::Result<()> {
    write!(w, "{}", termion::clear::All)?;

    match ctx.screen {
        Screen::Index => draw_index(w),
        Screen::Perfil => draw_perfil(w, perfil),
        Screen::FocusSelector => draw_focus_selector(w, focus),
        Screen::FocusSession => draw_focus_session(w, focus),
        Screen::Calendar => draw_calendar(w, ctx, config, widgets),
    }?;

    w.flush()
}

fn title(text: &str) -> Styled {
    Styled::new(text).style(Style::default().bold())
}

fn hint(text: &str) -> Styled {
    Styled::new(text).style(Style::default().fg(Color::Gray))
}

fn draw_index<W: Write>(w: &mut W) -> io::Result<()> {
    paint_at(w, 2, 1, &title("AgilUGR"))?;
    paint_at(w, 2, 3, &Styled::new("[2] Perfil"))?;
    paint_at(w, 2, 4, &Styled::new("[3] Focus mode"))?;
    paint_at(w, 2, 5, &Styled::new("[5] Calendario"))?;
    paint_at(
        w,
        2,
        7,
        &hint("desliza, haz doble clic o pulsa una tecla - q para salir"),
    )
}

fn draw_perfil<W: Write>(w: &mut W, perfil: &dyn PerfilApi) -> io::Result<()> {
    let profile = perfil.profile();

    paint_at(w, 2, 1, &title("Perfil"))?;
    paint_at(w, 2, 3, &Styled::new(profile.name))?;
    paint_at(w, 2, 4, &Styled::new(profile.degree))?;
    paint_at(
        w,
        2,
        5,
        &Styled::new(format!(
            "Asignaturas: {}",
            profile.courses.iter().join(", ")
        )),
    )?;
    paint_at(w, 2, 7, &hint("desliza hacia abajo para volver"))
}

fn draw_focus_selector<W: Write>(w: &mut W, focus: &dyn FocusApi) -> io::Result<()> {
    paint_at(w, 2, 1, &title("Focus mode"))?;

    for (i, session) in focus.sessions().iter().enumerate() {
        let line = format!(
            "{} - {} min (descanso {} min)",
            session.name, session.duration_min, session.break_min
        );
        paint_at(w, 2, 3 + i as u16, &Styled::new(line))?;
    }

    paint_at(w, 2, 8, &hint("[4] entrar en la sesion"))
}

fn draw_focus_session<W: Write>(w: &mut W, focus: &dyn FocusApi) -> io::Result<()> {
    paint_at(w, 2, 1, &title("Sesion de focus"))?;

    match focus.current() {
        Some(session) => {
            paint_at(
                w,
                2,
                3,
                &Styled::new(format!("{} en curso", session.name))
                    .style(Style::default().fg(Color::Teal).bold()),
            )?;
            paint_at(
                w,
                2,
                4,
                &Styled::new(format!("{} minutos restantes", session.duration_min)),
            )
        }
        None => paint_at(w, 2, 3, &hint("ninguna sesion activa")),
    }
}

fn draw_calendar<W: Write>(
    w: &mut W,
    ctx: &Context,
    config: &Config,
    widgets: &GridWidgets,
) -> io::Result<()> {
    let grid = month_grid(ctx.month, config.week_start);
    let pane = MonthPane::new(&grid, ctx.today_cell(), widgets);

    paint_at(w, ARROW_LEFT_COL, TITLE_ROW, &Styled::new("<"))?;
    paint_at(w, 4, TITLE_ROW, &pane.title())?;
    paint_at(w, ARROW_RIGHT_COL, TITLE_ROW, &Styled::new(">"))?;

    for (i, label) in pane.label_row().into_iter().enumerate() {
        paint_at(w, 2 + i as u16 * MonthPane::CELL_WIDTH, 3, &label)?;
    }

    for (row, week) in pane.rows().into_iter().enumerate() {
        for (slot, cell) in week.into_iter().enumerate() {
            paint_at(
                w,
                1 + slot as u16 * MonthPane::CELL_WIDTH,
                4 + row as u16,
                &cell,
            )?;
        }
    }

    paint_at(w, 1, 11, &hint("h/l mes anterior/siguiente - t hoy"))
}

/// One-shot plain rendering of the current month, for non-interactive use.
pub fn show<W: Write>(
    w: &mut W,
    ctx: &Context,
    config: &Config,
    widgets: &GridWidgets,
) -> io::Result<()> {
    let grid = month_grid(ctx.month, config.week_start);
    let pane = MonthPane::new(&grid, ctx.today_cell(), widgets);

    write!(w, "   ")?;
    paint(w, &pane.title())?;
    writeln!(w)?;

    for label in pane.label_row() {
        write!(w, " ")?;
        paint(w, &label)?;
        write!(w, " ")?;
    }
    writeln!(w)?;

    for week in pane.rows() {
        for cell in week {
            paint(w, &cell)?;
            write!(w, " ")?;
        }
        writeln!(w)?;
    }

    w.flush()
}
