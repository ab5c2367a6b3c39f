use crate::ui::widgets::{Color, Styled};
use std::io::{self, Write};
use termion::color;

fn write_fg<W: Write>(w: &mut W, c: Color) -> io::Result<()> {
    match c {
        Color::Default => Ok(()),
        Color::White => write!(w, "{}", color::Fg(color::White)),
        Color::Gray => write!(w, "{}", color::Fg(color::LightBlack)),
        Color::LightGray => write!(w, "{}", color::Fg(color::Rgb(110, 110, 110))),
        Color::Teal => write!(w, "{}", color::Fg(color::Rgb(122, 190, 184))),
    }
}

fn write_bg<W: Write>(w: &mut W, c: Color) -> io::Result<()> {
    match c {
        Color::Default => Ok(()),
        Color::White => write!(w, "{}", color::Bg(color::White)),
        Color::Gray => write!(w, "{}", color::Bg(color::LightBlack)),
        Color::LightGray => write!(w, "{}", color::Bg(color::Rgb(110, 110, 110))),
        Color::Teal => write!(w, "{}", color::Bg(color::Rgb(122, 190, 184))),
    }
}

/// Prints a rendering description at the current cursor position and
/// resets all attributes afterwards.
pub fn paint<W: Write>(w: &mut W, styled: &Styled) -> io::Result<()> {
    if styled.style.is_bold() {
        write!(w, "{}", termion::style::Bold)?;
    }
    write_fg(w, styled.style.foreground())?;
    write_bg(w, styled.style.background())?;
    write!(w, "{}{}", styled.text, termion::style::Reset)?;
    write!(
        w,
        "{}{}",
        color::Fg(color::Reset),
        color::Bg(color::Reset)
    )
}

/// Positions the cursor (1-based column/row) and paints there.
pub fn paint_at<W: Write>(w: &mut W, col: u16, row: u16, styled: &Styled) -> io::Result<()> {
    write!(w, "{}", termion::cursor::Goto(col, row))?;
    paint(w, styled)
}
