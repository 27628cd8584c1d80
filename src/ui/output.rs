//! Prints rendered ratatui buffers into the normal scrollback instead of an
//! alternate screen, so `advise` output can be piped or scrolled.

use crossterm::{
    queue,
    style::{Attribute, Color as TermColor, Print, SetAttribute, SetForegroundColor},
    tty::IsTty,
};
use ratatui::{
    buffer::{Buffer, Cell},
    style::{Color, Modifier},
    text::Span,
};
use std::io::{self, Write};

pub const DEFAULT_WIDTH: u16 = 100;
const MIN_WIDTH: u16 = 80;
const MAX_WIDTH: u16 = 120;

/// Terminal width clamped to a readable range; `DEFAULT_WIDTH` when stdout
/// is not a terminal.
pub fn output_width() -> u16 {
    if !io::stdout().is_tty() {
        return DEFAULT_WIDTH;
    }
    crossterm::terminal::size()
        .map(|(w, _)| w.clamp(MIN_WIDTH, MAX_WIDTH))
        .unwrap_or(DEFAULT_WIDTH)
}

/// Visible cells of row `y`, skipping cells hidden behind wide graphemes and
/// dropping trailing blanks.
fn row_cells(buf: &Buffer, y: u16) -> Vec<&Cell> {
    let area = buf.area;
    let mut cells = Vec::new();
    let mut x = area.x;
    while x < area.right() {
        let Some(cell) = buf.cell((x, y)) else {
            break;
        };
        cells.push(cell);
        x += (Span::raw(cell.symbol()).width() as u16).max(1);
    }
    while cells.last().is_some_and(|c| c.symbol().trim().is_empty()) {
        cells.pop();
    }
    cells
}

/// Plain text of each buffer row.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    (buf.area.top()..buf.area.bottom())
        .map(|y| row_cells(buf, y).iter().map(|c| c.symbol()).collect())
        .collect()
}

/// Write the buffer row by row. Colors and bold are emitted only when
/// `styled` is set.
pub fn write_buffer<W: Write>(out: &mut W, buf: &Buffer, styled: bool) -> io::Result<()> {
    for y in buf.area.top()..buf.area.bottom() {
        let mut current: Option<(Color, bool)> = None;
        for cell in row_cells(buf, y) {
            if styled {
                let style = (cell.fg, cell.modifier.contains(Modifier::BOLD));
                if current != Some(style) {
                    queue!(out, SetAttribute(Attribute::Reset))?;
                    if style.0 != Color::Reset {
                        queue!(out, SetForegroundColor(term_color(style.0)))?;
                    }
                    if style.1 {
                        queue!(out, SetAttribute(Attribute::Bold))?;
                    }
                    current = Some(style);
                }
            }
            queue!(out, Print(cell.symbol()))?;
        }
        if styled && current.is_some() {
            queue!(out, SetAttribute(Attribute::Reset))?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

/// Print to stdout, styled when stdout is a terminal.
pub fn print_buffer(buf: &Buffer) -> io::Result<()> {
    let stdout = io::stdout();
    let styled = stdout.is_tty();
    let mut out = stdout.lock();
    write_buffer(&mut out, buf, styled)
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}
