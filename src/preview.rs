//! ANSI terminal preview for decoded pixel rows.

use std::io::{self, Write};

use rgb::RGB8;

/// Render decoded rows to `out` with 24-bit background-color escapes.
///
/// `rows` is expected in the decoder's stored bottom-up order, so rendering
/// walks it from the end and the visual top row prints first. Each pixel is
/// drawn as two background-colored spaces; every line ends with a color
/// reset.
pub fn render_rows<W: Write>(out: &mut W, rows: &[Vec<RGB8>]) -> io::Result<()> {
    for row in rows.iter().rev() {
        for px in row {
            write!(out, "\x1b[48;2;{};{};{}m  ", px.r, px.g, px.b)?;
        }
        writeln!(out, "\x1b[0m")?;
    }
    Ok(())
}

/// Render decoded rows to stdout.
pub fn print_rows(rows: &[Vec<RGB8>]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    render_rows(&mut lock, rows)
}
