use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType},
};

use super::Editor;

/// Width of the line-number gutter in the source pane.
const GUTTER: usize = 4;

/// Clip a line to a pane width, counting chars as single cells.
fn clip(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

/// Redraw both panes and the status bar, then park the terminal cursor on
/// the buffer cursor.
pub(super) fn draw(editor: &Editor) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let (cols, rows) = (cols as usize, rows as usize);
    if rows < 2 || cols < GUTTER + 4 {
        return Ok(());
    }
    let text_rows = rows - 1;
    let split = cols / 2;
    let source_width = split.saturating_sub(GUTTER);
    let output_width = cols.saturating_sub(split + 1);

    let mut out = io::stdout();
    queue!(out, Hide)?;

    for screen_row in 0..text_rows {
        let idx = editor.scroll + screen_row;
        queue!(out, MoveTo(0, screen_row as u16), Clear(ClearType::CurrentLine))?;
        if idx < editor.buffer.line_count() {
            let source = clip(&editor.buffer.lines()[idx], source_width);
            let result = editor.output.get(idx).map(String::as_str).unwrap_or("");
            queue!(
                out,
                Print(format!("{:>3} ", idx + 1)),
                Print(&source),
                MoveTo(split as u16, screen_row as u16),
                Print("│"),
                Print(clip(result, output_width)),
            )?;
        } else {
            queue!(out, MoveTo(split as u16, screen_row as u16), Print("│"))?;
        }
    }

    // Reverse-video status bar on the last row
    let status = format!(
        " {}{}  {}  Ctrl+S save  Ctrl+Q quit",
        editor.display_name(),
        if editor.dirty { " [+]" } else { "" },
        editor.status,
    );
    queue!(
        out,
        MoveTo(0, text_rows as u16),
        SetAttribute(Attribute::Reverse),
        Print(format!("{:<width$}", clip(&status, cols), width = cols)),
        SetAttribute(Attribute::Reset),
    )?;

    // Park the cursor on the buffer position, clipped to the source pane
    let cursor_x = (GUTTER + editor.buffer.col).min(split.saturating_sub(1));
    let cursor_y = editor.buffer.row.saturating_sub(editor.scroll).min(text_rows - 1);
    queue!(out, MoveTo(cursor_x as u16, cursor_y as u16), Show)?;
    out.flush()?;
    Ok(())
}
