mod buffer;
mod draw;

pub use buffer::TextBuffer;

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::eval;

/// Two-pane live notepad: source on the left, per-line evaluation output
/// on the right. The whole buffer is re-executed on every text change,
/// synchronously on this thread, so passes never overlap.
pub struct Editor {
    buffer: TextBuffer,
    /// Rendered output, one line per buffer line
    output: Vec<String>,
    filename: Option<PathBuf>,
    /// Shared scroll offset of both panes
    scroll: usize,
    status: String,
    dirty: bool,
}

impl Editor {
    /// Open a file, or start empty. A missing or unreadable file is not
    /// an error: the notepad starts blank and Ctrl+S will create it.
    pub fn open(filename: Option<PathBuf>) -> Self {
        let text = filename
            .as_deref()
            .and_then(|path| fs::read_to_string(path).ok())
            .unwrap_or_default();
        Self {
            buffer: TextBuffer::from_text(&text),
            output: Vec::new(),
            filename,
            scroll: 0,
            status: String::new(),
            dirty: false,
        }
    }

    fn display_name(&self) -> &str {
        self.filename
            .as_deref()
            .and_then(|p| p.to_str())
            .unwrap_or("[scratch]")
    }

    /// Run the editor until Ctrl+Q. Terminal state is restored on every
    /// exit path, including evaluation or draw errors.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let result = self.event_loop();
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        self.reevaluate();
        self.refresh()?;
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if !self.handle_key(key)? {
                        return Ok(());
                    }
                    self.refresh()?;
                }
                Event::Resize(..) => self.refresh()?,
                _ => {}
            }
        }
    }

    /// Handle one key press. Returns false when the editor should exit.
    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let mut changed = true;
        match (key.code, ctrl) {
            (KeyCode::Char('q'), true) => return Ok(false),
            (KeyCode::Char('s'), true) => {
                if let Err(e) = self.save() {
                    self.status = format!("save failed: {e}");
                }
                changed = false;
            }
            (KeyCode::Char(c), false) => self.buffer.insert_char(c),
            (KeyCode::Tab, _) => self.buffer.insert_tab(),
            (KeyCode::Enter, _) => self.buffer.insert_newline(),
            (KeyCode::Backspace, _) => self.buffer.backspace(),
            (KeyCode::Delete, _) => self.buffer.delete(),
            _ => {
                changed = false;
                match key.code {
                    KeyCode::Left => self.buffer.move_left(),
                    KeyCode::Right => self.buffer.move_right(),
                    KeyCode::Up => self.buffer.move_up(),
                    KeyCode::Down => self.buffer.move_down(),
                    KeyCode::Home => self.buffer.move_home(),
                    KeyCode::End => self.buffer.move_end(),
                    KeyCode::PageUp => self.buffer.page_up(self.page_size()?),
                    KeyCode::PageDown => self.buffer.page_down(self.page_size()?),
                    _ => {}
                }
            }
        }
        if changed {
            self.dirty = true;
            self.status.clear();
            self.reevaluate();
        }
        Ok(true)
    }

    fn page_size(&self) -> Result<usize> {
        let (_, rows) = terminal::size()?;
        Ok((rows as usize).saturating_sub(1).max(1))
    }

    /// Re-run the whole buffer and cache the rendered output lines. An
    /// interpreter-level failure (not a fault in the user's code, which
    /// renders as blank) is surfaced on the status bar instead of
    /// tearing the editor down.
    fn reevaluate(&mut self) {
        match eval::evaluate_text(&self.buffer.text()) {
            Ok(rendered) => {
                self.output = rendered.split('\n').map(str::to_string).collect();
            }
            Err(e) => {
                self.output = vec![String::new(); self.buffer.line_count()];
                self.status = format!("eval failed: {e}");
            }
        }
    }

    fn save(&mut self) -> Result<()> {
        // No filename means nowhere to save; mirror the original and
        // treat Ctrl+S as a no-op.
        if let Some(path) = &self.filename {
            fs::write(path, self.buffer.text())?;
            self.dirty = false;
            self.status = "saved".to_string();
        }
        Ok(())
    }

    /// Keep the cursor visible, then redraw both panes.
    fn refresh(&mut self) -> Result<()> {
        let page = self.page_size()?;
        if self.buffer.row < self.scroll {
            self.scroll = self.buffer.row;
        } else if self.buffer.row >= self.scroll + page {
            self.scroll = self.buffer.row + 1 - page;
        }
        draw::draw(self)
    }
}
