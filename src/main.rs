use anyhow::Result;
use clap::Parser;
use pyo3::Python;
use std::path::PathBuf;

use pypad::editor::Editor;

/// Live Python notepad: edit on the left, see per-line results on the
/// right, re-executed on every change.
#[derive(Parser)]
#[command(name = "pypad", version)]
struct Args {
    /// File to open (created on first save if missing)
    filename: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Bring the interpreter up before the first evaluation pass
    Python::initialize();

    let mut editor = Editor::open(args.filename);
    editor.run()
}
